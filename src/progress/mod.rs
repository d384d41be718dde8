//! Player progress: ledger, rewards, unlock policy, persistence.

pub mod ledger;
pub mod meta;
pub mod persistence;
pub mod unlock;

pub use ledger::{Award, ProgressLedger};
pub use meta::{Meta, Settings};
pub use persistence::{hydrate, FileStore, NullStore, ProgressStore};
pub use unlock::can_open;
