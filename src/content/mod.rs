//! Chapter content: data model and the fixed-slot content store.

pub mod store;
pub mod types;

pub use store::{ContentLoader, ContentStore};
pub use types::{Boss, Challenge, Chapter, Demo, Topic};
