//! Core progression engine: answer grading, the in-chapter state machine,
//! and the top-level engine the UI drives.

pub mod answer;
pub mod engine;
pub mod session;

pub use answer::{evaluate, xp_reward, Answer};
pub use engine::{Engine, Snapshot, ViewMode};
pub use session::{ChapterSession, SessionMode};
