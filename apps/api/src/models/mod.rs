pub mod chat;
pub mod interview;
pub mod language;

pub use chat::{ChatTurn, Role};
pub use interview::InterviewType;
pub use language::Language;
