pub mod handlers;
pub mod prompts;
pub mod scores;
pub mod tracker;
