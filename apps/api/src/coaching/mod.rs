pub mod handlers;
pub mod prompts;
