pub mod api;
pub mod cli;
pub mod commands;
pub mod core;

pub use api::{LoadOutcome, PromptPad, StoreError};
pub use crate::core::state::{Prompt, SaveError, SaveOutcome};
