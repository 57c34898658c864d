//! High-level API binding the in-memory prompt state to its store file.

mod error;
mod store;

pub use error::StoreError;
pub use store::{LoadOutcome, PromptPad};
