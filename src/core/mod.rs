pub mod state;
pub mod storage;
pub mod text;
pub mod utils;
