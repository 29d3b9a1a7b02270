//! Personal income tax on the resident progressive scale, with a CSV record file.

pub mod cmd;
pub mod core;
pub mod store;
mod utils;
