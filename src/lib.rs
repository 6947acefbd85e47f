pub mod config;
pub mod error;
pub mod flags;
pub mod highlight;
pub mod parse;
pub mod process;
pub mod shell;
