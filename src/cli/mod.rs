pub mod args;
pub mod commands;
pub mod output;

pub use commands::execute;
