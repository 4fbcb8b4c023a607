//! Various configuration options to control parsing and rendering

mod parse;
mod write_options;

pub use parse::ParsingMode;
pub use write_options::WriteOptions;
