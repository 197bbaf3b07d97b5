//! Input handling module

mod file_reader;
mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;
