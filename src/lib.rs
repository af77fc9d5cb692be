pub mod config;
pub mod dataset;
pub mod error;
pub mod extract;
pub mod filename;
pub mod output;
pub mod parser;
pub mod plot;
pub mod record;
pub mod states;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use dataset::Dataset;
pub use error::{FarsError, Result};
pub use filename::format_filename;
pub use parser::load_file;
