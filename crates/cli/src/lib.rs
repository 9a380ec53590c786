pub mod check;
pub mod checks;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod file_size;
pub mod output;
pub mod report;
pub mod runner;

pub use check::{Check, CheckContext, CheckItem, CheckOutput, CheckResult, ItemStatus};
pub use cli::{Cli, OutputFormat};
pub use config::Config;
pub use document::Document;
pub use error::{Error, ExitCode, Result};
pub use runner::CheckRunner;
