pub mod cli;
pub mod config;
pub mod fs;
pub mod discovery;
pub mod selection;
pub mod console;
pub mod emission;
pub mod clipboard;
pub mod opener;
pub mod tokenizer;
pub mod logging;
pub mod error;
pub mod app;

pub use app::{run_app, Deps, Outcome, Stats};
pub use cli::Args;
pub use config::CollectorConfig;
pub use error::CollectorError;
