use log::info;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Opening files not supported on this platform.")]
    Unsupported,
    #[error("Failed to open {path} with '{program}': {source}")]
    Failed {
        program: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub trait FileOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError>;
}

/// Launches `program [args..] <path>` without waiting for it.
pub struct CommandOpener {
    program: String,
    args: Vec<String>,
}

impl CommandOpener {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl FileOpener for CommandOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError> {
        Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .spawn()
            .map_err(|source| OpenError::Failed {
                program: self.program.clone(),
                path: path.to_path_buf(),
                source,
            })?;
        info!("Opened {} with {}", path.display(), self.program);
        Ok(())
    }
}

pub struct UnsupportedOpener;

impl FileOpener for UnsupportedOpener {
    fn open(&self, _path: &Path) -> Result<(), OpenError> {
        Err(OpenError::Unsupported)
    }
}

pub fn system_opener() -> Box<dyn FileOpener> {
    if cfg!(target_os = "macos") {
        Box::new(CommandOpener::new("open", &[]))
    } else if cfg!(target_os = "linux") {
        Box::new(CommandOpener::new("xdg-open", &[]))
    } else if cfg!(target_os = "windows") {
        // the empty string is the window title `start` expects before a quoted path
        Box::new(CommandOpener::new("cmd", &["/C", "start", ""]))
    } else {
        Box::new(UnsupportedOpener)
    }
}
