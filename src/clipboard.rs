use log::{debug, info};
use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Command '{tool}' not found. Please install {tool} to copy to the clipboard.")]
    ToolMissing { tool: String },
    #[error("Clipboard copy not supported on this platform.")]
    Unsupported,
    #[error("Copying to the clipboard with '{tool}' failed: {reason}")]
    Failed { tool: String, reason: String },
}

impl ClipboardError {
    /// Missing tools and unsupported platforms are warnings, not failures.
    pub fn is_best_effort(&self) -> bool {
        matches!(self, ClipboardError::ToolMissing { .. } | ClipboardError::Unsupported)
    }
}

pub trait ClipboardSink {
    fn set_text(&self, text: String) -> Result<(), ClipboardError>;
}

/// Pipes the text into a platform copy utility such as `pbcopy` or `xclip`.
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: &str, args: &[&str]) -> Self {
        Self {
            program: program.to_string(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }

    fn failed(&self, reason: impl ToString) -> ClipboardError {
        ClipboardError::Failed { tool: self.program.clone(), reason: reason.to_string() }
    }
}

impl ClipboardSink for CommandClipboard {
    fn set_text(&self, text: String) -> Result<(), ClipboardError> {
        debug!("Copying {} bytes with {}", text.len(), self.program);
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => ClipboardError::ToolMissing { tool: self.program.clone() },
                _ => self.failed(e),
            })?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(text.as_bytes()).map_err(|e| self.failed(e))?;
        }
        let status = child.wait().map_err(|e| self.failed(e))?;
        if !status.success() {
            return Err(self.failed(format!("exited with {}", status)));
        }
        info!("Copied {} bytes to the clipboard via {}", text.len(), self.program);
        Ok(())
    }
}

/// The in-process clipboard. Used when no copy utility is installed.
pub struct NativeClipboard;

impl ClipboardSink for NativeClipboard {
    fn set_text(&self, text: String) -> Result<(), ClipboardError> {
        let res = arboard::Clipboard::new().and_then(|mut c| set_and_hold(&mut c, text));
        res.map_err(|e| ClipboardError::Failed { tool: "native clipboard".to_string(), reason: e.to_string() })
    }
}

/// X11 and Wayland selections live in the owning process, so on Linux the
/// contents are served until another application takes them over.
#[cfg(target_os = "linux")]
fn set_and_hold(clipboard: &mut arboard::Clipboard, text: String) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    info!("Holding clipboard contents until another application takes them");
    clipboard.set().wait().text(text)
}

#[cfg(not(target_os = "linux"))]
fn set_and_hold(clipboard: &mut arboard::Clipboard, text: String) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

/// Tries `primary`; when its tool is missing, tries `fallback`. If the fallback
/// also fails, the primary's missing-tool error is returned.
pub struct FallbackClipboard {
    primary: Box<dyn ClipboardSink>,
    fallback: Box<dyn ClipboardSink>,
}

impl FallbackClipboard {
    pub fn new(primary: Box<dyn ClipboardSink>, fallback: Box<dyn ClipboardSink>) -> Self {
        Self { primary, fallback }
    }
}

impl ClipboardSink for FallbackClipboard {
    fn set_text(&self, text: String) -> Result<(), ClipboardError> {
        match self.primary.set_text(text.clone()) {
            Err(missing @ ClipboardError::ToolMissing { .. }) => {
                debug!("{}; trying fallback clipboard", missing);
                self.fallback.set_text(text).map_err(|err| {
                    debug!("Fallback clipboard failed: {}", err);
                    missing
                })
            }
            other => other,
        }
    }
}

pub struct UnsupportedClipboard;

impl ClipboardSink for UnsupportedClipboard {
    fn set_text(&self, _text: String) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unsupported)
    }
}

pub fn system_clipboard() -> Box<dyn ClipboardSink> {
    if cfg!(target_os = "macos") {
        Box::new(CommandClipboard::new("pbcopy", &[]))
    } else if cfg!(target_os = "linux") {
        Box::new(FallbackClipboard::new(
            Box::new(CommandClipboard::new("xclip", &["-selection", "clipboard"])),
            Box::new(NativeClipboard),
        ))
    } else if cfg!(target_os = "windows") {
        Box::new(CommandClipboard::new("clip", &[]))
    } else {
        Box::new(UnsupportedClipboard)
    }
}

#[cfg(test)]
#[path = "clipboard_tests.rs"]
mod tests;
