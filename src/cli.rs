use crate::config::DEFAULT_EXTENSIONS;
use clap::builder::PossibleValuesParser;
use clap::{ArgAction, Parser};
use std::ffi::OsString;

/// Flags also accepted with a single leading dash, e.g. `-all`.
pub const SINGLE_DASH_FLAGS: &[&str] = &["extract", "all", "open", "copy", "output"];

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "collector")]
#[command(about = "Collect files by extension from the current directory and concatenate them into one text file or the clipboard.")]
pub struct Args {
    /// File extensions to collect
    #[arg(value_parser = PossibleValuesParser::new(DEFAULT_EXTENSIONS.iter().copied()))]
    pub extensions: Vec<String>,

    /// Extract without asking for confirmation
    #[arg(long)]
    pub extract: bool,

    /// Collect every discovered file without asking for indices
    #[arg(long)]
    pub all: bool,

    /// Open the generated file in the default application
    #[arg(long)]
    pub open: bool,

    /// Copy the content to the clipboard instead of writing a file
    #[arg(long)]
    pub copy: bool,

    /// Output file name; `.txt` is appended when missing
    #[arg(short, long)]
    pub output: Option<String>,

    /// Increase diagnostic logging on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn parse_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::parse_from(normalize_single_dash_flags(args))
    }
}

/// Rewrites `-all` style flags to `--all`, and `-output=x` to `--output=x`, so
/// clap does not read them as bundled short options.
pub fn normalize_single_dash_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str().and_then(|s| s.strip_prefix('-')) {
            Some(rest) if SINGLE_DASH_FLAGS.contains(&rest.split('=').next().unwrap_or(rest)) => {
                OsString::from(format!("--{}", rest))
            }
            _ => arg,
        })
        .collect()
}
