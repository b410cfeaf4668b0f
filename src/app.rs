use crate::cli::Args;
use crate::clipboard::ClipboardSink;
use crate::config::CollectorConfig;
use crate::console::{Console, CONFIRM_EXTRACT_PROMPT};
use crate::discovery::{discover, possible_extensions};
use crate::emission::{build_artifact, output_file_name, write_artifact, Artifact};
use crate::error::CollectorError;
use crate::fs::{FileReader, WalkerFactory};
use crate::opener::FileOpener;
use crate::selection::implicit_selection;
use crate::tokenizer::Tokenizer;
use anyhow::Result;
use log::{info, warn};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub struct Deps<'a> {
    pub walker: &'a dyn WalkerFactory,
    pub reader: &'a dyn FileReader,
    pub tokenizer: &'a dyn Tokenizer,
    pub clipboard: &'a dyn ClipboardSink,
    pub opener: &'a dyn FileOpener,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stats {
    pub files: usize,
    pub lines: usize,
    pub tokens: usize,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The user declined extraction.
    Skipped,
    Saved { path: PathBuf, stats: Stats },
    Copied { stats: Stats },
    /// Copy was requested but no clipboard was available; a warning was shown.
    ClipboardUnavailable { stats: Stats },
}

pub fn run_app<R: BufRead, W: Write>(deps: Deps, config: &CollectorConfig, args: &Args, console: &mut Console<R, W>) -> Result<Outcome> {
    let requested = if args.extensions.is_empty() {
        let possible = possible_extensions(deps.walker, config);
        config.extensions.restrict(console.prompt_extensions(&possible)?)
    } else {
        config.extensions.restrict(&args.extensions)
    };
    if requested.is_empty() {
        console.say("No valid extensions provided. Exiting.")?;
        return Err(CollectorError::NoExtensions.into());
    }

    let entries = discover(deps.walker, config, &requested);
    if entries.is_empty() {
        console.say(CollectorError::NoFiles)?;
        return Err(CollectorError::NoFiles.into());
    }
    console.show_files(&entries)?;

    if !(args.extract || console.confirm(CONFIRM_EXTRACT_PROMPT)?) {
        console.say("Skipping extraction.")?;
        return Ok(Outcome::Skipped);
    }

    let indices = match implicit_selection(entries.len(), args.all) {
        Some(indices) => indices,
        None => console.prompt_indices(entries.len())?,
    };
    info!("Selected indices: {:?}", indices);

    let artifact = build_artifact(&entries, &indices, deps.reader);
    for skipped in &artifact.skipped {
        console.say(format_args!("Skipping {}: {}", skipped.path, skipped.reason))?;
    }
    let stats = Stats {
        files: artifact.files,
        lines: artifact.lines,
        tokens: deps.tokenizer.count_tokens(&artifact.content),
    };

    let outcome = if args.copy {
        copy_artifact(deps.clipboard, artifact, args.open, console, stats)?
    } else {
        save_artifact(deps, artifact, args, console, stats)?
    };
    print_stats(console, &stats)?;
    Ok(outcome)
}

fn copy_artifact<R: BufRead, W: Write>(clipboard: &dyn ClipboardSink, artifact: Artifact, open: bool, console: &mut Console<R, W>, stats: Stats) -> Result<Outcome> {
    if open {
        console.say("Nothing is written to disk with -copy; ignoring -open.")?;
    }
    match clipboard.set_text(artifact.content) {
        Ok(()) => {
            console.say("Content copied to clipboard.")?;
            Ok(Outcome::Copied { stats })
        }
        Err(err) if err.is_best_effort() => {
            warn!("Clipboard unavailable: {}", err);
            console.say(&err)?;
            Ok(Outcome::ClipboardUnavailable { stats })
        }
        Err(err) => {
            console.say(&err)?;
            Err(CollectorError::CopyFailed(err).into())
        }
    }
}

fn save_artifact<R: BufRead, W: Write>(deps: Deps, artifact: Artifact, args: &Args, console: &mut Console<R, W>, stats: Stats) -> Result<Outcome> {
    let name = match &args.output {
        Some(name) => output_file_name(Some(name)),
        None => output_file_name(console.prompt_output_name()?.as_deref()),
    };
    let path = deps.walker.root().join(&name);
    write_artifact(&path, &artifact)?;
    console.say(format_args!("Content saved in {}", name))?;

    if args.open {
        if let Err(err) = deps.opener.open(&path) {
            warn!("{}", err);
            console.say(&err)?;
        }
    }
    Ok(Outcome::Saved { path, stats })
}

fn print_stats<R: BufRead, W: Write>(console: &mut Console<R, W>, stats: &Stats) -> Result<()> {
    console.say(format_args!("Files: {}", stats.files))?;
    console.say(format_args!("Lines: {}", stats.lines))?;
    #[cfg(feature = "token-counting")]
    console.say(format_args!("Tokens (o200k_base): {}", stats.tokens))?;
    Ok(())
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
