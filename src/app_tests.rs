use super::*;
use crate::clipboard::ClipboardError;
use crate::fs::{StdFileReader, StdWalkerFactory};
use crate::opener::OpenError;
use crate::tokenizer::NullTokenizer;
use std::cell::RefCell;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use tempfile::{tempdir, TempDir};

struct RecordingClipboard(RefCell<Option<String>>);
impl ClipboardSink for RecordingClipboard {
    fn set_text(&self, text: String) -> Result<(), ClipboardError> {
        self.0.replace(Some(text));
        Ok(())
    }
}

struct MissingClipboard;
impl ClipboardSink for MissingClipboard {
    fn set_text(&self, _: String) -> Result<(), ClipboardError> {
        Err(ClipboardError::ToolMissing { tool: "xclip".into() })
    }
}

struct FailingClipboard;
impl ClipboardSink for FailingClipboard {
    fn set_text(&self, _: String) -> Result<(), ClipboardError> {
        Err(ClipboardError::Failed { tool: "pbcopy".into(), reason: "exited with 1".into() })
    }
}

#[derive(Default)]
struct RecordingOpener(RefCell<Vec<PathBuf>>);
impl FileOpener for RecordingOpener {
    fn open(&self, path: &Path) -> Result<(), OpenError> {
        self.0.borrow_mut().push(path.to_path_buf());
        Ok(())
    }
}

struct Fixture {
    dir: TempDir,
    walker: StdWalkerFactory,
    clipboard: RecordingClipboard,
    opener: RecordingOpener,
}

impl Fixture {
    fn new(files: &[(&str, &str)]) -> Self {
        let dir = tempdir().unwrap();
        for (name, content) in files {
            let p = dir.path().join(name);
            fs::create_dir_all(p.parent().unwrap()).unwrap();
            fs::write(p, content).unwrap();
        }
        let walker = StdWalkerFactory::new(dir.path());
        Self { dir, walker, clipboard: RecordingClipboard(RefCell::new(None)), opener: RecordingOpener::default() }
    }

    fn deps<'a>(&'a self, clipboard: &'a dyn ClipboardSink) -> Deps<'a> {
        Deps {
            walker: &self.walker,
            reader: &StdFileReader,
            tokenizer: &NullTokenizer,
            clipboard,
            opener: &self.opener,
        }
    }

    fn run(&self, args: Args, input: &str) -> (Result<Outcome>, String) {
        self.run_with(&self.clipboard, args, input)
    }

    fn run_with(&self, clipboard: &dyn ClipboardSink, args: Args, input: &str) -> (Result<Outcome>, String) {
        let config = CollectorConfig::builtin().unwrap();
        let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let res = run_app(self.deps(clipboard), &config, &args, &mut console);
        (res, String::from_utf8(console.into_output()).unwrap())
    }

    fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).unwrap()
    }
}

fn args(exts: &[&str]) -> Args {
    Args { extensions: exts.iter().map(|e| e.to_string()).collect(), ..Args::default() }
}

#[test]
fn selection_order_drives_output_order() {
    let fx = Fixture::new(&[("a.py", "print('a')\n"), ("b.py", "print('b')\n")]);
    let (res, out) = fx.run(Args { extract: true, ..args(&["py"]) }, "1 0\n\n");
    let outcome = res.unwrap();
    assert_eq!(
        outcome,
        Outcome::Saved {
            path: fx.dir.path().join("output.txt"),
            stats: Stats { files: 2, lines: 2, tokens: 0 }
        }
    );
    assert_eq!(fx.read("output.txt"), "// b.py :\n\nprint('b')\n\n\n// a.py :\n\nprint('a')\n\n\n");
    assert!(out.contains("[0] a.py\n[1] b.py\n"));
    assert!(out.contains("Content saved in output.txt"));
}

#[test]
fn prompts_for_everything_when_no_flags() {
    let fx = Fixture::new(&[("a.py", "A"), ("b.js", "B"), ("c.rs", "C")]);
    let (res, out) = fx.run(Args::default(), "py js\ny\n\nreport\n");
    assert!(matches!(res.unwrap(), Outcome::Saved { .. }));
    assert!(out.contains("Possible extensions: js py\n"));
    assert_eq!(fx.read("report.txt"), "// a.py :\n\nA\n\n// b.js :\n\nB\n\n");
}

#[test]
fn single_match_needs_no_index_prompt() {
    let fx = Fixture::new(&[("only.css", "body {}")]);
    let (res, out) = fx.run(Args { extract: true, output: Some("x.txt".into()), ..args(&["css"]) }, "");
    assert!(matches!(res.unwrap(), Outcome::Saved { .. }));
    assert!(!out.contains("Enter the indices"));
    assert_eq!(fx.read("x.txt"), "// only.css :\n\nbody {}\n\n");
}

#[test]
fn invalid_selection_reprompts() {
    let fx = Fixture::new(&[("a.py", "A"), ("b.py", "B")]);
    let a = Args { extract: true, output: Some("out".into()), ..args(&["py"]) };
    let (res, out) = fx.run(a, "0 2\nzero\n1\n");
    assert!(res.is_ok());
    assert!(out.contains("index 2 is out of range"));
    assert!(out.contains("'zero' is not a valid index"));
    assert_eq!(fx.read("out.txt"), "// b.py :\n\nB\n\n");
}

#[test]
fn no_valid_extensions_is_an_error() {
    let fx = Fixture::new(&[("a.py", "A")]);
    let (res, out) = fx.run(Args::default(), "rs go\n");
    let err = res.unwrap_err();
    assert!(matches!(err.downcast_ref::<CollectorError>(), Some(CollectorError::NoExtensions)));
    assert!(out.contains("No valid extensions provided. Exiting."));
}

#[test]
fn no_matching_files_is_an_error() {
    let fx = Fixture::new(&[("a.py", "A"), ("node_modules/x.js", "X")]);
    let (res, out) = fx.run(args(&["js"]), "");
    let err = res.unwrap_err();
    assert!(matches!(err.downcast_ref::<CollectorError>(), Some(CollectorError::NoFiles)));
    assert!(out.contains("No files found with the specified extensions."));
}

#[test]
fn declining_extraction_writes_nothing() {
    let fx = Fixture::new(&[("a.py", "A")]);
    let (res, out) = fx.run(args(&["py"]), "n\n");
    assert_eq!(res.unwrap(), Outcome::Skipped);
    assert!(out.contains("Skipping extraction."));
    assert!(!fx.dir.path().join("output.txt").exists());
}

#[test]
fn copy_sends_buffer_to_clipboard() {
    let fx = Fixture::new(&[("a.py", "A"), ("b.py", "B")]);
    let (res, out) = fx.run(Args { extract: true, all: true, copy: true, ..args(&["py"]) }, "");
    assert!(matches!(res.unwrap(), Outcome::Copied { .. }));
    assert_eq!(fx.clipboard.0.borrow().as_deref(), Some("// a.py :\n\nA\n\n// b.py :\n\nB\n\n"));
    assert!(out.contains("Content copied to clipboard."));
    assert!(!fx.dir.path().join("output.txt").exists());
}

#[test]
fn missing_clipboard_tool_is_only_a_warning() {
    let fx = Fixture::new(&[("a.py", "A")]);
    let (res, out) = fx.run_with(&MissingClipboard, Args { extract: true, copy: true, ..args(&["py"]) }, "");
    assert!(matches!(res.unwrap(), Outcome::ClipboardUnavailable { .. }));
    assert!(out.contains("Command 'xclip' not found"));
}

#[test]
fn failed_copy_is_an_error() {
    let fx = Fixture::new(&[("a.py", "A")]);
    let (res, _) = fx.run_with(&FailingClipboard, Args { extract: true, copy: true, ..args(&["py"]) }, "");
    let err = res.unwrap_err();
    assert!(matches!(err.downcast_ref::<CollectorError>(), Some(CollectorError::CopyFailed(_))));
}

#[test]
fn open_runs_after_save() {
    let fx = Fixture::new(&[("a.py", "A")]);
    let (res, _) = fx.run(Args { extract: true, open: true, output: Some("r".into()), ..args(&["py"]) }, "");
    assert!(res.is_ok());
    assert_eq!(*fx.opener.0.borrow(), vec![fx.dir.path().join("r.txt")]);
}

#[test]
fn open_is_ignored_with_copy() {
    let fx = Fixture::new(&[("a.py", "A")]);
    let (res, out) = fx.run(Args { extract: true, open: true, copy: true, ..args(&["py"]) }, "");
    assert!(res.is_ok());
    assert!(fx.opener.0.borrow().is_empty());
    assert!(out.contains("ignoring -open"));
}

#[test]
fn reports_stats() {
    let fx = Fixture::new(&[("a.py", "1\n2\n3\n")]);
    let (res, out) = fx.run(Args { extract: true, ..args(&["py"]) }, "\n");
    assert!(res.is_ok());
    assert!(out.contains("Files: 1\n"));
    assert!(out.contains("Lines: 3\n"));
}
