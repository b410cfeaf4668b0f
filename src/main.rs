use anyhow::Result;
use collector::clipboard::system_clipboard;
use collector::console::Console;
use collector::fs::{StdFileReader, StdWalkerFactory};
use collector::logging::setup_logger;
use collector::opener::system_opener;
use collector::tokenizer::default_tokenizer;
use collector::{run_app, Args, CollectorConfig, CollectorError, Deps};
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = Args::parse_args(std::env::args_os());
    setup_logger(args.verbose)?;

    let config = CollectorConfig::builtin()?;
    let walker = StdWalkerFactory::current_dir();
    let tokenizer = default_tokenizer()?;
    let clipboard = system_clipboard();
    let opener = system_opener();
    let deps = Deps {
        walker: &walker,
        reader: &StdFileReader,
        tokenizer: &*tokenizer,
        clipboard: &*clipboard,
        opener: &*opener,
    };

    let stdin = std::io::stdin();
    let mut console = Console::new(stdin.lock(), std::io::stdout());
    let result = run_app(deps, &config, &args, &mut console);
    console.flush()?;

    match result {
        Ok(outcome) => {
            log::debug!("Finished: {:?}", outcome);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => match err.downcast_ref::<CollectorError>() {
            Some(e) => {
                log::info!("Exiting: {}", e);
                Ok(ExitCode::from(e.exit_code()))
            }
            None => Err(err),
        },
    }
}
