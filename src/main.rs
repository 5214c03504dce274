use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::Parser;

use nanco::app::App;
use nanco::screen::Screen;
use nanco::terminal::{CrosstermTerminal, Terminal};
use nanco::{Config, ConsoleHost, Interpreter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to edit, or to run with --run
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Run FILE as a script instead of opening the editor
    #[arg(short = 'r', long, requires = "file")]
    run: bool,

    /// Configuration file (default: ./nanco.toml if present)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let _log_guard = nanco::logging::init(&config.log_file);

    let result = if args.run {
        run_script(&config, args.file)
    } else {
        run_ide(config, args.file)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(target: "app", %err, "exit_with_error");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Execute a script straight to stdout.
fn run_script(config: &Config, file: Option<PathBuf>) -> Result<()> {
    let Some(path) = file else {
        bail!("No file given to run");
    };
    if !config.is_script(&path) {
        bail!("Can only run .{} files", config.script_extension);
    }

    let mut host = ConsoleHost::stdout();
    let outcome =
        Interpreter::load(&mut host, &path).and_then(|interpreter| interpreter.execute(&mut host));
    crossterm::execute!(io::stdout(), crossterm::style::ResetColor).ok();
    outcome?;
    Ok(())
}

/// Open the interactive editor on `file`, or on a new unnamed buffer.
fn run_ide(config: Config, file: Option<PathBuf>) -> Result<()> {
    let mut host = ConsoleHost::stdout();
    let mut terminal = CrosstermTerminal::new();
    let screen = Screen::new(terminal.size());
    let mut app = App::open(&mut host, screen, config, file);
    app.run(&mut terminal, &mut host)
}
