//! Folio terminal CLI entry point.

use folio_runtime::{Flow, Repl, ReplConfig, logging};
use folio_terminal::{Catalog, Error, Interpreter, Result};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    scripts: Vec<PathBuf>,
    catalog: Option<PathBuf>,
    batch_mode: bool,
    plain: bool,
    verbosity: u8,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "--plain" => config.plain = true,
            "-v" | "--verbose" => config.verbosity = config.verbosity.saturating_add(1),
            "-vv" => config.verbosity = config.verbosity.saturating_add(2),
            "--catalog" => {
                let Some(path) = args.next() else {
                    return Err(Error::usage("--catalog requires a path"));
                };
                config.catalog = Some(PathBuf::from(path));
            }
            flag if flag.starts_with('-') => {
                return Err(Error::usage(format!("unknown option: {flag}")));
            }
            path => config.scripts.push(PathBuf::from(path)),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<()> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("folio {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    logging::init(config.verbosity);

    let catalog = match &config.catalog {
        Some(path) => Catalog::load(path)?,
        None => Catalog::default(),
    };
    let interpreter = Interpreter::new(catalog);

    let repl_config = if config.plain {
        ReplConfig::plain()
    } else {
        ReplConfig::default()
    };
    let mut repl = Repl::new(interpreter, repl_config)?;

    // Scripts share the interactive session
    for script in &config.scripts {
        if repl.run_script(script)? == Flow::Exit {
            return Ok(());
        }
    }

    if config.batch_mode {
        return Ok(());
    }

    if !config.scripts.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()
}

fn print_help() {
    println!(
        "\x1b[1mFolio\x1b[0m - Portfolio terminal

\x1b[1mUSAGE:\x1b[0m
    folio [OPTIONS] [SCRIPTS...]

\x1b[1mARGUMENTS:\x1b[0m
    [SCRIPTS...]    Files of terminal commands to run before the prompt

\x1b[1mOPTIONS:\x1b[0m
    -h, --help          Print help information
    -V, --version       Print version information
    -b, --batch         Run scripts and exit (no prompt)
    --catalog PATH      Load commands and levels from a TOML file
    --plain             Disable colors
    -v, --verbose       Log more (repeat for debug); FOLIO_LOG overrides

\x1b[1mEXAMPLES:\x1b[0m
    folio                        Open the terminal
    folio -b walkthrough.txt     Run a script and exit
    folio --catalog mine.toml    Use custom commands and levels

\x1b[1mTERMINAL COMMANDS:\x1b[0m
    help, about, skills, projects, contact
    hack                 Start the hacking mini-game
    clear                Clear the terminal
    exit                 Close the terminal
    Ctrl+D               Close the terminal
    Ctrl+C               Cancel current input"
    );
}
