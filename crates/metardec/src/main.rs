use std::io::{self, BufRead, Write};

use anyhow::{anyhow, Context};
use clap::Parser;
use log::{info, LevelFilter};

mod app;
mod cli;

use cli::{Args, CliError};

fn main() {
    match metardec() {
        Ok(()) => {}
        Err(cli_error) => cli_error.exit(),
    }
}

fn metardec() -> Result<(), CliError> {
    let args = Args::try_parse()?;
    init_logging(&args);

    let cfg = app::Config::new(&args, chrono::Utc::now());
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let count = match args.report() {
        Some(report) => {
            info!("translating report from the command line");
            app::run(&cfg, std::iter::once(report), &mut out)
        }
        None => {
            let stdin = io::stdin();
            let lines = open_reports(&args, stdin.lock())?
                .lines()
                .collect::<Result<Vec<String>, io::Error>>()
                .context("Unable to read reports")?;
            app::run(&cfg, lines, &mut out)
        }
    }
    .context("Unable to write translation")?;

    out.flush().context("Unable to write translation")?;
    info!("translated {} report(s)", count);

    if count == 0 && !args.quiet {
        println!("{}", metartext::PROMPT_EMPTY);
    }

    Ok(())
}

// RUST_LOG, when set, overrides -v
fn init_logging(args: &Args) {
    if args.quiet {
        return;
    }

    if std::env::var_os("RUST_LOG").is_some() {
        pretty_env_logger::init();
        return;
    }

    let level = log_level(args.verbose);
    pretty_env_logger::formatted_builder()
        .filter_module("metartext", level)
        .filter_module("metardec", level)
        .init();
}

// Warnings only, until asked for more
fn log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

// One report per line, from --file or a piped stdin
fn open_reports<'stdin>(
    args: &Args,
    stdin: io::StdinLock<'stdin>,
) -> Result<Box<dyn BufRead + 'stdin>, anyhow::Error> {
    if !args.input_is_stdin() {
        info!("reading reports from file: \"{}\"", &args.file);
        let file = std::fs::File::open(&args.file)
            .with_context(|| format!("Unable to open --file \"{}\"", args.file))?;
        return Ok(Box::new(io::BufReader::new(file)));
    }

    if stdin_is_terminal() {
        return Err(anyhow!(
            "no REPORT given, and standard input is a terminal.

Give a report on the command line, like

    metardec LFPG 071450Z 24015G25KT 9999 Q1013

or pipe in one report per line."
        ));
    }

    info!("reading reports from standard input");
    Ok(Box::new(stdin))
}

// A terminal has a size; pipes and files do not
#[cfg(not(target_os = "windows"))]
fn stdin_is_terminal() -> bool {
    use std::os::fd::AsRawFd;
    terminal_size::terminal_size_using_fd(io::stdin().as_raw_fd()).is_some()
}

#[cfg(target_os = "windows")]
fn stdin_is_terminal() -> bool {
    use std::os::windows::io::AsRawHandle;
    terminal_size::terminal_size_using_handle(io::stdin().as_raw_handle()).is_some()
}
