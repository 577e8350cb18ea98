use std::fmt::Display;

use clap::{error::ErrorKind, CommandFactory, Parser};

/// Standard input filename
const STDIN_FILE: &str = "-";

const USAGE_SHORT: &str = r#"
This program translates METAR and TAF aviation weather reports into plain language. Give a report on the command line, or pipe in one report per line.

See --help for more details.

NOT FOR FLIGHT PLANNING.
"#;

const USAGE_LONG: &str = r#"
This program translates METAR and TAF aviation weather reports into plain language. Give a report on the command line

    metardec LFPG 071450Z 24015G25KT 9999 -RA BKN020CB M05/M10 Q1013

or pipe in one report per line

    cat reports.txt | metardec

Each decoded group is printed on its own line, and reports are separated by a blank line. Use --html to emit <br> line breaks instead.

The first word of each report is always taken to be the station. Words which cannot be decoded are printed as "Unrecognized". Weather phenomena which are not known to this program are left out.

To see how each word was classified, use --classify.

NOT FOR FLIGHT PLANNING.
"#;

/// Top-level program arguments
#[derive(Parser, Clone, Debug)]
#[command(version)]
#[command(about, long_about = None)]
#[command(after_help = USAGE_SHORT, after_long_help = USAGE_LONG)]
#[command(max_term_width = 100)]
pub struct Args {
    /// Verbosity level (-vvv for more)
    #[arg(short, long, default_value_t = 0, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// No log messages, and no prompt when there are no reports
    ///
    /// Translations are still printed.
    #[arg(short, long)]
    pub quiet: bool,

    /// Input file (or "-" for stdin)
    ///
    /// Each non-empty line is translated as a separate report.
    /// Ignored if a REPORT is given on the command line.
    #[arg(long, default_value_t = STDIN_FILE.to_string())]
    pub file: String,

    /// Separator between decoded groups
    #[arg(long, default_value_t = metartext::SEPARATOR_NEWLINE.to_string())]
    #[arg(hide_default_value = true, conflicts_with = "html")]
    pub separator: String,

    /// Separate decoded groups with HTML <br> line breaks
    #[arg(long)]
    pub html: bool,

    /// Print each word's category instead of a translation
    #[arg(long)]
    pub classify: bool,

    /// Also print the observation time as a full UTC timestamp
    ///
    /// The day of the month is placed in the month nearest to the
    /// current time.
    #[arg(long)]
    pub resolve_time: bool,

    /// Report to translate. Optional.
    ///
    /// All words are joined into a single report.
    #[arg(value_name = "REPORT", trailing_var_arg = true, allow_hyphen_values = true)]
    pub report: Vec<String>,
}

impl Args {
    /// Return true if the user requests input from stdin
    pub fn input_is_stdin(&self) -> bool {
        self.file == STDIN_FILE
    }

    /// Return the report given on the command line, if any
    pub fn report(&self) -> Option<String> {
        if self.report.is_empty() {
            None
        } else {
            Some(self.report.join(" "))
        }
    }

    /// Separator between decoded groups
    pub fn separator(&self) -> &str {
        if self.html {
            metartext::SEPARATOR_HTML
        } else {
            &self.separator
        }
    }
}

/// Exit code when reports cannot be read
pub const EXIT_INPUT: i32 = 1;

/// Why `metardec` stopped early
///
/// Bad arguments exit with clap's own code. Problems opening or
/// reading reports exit with [`EXIT_INPUT`].
#[derive(Debug)]
pub struct CliError {
    error: anyhow::Error,
    exit_code: i32,
}

impl CliError {
    /// Failure to read reports
    pub fn input(error: anyhow::Error) -> CliError {
        CliError {
            error,
            exit_code: EXIT_INPUT,
        }
    }

    /// Process exit code
    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Write this error to the terminal
    ///
    /// Help and version requests, and argument errors, come
    /// from clap and keep its formatting. Input failures are
    /// styled like clap errors.
    pub fn print(&self) -> std::io::Result<()> {
        match self.error.downcast_ref::<clap::Error>() {
            Some(clap_err) => clap_err.print(),
            None => Args::command().error(ErrorKind::Io, self).print(),
        }
    }

    /// Write this error to the terminal and end the process
    pub fn exit(&self) -> ! {
        let _ = self.print();
        std::process::exit(self.exit_code);
    }
}

impl Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // one line, with every cause
        write!(f, "{:#}", self.error)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> CliError {
        CliError::input(err)
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> CliError {
        CliError {
            exit_code: err.exit_code(),
            error: err.into(),
        }
    }
}
