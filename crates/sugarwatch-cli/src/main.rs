use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use glob::glob;
use sugarwatch_core::Revision;

const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("SUGARWATCH_BUILD_COMMIT"),
    " ",
    env!("SUGARWATCH_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "sugarwatch")]
#[command(version, long_version = LONG_VERSION)]
#[command(
    about = "Offline replay and inspection of recorded CGM display message logs.",
    long_about = None,
    after_help = "Examples:\n  sugarwatch replay session.json -o report.json\n  sugarwatch replay session.json --stdout --pretty\n  sugarwatch replay session.json --revision compact --stdout"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Replay a message log through the display state machine and generate a
    /// versioned JSON report.
    #[command(
        after_help = "Examples:\n  sugarwatch replay session.json -o report.json\n  sugarwatch replay session.json --stdout --pretty"
    )]
    Replay {
        /// Path to a JSON message log
        input: PathBuf,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON report to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Wire revision the log was captured under
        #[arg(long, value_enum, default_value = "extended")]
        revision: RevisionArg,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if any graph payload was rejected
        #[arg(long)]
        strict: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RevisionArg {
    Compact,
    Extended,
}

impl From<RevisionArg> for Revision {
    fn from(arg: RevisionArg) -> Self {
        match arg {
            RevisionArg::Compact => Revision::Compact,
            RevisionArg::Extended => Revision::Extended,
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Replay {
            input,
            report,
            stdout,
            revision,
            pretty,
            compact,
            quiet,
            strict,
        } => cmd_replay(
            input,
            report,
            stdout,
            revision.into(),
            pretty,
            compact,
            quiet,
            strict,
        ),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(err.to_string(), None)
    }
}

fn cmd_replay(
    input: PathBuf,
    report: Option<PathBuf>,
    stdout: bool,
    revision: Revision,
    pretty: bool,
    compact: bool,
    quiet: bool,
    strict: bool,
) -> Result<(), CliError> {
    let resolved_input = resolve_input_path(&input)?;
    validate_input_file(&resolved_input)?;

    let meta = fs::metadata(&resolved_input)
        .with_context(|| format!("Failed to read input file: {}", resolved_input.display()))?;
    if !meta.is_file() {
        return Err(CliError::new(
            format!("input is not a file: {}", input.display()),
            Some("use a JSON message log".to_string()),
        ));
    }

    let rep = sugarwatch_core::replay_log_file(revision, &resolved_input)
        .map_err(|err| CliError::new(err.to_string(), Some("expected a JSON array of messages".to_string())))?;
    let json = serialize_report(&rep, pretty, compact)?;

    if stdout {
        print!("{}", json);
        if strict && rep.graph_rejects > 0 {
            return Err(CliError::new(
                format!("{} graph payload(s) rejected", rep.graph_rejects),
                Some("inspect the log with --stdout --pretty".to_string()),
            ));
        }
        return Ok(());
    }

    let report = report.ok_or_else(|| {
        CliError::new(
            "missing output path",
            Some("use -o/--report or --stdout".to_string()),
        )
    })?;
    if let Some(parent) = report.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create output directory: {}", parent.display())
            })?;
        }
    }

    fs::write(&report, json)
        .with_context(|| format!("Failed to write report: {}", report.display()))?;

    if !quiet {
        eprintln!("OK: report written -> {}", report.display());
    }
    if strict && rep.graph_rejects > 0 {
        return Err(CliError::new(
            format!("{} graph payload(s) rejected", rep.graph_rejects),
            Some("inspect the log with --stdout --pretty".to_string()),
        ));
    }
    Ok(())
}

fn serialize_report(
    rep: &sugarwatch_core::ReplayReport,
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(rep)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}

fn validate_input_file(input: &PathBuf) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("use a JSON message log".to_string()),
        ));
    }
    let ext = input
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    if ext != "json" {
        return Err(CliError::new(
            format!("unsupported input format '{}'", input.display()),
            Some("expected a .json message log".to_string()),
        ));
    }
    Ok(())
}

fn resolve_input_path(input: &PathBuf) -> Result<PathBuf, CliError> {
    let pattern = input.to_string_lossy();
    if !is_glob_pattern(&pattern) {
        return Ok(input.clone());
    }

    let mut matches = Vec::new();
    let paths = glob(&pattern).map_err(|err| {
        CliError::new(
            format!("invalid input pattern '{}'", pattern),
            Some(format!("pattern error: {}", err.msg)),
        )
    })?;
    for entry in paths {
        let path = entry.map_err(|err| {
            CliError::new(
                format!("invalid input pattern '{}'", pattern),
                Some(format!("pattern error: {}", err)),
            )
        })?;
        if path.is_file() {
            matches.push(path);
        }
    }

    if matches.is_empty() {
        return Err(CliError::new(
            format!("no files match pattern '{}'", pattern),
            Some("check the path or quote the pattern; expected a .json log".to_string()),
        ));
    }
    if matches.len() > 1 {
        return Err(CliError::new(
            format!(
                "multiple files match pattern '{}' ({} matches)",
                pattern,
                matches.len()
            ),
            Some("pass a single message log, or run once per file".to_string()),
        ));
    }

    Ok(matches.remove(0))
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains('*') || input.contains('?') || input.contains('[')
}
