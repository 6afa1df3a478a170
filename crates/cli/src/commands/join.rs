//! `stringify join` — Join input lines into one string.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Args;
use stringify_config::{InputConfig, StringifyConfig, unescape};
use stringify_core::{SelectorSpec, SpecError, Stringifier};

#[derive(Debug, Args)]
pub struct JoinArgs {
    /// Files to read; standard input when none are given
    pub files: Vec<PathBuf>,

    /// Separator between lines (understands \n, \t, \0 and \\, as does
    /// STRINGIFY_SEPARATOR)
    #[arg(short, long)]
    pub separator: Option<String>,

    /// Selector applied to each line; repeat to concatenate several
    #[arg(short = 'S', long = "select", value_name = "SPEC")]
    pub selectors: Vec<String>,

    /// Trim whitespace around each line
    #[arg(long)]
    pub trim: bool,

    /// Skip empty lines
    #[arg(long)]
    pub skip_empty: bool,

    /// Do not print a trailing newline
    #[arg(short = 'n', long)]
    pub no_newline: bool,
}

pub fn run(args: JoinArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = StringifyConfig::load().map_err(|e| format!("Failed to load config: {e}"))?;

    // Command-line values win over the config file
    let separator = match &args.separator {
        Some(separator) => unescape(separator),
        None => config.separator.clone(),
    };
    let specs = if args.selectors.is_empty() {
        config.selector_specs()?
    } else {
        parse_specs(&args.selectors)?
    };
    let input = InputConfig {
        trim: args.trim || config.input.trim,
        skip_empty: args.skip_empty || config.input.skip_empty,
    };

    let lines = prepare(read_lines(&args.files)?, &input);
    tracing::debug!(lines = lines.len(), selectors = specs.len(), "joining input");

    let output = render(lines, &separator, &specs)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    if config.output.trailing_newline && !args.no_newline {
        writeln!(stdout)?;
    }
    stdout.flush()?;
    Ok(())
}

/// Parse selector specs, failing on the first bad one.
pub fn parse_specs(specs: &[String]) -> Result<Vec<SelectorSpec>, SpecError> {
    specs.iter().map(|spec| spec.parse()).collect()
}

/// Apply the input options to raw lines.
pub fn prepare(lines: Vec<String>, input: &InputConfig) -> Vec<String> {
    lines
        .into_iter()
        .map(|line| {
            if input.trim {
                line.trim().to_string()
            } else {
                line
            }
        })
        .filter(|line| !input.skip_empty || !line.is_empty())
        .collect()
}

/// Join prepared lines through the given selectors.
pub fn render(
    lines: Vec<String>,
    separator: &str,
    specs: &[SelectorSpec],
) -> stringify_core::Result<String> {
    Stringifier::new()
        .separator(Some(separator))
        .selectors(specs.iter().map(|spec| Some(spec.to_selector())))
        .stringify(lines)
}

fn read_lines(files: &[PathBuf]) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    if files.is_empty() {
        tracing::debug!("reading from stdin");
        let lines = io::stdin().lock().lines().collect::<Result<Vec<_>, _>>()?;
        return Ok(lines);
    }

    let mut lines = Vec::new();
    for path in files {
        tracing::debug!(path = %path.display(), "reading file");
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        lines.extend(content.lines().map(str::to_string));
    }
    Ok(lines)
}
