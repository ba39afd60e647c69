//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;
use std::io::{self, Read};

use varcase_syntax::dump;

use super::{CliError, CliResult, ExitCode, FixMode};
use crate::fixer::{CamelCaseVariableFixer, FixConfig, Fixer, fix_diff, fix_tokens};

/// Maximum token dump size (100 MB)
///
/// Larger dumps are rejected to prevent out-of-memory conditions while decoding.
const MAX_DUMP_SIZE: u64 = 100 * 1024 * 1024;

/// Read a token dump from a file, or from stdin when `path` is `-`.
///
/// ## Errors
///
/// Returns an error if:
/// - The input cannot be read (I/O error)
/// - The input exceeds `MAX_DUMP_SIZE` (100 MB)
pub fn read_dump(path: &str) -> CliResult<String> {
    if path == "-" {
        let mut json = String::new();
        io::stdin()
            .take(MAX_DUMP_SIZE + 1)
            .read_to_string(&mut json)
            .map_err(|e| CliError::failure(format!("Error reading stdin: {}", e)))?;
        if json.len() as u64 > MAX_DUMP_SIZE {
            return Err(CliError::failure(format!(
                "Token dump on stdin is too large (max {} bytes)",
                MAX_DUMP_SIZE
            )));
        }
        return Ok(json);
    }

    let metadata = fs::metadata(path).map_err(|e| CliError::failure(format!("Cannot access file '{}': {}", path, e)))?;
    if metadata.len() > MAX_DUMP_SIZE {
        return Err(CliError::failure(format!(
            "Token dump '{}' is too large ({} bytes, max {} bytes)",
            path,
            metadata.len(),
            MAX_DUMP_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| CliError::failure(format!("Error reading file '{}': {}", path, e)))
}

/// Result of running `fix` over one dump: what to print on stdout and how to exit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixOutcome {
    pub output: String,
    pub exit_code: ExitCode,
}

/// Decode `json`, apply the fixer, and produce the output for `mode`.
///
/// `Check` and `Diff` exit with `FAILURE` when anything would change; the input is never written back.
pub fn fix_json(json: &str, config: &FixConfig, mode: FixMode) -> CliResult<FixOutcome> {
    let mut tokens = dump::from_json(json).map_err(|e| CliError::failure(format!("Invalid token dump: {}", e)))?;
    let fix_error = |e: crate::fixer::FixError| CliError::failure(format!("Error: {}", e));

    match mode {
        FixMode::Diff => {
            let diff = fix_diff(&tokens, config).map_err(fix_error)?;
            Ok(match diff {
                Some(diff) => FixOutcome {
                    output: diff,
                    exit_code: ExitCode::FAILURE,
                },
                None => FixOutcome {
                    output: String::new(),
                    exit_code: ExitCode::SUCCESS,
                },
            })
        }
        FixMode::Check => {
            let report = fix_tokens(&mut tokens, config).map_err(fix_error)?;
            if report.is_empty() {
                Ok(FixOutcome {
                    output: String::new(),
                    exit_code: ExitCode::SUCCESS,
                })
            } else {
                Ok(FixOutcome {
                    output: format!("Would rename {} token(s)\n", report.len()),
                    exit_code: ExitCode::FAILURE,
                })
            }
        }
        FixMode::Render => {
            fix_tokens(&mut tokens, config).map_err(fix_error)?;
            Ok(FixOutcome {
                output: tokens.render(),
                exit_code: ExitCode::SUCCESS,
            })
        }
        FixMode::Write => {
            fix_tokens(&mut tokens, config).map_err(fix_error)?;
            let mut output =
                dump::to_json(&tokens).map_err(|e| CliError::failure(format!("Error encoding token dump: {}", e)))?;
            output.push('\n');
            Ok(FixOutcome {
                output,
                exit_code: ExitCode::SUCCESS,
            })
        }
    }
}

/// Apply the fixer to the dump at `path` and print the result.
pub fn fix_dump(path: &str, config: &FixConfig, mode: FixMode) -> CliResult<ExitCode> {
    let json = read_dump(path)?;
    let outcome = fix_json(&json, config, mode)?;
    print!("{}", outcome.output);
    Ok(outcome.exit_code)
}

/// Human-readable fixer definition.
pub fn describe_text(fixer: &dyn Fixer) -> String {
    let definition = fixer.definition();
    let mut text = format!("{} (priority {})\n{}\n", fixer.name(), fixer.priority(), definition.summary);
    if let Some(description) = definition.description {
        text.push_str(&format!("\n{}\n", description));
    }
    if fixer.is_risky() {
        let reason = definition.risky_description.unwrap_or("no reason given");
        text.push_str(&format!("\nRisky: {}\n", reason));
    }
    for sample in definition.samples {
        text.push_str(&format!("\nSample:\n{}\n", sample.code.trim_end()));
    }
    text
}

/// Print the fixer definition.
pub fn describe() -> CliResult<ExitCode> {
    let fixer = CamelCaseVariableFixer::new(FixConfig::default());
    print!("{}", describe_text(&fixer));
    Ok(ExitCode::SUCCESS)
}
