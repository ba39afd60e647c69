//! CLI module for varcase
//!
//! ## Commands
//!
//! - `fix [PATH|-]` - Apply the camelCase fixer to a JSON token dump
//! - `describe` - Print the fixer definition
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::process;

use clap::{Parser, Subcommand};

use crate::fixer::{AnnotationScope, CollisionPolicy, FixConfig};

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Context-sensitive camelCase renaming over PHP token streams
#[derive(Parser, Debug)]
#[command(name = "varcase")]
#[command(version = VERSION)]
#[command(about = "Rename PHP variables and properties to camelCase", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply the camelCase fixer to a JSON token dump
    Fix {
        /// Token dump to read, or `-` for stdin
        #[arg(value_name = "PATH", default_value = "-")]
        path: String,
        /// Allow the fixer to run (it is risky)
        #[arg(long)]
        allow_risky: bool,
        /// Exit with status 1 if anything would change, without printing the result
        #[arg(long, conflicts_with = "diff")]
        check: bool,
        /// Print the would-be edits instead of the result
        #[arg(long)]
        diff: bool,
        /// Print the rendered source instead of the JSON dump
        #[arg(long)]
        render: bool,
        /// Rename every `@param`/`@var` annotation of a doc comment, not only the first
        #[arg(long)]
        all_annotations: bool,
        /// Leave names alone when their camelCase spelling is already taken
        #[arg(long)]
        skip_collisions: bool,
        /// Extra variable names that are never renamed
        #[arg(long = "reserve", value_name = "NAME")]
        reserve: Vec<String>,
    },

    /// Print the fixer definition
    Describe,
}

/// Output selection for `fix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixMode {
    Write,
    Render,
    Check,
    Diff,
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    match cli.command {
        Command::Fix {
            path,
            allow_risky,
            check,
            diff,
            render,
            all_annotations,
            skip_collisions,
            reserve,
        } => {
            let config = build_config(allow_risky, all_annotations, skip_collisions, reserve);
            let mode = if check {
                FixMode::Check
            } else if diff {
                FixMode::Diff
            } else if render {
                FixMode::Render
            } else {
                FixMode::Write
            };
            commands::fix_dump(&path, &config, mode)
        }
        Command::Describe => commands::describe(),
    }
}

fn build_config(allow_risky: bool, all_annotations: bool, skip_collisions: bool, reserve: Vec<String>) -> FixConfig {
    let scope = if all_annotations {
        AnnotationScope::All
    } else {
        AnnotationScope::First
    };
    let policy = if skip_collisions {
        CollisionPolicy::Skip
    } else {
        CollisionPolicy::Rename
    };
    let mut config = FixConfig::new()
        .with_allow_risky(allow_risky)
        .with_annotation_scope(scope)
        .with_collision_policy(policy);
    config.reserved_names = reserve;
    config
}

// ============================================================================
// Tests
// ============================================================================
