//! CLI argument definitions for the clinic importer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use clinic_model::{CanonicalField, DEFAULT_SNAPSHOT_CHARS, Delimiter};

#[derive(Parser)]
#[command(
    name = "clinic-import",
    version,
    about = "Reconcile clinic patient exports into the canonical import layout",
    long_about = "Reconcile patient spreadsheets exported by other clinic systems.\n\n\
                  Detects the delimiter, maps column headers onto the canonical\n\
                  patient fields, normalizes CPF, phone, CEP, dates and sex, merges\n\
                  duplicate patients and writes the import file plus an error report."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient values (names, documents) to appear in logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Reconcile one export into the import layout.
    Reconcile(ReconcileArgs),

    /// List the canonical fields, their labels and alias counts.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct ReconcileArgs {
    /// Export to reconcile (comma, semicolon or tab separated).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Target template whose header row fixes the output columns
    /// (xlsx, xls, ods, csv or txt).
    #[arg(long = "template", value_name = "PATH")]
    pub template: Option<PathBuf>,

    /// TOML file overriding field labels, aliases and columns.
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: Option<PathBuf>,

    /// Records file (default: <INPUT stem>_importacao.csv beside the input).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Error report (default: <INPUT stem>_erros.csv beside the input).
    #[arg(long = "errors", value_name = "PATH")]
    pub errors: Option<PathBuf>,

    /// Field separator of the written files: comma, semicolon, tab, or the
    /// character itself.
    #[arg(long = "output-delimiter", value_name = "DELIMITER", default_value = "comma")]
    pub output_delimiter: Delimiter,

    /// Characters of the raw row kept in each error report entry.
    #[arg(long = "snapshot-chars", value_name = "N", default_value_t = DEFAULT_SNAPSHOT_CHARS)]
    pub snapshot_chars: usize,

    /// Reconcile and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Exit with status 2 when any row was rejected.
    #[arg(long = "fail-on-errors")]
    pub fail_on_errors: bool,
}

#[derive(Parser)]
pub struct FieldsArgs {
    /// Only list these field keys (e.g. `cpf data_nascimento`).
    #[arg(value_name = "KEY")]
    pub keys: Vec<CanonicalField>,

    /// TOML file overriding field labels, aliases and columns.
    #[arg(long = "schema", value_name = "PATH")]
    pub schema: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconcile_args(extra: &[&str]) -> ReconcileArgs {
        let argv = ["clinic-import", "reconcile", "pacientes.csv"]
            .iter()
            .chain(extra)
            .copied();
        match Cli::try_parse_from(argv).unwrap().command {
            Command::Reconcile(args) => args,
            Command::Fields(_) => panic!("expected reconcile"),
        }
    }

    #[test]
    fn test_output_delimiter_parses_names_and_characters() {
        assert_eq!(reconcile_args(&[]).output_delimiter, Delimiter::Comma);
        let args = reconcile_args(&["--output-delimiter", "semicolon"]);
        assert_eq!(args.output_delimiter, Delimiter::Semicolon);
        let args = reconcile_args(&["--output-delimiter", ";"]);
        assert_eq!(args.output_delimiter, Delimiter::Semicolon);
        let args = reconcile_args(&["--output-delimiter", "TAB"]);
        assert_eq!(args.output_delimiter, Delimiter::Tab);
    }

    #[test]
    fn test_unknown_output_delimiter_is_rejected() {
        let argv = ["clinic-import", "reconcile", "x.csv", "--output-delimiter", "pipe"];
        assert!(Cli::try_parse_from(argv).is_err());
    }

    #[test]
    fn test_fields_keys_parse_case_insensitively() {
        let cli = Cli::try_parse_from(["clinic-import", "fields", "CPF", " celular "]).unwrap();
        let Command::Fields(args) = cli.command else {
            panic!("expected fields");
        };
        assert_eq!(args.keys, vec![CanonicalField::Cpf, CanonicalField::Celular]);
        assert!(Cli::try_parse_from(["clinic-import", "fields", "birthday"]).is_err());
    }

    #[test]
    fn test_fail_on_errors_flag() {
        assert!(!reconcile_args(&[]).fail_on_errors);
        assert!(reconcile_args(&["--fail-on-errors"]).fail_on_errors);
    }
}
