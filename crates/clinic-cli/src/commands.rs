use std::path::Path;

use anyhow::{Context, Result};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{info, info_span, trace, warn};

use clinic_cli::logging::redact_value;
use clinic_cli::output::{default_output_paths, write_errors, write_records};
use clinic_cli::template::read_template_header;
use clinic_core::{ReconcileOptions, Reconciler};
use clinic_ingest::read_export;
use clinic_model::CanonicalField;
use clinic_standards::{Schema, load_schema};

use crate::cli::{FieldsArgs, ReconcileArgs};
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};
use crate::types::ReconcileResult;

pub fn run_reconcile(args: &ReconcileArgs) -> Result<ReconcileResult> {
    let span = info_span!("reconcile_file", input = %args.input.display());
    let _guard = span.enter();

    let schema = load_schema_arg(args.schema.as_deref())?;
    let decoded = read_export(&args.input)
        .with_context(|| format!("read {}", args.input.display()))?;

    let base_columns = schema.columns().to_vec();
    let mut reconciler = Reconciler::new(schema).with_options(ReconcileOptions {
        snapshot_chars: args.snapshot_chars,
    });
    if let Some(path) = &args.template {
        match read_template_header(path) {
            Ok(cells) => reconciler = reconciler.with_template(&cells),
            Err(error) => warn!(
                path = %path.display(),
                error = %format!("{error:#}"),
                "template unreadable; using the full schema"
            ),
        }
    }
    let template_applied = reconciler.schema().columns() != base_columns.as_slice();

    let output = reconciler
        .reconcile(&decoded.text)
        .with_context(|| format!("reconcile {}", args.input.display()))?;
    for error in &output.errors {
        trace!(line = error.line, raw = redact_value(&error.raw), "rejected row");
    }

    let (default_records, default_errors) = default_output_paths(&args.input);
    let delimiter = args.output_delimiter;
    let (records_path, errors_path) = if args.dry_run {
        (None, None)
    } else {
        let records_path = args.output.clone().unwrap_or(default_records);
        write_records(&records_path, &output, delimiter)?;
        let errors_path = if output.errors.is_empty() {
            None
        } else {
            let path = args.errors.clone().unwrap_or(default_errors);
            write_errors(&path, &output.errors, delimiter)?;
            Some(path)
        };
        (Some(records_path), errors_path)
    };
    info!(
        records = output.summary.output_records,
        errors = output.summary.error_rows,
        dry_run = args.dry_run,
        "import files ready"
    );

    Ok(ReconcileResult {
        input: args.input.clone(),
        encoding: decoded.encoding,
        columns: output.columns.len(),
        template_applied,
        summary: output.summary,
        records_path,
        errors_path,
        dry_run: args.dry_run,
        fail_on_errors: args.fail_on_errors,
    })
}

pub fn run_fields(args: &FieldsArgs) -> Result<()> {
    let schema = load_schema_arg(args.schema.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Label"),
        header_cell("Aliases"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    let fields = if args.keys.is_empty() {
        CanonicalField::ALL.to_vec()
    } else {
        args.keys.clone()
    };
    for field in fields {
        let output = if schema.contains(field) {
            Cell::new("yes")
        } else {
            dim_cell("no")
        };
        table.add_row(vec![
            Cell::new(field.key()),
            Cell::new(schema.label(field).unwrap_or(field.label())),
            Cell::new(schema.aliases_for(field).len()),
            output,
        ]);
    }
    println!("{table}");
    Ok(())
}

fn load_schema_arg(path: Option<&Path>) -> Result<Schema> {
    match path {
        Some(path) => load_schema(path).with_context(|| format!("load schema {}", path.display())),
        None => Ok(Schema::builtin()),
    }
}
