//! The reconciliation pipeline.

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use clinic_ingest::{RawTable, tokenize};
use clinic_map::{HeaderCanonicalizer, HeaderMap, RowMapper};
use clinic_model::{CanonicalRecord, DEFAULT_SNAPSHOT_CHARS, ImportError, RunSummary};
use clinic_normalization::normalize_record;
use clinic_standards::{Schema, SchemaColumn};

use crate::dedupe::dedupe_records;
use crate::error::{ReconcileError, Result};
use crate::ledger::{ErrorLedger, REASON_NO_FIELDS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconcileOptions {
    /// Characters of the raw row kept in each ledger entry.
    pub snapshot_chars: usize,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        Self {
            snapshot_chars: DEFAULT_SNAPSHOT_CHARS,
        }
    }
}

/// Everything one run produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReconcileOutput {
    /// Effective output columns, in order.
    #[serde(skip)]
    pub columns: Vec<SchemaColumn>,
    pub records: Vec<CanonicalRecord>,
    pub errors: Vec<ImportError>,
    pub summary: RunSummary,
}

impl ReconcileOutput {
    /// Display labels of the output columns.
    pub fn labels(&self) -> Vec<&str> {
        self.columns
            .iter()
            .map(|column| column.label.as_str())
            .collect()
    }

    /// Record values projected onto the output columns.
    pub fn rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        let fields: Vec<_> = self.columns.iter().map(|column| column.field).collect();
        self.records
            .iter()
            .map(move |record| record.project(&fields))
    }
}

/// Reconciles exports against one schema.
///
/// Holds no per-run state, so one reconciler can process many exports.
#[derive(Debug, Clone)]
pub struct Reconciler {
    schema: Schema,
    canonicalizer: HeaderCanonicalizer,
    options: ReconcileOptions,
}

impl Default for Reconciler {
    fn default() -> Self {
        Self::new(Schema::builtin())
    }
}

impl Reconciler {
    pub fn new(schema: Schema) -> Self {
        let canonicalizer = HeaderCanonicalizer::new(&schema);
        Self {
            schema,
            canonicalizer,
            options: ReconcileOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ReconcileOptions) -> Self {
        self.options = options;
        self
    }

    /// Restricts and re-orders the output to a template header row.
    ///
    /// An absent template (empty or only `Col<N>` cells) leaves the schema
    /// unchanged.
    #[must_use]
    pub fn with_template(mut self, cells: &[String]) -> Self {
        if let Some(schema) = self.canonicalizer.apply_template(&self.schema, cells) {
            self.schema = schema;
        }
        self
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Runs the whole pipeline over decoded export text.
    pub fn reconcile(&self, text: &str) -> Result<ReconcileOutput> {
        let span = info_span!("reconcile", columns = self.schema.columns().len());
        let _guard = span.enter();
        let start = Instant::now();

        let table = info_span!("tokenize").in_scope(|| tokenize(text));
        if !table.has_header() {
            return Err(ReconcileError::EmptyInput);
        }
        if table.rows.is_empty() {
            warn!(blank_rows = table.blank_rows, "export has no data rows");
            return Err(ReconcileError::NothingToReconcile);
        }

        let header_map = self
            .canonicalizer
            .build_header_map(&table.headers, &self.schema);
        let unmapped = header_map.unmapped_headers();
        debug!(
            columns = header_map.len(),
            unmapped = unmapped.len(),
            "built header map"
        );
        if !unmapped.is_empty() {
            info!(
                count = unmapped.len(),
                headers = ?unmapped,
                "columns without a canonical field go to extras"
            );
        }

        let (records, ledger) =
            info_span!("map").in_scope(|| self.map_rows(&table, &header_map));
        let mapped = records.len();

        let outcome = info_span!("dedupe").in_scope(|| dedupe_records(records));

        let summary = RunSummary {
            delimiter: table.delimiter,
            input_rows: table.rows.len(),
            blank_rows: table.blank_rows,
            error_rows: ledger.len(),
            merged_duplicates: outcome.merged,
            output_records: outcome.records.len(),
        };
        info!(
            delimiter = %summary.delimiter,
            input_rows = summary.input_rows,
            mapped,
            error_rows = summary.error_rows,
            merged_duplicates = summary.merged_duplicates,
            output_records = summary.output_records,
            duration_ms = start.elapsed().as_millis(),
            "reconciliation complete"
        );

        Ok(ReconcileOutput {
            columns: self.schema.columns().to_vec(),
            records: outcome.records,
            errors: ledger.into_entries(),
            summary,
        })
    }

    fn map_rows(
        &self,
        table: &RawTable,
        header_map: &HeaderMap,
    ) -> (Vec<CanonicalRecord>, ErrorLedger) {
        let mapper = RowMapper::new(header_map);
        let mut ledger = ErrorLedger::new(self.options.snapshot_chars);
        let mut records = Vec::with_capacity(table.rows.len());
        let separator = table.delimiter.as_char().to_string();
        for row in &table.rows {
            let mut record = mapper.map_row(&row.values);
            if record.is_empty() {
                debug!(line = row.line, "row has no recognizable fields");
                ledger.record(row.line, &row.values.join(&separator), REASON_NO_FIELDS);
                continue;
            }
            normalize_record(&mut record);
            records.push(record);
        }
        (records, ledger)
    }
}
