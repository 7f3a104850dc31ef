//! Output formatting for rankings
//!
//! Supports two output formats:
//! - Table: Pretty-printed ASCII table (default)
//! - CSV: Comma-separated values

use arrow::array::Array;
use arrow::record_batch::RecordBatch;
use arrow::util::display::{ArrayFormatter, FormatOptions};
use std::io::{self, Write};

/// Output format for rankings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Pretty-printed ASCII table
    #[default]
    Table,
    /// Comma-separated values
    Csv,
}

impl OutputFormat {
    /// Parse format from string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" | "t" => Some(Self::Table),
            "csv" | "c" => Some(Self::Csv),
            _ => None,
        }
    }

    /// Get format name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Csv => "csv",
        }
    }
}

/// Format batches and write to the given writer
pub fn write_batches<W: Write>(
    writer: &mut W,
    batches: &[RecordBatch],
    format: OutputFormat,
) -> io::Result<()> {
    if batches.is_empty() {
        return Ok(());
    }

    match format {
        OutputFormat::Table => {
            let display = arrow::util::pretty::pretty_format_batches(batches)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
            writeln!(writer, "{}", display)
        }
        OutputFormat::Csv => write_csv(writer, batches),
    }
}

/// Format batches and write to stdout
pub fn print_batches(batches: &[RecordBatch], format: OutputFormat) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_batches(&mut stdout, batches, format)
}

fn write_csv<W: Write>(writer: &mut W, batches: &[RecordBatch]) -> io::Result<()> {
    let schema = batches[0].schema();
    let headers: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    writeln!(writer, "{}", headers.join(","))?;

    let options = FormatOptions::default();
    for batch in batches {
        let formatters = batch
            .columns()
            .iter()
            .map(|col| ArrayFormatter::try_new(col.as_ref() as &dyn Array, &options))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;

        for row in 0..batch.num_rows() {
            let values: Vec<String> = formatters
                .iter()
                .map(|f| f.value(row).to_string())
                .collect();
            writeln!(writer, "{}", values.join(","))?;
        }
    }
    Ok(())
}
