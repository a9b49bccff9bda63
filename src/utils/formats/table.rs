//! Reading of SAM-style headed, tab-separated tables.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{bail, Context};
use flate2::read::MultiGzDecoder;

/// Attempts to open a (possibly gzipped) text file from a given source.
pub fn open<P>(src: P) -> anyhow::Result<Box<dyn BufRead>>
where
    P: AsRef<Path>,
{
    let path = src.as_ref();
    let file =
        File::open(path).with_context(|| format!("could not open {}", path.display()))?;

    match path.extension().and_then(|x| x.to_str()) {
        Some("gz") => Ok(Box::new(BufReader::new(MultiGzDecoder::new(file)))),
        _ => Ok(Box::new(BufReader::new(file))),
    }
}

/// A parsed table: the sample name declared in the header (if any) and the
/// records, with their columns reordered to match the requested columns.
#[derive(Debug, Default)]
pub struct Table {
    /// The `SM` tag of the `@RG` header line, if present.
    pub sample_name: Option<String>,

    /// The records. Each record holds the requested columns in order.
    pub records: Vec<Vec<String>>,
}

/// Extracts the sample name from an `@RG` header line.
fn sample_name_from_read_group(line: &str) -> Option<String> {
    line.split('\t')
        .skip(1)
        .find_map(|field| field.strip_prefix("SM:"))
        .map(|s| s.to_string())
}

/// Finds the position of each requested column within a column header line.
fn column_positions(header: &[&str], columns: &[&str]) -> anyhow::Result<Vec<usize>> {
    columns
        .iter()
        .map(|column| {
            header
                .iter()
                .position(|f| f.eq_ignore_ascii_case(column))
                .with_context(|| format!("column header is missing column {}", column))
        })
        .collect()
}

/// Reads a table whose records contain at least `columns`.
///
/// If the first non-header line starts with `columns[0]`, it is treated as a
/// column header and the requested columns are looked up by name. Otherwise
/// the requested columns are taken positionally from the start of each line.
pub fn read<R>(reader: R, columns: &[&str]) -> anyhow::Result<Table>
where
    R: BufRead,
{
    let mut table = Table::default();
    let mut positions: Option<Vec<usize>> = None;

    for (i, result) in reader.lines().enumerate() {
        let line = result?;
        let line_number = i + 1;

        if line.is_empty() {
            continue;
        }

        if line.starts_with('@') {
            if line.starts_with("@RG") {
                if let Some(sample_name) = sample_name_from_read_group(&line) {
                    if let Some(existing) = &table.sample_name {
                        if *existing != sample_name {
                            bail!(
                                "conflicting sample names in header: {} and {}",
                                existing,
                                sample_name
                            );
                        }
                    }
                    table.sample_name = Some(sample_name);
                }
            }
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();

        if positions.is_none() && fields[0].eq_ignore_ascii_case(columns[0]) {
            positions = Some(column_positions(&fields, columns)?);
            continue;
        }

        let positions = positions.get_or_insert_with(|| (0..columns.len()).collect());

        let mut record = Vec::with_capacity(positions.len());
        for &position in positions.iter() {
            match fields.get(position) {
                Some(field) => record.push(field.to_string()),
                None => bail!(
                    "line {} has {} columns, expected at least {}",
                    line_number,
                    fields.len(),
                    position + 1
                ),
            }
        }

        table.records.push(record);
    }

    Ok(table)
}

/// Parses a single field of a record, naming the field on failure.
pub fn parse_field<T>(value: &str, name: &str, line: usize) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("invalid {} on record {}: {}", name, line, value))
}
