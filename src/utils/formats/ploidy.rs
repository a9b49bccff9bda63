//! Reading of contig ploidy call tables.

use std::io::BufRead;
use std::path::Path;

use anyhow::Context;

use crate::metadata::Ploidy;
use crate::utils::formats::table::{self, parse_field};

/// Columns of a contig ploidy call table.
pub const COLUMNS: [&str; 3] = ["CONTIG", "PLOIDY", "PLOIDY_GQ"];

/// The contig ploidy calls of one sample.
#[derive(Debug)]
pub struct SamplePloidyCalls {
    /// The sample name declared in the `@RG` header line.
    pub sample_name: String,

    /// The contigs, in file order.
    pub contigs: Vec<String>,

    /// The ploidy of each contig.
    pub ploidy: Vec<Ploidy>,

    /// The ploidy genotyping quality of each contig.
    pub ploidy_genotyping_quality: Vec<f64>,
}

/// Reads the contig ploidy calls of one sample from a reader.
pub fn read<R>(reader: R) -> anyhow::Result<SamplePloidyCalls>
where
    R: BufRead,
{
    let table = table::read(reader, &COLUMNS)?;
    let sample_name = table
        .sample_name
        .context("contig ploidy table has no @RG header line with a sample name")?;

    let mut calls = SamplePloidyCalls {
        sample_name,
        contigs: Vec::with_capacity(table.records.len()),
        ploidy: Vec::with_capacity(table.records.len()),
        ploidy_genotyping_quality: Vec::with_capacity(table.records.len()),
    };

    for (i, mut record) in table.records.into_iter().enumerate() {
        calls.ploidy.push(parse_field(&record[1], "ploidy", i + 1)?);
        calls
            .ploidy_genotyping_quality
            .push(parse_field(&record[2], "ploidy genotyping quality", i + 1)?);
        calls.contigs.push(record.swap_remove(0));
    }

    Ok(calls)
}

/// Reads the contig ploidy calls of one sample from a (possibly gzipped) file.
pub fn read_path<P>(src: P) -> anyhow::Result<SamplePloidyCalls>
where
    P: AsRef<Path>,
{
    let path = src.as_ref();
    read(table::open(path)?)
        .with_context(|| format!("reading contig ploidy calls from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_ploidy_calls() {
        let data = "@RG\tID:GATKCopyNumber\tSM:S1\nCONTIG\tPLOIDY\tPLOIDY_GQ\n1\t2\t86.4\nX\t1\t52.0\nY\t1\t40.1\n";
        let calls = read(data.as_bytes()).unwrap();
        assert_eq!(calls.sample_name, "S1");
        assert_eq!(calls.contigs, vec!["1", "X", "Y"]);
        assert_eq!(calls.ploidy, vec![2, 1, 1]);
        assert_eq!(calls.ploidy_genotyping_quality, vec![86.4, 52.0, 40.1]);
    }

    #[test]
    fn test_read_negative_ploidy() {
        let data = "@RG\tID:GATKCopyNumber\tSM:S1\nCONTIG\tPLOIDY\tPLOIDY_GQ\n1\t-2\t86.4\n";
        assert!(read(data.as_bytes()).is_err());
    }
}
