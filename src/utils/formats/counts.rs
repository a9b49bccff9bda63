//! Reading of per-interval read count tables.

use std::io::BufRead;
use std::path::Path;

use anyhow::{bail, Context};

use crate::metadata::{Count, Interval};
use crate::utils::formats::table::{self, parse_field};

/// Columns of a read count table.
pub const COLUMNS: [&str; 4] = ["CONTIG", "START", "END", "COUNT"];

/// The read counts of one sample, one per interval.
#[derive(Debug)]
pub struct SampleCounts {
    /// The sample name declared in the `@RG` header line.
    pub sample_name: String,

    /// The interval each count was collected over.
    pub intervals: Vec<Interval>,

    /// The read count of each interval.
    pub counts: Vec<Count>,
}

impl SampleCounts {
    /// Ensures the counts were collected over exactly `intervals`, in order.
    pub fn check_intervals(&self, intervals: &[Interval]) -> anyhow::Result<()> {
        if self.intervals.len() != intervals.len() {
            bail!(
                "sample {} has counts for {} intervals, but the interval list has {}",
                self.sample_name,
                self.intervals.len(),
                intervals.len()
            );
        }

        if let Some((found, expected)) = self
            .intervals
            .iter()
            .zip(intervals)
            .find(|(found, expected)| found != expected)
        {
            bail!(
                "sample {} has counts for interval {}:{}-{} where the interval list has {}:{}-{}",
                self.sample_name,
                found.contig,
                found.start,
                found.end,
                expected.contig,
                expected.start,
                expected.end
            );
        }

        Ok(())
    }
}

/// Reads the read counts of one sample from a reader.
pub fn read<R>(reader: R) -> anyhow::Result<SampleCounts>
where
    R: BufRead,
{
    let table = table::read(reader, &COLUMNS)?;
    let sample_name = table
        .sample_name
        .context("read count table has no @RG header line with a sample name")?;

    let mut intervals = Vec::with_capacity(table.records.len());
    let mut counts: Vec<Count> = Vec::with_capacity(table.records.len());

    for (i, mut record) in table.records.into_iter().enumerate() {
        let start = parse_field(&record[1], "start", i + 1)?;
        let end = parse_field(&record[2], "end", i + 1)?;
        counts.push(parse_field(&record[3], "count", i + 1)?);
        intervals.push(Interval::new(record.swap_remove(0), start, end));
    }

    Ok(SampleCounts {
        sample_name,
        intervals,
        counts,
    })
}

/// Reads the read counts of one sample from a (possibly gzipped) file.
pub fn read_path<P>(src: P) -> anyhow::Result<SampleCounts>
where
    P: AsRef<Path>,
{
    let path = src.as_ref();
    read(table::open(path)?).with_context(|| format!("reading counts from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const DATA: &str = "@HD\tVN:1.6\n@RG\tID:GATKCopyNumber\tSM:S1\nCONTIG\tSTART\tEND\tCOUNT\n1\t1\t100\t12\n2\t1\t100\t7\n";

    #[test]
    fn test_read_counts() {
        let counts = read(DATA.as_bytes()).unwrap();
        assert_eq!(counts.sample_name, "S1");
        assert_eq!(counts.counts, vec![12, 7]);
        assert_eq!(counts.intervals[1], Interval::new("2", 1, 100));
    }

    #[test]
    fn test_read_counts_without_sample_name() {
        let data = "CONTIG\tSTART\tEND\tCOUNT\n1\t1\t100\t12\n";
        assert!(read(data.as_bytes()).is_err());
    }

    #[test]
    fn test_check_intervals() {
        let counts = read(DATA.as_bytes()).unwrap();
        let intervals = vec![Interval::new("1", 1, 100), Interval::new("2", 1, 100)];
        assert!(counts.check_intervals(&intervals).is_ok());
        assert!(counts.check_intervals(&intervals[..1]).is_err());

        let shifted = vec![Interval::new("1", 1, 100), Interval::new("2", 101, 200)];
        assert!(counts.check_intervals(&shifted).is_err());
    }
}
