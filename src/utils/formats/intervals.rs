//! Reading of interval lists.

use std::io::BufRead;
use std::path::Path;

use crate::metadata::Interval;
use crate::utils::formats::table::{self, parse_field};

/// Columns of an interval list.
pub const COLUMNS: [&str; 3] = ["CONTIG", "START", "END"];

/// Reads intervals from a reader, in the order in which they appear.
pub fn read<R>(reader: R) -> anyhow::Result<Vec<Interval>>
where
    R: BufRead,
{
    let table = table::read(reader, &COLUMNS)?;
    let mut intervals = Vec::with_capacity(table.records.len());

    for (i, mut record) in table.records.into_iter().enumerate() {
        let start = parse_field(&record[1], "start", i + 1)?;
        let end = parse_field(&record[2], "end", i + 1)?;
        intervals.push(Interval::new(record.swap_remove(0), start, end));
    }

    Ok(intervals)
}

/// Reads intervals from a (possibly gzipped) interval list file.
pub fn read_path<P>(src: P) -> anyhow::Result<Vec<Interval>>
where
    P: AsRef<Path>,
{
    read(table::open(src)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_interval_list() {
        let data = "@SQ\tSN:1\tLN:248956422\n1\t1000\t1999\t+\t.\n1\t3000\t3999\t+\t.\nX\t500\t900\t+\t.\n";
        let intervals = read(data.as_bytes()).unwrap();
        assert_eq!(
            intervals,
            vec![
                Interval::new("1", 1000, 1999),
                Interval::new("1", 3000, 3999),
                Interval::new("X", 500, 900),
            ]
        );
    }

    #[test]
    fn test_read_with_column_header() {
        let data = "CONTIG\tSTART\tEND\nchr2\t1\t100\n";
        let intervals = read(data.as_bytes()).unwrap();
        assert_eq!(intervals, vec![Interval::new("chr2", 1, 100)]);
    }

    #[test]
    fn test_read_invalid_position() {
        let data = "1\tabc\t100\n";
        assert!(read(data.as_bytes()).is_err());
    }
}
