//! Line-oriented transaction reader.
//!
//! One transaction per line, items separated by whitespace.

use crate::error::{Error, Result};
use std::io::{self, BufRead};

/// Splits one line into a transaction. `line_no` is 1-based and only used in
/// error messages.
pub fn parse_line(line_no: usize, line: &str) -> Result<Vec<String>> {
    let items: Vec<String> = line.split_whitespace().map(str::to_owned).collect();
    if items.is_empty() {
        return Err(Error::MalformedTransaction {
            line: line_no,
            reason: "empty transaction".to_string(),
        });
    }
    Ok(items)
}

/// Streams transactions from a reader, one per line.
pub fn transactions<R: BufRead>(reader: R) -> impl Iterator<Item = Result<Vec<String>>> {
    reader.lines().enumerate().map(|(idx, line)| {
        let line_no = idx + 1;
        match line {
            Ok(line) => parse_line(line_no, &line),
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                Err(Error::MalformedTransaction {
                    line: line_no,
                    reason: "line is not valid UTF-8".to_string(),
                })
            }
            Err(err) => Err(err.into()),
        }
    })
}

/// Reads every transaction, stopping at the first malformed line.
pub fn read_transactions<R: BufRead>(reader: R) -> Result<Vec<Vec<String>>> {
    transactions(reader).collect()
}
