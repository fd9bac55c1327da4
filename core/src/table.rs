//! In-memory tables read from delimited text.
//!
//! Inputs are read completely before mapping starts. When no delimiter is
//! given, it is sniffed from the first non-empty line.

use std::io::Read;

use csv::ReaderBuilder;

use crate::error::Result;

/// Delimiters considered by [`sniff_delimiter`], in tie-break order.
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b'\t', b';', b'|'];

/// A header row plus data rows of string cells.
///
/// Rows may be shorter or longer than the header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Column names; the first column holds the row subject.
    pub headers: Vec<String>,
    /// Data rows in input order.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates a table from already-split cells.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Reads a table whose first record is the header row.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or is not valid
    /// delimited text.
    pub fn read<R: Read>(reader: R, delimiter: Option<u8>) -> Result<Self> {
        let mut records = read_records(reader, delimiter)?.into_iter();
        let headers = records.next().unwrap_or_default();
        Ok(Self {
            headers,
            rows: records.collect(),
        })
    }

    /// Reads a table without a header row; every record becomes a row.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or is not valid
    /// delimited text.
    pub fn read_headerless<R: Read>(reader: R, delimiter: Option<u8>) -> Result<Self> {
        Ok(Self {
            headers: Vec::new(),
            rows: read_records(reader, delimiter)?,
        })
    }
}

fn read_records<R: Read>(mut reader: R, delimiter: Option<u8>) -> Result<Vec<Vec<String>>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    let text = text.strip_prefix('\u{feff}').unwrap_or(&text);

    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(text));
    tracing::debug!(delimiter = %char::from(delimiter).escape_default(), "reading table");

    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_owned).collect());
    }
    Ok(rows)
}

/// Guesses the delimiter of `sample` from its first non-empty line.
///
/// The candidate occurring most often wins; ties go to the earlier
/// candidate in `, \t ; |` order, and a line with none of them is read as
/// comma-separated.
#[must_use]
pub fn sniff_delimiter(sample: &str) -> u8 {
    let Some(line) = sample.lines().find(|l| !l.trim().is_empty()) else {
        return b',';
    };

    let mut best = (b',', 0);
    for candidate in CANDIDATE_DELIMITERS {
        let count = line.bytes().filter(|b| *b == candidate).count();
        if count > best.1 {
            best = (candidate, count);
        }
    }
    best.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_common_delimiters() {
        assert_eq!(sniff_delimiter("name,superClass,label@en\n"), b',');
        assert_eq!(sniff_delimiter("name\tsuperClass\tlabel@en\n"), b'\t');
        assert_eq!(sniff_delimiter("name;superClass\nex:Cat;ex:Animal\n"), b';');
        assert_eq!(sniff_delimiter("\n\nname|label\n"), b'|');
    }

    #[test]
    fn sniff_defaults_to_comma() {
        assert_eq!(sniff_delimiter(""), b',');
        assert_eq!(sniff_delimiter("name\n"), b',');
    }

    #[test]
    fn reads_header_and_rows() {
        let input = "name,superClass,label@en\nex:Cat,ex:Animal,A cat\n";
        let table = Table::read(input.as_bytes(), None).ok();
        assert_eq!(
            table,
            Some(Table::new(
                vec!["name".into(), "superClass".into(), "label@en".into()],
                vec![vec!["ex:Cat".into(), "ex:Animal".into(), "A cat".into()]],
            ))
        );
    }

    #[test]
    fn explicit_delimiter_overrides_sniffing() {
        let input = "name;label\nex:Cat;Cat, the animal\n";
        let table = Table::read(input.as_bytes(), Some(b';')).unwrap_or_default();
        assert_eq!(table.rows, vec![vec!["ex:Cat".to_owned(), "Cat, the animal".to_owned()]]);
    }

    #[test]
    fn quoted_cells_keep_delimiters() {
        let input = "name,comment\nex:Cat,\"small, furry\"\n";
        let table = Table::read(input.as_bytes(), Some(b',')).unwrap_or_default();
        assert_eq!(table.rows[0][1], "small, furry");
    }

    #[test]
    fn rows_may_differ_in_width() {
        let input = "name,a,b\nex:One\nex:Two,x,y,z\n";
        let table = Table::read(input.as_bytes(), None).unwrap_or_default();
        assert_eq!(table.rows[0].len(), 1);
        assert_eq!(table.rows[1].len(), 4);
    }

    #[test]
    fn strips_byte_order_mark() {
        let input = "\u{feff}name,label\nex:Cat,Cat\n";
        let table = Table::read(input.as_bytes(), None).unwrap_or_default();
        assert_eq!(table.headers[0], "name");
    }

    #[test]
    fn headerless_keeps_every_record() {
        let input = "default,ex,http://example.org/\n,foaf,http://xmlns.com/foaf/0.1/\n";
        let table = Table::read_headerless(input.as_bytes(), None).unwrap_or_default();
        assert!(table.headers.is_empty());
        assert_eq!(table.rows.len(), 2);
    }

    #[test]
    fn empty_input_is_an_empty_table() {
        let table = Table::read("".as_bytes(), None).ok();
        assert_eq!(table, Some(Table::default()));
    }
}
