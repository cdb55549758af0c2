// crates/geonames-core/src/records.rs

//! # Record Parser
//!
//! Turns a GeoNames dump into positional records. The first line is always
//! dropped as a header, then blank lines and `#` comments are skipped and the
//! rest is split on tabs. Fields are kept verbatim.

use crate::error::{GeoNamesError, Result};
use crate::source::DatasetKind;

/// One tab-separated line of a dump. Field meaning is purely positional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line number in the source text, for diagnostics.
    pub line: usize,
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn new(line: usize, fields: Vec<String>) -> Self {
        Self { line, fields }
    }

    /// Field at `index`, or a [`GeoNamesError::MalformedRecord`] if the record is too short.
    pub fn field(&self, kind: DatasetKind, index: usize) -> Result<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| GeoNamesError::MalformedRecord {
                kind,
                line: self.line,
                reason: format!(
                    "expected at least {} fields, found {}",
                    index + 1,
                    self.fields.len()
                ),
            })
    }
}

/// Decodes `bytes` as UTF-8 and parses them with [`parse_text`].
pub fn parse_bytes(kind: DatasetKind, bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let text =
        std::str::from_utf8(bytes).map_err(|source| GeoNamesError::Decoding { kind, source })?;
    Ok(parse_text(text))
}

/// Splits on `\n` only; a `\r` before the break stays part of the last field.
pub fn parse_text(text: &str) -> Vec<RawRecord> {
    text.split('\n')
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(idx, line)| {
            RawRecord::new(idx + 1, line.split('\t').map(str::to_string).collect())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(records: &[RawRecord]) -> Vec<Vec<&str>> {
        records
            .iter()
            .map(|r| r.fields.iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn drops_header_blank_and_comment_lines() {
        let text = "code\tname\nCH.ZH\tZurich\n\n# comment\nCH.ZG\tZug\n";
        let records = parse_text(text);
        assert_eq!(
            fields(&records),
            vec![vec!["CH.ZH", "Zurich"], vec!["CH.ZG", "Zug"]]
        );
        assert_eq!(records[0].line, 2);
        assert_eq!(records[1].line, 5);
    }

    #[test]
    fn header_is_dropped_even_if_it_looks_like_data() {
        let records = parse_text("AD\tAndorra\nAE\tEmirates");
        assert_eq!(fields(&records), vec![vec!["AE", "Emirates"]]);
    }

    #[test]
    fn empty_and_single_line_inputs_yield_nothing() {
        assert!(parse_text("").is_empty());
        assert!(parse_text("only a header").is_empty());
        assert!(parse_text("only a header\n").is_empty());
    }

    #[test]
    fn fields_are_not_trimmed() {
        let records = parse_text("h\n a \t\tb\r");
        assert_eq!(fields(&records), vec![vec![" a ", "", "b\r"]]);
    }

    #[test]
    fn comment_marker_must_be_first_character() {
        let records = parse_text("h\n #not a comment\tx");
        assert_eq!(fields(&records), vec![vec![" #not a comment", "x"]]);
    }

    #[test]
    fn invalid_utf8_is_a_decoding_error() {
        let err = parse_bytes(DatasetKind::Regions, b"h\n\xff\xfe").unwrap_err();
        assert!(matches!(
            err,
            GeoNamesError::Decoding {
                kind: DatasetKind::Regions,
                ..
            }
        ));
    }

    #[test]
    fn missing_field_reports_line() {
        let record = RawRecord::new(3, vec!["AD".into()]);
        let err = record.field(DatasetKind::Countries, 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed countries record on line 3: expected at least 5 fields, found 1"
        );
    }
}
