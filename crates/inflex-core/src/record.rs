// Corpus records: `lemma \t form \t msd`

use std::fmt;

/// Error type for malformed corpus lines.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    #[error("line {line}: expected 3 tab-separated fields, found {found}")]
    FieldCount { line: usize, found: usize },
}

/// A single (lemma, form, MSD) triple.
///
/// An empty `form` marks a slot to be filled in (paradigm completion input).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    pub lemma: String,
    pub form: String,
    pub msd: String,
}

impl Record {
    pub fn new(lemma: impl Into<String>, form: impl Into<String>, msd: impl Into<String>) -> Self {
        Self {
            lemma: lemma.into(),
            form: form.into(),
            msd: msd.into(),
        }
    }

    /// Parse one line. Surrounding whitespace is trimmed first; the line
    /// must then contain exactly three tab-separated fields.
    ///
    /// `line_no` is 1-based and only used for error reporting.
    pub fn parse(line: &str, line_no: usize) -> Result<Self, RecordError> {
        let fields: Vec<&str> = line.trim().split('\t').collect();
        match fields.as_slice() {
            [lemma, form, msd] => Ok(Self::new(*lemma, *form, *msd)),
            _ => Err(RecordError::FieldCount {
                line: line_no,
                found: fields.len(),
            }),
        }
    }

    /// Whether the form slot is blank.
    pub fn is_blank(&self) -> bool {
        self.form.is_empty()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.lemma, self.form, self.msd)
    }
}

/// Parse a whole corpus text. Blank lines are skipped.
pub fn parse_records(text: &str) -> Result<Vec<Record>, RecordError> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| Record::parse(line, i + 1))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_fields() {
        let rec = Record::parse("walk\twalked\tV;PST", 1).unwrap();
        assert_eq!(rec, Record::new("walk", "walked", "V;PST"));
    }

    #[test]
    fn keeps_blank_form_slot() {
        let rec = Record::parse("go\t\tV;PRS", 1).unwrap();
        assert!(rec.is_blank());
        assert_eq!(rec.msd, "V;PRS");
    }

    #[test]
    fn trims_line_endings() {
        let rec = Record::parse("go\twent\tV;PST\r\n", 1).unwrap();
        assert_eq!(rec.msd, "V;PST");
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            Record::parse("walk\twalked", 7),
            Err(RecordError::FieldCount { line: 7, found: 2 })
        );
        assert_eq!(
            Record::parse("a\tb\tc\td", 2),
            Err(RecordError::FieldCount { line: 2, found: 4 })
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let rec = Record::new("käsi", "kädet", "N;NOM;PL");
        assert_eq!(Record::parse(&rec.to_string(), 1).unwrap(), rec);
    }

    #[test]
    fn parse_records_skips_blank_lines_and_reports_line_numbers() {
        let text = "a\tb\tX\n\nc\td\tY\nbroken\n";
        let err = parse_records(text).unwrap_err();
        assert_eq!(err, RecordError::FieldCount { line: 4, found: 1 });

        let ok = parse_records("a\tb\tX\n\nc\td\tY\n").unwrap();
        assert_eq!(ok.len(), 2);
    }
}
