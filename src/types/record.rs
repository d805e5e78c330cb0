//! Raw batch records
//!
//! A `RawRecord` is one line of a batch file split into fields, before any
//! validation. Field-count and type checks belong to the replay phases.
//!
//! Splitting is plain: every `,` separates two fields and there is no quoting.
//! Trailing empty fields are dropped, so `Bob,500,` has two fields, while an empty
//! line is a single empty field. Fields are trimmed after they are counted.

use csv::StringRecord;

/// One undecoded line of a batch file
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    /// 1-based line number in the source file
    pub line: u64,

    /// Trimmed fields in column order
    pub fields: StringRecord,

    /// The line exactly as read, without its terminator
    text: String,
}

impl RawRecord {
    /// Split one line of a batch file
    pub fn parse(line: u64, text: &str) -> Self {
        let mut fields: Vec<&str> = text.split(',').collect();
        if !text.is_empty() {
            while fields.last().is_some_and(|field| field.is_empty()) {
                fields.pop();
            }
        }

        RawRecord {
            line,
            fields: fields.into_iter().map(str::trim).collect(),
            text: text.to_string(),
        }
    }

    /// Build a record from already separated fields
    pub fn from_fields(line: u64, fields: &[&str]) -> Self {
        RawRecord {
            line,
            fields: fields.iter().map(|field| field.trim()).collect(),
            text: fields.join(","),
        }
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The offending line as it appeared in the input, for diagnostics
    pub fn raw(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fields(record: &RawRecord) -> Vec<&str> {
        record.fields.iter().collect()
    }

    #[test]
    fn test_from_fields_trims_whitespace() {
        let record = RawRecord::from_fields(3, &["  Bob ", " 500"]);

        assert_eq!(record.line, 3);
        assert_eq!(record.len(), 2);
        assert_eq!(&record.fields[0], "Bob");
        assert_eq!(&record.fields[1], "500");
    }

    #[rstest]
    #[case::plain("Bob,500", vec!["Bob", "500"])]
    #[case::padded(" Bob , 500 ", vec!["Bob", "500"])]
    #[case::trailing_comma("Bob,500,", vec!["Bob", "500"])]
    #[case::trailing_commas("Bob,500,,,", vec!["Bob", "500"])]
    #[case::trailing_blank_field("Bob,500, ", vec!["Bob", "500", ""])]
    #[case::inner_empty("Bob,,500", vec!["Bob", "", "500"])]
    #[case::leading_empty(",500", vec!["", "500"])]
    #[case::blank_line("", vec![""])]
    #[case::spaces_only("   ", vec![""])]
    #[case::commas_only(",,", vec![])]
    #[case::quotes_are_data("\"Smith, John\",500", vec!["\"Smith", "John\"", "500"])]
    fn test_parse_splits_on_every_comma(#[case] text: &str, #[case] expected: Vec<&str>) {
        let record = RawRecord::parse(1, text);

        assert_eq!(fields(&record), expected);
    }

    #[test]
    fn test_raw_keeps_the_line_as_read() {
        let record = RawRecord::parse(4, " 1 , deposit , 100 ,");

        assert_eq!(record.raw(), " 1 , deposit , 100 ,");
        assert_eq!(record.len(), 3);
    }

    #[test]
    fn test_raw_rejoins_separated_fields() {
        let record = RawRecord::from_fields(1, &["1", "deposit", "100"]);

        assert_eq!(record.raw(), "1,deposit,100");
    }

    #[test]
    fn test_single_field_record() {
        let record = RawRecord::parse(2, "BadRow");

        assert_eq!(record.len(), 1);
        assert!(!record.is_empty());
        assert_eq!(record.raw(), "BadRow");
    }
}
