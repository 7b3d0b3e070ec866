//! CSV primitives for the loc log
//!
//! The log is plain comma-separated text with a header row. Fields may be
//! double-quoted when they contain commas (file paths, author names), so a
//! naive `split(',')` is not enough.

use super::LocError;

/// Split one CSV line into fields.
///
/// A field that starts with `"` runs until the closing quote, with `""`
/// as an escaped literal quote. An unterminated quote swallows the rest
/// of the line rather than failing; row-level validation happens later.
pub fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
        } else {
            match c {
                '"' if field.is_empty() => in_quotes = true,
                ',' => fields.push(std::mem::take(&mut field)),
                _ => field.push(c),
            }
        }
    }
    fields.push(field);
    fields
}

/// Column positions resolved from the header row.
///
/// Column order is not fixed by the format; only the names are. The
/// `datetime` column is optional because it can be rebuilt from
/// `date` + `time` + `timezone`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub commit: usize,
    pub file: usize,
    pub author: usize,
    pub date: usize,
    pub time: usize,
    pub timezone: usize,
    pub line: usize,
    pub depth: usize,
    pub length: usize,
    pub kind: usize,
    pub datetime: Option<usize>,
}

impl Header {
    /// Resolve column positions from the header row
    pub fn parse(line: &str) -> Result<Self, LocError> {
        let names = split_fields(line);
        Ok(Self {
            commit: column(&names, "commit")?,
            file: column(&names, "file")?,
            author: column(&names, "author")?,
            date: column(&names, "date")?,
            time: column(&names, "time")?,
            timezone: column(&names, "timezone")?,
            line: column(&names, "line")?,
            depth: column(&names, "depth")?,
            length: column(&names, "length")?,
            kind: column(&names, "type")?,
            datetime: find(&names, "datetime"),
        })
    }

    /// Minimum field count a data row needs to cover every required column
    pub fn width(&self) -> usize {
        [
            self.commit,
            self.file,
            self.author,
            self.date,
            self.time,
            self.timezone,
            self.line,
            self.depth,
            self.length,
            self.kind,
        ]
        .into_iter()
        .max()
        .unwrap_or(0)
            + 1
    }
}

fn find(names: &[String], name: &str) -> Option<usize> {
    names.iter().position(|n| n.trim() == name)
}

fn column(names: &[String], name: &'static str) -> Result<usize, LocError> {
    find(names, name).ok_or(LocError::MissingColumn(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_plain_fields() {
        assert_eq!(split_fields("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_keeps_empty_fields() {
        assert_eq!(split_fields("a,,c,"), vec!["a", "", "c", ""]);
    }

    #[test]
    fn test_split_quoted_comma() {
        assert_eq!(
            split_fields(r#"src/a.rs,"Doe, Jane",42"#),
            vec!["src/a.rs", "Doe, Jane", "42"]
        );
    }

    #[test]
    fn test_split_escaped_quote() {
        assert_eq!(split_fields(r#""say ""hi""",x"#), vec![r#"say "hi""#, "x"]);
    }

    #[test]
    fn test_split_unterminated_quote_swallows_rest() {
        assert_eq!(split_fields(r#""open,field"#), vec!["open,field"]);
    }

    #[test]
    fn test_split_quote_mid_field_is_literal() {
        // Only a leading quote opens a quoted field
        assert_eq!(split_fields(r#"ab"c,d"#), vec![r#"ab"c"#, "d"]);
    }

    #[test]
    fn test_header_parse_canonical_order() {
        let header =
            Header::parse("commit,file,author,date,time,timezone,line,depth,length,type,datetime")
                .unwrap();
        assert_eq!(header.commit, 0);
        assert_eq!(header.kind, 9);
        assert_eq!(header.datetime, Some(10));
        assert_eq!(header.width(), 10);
    }

    #[test]
    fn test_header_parse_shuffled_columns() {
        let header =
            Header::parse("file,commit,type,author,date,time,timezone,line,depth,length").unwrap();
        assert_eq!(header.file, 0);
        assert_eq!(header.commit, 1);
        assert_eq!(header.kind, 2);
        assert_eq!(header.datetime, None);
        assert_eq!(header.width(), 10);
    }

    #[test]
    fn test_header_missing_column() {
        let err = Header::parse("commit,file,author").unwrap_err();
        assert!(matches!(err, LocError::MissingColumn("date")));
    }
}
