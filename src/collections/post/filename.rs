use chrono::{DateTime, FixedOffset};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::utils::date::parse_calendar_date;
use crate::utils::error::{QuillError, QuillResult};

/// `[dirs/]YYYY-MM-DD-slug.ext`
static POST_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:.+/)*(\d+-\d+-\d+)-(.*)(\.[^.]+)$").expect("valid post filename regex")
});

/// Pieces recovered from a post filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedName {
    pub date: DateTime<FixedOffset>,
    pub slug: String,
    pub extension: String,
}

/// Whether `name` has the shape of a post filename. The date digits are
/// not validated here.
pub fn is_valid_name(name: &str) -> bool {
    POST_NAME_RE.is_match(name)
}

/// Split a post filename into date, slug and extension.
///
/// A name of the wrong shape is `InvalidFilename`; a well-shaped name whose
/// date is not on the calendar is `InvalidDate`.
pub fn parse(name: &str) -> QuillResult<ParsedName> {
    let caps = POST_NAME_RE
        .captures(name)
        .ok_or_else(|| QuillError::InvalidFilename { name: name.to_string() })?;

    let date = parse_calendar_date(&caps[1]).ok_or_else(|| QuillError::invalid_date(name, &caps[1]))?;

    Ok(ParsedName {
        date,
        slug: caps[2].to_string(),
        extension: caps[3].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_parse_recovers_date_slug_extension() {
        let parsed = parse("2008-11-05-my-awesome-post.markdown").unwrap();
        assert_eq!((parsed.date.year(), parsed.date.month(), parsed.date.day()), (2008, 11, 5));
        assert_eq!(parsed.slug, "my-awesome-post");
        assert_eq!(parsed.extension, ".markdown");
    }

    #[test]
    fn test_parse_with_path_prefix() {
        let parsed = parse("foo/bar/2009-01-27-category.textile").unwrap();
        assert_eq!(parsed.slug, "category");
        assert_eq!(parsed.extension, ".textile");
    }

    #[test]
    fn test_slug_keeps_inner_dots() {
        let parsed = parse("2009-05-18-v1.0-release.md").unwrap();
        assert_eq!(parsed.slug, "v1.0-release");
        assert_eq!(parsed.extension, ".md");
    }

    #[test]
    fn test_is_valid_name() {
        assert!(is_valid_name("2008-11-05-my-awesome-post.md"));
        assert!(is_valid_name("foo/2008-11-05-post.html"));
        assert!(is_valid_name("2008-13-45-bad-date.md"));
        assert!(!is_valid_name("about.md"));
        assert!(!is_valid_name("2008-11-05-no-extension"));
        assert!(!is_valid_name("blah2008-11-05"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn test_bad_shape_is_invalid_filename() {
        let err = parse("index.html").unwrap_err();
        assert!(matches!(err, QuillError::InvalidFilename { .. }));
    }

    #[test]
    fn test_bad_calendar_date_is_invalid_date() {
        let err = parse("2008-13-05-month-thirteen.md").unwrap_err();
        assert!(matches!(err, QuillError::InvalidDate { .. }));
        assert!(err.to_string().contains("2008-13-05-month-thirteen.md"));
    }
}
