//! Date helpers for feeds and content metadata.

use chrono::{DateTime, Local, TimeZone};
use std::{fmt::Display, fs, path::Path};

/// RFC 822 date format used by RSS: `Tue, 02 Jan 2024 15:04:05 +0000`
pub const RFC822_FORMAT: &str = "%a, %d %b %Y %H:%M:%S %z";

pub fn to_rfc822<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.format(RFC822_FORMAT).to_string()
}

/// Creation date of a file, or now if the platform or file can't tell.
pub fn file_creation_date(path: &Path) -> DateTime<Local> {
    fs::metadata(path)
        .and_then(|meta| meta.created())
        .map(DateTime::<Local>::from)
        .unwrap_or_else(|_| Local::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_to_rfc822_utc() {
        let date = Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();
        assert_eq!(to_rfc822(&date), "Tue, 02 Jan 2024 15:04:05 +0000");
    }

    #[test]
    fn test_to_rfc822_offset() {
        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        let date = offset.with_ymd_and_hms(2023, 12, 31, 23, 59, 0).unwrap();
        assert_eq!(to_rfc822(&date), "Sun, 31 Dec 2023 23:59:00 +0200");
    }

    #[test]
    fn test_file_creation_date_missing_file_is_now() {
        let before = Local::now();
        let date = file_creation_date(Path::new("/definitely/not/here.md"));
        assert!(date >= before);
    }

    #[test]
    fn test_file_creation_date_existing_file() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let date = file_creation_date(file.path());
        assert!(date <= Local::now());
    }
}
