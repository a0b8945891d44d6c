//! Locale-aware date formatting

use chrono::{DateTime, Datelike, TimeZone, Utc};

use crate::content::Lang;

const TR_MONTHS: [&str; 12] = [
    "Ocak", "Şubat", "Mart", "Nisan", "Mayıs", "Haziran", "Temmuz", "Ağustos", "Eylül", "Ekim",
    "Kasım", "Aralık",
];

/// Long date in the given locale, e.g. "15 Ocak 2024" / "January 15, 2024"
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, lang: Lang) -> String
where
    Tz::Offset: std::fmt::Display,
{
    match lang {
        // chrono has no month-name localization, so Turkish uses its own table
        Lang::Tr => format!(
            "{} {} {}",
            date.day(),
            TR_MONTHS[date.month0() as usize],
            date.year()
        ),
        Lang::En => date.format("%B %-d, %Y").to_string(),
    }
}

/// UTC ISO 8601 timestamp with millisecond precision
pub fn format_date_iso<Tz: TimeZone>(date: &DateTime<Tz>) -> String {
    date.with_timezone(&Utc)
        .format("%Y-%m-%dT%H:%M:%S%.3fZ")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_tr() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(&date, Lang::Tr), "15 Ocak 2024");

        let date = Utc.with_ymd_and_hms(2023, 8, 3, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date, Lang::Tr), "3 Ağustos 2023");
    }

    #[test]
    fn test_format_date_en() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date(&date, Lang::En), "January 15, 2024");

        let date = Utc.with_ymd_and_hms(2023, 8, 3, 0, 0, 0).unwrap();
        assert_eq!(format_date(&date, Lang::En), "August 3, 2023");
    }

    #[test]
    fn test_format_date_iso() {
        let date = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(format_date_iso(&date), "2024-01-15T10:30:00.000Z");
    }
}
