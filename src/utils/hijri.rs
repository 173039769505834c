use chrono::{Datelike, Duration, NaiveDate};
use hijri_date::HijriDate;

/// Islamic month names in English (index 0 = Muharram = month 1)
const HIJRI_MONTH_NAMES: &[&str] = &[
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

fn hijri_month_name(month: usize) -> &'static str {
    if (1..=12).contains(&month) {
        HIJRI_MONTH_NAMES[month - 1]
    } else {
        "Unknown"
    }
}

/// Rough Hijri year from the Gregorian year alone.
pub fn approximate_hijri_year(gregorian_year: i32) -> i32 {
    ((gregorian_year - 622) as f64 * 1.030684).floor() as i32 + 1
}

/// Hijri date string for `date` shifted by `offset_days` (local moon sighting).
/// Falls back to an approximate year when the date is outside the
/// conversion table.
pub fn hijri_string(date: NaiveDate, offset_days: i32) -> String {
    let adjusted = date + Duration::days(offset_days as i64);

    match HijriDate::from_gr(
        adjusted.year() as usize,
        adjusted.month() as usize,
        adjusted.day() as usize,
    ) {
        Ok(hd) => format!("{} {} {} AH", hd.day(), hijri_month_name(hd.month()), hd.year()),
        Err(e) => {
            log::debug!("hijri conversion failed for {}: {}", adjusted, e);
            format!("{} AH", approximate_hijri_year(adjusted.year()))
        }
    }
}

pub fn today_hijri_string(offset_days: i32) -> String {
    hijri_string(chrono::Local::now().date_naive(), offset_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approximate_year_tracks_calendar_drift() {
        assert_eq!(approximate_hijri_year(2024), 1446);
        assert_eq!(approximate_hijri_year(2026), 1448);
    }

    #[test]
    fn month_names_are_bounded() {
        assert_eq!(hijri_month_name(9), "Ramadan");
        assert_eq!(hijri_month_name(0), "Unknown");
        assert_eq!(hijri_month_name(13), "Unknown");
    }

    #[test]
    fn converted_string_ends_with_era() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 15).unwrap();
        let s = hijri_string(date, 0);
        assert!(s.ends_with(" AH"), "{}", s);
    }
}
