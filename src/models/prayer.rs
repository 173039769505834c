use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TrackerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrayerType {
    Fajr,
    Dhuhr,
    Asr,
    Maghrib,
    Isha,
}

impl PrayerType {
    pub const ALL: [PrayerType; 5] = [
        PrayerType::Fajr,
        PrayerType::Dhuhr,
        PrayerType::Asr,
        PrayerType::Maghrib,
        PrayerType::Isha,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrayerType::Fajr => "fajr",
            PrayerType::Dhuhr => "dhuhr",
            PrayerType::Asr => "asr",
            PrayerType::Maghrib => "maghrib",
            PrayerType::Isha => "isha",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            PrayerType::Fajr => "Fajr",
            PrayerType::Dhuhr => "Dhuhr",
            PrayerType::Asr => "Asr",
            PrayerType::Maghrib => "Maghrib",
            PrayerType::Isha => "Isha",
        }
    }

    fn index(&self) -> usize {
        match self {
            PrayerType::Fajr => 0,
            PrayerType::Dhuhr => 1,
            PrayerType::Asr => 2,
            PrayerType::Maghrib => 3,
            PrayerType::Isha => 4,
        }
    }
}

impl std::fmt::Display for PrayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for PrayerType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fajr" => Ok(PrayerType::Fajr),
            "dhuhr" | "zuhr" | "dhuhur" => Ok(PrayerType::Dhuhr),
            "asr" => Ok(PrayerType::Asr),
            "maghrib" => Ok(PrayerType::Maghrib),
            "isha" => Ok(PrayerType::Isha),
            _ => Err(TrackerError::UnknownPrayer(s.to_string())),
        }
    }
}

/// Completion flags for the five daily prayers. The key set is fixed by
/// `PrayerType`, so entries can be flipped but never added or removed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Prayers {
    done: [bool; 5],
}

impl Prayers {
    pub fn is_done(&self, prayer: PrayerType) -> bool {
        self.done[prayer.index()]
    }

    pub fn toggle(&mut self, prayer: PrayerType) {
        let slot = &mut self.done[prayer.index()];
        *slot = !*slot;
    }

    pub fn completed_count(&self) -> u8 {
        self.done.iter().filter(|d| **d).count() as u8
    }

    pub fn iter(&self) -> impl Iterator<Item = (PrayerType, bool)> + '_ {
        PrayerType::ALL.iter().map(move |p| (*p, self.is_done(*p)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Fajr".parse::<PrayerType>().unwrap(), PrayerType::Fajr);
        assert_eq!("ISHA".parse::<PrayerType>().unwrap(), PrayerType::Isha);
        assert_eq!(" maghrib ".parse::<PrayerType>().unwrap(), PrayerType::Maghrib);
    }

    #[test]
    fn accepts_zuhr_spellings_for_dhuhr() {
        assert_eq!("zuhr".parse::<PrayerType>().unwrap(), PrayerType::Dhuhr);
        assert_eq!("dhuhur".parse::<PrayerType>().unwrap(), PrayerType::Dhuhr);
    }

    #[test]
    fn rejects_unknown_prayer() {
        let err = "tahajjud".parse::<PrayerType>().unwrap_err();
        assert_eq!(err, TrackerError::UnknownPrayer("tahajjud".to_string()));
    }

    #[test]
    fn toggle_flips_only_the_named_prayer() {
        let mut prayers = Prayers::default();
        prayers.toggle(PrayerType::Asr);
        assert!(prayers.is_done(PrayerType::Asr));
        assert_eq!(prayers.completed_count(), 1);
        assert!(!prayers.is_done(PrayerType::Fajr));
    }

    #[test]
    fn iter_yields_all_five_in_order() {
        let names: Vec<_> = Prayers::default().iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(names, ["fajr", "dhuhr", "asr", "maghrib", "isha"]);
    }
}
