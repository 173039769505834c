use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TrackerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudyTopic {
    Aqeedah,
    Fiqh,
    Hadith,
    Seerah,
    Tafseer,
    History,
    Arabic,
    Akhlaq,
}

impl StudyTopic {
    pub const ALL: [StudyTopic; 8] = [
        StudyTopic::Aqeedah,
        StudyTopic::Fiqh,
        StudyTopic::Hadith,
        StudyTopic::Seerah,
        StudyTopic::Tafseer,
        StudyTopic::History,
        StudyTopic::Arabic,
        StudyTopic::Akhlaq,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            StudyTopic::Aqeedah => "aqeedah",
            StudyTopic::Fiqh => "fiqh",
            StudyTopic::Hadith => "hadith",
            StudyTopic::Seerah => "seerah",
            StudyTopic::Tafseer => "tafseer",
            StudyTopic::History => "history",
            StudyTopic::Arabic => "arabic",
            StudyTopic::Akhlaq => "akhlaq",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StudyTopic::Aqeedah => "Aqeedah (Beliefs)",
            StudyTopic::Fiqh => "Fiqh (Jurisprudence)",
            StudyTopic::Hadith => "Hadith Studies",
            StudyTopic::Seerah => "Seerah (Prophet's Biography)",
            StudyTopic::Tafseer => "Tafseer (Quran Commentary)",
            StudyTopic::History => "Islamic History",
            StudyTopic::Arabic => "Arabic Language",
            StudyTopic::Akhlaq => "Akhlaq (Character Development)",
        }
    }
}

impl std::fmt::Display for StudyTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Accepts either the short key (`fiqh`) or the full label, ignoring case.
impl FromStr for StudyTopic {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StudyTopic::ALL
            .iter()
            .copied()
            .find(|t| t.key().eq_ignore_ascii_case(wanted) || t.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| TrackerError::UnknownTopic(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_and_label() {
        assert_eq!("fiqh".parse::<StudyTopic>().unwrap(), StudyTopic::Fiqh);
        assert_eq!(
            "Seerah (Prophet's Biography)".parse::<StudyTopic>().unwrap(),
            StudyTopic::Seerah
        );
        assert_eq!("islamic history".parse::<StudyTopic>().unwrap(), StudyTopic::History);
    }

    #[test]
    fn rejects_labels_outside_the_set() {
        assert_eq!(
            "Astronomy".parse::<StudyTopic>(),
            Err(TrackerError::UnknownTopic("Astronomy".to_string()))
        );
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<_> = StudyTopic::ALL.iter().map(|t| t.key()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), StudyTopic::ALL.len());
    }
}
