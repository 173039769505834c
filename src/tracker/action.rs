use crate::error::TrackerError;
use crate::models::{PrayerType, StudyTopic};

/// Every way the day's record can change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    TogglePrayer(PrayerType),
    SetQuranPages(i64),
    SetStudyMinutes(i64),
    SetDhikrCount(i64),
    ToggleDua,
    SetDuaText(String),
    SelectTopic(Option<StudyTopic>),
    SetNotes(String),
    Reset,
}

impl Action {
    pub fn toggle_prayer_named(name: &str) -> Result<Self, TrackerError> {
        Ok(Action::TogglePrayer(name.parse()?))
    }

    /// An empty (or all-whitespace) topic clears the selection.
    pub fn select_topic_named(topic: &str) -> Result<Self, TrackerError> {
        if topic.trim().is_empty() {
            return Ok(Action::SelectTopic(None));
        }
        Ok(Action::SelectTopic(Some(topic.parse()?)))
    }
}
