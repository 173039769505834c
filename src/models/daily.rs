use serde::Serialize;

use crate::models::{CounterGoal, PrayerType, Prayers, StudyTopic};

pub const DEFAULT_QURAN_PAGES: u32 = 2;
pub const DEFAULT_STUDY_MINUTES: u32 = 30;
pub const DEFAULT_DHIKR_COUNT: u32 = 100;

/// Prayers plus the four optional practices.
const TASK_COUNT: f64 = 9.0;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dua {
    pub completed: bool,
    pub studied_text: String,
}

/// Everything tracked for the current day. Lives only for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyTaskState {
    pub prayers: Prayers,
    pub quran_reading: CounterGoal,
    pub islamic_study: CounterGoal,
    pub dhikr: CounterGoal,
    pub dua: Dua,
    pub selected_topic: Option<StudyTopic>,
    pub notes: String,
}

impl Default for DailyTaskState {
    fn default() -> Self {
        Self::with_targets(DEFAULT_QURAN_PAGES, DEFAULT_STUDY_MINUTES, DEFAULT_DHIKR_COUNT)
    }
}

impl DailyTaskState {
    pub fn with_targets(quran_pages: u32, study_minutes: u32, dhikr_count: u32) -> Self {
        Self {
            prayers: Prayers::default(),
            quran_reading: CounterGoal::new(quran_pages),
            islamic_study: CounterGoal::new(study_minutes),
            dhikr: CounterGoal::new(dhikr_count),
            dua: Dua::default(),
            selected_topic: None,
            notes: String::new(),
        }
    }

    /// Fresh record carrying over this record's targets.
    pub fn cleared(&self) -> Self {
        Self::with_targets(
            self.quran_reading.target(),
            self.islamic_study.target(),
            self.dhikr.target(),
        )
    }

    pub fn optional_completed_count(&self) -> u8 {
        [
            self.quran_reading.completed(),
            self.islamic_study.completed(),
            self.dhikr.completed(),
            self.dua.completed,
        ]
        .iter()
        .filter(|c| **c)
        .count() as u8
    }

    pub fn completed_tasks(&self) -> u8 {
        self.prayers.completed_count() + self.optional_completed_count()
    }

    pub fn progress_percent(&self) -> u8 {
        (self.completed_tasks() as f64 / TASK_COUNT * 100.0).round() as u8
    }

    pub fn snapshot(&self) -> DailySnapshot {
        DailySnapshot {
            prayers: self
                .prayers
                .iter()
                .map(|(prayer, done)| PrayerSnapshot { prayer, done })
                .collect(),
            quran_reading: GoalSnapshot::from(&self.quran_reading),
            islamic_study: GoalSnapshot::from(&self.islamic_study),
            dhikr: GoalSnapshot::from(&self.dhikr),
            dua: self.dua.clone(),
            selected_topic: self.selected_topic.map(|t| t.label().to_string()),
            notes: self.notes.clone(),
            progress_percent: self.progress_percent(),
        }
    }
}

/// Read-only view of the state with the derived values filled in.
#[derive(Debug, Clone, Serialize)]
pub struct DailySnapshot {
    pub prayers: Vec<PrayerSnapshot>,
    pub quran_reading: GoalSnapshot,
    pub islamic_study: GoalSnapshot,
    pub dhikr: GoalSnapshot,
    pub dua: Dua,
    pub selected_topic: Option<String>,
    pub notes: String,
    pub progress_percent: u8,
}

#[derive(Debug, Clone, Serialize)]
pub struct PrayerSnapshot {
    pub prayer: PrayerType,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalSnapshot {
    pub value: u32,
    pub target: u32,
    pub completed: bool,
    pub percent: u32,
}

impl From<&CounterGoal> for GoalSnapshot {
    fn from(goal: &CounterGoal) -> Self {
        Self {
            value: goal.value(),
            target: goal.target(),
            completed: goal.completed(),
            percent: goal.percent(),
        }
    }
}
