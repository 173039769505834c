pub mod action;
pub mod reducer;

pub use action::Action;
pub use reducer::reduce;

use crate::error::TrackerError;
use crate::models::{CounterGoal, DailyTaskState};

/// The three numeric goals of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Quran,
    Study,
    Dhikr,
}

impl Counter {
    pub fn label(&self) -> &'static str {
        match self {
            Counter::Quran => "Quran",
            Counter::Study => "Study",
            Counter::Dhikr => "Dhikr",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Counter::Quran => "pages",
            Counter::Study => "minutes",
            Counter::Dhikr => "",
        }
    }

    pub fn goal<'a>(&self, state: &'a DailyTaskState) -> &'a CounterGoal {
        match self {
            Counter::Quran => &state.quran_reading,
            Counter::Study => &state.islamic_study,
            Counter::Dhikr => &state.dhikr,
        }
    }
}

/// Owns the day's record for one session and routes every change through
/// `reduce`.
#[derive(Debug, Clone, Default)]
pub struct DailyTracker {
    state: DailyTaskState,
}

impl DailyTracker {
    pub fn new(state: DailyTaskState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &DailyTaskState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) {
        log::debug!("dispatch {:?}", action);
        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);
    }

    // ─── Prayers ─────────────────────────────────────────────────────────────

    pub fn toggle_prayer(&mut self, name: &str) -> Result<(), TrackerError> {
        let action = Action::toggle_prayer_named(name).inspect_err(|e| log::warn!("{}", e))?;
        self.dispatch(action);
        Ok(())
    }

    // ─── Counters ────────────────────────────────────────────────────────────

    pub fn set_quran_pages(&mut self, n: i64) {
        self.dispatch(Action::SetQuranPages(n));
    }

    pub fn set_study_minutes(&mut self, n: i64) {
        self.dispatch(Action::SetStudyMinutes(n));
    }

    pub fn set_dhikr_count(&mut self, n: i64) {
        self.dispatch(Action::SetDhikrCount(n));
    }

    pub fn set_counter(&mut self, counter: Counter, n: i64) {
        match counter {
            Counter::Quran => self.set_quran_pages(n),
            Counter::Study => self.set_study_minutes(n),
            Counter::Dhikr => self.set_dhikr_count(n),
        }
    }

    /// Current value plus `delta`, clamped like any other update.
    pub fn adjust_counter(&mut self, counter: Counter, delta: i64) {
        let current = counter.goal(&self.state).value() as i64;
        self.set_counter(counter, current.saturating_add(delta));
    }

    pub fn adjust_dhikr_count(&mut self, delta: i64) {
        self.adjust_counter(Counter::Dhikr, delta);
    }

    // ─── Dua, topic, notes ───────────────────────────────────────────────────

    pub fn toggle_dua(&mut self) {
        self.dispatch(Action::ToggleDua);
    }

    pub fn set_dua_text(&mut self, text: impl Into<String>) {
        self.dispatch(Action::SetDuaText(text.into()));
    }

    pub fn select_topic(&mut self, topic: &str) -> Result<(), TrackerError> {
        let action = Action::select_topic_named(topic).inspect_err(|e| log::warn!("{}", e))?;
        self.dispatch(action);
        Ok(())
    }

    pub fn set_notes(&mut self, text: impl Into<String>) {
        self.dispatch(Action::SetNotes(text.into()));
    }

    pub fn reset(&mut self) {
        self.dispatch(Action::Reset);
    }

    pub fn daily_progress_percent(&self) -> u8 {
        self.state.progress_percent()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrayerType, StudyTopic};

    #[test]
    fn unknown_prayer_is_rejected_and_state_unchanged() {
        let mut tracker = DailyTracker::default();
        tracker.toggle_prayer("fajr").unwrap();
        let before = tracker.state().clone();

        let err = tracker.toggle_prayer("witr").unwrap_err();
        assert_eq!(err, TrackerError::UnknownPrayer("witr".to_string()));
        assert_eq!(tracker.state(), &before);
    }

    #[test]
    fn unknown_topic_is_rejected_and_selection_kept() {
        let mut tracker = DailyTracker::default();
        tracker.select_topic("Hadith Studies").unwrap();

        let err = tracker.select_topic("Cooking").unwrap_err();
        assert_eq!(err, TrackerError::UnknownTopic("Cooking".to_string()));
        assert_eq!(tracker.state().selected_topic, Some(StudyTopic::Hadith));
    }

    #[test]
    fn empty_topic_clears_selection() {
        let mut tracker = DailyTracker::default();
        tracker.select_topic("arabic").unwrap();
        tracker.select_topic("").unwrap();
        assert_eq!(tracker.state().selected_topic, None);
    }

    #[test]
    fn dhikr_helpers_match_counter_buttons() {
        let mut tracker = DailyTracker::default();
        tracker.adjust_dhikr_count(-1);
        assert_eq!(tracker.state().dhikr.value(), 0);
        for _ in 0..9 {
            tracker.adjust_dhikr_count(10);
        }
        tracker.adjust_dhikr_count(1);
        assert!(!tracker.state().dhikr.completed());
        tracker.adjust_dhikr_count(9);
        assert_eq!(tracker.state().dhikr.value(), 100);
        assert!(tracker.state().dhikr.completed());
    }

    #[test]
    fn study_minutes_step_down_clamps() {
        let mut tracker = DailyTracker::default();
        tracker.adjust_counter(Counter::Study, 5);
        tracker.adjust_counter(Counter::Study, -5);
        tracker.adjust_counter(Counter::Study, -5);
        assert_eq!(tracker.state().islamic_study.value(), 0);
    }

    #[test]
    fn full_day_reaches_one_hundred() {
        let mut tracker = DailyTracker::default();
        assert_eq!(tracker.daily_progress_percent(), 0);
        for prayer in PrayerType::ALL {
            tracker.toggle_prayer(prayer.as_str()).unwrap();
        }
        tracker.set_quran_pages(2);
        tracker.set_study_minutes(30);
        tracker.set_dhikr_count(100);
        tracker.toggle_dua();
        assert_eq!(tracker.daily_progress_percent(), 100);
    }

    #[test]
    fn huge_deltas_saturate_instead_of_overflowing() {
        let mut tracker = DailyTracker::default();
        tracker.set_dhikr_count(5);
        tracker.adjust_dhikr_count(i64::MAX);
        assert_eq!(tracker.state().dhikr.value(), u32::MAX);

        tracker.set_quran_pages(3);
        tracker.adjust_counter(Counter::Quran, i64::MIN);
        assert_eq!(tracker.state().quran_reading.value(), 0);
    }

    #[test]
    fn counter_dispatch_reaches_the_right_goal() {
        let mut tracker = DailyTracker::default();
        tracker.set_counter(Counter::Study, 12);
        tracker.adjust_counter(Counter::Quran, 3);
        tracker.adjust_counter(Counter::Quran, -1);
        assert_eq!(tracker.state().islamic_study.value(), 12);
        assert_eq!(tracker.state().quran_reading.value(), 2);
        assert_eq!(Counter::Dhikr.goal(tracker.state()).value(), 0);
    }

    #[test]
    fn dua_text_is_kept_verbatim() {
        let mut tracker = DailyTracker::default();
        tracker.set_dua_text("Rabbi zidni ilma\n");
        assert_eq!(tracker.state().dua.studied_text, "Rabbi zidni ilma\n");
        assert!(!tracker.state().dua.completed);
    }
}
