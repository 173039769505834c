use crate::models::DailyTaskState;
use crate::tracker::Action;

/// Apply one action to the day's record and return the next record.
pub fn reduce(mut state: DailyTaskState, action: Action) -> DailyTaskState {
    match action {
        Action::TogglePrayer(prayer) => state.prayers.toggle(prayer),
        Action::SetQuranPages(n) => state.quran_reading = state.quran_reading.with_value(n),
        Action::SetStudyMinutes(n) => state.islamic_study = state.islamic_study.with_value(n),
        Action::SetDhikrCount(n) => state.dhikr = state.dhikr.with_value(n),
        Action::ToggleDua => state.dua.completed = !state.dua.completed,
        Action::SetDuaText(text) => state.dua.studied_text = text,
        Action::SelectTopic(topic) => state.selected_topic = topic,
        Action::SetNotes(text) => state.notes = text,
        Action::Reset => return state.cleared(),
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PrayerType, StudyTopic};

    fn apply(actions: Vec<Action>) -> DailyTaskState {
        actions.into_iter().fold(DailyTaskState::default(), reduce)
    }

    #[test]
    fn negative_counters_store_zero() {
        for n in [-1, -10, i64::MIN] {
            let state = apply(vec![
                Action::SetQuranPages(n),
                Action::SetStudyMinutes(n),
                Action::SetDhikrCount(n),
            ]);
            assert_eq!(state.quran_reading.value(), 0);
            assert_eq!(state.islamic_study.value(), 0);
            assert_eq!(state.dhikr.value(), 0);
        }
    }

    #[test]
    fn completion_is_never_stale() {
        let mut state = DailyTaskState::default();
        for n in [0, 1, 2, 5, 1, 2, 0] {
            state = reduce(state, Action::SetQuranPages(n));
            assert_eq!(state.quran_reading.completed(), n >= 2);
        }
        for n in [29, 30, 0] {
            state = reduce(state, Action::SetStudyMinutes(n));
            assert_eq!(state.islamic_study.completed(), n >= 30);
        }
        for n in [99, 100, 101, 99] {
            state = reduce(state, Action::SetDhikrCount(n));
            assert_eq!(state.dhikr.completed(), n >= 100);
        }
    }

    #[test]
    fn double_toggle_restores_prayer() {
        let before = DailyTaskState::default();
        let after = apply(vec![
            Action::TogglePrayer(PrayerType::Maghrib),
            Action::TogglePrayer(PrayerType::Maghrib),
        ]);
        assert_eq!(before, after);
    }

    #[test]
    fn everything_done_is_one_hundred_percent() {
        let mut actions: Vec<Action> = PrayerType::ALL
            .iter()
            .map(|p| Action::TogglePrayer(*p))
            .collect();
        actions.extend([
            Action::SetQuranPages(2),
            Action::SetStudyMinutes(30),
            Action::SetDhikrCount(100),
            Action::ToggleDua,
        ]);
        assert_eq!(apply(actions).progress_percent(), 100);
    }

    #[test]
    fn only_fajr_is_eleven_percent() {
        let state = apply(vec![Action::TogglePrayer(PrayerType::Fajr)]);
        assert_eq!(state.progress_percent(), 11);
    }

    #[test]
    fn notes_are_stored_verbatim() {
        for text in ["", "line one\nline two\n", "  padded  "] {
            let state = apply(vec![Action::SetNotes("old".into()), Action::SetNotes(text.into())]);
            assert_eq!(state.notes, text);
        }
    }

    #[test]
    fn topic_can_be_selected_and_cleared() {
        let state = apply(vec![Action::SelectTopic(Some(StudyTopic::Tafseer))]);
        assert_eq!(state.selected_topic, Some(StudyTopic::Tafseer));
        let state = reduce(state, Action::SelectTopic(None));
        assert_eq!(state.selected_topic, None);
    }

    #[test]
    fn reset_clears_progress_but_keeps_targets() {
        let start = DailyTaskState::with_targets(4, 20, 33);
        let state = [
            Action::TogglePrayer(PrayerType::Isha),
            Action::SetDhikrCount(40),
            Action::SetDuaText("dua for parents".into()),
            Action::Reset,
        ]
        .into_iter()
        .fold(start.clone(), reduce);
        assert_eq!(state, start);
    }
}
