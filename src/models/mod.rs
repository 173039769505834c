pub mod daily;
pub mod goal;
pub mod prayer;
pub mod topic;

pub use daily::{DailyTaskState, Dua};
pub use goal::CounterGoal;
pub use prayer::{PrayerType, Prayers};
pub use topic::StudyTopic;
