use thiserror::Error;

/// Rejected input keys. The tracker state is never modified when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackerError {
    #[error("Unknown prayer '{0}'. Use: fajr, dhuhr, asr, maghrib, isha")]
    UnknownPrayer(String),
    #[error("Unknown study topic '{0}'. Run `deen topics` to list them")]
    UnknownTopic(String),
}
