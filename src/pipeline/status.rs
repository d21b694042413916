/// Lifecycle state of a tracked reference object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackStatus {
    /// Reported by the detector this frame, tracker not yet started
    #[default]
    Detected,
    /// Actively followed by its tracker
    Tracked,
    /// Tracker failed; the slot is dropped the same frame
    Lost,
}
