/// Lifecycle status of a track.
///
/// Newly created tracks start `Tentative` until enough consecutive matches
/// accumulate, then become `Confirmed`. Tracks that exceed the consecutive
/// miss budget become `Lost` and are removed from the store in the same
/// update call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackStatus {
    /// Just created, not yet trusted.
    #[default]
    Tentative,
    /// Matched enough consecutive frames to be trusted.
    Confirmed,
    /// Exceeded the miss budget; terminal.
    Lost,
}
