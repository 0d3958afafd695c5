//! Plain data row types written by report backends.

/// One served customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRow {
    pub point:           u32,
    /// The desk that served the customer; `u32::MAX` if unrecorded.
    pub desk:            u32,
    pub ticket:          String,
    pub identity:        String,
    /// Measured wait in minutes.
    pub wait_minutes:    u32,
    pub service_minutes: u32,
    /// Point-clock reading at completion.
    pub completed_at:    u32,
}

/// Snapshot statistics for one service point.
#[derive(Debug, Clone, PartialEq)]
pub struct PointSummaryRow {
    pub point:       u32,
    pub clock:       u32,
    pub waiting:     u64,
    pub serving:     u64,
    pub served:      u64,
    pub avg_wait:    f64,
    pub avg_service: f64,
}
