pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Organized by functional area.

    // =============================================================================
    // SERVICE CONFIGURATION
    // =============================================================================

    /// Base URL of the review service when nothing else is configured.
    pub const DEFAULT_API_URL: &str = "http://localhost:8000";

    /// Environment variable that overrides the configured base URL.
    pub const API_URL_ENV_VAR: &str = "REVIEW_DASHBOARD_API_URL";

    /// Endpoint returning the aggregate metrics object.
    pub const METRICS_ENDPOINT: &str = "metrics";

    /// Endpoint returning the list of recent reviews.
    pub const REVIEWS_ENDPOINT: &str = "reviews";

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Event buffer size between fetch workers and the view.
    /// Each worker sends at most two events, so this never blocks.
    pub const EVENT_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Interval between terminal frames while polling for key presses (milliseconds)
    pub const FRAME_INTERVAL_MS: u64 = 100;

    /// Text shown in the reviews table when the list is empty.
    pub const EMPTY_REVIEWS_PLACEHOLDER: &str = "No reviews yet";

    /// Status value rendered with the affirmative colour.
    pub const COMPLETED_STATUS: &str = "completed";
}
