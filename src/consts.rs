pub mod cli_consts {
    //! Viewer Configuration Constants

    use std::time::Duration;

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Maximum number of buffered events between workers and the UI.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// How long the splash screen stays up unless a key is pressed.
    pub const SPLASH_DURATION: Duration = Duration::from_secs(2);

    /// How long the UI waits for a key press before redrawing.
    pub const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);
}
