use std::path::PathBuf;

/// Fixed source table read at startup.
pub const DEFAULT_DATA_PATH: &str = "global_disaster_response_2018_2024.csv";

/// Hard upper bound on preview rows.
pub const MAX_PREVIEW_ROWS: usize = 50;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Startup settings. Every value is a compile-time constant; nothing here
/// comes from user input.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub preview_rows: usize,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            preview_rows: MAX_PREVIEW_ROWS,
            window_size: [1280.0, 900.0],
            min_window_size: [720.0, 480.0],
        }
    }
}
