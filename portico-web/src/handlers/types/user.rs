//! User area request and response types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Reporting period for the user dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Month,
    Year,
}

impl Period {
    /// Number of points on the spark-line for this period
    pub fn series_len(&self) -> usize {
        match self {
            Period::Day => 24,
            Period::Month => 30,
            Period::Year => 12,
        }
    }

    /// Comparison label shown next to each statistic
    pub fn change_label(&self) -> &'static str {
        match self {
            Period::Day => "vs yesterday",
            Period::Month => "vs last month",
            Period::Year => "vs last year",
        }
    }
}

/// Period selector for the user dashboard
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct DashboardQuery {
    /// Reporting period, defaults to month
    pub period: Option<Period>,
}

/// Usage counters for one reporting period
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UsageStats {
    #[schema(example = 1234)]
    pub downloads: u64,
    #[schema(example = 345)]
    pub pdf_splits: u64,
    #[schema(example = 567)]
    pub uploads: u64,
    #[schema(example = 189)]
    pub splitter_jobs: u64,
}

/// One point on a spark-line chart
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SeriesPoint {
    #[schema(example = 64)]
    pub value: u32,
}

/// Row in the recent file activity table
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FileActivityRow {
    #[schema(example = "report_2026.pdf")]
    pub file: String,
    #[schema(example = "PDF Split")]
    pub action: String,
    #[schema(example = "Completed")]
    pub status: String,
    #[schema(example = "5 min ago")]
    pub time: String,
}

/// User dashboard document
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDashboardResponse {
    pub period: Period,
    pub stats: UsageStats,
    #[schema(example = "vs last month")]
    pub change_label: String,
    pub series: Vec<SeriesPoint>,
    pub recent_activity: Vec<FileActivityRow>,
}

/// Database connection credentials form
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DbConnectionForm {
    #[schema(example = "db.internal")]
    pub host: String,
    #[schema(example = "5432")]
    pub port: String,
    #[schema(example = "analytics")]
    pub database: String,
    #[schema(example = "report_reader")]
    pub username: String,
    pub password: String,
}

impl Default for DbConnectionForm {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: "5432".to_string(),
            database: String::new(),
            username: String::new(),
            password: String::new(),
        }
    }
}

/// Result of a connection probe
#[derive(Debug, Serialize, ToSchema)]
pub struct DbTestResponse {
    #[schema(example = "connected")]
    pub status: String,
    #[schema(example = "Please fill in all required fields")]
    pub message: Option<String>,
}

/// Processed file history row
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProcessedFile {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "report_annual.pdf")]
    pub name: String,
    #[schema(example = "2.4 MB")]
    pub size: String,
    #[schema(example = "completed")]
    pub status: String,
    #[schema(example = "2026-01-20 14:30")]
    pub timestamp: String,
}

/// Processing history listing
#[derive(Debug, Serialize, ToSchema)]
pub struct ProcessHistoryResponse {
    pub files: Vec<ProcessedFile>,
    #[schema(example = 4)]
    pub total: usize,
}

/// Editable profile fields
#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileForm {
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "user@test.com")]
    pub email: String,
}

/// User settings document
#[derive(Debug, Serialize, ToSchema)]
pub struct UserSettingsResponse {
    pub profile: ProfileForm,
    /// Minimum accepted length for a new password
    #[schema(example = 6)]
    pub password_min_length: usize,
}
