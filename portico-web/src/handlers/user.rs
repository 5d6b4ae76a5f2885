//! User area endpoints

use super::types::{
    DashboardQuery, DbConnectionForm, DbTestResponse, FileActivityRow, Period, ProcessHistoryResponse,
    ProcessedFile, ProfileForm, SeriesPoint, UsageStats, UserDashboardResponse, UserSettingsResponse,
};
use crate::auth::CurrentUser;
use axum::{extract::Query, response::Json};
use tracing::info;

fn usage_stats(period: Period) -> UsageStats {
    match period {
        Period::Day => UsageStats {
            downloads: 47,
            pdf_splits: 12,
            uploads: 23,
            splitter_jobs: 8,
        },
        Period::Month => UsageStats {
            downloads: 1234,
            pdf_splits: 345,
            uploads: 567,
            splitter_jobs: 189,
        },
        Period::Year => UsageStats {
            downloads: 15678,
            pdf_splits: 4532,
            uploads: 7890,
            splitter_jobs: 2345,
        },
    }
}

fn spark_series(len: usize) -> Vec<SeriesPoint> {
    (0..len)
        .map(|_| SeriesPoint {
            value: fastrand::u32(20..120),
        })
        .collect()
}

fn file_activity(file: &str, action: &str, status: &str, time: &str) -> FileActivityRow {
    FileActivityRow {
        file: file.to_string(),
        action: action.to_string(),
        status: status.to_string(),
        time: time.to_string(),
    }
}

/// User dashboard endpoint
///
/// Statistics are keyed by the requested period; the chart series is
/// resampled on every call.
#[utoipa::path(
    get,
    path = "/user",
    tag = "User",
    summary = "User dashboard",
    params(DashboardQuery),
    responses(
        (status = 200, description = "Dashboard document", body = UserDashboardResponse),
        (status = 307, description = "Redirected by the area guard")
    )
)]
pub async fn user_dashboard(Query(query): Query<DashboardQuery>) -> Json<UserDashboardResponse> {
    let period = query.period.unwrap_or(Period::Month);

    Json(UserDashboardResponse {
        period,
        stats: usage_stats(period),
        change_label: period.change_label().to_string(),
        series: spark_series(period.series_len()),
        recent_activity: vec![
            file_activity("report_2026.pdf", "PDF Split", "Completed", "5 min ago"),
            file_activity("invoice_jan.pdf", "Download", "Completed", "15 min ago"),
            file_activity("data_export.csv", "Upload", "Completed", "1 hour ago"),
            file_activity("contract_v2.pdf", "PDF Split", "Processing", "2 hours ago"),
        ],
    })
}

/// Connection form defaults
#[utoipa::path(
    get,
    path = "/user/db-manage",
    tag = "User",
    summary = "Database connection form",
    responses(
        (status = 200, description = "Form defaults", body = DbConnectionForm)
    )
)]
pub async fn db_connection_form() -> Json<DbConnectionForm> {
    Json(DbConnectionForm::default())
}

/// Connection probe
///
/// Validates the submitted form the way the console does: every field
/// except the port must be filled in. The probe itself is simulated.
#[utoipa::path(
    post,
    path = "/user/db-manage/test",
    tag = "User",
    summary = "Test a database connection",
    request_body = DbConnectionForm,
    responses(
        (status = 200, description = "Probe outcome", body = DbTestResponse)
    )
)]
pub async fn test_db_connection(Json(form): Json<DbConnectionForm>) -> Json<DbTestResponse> {
    let required = [&form.host, &form.database, &form.username, &form.password];
    if required.iter().any(|field| field.trim().is_empty()) {
        return Json(DbTestResponse {
            status: "error".to_string(),
            message: Some("Please fill in all required fields".to_string()),
        });
    }

    info!("Database connection test for {}:{}", form.host, form.port);
    Json(DbTestResponse {
        status: "connected".to_string(),
        message: None,
    })
}

fn processed_file(id: &str, name: &str, size: &str, status: &str, timestamp: &str) -> ProcessedFile {
    ProcessedFile {
        id: id.to_string(),
        name: name.to_string(),
        size: size.to_string(),
        status: status.to_string(),
        timestamp: timestamp.to_string(),
    }
}

/// Processing history listing
#[utoipa::path(
    get,
    path = "/user/process",
    tag = "User",
    summary = "File processing history",
    responses(
        (status = 200, description = "Processing history", body = ProcessHistoryResponse)
    )
)]
pub async fn process_history() -> Json<ProcessHistoryResponse> {
    let files = vec![
        processed_file("1", "report_annual.pdf", "2.4 MB", "completed", "2026-01-20 14:30"),
        processed_file("2", "contract_v2.pdf", "1.1 MB", "completed", "2026-01-20 13:15"),
        processed_file("3", "invoice_batch.pdf", "5.2 MB", "processing", "2026-01-20 12:00"),
        processed_file("4", "data_export.pdf", "890 KB", "failed", "2026-01-20 11:30"),
    ];
    let total = files.len();

    Json(ProcessHistoryResponse { files, total })
}

/// Account settings endpoint
///
/// The profile form is seeded from the signed-in identity.
#[utoipa::path(
    get,
    path = "/user/settings",
    tag = "User",
    summary = "Account settings",
    responses(
        (status = 200, description = "Settings document", body = UserSettingsResponse),
        (status = 401, description = "Not signed in")
    )
)]
pub async fn user_settings(CurrentUser(identity): CurrentUser) -> Json<UserSettingsResponse> {
    Json(UserSettingsResponse {
        profile: ProfileForm {
            name: identity.name,
            email: identity.email,
        },
        password_min_length: 6,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_follow_the_period() {
        assert_eq!(usage_stats(Period::Day).downloads, 47);
        assert_eq!(usage_stats(Period::Month).downloads, 1234);
        assert_eq!(usage_stats(Period::Year).downloads, 15678);
    }

    #[test]
    fn test_series_length_follows_the_period() {
        assert_eq!(Period::Day.series_len(), 24);
        assert_eq!(Period::Month.series_len(), 30);
        assert_eq!(Period::Year.series_len(), 12);
    }

    #[test]
    fn test_series_values_stay_in_range() {
        for point in spark_series(200) {
            assert!((20..120).contains(&point.value));
        }
    }

    #[tokio::test]
    async fn test_dashboard_defaults_to_the_monthly_period() {
        let dashboard = user_dashboard(Query(DashboardQuery { period: None })).await.0;
        assert_eq!(dashboard.stats.downloads, 1234);
        assert_eq!(dashboard.change_label, "vs last month");
        assert_eq!(dashboard.series.len(), 30);
        assert_eq!(dashboard.recent_activity.len(), 4);
    }

    #[tokio::test]
    async fn test_connection_probe_requires_every_field_but_the_port() {
        let empty = test_db_connection(Json(DbConnectionForm::default())).await.0;
        assert_eq!(empty.status, "error");
        assert_eq!(
            empty.message.as_deref(),
            Some("Please fill in all required fields")
        );

        let form = DbConnectionForm {
            host: "localhost".to_string(),
            port: String::new(),
            database: "appdb".to_string(),
            username: "portico".to_string(),
            password: "secret".to_string(),
        };
        let connected = test_db_connection(Json(form)).await.0;
        assert_eq!(connected.status, "connected");
        assert!(connected.message.is_none());
    }
}
