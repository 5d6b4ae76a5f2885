//! Admin area endpoints
//!
//! The admin pages are served as JSON documents mirroring the console
//! fixtures; only the list filters carry logic.

use super::types::{
    ActivityLogEntry, ActivityLogResponse, ActivityPoint, AdminDashboardResponse, AdminSettings,
    ApplicationEntry, ApplicationListResponse, AuditLogEntry, AuditLogResponse, GrowthPoint,
    ManagedUser, RecentActivityRow, SearchQuery, StatCard, SystemLogEntry, SystemLogQuery,
    SystemLogResponse, UserListResponse,
};
use axum::{extract::Query, response::Json};
use tracing::info;

/// Case-insensitive substring match over a set of fields
///
/// An absent or blank query matches everything.
fn matches_query(query: &Option<String>, fields: &[&str]) -> bool {
    match query {
        Some(q) if !q.trim().is_empty() => {
            let needle = q.trim().to_lowercase();
            fields
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        }
        _ => true,
    }
}

fn stat(title: &str, value: &str, change: f64, change_label: &str) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        change,
        change_label: change_label.to_string(),
    }
}

fn growth(name: &str, users: u32) -> GrowthPoint {
    GrowthPoint {
        name: name.to_string(),
        users,
    }
}

fn activity(name: &str, logins: u32, actions: u32) -> ActivityPoint {
    ActivityPoint {
        name: name.to_string(),
        logins,
        actions,
    }
}

fn recent(user: &str, action: &str, status: &str, time: &str) -> RecentActivityRow {
    RecentActivityRow {
        user: user.to_string(),
        action: action.to_string(),
        status: status.to_string(),
        time: time.to_string(),
    }
}

/// Admin dashboard endpoint
#[utoipa::path(
    get,
    path = "/admin",
    tag = "Admin",
    summary = "Admin dashboard",
    description = "System statistics, growth and activity charts, recent activity",
    responses(
        (status = 200, description = "Dashboard document", body = AdminDashboardResponse),
        (status = 307, description = "Redirected by the area guard")
    )
)]
pub async fn admin_dashboard() -> Json<AdminDashboardResponse> {
    Json(AdminDashboardResponse {
        stats: vec![
            stat("Total Users", "1,847", 12.5, "vs last month"),
            stat("Active Sessions", "342", 8.2, "vs yesterday"),
            stat("Security Events", "23", -5.1, "vs last week"),
            stat("Active Apps", "12", 0.0, "no change"),
        ],
        user_growth: vec![
            growth("Jan", 400),
            growth("Feb", 600),
            growth("Mar", 800),
            growth("Apr", 1000),
            growth("May", 1400),
            growth("Jun", 1800),
        ],
        weekly_activity: vec![
            activity("Mon", 120, 340),
            activity("Tue", 180, 420),
            activity("Wed", 150, 380),
            activity("Thu", 200, 500),
            activity("Fri", 170, 450),
            activity("Sat", 80, 200),
            activity("Sun", 60, 150),
        ],
        recent_activity: vec![
            recent("John Doe", "Login", "Success", "2 min ago"),
            recent("Jane Smith", "File Upload", "Success", "5 min ago"),
            recent("Mike Johnson", "Password Change", "Success", "15 min ago"),
            recent("Sarah Wilson", "Failed Login", "Failed", "32 min ago"),
        ],
    })
}

fn managed_user(
    id: &str,
    name: &str,
    email: &str,
    role: &str,
    status: &str,
    last_active: &str,
) -> ManagedUser {
    ManagedUser {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        status: status.to_string(),
        last_active: last_active.to_string(),
    }
}

fn managed_users() -> Vec<ManagedUser> {
    vec![
        managed_user("1", "John Doe", "john@example.com", "admin", "active", "2 min ago"),
        managed_user("2", "Jane Smith", "jane@example.com", "user", "active", "15 min ago"),
        managed_user("3", "Mike Johnson", "mike@example.com", "user", "inactive", "2 days ago"),
        managed_user("4", "Sarah Wilson", "sarah@example.com", "user", "pending", "Never"),
        managed_user("5", "Tom Brown", "tom@example.com", "user", "active", "1 hour ago"),
    ]
}

/// User management listing
#[utoipa::path(
    get,
    path = "/admin/users",
    tag = "Admin",
    summary = "Managed accounts",
    params(SearchQuery),
    responses(
        (status = 200, description = "Account listing", body = UserListResponse)
    )
)]
pub async fn list_users(Query(query): Query<SearchQuery>) -> Json<UserListResponse> {
    let users: Vec<ManagedUser> = managed_users()
        .into_iter()
        .filter(|user| matches_query(&query.q, &[&user.name, &user.email]))
        .collect();
    let total = users.len();

    Json(UserListResponse { users, total })
}

fn system_log(id: &str, level: &str, message: &str, source: &str, timestamp: &str) -> SystemLogEntry {
    SystemLogEntry {
        id: id.to_string(),
        level: level.to_string(),
        message: message.to_string(),
        source: source.to_string(),
        timestamp: timestamp.to_string(),
    }
}

fn system_log_entries() -> Vec<SystemLogEntry> {
    vec![
        system_log("1", "error", "Database connection timeout", "db-service", "2026-01-20 14:32:15"),
        system_log("2", "warning", "High memory usage detected (85%)", "monitoring", "2026-01-20 14:30:00"),
        system_log("3", "info", "Scheduled backup completed", "backup-service", "2026-01-20 14:00:00"),
        system_log("4", "success", "SSL certificate renewed", "security", "2026-01-20 13:45:22"),
        system_log("5", "info", "New deployment started", "ci-cd", "2026-01-20 13:30:00"),
        system_log("6", "warning", "Rate limit approaching for API endpoint", "api-gateway", "2026-01-20 13:15:00"),
        system_log("7", "error", "Failed to send email notification", "email-service", "2026-01-20 12:55:30"),
        system_log("8", "success", "Cache cleared successfully", "cache-service", "2026-01-20 12:30:00"),
    ]
}

/// System log listing
#[utoipa::path(
    get,
    path = "/admin/logs/system",
    tag = "Admin",
    summary = "System logs",
    params(SystemLogQuery),
    responses(
        (status = 200, description = "System log listing", body = SystemLogResponse)
    )
)]
pub async fn system_logs(Query(query): Query<SystemLogQuery>) -> Json<SystemLogResponse> {
    let logs: Vec<SystemLogEntry> = system_log_entries()
        .into_iter()
        .filter(|log| match &query.level {
            Some(level) if !level.is_empty() && level != "all" => {
                log.level.eq_ignore_ascii_case(level)
            }
            _ => true,
        })
        .filter(|log| matches_query(&query.q, &[&log.message, &log.source]))
        .collect();
    let total = logs.len();

    Json(SystemLogResponse { logs, total })
}

#[allow(clippy::too_many_arguments)]
fn activity_log(
    id: &str,
    user: &str,
    email: &str,
    action: &str,
    action_type: &str,
    details: &str,
    ip: &str,
    timestamp: &str,
) -> ActivityLogEntry {
    ActivityLogEntry {
        id: id.to_string(),
        user: user.to_string(),
        email: email.to_string(),
        action: action.to_string(),
        action_type: action_type.to_string(),
        details: details.to_string(),
        ip: ip.to_string(),
        timestamp: timestamp.to_string(),
    }
}

fn activity_log_entries() -> Vec<ActivityLogEntry> {
    vec![
        activity_log("1", "John Doe", "john@example.com", "Login", "login", "Successful login from Chrome/Windows", "192.168.1.100", "2026-01-20 14:32:15"),
        activity_log("2", "Jane Smith", "jane@example.com", "File Upload", "upload", "Uploaded report.pdf (2.3 MB)", "192.168.1.101", "2026-01-20 14:28:00"),
        activity_log("3", "Mike Johnson", "mike@example.com", "Download", "download", "Downloaded analytics_export.csv", "192.168.1.102", "2026-01-20 14:15:30"),
        activity_log("4", "Sarah Wilson", "sarah@example.com", "Settings Update", "settings", "Changed notification preferences", "192.168.1.103", "2026-01-20 13:55:00"),
        activity_log("5", "Tom Brown", "tom@example.com", "Password Change", "password", "Password successfully changed", "192.168.1.104", "2026-01-20 13:30:00"),
        activity_log("6", "John Doe", "john@example.com", "Login", "login", "Successful login from Safari/macOS", "192.168.1.100", "2026-01-20 12:00:00"),
    ]
}

/// User activity listing
#[utoipa::path(
    get,
    path = "/admin/logs/activity",
    tag = "Admin",
    summary = "User activity logs",
    params(SearchQuery),
    responses(
        (status = 200, description = "Activity log listing", body = ActivityLogResponse)
    )
)]
pub async fn activity_logs(Query(query): Query<SearchQuery>) -> Json<ActivityLogResponse> {
    let logs: Vec<ActivityLogEntry> = activity_log_entries()
        .into_iter()
        .filter(|log| matches_query(&query.q, &[&log.user, &log.email, &log.action]))
        .collect();
    let total = logs.len();

    Json(ActivityLogResponse { logs, total })
}

fn audit_log(
    id: &str,
    actor: &str,
    actor_role: &str,
    action: &str,
    resource: &str,
    old_value: Option<&str>,
    new_value: Option<&str>,
    timestamp: &str,
) -> AuditLogEntry {
    AuditLogEntry {
        id: id.to_string(),
        actor: actor.to_string(),
        actor_role: actor_role.to_string(),
        action: action.to_string(),
        resource: resource.to_string(),
        old_value: old_value.map(str::to_string),
        new_value: new_value.map(str::to_string),
        timestamp: timestamp.to_string(),
        immutable: true,
    }
}

fn audit_log_entries() -> Vec<AuditLogEntry> {
    vec![
        audit_log("1", "Admin User", "admin", "ROLE_CHANGE", "user:john@example.com", Some("user"), Some("admin"), "2026-01-20 14:32:15"),
        audit_log("2", "System", "system", "PERMISSION_GRANT", "user:jane@example.com", None, Some("file_upload"), "2026-01-20 14:00:00"),
        audit_log("3", "Admin User", "admin", "USER_DELETE", "user:deleted@example.com", None, None, "2026-01-20 13:45:00"),
        audit_log("4", "System", "system", "CONFIG_CHANGE", "security:mfa_required", Some("false"), Some("true"), "2026-01-20 12:30:00"),
        audit_log("5", "Admin User", "admin", "API_KEY_ROTATE", "api:production", None, None, "2026-01-20 11:00:00"),
        audit_log("6", "System", "system", "BACKUP_CREATE", "database:main", None, None, "2026-01-20 06:00:00"),
    ]
}

/// Audit trail listing
#[utoipa::path(
    get,
    path = "/admin/logs/audit",
    tag = "Admin",
    summary = "Audit logs",
    params(SearchQuery),
    responses(
        (status = 200, description = "Audit trail listing", body = AuditLogResponse)
    )
)]
pub async fn audit_logs(Query(query): Query<SearchQuery>) -> Json<AuditLogResponse> {
    let logs: Vec<AuditLogEntry> = audit_log_entries()
        .into_iter()
        .filter(|log| matches_query(&query.q, &[&log.actor, &log.action, &log.resource]))
        .collect();
    let total = logs.len();

    Json(AuditLogResponse { logs, total })
}

fn application(
    id: &str,
    name: &str,
    description: &str,
    status: &str,
    users: u32,
    requests: u32,
    last_activity: &str,
) -> ApplicationEntry {
    ApplicationEntry {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        status: status.to_string(),
        users,
        requests,
        last_activity: last_activity.to_string(),
    }
}

fn application_entries() -> Vec<ApplicationEntry> {
    vec![
        application("1", "Analytics Dashboard", "Business intelligence and reporting", "active", 245, 12450, "2 min ago"),
        application("2", "File Manager", "Document storage and sharing", "active", 189, 8320, "5 min ago"),
        application("3", "Email Service", "Transactional email delivery", "active", 156, 45600, "1 min ago"),
        application("4", "API Gateway", "External API integrations", "maintenance", 89, 23100, "15 min ago"),
        application("5", "Legacy Portal", "Deprecated user portal", "inactive", 12, 45, "3 days ago"),
    ]
}

/// Connected application listing
#[utoipa::path(
    get,
    path = "/admin/applications",
    tag = "Admin",
    summary = "Applications",
    params(SearchQuery),
    responses(
        (status = 200, description = "Application listing", body = ApplicationListResponse)
    )
)]
pub async fn applications(Query(query): Query<SearchQuery>) -> Json<ApplicationListResponse> {
    let applications: Vec<ApplicationEntry> = application_entries()
        .into_iter()
        .filter(|app| matches_query(&query.q, &[&app.name, &app.description]))
        .collect();
    let total = applications.len();

    Json(ApplicationListResponse {
        applications,
        total,
    })
}

/// Current system settings
#[utoipa::path(
    get,
    path = "/admin/settings",
    tag = "Admin",
    summary = "System settings",
    responses(
        (status = 200, description = "Settings document", body = AdminSettings)
    )
)]
pub async fn admin_settings() -> Json<AdminSettings> {
    Json(AdminSettings::default())
}

/// Save system settings
///
/// The settings document is echoed back without persistence; it is a
/// presentation fixture like the rest of the admin pages.
#[utoipa::path(
    put,
    path = "/admin/settings",
    tag = "Admin",
    summary = "Save system settings",
    request_body = AdminSettings,
    responses(
        (status = 200, description = "Saved settings document", body = AdminSettings)
    )
)]
pub async fn update_admin_settings(Json(settings): Json<AdminSettings>) -> Json<AdminSettings> {
    info!("Admin settings updated");
    Json(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_matches_everything() {
        assert!(matches_query(&None, &["John Doe"]));
        assert!(matches_query(&Some("".to_string()), &["John Doe"]));
        assert!(matches_query(&Some("   ".to_string()), &["John Doe"]));
    }

    #[test]
    fn test_query_is_case_insensitive() {
        assert!(matches_query(&Some("JANE".to_string()), &["jane@example.com"]));
        assert!(matches_query(&Some("jane".to_string()), &["Jane Smith"]));
        assert!(!matches_query(&Some("jane".to_string()), &["Tom Brown"]));
    }

    #[tokio::test]
    async fn test_user_listing_filters_by_name_or_email() {
        let all = list_users(Query(SearchQuery { q: None })).await;
        assert_eq!(all.0.total, 5);

        let by_name = list_users(Query(SearchQuery {
            q: Some("jane".to_string()),
        }))
        .await;
        assert_eq!(by_name.0.total, 1);
        assert_eq!(by_name.0.users[0].email, "jane@example.com");

        let by_email = list_users(Query(SearchQuery {
            q: Some("EXAMPLE.COM".to_string()),
        }))
        .await;
        assert_eq!(by_email.0.total, 5);
    }

    #[tokio::test]
    async fn test_system_logs_filter_by_level_and_text() {
        let all = system_logs(Query(SystemLogQuery::default())).await;
        assert_eq!(all.0.total, 8);

        let errors = system_logs(Query(SystemLogQuery {
            level: Some("error".to_string()),
            q: None,
        }))
        .await;
        assert_eq!(errors.0.total, 2);
        assert!(errors.0.logs.iter().all(|log| log.level == "error"));

        let level_all = system_logs(Query(SystemLogQuery {
            level: Some("all".to_string()),
            q: None,
        }))
        .await;
        assert_eq!(level_all.0.total, 8);

        let by_source = system_logs(Query(SystemLogQuery {
            level: None,
            q: Some("backup".to_string()),
        }))
        .await;
        assert_eq!(by_source.0.total, 1);
    }

    #[tokio::test]
    async fn test_settings_round_trip_echo() {
        let defaults = admin_settings().await.0;
        assert!(defaults.mfa_required);
        assert_eq!(defaults.session_timeout, 30);
        assert_eq!(defaults.max_login_attempts, 5);
        assert_eq!(defaults.backup_frequency, "daily");

        let mut edited = defaults.clone();
        edited.session_timeout = 60;
        let saved = update_admin_settings(Json(edited)).await.0;
        assert_eq!(saved.session_timeout, 60);
    }
}
