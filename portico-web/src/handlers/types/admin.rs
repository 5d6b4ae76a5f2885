//! Admin area request and response types

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Search filter shared by the admin list endpoints
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Case-insensitive substring filter
    pub q: Option<String>,
}

/// Filters for the system log listing
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SystemLogQuery {
    /// Restrict to one level: error, warning, info or success
    pub level: Option<String>,
    /// Case-insensitive substring filter over message and source
    pub q: Option<String>,
}

/// Headline statistic with its trend
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatCard {
    #[schema(example = "Total Users")]
    pub title: String,
    #[schema(example = "1,847")]
    pub value: String,
    #[schema(example = 12.5)]
    pub change: f64,
    #[schema(example = "vs last month")]
    pub change_label: String,
}

/// Monthly point on the user growth chart
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GrowthPoint {
    #[schema(example = "Jan")]
    pub name: String,
    #[schema(example = 400)]
    pub users: u32,
}

/// Daily point on the weekly activity chart
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivityPoint {
    #[schema(example = "Mon")]
    pub name: String,
    #[schema(example = 120)]
    pub logins: u32,
    #[schema(example = 340)]
    pub actions: u32,
}

/// Row in the recent activity table
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecentActivityRow {
    #[schema(example = "John Doe")]
    pub user: String,
    #[schema(example = "Login")]
    pub action: String,
    #[schema(example = "Success")]
    pub status: String,
    #[schema(example = "2 min ago")]
    pub time: String,
}

/// Admin dashboard document
#[derive(Debug, Serialize, ToSchema)]
pub struct AdminDashboardResponse {
    pub stats: Vec<StatCard>,
    pub user_growth: Vec<GrowthPoint>,
    pub weekly_activity: Vec<ActivityPoint>,
    pub recent_activity: Vec<RecentActivityRow>,
}

/// Managed account row
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ManagedUser {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "admin")]
    pub role: String,
    #[schema(example = "active")]
    pub status: String,
    #[schema(example = "2 min ago")]
    pub last_active: String,
}

/// User directory listing
#[derive(Debug, Serialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<ManagedUser>,
    #[schema(example = 5)]
    pub total: usize,
}

/// System log entry
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SystemLogEntry {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "error")]
    pub level: String,
    #[schema(example = "Database connection timeout")]
    pub message: String,
    #[schema(example = "db-service")]
    pub source: String,
    #[schema(example = "2026-01-20 14:32:15")]
    pub timestamp: String,
}

/// System log listing
#[derive(Debug, Serialize, ToSchema)]
pub struct SystemLogResponse {
    pub logs: Vec<SystemLogEntry>,
    #[schema(example = 8)]
    pub total: usize,
}

/// User activity log entry
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ActivityLogEntry {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "John Doe")]
    pub user: String,
    #[schema(example = "john@example.com")]
    pub email: String,
    #[schema(example = "Login")]
    pub action: String,
    #[schema(example = "login")]
    pub action_type: String,
    #[schema(example = "Successful login from Chrome/Windows")]
    pub details: String,
    #[schema(example = "192.168.1.100")]
    pub ip: String,
    #[schema(example = "2026-01-20 14:32:15")]
    pub timestamp: String,
}

/// User activity listing
#[derive(Debug, Serialize, ToSchema)]
pub struct ActivityLogResponse {
    pub logs: Vec<ActivityLogEntry>,
    #[schema(example = 6)]
    pub total: usize,
}

/// Immutable audit trail entry
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuditLogEntry {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Admin User")]
    pub actor: String,
    #[schema(example = "admin")]
    pub actor_role: String,
    #[schema(example = "ROLE_CHANGE")]
    pub action: String,
    #[schema(example = "user:john@example.com")]
    pub resource: String,
    #[schema(example = "user")]
    pub old_value: Option<String>,
    #[schema(example = "admin")]
    pub new_value: Option<String>,
    #[schema(example = "2026-01-20 14:32:15")]
    pub timestamp: String,
    pub immutable: bool,
}

/// Audit trail listing
#[derive(Debug, Serialize, ToSchema)]
pub struct AuditLogResponse {
    pub logs: Vec<AuditLogEntry>,
    #[schema(example = 6)]
    pub total: usize,
}

/// Connected application row
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApplicationEntry {
    #[schema(example = "1")]
    pub id: String,
    #[schema(example = "Analytics Dashboard")]
    pub name: String,
    #[schema(example = "Business intelligence and reporting")]
    pub description: String,
    #[schema(example = "active")]
    pub status: String,
    #[schema(example = 245)]
    pub users: u32,
    #[schema(example = 12450)]
    pub requests: u32,
    #[schema(example = "2 min ago")]
    pub last_activity: String,
}

/// Application listing
#[derive(Debug, Serialize, ToSchema)]
pub struct ApplicationListResponse {
    pub applications: Vec<ApplicationEntry>,
    #[schema(example = 5)]
    pub total: usize,
}

/// System security and preference settings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminSettings {
    #[schema(example = true)]
    pub mfa_required: bool,
    /// Idle timeout in minutes
    #[schema(example = 30)]
    pub session_timeout: u32,
    #[schema(example = 5)]
    pub max_login_attempts: u32,
    #[schema(example = true)]
    pub email_notifications: bool,
    #[schema(example = true)]
    pub security_alerts: bool,
    #[schema(example = true)]
    pub audit_logging: bool,
    #[schema(example = true)]
    pub auto_backup: bool,
    #[schema(example = "daily")]
    pub backup_frequency: String,
}

impl Default for AdminSettings {
    fn default() -> Self {
        Self {
            mfa_required: true,
            session_timeout: 30,
            max_login_attempts: 5,
            email_notifications: true,
            security_alerts: true,
            audit_logging: true,
            auto_backup: true,
            backup_frequency: "daily".to_string(),
        }
    }
}
