//! OpenAPI specification for the Portico web server
//!
//! This module defines the complete OpenAPI specification for the Portico API.

use utoipa::OpenApi;

use crate::handlers::{
    ActivityLogEntry, ActivityLogResponse, ActivityPoint, AdminDashboardResponse, AdminSettings,
    ApplicationEntry, ApplicationListResponse, AuditLogEntry, AuditLogResponse, DbConnectionForm,
    DbTestResponse, DemoAccount, ErrorResponse, FileActivityRow, GrowthPoint, HealthResponse,
    LoginPageResponse, LoginRequest, LogoutResponse, ManagedUser, Period, ProcessHistoryResponse,
    ProcessedFile, ProfileForm, RecentActivityRow, SeriesPoint, SessionResponse, StatCard,
    SystemLogEntry, SystemLogResponse, UsageStats, UserDashboardResponse, UserListResponse,
    UserSettingsResponse,
};
use portico_auth::session::SessionRecord;

/// Main OpenAPI specification for the Portico web server
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portico Web API",
        version = "0.1.0",
        description = "Role-gated console backend with credential validation and session persistence",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Health endpoints
        crate::handlers::health_check,

        // Authentication
        crate::handlers::login,
        crate::handlers::logout,
        crate::handlers::current_user,

        // Pages
        crate::handlers::login_page,

        // Admin area
        crate::handlers::admin_dashboard,
        crate::handlers::list_users,
        crate::handlers::system_logs,
        crate::handlers::activity_logs,
        crate::handlers::audit_logs,
        crate::handlers::applications,
        crate::handlers::admin_settings,
        crate::handlers::update_admin_settings,

        // User area
        crate::handlers::user_dashboard,
        crate::handlers::db_connection_form,
        crate::handlers::test_db_connection,
        crate::handlers::process_history,
        crate::handlers::user_settings,
    ),
    components(
        schemas(
            HealthResponse,
            ErrorResponse,
            LoginRequest,
            SessionResponse,
            SessionRecord,
            LogoutResponse,
            DemoAccount,
            LoginPageResponse,
            StatCard,
            GrowthPoint,
            ActivityPoint,
            RecentActivityRow,
            AdminDashboardResponse,
            ManagedUser,
            UserListResponse,
            SystemLogEntry,
            SystemLogResponse,
            ActivityLogEntry,
            ActivityLogResponse,
            AuditLogEntry,
            AuditLogResponse,
            ApplicationEntry,
            ApplicationListResponse,
            AdminSettings,
            Period,
            UsageStats,
            SeriesPoint,
            FileActivityRow,
            UserDashboardResponse,
            DbConnectionForm,
            DbTestResponse,
            ProcessedFile,
            ProcessHistoryResponse,
            ProfileForm,
            UserSettingsResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Auth", description = "Credential validation and session operations"),
        (name = "Pages", description = "Top-level page documents"),
        (name = "Admin", description = "Administration area"),
        (name = "User", description = "User workspace area"),
    )
)]
pub struct ApiDoc;

/// Get the OpenAPI specification as JSON
pub fn get_openapi_json() -> String {
    ApiDoc::openapi().to_pretty_json().unwrap()
}
