//! Route Table
//!
//! Static mapping from path prefix to the role required to enter it. The
//! presentation layer owns the actual route tree; this table only answers
//! which role a given path demands.

/// Path-prefix to required-role mapping
#[derive(Debug, Clone)]
pub struct RouteTable {
    /// (path prefix, required role) pairs
    entries: Vec<(String, String)>,
}

impl RouteTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The default table guarding the admin and user areas
    pub fn with_defaults() -> Self {
        let mut table = Self::new();
        table.insert("/admin", "admin");
        table.insert("/user", "user");
        table
    }

    /// Add a guarded prefix
    pub fn insert(&mut self, prefix: &str, required_role: &str) {
        self.entries
            .push((prefix.to_string(), required_role.to_string()));
    }

    /// The role required to enter `path`, if any
    ///
    /// The longest matching prefix wins. A prefix matches whole path segments
    /// only, so `/admin` covers `/admin` and `/admin/users` but not
    /// `/administrator`.
    pub fn required_role(&self, path: &str) -> Option<&str> {
        self.entries
            .iter()
            .filter(|(prefix, _)| prefix_matches(prefix, path))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, role)| role.as_str())
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn prefix_matches(prefix: &str, path: &str) -> bool {
    if path == prefix {
        return true;
    }
    path.strip_prefix(prefix)
        .map_or(false, |rest| rest.starts_with('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_guards_both_areas() {
        let table = RouteTable::with_defaults();

        assert_eq!(table.required_role("/admin"), Some("admin"));
        assert_eq!(table.required_role("/admin/users"), Some("admin"));
        assert_eq!(table.required_role("/admin/logs/system"), Some("admin"));
        assert_eq!(table.required_role("/user"), Some("user"));
        assert_eq!(table.required_role("/user/settings"), Some("user"));
    }

    #[test]
    fn test_unguarded_paths_have_no_requirement() {
        let table = RouteTable::with_defaults();

        assert_eq!(table.required_role("/"), None);
        assert_eq!(table.required_role("/login"), None);
        assert_eq!(table.required_role("/api/health"), None);
    }

    #[test]
    fn test_prefixes_match_whole_segments_only() {
        let table = RouteTable::with_defaults();

        assert_eq!(table.required_role("/administrator"), None);
        assert_eq!(table.required_role("/users"), None);
    }

    #[test]
    fn test_longest_prefix_wins() {
        let mut table = RouteTable::with_defaults();
        table.insert("/admin/settings", "user");

        assert_eq!(table.required_role("/admin/settings"), Some("user"));
        assert_eq!(table.required_role("/admin/users"), Some("admin"));
    }
}
