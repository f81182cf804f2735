/// Backend the dashboard talks to when the host does not supply one.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5050";

/// Resolver turning backend routes into absolute URLs.
///
/// Two resolvers are equal when they point at the same base URL; a change
/// of base is what re-runs backend-dependent effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendUrl {
    base: String,
}

impl BackendUrl {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Whether both resolvers point at the same backend.
    pub fn same_as(&self, other: &BackendUrl) -> bool {
        self.base == other.base
    }

    /// Join `route` onto the base with exactly one separating slash.
    pub fn resolve(&self, route: &str) -> String {
        format!("{}/{}", self.base, route.trim_start_matches('/'))
    }
}

impl Default for BackendUrl {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_joins_with_single_slash() {
        let url = BackendUrl::new("http://host:5050/");
        assert_eq!(url.resolve("control/warnings"), "http://host:5050/control/warnings");
        assert_eq!(url.resolve("/graph"), "http://host:5050/graph");
    }

    #[test]
    fn resolve_empty_route_yields_base_with_slash() {
        assert_eq!(BackendUrl::new("http://a").resolve(""), "http://a/");
    }

    #[test]
    fn default_points_at_local_backend() {
        assert_eq!(BackendUrl::default().base(), DEFAULT_BACKEND_URL);
    }

    #[test]
    fn equality_ignores_trailing_slash() {
        assert_eq!(BackendUrl::new("http://a/"), BackendUrl::new("http://a"));
        assert_ne!(BackendUrl::new("http://a"), BackendUrl::new("http://b"));
    }

    #[test]
    fn same_as_compares_normalized_base() {
        let a = BackendUrl::new("http://a:5050/");
        assert!(a.same_as(&BackendUrl::new("http://a:5050")));
        assert!(!a.same_as(&BackendUrl::new("http://a:5051")));
    }
}
