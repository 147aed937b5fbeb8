//! Path patterns exempt from authentication enforcement.

/// An ordered set of route patterns that do not require authentication.
///
/// Read-only configuration; never mutated at runtime. Patterns ending in
/// `*` match by prefix, all others require an exact match against the
/// request path normalized with a trailing slash.
#[derive(Debug, Clone, Default)]
pub struct ExcludedPaths {
    /// The configured patterns, checked in order.
    patterns: Vec<String>,
}

impl ExcludedPaths {
    /// Creates the exclusion set from configured patterns.
    pub fn new(patterns: Vec<String>) -> Self {
        Self { patterns }
    }

    /// Whether a request to `path` must be authenticated.
    ///
    /// Returns `false` on the first matching pattern. An empty path or an
    /// empty pattern list requires auth: with nothing concrete to match,
    /// the strict default applies.
    pub fn requires_auth(&self, path: &str) -> bool {
        if path.is_empty() || self.patterns.is_empty() {
            return true;
        }

        // Normalized with a trailing slash for comparison purposes only.
        let normalized = if path.ends_with('/') {
            path.to_string()
        } else {
            format!("{path}/")
        };

        for pattern in &self.patterns {
            if pattern.is_empty() {
                continue;
            }

            match pattern.strip_suffix('*') {
                Some(prefix) => {
                    if normalized.starts_with(prefix) {
                        return false;
                    }
                }
                None => {
                    if normalized == *pattern {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// The configured patterns.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }
}
