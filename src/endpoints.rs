//! Backend endpoint paths
//!
//! Builds the three URLs the panel talks to. Activity names and emails are
//! percent-encoded before they reach the path or query string.

use urlencoding::encode;

/// URL builder for the activities backend.
///
/// An empty base produces same-origin relative paths, which is what the
/// browser page uses.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivityEndpoints {
    base: String,
}

impl ActivityEndpoints {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        // Normalize: remove trailing slash
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    /// Same-origin endpoints
    pub fn relative() -> Self {
        Self::default()
    }

    /// `GET /activities`
    pub fn list(&self) -> String {
        format!("{}/activities", self.base)
    }

    /// `POST /activities/{name}/signup?email={email}`
    pub fn signup(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/signup?email={}",
            self.base,
            encode(activity),
            encode(email)
        )
    }

    /// `DELETE /activities/{name}/unregister?email={email}`
    pub fn unregister(&self, activity: &str, email: &str) -> String {
        format!(
            "{}/activities/{}/unregister?email={}",
            self.base,
            encode(activity),
            encode(email)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_paths() {
        let endpoints = ActivityEndpoints::relative();
        assert_eq!(endpoints.list(), "/activities");
        assert_eq!(
            endpoints.signup("Chess Club", "a@x.com"),
            "/activities/Chess%20Club/signup?email=a%40x.com"
        );
        assert_eq!(
            endpoints.unregister("Chess Club", "a@x.com"),
            "/activities/Chess%20Club/unregister?email=a%40x.com"
        );
    }

    #[test]
    fn test_base_trailing_slash_is_trimmed() {
        let endpoints = ActivityEndpoints::new("http://localhost:8000/");
        assert_eq!(endpoints.list(), "http://localhost:8000/activities");
    }

    #[test]
    fn test_reserved_characters_are_encoded() {
        let endpoints = ActivityEndpoints::relative();
        assert_eq!(
            endpoints.signup("Art/Design & Co?", "x+y@z.com"),
            "/activities/Art%2FDesign%20%26%20Co%3F/signup?email=x%2By%40z.com"
        );
    }
}
