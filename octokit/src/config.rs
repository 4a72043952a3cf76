use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

pub struct Config {
    pub base_url: String,
    pub auth: Option<String>,
    pub user_agent: String,
    /// Applied to every outbound request, including asset downloads.
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new_authenticated(auth: &str) -> Self {
        Config {
            auth: Some(auth.to_string()),
            ..Config::default()
        }
    }

    /// Joins an API path onto the base url, tolerating a trailing slash on the base.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            auth: None,
            user_agent: "octokit-rs".to_string(),
            timeout: None,
        }
    }
}
