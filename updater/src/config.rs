use crate::error::{Error, ErrorKind};
use std::env;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

pub const GIT_REPO: &str = "GIT_REPO";
pub const GITHUB_TOKEN: &str = "GITHUB_TOKEN";
pub const GITHUB_API_URL: &str = "GITHUB_API_URL";
pub const UPSTREAM_TIMEOUT_SECS: &str = "UPSTREAM_TIMEOUT_SECS";
pub const RELEASE_ORDER: &str = "RELEASE_ORDER";
pub const DETAILED_ERRORS: &str = "DETAILED_ERRORS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the updater, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The Github repository releases are read from.
    pub repository: Repository,

    /// Used for the releases listing when set, e.g. to raise the rate limit.
    pub github_access_token: Option<String>,

    pub github_api_url: String,

    /// Bound on every outbound request.
    pub upstream_timeout: Duration,

    pub release_order: ReleaseOrder,

    /// Respond with distinct status codes and a JSON error body instead of a bare 500.
    pub detailed_errors: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let repository = get(GIT_REPO)
            .ok_or_else(|| ErrorKind::Configuration(format!("missing env variable {}", GIT_REPO)))?
            .parse::<Repository>()?;

        let upstream_timeout = match get(UPSTREAM_TIMEOUT_SECS) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ErrorKind::Configuration(format!(
                        "{} must be a positive whole number of seconds, got '{}'",
                        UPSTREAM_TIMEOUT_SECS, raw
                    ))
                    .into())
                }
            },
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        let release_order = match get(RELEASE_ORDER) {
            Some(raw) => raw.parse::<ReleaseOrder>()?,
            None => ReleaseOrder::default(),
        };

        let detailed_errors = match get(DETAILED_ERRORS) {
            Some(raw) => parse_bool(DETAILED_ERRORS, &raw)?,
            None => false,
        };

        Ok(Config {
            repository,
            github_access_token: get(GITHUB_TOKEN),
            github_api_url: get(GITHUB_API_URL).unwrap_or_else(|| octokit::DEFAULT_BASE_URL.to_string()),
            upstream_timeout,
            release_order,
            detailed_errors,
        })
    }
}

/// Reads only `DETAILED_ERRORS`, so a server with an otherwise broken configuration
/// still knows how to answer. Unset or invalid values mean `false`.
pub fn detailed_errors_from_lookup<F>(lookup: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(DETAILED_ERRORS)
        .and_then(|raw| parse_bool(DETAILED_ERRORS, &raw).ok())
        .unwrap_or(false)
}

fn parse_bool(key: &str, raw: &str) -> Result<bool, Error> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ErrorKind::Configuration(format!("{} must be a boolean, got '{}'", key, raw)).into()),
    }
}

/// A Github repository in the form of '<owner>/<name>'
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub name: String,
}

impl fmt::Display for Repository {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for Repository {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.trim().split('/').collect();
        match parts.as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Repository {
                owner: owner.to_string(),
                name: name.to_string(),
            }),
            _ => Err(ErrorKind::Configuration(format!(
                "invalid repository '{}', expected '<owner>/<repo>'",
                s
            ))
            .into()),
        }
    }
}

/// How the "latest" release is picked from the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReleaseOrder {
    /// Trust the order GitHub returns and take the first release.
    #[default]
    Listed,
    /// Take the release with the greatest `published_at`.
    Published,
}

impl FromStr for ReleaseOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "listed" => Ok(ReleaseOrder::Listed),
            "published" => Ok(ReleaseOrder::Published),
            _ => Err(ErrorKind::Configuration(format!(
                "{} must be 'listed' or 'published', got '{}'",
                RELEASE_ORDER, s
            ))
            .into()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, Error> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    fn assert_configuration_error<T: std::fmt::Debug>(res: Result<T, Error>) {
        match res {
            Err(e) => match e.kind() {
                ErrorKind::Configuration(_) => {}
                other => panic!("unexpected error kind {:?}", other),
            },
            Ok(value) => panic!("expected configuration error, got {:?}", value),
        }
    }

    #[test]
    fn test_defaults() {
        let cfg = load(&[(GIT_REPO, "tacitic/app")]).unwrap();
        assert_eq!(
            cfg.repository,
            Repository {
                owner: "tacitic".to_string(),
                name: "app".to_string()
            }
        );
        assert_eq!(cfg.github_access_token, None);
        assert_eq!(cfg.github_api_url, "https://api.github.com");
        assert_eq!(cfg.upstream_timeout, Duration::from_secs(30));
        assert_eq!(cfg.release_order, ReleaseOrder::Listed);
        assert!(!cfg.detailed_errors);
    }

    #[test]
    fn test_all_variables() {
        let cfg = load(&[
            (GIT_REPO, "tacitic/app"),
            (GITHUB_TOKEN, "secret"),
            (GITHUB_API_URL, "http://localhost:9000"),
            (UPSTREAM_TIMEOUT_SECS, "5"),
            (RELEASE_ORDER, "Published"),
            (DETAILED_ERRORS, "true"),
        ])
        .unwrap();

        assert_eq!(cfg.github_access_token.as_deref(), Some("secret"));
        assert_eq!(cfg.github_api_url, "http://localhost:9000");
        assert_eq!(cfg.upstream_timeout, Duration::from_secs(5));
        assert_eq!(cfg.release_order, ReleaseOrder::Published);
        assert!(cfg.detailed_errors);
    }

    #[test]
    fn test_missing_repository() {
        assert_configuration_error(load(&[]));
        assert_configuration_error(load(&[(GIT_REPO, "  ")]));
    }

    #[test]
    fn test_malformed_repository() {
        for raw in vec!["tacitic", "tacitic/", "/app", "tacitic/app/extra"] {
            assert_configuration_error(raw.parse::<Repository>());
        }
    }

    #[test]
    fn test_invalid_values() {
        assert_configuration_error(load(&[(GIT_REPO, "a/b"), (UPSTREAM_TIMEOUT_SECS, "soon")]));
        assert_configuration_error(load(&[(GIT_REPO, "a/b"), (UPSTREAM_TIMEOUT_SECS, "0")]));
        assert_configuration_error(load(&[(GIT_REPO, "a/b"), (UPSTREAM_TIMEOUT_SECS, "-5")]));
        assert_configuration_error(load(&[(GIT_REPO, "a/b"), (RELEASE_ORDER, "semver")]));
        assert_configuration_error(load(&[(GIT_REPO, "a/b"), (DETAILED_ERRORS, "maybe")]));
    }

    #[test]
    fn test_detailed_errors_without_repository() {
        let lookup = |key: &str| match key {
            DETAILED_ERRORS => Some("on".to_string()),
            _ => None,
        };
        assert_configuration_error(Config::from_lookup(lookup));
        assert!(detailed_errors_from_lookup(lookup));
        assert!(!detailed_errors_from_lookup(|_| Some("maybe".to_string())));
        assert!(!detailed_errors_from_lookup(|_| None));
    }

    #[test]
    fn test_repository_display() {
        let repo: Repository = "tacitic/app".parse().unwrap();
        assert_eq!(repo.to_string(), "tacitic/app");
    }
}
