use crate::backend::Backend;
use crate::config::Repository;
use crate::error::{Error, ErrorKind};
use failure::ResultExt;
use octokit::endpoint::repos::{self, Release};
use octokit::Octokit;
use std::time::Duration;

pub struct Config {
    pub repository: Repository,
    pub api_url: String,
    pub access_token: Option<String>,
    pub timeout: Duration,
}

impl From<&crate::Config> for Config {
    fn from(cfg: &crate::Config) -> Self {
        Config {
            repository: cfg.repository.clone(),
            api_url: cfg.github_api_url.clone(),
            access_token: cfg.github_access_token.clone(),
            timeout: cfg.upstream_timeout,
        }
    }
}

/// Reads releases from the Github api.
pub struct Github {
    repository: Repository,
    octokit: Octokit,
}

impl Github {
    pub fn new(cfg: Config) -> Result<Self, Error> {
        let octokit = Octokit::new(octokit::Config {
            base_url: cfg.api_url,
            auth: cfg.access_token,
            user_agent: format!("updater/{}", env!("CARGO_PKG_VERSION")),
            timeout: Some(cfg.timeout),
        })
        .context(ErrorKind::Configuration("cannot build http client".to_string()))?;

        Ok(Github {
            repository: cfg.repository,
            octokit,
        })
    }
}

#[rocket::async_trait]
impl Backend for Github {
    async fn list_releases(&self) -> Result<Vec<Release>, Error> {
        let releases = repos::list_releases(&self.octokit, &self.repository.owner, &self.repository.name)
            .await
            .context(ErrorKind::UpstreamUnavailable)?;

        Ok(releases)
    }

    async fn fetch_signature(&self, url: &str) -> Result<String, Error> {
        // The caller attributes the failure to a platform; keep the upstream cause.
        let text = repos::fetch_text(&self.octokit, url)
            .await
            .context(ErrorKind::UpstreamUnavailable)?;

        Ok(text)
    }
}
