//! Octokit
//!
//! A small asynchronous client for the parts of the GitHub REST api that
//! deal with releases.
//!
//! ## Usage
//! ```no_run
//! # async fn run() -> Result<(), octokit::Error> {
//! let cfg = octokit::Config::new_authenticated("secret_access_token");
//! let octokit = octokit::Octokit::new(cfg)?;
//! let releases = octokit::endpoint::repos::list_releases(&octokit, "owner", "repo").await?;
//! # Ok(())
//! # }
//! ```
use reqwest::Client;

mod config;
pub mod endpoint;
mod error;
pub(crate) mod util;

pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{Error, ErrorKind};

/// Holds the configuration together with a reusable http client.
pub struct Octokit {
    config: Config,
    client: Client,
}

impl Octokit {
    pub fn new(config: Config) -> Result<Self, Error> {
        let client = util::get_client(&config)?;
        Ok(Octokit { config, client })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
