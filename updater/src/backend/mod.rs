use crate::error::Error;
use octokit::endpoint::repos::Release;

pub mod github;
#[cfg(test)]
pub(crate) mod memory;

/// Source of release metadata and signature files.
#[rocket::async_trait]
pub trait Backend: Send + Sync {
    /// All releases of the configured repository, in upstream order.
    async fn list_releases(&self) -> Result<Vec<Release>, Error>;

    /// Downloads a detached signature and returns it verbatim.
    async fn fetch_signature(&self, url: &str) -> Result<String, Error>;
}
