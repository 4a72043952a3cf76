use crate::error::ErrorKind;
use crate::{util, Error, Octokit};
use failure::ResultExt;
use log::debug;
use reqwest::{Method, Response};
use serde::{Deserialize, Serialize};

/// A published release. Fields the api omits (or sends as null) fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Release {
    pub url: String,
    pub html_url: String,
    pub id: u64,
    pub tag_name: String,
    pub name: Option<String>,
    pub body: Option<String>,
    pub draft: bool,
    pub prerelease: bool,
    pub created_at: Option<String>,
    pub published_at: Option<String>,
    pub assets: Vec<Asset>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Asset {
    pub url: String,
    pub id: u64,
    pub name: String,
    pub label: Option<String>,
    pub content_type: String,
    pub state: String,
    pub size: u64,
    pub download_count: u64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
    pub browser_download_url: String,
}

/// Lists the first page of releases for `owner/repo`, in the order GitHub returns them.
pub async fn list_releases(octokit: &Octokit, owner: &str, repo: &str) -> Result<Vec<Release>, Error> {
    let path = format!("/repos/{}/{}/releases", owner, repo);
    let url = octokit.config().endpoint(&path);
    debug!("Listing releases from {}", url);

    let response = util::get_request_builder(octokit, Method::GET, &path)
        .send()
        .await
        .context(ErrorKind::Request(url.clone()))?;

    let releases = check_status(response, &url)?
        .json::<Vec<Release>>()
        .await
        .context(ErrorKind::Deserialize(url))?;

    Ok(releases)
}

/// Downloads `url` and returns its body as text.
///
/// No credentials are attached: download urls point at hosts other than the api.
pub async fn fetch_text(octokit: &Octokit, url: &str) -> Result<String, Error> {
    debug!("Fetching {}", url);

    let response = octokit
        .client
        .get(url)
        .send()
        .await
        .context(ErrorKind::Request(url.to_string()))?;

    let text = check_status(response, url)?
        .text()
        .await
        .context(ErrorKind::Deserialize(url.to_string()))?;

    Ok(text)
}

fn check_status(response: Response, url: &str) -> Result<Response, Error> {
    let status = response.status();
    if !status.is_success() {
        return Err(ErrorKind::Status(url.to_string(), status.as_u16()).into());
    }

    Ok(response)
}
