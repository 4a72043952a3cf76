use crate::backend::Backend;
use crate::error::{Error, ErrorKind};
use octokit::endpoint::repos::{Asset, Release};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory backend serving fixed releases and signatures.
#[derive(Default)]
pub struct Memory {
    pub releases: Option<Vec<Release>>,
    pub signatures: HashMap<String, String>,
    pub fetches: AtomicUsize,
}

impl Memory {
    pub fn new(releases: Vec<Release>) -> Self {
        let signatures = releases
            .iter()
            .flat_map(|r| r.assets.iter())
            .map(|a| {
                let name = a.browser_download_url.rsplit('/').next().unwrap_or_default();
                (a.browser_download_url.clone(), format!("Content of {}", name))
            })
            .collect();

        Memory {
            releases: Some(releases),
            signatures,
            fetches: AtomicUsize::new(0),
        }
    }

    /// A backend whose listing always fails.
    pub fn unavailable() -> Self {
        Memory::default()
    }

    pub fn without_signature(mut self, url: &str) -> Self {
        self.signatures.remove(url);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[rocket::async_trait]
impl Backend for Memory {
    async fn list_releases(&self) -> Result<Vec<Release>, Error> {
        self.releases
            .clone()
            .ok_or_else(|| ErrorKind::UpstreamUnavailable.into())
    }

    async fn fetch_signature(&self, url: &str) -> Result<String, Error> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.signatures
            .get(url)
            .cloned()
            .ok_or_else(|| ErrorKind::UpstreamUnavailable.into())
    }
}

pub fn asset(url: &str) -> Asset {
    Asset {
        name: url.rsplit('/').next().unwrap_or_default().to_string(),
        browser_download_url: url.to_string(),
        ..Asset::default()
    }
}

pub fn release(tag: &str, published_at: Option<&str>, urls: &[&str]) -> Release {
    Release {
        tag_name: tag.to_string(),
        published_at: published_at.map(|p| p.to_string()),
        assets: urls.iter().map(|u| asset(u)).collect(),
        ..Release::default()
    }
}

/// Urls of a complete v1.0.0 release, one signature per platform.
pub const COMPLETE: [&str; 6] = [
    "https://github.com/username/reponame/releases/download/v1.0.0/app-x64.msi.zip",
    "https://github.com/username/reponame/releases/download/v1.0.0/app-x64_en-US.msi.zip.sig",
    "https://github.com/username/reponame/releases/download/v1.0.0/app-amd64.AppImage.tar.gz",
    "https://github.com/username/reponame/releases/download/v1.0.0/app-amd64.AppImage.tar.gz.sig",
    "https://github.com/username/reponame/releases/download/v1.0.0/app-x86_64.app.tar.gz",
    "https://github.com/username/reponame/releases/download/v1.0.0/app-x86_64.app.tar.gz.sig",
];
