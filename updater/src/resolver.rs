use crate::backend::Backend;
use crate::error::{Error, ErrorKind};
use crate::platform::PlatformKey;
use failure::ResultExt;
use futures_util::future::try_join3;
use octokit::endpoint::repos::Asset;
use serde::Serialize;

const SIGNATURE_EXTENSION: &str = ".sig";

/// Download location and detached signature of one platform's bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformEntry {
    pub url: String,
    pub signature: String,
}

/// One entry per supported platform, serialized under its platform key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Platforms {
    #[serde(rename = "windows-x86_64")]
    pub windows: PlatformEntry,
    #[serde(rename = "linux-x86_64")]
    pub linux: PlatformEntry,
    #[serde(rename = "darwin-x86_64")]
    pub darwin: PlatformEntry,
}

impl Platforms {
    pub fn get(&self, key: PlatformKey) -> &PlatformEntry {
        match key {
            PlatformKey::Windows => &self.windows,
            PlatformKey::Linux => &self.linux,
            PlatformKey::Darwin => &self.darwin,
        }
    }
}

/// First asset, in listing order, carrying the platform's signature suffix.
pub fn find_signature_asset(assets: &[Asset], key: PlatformKey) -> Result<&Asset, Error> {
    assets
        .iter()
        .find(|asset| key.matches(&asset.browser_download_url))
        .ok_or_else(|| ErrorKind::PlatformAssetMissing(key).into())
}

/// The bundle url a signature belongs to. Only the trailing `.sig` is removed;
/// the bundle's existence is not checked.
pub fn bundle_url(signature_url: &str) -> &str {
    signature_url
        .strip_suffix(SIGNATURE_EXTENSION)
        .unwrap_or(signature_url)
}

/// Resolves every platform against the release's assets.
///
/// All signature assets are located before anything is downloaded, so a release
/// missing a platform fails without network traffic. The three downloads then run
/// concurrently and the first failure wins.
pub async fn resolve_platforms(backend: &dyn Backend, assets: &[Asset]) -> Result<Platforms, Error> {
    let windows = find_signature_asset(assets, PlatformKey::Windows)?;
    let linux = find_signature_asset(assets, PlatformKey::Linux)?;
    let darwin = find_signature_asset(assets, PlatformKey::Darwin)?;

    let (windows, linux, darwin) = try_join3(
        fetch_entry(backend, PlatformKey::Windows, windows),
        fetch_entry(backend, PlatformKey::Linux, linux),
        fetch_entry(backend, PlatformKey::Darwin, darwin),
    )
    .await?;

    Ok(Platforms {
        windows,
        linux,
        darwin,
    })
}

async fn fetch_entry(backend: &dyn Backend, key: PlatformKey, asset: &Asset) -> Result<PlatformEntry, Error> {
    let signature_url = asset.browser_download_url.as_str();
    let signature = backend
        .fetch_signature(signature_url)
        .await
        .context(ErrorKind::PlatformFetchFailed(key))?;

    Ok(PlatformEntry {
        url: bundle_url(signature_url).to_string(),
        signature,
    })
}
