use crate::backend::Backend;
use crate::config::ReleaseOrder;
use crate::error::Error;
use crate::release::latest_release;
use crate::resolver::{resolve_platforms, Platforms};
use log::info;
use serde::Serialize;

/// The updater clients never show these; they only have to be present.
pub const RELEASE_NOTES: &str = "Release version";

/// The document returned to updater clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Manifest {
    pub version: String,
    pub notes: &'static str,
    /// `null` when the release carries no `published_at`.
    pub pub_date: Option<String>,
    pub platforms: Platforms,
}

/// Looks up the latest release and resolves every platform's bundle and signature.
pub async fn assemble(backend: &dyn Backend, order: ReleaseOrder) -> Result<Manifest, Error> {
    let release = latest_release(backend, order).await?;
    let platforms = resolve_platforms(backend, &release.assets).await?;

    info!("Serving manifest for release {}", release.tag_name);

    Ok(Manifest {
        version: release.tag_name,
        notes: RELEASE_NOTES,
        pub_date: release.published_at,
        platforms,
    })
}
