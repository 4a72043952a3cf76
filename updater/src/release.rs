use crate::backend::Backend;
use crate::config::ReleaseOrder;
use crate::error::{Error, ErrorKind};
use octokit::endpoint::repos::Release;
use std::cmp::Reverse;

/// Fetches the releases once and picks the latest one according to `order`.
pub async fn latest_release(backend: &dyn Backend, order: ReleaseOrder) -> Result<Release, Error> {
    let releases = backend.list_releases().await?;
    select_latest(releases, order)
}

/// With [`ReleaseOrder::Listed`] the upstream order is trusted and the first release wins,
/// whatever its version. [`ReleaseOrder::Published`] sorts by `published_at` (newest first,
/// unpublished last) before taking the first; the sort is stable so ties keep upstream order.
///
/// GitHub timestamps are fixed-width RFC 3339 UTC strings, so they compare lexicographically.
pub fn select_latest(mut releases: Vec<Release>, order: ReleaseOrder) -> Result<Release, Error> {
    if order == ReleaseOrder::Published {
        releases.sort_by_key(|r| Reverse(r.published_at.clone()));
    }

    releases
        .into_iter()
        .next()
        .ok_or_else(|| ErrorKind::NoReleasesFound.into())
}
