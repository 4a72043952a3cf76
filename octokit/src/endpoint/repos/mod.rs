mod releases;

pub use releases::{fetch_text, list_releases, Asset, Release};
