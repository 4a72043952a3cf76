use serde::Serialize;
use std::fmt;

/// Represents a platform the updater publishes builds for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlatformKey {
    #[serde(rename = "windows-x86_64")]
    Windows,
    #[serde(rename = "linux-x86_64")]
    Linux,
    #[serde(rename = "darwin-x86_64")]
    Darwin,
}

impl PlatformKey {
    pub const ALL: [PlatformKey; 3] = [PlatformKey::Windows, PlatformKey::Linux, PlatformKey::Darwin];

    /// The key as it appears in the manifest.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKey::Windows => "windows-x86_64",
            PlatformKey::Linux => "linux-x86_64",
            PlatformKey::Darwin => "darwin-x86_64",
        }
    }

    /// File name suffix of the detached signature belonging to this platform's bundle.
    pub fn signature_suffix(&self) -> &'static str {
        match self {
            PlatformKey::Windows => "en-US.msi.zip.sig",
            PlatformKey::Linux => ".AppImage.tar.gz.sig",
            PlatformKey::Darwin => ".app.tar.gz.sig",
        }
    }

    /// Whether `url` points at this platform's signature file.
    pub fn matches(&self, url: &str) -> bool {
        url.ends_with(self.signature_suffix())
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
