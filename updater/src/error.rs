use crate::platform::PlatformKey;
use failure::{Backtrace, Context, Fail};
use rocket::http::Status;
use std::fmt;

/// Everything that can go wrong while producing a manifest.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
    /// The target repository (or another setting) is missing or malformed.
    #[fail(display = "Invalid configuration: {}", _0)]
    Configuration(String),
    /// GitHub could not be reached or answered with a non-success status.
    #[fail(display = "Upstream request failed")]
    UpstreamUnavailable,
    #[fail(display = "Repository has no releases")]
    NoReleasesFound,
    /// No asset of the selected release ends with the platform's signature suffix.
    #[fail(display = "No signature asset found for platform {}", _0)]
    PlatformAssetMissing(PlatformKey),
    #[fail(display = "Could not fetch signature for platform {}", _0)]
    PlatformFetchFailed(PlatformKey),
}

impl ErrorKind {
    /// Machine readable code used in detailed error responses.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Configuration(_) => "configuration_error",
            ErrorKind::UpstreamUnavailable => "upstream_unavailable",
            ErrorKind::NoReleasesFound => "no_releases_found",
            ErrorKind::PlatformAssetMissing(_) => "platform_asset_missing",
            ErrorKind::PlatformFetchFailed(_) => "platform_fetch_failed",
        }
    }

    pub fn status(&self) -> Status {
        match self {
            ErrorKind::Configuration(_) => Status::InternalServerError,
            ErrorKind::UpstreamUnavailable | ErrorKind::PlatformFetchFailed(_) => Status::BadGateway,
            ErrorKind::NoReleasesFound | ErrorKind::PlatformAssetMissing(_) => Status::NotFound,
        }
    }

    /// The platform the failure is attributed to, if any.
    pub fn platform(&self) -> Option<PlatformKey> {
        match self {
            ErrorKind::PlatformAssetMissing(key) | ErrorKind::PlatformFetchFailed(key) => Some(*key),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>,
}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        self.inner.get_context()
    }

    /// The first http status reported by GitHub along the cause chain.
    pub fn upstream_status(&self) -> Option<u16> {
        (self as &dyn Fail)
            .iter_causes()
            .filter_map(|cause| cause.downcast_ref::<octokit::Error>())
            .find_map(|e| e.status())
    }

    /// Renders the error and all of its causes on a single line.
    pub fn chain(&self) -> String {
        (self as &dyn Fail)
            .iter_chain()
            .map(|f| f.to_string())
            .collect::<Vec<_>>()
            .join(": ")
    }
}

impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.inner.backtrace()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Context::new(kind),
        }
    }
}

impl From<Context<ErrorKind>> for Error {
    fn from(inner: Context<ErrorKind>) -> Error {
        Error { inner }
    }
}
