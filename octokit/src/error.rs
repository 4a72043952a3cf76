use failure::{Backtrace, Context, Fail};
use std::fmt;

/// The specific kind of error that can occur.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
    /// The underlying http client could not be constructed.
    #[fail(display = "Could not build http client")]
    Client,
    /// The request never produced a response (connection, tls, timeout).
    #[fail(display = "Request to {} failed", _0)]
    Request(String),
    /// The server answered with a non-success status.
    #[fail(display = "{} responded with status {}", _0, _1)]
    Status(String, u16),
    /// A serialization / deserialization error
    #[fail(display = "Could not decode response from {}", _0)]
    Deserialize(String),
}

/// An error that can occur while interacting with Octokit
#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>,
}

impl Error {
    /// Return the kind of this error.
    pub fn kind(&self) -> &ErrorKind {
        self.inner.get_context()
    }

    /// The http status reported by the server, if one was received.
    pub fn status(&self) -> Option<u16> {
        match self.kind() {
            ErrorKind::Status(_, code) => Some(*code),
            _ => None,
        }
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
