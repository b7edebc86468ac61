use crate::{Result, ZStr};
use std::fmt::{self, Display};

const SUCCESS_MESSAGE: &str = "Successful operation";
const UNDEFINED_MESSAGE: &str = "Undefined error occurred";

/// Closed set of failure categories.
///
/// `Success` is a sentinel rather than a failure: an [`Error`] carrying it
/// means "nothing went wrong".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Success = 0,
    Failure = 1,
    InitFailed = 2,
    InvalidArgument = 3,
    FailedConnection = 4,
    OutOfRange = 5,
    IndexOutOfRange = 6,
    EmptyArray = 7,
    ZeroDivision = 8,
}

impl ErrorKind {
    /// Stable numeric value of the kind.
    pub const fn code(self) -> i64 {
        self as i64
    }

    pub fn is_success(self) -> bool {
        self == ErrorKind::Success
    }
}

/// A failure payload: a kind plus a human-readable message.
///
/// A `Success` kind always carries the message `"Successful operation"`,
/// whatever the caller passed in.
///
/// Two errors compare equal when their kinds match; messages are not
/// compared.
#[derive(Debug, Clone)]
pub struct Error {
    kind: ErrorKind,
    message: ZStr,
}

impl Error {
    /// Creates an error with a message. A `Success` kind discards `message`.
    pub fn new(kind: ErrorKind, message: impl Into<ZStr>) -> Error {
        if kind.is_success() {
            return Error::success();
        }
        let message = message.into();
        debug!("{:?}: {}", kind, message);
        Error { kind, message }
    }

    /// Creates an error without a message. Non-success kinds get a
    /// placeholder message.
    pub fn from_kind(kind: ErrorKind) -> Error {
        if kind.is_success() {
            Error::success()
        } else {
            Error::new(kind, UNDEFINED_MESSAGE)
        }
    }

    pub fn success() -> Error {
        Error {
            kind: ErrorKind::Success,
            message: ZStr::from(SUCCESS_MESSAGE),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &ZStr {
        &self.message
    }

    /// Returns `true` when this value describes a failure.
    ///
    /// Note the polarity: `true` means "something went wrong", which is the
    /// opposite of a typical success flag. Use it as a guard:
    /// `if status.is_error() { return Err(status) }`.
    pub fn is_error(&self) -> bool {
        !self.kind.is_success()
    }

    pub fn is_success(&self) -> bool {
        self.kind.is_success()
    }

    /// Prefixes the message with `context`, producing `"<context>: <message>"`.
    /// The kind is kept.
    pub fn with_context(self, context: &str) -> Error {
        let kind = self.kind;
        self.with_kind_and_context(kind, context)
    }

    /// Like [`Error::with_context`], but re-categorises the error as `kind`.
    pub fn with_kind_and_context(self, kind: ErrorKind, context: &str) -> Error {
        let message = &(ZStr::from(context) + ": ") + &self.message;
        Error::new(kind, message)
    }

    /// Turns a status value into a result: success becomes `Ok(())`.
    pub fn into_result(self) -> Result<()> {
        if self.is_error() {
            Err(self)
        } else {
            Ok(())
        }
    }
}

impl Default for Error {
    fn default() -> Self {
        Error::success()
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::from_kind(kind)
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Error {}

impl PartialEq<ErrorKind> for Error {
    fn eq(&self, other: &ErrorKind) -> bool {
        self.kind == *other
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.message, f)
    }
}

impl std::error::Error for Error {}
