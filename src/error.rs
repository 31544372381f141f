use std::fmt;
use std::io;
use std::result;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    String(String),

    /// Errors due to IO, such as failures in file or keyring operations.
    IOError(String, io::Error),

    /// Errors related to handling of raw data, such as parsing the
    /// credentials cache or encoding the key payload.
    DataError(String),

    /// Errors raised while turning the ticket session key into an rxkad key.
    Derivation(DerivationError),
}

impl Error {
    pub fn is_not_found_error(&self) -> bool {
        if let Error::IOError(_, ref io_err) = self {
            return io_err.kind() == io::ErrorKind::NotFound;
        }
        return false;
    }

    pub fn is_data_error(&self) -> bool {
        if let Error::DataError(_) = self {
            return true;
        }
        return false;
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::String(s) => write!(f, "{}", s),
            Error::DataError(s) => write!(f, "{}", s),
            Error::IOError(desc, io_error) => {
                write!(f, "{}: {}", desc, io_error)
            }
            Error::Derivation(err) => write!(f, "{}", err),
        }
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        return Self::String(error);
    }
}

impl From<&str> for Error {
    fn from(error: &str) -> Self {
        return Self::String(error.to_string());
    }
}

impl From<(&str, io::Error)> for Error {
    fn from(error: (&str, io::Error)) -> Self {
        return Self::IOError(error.0.into(), error.1);
    }
}

impl From<(String, io::Error)> for Error {
    fn from(error: (String, io::Error)) -> Self {
        return Self::IOError(error.0, error.1);
    }
}

impl From<DerivationError> for Error {
    fn from(error: DerivationError) -> Self {
        return Self::Derivation(error);
    }
}

/// Failures of the session key derivation. All of them are fatal.
#[derive(Debug, Clone, PartialEq)]
pub enum DerivationError {
    /// The key block length does not fit the structure required by the
    /// enctype (8 octets for single DES, multiple of 8 for Triple DES).
    InvalidKeyLength { etype: i32, length: usize },

    /// The enctype is asymmetric or otherwise not applicable.
    Unsupported(i32),

    /// The enctype is known but excluded for security reasons.
    Deprecated(i32),

    /// Key block too short to feed the key derivation function.
    KeyTooShort(usize),

    /// The HMAC primitive failed or returned a short digest.
    CryptoPrimitiveFailure(String),

    /// No counter value produced a DES key that is not weak.
    KdfExhausted,
}

impl fmt::Display for DerivationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeyLength { etype, length } => write!(
                f,
                "Session key of enc type ({}) has invalid length ({} octets)",
                etype, length
            ),
            Self::Unsupported(etype) => {
                write!(f, "Ticket contains unsupported enc type ({})", etype)
            }
            Self::Deprecated(etype) => {
                write!(f, "Ticket contains deprecated enc type ({})", etype)
            }
            Self::KeyTooShort(length) => {
                write!(f, "Ticket contains short key block ({})", length)
            }
            Self::CryptoPrimitiveFailure(msg) => write!(f, "HMAC: {}", msg),
            Self::KdfExhausted => write!(f, "Unable to derive strong DES key"),
        }
    }
}
