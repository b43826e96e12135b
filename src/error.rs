//! Error types for identifier validation.
//!
//! The classifier itself never fails: it answers `None`. These errors belong
//! to the validators, which callers can run on their own to learn why a
//! candidate was rejected.

use std::fmt;

/// Errors for GitHub username (login) validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsernameError {
    /// Username is empty
    Empty,
    /// Username exceeds maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Username starts or ends with a hyphen
    EdgeHyphen,
    /// Invalid character (not an ASCII letter, digit or hyphen)
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for UsernameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "username cannot be empty"),
            Self::TooLong { max, actual } => {
                write!(f, "username length {actual} exceeds maximum {max}")
            }
            Self::EdgeHyphen => write!(f, "username cannot start or end with a hyphen"),
            Self::InvalidChar { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position}; only letters, digits, and hyphens allowed"
                )
            }
        }
    }
}

impl std::error::Error for UsernameError {}

/// Errors for repository name validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoNameError {
    /// Name is empty
    Empty,
    /// Name exceeds maximum length
    TooLong {
        /// Maximum allowed length
        max: usize,
        /// Actual length
        actual: usize,
    },
    /// Name is `.` or `..`
    Reserved,
    /// Invalid character (not an ASCII letter, digit, hyphen, dot or underscore)
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for RepoNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "repository name cannot be empty"),
            Self::TooLong { max, actual } => {
                write!(f, "repository name length {actual} exceeds maximum {max}")
            }
            Self::Reserved => write!(f, "'.' and '..' are not valid repository names"),
            Self::InvalidChar { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position}; allowed: letters, digits, hyphen, dot, underscore"
                )
            }
        }
    }
}

impl std::error::Error for RepoNameError {}

/// Errors for building a [`Repo`](crate::Repo).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// Owner login is invalid
    InvalidOwner(UsernameError),
    /// Repository name is invalid
    InvalidName(RepoNameError),
}

impl fmt::Display for RepoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidOwner(e) => write!(f, "invalid owner: {e}"),
            Self::InvalidName(e) => write!(f, "invalid repository name: {e}"),
        }
    }
}

impl std::error::Error for RepoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidOwner(e) => Some(e),
            Self::InvalidName(e) => Some(e),
        }
    }
}

/// Errors for git ref name validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefError {
    /// Ref is empty
    Empty,
    /// Ref is the single character `@`
    LoneAt,
    /// Ref starts or ends with `.` or `/`
    BadEdge {
        /// The offending character
        char: char,
    },
    /// Ref contains a forbidden sequence such as `..` or `@{`
    ForbiddenSequence {
        /// The sequence that was found
        sequence: &'static str,
    },
    /// Ref contains whitespace or an ASCII control character
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// A `/`-separated component starts with `.` or ends with `.lock` or `.`
    BadComponent {
        /// The offending component
        component: String,
    },
}

impl fmt::Display for RefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "ref cannot be empty"),
            Self::LoneAt => write!(f, "'@' is not a valid ref"),
            Self::BadEdge { char } => write!(f, "ref cannot start or end with '{char}'"),
            Self::ForbiddenSequence { sequence } => {
                write!(f, "ref cannot contain '{sequence}'")
            }
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character {char:?} at position {position}")
            }
            Self::BadComponent { component } => {
                write!(
                    f,
                    "ref component '{component}' cannot start with '.' or end with '.lock' or '.'"
                )
            }
        }
    }
}

impl std::error::Error for RefError {}

/// Errors for commit SHA validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaError {
    /// SHA is empty
    Empty,
    /// Non-hexadecimal character
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for ShaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "commit SHA cannot be empty"),
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}; expected hex digit")
            }
        }
    }
}

impl std::error::Error for ShaError {}

/// Errors for numeric identifier validation (numbers, comment/event/review IDs).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// Identifier is empty
    Empty,
    /// Non-digit character
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
    /// Identifier is zero
    Zero,
    /// Identifier does not fit in a `u64`
    Overflow,
}

impl fmt::Display for IdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "identifier cannot be empty"),
            Self::InvalidChar { char, position } => {
                write!(f, "invalid character '{char}' at position {position}; expected digit")
            }
            Self::Zero => write!(f, "identifier must be positive"),
            Self::Overflow => write!(f, "identifier exceeds {}", u64::MAX),
        }
    }
}

impl std::error::Error for IdError {}

/// Errors for URL fragment classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentError {
    /// Fragment does not start with a known prefix
    Unrecognized {
        /// The fragment text, without `#`
        fragment: String,
    },
    /// Prefix is known but the trailing identifier is invalid
    InvalidId {
        /// The matched prefix
        prefix: &'static str,
        /// Why the identifier was rejected
        reason: IdError,
    },
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unrecognized { fragment } => write!(f, "unrecognized fragment '#{fragment}'"),
            Self::InvalidId { prefix, reason } => {
                write!(f, "invalid identifier after '#{prefix}': {reason}")
            }
        }
    }
}

impl std::error::Error for FragmentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unrecognized { .. } => None,
            Self::InvalidId { reason, .. } => Some(reason),
        }
    }
}
