//! Syntax validators for GitHub identifiers.
//!
//! These are the building blocks of the classifier. Each comes in two forms:
//! a `validate_*` function returning the rejection reason, and an `is_valid_*`
//! predicate.

use crate::constants::{MAX_REPO_NAME_LENGTH, MAX_USERNAME_LENGTH};
use crate::error::{IdError, RefError, RepoNameError, ShaError, UsernameError};

/// Sequences that git refuses anywhere in a ref name.
const FORBIDDEN_REF_SEQUENCES: [&str; 11] =
    ["..", "~", "^", ":", "?", "*", "[", "\\", "@{", "//", "/."];

/// Validates a GitHub username.
///
/// Usernames are 1 to 39 ASCII letters, digits or hyphens, and cannot start
/// or end with a hyphen. Case is preserved and not checked.
///
/// # Errors
///
/// Returns `UsernameError` describing the first rule the input breaks.
///
/// # Examples
///
/// ```
/// use gh_locator::validate_username;
///
/// assert!(validate_username("octocat").is_ok());
/// assert!(validate_username("-octocat").is_err());
/// ```
pub fn validate_username(input: &str) -> Result<(), UsernameError> {
    if input.is_empty() {
        return Err(UsernameError::Empty);
    }

    for (i, c) in input.chars().enumerate() {
        if !(c.is_ascii_alphanumeric() || c == '-') {
            return Err(UsernameError::InvalidChar { char: c, position: i });
        }
    }

    // All characters are ASCII past this point.
    if input.len() > MAX_USERNAME_LENGTH {
        return Err(UsernameError::TooLong {
            max: MAX_USERNAME_LENGTH,
            actual: input.len(),
        });
    }

    if input.starts_with('-') || input.ends_with('-') {
        return Err(UsernameError::EdgeHyphen);
    }

    Ok(())
}

/// Returns true if `input` is a syntactically valid GitHub username.
#[must_use]
pub fn is_valid_username(input: &str) -> bool {
    validate_username(input).is_ok()
}

/// Validates a GitHub repository name.
///
/// # Errors
///
/// Returns `RepoNameError` if the name is empty, longer than 100 characters,
/// is `.` or `..`, or contains anything besides ASCII letters, digits, `-`,
/// `.` and `_`.
///
/// # Examples
///
/// ```
/// use gh_locator::validate_repo_name;
///
/// assert!(validate_repo_name("Hello-World").is_ok());
/// assert!(validate_repo_name("hello world").is_err());
/// ```
pub fn validate_repo_name(input: &str) -> Result<(), RepoNameError> {
    if input.is_empty() {
        return Err(RepoNameError::Empty);
    }

    for (i, c) in input.chars().enumerate() {
        if !(c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_')) {
            return Err(RepoNameError::InvalidChar { char: c, position: i });
        }
    }

    if input.len() > MAX_REPO_NAME_LENGTH {
        return Err(RepoNameError::TooLong {
            max: MAX_REPO_NAME_LENGTH,
            actual: input.len(),
        });
    }

    if input == "." || input == ".." {
        return Err(RepoNameError::Reserved);
    }

    Ok(())
}

/// Returns true if `input` is a syntactically valid repository name.
#[must_use]
pub fn is_valid_repo_name(input: &str) -> bool {
    validate_repo_name(input).is_ok()
}

/// Validates a git ref name (branch, tag or commit-ish).
///
/// Follows the rules of `git check-ref-format` that matter for shorthands.
///
/// # Errors
///
/// Returns `RefError` naming the broken rule.
///
/// # Examples
///
/// ```
/// use gh_locator::validate_ref;
///
/// assert!(validate_ref("v1.0").is_ok());
/// assert!(validate_ref("feature/login").is_ok());
/// assert!(validate_ref("fix..it").is_err());
/// assert!(validate_ref("topic.lock").is_err());
/// ```
pub fn validate_ref(input: &str) -> Result<(), RefError> {
    let (Some(first), Some(last)) = (input.chars().next(), input.chars().next_back()) else {
        return Err(RefError::Empty);
    };

    if input == "@" {
        return Err(RefError::LoneAt);
    }

    for edge in [first, last] {
        if matches!(edge, '.' | '/') {
            return Err(RefError::BadEdge { char: edge });
        }
    }

    if let Some(sequence) = FORBIDDEN_REF_SEQUENCES
        .into_iter()
        .find(|seq| input.contains(seq))
    {
        return Err(RefError::ForbiddenSequence { sequence });
    }

    for (i, c) in input.chars().enumerate() {
        if c.is_whitespace() || c.is_control() {
            return Err(RefError::InvalidChar { char: c, position: i });
        }
    }

    if let Some(component) = input
        .split('/')
        .find(|c| c.starts_with('.') || c.ends_with(".lock") || c.ends_with('.'))
    {
        return Err(RefError::BadComponent {
            component: component.to_string(),
        });
    }

    Ok(())
}

/// Returns true if `input` is a valid git ref name.
#[must_use]
pub fn is_valid_ref(input: &str) -> bool {
    validate_ref(input).is_ok()
}

/// Validates a (possibly abbreviated) commit SHA: one or more hex digits.
///
/// # Errors
///
/// Returns `ShaError` if the input is empty or contains a non-hex character.
pub fn validate_sha(input: &str) -> Result<(), ShaError> {
    if input.is_empty() {
        return Err(ShaError::Empty);
    }
    for (i, c) in input.chars().enumerate() {
        if !c.is_ascii_hexdigit() {
            return Err(ShaError::InvalidChar { char: c, position: i });
        }
    }
    Ok(())
}

/// Returns true if `input` is a valid commit SHA.
#[must_use]
pub fn is_valid_sha(input: &str) -> bool {
    validate_sha(input).is_ok()
}

/// Parses a positive decimal identifier (issue number, comment ID, ...).
///
/// Only ASCII digits are accepted: no sign, whitespace or radix prefix.
///
/// # Errors
///
/// Returns `IdError` if the input is empty, non-numeric, zero, or overflows `u64`.
///
/// # Examples
///
/// ```
/// use gh_locator::parse_id;
///
/// assert_eq!(parse_id("42"), Ok(42));
/// assert!(parse_id("0").is_err());
/// assert!(parse_id("+4").is_err());
/// ```
pub fn parse_id(input: &str) -> Result<u64, IdError> {
    if input.is_empty() {
        return Err(IdError::Empty);
    }
    for (i, c) in input.chars().enumerate() {
        if !c.is_ascii_digit() {
            return Err(IdError::InvalidChar { char: c, position: i });
        }
    }
    match input.parse::<u64>() {
        Ok(0) => Err(IdError::Zero),
        Ok(id) => Ok(id),
        Err(_) => Err(IdError::Overflow),
    }
}
