//! Repository identity.

use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_BASE_URL;
use crate::error::RepoError;
use crate::validate::{validate_repo_name, validate_username};

/// A validated `owner/name` repository reference.
///
/// Both parts are checked against GitHub's syntax rules on construction.
/// Case is preserved exactly as given.
///
/// # Examples
///
/// ```
/// use gh_locator::Repo;
///
/// let repo = Repo::new("octocat", "Hello-World").unwrap();
/// assert_eq!(repo.full_name(), "octocat/Hello-World");
/// assert_eq!(repo.html_url(), "https://github.com/octocat/Hello-World");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Repo {
    name: String,
    owner: String,
}

impl Repo {
    /// Creates a repository reference from its owner login and name.
    ///
    /// # Errors
    ///
    /// Returns `RepoError` if the owner is not a valid username or the name is
    /// not a valid repository name.
    pub fn new(owner: &str, name: &str) -> Result<Self, RepoError> {
        validate_username(owner).map_err(RepoError::InvalidOwner)?;
        validate_repo_name(name).map_err(RepoError::InvalidName)?;
        Ok(Self {
            name: name.to_string(),
            owner: owner.to_string(),
        })
    }

    /// Returns the repository name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the owner login.
    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Returns `owner/name`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }

    /// Returns the repository's address on github.com.
    ///
    /// Only meaningful for the default domain.
    #[must_use]
    pub fn html_url(&self) -> String {
        format!("{DEFAULT_BASE_URL}/{}/{}", self.owner, self.name)
    }
}

impl fmt::Display for Repo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

impl FromStr for Repo {
    type Err = RepoError;

    /// Parses `owner/name`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (owner, name) = s.split_once('/').unwrap_or(("", s));
        Self::new(owner, name)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Repo {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            name: String,
            owner: String,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(&raw.owner, &raw.name).map_err(serde::de::Error::custom)
    }
}
