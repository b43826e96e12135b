//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use gh_locator::prelude::*;
//!
//! let resource = parse_url("https://github.com/octocat", &MatcherSettings::default());
//! assert_eq!(resource.map(|r| r.kind()), Some(ResourceKind::User));
//! ```
//!
//! Validator functions are left out; import them from the crate root.

pub use crate::{
    // Entry points
    parse_shorthand, parse_url, parse_url_with,
    // Core types
    Fragment, MatcherSettings, PathKeyword, Repo, Resource, ResourceKind, ReviewCommentLocation,
    // Errors
    FragmentError, IdError, RefError, RepoError, RepoNameError, ShaError, UsernameError,
};
