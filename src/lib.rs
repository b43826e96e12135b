//! Classifier for GitHub URLs and shorthand references.
//!
//! This crate turns links such as
//! `https://github.com/owner/repo/pull/7#discussion_r42` and shorthands such
//! as `owner/repo#7` into typed [`Resource`] values. It is purely syntactic:
//! nothing is fetched, and nothing is checked for existence.
//!
//! # Quick Start
//!
//! ```rust
//! use gh_locator::{parse_shorthand, parse_url, MatcherSettings, Resource};
//!
//! let settings = MatcherSettings::default();
//!
//! let comment = parse_url(
//!     "https://github.com/octocat/Hello-World/issues/1#issuecomment-99",
//!     &settings,
//! )
//! .unwrap();
//! assert!(matches!(comment, Resource::IssueComment { number: 1, comment_id: 99, .. }));
//! assert_eq!(comment.repo().unwrap().full_name(), "octocat/Hello-World");
//!
//! let reference = parse_shorthand("octocat/Hello-World@v1.0", None, &settings).unwrap();
//! assert_eq!(reference.to_string(), "octocat/Hello-World@v1.0");
//! ```
//!
//! # Matching Modes
//!
//! For issue, pull request and discussion URLs the path keyword and the
//! fragment can disagree, e.g. `/issues/1#discussioncomment-2`.
//!
//! - **Strict** (default): the fragment must belong to the path's resource
//!   type; otherwise there is no match.
//! - **Loose**: the fragment decides the resource type, and the keyword only
//!   breaks ties (`#issuecomment-` under `/pull/` is a pull request comment).
//!
//! ```rust
//! use gh_locator::{parse_url, MatcherSettings, ResourceKind};
//!
//! let url = "https://github.com/owner/repo/issues/1#discussioncomment-2";
//! let strict = MatcherSettings::default();
//! let loose = MatcherSettings::default().with_require_strict_type(false);
//!
//! assert_eq!(parse_url(url, &strict), None);
//! assert_eq!(
//!     parse_url(url, &loose).map(|r| r.kind()),
//!     Some(ResourceKind::DiscussionComment)
//! );
//! ```
//!
//! # Supported URLs
//!
//! | Path | Resource |
//! |------|----------|
//! | `/{login}` | `User` |
//! | `/{owner}/{repo}` | `Repo` |
//! | `/{owner}/{repo}/issues/{n}` | `Issue` |
//! | `.../issues/{n}#issuecomment-{id}` | `IssueComment` |
//! | `.../issues/{n}#event-{id}` | `IssueEvent` |
//! | `/{owner}/{repo}/pull/{n}` | `PullRequest` |
//! | `.../pull/{n}#issuecomment-{id}` | `PullRequestComment` |
//! | `.../pull/{n}#pullrequestreview-{id}` | `PullRequestReview` |
//! | `.../pull/{n}#discussion_r{id}` | `PullRequestReviewComment` |
//! | `.../pull/{n}/commits/{sha}#r{id}` | `PullRequestReviewComment` |
//! | `.../pull/{n}/files#r{id}` | `PullRequestReviewComment` |
//! | `.../pull/{n}#event-{id}` | `PullRequestEvent` |
//! | `/{owner}/{repo}/discussions/{n}` | `Discussion` |
//! | `.../discussions/{n}#discussioncomment-{id}` | `DiscussionComment` |
//! | `/{owner}/{repo}/commit/{sha}` | `Commit` |
//! | `.../commit/{sha}#commitcomment-{id}` | `CommitComment` |
//! | `/{owner}/{repo}/releases/tag/{tag}` | `ReleaseTag` |
//!
//! Each row can be switched off through [`MatcherSettings`].
//!
//! # Length Constraints
//!
//! | Component | Max Length |
//! |-----------|------------|
//! | Username | 39 chars |
//! | Repository name | 100 chars |
//!
//! # Logging
//!
//! Rejections are reported as `tracing` events at `TRACE` level and matches
//! at `DEBUG` level. The crate never installs a subscriber.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod classifier;
mod constants;
mod error;
mod fragment;
pub mod prelude;
mod repo;
mod resource;
mod settings;
mod shorthand;
mod subject;
mod validate;

pub use classifier::{parse_url, parse_url_with};
pub use constants::{DEFAULT_BASE_URL, DEFAULT_DOMAIN, MAX_REPO_NAME_LENGTH, MAX_USERNAME_LENGTH};
pub use error::{
    FragmentError, IdError, RefError, RepoError, RepoNameError, ShaError, UsernameError,
};
pub use fragment::Fragment;
pub use repo::Repo;
pub use resource::{Resource, ResourceKind, ReviewCommentLocation};
pub use settings::{MatcherSettings, PathKeyword};
pub use shorthand::parse_shorthand;
pub use validate::{
    is_valid_ref, is_valid_repo_name, is_valid_sha, is_valid_username, parse_id, validate_ref,
    validate_repo_name, validate_sha, validate_username,
};
