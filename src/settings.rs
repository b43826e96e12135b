//! Matcher configuration.

use std::collections::BTreeSet;
use std::fmt;

use crate::constants::DEFAULT_DOMAIN;

/// The resource-type keyword found in the third URL path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathKeyword {
    /// `/{owner}/{repo}/issues/...`
    Issues,
    /// `/{owner}/{repo}/pull/...`
    Pull,
    /// `/{owner}/{repo}/discussions/...`
    Discussions,
    /// `/{owner}/{repo}/commit/...`
    Commit,
    /// `/{owner}/{repo}/releases/...`
    Releases,
}

impl PathKeyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Issues,
        Self::Pull,
        Self::Discussions,
        Self::Commit,
        Self::Releases,
    ];

    /// Looks up the keyword for a path segment. Matching is case-sensitive.
    #[must_use]
    pub fn from_segment(segment: &str) -> Option<Self> {
        match segment {
            "issues" => Some(Self::Issues),
            "pull" => Some(Self::Pull),
            "discussions" => Some(Self::Discussions),
            "commit" => Some(Self::Commit),
            "releases" => Some(Self::Releases),
            _ => None,
        }
    }

    /// Returns the keyword as it appears in URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Issues => "issues",
            Self::Pull => "pull",
            Self::Discussions => "discussions",
            Self::Commit => "commit",
            Self::Releases => "releases",
        }
    }

    /// Returns true for the keywords handled by the strict/loose tables.
    #[must_use]
    pub const fn is_numbered(self) -> bool {
        matches!(self, Self::Issues | Self::Pull | Self::Discussions)
    }
}

impl fmt::Display for PathKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings for matching GitHub URLs and shorthands.
///
/// Every flag is independent: disabling one never disables another. For
/// example, turning off `issues` still lets `issue_comments` match.
///
/// # Examples
///
/// ```
/// use gh_locator::MatcherSettings;
///
/// let settings = MatcherSettings::none()
///     .with_issues(true)
///     .with_domains(["github.com", "github.example.org"]);
/// assert!(settings.issues);
/// assert!(!settings.pull_requests);
/// assert!(settings.accepts_host("github.example.org"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[allow(clippy::struct_excessive_bools)]
pub struct MatcherSettings {
    /// Hosts (with optional `:port`) treated as GitHub. Compared exactly.
    pub domains: Vec<String>,
    /// Match `/{owner}/{repo}/issues/{number}`.
    pub issues: bool,
    /// Match `/issues/{number}#issuecomment-{id}`.
    pub issue_comments: bool,
    /// Match `/issues/{number}#event-{id}`.
    pub issue_events: bool,
    /// Match `/{owner}/{repo}/pull/{number}`.
    pub pull_requests: bool,
    /// Match `/pull/{number}#issuecomment-{id}`.
    pub pull_request_comments: bool,
    /// Match `/pull/{number}#pullrequestreview-{id}`.
    pub pull_request_reviews: bool,
    /// Match `#discussion_r{id}` and the `commits/{sha}#r{id}`, `files#r{id}` pages.
    pub pull_request_review_comments: bool,
    /// Match `/pull/{number}#event-{id}`.
    pub pull_request_events: bool,
    /// Match `/{owner}/{repo}/discussions/{number}`.
    pub discussions: bool,
    /// Match `/discussions/{number}#discussioncomment-{id}`.
    pub discussion_comments: bool,
    /// Match `/{owner}/{repo}/commit/{sha}`.
    pub commits: bool,
    /// Match `/commit/{sha}#commitcomment-{id}`.
    pub commit_comments: bool,
    /// Match `/{owner}/{repo}/releases/tag/{tag}`.
    pub releases: bool,
    /// Master switch for shorthand parsing.
    pub shorthand: bool,
    /// Accept bare `owner/repo` shorthands.
    pub short_repo: bool,
    /// Accept `owner/repo#number` shorthands.
    pub short_numberables: bool,
    /// Accept `owner/repo@ref` shorthands.
    pub short_refs: bool,
    /// Only honour fragments that agree with the path's resource keyword.
    pub require_strict_type: bool,
}

impl Default for MatcherSettings {
    fn default() -> Self {
        Self {
            domains: vec![DEFAULT_DOMAIN.to_string()],
            issues: true,
            issue_comments: true,
            issue_events: true,
            pull_requests: true,
            pull_request_comments: true,
            pull_request_reviews: true,
            pull_request_review_comments: true,
            pull_request_events: true,
            discussions: true,
            discussion_comments: true,
            commits: true,
            commit_comments: true,
            releases: true,
            shorthand: true,
            short_repo: true,
            short_numberables: true,
            short_refs: true,
            require_strict_type: true,
        }
    }
}

macro_rules! flag_overrides {
    ($($(#[$doc:meta])* $method:ident => $field:ident;)*) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $method(mut self, enabled: bool) -> Self {
                self.$field = enabled;
                self
            }
        )*
    };
}

impl MatcherSettings {
    /// Returns settings with every feature flag disabled.
    ///
    /// `require_strict_type` and `domains` keep their defaults. Use this as a
    /// base to opt in to individual features.
    #[must_use]
    pub fn none() -> Self {
        Self {
            issues: false,
            issue_comments: false,
            issue_events: false,
            pull_requests: false,
            pull_request_comments: false,
            pull_request_reviews: false,
            pull_request_review_comments: false,
            pull_request_events: false,
            discussions: false,
            discussion_comments: false,
            commits: false,
            commit_comments: false,
            releases: false,
            shorthand: false,
            short_repo: false,
            short_numberables: false,
            short_refs: false,
            ..Self::default()
        }
    }

    /// Replaces the accepted hosts.
    #[must_use]
    pub fn with_domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domains = domains.into_iter().map(Into::into).collect();
        self
    }

    flag_overrides! {
        /// Sets `issues`.
        with_issues => issues;
        /// Sets `issue_comments`.
        with_issue_comments => issue_comments;
        /// Sets `issue_events`.
        with_issue_events => issue_events;
        /// Sets `pull_requests`.
        with_pull_requests => pull_requests;
        /// Sets `pull_request_comments`.
        with_pull_request_comments => pull_request_comments;
        /// Sets `pull_request_reviews`.
        with_pull_request_reviews => pull_request_reviews;
        /// Sets `pull_request_review_comments`.
        with_pull_request_review_comments => pull_request_review_comments;
        /// Sets `pull_request_events`.
        with_pull_request_events => pull_request_events;
        /// Sets `discussions`.
        with_discussions => discussions;
        /// Sets `discussion_comments`.
        with_discussion_comments => discussion_comments;
        /// Sets `commits`.
        with_commits => commits;
        /// Sets `commit_comments`.
        with_commit_comments => commit_comments;
        /// Sets `releases`.
        with_releases => releases;
        /// Sets `shorthand`.
        with_shorthand => shorthand;
        /// Sets `short_repo`.
        with_short_repo => short_repo;
        /// Sets `short_numberables`.
        with_short_numberables => short_numberables;
        /// Sets `short_refs`.
        with_short_refs => short_refs;
        /// Selects strict (`true`) or loose (`false`) type binding.
        with_require_strict_type => require_strict_type;
    }

    /// Returns true if `host` (formatted `host[:port]`) is one of `domains`.
    #[must_use]
    pub fn accepts_host(&self, host: &str) -> bool {
        self.domains.iter().any(|d| d == host)
    }

    /// Returns true if the base resource type behind `keyword` is enabled.
    ///
    /// This gates only the bare `{keyword}/{id}` page; comment, event and
    /// review flags are checked separately.
    #[must_use]
    pub const fn supports(&self, keyword: PathKeyword) -> bool {
        match keyword {
            PathKeyword::Issues => self.issues,
            PathKeyword::Pull => self.pull_requests,
            PathKeyword::Discussions => self.discussions,
            PathKeyword::Commit => self.commits,
            PathKeyword::Releases => self.releases,
        }
    }

    /// Returns the path keywords whose base resource type is enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use gh_locator::{MatcherSettings, PathKeyword};
    ///
    /// let types = MatcherSettings::none().with_commits(true).supported_path_types();
    /// assert_eq!(types.into_iter().collect::<Vec<_>>(), vec![PathKeyword::Commit]);
    /// ```
    #[must_use]
    pub fn supported_path_types(&self) -> BTreeSet<PathKeyword> {
        PathKeyword::ALL
            .into_iter()
            .filter(|keyword| self.supports(*keyword))
            .collect()
    }
}
