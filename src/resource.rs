//! The closed set of GitHub resources the classifier can produce.

use std::fmt;

use percent_encoding::{AsciiSet, CONTROLS, PercentEncode, utf8_percent_encode};

use crate::constants::{
    COMMIT_COMMENT_PREFIX, DEFAULT_BASE_URL, DIFF_COMMENT_PREFIX, DISCUSSION_COMMENT_PREFIX,
    EVENT_PREFIX, ISSUE_COMMENT_PREFIX, REVIEW_COMMENT_PREFIX, REVIEW_PREFIX,
};
use crate::repo::Repo;

/// Bytes escaped when decoded text is written back as a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Ref names span several segments, so `/` stays literal.
const REF_PATH: &AsciiSet = &PATH_SEGMENT.remove(b'/');

fn segment(text: &str) -> PercentEncode<'_> {
    utf8_percent_encode(text, PATH_SEGMENT)
}

/// Where a pull request review comment was linked from.
///
/// The same review comment is reachable from three pages. Only the commits
/// page carries the commit SHA.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReviewCommentLocation {
    /// `pull/{n}#discussion_r{id}`
    #[default]
    Conversation,
    /// `pull/{n}/commits/{sha}#r{id}`
    Commit {
        /// Commit the comment is attached to
        sha: String,
    },
    /// `pull/{n}/files#r{id}`
    Files,
}

/// A GitHub resource identified by a URL or shorthand.
///
/// Every variant owns its full field set. Values compare, hash and order by
/// variant, then by fields in declaration order.
///
/// Numbers and IDs are positive in every value the parsers return, and
/// deserialization rejects zero. Values built directly from the public fields
/// are not checked.
///
/// # Examples
///
/// ```
/// use gh_locator::{parse_url, MatcherSettings, Repo, Resource};
///
/// let resource = parse_url(
///     "https://github.com/octocat/Hello-World/issues/42",
///     &MatcherSettings::default(),
/// );
/// assert_eq!(
///     resource,
///     Some(Resource::Issue {
///         repo: Repo::new("octocat", "Hello-World").unwrap(),
///         number: 42,
///     })
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Resource {
    /// `/{login}`
    User {
        /// Login of the user or organisation
        login: String,
    },
    /// `/{owner}/{repo}`
    Repo(Repo),
    /// `owner/repo#N` shorthand: an issue, pull request or discussion
    NumberedResource {
        /// Owning repository
        repo: Repo,
        /// Issue, pull request or discussion number
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        number: u64,
    },
    /// `/issues/{n}`
    Issue {
        /// Owning repository
        repo: Repo,
        /// Issue number
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        number: u64,
    },
    /// `/issues/{n}#issuecomment-{id}`
    IssueComment {
        /// Owning repository
        repo: Repo,
        /// Issue number
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        number: u64,
        /// Comment ID
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        comment_id: u64,
    },
    /// `/issues/{n}#event-{id}`
    IssueEvent {
        /// Owning repository
        repo: Repo,
        /// Issue number
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        number: u64,
        /// Timeline event ID
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        event_id: u64,
    },
    /// `/pull/{n}`
    PullRequest {
        /// Owning repository
        repo: Repo,
        /// Pull request number
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        number: u64,
    },
    /// `/pull/{n}#issuecomment-{id}`
    PullRequestComment {
        /// Owning repository
        repo: Repo,
        /// Pull request number
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        number: u64,
        /// Comment ID
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        comment_id: u64,
    },
    /// `/pull/{n}#pullrequestreview-{id}`
    PullRequestReview {
        /// Owning repository
        repo: Repo,
        /// Pull request number
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        number: u64,
        /// Review ID
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        review_id: u64,
    },
    /// `/pull/{n}#discussion_r{id}` and its commits/files page variants
    PullRequestReviewComment {
        /// Owning repository
        repo: Repo,
        /// Pull request number
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        number: u64,
        /// Review comment ID
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        comment_id: u64,
        /// Page the comment was linked from
        location: ReviewCommentLocation,
    },
    /// `/pull/{n}#event-{id}`
    PullRequestEvent {
        /// Owning repository
        repo: Repo,
        /// Pull request number
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        number: u64,
        /// Timeline event ID
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        event_id: u64,
    },
    /// `/discussions/{n}`
    Discussion {
        /// Owning repository
        repo: Repo,
        /// Discussion number
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        number: u64,
    },
    /// `/discussions/{n}#discussioncomment-{id}`
    DiscussionComment {
        /// Owning repository
        repo: Repo,
        /// Discussion number
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        number: u64,
        /// Comment ID
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        comment_id: u64,
    },
    /// `/commit/{sha}`
    Commit {
        /// Owning repository
        repo: Repo,
        /// Commit SHA, as written in the URL
        sha: String,
    },
    /// `/commit/{sha}#commitcomment-{id}`
    CommitComment {
        /// Owning repository
        repo: Repo,
        /// Commit SHA, as written in the URL
        sha: String,
        /// Comment ID
        #[cfg_attr(feature = "serde", serde(deserialize_with = "positive"))]
        comment_id: u64,
    },
    /// `/releases/tag/{tag}`
    ReleaseTag {
        /// Owning repository
        repo: Repo,
        /// Tag name
        tag: String,
    },
    /// `owner/repo@ref` shorthand
    Ref {
        /// Owning repository
        repo: Repo,
        /// Branch, tag or commit-ish
        reference: String,
    },
}

/// Fieldless discriminant of [`Resource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[allow(missing_docs)]
pub enum ResourceKind {
    User,
    Repo,
    NumberedResource,
    Issue,
    IssueComment,
    IssueEvent,
    PullRequest,
    PullRequestComment,
    PullRequestReview,
    PullRequestReviewComment,
    PullRequestEvent,
    Discussion,
    DiscussionComment,
    Commit,
    CommitComment,
    ReleaseTag,
    Ref,
}

impl ResourceKind {
    /// Returns the kind's name in `snake_case`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Repo => "repo",
            Self::NumberedResource => "numbered_resource",
            Self::Issue => "issue",
            Self::IssueComment => "issue_comment",
            Self::IssueEvent => "issue_event",
            Self::PullRequest => "pull_request",
            Self::PullRequestComment => "pull_request_comment",
            Self::PullRequestReview => "pull_request_review",
            Self::PullRequestReviewComment => "pull_request_review_comment",
            Self::PullRequestEvent => "pull_request_event",
            Self::Discussion => "discussion",
            Self::DiscussionComment => "discussion_comment",
            Self::Commit => "commit",
            Self::CommitComment => "commit_comment",
            Self::ReleaseTag => "release_tag",
            Self::Ref => "ref",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Resource {
    /// Returns the variant's kind.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::User { .. } => ResourceKind::User,
            Self::Repo(_) => ResourceKind::Repo,
            Self::NumberedResource { .. } => ResourceKind::NumberedResource,
            Self::Issue { .. } => ResourceKind::Issue,
            Self::IssueComment { .. } => ResourceKind::IssueComment,
            Self::IssueEvent { .. } => ResourceKind::IssueEvent,
            Self::PullRequest { .. } => ResourceKind::PullRequest,
            Self::PullRequestComment { .. } => ResourceKind::PullRequestComment,
            Self::PullRequestReview { .. } => ResourceKind::PullRequestReview,
            Self::PullRequestReviewComment { .. } => ResourceKind::PullRequestReviewComment,
            Self::PullRequestEvent { .. } => ResourceKind::PullRequestEvent,
            Self::Discussion { .. } => ResourceKind::Discussion,
            Self::DiscussionComment { .. } => ResourceKind::DiscussionComment,
            Self::Commit { .. } => ResourceKind::Commit,
            Self::CommitComment { .. } => ResourceKind::CommitComment,
            Self::ReleaseTag { .. } => ResourceKind::ReleaseTag,
            Self::Ref { .. } => ResourceKind::Ref,
        }
    }

    /// Returns the repository the resource lives in, or `None` for a user.
    #[must_use]
    pub const fn repo(&self) -> Option<&Repo> {
        match self {
            Self::User { .. } => None,
            Self::Repo(repo)
            | Self::NumberedResource { repo, .. }
            | Self::Issue { repo, .. }
            | Self::IssueComment { repo, .. }
            | Self::IssueEvent { repo, .. }
            | Self::PullRequest { repo, .. }
            | Self::PullRequestComment { repo, .. }
            | Self::PullRequestReview { repo, .. }
            | Self::PullRequestReviewComment { repo, .. }
            | Self::PullRequestEvent { repo, .. }
            | Self::Discussion { repo, .. }
            | Self::DiscussionComment { repo, .. }
            | Self::Commit { repo, .. }
            | Self::CommitComment { repo, .. }
            | Self::ReleaseTag { repo, .. }
            | Self::Ref { repo, .. } => Some(repo),
        }
    }

    /// Returns the issue, pull request or discussion number, if any.
    #[must_use]
    pub const fn number(&self) -> Option<u64> {
        match self {
            Self::NumberedResource { number, .. }
            | Self::Issue { number, .. }
            | Self::IssueComment { number, .. }
            | Self::IssueEvent { number, .. }
            | Self::PullRequest { number, .. }
            | Self::PullRequestComment { number, .. }
            | Self::PullRequestReview { number, .. }
            | Self::PullRequestReviewComment { number, .. }
            | Self::PullRequestEvent { number, .. }
            | Self::Discussion { number, .. }
            | Self::DiscussionComment { number, .. } => Some(*number),
            _ => None,
        }
    }

    /// Returns the commit SHA of a commit, commit comment, or review comment
    /// linked from a commits page.
    #[must_use]
    pub fn sha(&self) -> Option<&str> {
        match self {
            Self::Commit { sha, .. }
            | Self::CommitComment { sha, .. }
            | Self::PullRequestReviewComment {
                location: ReviewCommentLocation::Commit { sha },
                ..
            } => Some(sha.as_str()),
            _ => None,
        }
    }

    /// Returns true for a review comment linked from `pull/{n}/commits/{sha}`.
    #[must_use]
    pub const fn is_commit_page(&self) -> bool {
        matches!(
            self,
            Self::PullRequestReviewComment {
                location: ReviewCommentLocation::Commit { .. },
                ..
            }
        )
    }

    /// Returns true for a review comment linked from `pull/{n}/files`.
    #[must_use]
    pub const fn is_files_page(&self) -> bool {
        matches!(
            self,
            Self::PullRequestReviewComment {
                location: ReviewCommentLocation::Files,
                ..
            }
        )
    }

    /// Renders the resource's canonical github.com address.
    ///
    /// Returns `None` for [`Resource::NumberedResource`], whose page depends
    /// on whether it is an issue, pull request or discussion.
    ///
    /// SHAs, tags and refs are percent-encoded, so text decoded from a URL
    /// path renders back into the same segments.
    ///
    /// # Examples
    ///
    /// ```
    /// use gh_locator::{Repo, Resource};
    ///
    /// let comment = Resource::IssueComment {
    ///     repo: Repo::new("octocat", "Hello-World").unwrap(),
    ///     number: 1,
    ///     comment_id: 99,
    /// };
    /// assert_eq!(
    ///     comment.html_url().as_deref(),
    ///     Some("https://github.com/octocat/Hello-World/issues/1#issuecomment-99")
    /// );
    /// ```
    #[must_use]
    pub fn html_url(&self) -> Option<String> {
        let url = match self {
            Self::User { login } => format!("{DEFAULT_BASE_URL}/{login}"),
            Self::Repo(repo) => repo.html_url(),
            Self::NumberedResource { .. } => return None,
            Self::Issue { repo, number } => format!("{}/issues/{number}", repo.html_url()),
            Self::IssueComment {
                repo,
                number,
                comment_id,
            } => format!(
                "{}/issues/{number}#{ISSUE_COMMENT_PREFIX}{comment_id}",
                repo.html_url()
            ),
            Self::IssueEvent {
                repo,
                number,
                event_id,
            } => format!("{}/issues/{number}#{EVENT_PREFIX}{event_id}", repo.html_url()),
            Self::PullRequest { repo, number } => format!("{}/pull/{number}", repo.html_url()),
            Self::PullRequestComment {
                repo,
                number,
                comment_id,
            } => format!(
                "{}/pull/{number}#{ISSUE_COMMENT_PREFIX}{comment_id}",
                repo.html_url()
            ),
            Self::PullRequestReview {
                repo,
                number,
                review_id,
            } => format!("{}/pull/{number}#{REVIEW_PREFIX}{review_id}", repo.html_url()),
            Self::PullRequestReviewComment {
                repo,
                number,
                comment_id,
                location,
            } => match location {
                ReviewCommentLocation::Conversation => format!(
                    "{}/pull/{number}#{REVIEW_COMMENT_PREFIX}{comment_id}",
                    repo.html_url()
                ),
                ReviewCommentLocation::Commit { sha } => format!(
                    "{}/pull/{number}/commits/{}#{DIFF_COMMENT_PREFIX}{comment_id}",
                    repo.html_url(),
                    segment(sha)
                ),
                ReviewCommentLocation::Files => format!(
                    "{}/pull/{number}/files#{DIFF_COMMENT_PREFIX}{comment_id}",
                    repo.html_url()
                ),
            },
            Self::PullRequestEvent {
                repo,
                number,
                event_id,
            } => format!("{}/pull/{number}#{EVENT_PREFIX}{event_id}", repo.html_url()),
            Self::Discussion { repo, number } => {
                format!("{}/discussions/{number}", repo.html_url())
            }
            Self::DiscussionComment {
                repo,
                number,
                comment_id,
            } => format!(
                "{}/discussions/{number}#{DISCUSSION_COMMENT_PREFIX}{comment_id}",
                repo.html_url()
            ),
            Self::Commit { repo, sha } => format!("{}/commit/{}", repo.html_url(), segment(sha)),
            Self::CommitComment {
                repo,
                sha,
                comment_id,
            } => format!(
                "{}/commit/{}#{COMMIT_COMMENT_PREFIX}{comment_id}",
                repo.html_url(),
                segment(sha)
            ),
            Self::ReleaseTag { repo, tag } => {
                format!("{}/releases/tag/{}", repo.html_url(), segment(tag))
            }
            Self::Ref { repo, reference } => format!(
                "{}/tree/{}",
                repo.html_url(),
                utf8_percent_encode(reference, REF_PATH)
            ),
        };
        Some(url)
    }
}

/// Rejects zero for issue numbers and comment, event and review IDs.
#[cfg(feature = "serde")]
fn positive<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::Deserialize;

    match u64::deserialize(deserializer)? {
        0 => Err(serde::de::Error::custom("expected a positive integer, found 0")),
        value => Ok(value),
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NumberedResource { repo, number } => write!(f, "{repo}#{number}"),
            Self::Ref { repo, reference } => write!(f, "{repo}@{reference}"),
            other => match other.html_url() {
                Some(url) => f.write_str(&url),
                None => Ok(()),
            },
        }
    }
}

impl From<Repo> for Resource {
    fn from(repo: Repo) -> Self {
        Self::Repo(repo)
    }
}
