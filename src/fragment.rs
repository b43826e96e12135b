//! Fragment vocabulary for GitHub anchors.

use std::fmt;
use std::str::FromStr;

use crate::constants::{
    COMMIT_COMMENT_PREFIX, DIFF_COMMENT_PREFIX, DISCUSSION_COMMENT_PREFIX,
    DISCUSSION_MARKER_PREFIX, EVENT_PREFIX, ISSUE_COMMENT_PREFIX, ISSUE_MARKER_PREFIX,
    REVIEW_COMMENT_PREFIX, REVIEW_PREFIX,
};
use crate::error::FragmentError;
use crate::validate::parse_id;

/// A classified URL fragment.
///
/// GitHub anchors timeline items with a fixed set of prefixes. The prefixes
/// are mutually exclusive, so a fragment maps to at most one variant.
///
/// # Examples
///
/// ```
/// use gh_locator::Fragment;
///
/// assert_eq!(Fragment::parse("issuecomment-42"), Ok(Fragment::IssueComment(42)));
/// assert_eq!(Fragment::parse("discussion_r7"), Ok(Fragment::ReviewComment(7)));
/// assert!(Fragment::parse("issuecomment-abc").is_err());
/// assert!(Fragment::parse("readme").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fragment {
    /// `#issuecomment-{id}`
    IssueComment(u64),
    /// `#event-{id}`
    Event(u64),
    /// `#pullrequestreview-{id}`
    Review(u64),
    /// `#discussion_r{id}`
    ReviewComment(u64),
    /// `#r{id}` on the commits and files pages
    DiffComment(u64),
    /// `#discussioncomment-{id}`
    DiscussionComment(u64),
    /// `#commitcomment-{id}`
    CommitComment(u64),
    /// `#issue-...`, the issue or pull request body
    IssueBody,
    /// `#discussion-...`, the discussion body
    DiscussionBody,
}

/// Prefixes followed by a numeric identifier.
const ID_PREFIXES: [(&str, fn(u64) -> Fragment); 7] = [
    (ISSUE_COMMENT_PREFIX, Fragment::IssueComment),
    (EVENT_PREFIX, Fragment::Event),
    (REVIEW_PREFIX, Fragment::Review),
    (REVIEW_COMMENT_PREFIX, Fragment::ReviewComment),
    (DISCUSSION_COMMENT_PREFIX, Fragment::DiscussionComment),
    (COMMIT_COMMENT_PREFIX, Fragment::CommitComment),
    (DIFF_COMMENT_PREFIX, Fragment::DiffComment),
];

impl Fragment {
    /// Classifies fragment text (without the leading `#`).
    ///
    /// # Errors
    ///
    /// Returns `FragmentError::Unrecognized` for an unknown prefix and
    /// `FragmentError::InvalidId` when the identifier after a known prefix is
    /// not a positive integer.
    pub fn parse(input: &str) -> Result<Self, FragmentError> {
        // Body markers carry no identifier worth checking.
        if input.starts_with(ISSUE_MARKER_PREFIX) {
            return Ok(Self::IssueBody);
        }
        if input.starts_with(DISCUSSION_MARKER_PREFIX) {
            return Ok(Self::DiscussionBody);
        }

        for (prefix, build) in ID_PREFIXES {
            if let Some(id) = input.strip_prefix(prefix) {
                return parse_id(id)
                    .map(build)
                    .map_err(|reason| FragmentError::InvalidId { prefix, reason });
            }
        }

        Err(FragmentError::Unrecognized {
            fragment: input.to_string(),
        })
    }

    /// Returns the identifier carried by the fragment, if any.
    #[must_use]
    pub const fn id(self) -> Option<u64> {
        match self {
            Self::IssueComment(id)
            | Self::Event(id)
            | Self::Review(id)
            | Self::ReviewComment(id)
            | Self::DiffComment(id)
            | Self::DiscussionComment(id)
            | Self::CommitComment(id) => Some(id),
            Self::IssueBody | Self::DiscussionBody => None,
        }
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IssueComment(id) => write!(f, "{ISSUE_COMMENT_PREFIX}{id}"),
            Self::Event(id) => write!(f, "{EVENT_PREFIX}{id}"),
            Self::Review(id) => write!(f, "{REVIEW_PREFIX}{id}"),
            Self::ReviewComment(id) => write!(f, "{REVIEW_COMMENT_PREFIX}{id}"),
            Self::DiffComment(id) => write!(f, "{DIFF_COMMENT_PREFIX}{id}"),
            Self::DiscussionComment(id) => write!(f, "{DISCUSSION_COMMENT_PREFIX}{id}"),
            Self::CommitComment(id) => write!(f, "{COMMIT_COMMENT_PREFIX}{id}"),
            Self::IssueBody => f.write_str(ISSUE_MARKER_PREFIX),
            Self::DiscussionBody => f.write_str(DISCUSSION_MARKER_PREFIX),
        }
    }
}

impl FromStr for Fragment {
    type Err = FragmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Fragment {
    type Error = FragmentError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
