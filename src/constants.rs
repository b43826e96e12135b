//! Constants for GitHub identifier validation and URL matching.

/// The host accepted by default.
pub const DEFAULT_DOMAIN: &str = "github.com";

/// Base address used when rendering canonical resource URLs.
pub const DEFAULT_BASE_URL: &str = "https://github.com";

/// Maximum username (login) length.
pub const MAX_USERNAME_LENGTH: usize = 39;

/// Maximum repository name length.
pub const MAX_REPO_NAME_LENGTH: usize = 100;

/// Fragment prefix of issue and pull request conversation comments.
pub const ISSUE_COMMENT_PREFIX: &str = "issuecomment-";

/// Fragment prefix of timeline events.
pub const EVENT_PREFIX: &str = "event-";

/// Fragment prefix of pull request reviews.
pub const REVIEW_PREFIX: &str = "pullrequestreview-";

/// Fragment prefix of review comments shown in the conversation tab.
pub const REVIEW_COMMENT_PREFIX: &str = "discussion_r";

/// Fragment prefix of review comments on the commits and files tabs.
pub const DIFF_COMMENT_PREFIX: &str = "r";

/// Fragment prefix of discussion comments.
pub const DISCUSSION_COMMENT_PREFIX: &str = "discussioncomment-";

/// Fragment prefix of commit comments.
pub const COMMIT_COMMENT_PREFIX: &str = "commitcomment-";

/// Fragment marker pointing at the issue body.
pub const ISSUE_MARKER_PREFIX: &str = "issue-";

/// Fragment marker pointing at the discussion body.
pub const DISCUSSION_MARKER_PREFIX: &str = "discussion-";
