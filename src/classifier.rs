//! URL classification.
//!
//! A URL is first reduced to its decoded path segments and fragment. The
//! first two segments name the owner and repository; the third, when present,
//! selects a rule family:
//!
//! - `issues`, `pull` and `discussions` go through the strict or loose table,
//!   depending on [`MatcherSettings::require_strict_type`].
//! - `commit` and `releases` have a single table shared by both modes.
//!
//! Every rule is guarded by its settings flag. Anything that does not match a
//! rule, including a malformed identifier or an unknown fragment, yields
//! `None`.

use tracing::{debug, trace};
use url::Url;

use crate::fragment::Fragment;
use crate::repo::Repo;
use crate::resource::{Resource, ReviewCommentLocation};
use crate::settings::{MatcherSettings, PathKeyword};
use crate::subject::Subject;
use crate::validate::{parse_id, validate_sha, validate_username};

/// Parses a GitHub URL into the resource it points at.
///
/// The input must be an absolute URL whose `host[:port]` is one of
/// `settings.domains`. Relative or malformed input yields `None`.
///
/// # Examples
///
/// ```
/// use gh_locator::{parse_url, MatcherSettings, Repo, Resource, ReviewCommentLocation};
///
/// let settings = MatcherSettings::default();
/// let resource = parse_url(
///     "https://github.com/owner/repo/pull/123/commits/deadbeef#r456",
///     &settings,
/// );
/// assert_eq!(
///     resource,
///     Some(Resource::PullRequestReviewComment {
///         repo: Repo::new("owner", "repo").unwrap(),
///         number: 123,
///         comment_id: 456,
///         location: ReviewCommentLocation::Commit { sha: "deadbeef".into() },
///     })
/// );
///
/// // Strict mode rejects fragments that disagree with the path.
/// assert_eq!(
///     parse_url("https://github.com/owner/repo/issues/1#discussioncomment-2", &settings),
///     None
/// );
/// ```
#[must_use]
pub fn parse_url(url: &str, settings: &MatcherSettings) -> Option<Resource> {
    match Url::parse(url) {
        Ok(parsed) => parse_url_with(&parsed, settings),
        Err(error) => {
            trace!(%error, "input is not an absolute URL");
            None
        }
    }
}

/// Classifies an already parsed URL. See [`parse_url`].
#[must_use]
pub fn parse_url_with(url: &Url, settings: &MatcherSettings) -> Option<Resource> {
    let subject = Subject::from_url(url, settings)?;

    let fragment = match subject.fragment.as_deref().map(Fragment::parse).transpose() {
        Ok(fragment) => fragment,
        Err(error) => {
            trace!(%error, "fragment rejected");
            return None;
        }
    };

    let segments: Vec<&str> = subject.segments.iter().map(String::as_str).collect();
    let resource = classify(&segments, fragment, settings)?;
    debug!(kind = %resource.kind(), url = %url, "matched GitHub resource");
    Some(resource)
}

fn classify(
    segments: &[&str],
    fragment: Option<Fragment>,
    settings: &MatcherSettings,
) -> Option<Resource> {
    match segments {
        [login] => {
            if fragment.is_some() {
                trace!("user pages carry no fragments");
                return None;
            }
            match validate_username(login) {
                Ok(()) => Some(Resource::User {
                    login: (*login).to_string(),
                }),
                Err(error) => {
                    trace!(%error, "invalid user login");
                    None
                }
            }
        }
        [owner, name] => {
            let repo = repo(owner, name)?;
            if fragment.is_some() {
                trace!("repository pages carry no fragments");
                return None;
            }
            Some(Resource::Repo(repo))
        }
        [owner, name, keyword, tail @ ..] => {
            let repo = repo(owner, name)?;
            let Some(keyword) = PathKeyword::from_segment(keyword) else {
                trace!(keyword, "unsupported path type");
                return None;
            };
            match keyword {
                PathKeyword::Commit => commit(repo, tail, fragment, settings),
                PathKeyword::Releases => release(repo, tail, fragment, settings),
                PathKeyword::Issues | PathKeyword::Pull | PathKeyword::Discussions => {
                    let [number, rest @ ..] = tail else {
                        trace!(%keyword, "missing resource number");
                        return None;
                    };
                    let number = match parse_id(number) {
                        Ok(number) => number,
                        Err(error) => {
                            trace!(%error, "invalid resource number");
                            return None;
                        }
                    };
                    let target = Numbered {
                        repo,
                        keyword,
                        number,
                    };
                    if settings.require_strict_type {
                        target.strict(rest, fragment, settings)
                    } else {
                        target.loose(rest, fragment, settings)
                    }
                }
            }
        }
        _ => None,
    }
}

pub(crate) fn repo(owner: &str, name: &str) -> Option<Repo> {
    match Repo::new(owner, name) {
        Ok(repo) => Some(repo),
        Err(error) => {
            trace!(%error, "invalid repository");
            None
        }
    }
}

/// Returns the built resource if `enabled`, otherwise `None`.
pub(crate) fn gated(
    enabled: bool,
    flag: &'static str,
    build: impl FnOnce() -> Resource,
) -> Option<Resource> {
    if enabled {
        Some(build())
    } else {
        trace!(flag, "matching rule disabled by settings");
        None
    }
}

/// An issue, pull request or discussion addressed by number.
struct Numbered {
    repo: Repo,
    keyword: PathKeyword,
    number: u64,
}

impl Numbered {
    /// The fragment must agree with the path keyword. Sub-page rules come
    /// before fragment-only rules.
    fn strict(
        self,
        rest: &[&str],
        fragment: Option<Fragment>,
        settings: &MatcherSettings,
    ) -> Option<Resource> {
        use PathKeyword::{Discussions, Issues, Pull};

        let Self {
            repo,
            keyword,
            number,
        } = self;

        match (keyword, rest, fragment) {
            (_, [], None)
            | (Issues | Pull, [], Some(Fragment::IssueBody))
            | (Discussions, [], Some(Fragment::DiscussionBody)) => {
                Self::page(repo, keyword, number, settings)
            }
            (Pull, ["commits", sha], Some(Fragment::DiffComment(comment_id))) => {
                review_comment_on_diff(repo, number, comment_id, Some(*sha), settings)
            }
            (Pull, ["files"], Some(Fragment::DiffComment(comment_id))) => {
                review_comment_on_diff(repo, number, comment_id, None, settings)
            }
            (Issues, [], Some(Fragment::IssueComment(comment_id))) => {
                gated(settings.issue_comments, "issue_comments", || {
                    Resource::IssueComment {
                        repo,
                        number,
                        comment_id,
                    }
                })
            }
            (Pull, [], Some(Fragment::IssueComment(comment_id))) => {
                gated(settings.pull_request_comments, "pull_request_comments", || {
                    Resource::PullRequestComment {
                        repo,
                        number,
                        comment_id,
                    }
                })
            }
            (Issues, [], Some(Fragment::Event(event_id))) => {
                gated(settings.issue_events, "issue_events", || Resource::IssueEvent {
                    repo,
                    number,
                    event_id,
                })
            }
            (Pull, [], Some(Fragment::Event(event_id))) => {
                gated(settings.pull_request_events, "pull_request_events", || {
                    Resource::PullRequestEvent {
                        repo,
                        number,
                        event_id,
                    }
                })
            }
            (Pull, [], Some(Fragment::Review(review_id))) => {
                gated(settings.pull_request_reviews, "pull_request_reviews", || {
                    Resource::PullRequestReview {
                        repo,
                        number,
                        review_id,
                    }
                })
            }
            (Pull, [], Some(Fragment::ReviewComment(comment_id))) => gated(
                settings.pull_request_review_comments,
                "pull_request_review_comments",
                || Resource::PullRequestReviewComment {
                    repo,
                    number,
                    comment_id,
                    location: ReviewCommentLocation::Conversation,
                },
            ),
            (Discussions, [], Some(Fragment::DiscussionComment(comment_id))) => {
                gated(settings.discussion_comments, "discussion_comments", || {
                    Resource::DiscussionComment {
                        repo,
                        number,
                        comment_id,
                    }
                })
            }
            _ => {
                trace!(%keyword, ?rest, ?fragment, "no strict rule matches");
                None
            }
        }
    }

    /// The path keyword is a hint; the fragment decides the resource kind.
    fn loose(
        self,
        rest: &[&str],
        fragment: Option<Fragment>,
        settings: &MatcherSettings,
    ) -> Option<Resource> {
        use PathKeyword::{Discussions, Issues, Pull};

        let Self {
            repo,
            keyword,
            number,
        } = self;

        match (rest, fragment) {
            ([], None) => Self::page(repo, keyword, number, settings),
            ([], Some(Fragment::IssueBody)) => {
                let keyword = if keyword == Pull { Pull } else { Issues };
                Self::page(repo, keyword, number, settings)
            }
            ([], Some(Fragment::DiscussionBody)) => {
                Self::page(repo, Discussions, number, settings)
            }
            ([], Some(Fragment::IssueComment(comment_id))) if keyword == Pull => {
                gated(settings.pull_request_comments, "pull_request_comments", || {
                    Resource::PullRequestComment {
                        repo,
                        number,
                        comment_id,
                    }
                })
            }
            ([], Some(Fragment::IssueComment(comment_id))) => {
                gated(settings.issue_comments, "issue_comments", || {
                    Resource::IssueComment {
                        repo,
                        number,
                        comment_id,
                    }
                })
            }
            ([], Some(Fragment::DiscussionComment(comment_id))) => {
                gated(settings.discussion_comments, "discussion_comments", || {
                    Resource::DiscussionComment {
                        repo,
                        number,
                        comment_id,
                    }
                })
            }
            ([], Some(Fragment::Review(review_id))) => {
                gated(settings.pull_request_reviews, "pull_request_reviews", || {
                    Resource::PullRequestReview {
                        repo,
                        number,
                        review_id,
                    }
                })
            }
            ([], Some(Fragment::ReviewComment(comment_id))) => gated(
                settings.pull_request_review_comments,
                "pull_request_review_comments",
                || Resource::PullRequestReviewComment {
                    repo,
                    number,
                    comment_id,
                    location: ReviewCommentLocation::Conversation,
                },
            ),
            ([], Some(Fragment::Event(event_id))) if keyword == Pull => {
                gated(settings.pull_request_events, "pull_request_events", || {
                    Resource::PullRequestEvent {
                        repo,
                        number,
                        event_id,
                    }
                })
            }
            ([], Some(Fragment::Event(event_id))) => {
                gated(settings.issue_events, "issue_events", || Resource::IssueEvent {
                    repo,
                    number,
                    event_id,
                })
            }
            (["commits", sha], Some(Fragment::DiffComment(comment_id)))
                if keyword != Discussions =>
            {
                review_comment_on_diff(repo, number, comment_id, Some(*sha), settings)
            }
            (["files"], Some(Fragment::DiffComment(comment_id))) if keyword != Discussions => {
                review_comment_on_diff(repo, number, comment_id, None, settings)
            }
            _ => {
                trace!(%keyword, ?rest, ?fragment, "no loose rule matches");
                None
            }
        }
    }

    /// The bare issue, pull request or discussion page.
    fn page(
        repo: Repo,
        keyword: PathKeyword,
        number: u64,
        settings: &MatcherSettings,
    ) -> Option<Resource> {
        if !settings.supports(keyword) {
            trace!(%keyword, "resource type disabled by settings");
            return None;
        }
        match keyword {
            PathKeyword::Issues => Some(Resource::Issue { repo, number }),
            PathKeyword::Pull => Some(Resource::PullRequest { repo, number }),
            PathKeyword::Discussions => Some(Resource::Discussion { repo, number }),
            // Handled by their own tables
            PathKeyword::Commit | PathKeyword::Releases => None,
        }
    }
}

/// A review comment linked from the commits page (`sha` given) or the files
/// page of a pull request.
fn review_comment_on_diff(
    repo: Repo,
    number: u64,
    comment_id: u64,
    sha: Option<&str>,
    settings: &MatcherSettings,
) -> Option<Resource> {
    if !settings.pull_request_review_comments {
        trace!(
            flag = "pull_request_review_comments",
            "matching rule disabled by settings"
        );
        return None;
    }

    let location = match sha {
        Some(sha) => {
            if let Err(error) = validate_sha(sha) {
                trace!(%error, "invalid commit SHA");
                return None;
            }
            ReviewCommentLocation::Commit {
                sha: sha.to_string(),
            }
        }
        None => ReviewCommentLocation::Files,
    };

    Some(Resource::PullRequestReviewComment {
        repo,
        number,
        comment_id,
        location,
    })
}

fn commit(
    repo: Repo,
    tail: &[&str],
    fragment: Option<Fragment>,
    settings: &MatcherSettings,
) -> Option<Resource> {
    match (tail, fragment) {
        ([sha], None) if !sha.is_empty() => gated(settings.commits, "commits", || {
            Resource::Commit {
                repo,
                sha: (*sha).to_string(),
            }
        }),
        ([sha], Some(Fragment::CommitComment(comment_id))) if !sha.is_empty() => {
            gated(settings.commit_comments, "commit_comments", || {
                Resource::CommitComment {
                    repo,
                    sha: (*sha).to_string(),
                    comment_id,
                }
            })
        }
        _ => {
            trace!(?tail, ?fragment, "no commit rule matches");
            None
        }
    }
}

fn release(
    repo: Repo,
    tail: &[&str],
    fragment: Option<Fragment>,
    settings: &MatcherSettings,
) -> Option<Resource> {
    match (tail, fragment) {
        (["tag", tag], None) if !tag.is_empty() => gated(settings.releases, "releases", || {
            Resource::ReleaseTag {
                repo,
                tag: (*tag).to_string(),
            }
        }),
        _ => {
            trace!(?tail, ?fragment, "no release rule matches");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strict() -> MatcherSettings {
        MatcherSettings::default()
    }

    fn loose() -> MatcherSettings {
        MatcherSettings::default().with_require_strict_type(false)
    }

    fn repo() -> Repo {
        Repo::new("owner", "repo").unwrap()
    }

    fn parse(path: &str, settings: &MatcherSettings) -> Option<Resource> {
        parse_url(&format!("https://github.com/{path}"), settings)
    }

    #[test]
    fn user_and_repo() {
        assert_eq!(
            parse("octocat", &strict()),
            Some(Resource::User {
                login: "octocat".to_string()
            })
        );
        assert_eq!(parse("owner/repo", &strict()), Some(Resource::Repo(repo())));
        assert_eq!(parse("", &strict()), None);
        assert_eq!(parse("-bad", &strict()), None);
        assert_eq!(parse("owner/bad%20name", &strict()), None);
    }

    #[test]
    fn user_and_repo_reject_fragments_and_trailing_slash() {
        assert_eq!(parse("octocat#readme", &strict()), None);
        assert_eq!(parse("owner/repo#readme", &strict()), None);
        assert_eq!(parse("owner/repo/", &strict()), None);
    }

    #[test]
    fn bare_pages() {
        assert_eq!(
            parse("owner/repo/issues/123", &strict()),
            Some(Resource::Issue {
                repo: repo(),
                number: 123
            })
        );
        assert_eq!(
            parse("owner/repo/pull/456", &strict()),
            Some(Resource::PullRequest {
                repo: repo(),
                number: 456
            })
        );
        assert_eq!(
            parse("owner/repo/discussions/789", &strict()),
            Some(Resource::Discussion {
                repo: repo(),
                number: 789
            })
        );
    }

    #[test]
    fn strict_body_markers() {
        assert_eq!(
            parse("owner/repo/issues/1#issue-1", &strict()),
            Some(Resource::Issue {
                repo: repo(),
                number: 1
            })
        );
        assert_eq!(
            parse("owner/repo/pull/1#issue-1", &strict()),
            Some(Resource::PullRequest {
                repo: repo(),
                number: 1
            })
        );
        assert_eq!(
            parse("owner/repo/discussions/1#discussion-1", &strict()),
            Some(Resource::Discussion {
                repo: repo(),
                number: 1
            })
        );
        assert_eq!(parse("owner/repo/issues/1#discussion-1", &strict()), None);
        assert_eq!(parse("owner/repo/discussions/1#issue-1", &strict()), None);
    }

    #[test]
    fn strict_fragments() {
        let s = strict();
        assert_eq!(
            parse("owner/repo/issues/1#issuecomment-2", &s),
            Some(Resource::IssueComment {
                repo: repo(),
                number: 1,
                comment_id: 2
            })
        );
        assert_eq!(
            parse("owner/repo/pull/1#issuecomment-2", &s),
            Some(Resource::PullRequestComment {
                repo: repo(),
                number: 1,
                comment_id: 2
            })
        );
        assert_eq!(
            parse("owner/repo/issues/1#event-3", &s),
            Some(Resource::IssueEvent {
                repo: repo(),
                number: 1,
                event_id: 3
            })
        );
        assert_eq!(
            parse("owner/repo/pull/1#event-3", &s),
            Some(Resource::PullRequestEvent {
                repo: repo(),
                number: 1,
                event_id: 3
            })
        );
        assert_eq!(
            parse("owner/repo/pull/1#pullrequestreview-4", &s),
            Some(Resource::PullRequestReview {
                repo: repo(),
                number: 1,
                review_id: 4
            })
        );
        assert_eq!(
            parse("owner/repo/pull/1#discussion_r5", &s),
            Some(Resource::PullRequestReviewComment {
                repo: repo(),
                number: 1,
                comment_id: 5,
                location: ReviewCommentLocation::Conversation,
            })
        );
        assert_eq!(
            parse("owner/repo/discussions/1#discussioncomment-6", &s),
            Some(Resource::DiscussionComment {
                repo: repo(),
                number: 1,
                comment_id: 6
            })
        );
    }

    #[test]
    fn strict_rejects_cross_kind_fragments() {
        let s = strict();
        for path in [
            "owner/repo/issues/123#discussioncomment-456",
            "owner/repo/issues/123#pullrequestreview-456",
            "owner/repo/issues/123#discussion_r456",
            "owner/repo/pull/123#discussioncomment-456",
            "owner/repo/discussions/123#issuecomment-456",
            "owner/repo/discussions/123#event-456",
            "owner/repo/issues/123#commitcomment-456",
        ] {
            assert_eq!(parse(path, &s), None, "{path}");
        }
    }

    #[test]
    fn diff_comment_pages() {
        for s in [strict(), loose()] {
            assert_eq!(
                parse("owner/repo/pull/123/commits/deadbeef#r456", &s),
                Some(Resource::PullRequestReviewComment {
                    repo: repo(),
                    number: 123,
                    comment_id: 456,
                    location: ReviewCommentLocation::Commit {
                        sha: "deadbeef".to_string()
                    },
                })
            );
            assert_eq!(
                parse("owner/repo/pull/123/files#r456", &s),
                Some(Resource::PullRequestReviewComment {
                    repo: repo(),
                    number: 123,
                    comment_id: 456,
                    location: ReviewCommentLocation::Files,
                })
            );
        }
    }

    #[test]
    fn diff_comment_pages_reject_malformed_input() {
        for s in [strict(), loose()] {
            for path in [
                "owner/repo/pull/123/commits/xyz123#r456",
                "owner/repo/pull/123/commits#r456",
                "owner/repo/pull/123/files/extra#r456",
                "owner/repo/pull/123/files#r",
                "owner/repo/pull/123/files#readme",
                "owner/repo/pull/123/files",
                "owner/repo/pull/123#r456",
                "owner/repo/discussions/123/files#r456",
            ] {
                assert_eq!(parse(path, &s), None, "{path}");
            }
        }
    }

    #[test]
    fn issue_sub_pages_only_in_loose_mode() {
        assert_eq!(parse("owner/repo/issues/123/files#r456", &strict()), None);
        assert_eq!(
            parse("owner/repo/issues/123/files#r456", &loose()),
            Some(Resource::PullRequestReviewComment {
                repo: repo(),
                number: 123,
                comment_id: 456,
                location: ReviewCommentLocation::Files,
            })
        );
        assert_eq!(parse("owner/repo/issues/123/commits/deadbeef#r456", &strict()), None);
        assert_eq!(
            parse("owner/repo/issues/123/commits/deadbeef#r456", &loose()),
            Some(Resource::PullRequestReviewComment {
                repo: repo(),
                number: 123,
                comment_id: 456,
                location: ReviewCommentLocation::Commit {
                    sha: "deadbeef".to_string()
                },
            })
        );
        assert_eq!(
            parse("owner/repo/issues/123/commits/xyz#r456", &loose()),
            None
        );
    }

    #[test]
    fn html_url_reencodes_decoded_segments() {
        for path in [
            "owner/repo/commit/a%3Fb",
            "owner/repo/commit/a%23b#commitcomment-7",
            "owner/repo/commit/a%25b",
            "owner/repo/releases/tag/v1%23x",
            "owner/repo/releases/tag/feat%2Fx",
            "owner/repo/releases/tag/a%5Cb",
            "owner/repo/releases/tag/v1%20beta",
            "owner/repo/releases/tag/caf%C3%A9",
        ] {
            for s in [strict(), loose()] {
                let resource = parse(path, &s).unwrap();
                let rendered = resource.html_url().unwrap();
                assert_eq!(parse_url(&rendered, &s), Some(resource), "{path} -> {rendered}");
            }
        }

        assert_eq!(
            parse("owner/repo/commit/a%3Fb", &strict()).and_then(|r| r.html_url()),
            Some("https://github.com/owner/repo/commit/a%3Fb".to_string())
        );
    }

    #[test]
    fn loose_fragment_priority() {
        use crate::resource::ResourceKind as K;

        let s = loose();
        let kinds = |path: &str| parse(path, &s).map(|r| r.kind());

        for kw in ["issues", "pull", "discussions"] {
            let is_pull = kw == "pull";
            assert_eq!(
                kinds(&format!("owner/repo/{kw}/1#issue-1")),
                Some(if is_pull { K::PullRequest } else { K::Issue })
            );
            assert_eq!(
                kinds(&format!("owner/repo/{kw}/1#discussion-1")),
                Some(K::Discussion)
            );
            assert_eq!(
                kinds(&format!("owner/repo/{kw}/1#pullrequestreview-2")),
                Some(K::PullRequestReview)
            );
            assert_eq!(
                kinds(&format!("owner/repo/{kw}/1#discussion_r2")),
                Some(K::PullRequestReviewComment)
            );
            assert_eq!(
                kinds(&format!("owner/repo/{kw}/1#issuecomment-2")),
                Some(if is_pull {
                    K::PullRequestComment
                } else {
                    K::IssueComment
                })
            );
            assert_eq!(
                kinds(&format!("owner/repo/{kw}/1#discussioncomment-2")),
                Some(K::DiscussionComment)
            );
            assert_eq!(
                kinds(&format!("owner/repo/{kw}/1#event-2")),
                Some(if is_pull {
                    K::PullRequestEvent
                } else {
                    K::IssueEvent
                })
            );
            assert_eq!(kinds(&format!("owner/repo/{kw}/1#unfetteredcomment-2")), None);
        }
    }

    #[test]
    fn loose_comment_values() {
        assert_eq!(
            parse("owner/repo/discussions/123#issuecomment-555", &loose()),
            Some(Resource::IssueComment {
                repo: repo(),
                number: 123,
                comment_id: 555
            })
        );
        assert_eq!(
            parse("owner/repo/pull/123#discussioncomment-789", &loose()),
            Some(Resource::DiscussionComment {
                repo: repo(),
                number: 123,
                comment_id: 789
            })
        );
    }

    #[test]
    fn invalid_numbers_and_ids() {
        for s in [strict(), loose()] {
            for path in [
                "owner/repo/issues/abc",
                "owner/repo/issues/0",
                "owner/repo/issues/-1",
                "owner/repo/issues/99999999999999999999999",
                "owner/repo/issues/123#issuecomment-abc",
                "owner/repo/issues/123#issuecomment-",
                "owner/repo/pull/123#pullrequestreview-0",
                "owner/repo/issues",
                "owner/repo/issues/",
                "owner/repo/issues/123/",
            ] {
                assert_eq!(parse(path, &s), None, "{path}");
            }
        }
    }

    #[test]
    fn unsupported_paths() {
        for s in [strict(), loose()] {
            for path in [
                "owner/repo/tree/main",
                "owner/repo/blob/main/file.py",
                "owner/repo/wiki",
                "owner/repo/issues/123/invalid",
                "owner/repo/issues/123/something/invalid",
                "owner/repo/Issues/123",
            ] {
                assert_eq!(parse(path, &s), None, "{path}");
            }
        }
    }

    #[test]
    fn commits_and_comments() {
        assert_eq!(
            parse("owner/repo/commit/abc123", &strict()),
            Some(Resource::Commit {
                repo: repo(),
                sha: "abc123".to_string()
            })
        );
        assert_eq!(
            parse("owner/repo/commit/abc123#commitcomment-9", &loose()),
            Some(Resource::CommitComment {
                repo: repo(),
                sha: "abc123".to_string(),
                comment_id: 9
            })
        );
        assert_eq!(parse("owner/repo/commit", &strict()), None);
        assert_eq!(parse("owner/repo/commit/", &strict()), None);
        assert_eq!(parse("owner/repo/commit/abc#issuecomment-1", &strict()), None);
        assert_eq!(parse("owner/repo/commit/abc#commitcomment-x", &strict()), None);
        assert_eq!(parse("owner/repo/commit/abc/extra", &strict()), None);
    }

    #[test]
    fn release_tags() {
        assert_eq!(
            parse("owner/repo/releases/tag/v1.2.3", &strict()),
            Some(Resource::ReleaseTag {
                repo: repo(),
                tag: "v1.2.3".to_string()
            })
        );
        assert_eq!(parse("owner/repo/releases", &strict()), None);
        assert_eq!(parse("owner/repo/releases/tag", &strict()), None);
        assert_eq!(parse("owner/repo/releases/tag/", &strict()), None);
        assert_eq!(parse("owner/repo/releases/latest", &strict()), None);
        assert_eq!(parse("owner/repo/releases/tag/v1#readme", &strict()), None);
    }

    #[test]
    fn disabling_a_base_flag_keeps_its_comments() {
        let s = strict().with_issues(false);
        assert_eq!(parse("owner/repo/issues/1", &s), None);
        assert_eq!(parse("owner/repo/issues/1#issue-1", &s), None);
        assert!(parse("owner/repo/issues/1#issuecomment-2", &s).is_some());
        assert!(parse("owner/repo/pull/1", &s).is_some());
    }

    #[test]
    fn each_flag_gates_its_rule() {
        type Toggle = fn(MatcherSettings, bool) -> MatcherSettings;
        let cases: [(Toggle, &str); 13] = [
            (MatcherSettings::with_issues, "owner/repo/issues/1"),
            (MatcherSettings::with_issue_comments, "owner/repo/issues/1#issuecomment-2"),
            (MatcherSettings::with_issue_events, "owner/repo/issues/1#event-2"),
            (MatcherSettings::with_pull_requests, "owner/repo/pull/1"),
            (MatcherSettings::with_pull_request_comments, "owner/repo/pull/1#issuecomment-2"),
            (MatcherSettings::with_pull_request_reviews, "owner/repo/pull/1#pullrequestreview-2"),
            (MatcherSettings::with_pull_request_review_comments, "owner/repo/pull/1#discussion_r2"),
            (MatcherSettings::with_pull_request_events, "owner/repo/pull/1#event-2"),
            (MatcherSettings::with_discussions, "owner/repo/discussions/1"),
            (
                MatcherSettings::with_discussion_comments,
                "owner/repo/discussions/1#discussioncomment-2",
            ),
            (MatcherSettings::with_commits, "owner/repo/commit/abc"),
            (MatcherSettings::with_commit_comments, "owner/repo/commit/abc#commitcomment-2"),
            (MatcherSettings::with_releases, "owner/repo/releases/tag/v1"),
        ];

        for strict_mode in [true, false] {
            let base = MatcherSettings::default().with_require_strict_type(strict_mode);
            for (toggle, path) in cases {
                assert!(parse(path, &base).is_some(), "{path} should match");
                let disabled = toggle(base.clone(), false);
                assert_eq!(parse(path, &disabled), None, "{path} should be disabled");
                for (_, sibling) in cases.iter().filter(|(_, p)| *p != path) {
                    assert!(
                        parse(sibling, &disabled).is_some(),
                        "{sibling} after disabling for {path}"
                    );
                }
            }
        }
    }

    #[test]
    fn loose_review_flags_are_independent() {
        let s = loose().with_pull_request_review_comments(false);
        assert!(parse("owner/repo/issues/1#pullrequestreview-2", &s).is_some());
        assert_eq!(parse("owner/repo/issues/1#discussion_r2", &s), None);
        assert_eq!(parse("owner/repo/issues/123/files#r456", &s), None);
    }

    #[test]
    fn domains() {
        let url = "https://gitlab.com/owner/repo/issues/1";
        assert_eq!(parse_url(url, &strict()), None);
        assert_eq!(parse_url("https://api.github.com/owner/repo", &strict()), None);
        assert_eq!(parse_url("https://notgithub.com/owner/repo/issues/1", &strict()), None);

        let s = strict().with_domains(["gitlab.com"]);
        assert!(parse_url(url, &s).is_some());
        assert_eq!(parse_url("https://github.com/owner/repo/issues/1", &s), None);
    }

    #[test]
    fn relative_and_malformed_input() {
        for input in [
            "",
            "owner/repo",
            "/owner/repo/issues/1",
            "github.com/owner/repo",
            "http://",
            "not a url",
        ] {
            assert_eq!(parse_url(input, &strict()), None, "{input}");
        }
    }

    #[test]
    fn encoded_hash_in_path_is_not_a_fragment() {
        assert_eq!(parse("owner/repo/issues/1%23issuecomment-2", &strict()), None);
    }

    #[test]
    fn query_is_ignored() {
        assert_eq!(
            parse("owner/repo/pull/7?w=1", &strict()),
            Some(Resource::PullRequest {
                repo: repo(),
                number: 7
            })
        );
    }

    #[test]
    fn parse_url_with_matches_parse_url() {
        let raw = "https://github.com/owner/repo/pull/1#discussion_r2";
        let parsed = Url::parse(raw).unwrap();
        assert_eq!(parse_url_with(&parsed, &strict()), parse_url(raw, &strict()));
    }

    #[test]
    fn parsing_does_not_mutate_settings() {
        let s = loose();
        let before = s.clone();
        let first = parse("owner/repo/issues/1#event-2", &s);
        let second = parse("owner/repo/issues/1#event-2", &s);
        assert_eq!(first, second);
        assert_eq!(s, before);
    }
}
