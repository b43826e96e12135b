//! Shorthand references: `[owner/]repo[#number|@ref]`.

use tracing::{debug, trace};

use crate::classifier::{gated, repo};
use crate::resource::Resource;
use crate::settings::MatcherSettings;
use crate::validate::{parse_id, validate_ref};

/// Parses a compact shorthand reference.
///
/// Accepted forms:
///
/// | Input | Result |
/// |-------|--------|
/// | `owner/repo` | [`Resource::Repo`] |
/// | `owner/repo#42` | [`Resource::NumberedResource`] |
/// | `owner/repo@v1.0` | [`Resource::Ref`] |
///
/// When the input has no `/`, `default_user` supplies the owner. The owner is
/// validated as a username either way. The repository name runs up to the
/// first `#` or `@`.
///
/// # Examples
///
/// ```
/// use gh_locator::{parse_shorthand, MatcherSettings, Repo, Resource};
///
/// let settings = MatcherSettings::default();
/// let expected = Resource::NumberedResource {
///     repo: Repo::new("octocat", "Hello-World").unwrap(),
///     number: 42,
/// };
/// assert_eq!(
///     parse_shorthand("octocat/Hello-World#42", None, &settings),
///     Some(expected.clone())
/// );
/// assert_eq!(
///     parse_shorthand("Hello-World#42", Some("octocat"), &settings),
///     Some(expected)
/// );
/// assert_eq!(parse_shorthand("justastring", None, &settings), None);
/// ```
#[must_use]
pub fn parse_shorthand(
    input: &str,
    default_user: Option<&str>,
    settings: &MatcherSettings,
) -> Option<Resource> {
    if !settings.shorthand {
        trace!(flag = "shorthand", "matching rule disabled by settings");
        return None;
    }

    let (owner, rest) = match (input.split_once('/'), default_user) {
        (Some(parts), _) => parts,
        (None, Some(user)) => (user, input),
        (None, None) => {
            trace!(input, "shorthand has no owner and no default user");
            return None;
        }
    };

    let (name, suffix) = match rest.find(['#', '@']) {
        Some(at) => (&rest[..at], Some(rest[at..].split_at(1))),
        None => (rest, None),
    };
    let repo = repo(owner, name)?;

    let resource = match suffix {
        None => gated(settings.short_repo, "short_repo", || Resource::Repo(repo)),
        Some(("#", number)) => {
            let number = match parse_id(number) {
                Ok(number) => number,
                Err(error) => {
                    trace!(%error, "invalid shorthand number");
                    return None;
                }
            };
            gated(settings.short_numberables, "short_numberables", || {
                Resource::NumberedResource { repo, number }
            })
        }
        Some((_, reference)) => {
            if let Err(error) = validate_ref(reference) {
                trace!(%error, "invalid shorthand ref");
                return None;
            }
            gated(settings.short_refs, "short_refs", || Resource::Ref {
                repo,
                reference: reference.to_string(),
            })
        }
    }?;

    debug!(kind = %resource.kind(), input, "matched shorthand");
    Some(resource)
}
