// local imports
use crate::matcher::Matcher;

/// Matches a target against a [`Matcher`] from the target's side.
///
/// `target.matches_wildcard(&matcher)` always agrees with `matcher.matches(target)`.
///
/// # Examples
///
/// ```
/// use wildcard_match::{Matcher, MatchesWildcard};
///
/// let matcher = Matcher::new("Fred");
/// assert!("Fred".matches_wildcard(&matcher));
/// assert!(!String::from("Freddy").matches_wildcard(&matcher));
/// ```
pub trait MatchesWildcard {
    fn matches_wildcard(&self, matcher: &Matcher) -> bool;
}

impl MatchesWildcard for str {
    #[inline]
    fn matches_wildcard(&self, matcher: &Matcher) -> bool {
        matcher.matches(self)
    }
}

#[cfg(test)]
mod tests;
