use rstest::rstest;

use super::*;
use crate::syntax::Syntax;

#[rstest]
#[case("Fred", "Fred")]
#[case("Fred", "Free")]
#[case("Fred", "Freddy")]
#[case("Fre*'s dog", "Freddy's cat and Joe's dog")]
#[case("Fre*'s dog", "Freddy's cat")]
#[case("File?*.txt", "File.txt")]
#[case("File?*.txt", "File1.txt")]
#[case("**", "")]
#[case("", "")]
#[case("", "x")]
fn test_both_directions_agree(#[case] pattern: &str, #[case] target: &str) {
    let matcher = Matcher::new(pattern);
    assert_eq!(target.matches_wildcard(&matcher), matcher.matches(target));
}

#[test]
fn test_simple_text() {
    let matcher = Matcher::new("Fred");
    assert!("Fred".matches_wildcard(&matcher));
    assert!(!"Free".matches_wildcard(&matcher));
    assert!(!"Freddy".matches_wildcard(&matcher));
}

#[test]
fn test_owned_target() {
    let matcher = Matcher::with_syntax("Fre%", Syntax::default().with_multi('%'));
    let target = String::from("Freddy");
    assert!(target.matches_wildcard(&matcher));
    assert!(!String::from("Friend").matches_wildcard(&matcher));
}
