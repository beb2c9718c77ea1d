//! Wildcard pattern matching with configurable wildcard characters.
//!
//! A [`Matcher`] holds a pattern and a [`Syntax`], which names the two characters
//! that act as wildcards:
//!
//! - `single` (`?` by default) matches exactly one character
//! - `multi` (`*` by default) matches zero or more characters
//!
//! Every other character matches itself, case-sensitively. There is no escaping:
//! a wildcard character is always a wildcard wherever it appears in the pattern.
//! The whole target must be consumed for a match to succeed.
//!
//! # Examples
//!
//! ```
//! use wildcard_match::{Matcher, MatchesWildcard, Syntax};
//!
//! let matcher = Matcher::new("Fre*'s dog");
//! assert!(matcher.matches("Freddy's dog"));
//! assert!(matcher.matches("Freddy's cat and Joe's dog"));
//! assert!(!matcher.matches("Freddy's cat"));
//!
//! // The same decision from the target's side
//! assert!("Fred's dog".matches_wildcard(&matcher));
//!
//! // Custom wildcard characters turn the defaults into ordinary literals
//! let matcher = Matcher::with_syntax("Fre%", Syntax::default().with_single('%'));
//! assert!(matcher.matches("Fred"));
//! assert!(!matcher.matches("Freddy"));
//! assert!(Matcher::with_syntax("What?", Syntax::new('_', '%')).matches("What?"));
//! ```
//!
//! # Characters
//!
//! Targets and patterns are UTF-8 strings and the `single` wildcard matches one
//! Unicode scalar value, not one byte:
//!
//! ```
//! use wildcard_match::Matcher;
//!
//! assert!(Matcher::new("??").matches("🦀🎉"));
//! assert!(!Matcher::new("??").matches("🦀"));
//! ```

// public modules
pub mod error;

// private modules
mod ext;
mod matcher;
mod syntax;

// public uses
pub use error::{Error, Result};
pub use ext::MatchesWildcard;
pub use matcher::Matcher;
pub use syntax::Syntax;
