// std imports
use std::fmt;
use std::str::FromStr;

// third-party imports
use serde::{Deserialize, Serialize};

// local imports
use crate::error::{Error, SyntaxErrorReason};

// ---

/// Wildcard characters recognized in a pattern.
///
/// Interpretation is purely positional: whichever of the two characters occupies a pattern
/// position is a wildcard there, never a literal. If both are the same character, it acts as
/// the single-character wildcard.
///
/// In configuration files a syntax is written either as a compact two-character string
/// (`"?*"`, single first) or as a table with optional `single` and `multi` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSyntax")]
pub struct Syntax {
    /// Matches exactly one character.
    pub single: char,
    /// Matches zero or more characters.
    pub multi: char,
}

impl Syntax {
    pub const DEFAULT_SINGLE: char = '?';
    pub const DEFAULT_MULTI: char = '*';

    pub const fn new(single: char, multi: char) -> Self {
        Self { single, multi }
    }

    pub const fn with_single(self, single: char) -> Self {
        Self { single, ..self }
    }

    pub const fn with_multi(self, multi: char) -> Self {
        Self { multi, ..self }
    }
}

impl Default for Syntax {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SINGLE, Self::DEFAULT_MULTI)
    }
}

impl fmt::Display for Syntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.single, self.multi)
    }
}

impl FromStr for Syntax {
    type Err = Error;

    /// Parses the compact form: the single-character wildcard followed by the
    /// multi-character wildcard.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| Error::InvalidSyntax {
            value: s.into(),
            reason,
        };

        let mut chars = s.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(single), Some(multi), None) => Ok(Self::new(single, multi)),
            (None, _, _) => Err(invalid(SyntaxErrorReason::Empty)),
            _ => Err(invalid(SyntaxErrorReason::WrongLength(s.chars().count()))),
        }
    }
}

impl TryFrom<RawSyntax> for Syntax {
    type Error = Error;

    fn try_from(raw: RawSyntax) -> Result<Self, Self::Error> {
        match raw {
            RawSyntax::Compact(s) => s.parse(),
            RawSyntax::Table(t) => Ok(Self::new(t.single, t.multi)),
        }
    }
}

// ---

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSyntax {
    Compact(String),
    Table(SyntaxTable),
}

#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct SyntaxTable {
    single: char,
    multi: char,
}

impl Default for SyntaxTable {
    fn default() -> Self {
        Self {
            single: Syntax::DEFAULT_SINGLE,
            multi: Syntax::DEFAULT_MULTI,
        }
    }
}
