// std imports
use std::convert::Infallible;
use std::fmt;
use std::mem::take;
use std::str::FromStr;

// third-party imports
use memchr::memmem;
use serde::{Deserialize, Serialize};

// local imports
use crate::syntax::Syntax;

// ---

/// A wildcard pattern together with the characters that act as wildcards in it.
///
/// The pattern is compiled once on construction and can then be matched against any
/// number of targets. Matching is a pure function of the pattern, the syntax and the
/// target, so a single `Matcher` can be shared between threads freely.
///
/// # Examples
///
/// ```
/// use wildcard_match::Matcher;
///
/// let matcher = Matcher::new("abc*ghi*mno*xyz");
/// assert!(matcher.matches("abcdefghijklmnopqrstuvwxyz"));
/// assert!(matcher.matches("abcmnoghixyzmnoxyz"));
/// assert!(!matcher.matches("abcdefghijkqqqxyz"));
///
/// let matcher = Matcher::new("File?*.txt");
/// assert!(matcher.matches("File1.txt"));
/// assert!(!matcher.matches("File.txt"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMatcher")]
pub struct Matcher {
    pattern: String,
    syntax: Syntax,
    tokens: Vec<Token>,
}

impl Matcher {
    /// Creates a matcher using the default wildcard characters, `?` and `*`.
    ///
    /// This function is infallible; any string, including an empty one, is a valid pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self::with_syntax(pattern, Syntax::default())
    }

    /// Creates a matcher using custom wildcard characters.
    ///
    /// Characters that are wildcards in the default syntax but not in `syntax` are
    /// ordinary literals.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard_match::{Matcher, Syntax};
    ///
    /// let matcher = Matcher::with_syntax("Fre%", Syntax::default().with_multi('%'));
    /// assert!(matcher.matches("Freddy"));
    /// assert!(!matcher.matches("Friend"));
    ///
    /// let matcher = Matcher::with_syntax("Fre%", Syntax::default().with_single('%'));
    /// assert!(matcher.matches("Free"));
    /// assert!(!matcher.matches("Freddy"));
    /// ```
    pub fn with_syntax(pattern: impl Into<String>, syntax: Syntax) -> Self {
        let pattern = pattern.into();
        let tokens = Compiler::new(syntax).compile(&pattern);
        log::trace!(
            "compiled wildcard pattern {:?} with syntax {:?} into {} tokens",
            pattern,
            syntax.to_string(),
            tokens.len()
        );

        Self {
            pattern,
            syntax,
            tokens,
        }
    }

    /// Returns the pattern this matcher was created from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns the wildcard characters used by this matcher.
    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    #[inline]
    /// Tests whether the whole `target` matches the pattern.
    ///
    /// # Examples
    ///
    /// ```
    /// use wildcard_match::Matcher;
    ///
    /// let matcher = Matcher::new("*'s dog");
    /// assert!(matcher.matches("Fred's dog"));
    /// assert!(matcher.matches("'s dog"));
    /// assert!(!matcher.matches("Fred's dog!"));
    /// ```
    pub fn matches(&self, target: &str) -> bool {
        Self::match_from(&self.tokens, target) == Outcome::Matched
    }

    fn match_from(mut tokens: &[Token], mut text: &str) -> Outcome {
        while let Some((token, rest)) = tokens.split_first() {
            match token {
                Token::Single => {
                    let Some(ch) = text.chars().next() else {
                        return Outcome::Exhausted;
                    };
                    text = &text[ch.len_utf8()..];
                }
                Token::Multi => {
                    if rest.is_empty() {
                        return Outcome::Matched;
                    }
                    return Self::scan(rest, text);
                }
                Token::Literal(literal) => match text.strip_prefix(literal.as_str()) {
                    Some(tail) => text = tail,
                    None if literal.starts_with(text) => return Outcome::Exhausted,
                    None => return Outcome::Mismatch,
                },
            }
            tokens = rest;
        }

        if text.is_empty() {
            Outcome::Matched
        } else {
            Outcome::Mismatch
        }
    }

    // Tries `tokens` at every position of `text` a preceding multi-character
    // wildcard could stop at, shortest consumption first.
    fn scan(tokens: &[Token], mut text: &str) -> Outcome {
        if let Some(Token::Literal(literal)) = tokens.first() {
            let needle = literal.as_bytes();
            let mut start = 0;
            while let Some(i) = memmem::find(&text.as_bytes()[start..], needle) {
                let at = start + i;
                match Self::match_from(tokens, &text[at..]) {
                    Outcome::Mismatch => {}
                    outcome => return outcome,
                }
                start = at + 1;
            }
            return Outcome::Exhausted;
        }

        loop {
            match Self::match_from(tokens, text) {
                Outcome::Mismatch => {}
                outcome => return outcome,
            }
            let Some(ch) = text.chars().next() else {
                return Outcome::Exhausted;
            };
            text = &text[ch.len_utf8()..];
        }
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl FromStr for Matcher {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Matcher {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for Matcher {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

impl Serialize for Matcher {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        MatcherTable {
            pattern: &self.pattern,
            single: self.syntax.single,
            multi: self.syntax.multi,
        }
        .serialize(serializer)
    }
}

// ---

/// Result of matching a tail of the pattern against a tail of the target.
///
/// `Exhausted` means the target ran out, or a multi-character wildcard already tried
/// every remaining position. In both cases a preceding multi-character wildcard
/// consuming more characters leaves even less to match, so its scan can stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Matched,
    Mismatch,
    Exhausted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Single,
    Multi,
    Literal(String),
}

struct Compiler {
    syntax: Syntax,
    tokens: Vec<Token>,
    text: String,
}

impl Compiler {
    fn new(syntax: Syntax) -> Self {
        Self {
            syntax,
            tokens: Vec::new(),
            text: String::new(),
        }
    }

    fn flush(&mut self) {
        if !self.text.is_empty() {
            self.tokens.push(Token::Literal(take(&mut self.text)));
        }
    }

    fn compile(mut self, pattern: &str) -> Vec<Token> {
        for ch in pattern.chars() {
            match ch {
                ch if ch == self.syntax.single => {
                    self.flush();
                    self.tokens.push(Token::Single);
                }
                ch if ch == self.syntax.multi => {
                    self.flush();
                    // adjacent multi-character wildcards act as one
                    if self.tokens.last() != Some(&Token::Multi) {
                        self.tokens.push(Token::Multi);
                    }
                }
                _ => self.text.push(ch),
            }
        }

        self.flush();
        self.tokens
    }
}

// ---

#[derive(Deserialize)]
#[serde(untagged)]
enum RawMatcher {
    Pattern(String),
    Table(RawMatcherTable),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMatcherTable {
    pattern: String,
    #[serde(default = "default_single")]
    single: char,
    #[serde(default = "default_multi")]
    multi: char,
}

impl From<RawMatcher> for Matcher {
    fn from(raw: RawMatcher) -> Self {
        match raw {
            RawMatcher::Pattern(pattern) => Self::new(pattern),
            RawMatcher::Table(t) => Self::with_syntax(t.pattern, Syntax::new(t.single, t.multi)),
        }
    }
}

#[derive(Serialize)]
struct MatcherTable<'a> {
    pattern: &'a str,
    single: char,
    multi: char,
}

fn default_single() -> char {
    Syntax::DEFAULT_SINGLE
}

fn default_multi() -> char {
    Syntax::DEFAULT_MULTI
}
