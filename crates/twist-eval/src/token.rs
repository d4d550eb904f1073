//! Token sets and where they come from.

use crate::{EvalError, parse_number};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// The classic rules: 3 → "Fizz", 5 → "Buzz".
static DEFAULT_TOKENS: LazyLock<TokenSet> = LazyLock::new(|| TokenSet {
    tokens: vec![Token::new(3, "Fizz"), Token::new(5, "Buzz")],
});

/// A single divisor/word rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub divisor: i64,
    pub word: String,
}

impl Token {
    fn new(divisor: i64, word: impl Into<String>) -> Self {
        Self {
            divisor,
            word: word.into(),
        }
    }

    /// Whether `number` is a multiple of this token's divisor.
    pub fn matches(&self, number: i64) -> bool {
        // wrapping_rem keeps i64::MIN % -1 from panicking; the remainder is 0 there.
        number.wrapping_rem(self.divisor) == 0
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.divisor, self.word)
    }
}

/// An ordered collection of tokens.
///
/// Order is the order the caller supplied and decides how words are
/// concatenated when several divisors match. Divisors are unique and never
/// zero.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenSet {
    tokens: Vec<Token>,
}

impl TokenSet {
    /// Build a token set, keeping the given order.
    pub fn new<I, W>(entries: I) -> Result<Self, EvalError>
    where
        I: IntoIterator<Item = (i64, W)>,
        W: Into<String>,
    {
        let mut tokens: Vec<Token> = Vec::new();
        for (divisor, word) in entries {
            if divisor == 0 {
                return Err(EvalError::InvalidTokenSet(
                    "divisor 0 cannot divide any number".to_string(),
                ));
            }
            if tokens.iter().any(|t| t.divisor == divisor) {
                return Err(EvalError::InvalidTokenSet(format!(
                    "divisor {divisor} is defined more than once"
                )));
            }
            tokens.push(Token::new(divisor, word));
        }

        tracing::debug!(count = tokens.len(), "built token set");
        Ok(Self { tokens })
    }

    /// The shared default set, {3 → "Fizz", 5 → "Buzz"}.
    pub fn default_set() -> &'static TokenSet {
        &DEFAULT_TOKENS
    }

    /// Parse a `DIVISOR=WORD` entry, e.g. `7=Foo`.
    pub fn parse_entry(text: &str) -> Result<(i64, String), EvalError> {
        let (divisor, word) = text.split_once('=').ok_or_else(|| {
            EvalError::InvalidTokenSet(format!("expected DIVISOR=WORD, got {text:?}"))
        })?;
        Ok((parse_number(divisor)?, word.to_string()))
    }

    /// Build a token set from `DIVISOR=WORD` entries.
    pub fn parse_entries<S: AsRef<str>>(entries: &[S]) -> Result<Self, EvalError> {
        let parsed = entries
            .iter()
            .map(|e| Self::parse_entry(e.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for &'a TokenSet {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// A token received from an outside service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalToken {
    #[serde(alias = "Number")]
    pub number: i64,
    #[serde(alias = "Word")]
    pub word: String,
}

impl ExternalToken {
    pub fn new(number: i64, word: impl Into<String>) -> Self {
        Self {
            number,
            word: word.into(),
        }
    }

    /// The one-entry token set this token stands for.
    pub fn tokens(&self) -> Result<TokenSet, EvalError> {
        TokenSet::new([(self.number, self.word.clone())])
    }
}

/// Which token set an evaluation uses.
///
/// A supplied set always replaces the defaults; the two are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TokenSource {
    /// The built-in {3 → "Fizz", 5 → "Buzz"} rules.
    #[default]
    Default,
    /// A caller-supplied set, including one built from an external token.
    Custom(TokenSet),
}

impl TokenSource {
    pub fn tokens(&self) -> &TokenSet {
        match self {
            TokenSource::Default => TokenSet::default_set(),
            TokenSource::Custom(set) => set,
        }
    }
}

impl From<TokenSet> for TokenSource {
    fn from(set: TokenSet) -> Self {
        TokenSource::Custom(set)
    }
}

impl TryFrom<ExternalToken> for TokenSource {
    type Error = EvalError;

    fn try_from(token: ExternalToken) -> Result<Self, Self::Error> {
        token.tokens().map(TokenSource::Custom)
    }
}
