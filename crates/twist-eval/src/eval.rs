//! Number evaluation.

use crate::iter::{RangeEval, Sequence};
use crate::{EvalError, ExternalToken, TokenSet, TokenSource};

/// Evaluate one number against a token set.
pub(crate) fn evaluate(tokens: &TokenSet, number: i64) -> String {
    let mut result = String::new();
    let mut matched = false;

    for token in tokens {
        if token.matches(number) {
            result.push_str(&token.word);
            matched = true;
        }
    }

    if matched { result } else { number.to_string() }
}

/// Evaluates numbers, sequences and ranges against one token source.
///
/// The evaluator holds no mutable state; every call is independent and
/// sequence/range results are produced lazily.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    source: TokenSource,
}

impl Evaluator {
    /// Create an evaluator for the given token source.
    pub fn new(source: impl Into<TokenSource>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Create an evaluator that uses a single external token.
    pub fn from_external(token: ExternalToken) -> Result<Self, EvalError> {
        Ok(Self::new(TokenSource::try_from(token)?))
    }

    pub fn tokens(&self) -> &TokenSet {
        self.source.tokens()
    }

    /// Evaluate a single number.
    ///
    /// Returns the words of every matching divisor in token-set order, or
    /// the decimal form of `number` when none match.
    pub fn evaluate_number(&self, number: i64) -> String {
        evaluate(self.tokens(), number)
    }

    /// Evaluate each number of `numbers`, in order.
    pub fn evaluate_sequence<I>(&self, numbers: I) -> Sequence<'_, I::IntoIter>
    where
        I: IntoIterator<Item = i64>,
    {
        Sequence::new(self.tokens(), numbers.into_iter())
    }

    /// Evaluate every number from `start` to `end` inclusive.
    ///
    /// Counts down when `start > end`.
    pub fn evaluate_range(&self, start: i64, end: i64) -> RangeEval<'_> {
        RangeEval::new(self.tokens(), start, end)
    }

    /// The classic problem: every number from 1 to `number` inclusive.
    ///
    /// A non-positive `number` counts down through zero.
    pub fn evaluate_standard(&self, number: i64) -> RangeEval<'_> {
        self.evaluate_range(1, number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(entries: &[(i64, &str)]) -> Evaluator {
        Evaluator::new(TokenSet::new(entries.iter().copied()).unwrap())
    }

    #[test]
    fn test_default_tokens() {
        let eval = Evaluator::default();
        assert_eq!(eval.evaluate_number(15), "FizzBuzz");
        assert_eq!(eval.evaluate_number(9), "Fizz");
        assert_eq!(eval.evaluate_number(10), "Buzz");
        assert_eq!(eval.evaluate_number(7), "7");
        assert_eq!(eval.evaluate_number(0), "FizzBuzz");
    }

    #[test]
    fn test_large_numbers() {
        let eval = Evaluator::default();
        assert_eq!(eval.evaluate_number(2_000_000_000), "Buzz");
        assert_eq!(eval.evaluate_number(3_000_000_000), "FizzBuzz");
        assert_eq!(eval.evaluate_number(9_999_999_999), "Fizz");
        assert_eq!(eval.evaluate_number(4_000_123_124), "4000123124");
    }

    #[test]
    fn test_negative_numbers() {
        let eval = custom(&[(7, "Foo"), (2, "Bar")]);
        assert_eq!(eval.evaluate_number(-7), "Foo");
        assert_eq!(eval.evaluate_number(-5), "-5");
        assert_eq!(eval.evaluate_number(-14), "FooBar");
        assert_eq!(eval.evaluate_number(-4_000_123_124), "Bar");
    }

    #[test]
    fn test_same_word_twice() {
        let eval = custom(&[(2, "Ho"), (3, "Ho")]);
        assert_eq!(eval.evaluate_number(6), "HoHo");
    }

    #[test]
    fn test_empty_word_still_matches() {
        let eval = custom(&[(2, "")]);
        assert_eq!(eval.evaluate_number(4), "");
        assert_eq!(eval.evaluate_number(5), "5");
    }

    #[test]
    fn test_empty_token_set() {
        let eval = custom(&[]);
        assert_eq!(eval.evaluate_number(15), "15");
        assert_eq!(eval.evaluate_number(-3), "-3");
    }

    #[test]
    fn test_negative_divisor() {
        let eval = Evaluator::from_external(ExternalToken::new(-3, "Fizz")).unwrap();
        let results: Vec<_> = eval.evaluate_range(1, 5).collect();
        assert_eq!(results, ["1", "2", "Fizz", "4", "5"]);
    }

    #[test]
    fn test_extremes_do_not_panic() {
        let eval = custom(&[(-1, "One"), (2, "Two")]);
        assert_eq!(eval.evaluate_number(i64::MIN), "OneTwo");
        assert_eq!(eval.evaluate_number(i64::MAX), "One");
    }

    #[test]
    fn test_standard_problem() {
        let eval = Evaluator::default();
        let up: Vec<_> = eval.evaluate_standard(5).collect();
        assert_eq!(up, ["1", "2", "Fizz", "4", "Buzz"]);

        let down: Vec<_> = eval.evaluate_standard(-5).collect();
        assert_eq!(down, ["1", "FizzBuzz", "-1", "-2", "Fizz", "-4", "Buzz"]);

        let zero: Vec<_> = eval.evaluate_standard(0).collect();
        assert_eq!(zero, ["1", "FizzBuzz"]);
    }
}
