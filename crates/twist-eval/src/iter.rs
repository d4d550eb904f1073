//! Lazy evaluation over sequences and ranges.
//!
//! Both iterators are single-pass and keep constant state, so ranges of
//! billions of numbers can be consumed a prefix at a time. Cloning an
//! iterator forks it from its current position.

use crate::TokenSet;
use crate::eval::evaluate;
use std::iter::FusedIterator;

/// Results for an arbitrary sequence of numbers, in input order.
#[derive(Debug, Clone)]
pub struct Sequence<'a, I> {
    tokens: &'a TokenSet,
    numbers: I,
}

impl<'a, I> Sequence<'a, I> {
    pub(crate) fn new(tokens: &'a TokenSet, numbers: I) -> Self {
        Self { tokens, numbers }
    }
}

impl<I: Iterator<Item = i64>> Iterator for Sequence<'_, I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.numbers.next().map(|n| evaluate(self.tokens, n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.numbers.size_hint()
    }
}

impl<I: DoubleEndedIterator<Item = i64>> DoubleEndedIterator for Sequence<'_, I> {
    fn next_back(&mut self) -> Option<String> {
        self.numbers.next_back().map(|n| evaluate(self.tokens, n))
    }
}

impl<I: ExactSizeIterator<Item = i64>> ExactSizeIterator for Sequence<'_, I> {}

impl<I: FusedIterator<Item = i64>> FusedIterator for Sequence<'_, I> {}

/// Results for an inclusive range, ascending or descending.
///
/// `front` and `back` are the next numbers to yield from either end; the
/// range is exhausted once they have crossed, tracked by `done` so the
/// iterator never steps past `i64::MIN` or `i64::MAX`.
#[derive(Debug, Clone)]
pub struct RangeEval<'a> {
    tokens: &'a TokenSet,
    front: i64,
    back: i64,
    ascending: bool,
    done: bool,
}

impl<'a> RangeEval<'a> {
    pub(crate) fn new(tokens: &'a TokenSet, start: i64, end: i64) -> Self {
        Self {
            tokens,
            front: start,
            back: end,
            ascending: start <= end,
            done: false,
        }
    }

    /// Numbers left to yield. The full `i64` span holds 2^64 of them, one
    /// more than `u64` can count.
    pub fn remaining(&self) -> u128 {
        if self.done {
            0
        } else {
            u128::from(self.front.abs_diff(self.back)) + 1
        }
    }

    fn step_toward_end(&self, n: i64) -> i64 {
        if self.ascending { n + 1 } else { n - 1 }
    }

    fn step_toward_start(&self, n: i64) -> i64 {
        if self.ascending { n - 1 } else { n + 1 }
    }
}

impl Iterator for RangeEval<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let n = self.front;
        if self.front == self.back {
            self.done = true;
        } else {
            self.front = self.step_toward_end(n);
        }
        Some(evaluate(self.tokens, n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(len) => (len, Some(len)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl DoubleEndedIterator for RangeEval<'_> {
    fn next_back(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let n = self.back;
        if self.front == self.back {
            self.done = true;
        } else {
            self.back = self.step_toward_start(n);
        }
        Some(evaluate(self.tokens, n))
    }
}

impl FusedIterator for RangeEval<'_> {}
