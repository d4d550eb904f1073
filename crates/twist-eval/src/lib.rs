//! Token evaluation for Twist.
//!
//! A token set maps divisors to words. Evaluating a number concatenates the
//! words of every divisor that divides it, in token-set order, or falls back
//! to the number's decimal text when nothing matches.
//!
//! - `TokenSet`: ordered, validated divisor/word rules
//! - `TokenSource`: the built-in defaults or a caller-supplied set
//! - `Evaluator`: single numbers, sequences and inclusive ranges

mod error;
mod eval;
mod iter;
mod number;
mod token;

pub use error::EvalError;
pub use eval::Evaluator;
pub use iter::{RangeEval, Sequence};
pub use number::parse_number;
pub use token::{ExternalToken, Token, TokenSet, TokenSource};
