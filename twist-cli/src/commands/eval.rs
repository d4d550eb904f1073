//! The `twist number`, `numbers`, `range` and `standard` commands.

use super::evaluator;
use crate::TokenArgs;
use crate::output::Format;
use twist_eval::Evaluator;

pub fn number(number: i64, tokens: &TokenArgs, out: Format) -> Result<(), String> {
    let eval = evaluator(tokens)?;
    out.results(std::iter::once(eval.evaluate_number(number)))
}

pub fn numbers(numbers: Vec<i64>, tokens: &TokenArgs, out: Format) -> Result<(), String> {
    let eval = evaluator(tokens)?;
    out.results(eval.evaluate_sequence(numbers))
}

pub fn range(
    start: i64,
    end: i64,
    limit: Option<u64>,
    tokens: &TokenArgs,
    out: Format,
) -> Result<(), String> {
    let eval = evaluator(tokens)?;
    let results = eval.evaluate_range(start, end);
    match limit {
        Some(limit) => out.results(results.take(usize::try_from(limit).unwrap_or(usize::MAX))),
        None => out.results(results),
    }
}

pub fn standard(number: i64, out: Format) -> Result<(), String> {
    out.results(Evaluator::default().evaluate_standard(number))
}
