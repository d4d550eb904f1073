//! The `twist demo` command.
//!
//! Walks through the built-in showcase problems.

use super::fetch::fetch_evaluator;
use crate::output::{self, Format};
use twist_eval::{Evaluator, TokenSet};

/// Only this many results of the two-billion range are printed.
const LARGE_RANGE_PREVIEW: usize = 20;

pub fn run(fetch: bool) -> Result<(), String> {
    let out = Format::new(false);
    let default = Evaluator::default();

    output::heading("Large range (first 20 of 1..=2,000,000,000):");
    out.results(default.evaluate_range(1, 2_000_000_000).take(LARGE_RANGE_PREVIEW))?;

    output::heading("\nNon-sequential numbers:");
    out.results(default.evaluate_sequence([-5, 6, 300, 12, 15]))?;

    output::heading("\nCustom tokens (7=Poem, 17=Writer, 3=College):");
    let poets = tokens([(7, "Poem"), (17, "Writer"), (3, "College")])?;
    out.results(poets.evaluate_sequence([119, 51, 21, 357]))?;

    output::heading("\nAlternative problem (5=Fizz, 9=Buzz, 27=Bar over -20..=127):");
    let alternative = tokens([(5, "Fizz"), (9, "Buzz"), (27, "Bar")])?;
    out.results(alternative.evaluate_range(-20, 127))?;

    if fetch {
        output::heading("\nToken from the word service (1..=100):");
        let external = fetch_evaluator()?;
        out.results(external.evaluate_range(1, 100))?;
    }

    Ok(())
}

fn tokens<const N: usize>(entries: [(i64, &str); N]) -> Result<Evaluator, String> {
    TokenSet::new(entries).map(Evaluator::new).map_err(|e| e.to_string())
}
