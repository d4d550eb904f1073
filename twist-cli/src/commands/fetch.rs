//! The `twist fetch` command.

use crate::output::{self, Format};
use twist_eval::Evaluator;
use twist_fetch::{FetchError, TokenFetcher};

pub fn run(start: i64, end: i64, out: Format) -> Result<(), String> {
    let eval = fetch_evaluator()?;
    out.results(eval.evaluate_range(start, end))
}

/// Fetch a token and build an evaluator from it.
pub fn fetch_evaluator() -> Result<Evaluator, String> {
    let fetcher = TokenFetcher::from_env().map_err(|e| e.to_string())?;
    match fetcher.fetch() {
        Ok(token) => {
            output::info(&format!("using token {}={}", token.number, token.word));
            Evaluator::from_external(token).map_err(|e| e.to_string())
        }
        Err(FetchError::ServiceUnavailable) => {
            output::warning(
                "the word service was shut down while idle; \
                 wait a moment for it to restart and try again",
            );
            Err(FetchError::ServiceUnavailable.to_string())
        }
        Err(e) => Err(format!("could not fetch a token from {}: {e}", fetcher.config().url())),
    }
}
