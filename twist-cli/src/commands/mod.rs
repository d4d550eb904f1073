//! CLI command implementations.

pub mod demo;
pub mod eval;
pub mod fetch;

use crate::TokenArgs;
use twist_eval::{Evaluator, TokenSet};

/// Build the evaluator selected by the token flags.
///
/// No flags means the default tokens; custom and external tokens each
/// replace the defaults entirely.
pub fn evaluator(args: &TokenArgs) -> Result<Evaluator, String> {
    if let Some(json) = &args.token_json {
        let token = twist_fetch::parse_token(json.as_bytes()).map_err(|e| e.to_string())?;
        tracing::debug!(number = token.number, word = %token.word, "using external token");
        return Evaluator::from_external(token).map_err(|e| e.to_string());
    }
    if args.tokens.is_empty() {
        return Ok(Evaluator::default());
    }
    let set = TokenSet::parse_entries(&args.tokens).map_err(|e| e.to_string())?;
    tracing::debug!(tokens = ?args.tokens, "using custom tokens");
    Ok(Evaluator::new(set))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(tokens: &[&str], json: Option<&str>) -> TokenArgs {
        TokenArgs {
            tokens: tokens.iter().map(|t| t.to_string()).collect(),
            token_json: json.map(String::from),
        }
    }

    #[test]
    fn test_default_evaluator() {
        let eval = evaluator(&TokenArgs::default()).unwrap();
        assert_eq!(eval.evaluate_number(15), "FizzBuzz");
    }

    #[test]
    fn test_custom_tokens_replace_defaults() {
        let eval = evaluator(&args(&["7=Foo", "2=Bar"], None)).unwrap();
        assert_eq!(eval.evaluate_number(14), "FooBar");
        assert_eq!(eval.evaluate_number(15), "15");
    }

    #[test]
    fn test_external_json_token() {
        let eval = evaluator(&args(&[], Some(r#"{"number":5,"word":"Foo"}"#))).unwrap();
        assert_eq!(eval.evaluate_number(40), "Foo");
        assert_eq!(eval.evaluate_number(3), "3");
    }

    #[test]
    fn test_invalid_tokens() {
        assert!(evaluator(&args(&["0=Zero"], None)).is_err());
        assert!(evaluator(&args(&["seven=Foo"], None)).is_err());
        assert!(evaluator(&args(&[], Some(r#"{"number":0,"word":"Foo"}"#))).is_err());
    }
}
