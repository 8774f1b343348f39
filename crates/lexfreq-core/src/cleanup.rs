//! Token cleanup
//!
//! Strips unwanted character runs out of individual tokens after
//! tokenization, dropping tokens that have nothing left.

use regex::Regex;

/// Remove every match of `pattern` from the token
///
/// Without a pattern the token passes through unchanged. The result may be
/// empty when the pattern swallows the whole token.
pub fn clean_token(token: &str, pattern: Option<&Regex>) -> String {
    match pattern {
        Some(pattern) => pattern.replace_all(token, "").into_owned(),
        None => token.to_string(),
    }
}

/// Clean every token and drop the ones that come back empty, preserving order
pub fn clean_tokens(tokens: &[String], pattern: Option<&Regex>) -> Vec<String> {
    tokens
        .iter()
        .map(|token| clean_token(token, pattern))
        .filter(|token| !token.is_empty())
        .collect()
}
