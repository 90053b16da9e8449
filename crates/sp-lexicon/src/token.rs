//! Line tokenizer and letter-case helpers.
//!
//! A token is either a contiguous run of alphanumerics and apostrophes
//! (a word, with contractions like "wasn't" kept whole) or a single mark
//! from the sentence punctuation set. Everything else separates tokens
//! and is dropped.

/// Punctuation marks emitted as standalone tokens.
pub const TOKEN_PUNCTUATION: [char; 5] = ['.', ',', '!', '?', ';'];

/// Split a line into word and punctuation tokens, in original order.
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut word = String::new();
    for c in line.chars() {
        if c.is_alphanumeric() || c == '\'' {
            word.push(c);
        } else {
            if !word.is_empty() {
                tokens.push(std::mem::take(&mut word));
            }
            if TOKEN_PUNCTUATION.contains(&c) {
                tokens.push(c.to_string());
            }
        }
    }
    if !word.is_empty() {
        tokens.push(word);
    }
    tokens
}

/// Whether a string is title-case: every alphabetic run starts with an
/// uppercase letter followed only by lowercase, and there is at least one
/// letter. Matches across underscores and spaces, so "New_York" qualifies.
pub fn is_title_case(s: &str) -> bool {
    let mut any_letter = false;
    let mut run_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            any_letter = true;
            if run_start {
                if !c.is_uppercase() {
                    return false;
                }
                run_start = false;
            } else if !c.is_lowercase() {
                return false;
            }
        } else {
            run_start = true;
        }
    }
    any_letter
}

/// Uppercase the first letter of each alphabetic run, lowercasing the rest.
pub fn to_title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut run_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if run_start {
                out.extend(c.to_uppercase());
                run_start = false;
            } else {
                out.extend(c.to_lowercase());
            }
        } else {
            out.push(c);
            run_start = true;
        }
    }
    out
}
