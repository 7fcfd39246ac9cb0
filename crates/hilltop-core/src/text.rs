//! Text cleanup and sentence splitting.
//!
//! Raw corpus files arrive with arbitrary indentation and line wrapping, so
//! cleaning collapses whitespace before the annotation stage sees the text.
//! The sentence splitter is a character scan with context-based boundary
//! detection rather than naive punctuation splitting.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Regex for URLs.
static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:https?://|www\.)\S+").expect("valid regex"));

/// Abbreviations that should not end a sentence when followed by a period.
static ABBREVIATIONS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "mr", "mrs", "ms", "dr", "prof", "rev", "sr", "jr", "hon", "capt", "col", "gen", "lt",
        "sgt", "etc", "vs", "e.g", "i.e", "cf", "viz", "approx", "dept", "est", "min", "max",
        "no", "vol", "st", "ave", "blvd", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
        "sept", "oct", "nov", "dec", "a.m", "p.m",
    ]
    .into_iter()
    .collect()
});

/// Collapse runs of whitespace to single spaces and trim.
///
/// Heavily indented or hard-wrapped source text otherwise confuses the
/// sentence splitter.
pub fn clean_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = true;
    for ch in text.chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push(' ');
                in_space = true;
            }
        } else {
            out.push(ch);
            in_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Split text into sentences with abbreviation, decimal, and URL awareness.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_sentences(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let min_length = 3;
    let mut sentences = Vec::new();
    let mut current = String::new();
    let chars: Vec<char> = text.chars().collect();

    for (i, &ch) in chars.iter().enumerate() {
        current.push(ch);

        if is_sentence_terminator(ch) && is_sentence_boundary(&chars, i, &current) {
            let sentence = current.trim().to_string();
            if sentence.len() >= min_length {
                sentences.push(sentence);
            }
            current.clear();
        }
    }

    // Remaining text
    let sentence = current.trim().to_string();
    if sentence.len() >= min_length {
        sentences.push(sentence);
    }

    sentences
}

const fn is_sentence_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

fn is_sentence_boundary(chars: &[char], pos: usize, current: &str) -> bool {
    if pos == chars.len() - 1 {
        return true;
    }

    let next_char = next_non_space(chars, pos);

    // ! and ? are almost always boundaries
    if chars[pos] == '!' || chars[pos] == '?' {
        return next_char.is_none_or(|c| !c.is_lowercase());
    }

    // For periods, apply heuristics
    let word_before = word_before(chars, pos);
    if is_likely_abbreviation(&word_before) {
        return false;
    }

    if current.ends_with("...") {
        return false;
    }

    // Digit after period following a digit = decimal number (e.g., "3.14")
    if next_char.is_some_and(|c| c.is_ascii_digit())
        && word_before.chars().last().is_some_and(|c| c.is_ascii_digit())
    {
        return false;
    }

    let tail: String = current.chars().rev().take(50).collect::<Vec<_>>().iter().rev().collect();
    if URL_PATTERN.is_match(&tail) {
        return false;
    }

    match next_char {
        Some(c) if c.is_uppercase() => true,
        Some(c) if c.is_lowercase() => false,
        _ => true,
    }
}

fn next_non_space(chars: &[char], pos: usize) -> Option<char> {
    chars[pos + 1..].iter().copied().find(|c| !c.is_whitespace())
}

fn word_before(chars: &[char], pos: usize) -> String {
    let mut i = pos;
    // Skip back past the terminator itself
    while i > 0 {
        i -= 1;
        if !chars[i].is_whitespace() && chars[i] != '.' {
            break;
        }
    }

    let mut word_chars = Vec::new();
    loop {
        if chars[i].is_alphanumeric() || chars[i] == '.' {
            word_chars.push(chars[i]);
        } else {
            break;
        }
        if i == 0 {
            break;
        }
        i -= 1;
    }

    word_chars.reverse();
    word_chars.iter().collect()
}

fn is_likely_abbreviation(word: &str) -> bool {
    if word.is_empty() {
        return false;
    }
    let word_clean = word.trim_end_matches('.').to_lowercase();
    if ABBREVIATIONS.contains(word_clean.as_str()) {
        return true;
    }
    // Single letter = likely initial
    word_clean.len() == 1 && word_clean.chars().next().is_some_and(char::is_alphabetic)
}
