use crate::consts::{FIELD_SEPARATORS, TIME_DESIGNATOR};
use crate::types::Month;
use crate::ParseError;

/// One field candidate scanned out of a raw date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    /// A run of ASCII digits, kept as text so width rules can split it.
    Digits(&'a str),
    /// A month name or abbreviation, resolved to its month.
    Name(Month, &'a str),
}

impl<'a> Token<'a> {
    /// The original text of this token.
    pub(crate) const fn text(&self) -> &'a str {
        match *self {
            Self::Digits(text) | Self::Name(_, text) => text,
        }
    }
}

/// Splits trimmed input into date tokens. Runs of `-`, `/`, `,`, and
/// whitespace separate fields; an embedded clock time is cut off first.
///
/// # Errors
/// Returns `ParseError::EmptyInput` when nothing is left to scan, and a
/// classification error for any candidate that is neither a digit run nor
/// a month name.
pub(crate) fn scan(input: &str) -> Result<Vec<Token<'_>>, ParseError> {
    let date_part = strip_clock_suffix(input.trim());
    let mut tokens = Vec::new();
    for candidate in date_part.split(is_separator) {
        if candidate.is_empty() {
            continue;
        }
        tokens.push(classify(candidate)?);
    }
    if tokens.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    Ok(tokens)
}

fn classify(candidate: &str) -> Result<Token<'_>, ParseError> {
    if candidate.bytes().all(|byte| byte.is_ascii_digit()) {
        return Ok(Token::Digits(candidate));
    }
    if let Some(month) = Month::from_name(candidate) {
        return Ok(Token::Name(month, candidate));
    }
    if candidate.chars().all(|c| c.is_ascii_alphabetic() || c == '.') {
        return Err(ParseError::UnknownMonth(candidate.to_owned()));
    }
    Err(ParseError::InvalidFormat(candidate.to_owned()))
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || FIELD_SEPARATORS.contains(&c)
}

/// Cuts an embedded clock time: everything from a `T` directly followed by
/// a two-digit `hh:mm:ss` pattern is dropped. A `T` without that pattern
/// stays put and fails classification instead.
fn strip_clock_suffix(input: &str) -> &str {
    for (index, _) in input.match_indices(TIME_DESIGNATOR) {
        if starts_with_clock(input.as_bytes(), index + 1) {
            return &input[..index];
        }
    }
    input
}

fn starts_with_clock(bytes: &[u8], from: usize) -> bool {
    const CLOCK_LEN: usize = 8; // "hh:mm:ss"
    let Some(window) = bytes.get(from..from + CLOCK_LEN) else {
        return false;
    };
    window.iter().enumerate().all(|(offset, byte)| match offset {
        2 | 5 => *byte == b':',
        _ => byte.is_ascii_digit(),
    })
}
