//! Escape processing for string literals.
//!
//! Valid escapes: `\"` `\\` `\n` `\t` `\r` `\0`. The first invalid escape
//! aborts lexing.

use scam_ir::Span;

use crate::lex_error::LexError;

#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        '"' => Some('"'),
        '\\' => Some('\\'),
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Unescape a string literal's content (between the `"`s).
///
/// `base_offset` is the byte offset of `content` in the source, used to
/// point errors at the offending escape.
pub(crate) fn cook_string(content: &str, base_offset: u32) -> Result<String, LexError> {
    if !content.contains('\\') {
        return Ok(content.to_string());
    }

    let offset = |i: usize| base_offset.saturating_add(u32::try_from(i).unwrap_or(u32::MAX));

    let mut result = String::with_capacity(content.len());
    let mut chars = content.char_indices();

    while let Some((i, c)) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some((j, esc)) => match resolve_escape(esc) {
                Some(resolved) => result.push(resolved),
                None => {
                    let span = Span::new(offset(i), offset(j + esc.len_utf8()));
                    return Err(LexError::invalid_escape(span, esc));
                }
            },
            // The raw token regex never ends a literal on a lone backslash.
            None => {
                let span = Span::new(offset(i), offset(i + 1));
                return Err(LexError::invalid_escape(span, '\\'));
            }
        }
    }

    Ok(result)
}
