//! Case-insensitive highlighting of the search term inside suggestion names.
//!
//! The term is matched as literal text, so characters such as `(`, `*` or `\`
//! in user input are compared like any other character.

/// A piece of highlighted text borrowed from the original string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Plain(&'a str),
    Match(&'a str),
}

impl<'a> Segment<'a> {
    pub fn text(&self) -> &'a str {
        match *self {
            Segment::Plain(s) | Segment::Match(s) => s,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, Segment::Match(_))
    }
}

/// Split `text` around every case-insensitive occurrence of `term`.
///
/// An empty term returns the whole text as a single plain segment.
pub fn highlight_match<'a>(text: &'a str, term: &str) -> Vec<Segment<'a>> {
    if term.is_empty() {
        return vec![Segment::Plain(text)];
    }

    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while pos < text.len() {
        match match_len_at(&text[pos..], term) {
            Some(len) => {
                if plain_start < pos {
                    segments.push(Segment::Plain(&text[plain_start..pos]));
                }
                segments.push(Segment::Match(&text[pos..pos + len]));
                pos += len;
                plain_start = pos;
            }
            None => {
                pos += text[pos..].chars().next().map_or(1, char::len_utf8);
            }
        }
    }

    if plain_start < text.len() || segments.is_empty() {
        segments.push(Segment::Plain(&text[plain_start..]));
    }

    segments
}

/// Byte length of the prefix of `haystack` that equals `term` ignoring case
fn match_len_at(haystack: &str, term: &str) -> Option<usize> {
    let mut hay_chars = haystack.char_indices();
    for t in term.chars() {
        let (_, h) = hay_chars.next()?;
        if !chars_eq_ignore_case(h, t) {
            return None;
        }
    }
    Some(hay_chars.next().map_or(haystack.len(), |(i, _)| i))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
