//! Tokenisation and sentence splitting.

use std::sync::LazyLock;

use regex::Regex;

use super::lexicon::{self, HONORIFICS};

/// Words (with inner apostrophes and hyphens), numbers, or a single
/// punctuation character.
const TOKEN_PATTERN: &str =
    r"\p{L}+(?:['’]\p{L}+)*(?:-\p{L}+)*|\d+(?:[.,:]\d+)*%?|[^\s\p{L}\d]";

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).expect("valid regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    Word,
    Number,
    Punct,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub text: &'a str,
    pub kind: TokenKind,
    /// Character offset of the first character.
    pub start: usize,
    /// Character offset one past the last character.
    pub end: usize,
    /// Byte range in the source text.
    pub byte_start: usize,
    pub byte_end: usize,
    /// Index of the sentence this token belongs to.
    pub sentence: usize,
    /// First non-punctuation token of its sentence.
    pub sentence_start: bool,
}

impl Token<'_> {
    pub fn is_punct(&self) -> bool {
        self.kind == TokenKind::Punct
    }

    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }
}

fn is_sentence_terminal(token: &str) -> bool {
    matches!(token, "." | "!" | "?" | "…")
}

/// Split `text` into tokens, tagging each with its sentence index.
///
/// A sentence ends after a run of terminal punctuation; trailing text
/// without a terminator still forms a sentence. The period after an
/// honorific (`Dr.`, `Mrs.`) does not end a sentence.
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens: Vec<Token<'_>> = Vec::new();
    let mut byte_pos = 0;
    let mut char_pos = 0;
    let mut sentence = 0;
    let mut at_sentence_start = true;
    let mut after_terminal = false;

    for m in TOKEN_RE.find_iter(text) {
        char_pos += text[byte_pos..m.start()].chars().count();
        let start = char_pos;
        let len = m.as_str().chars().count();
        char_pos += len;
        byte_pos = m.end();

        let raw = m.as_str();
        let kind = if raw.chars().next().is_some_and(char::is_alphabetic) {
            TokenKind::Word
        } else if raw.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            TokenKind::Number
        } else {
            TokenKind::Punct
        };

        let after_honorific = raw == "."
            && tokens
                .last()
                .is_some_and(|prev: &Token<'_>| lexicon::contains(HONORIFICS, &prev.lower()));
        let terminal =
            kind == TokenKind::Punct && is_sentence_terminal(raw) && !after_honorific;
        if after_terminal && !terminal {
            sentence += 1;
            at_sentence_start = true;
        }
        after_terminal = terminal;

        let sentence_start = at_sentence_start && kind != TokenKind::Punct;
        if sentence_start {
            at_sentence_start = false;
        }

        tokens.push(Token {
            text: raw,
            kind,
            start,
            end: start + len,
            byte_start: m.start(),
            byte_end: m.end(),
            sentence,
            sentence_start,
        });
    }

    tokens
}

/// Source text covered by `tokens[first..=last]`.
pub(crate) fn span_text<'a>(text: &'a str, first: &Token<'_>, last: &Token<'_>) -> &'a str {
    &text[first.byte_start..last.byte_end]
}

/// Number of sentences covered by `tokens`.
pub(crate) fn sentence_count(tokens: &[Token<'_>]) -> usize {
    tokens.last().map_or(0, |t| t.sentence + 1)
}
