//! Heuristic part-of-speech tagging and noun-phrase chunking.

use super::lexicon::{
    self, ADPOSITIONS, ADVERBS, AUXILIARIES, COMMON_ADJECTIVES, COMMON_VERBS, COORDINATORS,
    DETERMINERS, FIRST_NAMES, HONORIFICS, INTERJECTIONS, MONTHS, NUMBER_WORDS, ORGANIZATIONS,
    PARTICLES, PLACES, PRONOUNS, SUBORDINATORS, WEEKDAYS,
};
use super::tokenize::{span_text, Token, TokenKind};

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    Propn,
    Verb,
    Aux,
    Adj,
    Adv,
    Pron,
    Det,
    Adp,
    Cconj,
    Sconj,
    Part,
    Num,
    Punct,
    Intj,
}

impl PosTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Noun => "NOUN",
            Self::Propn => "PROPN",
            Self::Verb => "VERB",
            Self::Aux => "AUX",
            Self::Adj => "ADJ",
            Self::Adv => "ADV",
            Self::Pron => "PRON",
            Self::Det => "DET",
            Self::Adp => "ADP",
            Self::Cconj => "CCONJ",
            Self::Sconj => "SCONJ",
            Self::Part => "PART",
            Self::Num => "NUM",
            Self::Punct => "PUNCT",
            Self::Intj => "INTJ",
        }
    }
}

const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their"];

const ADJ_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish", "ary",
];
const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ship", "ance", "ence", "ism", "ist", "er", "or",
];

fn starts_uppercase(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

fn is_known_name(lower: &str) -> bool {
    [FIRST_NAMES, PLACES, ORGANIZATIONS, HONORIFICS]
        .iter()
        .any(|list| lexicon::contains(list, lower))
}

/// Closed-class lookup on the word (or its stem before an apostrophe).
fn closed_class(lower: &str, next: Option<&Token<'_>>) -> Option<PosTag> {
    if lower.ends_with("n't") {
        return Some(PosTag::Aux);
    }
    let stem = lower.split(&['\'', '’'][..]).next().unwrap_or(lower);

    if stem == "to" {
        let before_verb = next.is_some_and(|t| lexicon::contains(COMMON_VERBS, &t.lower()));
        return Some(if before_verb { PosTag::Part } else { PosTag::Adp });
    }

    let tables: [(&[&str], PosTag); 11] = [
        (DETERMINERS, PosTag::Det),
        (PRONOUNS, PosTag::Pron),
        (AUXILIARIES, PosTag::Aux),
        (PARTICLES, PosTag::Part),
        (ADPOSITIONS, PosTag::Adp),
        (COORDINATORS, PosTag::Cconj),
        (SUBORDINATORS, PosTag::Sconj),
        (INTERJECTIONS, PosTag::Intj),
        (ADVERBS, PosTag::Adv),
        (NUMBER_WORDS, PosTag::Num),
        (WEEKDAYS, PosTag::Noun),
    ];
    tables
        .iter()
        .find(|(list, _)| lexicon::contains(list, stem))
        .map(|(_, tag)| *tag)
}

/// Whether a word ending in `s` after a noun reads as a third-person verb
/// ("the fox jumps over").
fn verb_follows_noun(next: Option<&Token<'_>>) -> bool {
    next.is_some_and(|t| {
        let lower = t.lower();
        [DETERMINERS, ADPOSITIONS, PRONOUNS, ADVERBS]
            .iter()
            .any(|list| lexicon::contains(list, &lower))
    })
}

fn open_class(lower: &str, prev: Option<(PosTag, &Token<'_>)>, next: Option<&Token<'_>>) -> PosTag {
    if lexicon::contains(COMMON_VERBS, lower) {
        return PosTag::Verb;
    }
    if lexicon::contains(COMMON_ADJECTIVES, lower) {
        return PosTag::Adj;
    }
    // A subject pronoun is usually followed by its verb.
    if let Some((PosTag::Pron, prev_token)) = prev {
        if !is_possessive(prev_token) {
            return PosTag::Verb;
        }
    }
    if lower.ends_with("ly") && lower.len() > 4 {
        return PosTag::Adv;
    }
    if lower.ends_with("ing") || lower.ends_with("ed") {
        return if matches!(prev, Some((PosTag::Det | PosTag::Adj, _))) {
            PosTag::Noun
        } else {
            PosTag::Verb
        };
    }
    if ADJ_SUFFIXES.iter().any(|s| lower.ends_with(s)) && lower.len() > 4 {
        return PosTag::Adj;
    }
    if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        return PosTag::Noun;
    }
    if lower.ends_with('s')
        && !lower.ends_with("ss")
        && matches!(prev, Some((PosTag::Noun | PosTag::Propn, _)))
        && verb_follows_noun(next)
    {
        return PosTag::Verb;
    }
    PosTag::Noun
}

/// Tag every token.
pub(crate) fn tag(tokens: &[Token<'_>]) -> Vec<PosTag> {
    let mut tags: Vec<PosTag> = Vec::with_capacity(tokens.len());

    for (i, token) in tokens.iter().enumerate() {
        let next = tokens.get(i + 1);
        let prev = i
            .checked_sub(1)
            .map(|p| (tags[p], &tokens[p]));

        let tag = match token.kind {
            TokenKind::Punct => PosTag::Punct,
            TokenKind::Number => PosTag::Num,
            TokenKind::Word => {
                let lower = token.lower();
                let capitalised = starts_uppercase(token.text);
                let next_is_name = next.is_some_and(|t| {
                    t.kind == TokenKind::Word && starts_uppercase(t.text) && !t.sentence_start
                });

                if capitalised && !token.sentence_start && lexicon::contains(MONTHS, &lower) {
                    PosTag::Propn
                } else {
                    match closed_class(&lower, next) {
                        // "I", "The", "And" stay closed-class anywhere; a
                        // capitalised weekday is still a name.
                        Some(PosTag::Noun) if capitalised => PosTag::Propn,
                        Some(tag) => tag,
                        None if capitalised
                            && (!token.sentence_start || is_known_name(&lower) || next_is_name) =>
                        {
                            PosTag::Propn
                        }
                        None => open_class(&lower, prev, next),
                    }
                }
            }
        };
        tags.push(tag);
    }

    tags
}

fn is_possessive(token: &Token<'_>) -> bool {
    lexicon::contains(POSSESSIVES, &token.lower())
}

/// Noun phrases: `(DET | possessive)? (ADJ | NUM)* (NOUN | PROPN)+`, plus
/// standalone non-possessive pronouns.
pub(crate) fn noun_chunks(text: &str, tokens: &[Token<'_>], tags: &[PosTag]) -> Vec<String> {
    let mut chunks = Vec::new();
    let n = tokens.len();
    let mut i = 0;

    while i < n {
        let start = i;
        let mut j = i;
        if tags[j] == PosTag::Det || (tags[j] == PosTag::Pron && is_possessive(&tokens[j])) {
            j += 1;
        }
        while j < n && matches!(tags[j], PosTag::Adj | PosTag::Num) {
            j += 1;
        }
        let mut k = j;
        while k < n && matches!(tags[k], PosTag::Noun | PosTag::Propn) {
            k += 1;
        }

        if k > j {
            chunks.push(span_text(text, &tokens[start], &tokens[k - 1]).to_string());
            i = k;
        } else if tags[i] == PosTag::Pron && !is_possessive(&tokens[i]) {
            chunks.push(tokens[i].text.to_string());
            i += 1;
        } else {
            i += 1;
        }
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::super::tokenize::tokenize;
    use super::*;

    fn tags_of(text: &str) -> Vec<(String, &'static str)> {
        let tokens = tokenize(text);
        tag(&tokens)
            .into_iter()
            .zip(tokens.iter())
            .map(|(t, tok)| (tok.text.to_string(), t.as_str()))
            .collect()
    }

    fn chunks_of(text: &str) -> Vec<String> {
        let tokens = tokenize(text);
        let tags = tag(&tokens);
        noun_chunks(text, &tokens, &tags)
    }

    #[test]
    fn closed_class_words_are_tagged() {
        let tags = tags_of("The cat is on the mat and it sleeps.");
        let expected = [
            ("The", "DET"),
            ("cat", "NOUN"),
            ("is", "AUX"),
            ("on", "ADP"),
            ("the", "DET"),
            ("mat", "NOUN"),
            ("and", "CCONJ"),
            ("it", "PRON"),
            ("sleeps", "VERB"),
            (".", "PUNCT"),
        ];
        for ((word, tag), (exp_word, exp_tag)) in tags.iter().zip(expected) {
            assert_eq!(word, exp_word);
            assert_eq!(*tag, exp_tag, "tag for {word}");
        }
    }

    #[test]
    fn capitalised_words_mid_sentence_are_proper_nouns() {
        let tags = tags_of("We visited Paris with Alice.");
        assert_eq!(tags[2], ("Paris".to_string(), "PROPN"));
        assert_eq!(tags[4], ("Alice".to_string(), "PROPN"));
        assert_eq!(tags[0].1, "PRON");
    }

    #[test]
    fn infinitive_to_is_a_particle() {
        let tags = tags_of("I want to go to London");
        assert_eq!(tags[2].1, "PART");
        assert_eq!(tags[4].1, "ADP");
    }

    #[test]
    fn numbers_are_num() {
        let tags = tags_of("We sold 42 units and two boxes");
        assert_eq!(tags[2].1, "NUM");
        assert_eq!(tags[5].1, "NUM");
    }

    #[test]
    fn noun_chunks_follow_determiner_adjective_noun() {
        assert_eq!(
            chunks_of("The quick brown fox jumps over the lazy dog."),
            vec!["The quick brown fox", "the lazy dog"]
        );
    }

    #[test]
    fn noun_chunks_include_pronouns_and_possessives() {
        assert_eq!(
            chunks_of("I lost my old phone in New York."),
            vec!["I", "my old phone", "New York"]
        );
    }
}
