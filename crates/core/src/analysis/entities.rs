//! Named-entity spans from proper-noun runs, dates, and numbers.

use super::lexicon::{
    self, FIRST_NAMES, HONORIFICS, MONTHS, ORGANIZATIONS, ORG_SUFFIXES, PLACES, WEEKDAYS,
};
use super::pos::PosTag;
use super::tokenize::{span_text, Token};
use super::Entity;

fn is_date_word(lower: &str) -> bool {
    lexicon::contains(MONTHS, lower) || lexicon::contains(WEEKDAYS, lower)
}

fn label_for_run(lowered: &[String], after_honorific: bool) -> &'static str {
    if after_honorific {
        return "PERSON";
    }
    let last = lowered.last().map(String::as_str).unwrap_or_default();
    if lexicon::contains(ORG_SUFFIXES, last)
        || lowered.iter().any(|w| lexicon::contains(ORGANIZATIONS, w))
    {
        return "ORG";
    }
    if lowered.iter().any(|w| lexicon::contains(PLACES, w)) {
        return "GPE";
    }
    if lowered
        .first()
        .is_some_and(|w| lexicon::contains(FIRST_NAMES, w))
    {
        return "PERSON";
    }
    "ORG"
}

fn entity(text: &str, tokens: &[Token<'_>], first: usize, last: usize, label: &str) -> Entity {
    Entity {
        text: span_text(text, &tokens[first], &tokens[last]).to_string(),
        label: label.to_string(),
        start: tokens[first].start,
        end: tokens[last].end,
    }
}

/// Extract entities in document order.
pub(crate) fn extract(text: &str, tokens: &[Token<'_>], tags: &[PosTag]) -> Vec<Entity> {
    let mut entities = Vec::new();
    let n = tokens.len();
    let mut i = 0;

    while i < n {
        match tags[i] {
            PosTag::Propn | PosTag::Noun if is_date_word(&tokens[i].lower()) => {
                // "March 5": a date swallows the number that follows it.
                let last = if i + 1 < n && tags[i + 1] == PosTag::Num {
                    i + 1
                } else {
                    i
                };
                entities.push(entity(text, tokens, i, last, "DATE"));
                i = last + 1;
            }
            PosTag::Propn => {
                let mut first = i;
                let mut after_honorific = false;
                // "Dr. Smith": skip the honorific and its period.
                if lexicon::contains(HONORIFICS, &tokens[i].lower()) {
                    let mut next = i + 1;
                    if next < n && tokens[next].text == "." {
                        next += 1;
                    }
                    if next < n && tags[next] == PosTag::Propn {
                        first = next;
                        after_honorific = true;
                    } else {
                        i += 1;
                        continue;
                    }
                }

                let mut last = first;
                while last + 1 < n
                    && tags[last + 1] == PosTag::Propn
                    && !is_date_word(&tokens[last + 1].lower())
                {
                    last += 1;
                }
                let lowered: Vec<String> = tokens[first..=last].iter().map(Token::lower).collect();
                let label = label_for_run(&lowered, after_honorific);

                entities.push(entity(text, tokens, first, last, label));
                i = last + 1;
            }
            PosTag::Num => {
                let label = if tokens[i].text.ends_with('%') {
                    "PERCENT"
                } else {
                    "CARDINAL"
                };
                entities.push(entity(text, tokens, i, i, label));
                i += 1;
            }
            _ => i += 1,
        }
    }

    entities
}
