//! Maps free-form utterances to the canonical command strings the
//! interpreter understands.

use tracing::debug;

use crate::domain::{MenuCatalog, MenuItem};

/// Spoken phrases and the command they stand for. Checked in declaration
/// order; the first phrase contained in the utterance wins.
const VOICE_PHRASES: &[(&str, &str)] = &[
    ("show menu", "menu"),
    ("view menu", "menu"),
    ("see menu", "menu"),
    ("menu please", "menu"),
    ("full menu", "full"),
    ("show cart", "cart"),
    ("view cart", "cart"),
    ("my cart", "cart"),
    ("check cart", "cart"),
    ("clear cart", "clear"),
    ("empty cart", "clear"),
    ("remove all", "clear"),
    ("check out", "checkout"),
    ("place order", "checkout"),
    ("complete order", "checkout"),
    ("finish order", "checkout"),
    ("show starters", "starters"),
    ("show appetizers", "starters"),
    ("show mains", "mains"),
    ("show main courses", "mains"),
    ("show desserts", "desserts"),
    ("show drinks", "drinks"),
    ("show beverages", "drinks"),
    ("help me", "help"),
    ("what can i do", "help"),
    ("how does this work", "help"),
];

/// Substrings that mark an utterance as an attempt to order something.
const ORDER_CUES: &[&str] = &["add", "order", "want"];

/// Words dropped before comparing what is left of an utterance to item names.
const FILLER_WORDS: &[&str] = &["add", "order", "want", "i", "to", "the", "a", "an"];

const NUMBER_WORDS: &[(&str, u32)] = &[
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
];

/// Produces a canonical command from raw text.
///
/// Input is lower-cased and trimmed. Only voice transcripts get phrase and
/// item extraction; typed text is already expected to be a command.
pub fn normalize(raw: &str, was_voice: bool, menu: &MenuCatalog) -> String {
    let text = raw.trim().to_lowercase();
    if !was_voice {
        return text;
    }

    if let Some((phrase, command)) = VOICE_PHRASES.iter().find(|(phrase, _)| text.contains(phrase)) {
        debug!(phrase, command, "Matched voice phrase");
        return (*command).to_string();
    }

    if ORDER_CUES.iter().any(|cue| text.contains(cue)) {
        let quantity = spoken_quantity(&text);
        if let Some(item) = spoken_item(&text, menu) {
            debug!(item_id = %item.id, quantity, "Extracted spoken order");
            return format!("add {} {}", item.id, quantity);
        }
    }

    text
}

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty())
}

fn number_word(word: &str) -> Option<u32> {
    NUMBER_WORDS.iter().find(|(w, _)| *w == word).map(|(_, n)| *n)
}

fn is_quantity_token(word: &str) -> bool {
    word.chars().all(|c| c.is_ascii_digit()) || number_word(word).is_some()
}

/// The last number mentioned, as digits or a word from one to ten.
/// Falls back to 1 when nothing usable is found.
pub fn spoken_quantity(text: &str) -> u32 {
    words(text)
        .filter(|w| is_quantity_token(w))
        .last()
        .and_then(|w| number_word(w).or_else(|| w.parse().ok()))
        .filter(|n| *n > 0)
        .unwrap_or(1)
}

/// First menu item whose name appears in the utterance, whose name contains
/// what remains after dropping filler and numbers, or whose spoken alias
/// appears in the utterance.
pub fn spoken_item<'m>(text: &str, menu: &'m MenuCatalog) -> Option<&'m MenuItem> {
    let remainder = words(text)
        .filter(|w| !FILLER_WORDS.contains(w) && !is_quantity_token(w))
        .collect::<Vec<_>>()
        .join(" ");

    menu.items().iter().find(|item| {
        let name = item.name.to_lowercase();
        text.contains(&name)
            || (!remainder.is_empty() && name.contains(&remainder))
            || item.aliases.iter().any(|alias| text.contains(alias.as_str()))
    })
}
