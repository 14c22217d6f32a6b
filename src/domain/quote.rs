//! Motivational quote deck

use serde::Deserialize;

/// A quote with its attribution
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    pub fn new(text: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            author: author.into(),
        }
    }
}

/// The built-in quote deck, used when no quotes are configured
pub fn builtin_quotes() -> Vec<Quote> {
    vec![
        Quote::new(
            "The only limit to our realization of tomorrow is our doubts of today.",
            "Franklin D. Roosevelt",
        ),
        Quote::new(
            "It's not that I'm so smart, it's just that I stay with problems longer.",
            "Albert Einstein",
        ),
        Quote::new(
            "Failure is simply the opportunity to begin again, this time more intelligently.",
            "Henry Ford",
        ),
        Quote::new(
            "The mind is just like a muscle - the more you exercise it, the stronger it gets.",
            "Jordan Peterson",
        ),
        Quote::new(
            "You don't have to be great to start, but you have to start to be great.",
            "Zig Ziglar",
        ),
        Quote::new(
            "Challenges are what make life interesting. Overcoming them is what makes life meaningful.",
            "Joshua J. Marine",
        ),
        Quote::new(
            "The more you challenge yourself, the more you grow.",
            "Unknown",
        ),
        Quote::new(
            "Effort is what ignites that ability and turns it into accomplishment.",
            "Carol Dweck",
        ),
    ]
}

/// Advance a cursor one step through a deck of `deck_len` quotes,
/// wrapping back to the start after the last one.
pub fn advance(cursor: usize, deck_len: usize) -> usize {
    if deck_len == 0 {
        return 0;
    }
    (cursor + 1) % deck_len
}
