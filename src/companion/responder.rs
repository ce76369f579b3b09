//! Ordered keyword table answering the explorer's questions.
use bevy::prelude::Resource;

use super::trivia::trivia_for_day;

/// What a matching rule answers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    Fixed(&'static str),
    TriviaOfTheDay,
}

/// Matches when any keyword is a substring of the lowercased query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordRule {
    pub keywords: &'static [&'static str],
    pub reply: Reply,
}

impl KeywordRule {
    const fn new(keywords: &'static [&'static str], reply: Reply) -> Self {
        Self { keywords, reply }
    }

    pub fn matches(&self, lowered_query: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowered_query.contains(keyword))
    }
}

pub const DEFAULT_REPLY: &str =
    "I am your AI companion to assist you in this journey minus the snacks, unfortunately.";

/// Rules in priority order; the first match wins.
pub const COMPANION_RULES: [KeywordRule; 17] = [
    KeywordRule::new(
        &["thanks", "thank"],
        Reply::Fixed("Always keen to help you! Even if we're lightyears away from a coffee break."),
    ),
    KeywordRule::new(
        &["moon"],
        Reply::Fixed("The Moon is Earth's lonely neighbor... and now your temporary roommate!"),
    ),
    KeywordRule::new(
        &["earth"],
        Reply::Fixed("Earth... sweet blue home. I bet you're missing gravity and samosas."),
    ),
    KeywordRule::new(
        &["sun"],
        Reply::Fixed("The Sun is hot, powerful, and definitely not a good tanning spot."),
    ),
    KeywordRule::new(
        &["spacesuit"],
        Reply::Fixed(
            "Your spacesuit is basically your life insurance right now. Also, it's not a fashion statement.",
        ),
    ),
    KeywordRule::new(
        &["gravity"],
        Reply::Fixed("Moon gravity is like a trampoline with manners—fun, but still dangerous."),
    ),
    KeywordRule::new(
        &["mission", "apollo"],
        Reply::Fixed("Apollo 11 walked so you could moonwalk—literally."),
    ),
    KeywordRule::new(
        &["what"],
        Reply::Fixed(
            "You are alone on the Moon. You have to roam around here until support arrives. Don't worry, I'm here for moral support (and sarcasm).",
        ),
    ),
    KeywordRule::new(
        &["oxygen"],
        Reply::Fixed("No oxygen here—unless you enjoy suffocating. Breathe through your suit, buddy!"),
    ),
    KeywordRule::new(
        &["food"],
        Reply::Fixed("Freeze-dried food: because nothing says luxury like powdered spaghetti."),
    ),
    KeywordRule::new(
        &["water"],
        Reply::Fixed("Water's precious—don't spill it! Not even for a dramatic moon scene."),
    ),
    KeywordRule::new(
        &["temperature"],
        Reply::Fixed("Hotter than a desert by day, colder than your ex's heart at night."),
    ),
    KeywordRule::new(
        &["support", "rescue"],
        Reply::Fixed("Help is on the way! Until then, talk to me—I'm cheaper than therapy."),
    ),
    KeywordRule::new(
        &["ai", "you"],
        Reply::Fixed("I'm your AI companion, your lunar BFF with zero legs but unlimited loyalty."),
    ),
    KeywordRule::new(
        &["lonely", "alone"],
        Reply::Fixed(
            "You're not alone I'm right here, being emotionally available and slightly sarcastic.",
        ),
    ),
    KeywordRule::new(
        &["joke"],
        Reply::Fixed("Why did the astronaut break up with the alien? Because they needed space!"),
    ),
    KeywordRule::new(&["trivia"], Reply::TriviaOfTheDay),
];

/// Pure string-in, string-out chat responder.
#[derive(Resource, Debug, Clone)]
pub struct KeywordResponder {
    rules: &'static [KeywordRule],
    fallback: &'static str,
}

impl KeywordResponder {
    pub fn new(rules: &'static [KeywordRule], fallback: &'static str) -> Self {
        Self { rules, fallback }
    }

    /// First matching rule in list order, case-insensitively; the fallback otherwise.
    pub fn respond(&self, query: &str, day_of_month: u32) -> String {
        let lowered = query.to_lowercase();

        match self.rules.iter().find(|rule| rule.matches(&lowered)) {
            Some(rule) => match rule.reply {
                Reply::Fixed(text) => text.to_string(),
                Reply::TriviaOfTheDay => trivia_for_day(day_of_month).to_string(),
            },
            None => self.fallback.to_string(),
        }
    }
}

impl Default for KeywordResponder {
    fn default() -> Self {
        Self::new(&COMPANION_RULES, DEFAULT_REPLY)
    }
}
