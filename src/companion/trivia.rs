//! Trivia-of-the-day rotation.
use bevy::prelude::Resource;
use chrono::{Datelike, Local};

pub const TRIVIA: [&str; 30] = [
    "Did you know? A day on Venus is longer than its year!",
    "Trivia: The Moon is slowly drifting away from Earth—about 3.8 cm per year.",
    "Fun fact: Neutron stars can spin 600 times per second!",
    "Space trivia: Jupiter has 95 confirmed moons!",
    "Mind-blower: A spoonful of a neutron star weighs about 6 billion tons.",
    "Did you know? Mars has the tallest volcano in the solar system—Olympus Mons.",
    "Cool fact: Saturn could float in water due to its low density.",
    "Wanna know? There's a planet made of diamonds—it's called 55 Cancri e!",
    "Space tidbit: The Milky Way galaxy is on a collision course with Andromeda.",
    "Fact: One day on Mercury lasts 59 Earth days.",
    "Curious? The International Space Station orbits Earth every 90 minutes.",
    "The Moon has 'moonquakes' just like Earth has earthquakes!",
    "Saturn's rings are mostly made of ice and rock chunks.",
    "Astronauts grow up to 2 inches taller in space due to microgravity!",
    "A year on Neptune lasts 165 Earth years!",
    "The Sun makes up 99.86% of the mass in our solar system.",
    "There's a giant storm on Jupiter called the Great Red Spot—it's older than 300 years!",
    "The largest volcano in the solar system is Olympus Mons on Mars.",
    "Uranus orbits the Sun on its side—it basically rolls like a barrel.",
    "Light from the Sun takes about 8 minutes and 20 seconds to reach Earth.",
    "The Hubble Space Telescope has captured over 1.3 million observations!",
    "The farthest galaxy observed is over 13.4 billion light-years away.",
    "Pluto was reclassified as a dwarf planet in 2006.",
    "In 1977, we sent the Voyager Golden Record into space for aliens to discover.",
    "Jupiter's moon Europa might have an ocean under its icy surface.",
    "Mars has seasons, polar ice caps, and dust storms!",
    "The Kuiper Belt is a region beyond Neptune full of icy bodies.",
    "Some planets rain diamonds—like Neptune and Uranus!",
    "Our galaxy is estimated to contain 100–400 billion stars.",
    "It would take over 70,000 years to reach the nearest star (Proxima Centauri) with current spacecraft.",
];

/// Trivia for a calendar day: `TRIVIA[day_of_month % TRIVIA.len()]`.
pub fn trivia_for_day(day_of_month: u32) -> &'static str {
    TRIVIA[day_of_month as usize % TRIVIA.len()]
}

/// Source of the day-of-month used to pick trivia.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TriviaCalendar {
    /// Local wall-clock date.
    #[default]
    Local,
    Fixed(u32),
}

impl TriviaCalendar {
    pub fn day_of_month(self) -> u32 {
        match self {
            Self::Local => Local::now().day(),
            Self::Fixed(day) => day,
        }
    }
}
