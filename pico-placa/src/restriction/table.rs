//! Static restriction data for Quito.
//!
//! Weekday to forbidden final digit, the peak windows during which the
//! restriction applies, and the plate categories exempt from it.

use std::fmt;

use chrono::Weekday;

use crate::domain::{ClockTime, Plate};

/// Second plate letters identifying exempt vehicle categories
/// (official, government, municipal, diplomatic and similar).
pub const EXEMPT_SECOND_LETTERS: [char; 6] = ['A', 'U', 'Z', 'E', 'X', 'M'];

/// A closed interval of time during which circulation is restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakWindow {
    start_mins: u32,
    end_mins: u32,
}

impl PeakWindow {
    /// A window from `start` to `end` (hour, minute), both inclusive.
    pub const fn new(start: (u32, u32), end: (u32, u32)) -> Self {
        Self {
            start_mins: start.0 * 60 + start.1,
            end_mins: end.0 * 60 + end.1,
        }
    }

    /// Whether `time` falls inside the window, boundaries included.
    pub fn contains(&self, time: ClockTime) -> bool {
        let mins = time.minutes_from_midnight();
        self.start_mins <= mins && mins <= self.end_mins
    }
}

impl fmt::Display for PeakWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}-{:02}:{:02}",
            self.start_mins / 60,
            self.start_mins % 60,
            self.end_mins / 60,
            self.end_mins % 60
        )
    }
}

/// Morning and evening peak windows.
const QUITO_WINDOWS: [PeakWindow; 2] = [
    PeakWindow::new((7, 0), (9, 30)),
    PeakWindow::new((16, 0), (19, 30)),
];

/// Restriction rules for a city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestrictionTable {
    windows: Vec<PeakWindow>,
}

impl RestrictionTable {
    /// The Quito table.
    pub fn quito() -> Self {
        Self {
            windows: QUITO_WINDOWS.to_vec(),
        }
    }

    /// Final digits that may not circulate during peak hours on `weekday`.
    pub fn forbidden_digits(&self, weekday: Weekday) -> &'static [u8] {
        match weekday {
            Weekday::Mon => &[1, 2],
            Weekday::Tue => &[3, 4],
            Weekday::Wed => &[5, 6],
            Weekday::Thu => &[7, 8],
            Weekday::Fri => &[9, 0],
            Weekday::Sat | Weekday::Sun => &[],
        }
    }

    /// Whether a plate ending in `digit` is restricted on `weekday`.
    pub fn is_restricted_digit(&self, weekday: Weekday, digit: u8) -> bool {
        self.forbidden_digits(weekday).contains(&digit)
    }

    /// The peak windows.
    pub fn windows(&self) -> &[PeakWindow] {
        &self.windows
    }

    /// Whether `time` falls inside any peak window.
    pub fn is_peak(&self, time: ClockTime) -> bool {
        self.windows.iter().any(|w| w.contains(time))
    }

    /// Whether the plate's category is exempt from the restriction.
    ///
    /// Two-letter plates are exempt, as are plates whose second letter is
    /// one of [`EXEMPT_SECOND_LETTERS`].
    pub fn is_exempt_plate(&self, plate: &Plate) -> bool {
        plate.prefix().len() == 2 || EXEMPT_SECOND_LETTERS.contains(&plate.second_letter())
    }
}

impl Default for RestrictionTable {
    fn default() -> Self {
        Self::quito()
    }
}
