//! Decorative number tickers shown on the landing page.
//!
//! Values are drawn from a caller-supplied uniform `[0, 1)` source so the
//! browser can feed `Math.random` while tests feed fixed sequences. These
//! numbers are pseudorandom and only illustrate the API.

use std::collections::VecDeque;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickerFormat {
    Hex,
    Decimal,
    Binary,
}

const DIGITS: usize = 6;

impl TickerFormat {
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Hex => "FFFFFF",
            Self::Decimal => "123456",
            Self::Binary => "010101",
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Self::Hex => "0x",
            Self::Decimal => "00",
            Self::Binary => "0b",
        }
    }

    /// Draw a fresh six-character value in uppercase digits.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn sample(self, next: &mut impl FnMut() -> f64) -> String {
        match self {
            Self::Hex => (0..DIGITS).map(|_| digit(next(), 16)).collect(),
            Self::Binary => (0..DIGITS).map(|_| digit(next(), 2)).collect(),
            Self::Decimal => {
                let value = (100_000.0 + next().clamp(0.0, 0.999_999) * 900_000.0).floor() as u32;
                value.to_string()
            }
        }
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn digit(sample: f64, radix: u32) -> char {
    let value = (sample.clamp(0.0, 0.999_999) * f64::from(radix)).floor() as u32;
    std::char::from_digit(value, radix).map_or('0', |c| c.to_ascii_uppercase())
}

/// A ticker that reveals each new sample one character per tick, left to
/// right, over the previous value.
#[derive(Clone, Debug)]
pub struct Ticker {
    format: TickerFormat,
    text: Vec<char>,
    pending: VecDeque<char>,
}

impl Ticker {
    pub fn new(format: TickerFormat) -> Self {
        Self { format, text: format.placeholder().chars().collect(), pending: VecDeque::new() }
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    /// Advance by one character, drawing a new sample once the previous one
    /// is fully shown.
    pub fn tick(&mut self, next: &mut impl FnMut() -> f64) -> String {
        if self.pending.is_empty() {
            self.pending.extend(self.format.sample(next).chars());
        }
        if let Some(c) = self.pending.pop_front() {
            let position = self.text.len().saturating_sub(self.pending.len() + 1);
            if let Some(slot) = self.text.get_mut(position) {
                *slot = c;
            }
        }
        self.text()
    }
}
