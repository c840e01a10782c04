//! Text parser for human-entered coordinates.
//!
//! Accepted input, latitude first:
//!
//! ```text
//! [+|-|N|S] <value> [N|S]  [,|;]  [+|-|E|W] <value> [E|W]
//! ```
//!
//! where `<value>` is one of
//!
//! ```text
//! DDD[.DDDDD]                      decimal degrees
//! DD°[ MM[.MMM]'[ SS[.SSS]"]]      degrees, minutes, seconds
//! ```
//!
//! Whitespace is allowed between tokens but not inside a number. A
//! direction suffix overrides a leading sign; two direction letters on the
//! same value are rejected. `S` and `W` negate the value. Only the last
//! component of a degree/minute/second value may carry a fraction.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::{ParseError, ParseResult};
use super::types::{GeoCoord, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

const DEGREE_MARKS: [char; 2] = ['°', 'º'];
const MINUTE_MARKS: [char; 2] = ['\'', '′'];
const SECOND_MARKS: [char; 2] = ['"', '″'];
const SEPARATORS: [char; 2] = [',', ';'];

/// Settings controlling how lenient the parser is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseSettings {
    /// Accept a single `,` or `;` between latitude and longitude.
    pub allow_separator: bool,

    /// Reject latitude outside [-90, 90] and longitude outside [-180, 180].
    pub enforce_range: bool,
}

impl Default for ParseSettings {
    fn default() -> Self {
        Self {
            allow_separator: true,
            enforce_range: true,
        }
    }
}

/// Direction letters that belong to one axis.
#[derive(Debug, Clone, Copy)]
struct Hemispheres {
    positive: char,
    negative: char,
}

const LATITUDE: Hemispheres = Hemispheres {
    positive: 'N',
    negative: 'S',
};

const LONGITUDE: Hemispheres = Hemispheres {
    positive: 'E',
    negative: 'W',
};

/// Character cursor over the input, tracking byte positions.
struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    const fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn eat_any(&mut self, candidates: &[char]) -> bool {
        match self.peek() {
            Some(ch) if candidates.contains(&ch) => {
                self.pos += ch.len_utf8();
                true
            }
            _ => false,
        }
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn at_digit(&self) -> bool {
        self.peek().is_some_and(|ch| ch.is_ascii_digit())
    }

    fn unexpected(&self) -> ParseError {
        self.peek()
            .map_or(ParseError::UnexpectedEnd, |ch| ParseError::UnexpectedChar {
                ch,
                position: self.pos,
            })
    }

    /// Reads `digits[.digits]`, returning the value and whether it had a
    /// fractional part.
    fn number(&mut self) -> ParseResult<(f64, bool)> {
        if !self.at_digit() {
            return Err(self.unexpected());
        }

        let start = self.pos;
        while self.at_digit() {
            self.bump();
        }

        let mut fractional = false;
        if self.peek() == Some('.') {
            self.bump();
            if !self.at_digit() {
                return Err(ParseError::MalformedNumber(
                    self.text[start..self.pos].to_string(),
                ));
            }
            while self.at_digit() {
                self.bump();
            }
            fractional = true;
        }

        let token = &self.text[start..self.pos];
        token
            .parse::<f64>()
            .map(|value| (value, fractional))
            .map_err(|_| ParseError::MalformedNumber(token.to_string()))
    }

    /// Reads a number followed by one of `marks`, or nothing.
    ///
    /// The cursor is restored when the number is not followed by a mark, so
    /// the digits can be read again as the next value.
    fn marked_component(&mut self, marks: &[char]) -> ParseResult<Option<(f64, bool)>> {
        let checkpoint = self.pos;
        self.skip_whitespace();
        if !self.at_digit() {
            self.pos = checkpoint;
            return Ok(None);
        }

        let component = self.number()?;
        if self.eat_any(marks) {
            Ok(Some(component))
        } else {
            self.pos = checkpoint;
            Ok(None)
        }
    }

    /// Reads an unsigned magnitude in decimal or degree/minute/second form.
    fn magnitude(&mut self) -> ParseResult<f64> {
        let (degrees, mut fractional) = self.number()?;
        if !self.eat_any(&DEGREE_MARKS) {
            return Ok(degrees);
        }

        let mut value = degrees;
        let fraction_position = self.pos;

        if let Some((minutes, minutes_fractional)) = self.marked_component(&MINUTE_MARKS)? {
            if fractional {
                return Err(ParseError::UnexpectedChar {
                    ch: '\'',
                    position: fraction_position,
                });
            }
            if minutes >= 60.0 {
                return Err(ParseError::MinutesOutOfRange(minutes));
            }
            value += minutes / 60.0;
            fractional = minutes_fractional;

            let fraction_position = self.pos;
            if let Some((seconds, _)) = self.marked_component(&SECOND_MARKS)? {
                if fractional {
                    return Err(ParseError::UnexpectedChar {
                        ch: '"',
                        position: fraction_position,
                    });
                }
                if seconds >= 60.0 {
                    return Err(ParseError::SecondsOutOfRange(seconds));
                }
                value += seconds / 3600.0;
            }
        }

        Ok(value)
    }

    /// Reads one signed value with optional sign or direction hints.
    fn value(&mut self, hemispheres: Hemispheres) -> ParseResult<f64> {
        let mut negative = false;
        let mut prefix_direction = false;

        match self.peek() {
            Some('+') => {
                self.bump();
            }
            Some('-') => {
                self.bump();
                negative = true;
            }
            Some(ch) if ch == hemispheres.positive || ch == hemispheres.negative => {
                self.bump();
                negative = ch == hemispheres.negative;
                prefix_direction = true;
            }
            _ => {}
        }

        self.skip_whitespace();
        let magnitude = self.magnitude()?;
        self.skip_whitespace();

        if let Some(ch) = self.peek() {
            if ch == hemispheres.positive || ch == hemispheres.negative {
                if prefix_direction {
                    return Err(ParseError::ConflictingHints { position: self.pos });
                }
                self.bump();
                negative = ch == hemispheres.negative;
            }
        }

        Ok(if negative { -magnitude } else { magnitude })
    }
}

/// Parses coordinate text with the given settings.
///
/// # Errors
///
/// Returns a [`ParseError`] describing the first problem found. No partial
/// coordinate is ever produced.
pub fn parse_with(text: &str, settings: ParseSettings) -> ParseResult<GeoCoord> {
    let result = scan(text, settings);
    if let Err(err) = &result {
        log::debug!("rejected coordinate text {text:?}: {err}");
    }
    result
}

fn scan(text: &str, settings: ParseSettings) -> ParseResult<GeoCoord> {
    let mut scanner = Scanner::new(text);

    scanner.skip_whitespace();
    if scanner.peek().is_none() {
        return Err(ParseError::Empty);
    }

    let lat = scanner.value(LATITUDE)?;

    scanner.skip_whitespace();
    if settings.allow_separator && scanner.eat_any(&SEPARATORS) {
        scanner.skip_whitespace();
    }

    let lon = scanner.value(LONGITUDE)?;

    scanner.skip_whitespace();
    if scanner.peek().is_some() {
        return Err(scanner.unexpected());
    }

    if settings.enforce_range {
        if !(MIN_LAT..=MAX_LAT).contains(&lat) {
            return Err(ParseError::LatitudeOutOfRange(lat));
        }
        if !(MIN_LON..=MAX_LON).contains(&lon) {
            return Err(ParseError::LongitudeOutOfRange(lon));
        }
    }

    Ok(GeoCoord::new(lat, lon))
}

impl GeoCoord {
    /// Parses coordinate text with default settings.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text does not match the grammar or the
    /// result is out of range.
    ///
    /// # Examples
    ///
    /// ```
    /// use geocoord_core::GeoCoord;
    ///
    /// let plain = GeoCoord::parse("52.5200 13.4050").unwrap();
    /// let hinted = GeoCoord::parse("52.5200N 13.4050E").unwrap();
    /// assert_eq!(plain, hinted);
    ///
    /// let dms = GeoCoord::parse("52°31'12\" N 13°24'18\" E").unwrap();
    /// assert!((dms.lat() - 52.52).abs() < 1e-9);
    ///
    /// assert!(GeoCoord::parse("abc, def").is_err());
    /// ```
    pub fn parse(text: &str) -> ParseResult<Self> {
        parse_with(text, ParseSettings::default())
    }

    /// Parses coordinate text with explicit settings.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if the text does not match the grammar or, when
    /// range checks are enabled, the result is out of range.
    pub fn parse_with(text: &str, settings: ParseSettings) -> ParseResult<Self> {
        parse_with(text, settings)
    }
}

impl FromStr for GeoCoord {
    type Err = ParseError;

    fn from_str(s: &str) -> ParseResult<Self> {
        Self::parse(s)
    }
}
