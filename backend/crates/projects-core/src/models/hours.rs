//! Fixed-scale hour values.
//!
//! Estimated and actual hours are always held at exactly two fractional
//! digits. Rounding is half away from zero (`3.455` -> `3.46`,
//! `-1.005` -> `-1.01`); shorter values are padded (`12` -> `12.00`).

use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits kept for hour values.
pub const HOURS_SCALE: u32 = 2;

/// Round and pad a decimal to exactly [`HOURS_SCALE`] fractional digits.
pub fn to_hours_scale(value: Decimal) -> Decimal {
    let mut scaled =
        value.round_dp_with_strategy(HOURS_SCALE, RoundingStrategy::MidpointAwayFromZero);
    // round_dp never widens the scale, so pad short values here
    scaled.rescale(HOURS_SCALE);
    scaled
}

/// Scale a decimal to [`HOURS_SCALE`], or `None` when the value has too many
/// integer digits to carry two fractional digits.
pub fn try_hours_scale(value: Decimal) -> Option<Decimal> {
    let scaled = to_hours_scale(value);
    (scaled.scale() == HOURS_SCALE).then_some(scaled)
}

/// Parse plain (`12.5`) or scientific (`1.25e1`) notation into a scale-2 value.
///
/// Only ASCII digits, a sign, `.` and an exponent marker are accepted, so digit
/// separators such as `1_000` are rejected.
#[track_caller]
pub fn parse_hours(raw: &str) -> CoreErrorResult<Decimal> {
    let location = Location::caller();
    let invalid = || CoreError::Validation {
        message: format!("{raw} is not a valid decimal number."),
        location: ErrorLocation::from(location),
    };

    if raw.is_empty() || !raw.chars().all(is_decimal_char) {
        return Err(invalid());
    }

    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
        .and_then(try_hours_scale)
        .ok_or_else(invalid)
}

fn is_decimal_char(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')
}
