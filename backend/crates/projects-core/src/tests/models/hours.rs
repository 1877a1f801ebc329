use crate::{CoreError, HOURS_SCALE, parse_hours, to_hours_scale, try_hours_scale};

use std::str::FromStr;

use googletest::prelude::*;
use rust_decimal::Decimal;

fn scaled(raw: &str) -> String {
    to_hours_scale(Decimal::from_str(raw).unwrap()).to_string()
}

#[test]
fn given_whole_number_when_scaled_then_padded_to_two_places() {
    assert_that!(scaled("12"), eq("12.00"));
    assert_that!(scaled("0"), eq("0.00"));
}

#[test]
fn given_one_fractional_digit_when_scaled_then_padded() {
    assert_that!(scaled("7.5"), eq("7.50"));
}

#[test]
fn given_extra_digits_when_scaled_then_rounded_half_away_from_zero() {
    assert_that!(scaled("3.456"), eq("3.46"));
    assert_that!(scaled("3.455"), eq("3.46"));
    assert_that!(scaled("3.454"), eq("3.45"));
    assert_that!(scaled("-1.005"), eq("-1.01"));
    assert_that!(scaled("2.345"), eq("2.35"));
}

#[test]
fn given_any_value_when_scaled_then_scale_is_fixed() {
    for raw in ["1", "1.1", "1.12", "1.123", "99999.9999"] {
        let value = to_hours_scale(Decimal::from_str(raw).unwrap());
        assert_that!(value.scale(), eq(HOURS_SCALE));
    }
}

#[test]
fn given_scientific_notation_when_parsed_then_scaled_value() {
    // When
    let result = parse_hours("1e2");

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(result.unwrap().to_string(), eq("100.00"));
}

#[test]
fn given_plain_decimal_when_parsed_then_scaled_value() {
    let result = parse_hours("10").unwrap();

    assert_that!(result.to_string(), eq("10.00"));
}

#[test]
fn given_text_when_parsed_then_validation_error_names_input() {
    // When
    let result = parse_hours("abc");

    // Then
    assert_that!(result, err(anything()));
    match result.unwrap_err() {
        CoreError::Validation { message, .. } => {
            assert_that!(message, eq("abc is not a valid decimal number."));
        }
    }
}

#[test]
fn given_two_decimal_points_when_parsed_then_error() {
    assert_that!(parse_hours("1.2.3"), err(anything()));
}

#[test]
fn given_value_too_wide_for_two_places_when_parsed_then_validation_error() {
    for raw in [
        "79228162514264337593543950335",
        "7922816251426433759354395033.5",
    ] {
        // When
        let result = parse_hours(raw);

        // Then
        match result {
            Err(CoreError::Validation { message, .. }) => {
                assert_that!(message, eq(format!("{raw} is not a valid decimal number.").as_str()));
            }
            Ok(value) => panic!("{raw} parsed to {value} at scale {}", value.scale()),
        }
    }
}

#[test]
fn given_widest_value_with_two_places_when_parsed_then_accepted() {
    let result = parse_hours("792281625142643375935439503.35").unwrap();

    assert_that!(result.scale(), eq(HOURS_SCALE));
}

#[test]
fn given_value_too_wide_for_two_places_when_checked_then_none() {
    let value = Decimal::from_str("79228162514264337593543950335").unwrap();

    assert_that!(try_hours_scale(value), none());
}

#[test]
fn given_digit_separators_when_parsed_then_validation_error() {
    for raw in ["1_000", "1_2.5_0", "_1", "1.5_"] {
        assert_that!(parse_hours(raw), err(anything()));
    }
}

#[test]
fn given_signed_and_exponent_forms_when_parsed_then_accepted() {
    assert_that!(parse_hours("+1.5").unwrap().to_string(), eq("1.50"));
    assert_that!(parse_hours("-2").unwrap().to_string(), eq("-2.00"));
    assert_that!(parse_hours("1.25e1").unwrap().to_string(), eq("12.50"));
}
