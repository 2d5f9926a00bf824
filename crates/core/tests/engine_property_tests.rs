//! Property-based integration tests for expression evaluation and the keypad.
//!
//! These tests check properties that must hold for any key sequence or
//! expression, using `proptest` for random case generation.

use betterconvert_core::calculator::Operator;
use betterconvert_core::{convert, evaluate, render_decimal, Currency, InputController, Key};
use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;

// =============================================================================
// Generators
// =============================================================================

fn arb_operator() -> impl Strategy<Value = Operator> {
    prop_oneof![
        Just(Operator::Add),
        Just(Operator::Subtract),
        Just(Operator::Multiply),
        Just(Operator::Divide),
    ]
}

/// Any key the keypad can send.
fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        4 => proptest::char::range('0', '9').prop_map(Key::Digit),
        1 => Just(Key::DecimalPoint),
        2 => arb_operator().prop_map(Key::Operator),
        1 => Just(Key::Clear),
        1 => Just(Key::Equals),
        1 => Just(Key::Percent),
        1 => Just(Key::Delete),
    ]
}

/// A well-formed expression of non-zero literals, e.g. `12+7*305`.
fn arb_expression() -> impl Strategy<Value = String> {
    (
        "[1-9][0-9]{0,5}",
        proptest::collection::vec((arb_operator(), "[1-9][0-9]{0,5}"), 0..6),
    )
        .prop_map(|(first, rest)| {
            let mut expression = first;
            for (op, literal) in rest {
                expression.push(op.as_char());
                expression.push_str(&literal);
            }
            expression
        })
}

fn has_adjacent_operators(buffer: &str) -> bool {
    let chars: Vec<char> = buffer.chars().collect();
    chars
        .windows(2)
        .any(|pair| Operator::from_char(pair[0]).is_some() && Operator::from_char(pair[1]).is_some())
}

// =============================================================================
// Evaluator properties
// =============================================================================

proptest! {
    #[test]
    fn prop_integer_literal_evaluates_to_itself(n in 0u64..1_000_000_000_000u64) {
        prop_assert_eq!(evaluate(&n.to_string()), Some(Decimal::from(n)));
    }

    #[test]
    fn prop_trailing_operator_is_ignored(expression in arb_expression(), op in arb_operator()) {
        let extended = format!("{}{}", expression, op.as_char());
        prop_assert_eq!(evaluate(&extended), evaluate(&expression));
    }

    #[test]
    fn prop_evaluate_never_panics(input in ".{0,40}") {
        let _ = evaluate(&input);
    }

    #[test]
    fn prop_rendered_result_evaluates_back(expression in arb_expression()) {
        if let Some(value) = evaluate(&expression) {
            prop_assert_eq!(evaluate(&render_decimal(value)), Some(value));
        }
    }
}

// =============================================================================
// Keypad properties
// =============================================================================

proptest! {
    #[test]
    fn prop_buffer_stays_well_formed(keys in proptest::collection::vec(arb_key(), 0..60)) {
        let mut controller = InputController::new();
        for key in keys {
            controller.press_key(key);
            prop_assert!(!controller.buffer().is_empty());
            prop_assert!(
                !has_adjacent_operators(controller.buffer()),
                "adjacent operators in {:?}",
                controller.buffer()
            );
        }
    }

    #[test]
    fn prop_solve_is_idempotent(keys in proptest::collection::vec(arb_key(), 0..40)) {
        let mut controller = InputController::new();
        for key in keys {
            controller.press_key(key);
        }
        controller.solve();
        let once = controller.buffer().to_string();
        controller.solve();
        prop_assert_eq!(controller.buffer(), once.as_str());
    }

    #[test]
    fn prop_calculated_value_tracks_buffer(keys in proptest::collection::vec(arb_key(), 0..40)) {
        let mut controller = InputController::new();
        for key in keys {
            controller.press_key(key);
            prop_assert_eq!(controller.calculated_value(), evaluate(controller.buffer()));
        }
    }
}

// =============================================================================
// Conversion properties
// =============================================================================

proptest! {
    #[test]
    fn prop_same_currency_is_identity(units in 0i64..1_000_000_000i64, scale in 0u32..6) {
        let amount = Decimal::new(units, scale);
        let currency = Currency::new("EUR", "Euro", "€")
            .unwrap()
            .with_rate(Decimal::new(9, 1), Utc::now());

        prop_assert_eq!(convert(amount, &currency, &currency.clone()), amount);
    }

    #[test]
    fn prop_conversion_without_rates_is_zero(units in 0i64..1_000_000_000i64) {
        let source = Currency::new("EUR", "Euro", "€").unwrap();
        let target = Currency::new("GBP", "British Pound", "£").unwrap();

        prop_assert_eq!(convert(Decimal::new(units, 2), &source, &target), Decimal::ZERO);
    }
}
