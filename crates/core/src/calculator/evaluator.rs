use rust_decimal::Decimal;

use super::tokenizer::{is_operator_char, parse_number, tokenize, Operator, Token};

fn is_allowed_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.' || c == ' ' || is_operator_char(c)
}

/// Evaluates a live-typed arithmetic expression.
///
/// Characters outside `0-9 . + - * / space` are stripped first. A single
/// trailing operator is ignored (`"10+"` evaluates as `"10"`) and a trailing
/// decimal point reads as `.0`. Multiplication and division bind tighter than
/// addition and subtraction; there are no parentheses.
///
/// Returns `None` for empty or malformed input and for division by zero.
pub fn evaluate(expression: &str) -> Option<Decimal> {
    let sanitized: String = expression.chars().filter(|c| is_allowed_char(*c)).collect();
    let trimmed = sanitized.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.strip_suffix(is_operator_char) {
        Some(partial) => evaluate_core(partial.trim()),
        None => evaluate_core(trimmed),
    }
}

fn evaluate_core(input: &str) -> Option<Decimal> {
    let last = input.chars().last()?;

    let owned;
    let input = if last == '.' {
        owned = format!("{}0", input);
        owned.as_str()
    } else if !last.is_ascii_digit() {
        return None;
    } else {
        input
    };

    evaluate_tokens(&tokenize(input)?)
}

/// Folds `number (operator number)*` with two precedence levels.
///
/// `total` accumulates finished additive terms, `term` the product/quotient
/// currently being built.
fn evaluate_tokens(tokens: &[Token]) -> Option<Decimal> {
    let mut iter = tokens.iter();

    let mut total = Decimal::ZERO;
    let mut pending = Operator::Add;
    let mut term = next_number(iter.next())?;

    loop {
        let op = match iter.next() {
            None => return pending.apply(total, term),
            Some(Token::Operator(op)) => *op,
            Some(Token::Number(_)) => return None,
        };
        let rhs = next_number(iter.next())?;

        if op.binds_tighter() {
            term = op.apply(term, rhs)?;
        } else {
            total = pending.apply(total, term)?;
            pending = op;
            term = rhs;
        }
    }
}

fn next_number(token: Option<&Token>) -> Option<Decimal> {
    match token {
        Some(Token::Number(value)) => Some(*value),
        _ => None,
    }
}

/// Parses a bare decimal literal, no operators and no sign.
pub fn parse_literal(literal: &str) -> Option<Decimal> {
    parse_number(literal.trim())
}

/// Canonical rendering used when a result is written back into the buffer.
///
/// Integral values have no fractional part (`14`, not `14.0`); others keep
/// their natural expansion without trailing zeros.
pub fn render_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_empty_and_blank_are_invalid() {
        assert_eq!(evaluate(""), None);
        assert_eq!(evaluate("   "), None);
        assert_eq!(evaluate("abc"), None);
    }

    #[test]
    fn test_trailing_operator_is_ignored() {
        assert_eq!(evaluate("10+"), Some(dec!(10)));
        assert_eq!(evaluate("10+"), evaluate("10"));
        assert_eq!(evaluate("10 * "), Some(dec!(10)));
    }

    #[test]
    fn test_only_one_trailing_operator_is_ignored() {
        assert_eq!(evaluate("10+-"), None);
        assert_eq!(evaluate("+"), None);
    }

    #[test]
    fn test_trailing_decimal_point() {
        assert_eq!(evaluate("10."), Some(dec!(10.0)));
        assert_eq!(evaluate("2+3."), Some(dec!(5)));
        assert_eq!(evaluate("0."), Some(Decimal::ZERO));
    }

    #[test]
    fn test_precedence_without_parentheses() {
        assert_eq!(evaluate("2+3*4"), Some(dec!(14)));
        assert_eq!(evaluate("10-4/2"), Some(dec!(8)));
        assert_eq!(evaluate("2*3+4*5"), Some(dec!(26)));
        assert_eq!(evaluate("100/10/2"), Some(dec!(5)));
        assert_eq!(evaluate("10-3-2"), Some(dec!(5)));
        assert_eq!(evaluate("(2+3)*4"), Some(dec!(14)));
    }

    #[test]
    fn test_exact_decimal_arithmetic() {
        assert_eq!(evaluate("0.1+0.2"), Some(dec!(0.3)));
        assert_eq!(evaluate("1.10*3"), Some(dec!(3.3)));
        assert_eq!(evaluate("10/4"), Some(dec!(2.5)));
    }

    #[test]
    fn test_division_by_zero_is_invalid() {
        assert_eq!(evaluate("5/0"), None);
        assert_eq!(evaluate("5/0.0"), None);
        assert_eq!(evaluate("1+5/0*2"), None);
    }

    #[test]
    fn test_sanitization_strips_foreign_characters() {
        assert_eq!(evaluate("$1,000"), Some(dec!(1000)));
        assert_eq!(evaluate("12 EUR + 3"), Some(dec!(15)));
    }

    #[test]
    fn test_malformed_expressions_are_invalid() {
        assert_eq!(evaluate("1..2"), None);
        assert_eq!(evaluate("*5"), None);
        assert_eq!(evaluate("5**2"), None);
        assert_eq!(evaluate("1 2"), None);
    }

    #[test]
    fn test_bare_decimal_point_inside_expression_is_invalid() {
        assert_eq!(evaluate("5+.+3"), None);
        assert_eq!(evaluate(".*2"), None);
        // At the very end it still reads as a pending fraction.
        assert_eq!(evaluate("5+."), Some(dec!(5)));
        assert_eq!(evaluate("."), Some(Decimal::ZERO));
    }

    #[test]
    fn test_negative_leading_literal() {
        assert_eq!(evaluate("-5"), Some(dec!(-5)));
        assert_eq!(evaluate("-5*2+1"), Some(dec!(-9)));
    }

    #[test]
    fn test_overflow_is_invalid() {
        let big = "79228162514264337593543950335";
        assert_eq!(evaluate(&format!("{}*10", big)), None);
    }

    #[test]
    fn test_parse_literal() {
        assert_eq!(parse_literal("10"), Some(dec!(10)));
        assert_eq!(parse_literal(" 2.5 "), Some(dec!(2.5)));
        assert_eq!(parse_literal("1+2"), None);
        assert_eq!(parse_literal(""), None);
        assert_eq!(parse_literal("-3"), None);
    }

    #[test]
    fn test_render_decimal() {
        assert_eq!(render_decimal(dec!(14)), "14");
        assert_eq!(render_decimal(dec!(14.000)), "14");
        assert_eq!(render_decimal(dec!(2.50)), "2.5");
        assert_eq!(render_decimal(dec!(-0.125)), "-0.125");
        assert_eq!(render_decimal(dec!(20.0)), "20");
    }
}
