use rust_decimal::Decimal;
use std::str::FromStr;

/// Binary arithmetic operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Multiplication and division bind tighter than addition and subtraction.
    pub fn binds_tighter(&self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    /// Applies the operator with checked decimal arithmetic.
    ///
    /// Returns `None` on overflow and on division by zero.
    pub fn apply(&self, lhs: Decimal, rhs: Decimal) -> Option<Decimal> {
        match self {
            Self::Add => lhs.checked_add(rhs),
            Self::Subtract => lhs.checked_sub(rhs),
            Self::Multiply => lhs.checked_mul(rhs),
            Self::Divide => lhs.checked_div(rhs),
        }
    }
}

pub fn is_operator_char(c: char) -> bool {
    Operator::from_char(c).is_some()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    Number(Decimal),
    Operator(Operator),
}

/// Parses a single numeric literal (`"12"`, `"12.5"`, `".5"`, `"12."`).
///
/// A literal needs at least one digit. Exponents, signs and grouping
/// separators are not literals here.
pub(crate) fn parse_number(literal: &str) -> Option<Decimal> {
    if !literal.chars().all(|c| c.is_ascii_digit() || c == '.')
        || !literal.chars().any(|c| c.is_ascii_digit())
    {
        return None;
    }

    let mut normalized = String::with_capacity(literal.len() + 2);
    if literal.starts_with('.') {
        normalized.push('0');
    }
    normalized.push_str(literal);
    if literal.ends_with('.') {
        normalized.push('0');
    }

    Decimal::from_str(&normalized).ok()
}

/// Splits an already sanitized expression into tokens.
///
/// A `-` directly in front of the very first literal is read as its sign, so a
/// solved negative result (`"-5"`) stays evaluable. Everywhere else `-` is the
/// subtraction operator. Spaces only separate tokens.
pub fn tokenize(input: &str) -> Option<Vec<Token>> {
    let chars: Vec<char> = input.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let leading_sign = c == '-'
            && tokens.is_empty()
            && chars
                .get(i + 1)
                .is_some_and(|next| next.is_ascii_digit() || *next == '.');

        if c.is_ascii_digit() || c == '.' || leading_sign {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let literal: String = chars[start..i].iter().collect();
            let value = match literal.strip_prefix('-') {
                Some(magnitude) => -parse_number(magnitude)?,
                None => parse_number(&literal)?,
            };
            tokens.push(Token::Number(value));
            continue;
        }

        tokens.push(Token::Operator(Operator::from_char(c)?));
        i += 1;
    }

    Some(tokens)
}
