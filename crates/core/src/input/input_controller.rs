use rust_decimal::Decimal;
use std::sync::Arc;

use super::key::Key;
use crate::calculator::{evaluate, parse_literal, render_decimal, Operator};
use crate::constants::{
    DEFAULT_BUFFER, DISPLAY_DECIMAL_PRECISION, PERCENT_SUFFIX, RATE_DISPLAY_DECIMAL_PRECISION,
};
use crate::events::{DomainEvent, DomainEventSink, NoOpDomainEventSink};
use crate::fx::{currency_converter, Currency};
use crate::settings::EngineSettings;
use crate::utils::{format_decimal, NumberFormat};

/// Keypad state machine over an edit buffer and a currency pair.
///
/// The buffer is never empty (it falls back to `"0"`) and never holds two
/// operators in a row. After every mutation the buffer is re-evaluated and
/// re-converted synchronously, and a [`DomainEvent::ConversionUpdated`] is
/// emitted. While the buffer does not evaluate, the calculated value is
/// `None` and the converted amount is zero.
pub struct InputController {
    buffer: String,
    source: Option<Currency>,
    target: Option<Currency>,
    calculated_value: Option<Decimal>,
    converted_amount: Decimal,
    number_format: NumberFormat,
    amount_fraction_digits: u32,
    rate_fraction_digits: u32,
    event_sink: Arc<dyn DomainEventSink>,
}

impl Default for InputController {
    fn default() -> Self {
        Self::new()
    }
}

impl InputController {
    pub fn new() -> Self {
        Self {
            buffer: DEFAULT_BUFFER.to_string(),
            source: None,
            target: None,
            calculated_value: Some(Decimal::ZERO),
            converted_amount: Decimal::ZERO,
            number_format: NumberFormat::default(),
            amount_fraction_digits: DISPLAY_DECIMAL_PRECISION,
            rate_fraction_digits: RATE_DISPLAY_DECIMAL_PRECISION,
            event_sink: Arc::new(NoOpDomainEventSink),
        }
    }

    /// Starts a session with the configured default pair.
    ///
    /// Falls back to the first currency in display order (`order_index`, then
    /// code) for the source and the last one for the target when the
    /// configured codes are not in `currencies`.
    pub fn from_settings(settings: &EngineSettings, currencies: &[Currency]) -> Self {
        let pick = |code: &str| currencies.iter().find(|c| c.code == code).cloned();
        let by_order = |a: &&Currency, b: &&Currency| a.display_order().cmp(&b.display_order());
        let first = || currencies.iter().min_by(by_order).cloned();
        let last = || currencies.iter().max_by(by_order).cloned();

        let mut controller = Self::new();
        controller.amount_fraction_digits = settings.amount_fraction_digits;
        controller.rate_fraction_digits = settings.rate_fraction_digits;
        controller.source = pick(&settings.default_source_currency).or_else(first);
        controller.target = pick(&settings.default_target_currency).or_else(last);
        controller.recompute();
        controller
    }

    /// Sets the domain event sink for this controller.
    pub fn with_event_sink(mut self, event_sink: Arc<dyn DomainEventSink>) -> Self {
        self.event_sink = event_sink;
        self
    }

    pub fn with_number_format(mut self, number_format: NumberFormat) -> Self {
        self.number_format = number_format;
        self
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn calculated_value(&self) -> Option<Decimal> {
        self.calculated_value
    }

    pub fn converted_amount(&self) -> Decimal {
        self.converted_amount
    }

    pub fn source(&self) -> Option<&Currency> {
        self.source.as_ref()
    }

    pub fn target(&self) -> Option<&Currency> {
        self.target.as_ref()
    }

    /// Handles a keypad key.
    pub fn press_key(&mut self, key: Key) {
        match key {
            Key::Equals => self.solve(),
            Key::Percent => self.apply_percentage(),
            Key::Delete => self.delete(),
            Key::Clear => {
                self.buffer = DEFAULT_BUFFER.to_string();
                self.recompute();
            }
            Key::Digit(_) | Key::DecimalPoint | Key::Operator(_) => {
                self.append(key);
                self.recompute();
            }
        }
    }

    /// Handles a keypad label such as `"7"`, `"+"` or `"CLEAR"`.
    ///
    /// Returns `false` and leaves the state untouched for unknown labels.
    pub fn press_label(&mut self, label: &str) -> bool {
        match label.parse::<Key>() {
            Ok(key) => {
                self.press_key(key);
                true
            }
            Err(e) => {
                log::debug!("Ignoring keypad input: {}", e);
                false
            }
        }
    }

    /// Removes the last character, falling back to `"0"` when nothing is left.
    pub fn delete(&mut self) {
        self.buffer.pop();
        if self.buffer.is_empty() {
            self.buffer = DEFAULT_BUFFER.to_string();
        }
        self.recompute();
    }

    /// Replaces the buffer with the rendered result. No-op when it does not evaluate.
    pub fn solve(&mut self) {
        if let Some(result) = evaluate(&self.buffer) {
            self.buffer = render_decimal(result);
            self.recompute();
        }
    }

    /// Reinterprets the operand after the last operator as a percentage and solves.
    ///
    /// `A+B%` and `A-B%` take B percent of A; `A*B%` and `A/B%` use B/100.
    /// A buffer without an operator is divided by 100. The operand after the
    /// operator must be a bare literal; anything that does not parse leaves
    /// the buffer untouched.
    pub fn apply_percentage(&mut self) {
        let Some(result) = self.percentage_result() else {
            return;
        };
        self.buffer = render_decimal(result);
        self.recompute();
    }

    fn percentage_result(&self) -> Option<Decimal> {
        // A sign at position 0 belongs to the first operand.
        let pivot = self
            .buffer
            .char_indices()
            .rev()
            .filter(|(index, _)| *index > 0)
            .find_map(|(index, c)| Operator::from_char(c).map(|op| (index, op)));

        let Some((index, op)) = pivot else {
            return evaluate(&format!("{}{}", self.buffer, PERCENT_SUFFIX));
        };

        let part_a = &self.buffer[..index];
        let part_b = &self.buffer[index + op.as_char().len_utf8()..];
        let value_a = evaluate(part_a)?;
        let value_b = parse_literal(part_b)?;
        let percent = value_b.checked_div(Decimal::ONE_HUNDRED)?;

        let (op, new_b) = match op {
            Operator::Add | Operator::Subtract => {
                let share = value_a.checked_mul(percent)?;
                // Keep the rebuilt expression free of "+-" when A is negative.
                match (op, share.is_sign_negative() && !share.is_zero()) {
                    (Operator::Add, true) => (Operator::Subtract, share.abs()),
                    (Operator::Subtract, true) => (Operator::Add, share.abs()),
                    _ => (op, share),
                }
            }
            Operator::Multiply | Operator::Divide => (op, percent),
        };

        evaluate(&format!("{}{}{}", part_a, op.as_char(), render_decimal(new_b)))
    }

    /// Exchanges source and target; the buffer is untouched.
    pub fn swap_currencies(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
        self.recompute();
    }

    pub fn set_source(&mut self, currency: Currency) {
        self.source = Some(currency);
        self.recompute();
    }

    pub fn set_target(&mut self, currency: Currency) {
        self.target = Some(currency);
        self.recompute();
    }

    /// Restores a buffer, e.g. from a saved session.
    ///
    /// The text is replayed key by key (characters the keypad cannot produce
    /// are dropped), so the buffer invariants hold for any input. A leading
    /// `-` is kept as the sign of a previously solved negative result.
    pub fn set_buffer(&mut self, text: &str) {
        self.buffer = DEFAULT_BUFFER.to_string();
        for (i, c) in text.trim().chars().enumerate() {
            if i == 0 && c == '-' {
                self.buffer = c.to_string();
                continue;
            }
            let key = match c {
                '0'..='9' => Key::Digit(c),
                '.' => Key::DecimalPoint,
                _ => match Operator::from_char(c) {
                    Some(op) => Key::Operator(op),
                    None => continue,
                },
            };
            self.append(key);
        }
        self.recompute();
    }

    /// Rebinds the selected currencies to fresh copies, typically after a rate refresh.
    pub fn refresh_currencies(&mut self, currencies: &[Currency]) {
        let rebind = |selected: &mut Option<Currency>| {
            if let Some(current) = selected.as_ref() {
                if let Some(fresh) = currencies.iter().find(|c| c.code == current.code) {
                    *selected = Some(fresh.clone());
                }
            }
        };
        rebind(&mut self.source);
        rebind(&mut self.target);
        self.recompute();
    }

    /// Value of one source unit in the target currency, when both are selected.
    pub fn unit_rate(&self) -> Option<Decimal> {
        match (&self.source, &self.target) {
            (Some(source), Some(target)) => Some(currency_converter::unit_rate(source, target)),
            _ => None,
        }
    }

    /// The converted amount formatted for display.
    pub fn display_converted(&self) -> String {
        format_decimal(
            self.converted_amount,
            self.amount_fraction_digits,
            &self.number_format,
        )
    }

    /// `"1 JPY = 0.00667 USD"`, when both currencies are selected.
    pub fn display_unit_rate(&self) -> Option<String> {
        let (source, target) = (self.source.as_ref()?, self.target.as_ref()?);
        let rate = self.unit_rate()?;
        Some(format!(
            "1 {} = {} {}",
            source.code,
            format_decimal(rate, self.rate_fraction_digits, &self.number_format),
            target.code
        ))
    }

    /// Appends a digit, decimal point or operator.
    ///
    /// A digit replaces a lone `"0"`; an operator replaces a trailing operator.
    fn append(&mut self, key: Key) {
        let Some(c) = key.buffer_char() else {
            return;
        };
        if self.buffer == DEFAULT_BUFFER && matches!(key, Key::Digit(_)) {
            self.buffer = c.to_string();
            return;
        }
        if matches!(key, Key::Operator(_)) && self.ends_with_operator() {
            self.buffer.pop();
        }
        self.buffer.push(c);
    }

    fn ends_with_operator(&self) -> bool {
        self.buffer
            .chars()
            .last()
            .is_some_and(|last| Operator::from_char(last).is_some())
    }

    fn recompute(&mut self) {
        self.calculated_value = evaluate(&self.buffer);
        self.converted_amount = match (self.calculated_value, &self.source, &self.target) {
            (Some(value), Some(source), Some(target)) => {
                currency_converter::convert(value, source, target)
            }
            _ => Decimal::ZERO,
        };

        self.event_sink.emit(DomainEvent::conversion_updated(
            self.buffer.clone(),
            self.calculated_value,
            self.converted_amount,
            self.source.as_ref().map(|c| c.code.clone()),
            self.target.as_ref().map(|c| c.code.clone()),
        ));
    }
}
