//! Finite-state scanner for JSON number tokens.
//!
//! The json.org number grammar (optional `-`, an integer part that is `0` or
//! a nonzero-leading digit run, optional `.` fraction, optional `e`/`E`
//! exponent with optional sign) is recognized by an explicit automaton.
//! States that end an integer-only form accept as [`JsonValue::Integer`];
//! states past a fraction or exponent accept as [`JsonValue::Float`].
//!
//! The scanner consumes characters until no transition applies or the input
//! ends. If the last state was accepting, the rejecting character is pushed
//! back (it belongs to the surrounding grammar, e.g. `,` or `}`) and the
//! consumed span is converted with the standard library's text-to-number
//! parsing. Otherwise the token is a dead partial form (`1.`, `1e`, `--1`)
//! and the scanner reports an invalid-number diagnostic.

use crate::cursor::Cursor;
use crate::error::{JsonError, Result};
use crate::types::JsonValue;

/// Scanner states. `Zero` and `IntDigits` accept as integers; `FracDigits`
/// and `ExpDigits` accept as floats; everything else is a partial form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Minus,
    Zero,
    LeadingZero,
    IntDigits,
    Dot,
    FracDigits,
    ExpMark,
    ExpSign,
    ExpDigits,
}

impl State {
    fn transition(self, c: char) -> Option<State> {
        use State::*;
        match (self, c) {
            (Start, '-') => Some(Minus),
            (Start | Minus, '0') => Some(Zero),
            (Start | Minus, '1'..='9') => Some(IntDigits),
            // A digit run after a leading zero is consumed but can never
            // reach an accepting state again, so `01` fails as a token
            // instead of scanning as `0` with trailing input.
            (Zero | LeadingZero, '0'..='9') => Some(LeadingZero),
            (Zero | IntDigits, '.') => Some(Dot),
            (Zero | IntDigits | FracDigits, 'e' | 'E') => Some(ExpMark),
            (IntDigits, '0'..='9') => Some(IntDigits),
            (Dot | FracDigits, '0'..='9') => Some(FracDigits),
            (ExpMark, '+' | '-') => Some(ExpSign),
            (ExpMark | ExpSign | ExpDigits, '0'..='9') => Some(ExpDigits),
            _ => None,
        }
    }

    fn accepts_integer(self) -> bool {
        matches!(self, State::Zero | State::IntDigits)
    }

    fn accepts_float(self) -> bool {
        matches!(self, State::FracDigits | State::ExpDigits)
    }
}

/// Consume the longest valid number token from the cursor and convert it.
pub(crate) fn scan(cursor: &mut Cursor<'_>) -> Result<JsonValue> {
    let mut state = State::Start;
    let mut span = String::new();

    while let Some(c) = cursor.next() {
        match state.transition(c) {
            Some(next) => {
                span.push(c);
                state = next;
            }
            None => {
                cursor.pushback(c);
                break;
            }
        }
    }

    convert(&span, state, cursor.line())
}

fn convert(span: &str, state: State, line: usize) -> Result<JsonValue> {
    if state.accepts_integer() {
        // An integer wider than i64 has no exact representation here, so it
        // is rejected rather than silently reclassified as a float.
        span.parse::<i64>()
            .map(JsonValue::Integer)
            .map_err(|_| invalid_number(line))
    } else if state.accepts_float() {
        span.parse::<f64>()
            .map(JsonValue::Float)
            .map_err(|_| invalid_number(line))
    } else {
        Err(invalid_number(line))
    }
}

fn invalid_number(line: usize) -> JsonError {
    JsonError::Syntax {
        line,
        message: "Invalid number".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::scan;
    use crate::cursor::Cursor;
    use crate::error::JsonError;
    use crate::types::JsonValue;

    fn scan_str(input: &str) -> Result<JsonValue, JsonError> {
        let mut cursor = Cursor::new(input);
        scan(&mut cursor)
    }

    fn assert_invalid(input: &str) {
        match scan_str(input) {
            Err(JsonError::Syntax { message, .. }) => assert_eq!(message, "Invalid number"),
            other => panic!("expected invalid number for {input:?}, got {other:?}"),
        }
    }

    #[test]
    fn zero_is_an_integer() {
        assert_eq!(scan_str("0").unwrap(), JsonValue::Integer(0));
    }

    #[test]
    fn negative_zero_is_an_integer() {
        assert_eq!(scan_str("-0").unwrap(), JsonValue::Integer(0));
    }

    #[test]
    fn digit_runs_are_integers() {
        assert_eq!(scan_str("123").unwrap(), JsonValue::Integer(123));
        assert_eq!(scan_str("-9041").unwrap(), JsonValue::Integer(-9041));
    }

    #[test]
    fn fractions_are_floats() {
        assert_eq!(scan_str("3.14").unwrap(), JsonValue::Float(3.14));
        assert_eq!(scan_str("-17.5").unwrap(), JsonValue::Float(-17.5));
        assert_eq!(scan_str("0.25").unwrap(), JsonValue::Float(0.25));
    }

    #[test]
    fn exponents_are_floats() {
        assert_eq!(scan_str("1e10").unwrap(), JsonValue::Float(1e10));
        assert_eq!(scan_str("1.5E-3").unwrap(), JsonValue::Float(1.5e-3));
        assert_eq!(scan_str("2E+4").unwrap(), JsonValue::Float(2e4));
        assert_eq!(scan_str("0e0").unwrap(), JsonValue::Float(0.0));
    }

    #[test]
    fn leading_zero_forms_are_rejected() {
        assert_invalid("01");
        assert_invalid("-01");
        assert_invalid("007");
        assert_invalid("01.5");
    }

    #[test]
    fn dead_partial_forms_are_rejected() {
        assert_invalid("1.");
        assert_invalid(".5");
        assert_invalid("1e");
        assert_invalid("1e+");
        assert_invalid("--1");
        assert_invalid("-");
        assert_invalid("");
    }

    #[test]
    fn integer_overflow_is_rejected() {
        assert_invalid("99999999999999999999");
    }

    #[test]
    fn rejecting_character_is_pushed_back() {
        let mut cursor = Cursor::new("42,7");
        assert_eq!(scan(&mut cursor).unwrap(), JsonValue::Integer(42));
        assert_eq!(cursor.next(), Some(','));
    }

    #[test]
    fn token_ends_at_whitespace() {
        let mut cursor = Cursor::new("2.5 }");
        assert_eq!(scan(&mut cursor).unwrap(), JsonValue::Float(2.5));
        assert_eq!(cursor.next_nonspace(), Some('}'));
    }
}
