//! The divide-by-eleven calculator.

use crate::config::CALCULATOR;
use crate::domain::AppError;

/// Outcome of one calculator invocation
#[derive(Debug, Clone, PartialEq)]
pub enum CalcOutcome {
    Quotient(f64),
    Invalid(AppError),
}

impl CalcOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, CalcOutcome::Quotient(_))
    }

    /// Text for the result line: `= 2.0000`, or the validation message
    pub fn display_text(&self) -> String {
        match self {
            CalcOutcome::Quotient(q) if q.is_nan() => "= NaN".to_string(),
            CalcOutcome::Quotient(q) if q.is_infinite() => {
                if *q > 0.0 {
                    "= Infinity".to_string()
                } else {
                    "= -Infinity".to_string()
                }
            }
            // Fixed notation stops at 1e21; past that the shortest exponent form is shown
            CalcOutcome::Quotient(q) if q.abs() >= 1e21 => {
                format!("= {}", format!("{:e}", q).replace('e', "e+"))
            }
            // Adding zero turns -0 into 0
            CalcOutcome::Quotient(q) => format!("= {:.*}", CALCULATOR.decimals, q + 0.0),
            CalcOutcome::Invalid(_) => CALCULATOR.error_text.to_string(),
        }
    }
}

pub fn calculate(input: &str) -> CalcOutcome {
    match parse_number(input) {
        Some(value) => CalcOutcome::Quotient(value / CALCULATOR.divisor),
        None => CalcOutcome::Invalid(AppError::NotANumber(input.to_string())),
    }
}

/// Lenient number parsing: leading whitespace is skipped and the longest
/// numeric prefix wins, so `"22abc"` is 22 and `"abc"` is rejected.
pub fn parse_number(input: &str) -> Option<f64> {
    let text = input.trim_start();

    let (sign, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (-1.0, &text[1..]),
        Some(b'+') => (1.0, &text[1..]),
        _ => (1.0, text),
    };
    if unsigned.starts_with("Infinity") {
        return Some(sign * f64::INFINITY);
    }

    let end = numeric_prefix_len(unsigned);
    if end == 0 {
        return None;
    }
    unsigned[..end].parse::<f64>().ok().map(|v| sign * v)
}

/// Length of the longest `digits[.digits][e[+-]digits]` prefix that holds at least one digit
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let int_end = digits_from(0);
    let mut end = int_end;
    let mut mantissa_digits = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_start = end + 1;
        if matches!(bytes.get(exp_start), Some(b'+') | Some(b'-')) {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    end
}
