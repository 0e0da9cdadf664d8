//! Divide-by-N calculator configuration

pub struct CalculatorConfig {
    pub divisor: f64,
    pub decimals: usize,
    /// Validation message. Not language-switched.
    pub error_text: &'static str,
}

pub const CALCULATOR: CalculatorConfig = CalculatorConfig {
    divisor: 11.0,
    decimals: 4,
    error_text: "Введите число",
};
