//! Simulated analysis configuration

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    // Fixed latency of the simulated analysis. No work happens during it.
    pub delay_ms: u64,
    // Shown when nothing is selected in the pair control
    pub fallback_pair: &'static str,
    // Scores are rounded to this many decimals before the direction is derived
    pub score_decimals: i32,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    delay_ms: 1100,
    fallback_pair: "EUR/USD",
    score_decimals: 2,
};
