//! Timeframe button tokens

pub struct TimeframeConfig {
    /// One button per token, in display order
    pub tokens: &'static [&'static str],
    pub default_token: &'static str,
}

pub const TIMEFRAMES: TimeframeConfig = TimeframeConfig {
    tokens: &["5s", "15s", "30s", "1m", "5m", "15m", "30m", "1h"],
    default_token: "1m",
};
