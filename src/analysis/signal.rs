//! Simulated market analysis: a fixed delay followed by a random BUY/SELL signal.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use std::future::Future;

use crate::config::ANALYSIS;

/// Source of uniform values in `[0, 1)`. Injected so tests can be deterministic.
pub trait SignalSource: Send {
    fn next_unit(&mut self) -> f64;
}

/// Production source, seeded from OS entropy
pub struct EntropySource(StdRng);

impl EntropySource {
    pub fn new() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for EntropySource {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalSource for EntropySource {
    fn next_unit(&mut self) -> f64 {
        self.0.gen_range(0.0..1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Buy,
    Sell,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Buy => write!(f, "BUY ↑"),
            Direction::Sell => write!(f, "SELL ↓"),
        }
    }
}

/// Direction plus a score in [-1, 1], rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
    pub direction: Direction,
    pub score: f64,
}

impl Signal {
    /// Maps a unit draw onto [-1, 1]. The direction is taken from the rounded
    /// score, so anything that rounds to zero is a SELL.
    pub fn from_unit(unit: f64) -> Self {
        let factor = 10f64.powi(ANALYSIS.score_decimals);
        let raw = unit.clamp(0.0, 1.0) * 2.0 - 1.0;
        let score = ((raw * factor).round() / factor).clamp(-1.0, 1.0);
        let direction = if score > 0.0 {
            Direction::Buy
        } else {
            Direction::Sell
        };
        Self { direction, score }
    }

    pub fn formatted_score(&self) -> String {
        format!("{:.*}", ANALYSIS.score_decimals as usize, self.score)
    }
}

/// A finished analysis as shown in the result area
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub pair: String,
    pub signal: Signal,
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.pair,
            self.signal.direction,
            self.signal.formatted_score()
        )
    }
}

/// Waits for `wait` to complete (the simulated latency), then draws the signal.
/// No real analysis is performed.
pub async fn run_analysis<W, S>(wait: W, mut source: S) -> Signal
where
    W: Future<Output = ()>,
    S: SignalSource,
{
    wait.await;
    Signal::from_unit(source.next_unit())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::future::ready;

    /// Replays a fixed list of unit values, cycling when exhausted
    pub(crate) struct FixedSource {
        values: Vec<f64>,
        next: usize,
    }

    impl FixedSource {
        pub(crate) fn new(values: &[f64]) -> Self {
            Self {
                values: values.to_vec(),
                next: 0,
            }
        }
    }

    impl SignalSource for FixedSource {
        fn next_unit(&mut self) -> f64 {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            value
        }
    }

    #[test]
    fn positive_score_is_buy() {
        let signal = Signal::from_unit(0.86);
        assert_eq!(signal.direction, Direction::Buy);
        assert!((signal.score - 0.72).abs() < 1e-9);
        assert_eq!(signal.formatted_score(), "0.72");
    }

    #[test]
    fn scores_rounding_to_zero_are_sell() {
        assert_eq!(Signal::from_unit(0.5).direction, Direction::Sell);
        assert_eq!(Signal::from_unit(0.502).direction, Direction::Sell);
        assert_eq!(Signal::from_unit(0.498).direction, Direction::Sell);
        assert_eq!(Signal::from_unit(0.503).direction, Direction::Buy);
    }

    #[test]
    fn score_stays_within_unit_interval() {
        for unit in [0.0, 0.0001, 0.25, 0.5, 0.75, 0.9999, 1.0] {
            let signal = Signal::from_unit(unit);
            assert!((-1.0..=1.0).contains(&signal.score), "{unit} -> {}", signal.score);
            assert_eq!(signal.direction == Direction::Buy, signal.score > 0.0);
        }
        assert_eq!(Signal::from_unit(0.0).formatted_score(), "-1.00");
        assert_eq!(Signal::from_unit(1.0).formatted_score(), "1.00");
    }

    #[test]
    fn run_analysis_waits_then_draws_once() {
        let signal = block_on(run_analysis(ready(()), FixedSource::new(&[0.1, 0.9])));
        assert_eq!(signal.direction, Direction::Sell);
        assert_eq!(signal.formatted_score(), "-0.80");
    }

    #[test]
    fn entropy_source_stays_in_range() {
        let mut source = EntropySource::new();
        for _ in 0..1_000 {
            let u = source.next_unit();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn result_line_matches_display_format() {
        let result = AnalysisResult {
            pair: "GBP/JPY OTC".to_string(),
            signal: Signal::from_unit(0.2),
        };
        assert_eq!(result.to_string(), "GBP/JPY OTC: SELL ↓ (-0.60)");

        let result = AnalysisResult {
            pair: "EUR/USD".to_string(),
            signal: Signal::from_unit(0.71),
        };
        assert_eq!(result.to_string(), "EUR/USD: BUY ↑ (0.42)");
    }
}
