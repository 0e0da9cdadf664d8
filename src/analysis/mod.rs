pub mod calculator;
pub mod signal;

pub use calculator::{CalcOutcome, calculate, parse_number};
pub use signal::{
    AnalysisResult, Direction, EntropySource, Signal, SignalSource, run_analysis,
};
