//! Static currency pair lists offered by the pair selector.

/// A labelled group of pairs (rendered as an option group)
pub struct PairGroup {
    pub label: &'static str,
    pub pairs: &'static [&'static str],
}

pub const PAIRS: [PairGroup; 3] = [
    PairGroup {
        label: "Main Pairs",
        pairs: &[
            "EUR/USD", "USD/JPY", "GBP/USD", "USD/CHF", "USD/CAD", "AUD/USD", "NZD/USD",
        ],
    },
    PairGroup {
        label: "Other Pairs",
        pairs: &[
            "EUR/GBP", "EUR/JPY", "GBP/JPY", "AUD/JPY", "CHF/JPY", "USD/SGD", "USD/HKD", "USD/TRY",
            "EUR/AUD", "CAD/JPY", "NZD/JPY", "AUD/NZD", "EUR/CAD", "GBP/CAD", "AUD/CAD", "NZD/CAD",
            "GBP/AUD", "EUR/CHF", "GBP/CHF", "AUD/CHF", "NZD/CHF", "EUR/NZD", "GBP/NZD",
            "USD/ZAR", "USD/MXN", "USD/PLN", "USD/DKK", "USD/NOK", "USD/SEK", "EUR/PLN", "EUR/TRY",
            "EUR/SEK", "GBP/SEK", "AUD/SGD", "CAD/CHF", "CHF/PLN",
        ],
    },
    PairGroup {
        label: "Pocket Option OTC",
        pairs: &[
            "EUR/USD OTC", "GBP/USD OTC", "USD/JPY OTC", "AUD/USD OTC", "USD/CAD OTC",
            "USD/CHF OTC", "NZD/USD OTC", "GBP/JPY OTC", "EUR/JPY OTC",
        ],
    },
];
