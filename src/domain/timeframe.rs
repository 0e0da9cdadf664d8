use crate::config::TIMEFRAMES;
use crate::domain::AppError;

/// Tracks which timeframe button is active. Exactly one token is selected at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeframeSelector {
    tokens: &'static [&'static str],
    selected: &'static str,
}

impl Default for TimeframeSelector {
    fn default() -> Self {
        Self::new(TIMEFRAMES.tokens, TIMEFRAMES.default_token)
    }
}

impl TimeframeSelector {
    pub fn new(tokens: &'static [&'static str], default_token: &'static str) -> Self {
        let selected = tokens
            .iter()
            .copied()
            .find(|t| *t == default_token)
            .or_else(|| tokens.first().copied())
            .unwrap_or(default_token);
        Self { tokens, selected }
    }

    /// Restores a persisted token, keeping the default when the token is unknown.
    pub fn restored(persisted: Option<&str>) -> Self {
        let mut selector = Self::default();
        if let Some(token) = persisted {
            if let Err(_e) = selector.select(token) {
                #[cfg(debug_assertions)]
                log::warn!("Ignoring persisted timeframe: {}", _e);
            }
        }
        selector
    }

    pub fn select(&mut self, token: &str) -> Result<(), AppError> {
        let known = self
            .tokens
            .iter()
            .copied()
            .find(|t| *t == token)
            .ok_or_else(|| AppError::UnknownTimeframe(token.to_string()))?;
        self.selected = known;
        Ok(())
    }

    pub fn selected(&self) -> &'static str {
        self.selected
    }

    /// (token, is_active) for every button, in display order
    pub fn active_states(&self) -> impl Iterator<Item = (&'static str, bool)> + '_ {
        self.tokens.iter().map(|t| (*t, *t == self.selected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_count(selector: &TimeframeSelector) -> usize {
        selector.active_states().filter(|(_, active)| *active).count()
    }

    #[test]
    fn defaults_to_one_minute() {
        let selector = TimeframeSelector::default();
        assert_eq!(selector.selected(), "1m");
        assert_eq!(active_count(&selector), 1);
    }

    #[test]
    fn selecting_moves_the_single_active_marker() {
        let mut selector = TimeframeSelector::default();
        for token in TIMEFRAMES.tokens {
            selector.select(token).unwrap();
            assert_eq!(active_count(&selector), 1);
            let active: Vec<_> = selector
                .active_states()
                .filter(|(_, a)| *a)
                .map(|(t, _)| t)
                .collect();
            assert_eq!(active, vec![*token]);
        }
    }

    #[test]
    fn unknown_token_keeps_previous_selection() {
        let mut selector = TimeframeSelector::default();
        selector.select("5m").unwrap();
        assert!(selector.select("2d").is_err());
        assert_eq!(selector.selected(), "5m");
    }

    #[test]
    fn restore_falls_back_to_default_for_unknown_tokens() {
        assert_eq!(TimeframeSelector::restored(Some("15m")).selected(), "15m");
        assert_eq!(TimeframeSelector::restored(Some("bogus")).selected(), "1m");
        assert_eq!(TimeframeSelector::restored(None).selected(), "1m");
    }
}
