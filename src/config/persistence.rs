//! Preference persistence configuration

/// Keys in the browser-local (or native file backed) key-value store
pub struct PreferenceKeys {
    pub language: &'static str,
    pub timeframe: &'static str,
}

/// Configuration for Application State Persistence
pub struct AppPersistenceConfig {
    /// Path for saving/loading application UI state (native only)
    pub state_path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub keys: PreferenceKeys,
    pub app: AppPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    keys: PreferenceKeys {
        language: "lang",
        timeframe: "timeframe",
    },
    app: AppPersistenceConfig {
        state_path: "app_state.json",
    },
};
