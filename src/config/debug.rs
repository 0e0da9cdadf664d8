//! Debugging feature flags.
//!
//! Toggle individual diagnostics here. Every use is additionally gated by
//! `cfg(debug_assertions)`, so release builds stay quiet.

pub struct DebugFlags {
    /// Emit UI interaction logs (pair switching, language toggle, timeframe clicks).
    pub print_ui_interactions: bool,
    /// Emit analysis state machine transitions and results.
    pub print_analysis_events: bool,
    /// Emit preference store reads/writes.
    pub print_preference_io: bool,
    /// Emit preview URL create/revoke events.
    pub print_photo_lifecycle: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_analysis_events: true,
    print_preference_io: false,
    print_photo_lifecycle: false,
    print_shutdown: false,
};
