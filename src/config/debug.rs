//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

pub struct DebugFlags {
    /// Emit UI interaction logs (pause, month changes, motion toggle...).
    pub print_ui_interactions: bool,
    /// Emit a line whenever the particle field is (re)generated.
    pub print_particle_lifecycle: bool,
    /// Emit every pulse timer fire.
    pub print_pulse_events: bool,
    /// Emit frame loop arm/cancel transitions.
    pub print_frame_loops: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_ui_interactions: true,
    print_particle_lifecycle: false,
    print_pulse_events: false,
    print_frame_loops: false,
    print_shutdown: true,
};
