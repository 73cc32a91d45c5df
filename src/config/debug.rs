//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep the noisy ones `false` so release
//! builds stay quiet. Every flag is further gated by `cfg(debug_assertions)`
//! at the call site.

pub struct DebugFlags {
    /// Emit a line for every request handed to the transport.
    pub print_requests: bool,
    /// Emit a line when a completion is dropped because a newer request replaced it.
    pub print_stale_responses: bool,
    /// Emit raw response bodies before decoding.
    pub print_response_bodies: bool,
    /// Emit UI interaction logs (button clicks, base URL changes).
    pub print_ui_interactions: bool,
    /// Emit details of UI state serialization/deserialization.
    pub print_state_serde: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_requests: true,
    print_stale_responses: true,
    print_response_bodies: false,
    print_ui_interactions: true,
    print_state_serde: false,
};
