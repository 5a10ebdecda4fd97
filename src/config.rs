//! Timing and layout constants for the face engine.
//!
//! Blink cadence, per-expression pause durations, and the base eye layout
//! are fixed at compile time. The geometry values are tuned for a 128x64
//! OLED panel; per-expression variations (brow drops, squints, smile discs)
//! live with the animation table in [`crate::frames`].

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (SSD1306-class 128x64 panel).
pub const SCREEN_WIDTH: u32 = 128;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 64;

// =============================================================================
// Blink Scheduler Configuration
// =============================================================================

/// Interval between "eyes open" redraws in milliseconds.
///
/// Firing this often keeps the resting face refreshed between blinks and
/// restores the open eyes shortly after a close event.
pub const BLINK_OPEN_INTERVAL_MS: u64 = 150;

/// Interval between "eyes closed" blink events in milliseconds.
pub const BLINK_CLOSE_INTERVAL_MS: u64 = 1900;

/// How long the closed-eye frame is held before the scheduler yields.
pub const BLINK_CLOSE_HOLD_MS: u64 = 50;

// =============================================================================
// Expression Timing Configuration
// =============================================================================

/// Hold on the closed-eye lead-in frame of the directional look animations.
pub const LOOK_LEAD_IN_HOLD_MS: u64 = 120;

/// Hold at the end of each phase of the wonder (double-take) animation.
pub const WONDER_PHASE_HOLD_MS: u64 = 1600;

// =============================================================================
// Base Eye Layout
// =============================================================================

/// Left edge of the left eye.
pub const LEFT_EYE_X: i32 = 8;

/// Left edge of the right eye.
pub const RIGHT_EYE_X: i32 = 70;

/// Width of each eye box.
pub const EYE_WIDTH: u32 = 50;

/// Top edge of the resting (open) eye.
pub const NORMAL_EYE_Y: i32 = 12;

/// Height of the resting eye box.
pub const NORMAL_EYE_HEIGHT: u32 = 35;

/// Corner radius of the resting eye box.
pub const NORMAL_EYE_RADIUS: u32 = 9;

// =============================================================================
// Upset Animation State
// =============================================================================

/// Starting vertical offset of the upset occlusion blocks (fully raised lids).
pub const UPSET_START_OFFSET: i32 = -15;

/// How far the occlusion creeps down per upset render.
pub const UPSET_STEP: i32 = 3;

/// Highest offset from which another step is still taken.
///
/// The offset advances only while `<= UPSET_ADVANCE_LIMIT`, so it saturates
/// at `UPSET_ADVANCE_LIMIT + UPSET_STEP` (-4 would overshoot; the walk stops
/// at -6) and further renders repeat the terminal frame.
pub const UPSET_ADVANCE_LIMIT: i32 = -7;

// =============================================================================
// Unit Tests
// =============================================================================
