//! The expression animation engine.
//!
//! [`AnimationEngine`] owns the display surface, the clock, and every piece
//! of mutable animation state: the two blink timers, the happy-state flag,
//! and the upset lid offset. There are no globals — callers construct one
//! engine and drive it from their control loop.
//!
//! # Control Flow
//!
//! | Caller does | Engine does |
//! |-------------|-------------|
//! | `tick(now)` every loop iteration | fires open/close blink redraws when their timers elapse |
//! | `render(expression)` on demand | plays the full frame plan to completion, blocking through holds |
//!
//! A render is synchronous and uninterruptible by design: the caller must
//! not tick while one is in progress, and the single-threaded ownership of
//! the surface makes concurrent draws impossible.
//!
//! # Happy/Upset Interlock
//!
//! `happy()` and `cute()` arm the happy-state flag; `upset()` is suppressed
//! entirely (no frames presented, no offset advance) while it is armed, so a
//! smiling face never glitches into lowered lids. Only `normal()` — or the
//! blink scheduler's open redraw, which presents the same frame — disarms it.

use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use log::{debug, trace, warn};

use crate::config::{
    BLINK_CLOSE_HOLD_MS,
    BLINK_CLOSE_INTERVAL_MS,
    BLINK_OPEN_INTERVAL_MS,
    UPSET_ADVANCE_LIMIT,
    UPSET_START_OFFSET,
    UPSET_STEP,
};
use crate::error::FaceError;
use crate::expression::Expression;
use crate::frames;
use crate::shapes::{Frame, draw_paint};
use crate::surface::{Clock, Surface};

/// Owns the face's display surface, clock, and animation state.
pub struct AnimationEngine<S: Surface, C: Clock> {
    surface: S,
    clock: C,

    /// When the last "eyes open" redraw fired (ms since engine epoch).
    last_open_ms: u64,

    /// When the last "eyes closed" blink fired.
    last_close_ms: u64,

    /// Persisted lid offset of the upset animation; creeps toward its
    /// saturation point across repeated `upset()` calls.
    upset_offset: i32,

    /// Set by happy/cute, cleared by normal (and the open blink redraw).
    happy_state: bool,
}

impl<S: Surface, C: Clock> AnimationEngine<S, C> {
    /// Engine at rest: timers at the epoch, lids fully raised, not happy.
    pub fn new(surface: S, clock: C) -> Self {
        Self {
            surface,
            clock,
            last_open_ms: 0,
            last_close_ms: 0,
            upset_offset: UPSET_START_OFFSET,
            happy_state: false,
        }
    }

    // =========================================================================
    // Idle Blink Scheduler
    // =========================================================================

    /// Run one blink-scheduler check at the given timestamp.
    ///
    /// Call every main-loop iteration (sub-10 ms cadence) whenever no
    /// expression render is in progress. Both timers are checked every tick,
    /// so a close event can fire moments after an open redraw — that is the
    /// whole blink effect.
    ///
    /// Timer arithmetic cannot fail; the `Err` case is a display failure
    /// during a fired redraw.
    pub fn tick(&mut self, now_ms: u64) -> Result<(), FaceError> {
        if now_ms.saturating_sub(self.last_open_ms) > BLINK_OPEN_INTERVAL_MS {
            trace!("blink open at {now_ms}ms");
            self.play_frame(&frames::normal_frame(0))?;
            self.happy_state = false;
            self.last_open_ms = now_ms;
        }

        if now_ms.saturating_sub(self.last_close_ms) > BLINK_CLOSE_INTERVAL_MS {
            trace!("blink close at {now_ms}ms");
            self.play_frame(&frames::close_frame(BLINK_CLOSE_HOLD_MS))?;
            self.last_close_ms = now_ms;
        }

        Ok(())
    }

    // =========================================================================
    // Expression Renderer
    // =========================================================================

    /// Play an expression's full frame sequence to completion.
    ///
    /// Blocks through every frame hold before returning. An upset request
    /// while the happy-state flag is armed is suppressed without touching
    /// the display.
    pub fn render(&mut self, expression: Expression) -> Result<(), FaceError> {
        if expression == Expression::Upset && self.happy_state {
            debug!("upset suppressed while happy face is showing");
            return Ok(());
        }

        debug!("rendering {expression}");
        let plan = frames::plan(expression, self.upset_offset);
        for frame in &plan {
            self.play_frame(frame)?;
        }

        match expression {
            Expression::Normal => self.happy_state = false,
            Expression::Happy | Expression::Cute => self.happy_state = true,
            Expression::Upset => {
                // Lid creep across calls, saturating rather than overshooting
                if self.upset_offset <= UPSET_ADVANCE_LIMIT {
                    self.upset_offset += UPSET_STEP;
                }
            }
            _ => {}
        }

        Ok(())
    }

    /// Resolve an expression by [name](Expression::name) and render it.
    ///
    /// Fails closed on unknown names: nothing is drawn and
    /// [`FaceError::InvalidExpression`] is returned.
    pub fn render_named(&mut self, name: &str) -> Result<(), FaceError> {
        match Expression::from_name(name) {
            Ok(expression) => self.render(expression),
            Err(err) => {
                warn!("rejecting unknown expression name {name:?}");
                Err(err)
            }
        }
    }

    /// Clear, draw, present, hold.
    fn play_frame(&mut self, frame: &Frame) -> Result<(), FaceError> {
        self.surface
            .clear(BinaryColor::Off)
            .map_err(|_| FaceError::DisplayUnavailable)?;
        for paint in &frame.paints {
            draw_paint(&mut self.surface, paint).map_err(|_| FaceError::DisplayUnavailable)?;
        }
        self.surface.present().map_err(|_| FaceError::DisplayUnavailable)?;
        if frame.hold_ms > 0 {
            self.clock.sleep_ms(frame.hold_ms);
        }
        Ok(())
    }

    // =========================================================================
    // Per-Expression Entry Points
    // =========================================================================

    /// Resting open eyes; disarms the happy-state flag.
    pub fn normal(&mut self) -> Result<(), FaceError> {
        self.render(Expression::Normal)
    }

    /// Fully closed eyes.
    pub fn close(&mut self) -> Result<(), FaceError> {
        self.render(Expression::Close)
    }

    pub fn sad(&mut self) -> Result<(), FaceError> {
        self.render(Expression::Sad)
    }

    pub fn angry(&mut self) -> Result<(), FaceError> {
        self.render(Expression::Angry)
    }

    pub fn suspicious(&mut self) -> Result<(), FaceError> {
        self.render(Expression::Suspicious)
    }

    /// Smiling eyes; arms the happy-state flag.
    pub fn happy(&mut self) -> Result<(), FaceError> {
        self.render(Expression::Happy)
    }

    /// Rounder smile; arms the happy-state flag.
    pub fn cute(&mut self) -> Result<(), FaceError> {
        self.render(Expression::Cute)
    }

    /// Lowered lids; suppressed while the happy-state flag is armed, and
    /// creeps further down on each unsuppressed call until it saturates.
    pub fn upset(&mut self) -> Result<(), FaceError> {
        self.render(Expression::Upset)
    }

    pub fn wonder(&mut self) -> Result<(), FaceError> {
        self.render(Expression::Wonder)
    }

    pub fn look_up(&mut self) -> Result<(), FaceError> {
        self.render(Expression::LookUp)
    }

    pub fn look_down(&mut self) -> Result<(), FaceError> {
        self.render(Expression::LookDown)
    }

    pub fn look_left(&mut self) -> Result<(), FaceError> {
        self.render(Expression::LookLeft)
    }

    pub fn look_right(&mut self) -> Result<(), FaceError> {
        self.render(Expression::LookRight)
    }

    /// Caption card introducing the robot.
    pub fn introduce_self(&mut self) -> Result<(), FaceError> {
        self.render(Expression::IntroduceSelf)
    }

    /// Caption card crediting the build team.
    pub fn credit_team(&mut self) -> Result<(), FaceError> {
        self.render(Expression::CreditTeam)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Whether the most recent expression was from the happy family.
    pub const fn happy_state(&self) -> bool {
        self.happy_state
    }

    /// Current upset lid offset (starts at -15, saturates at -6).
    pub const fn upset_offset(&self) -> i32 {
        self.upset_offset
    }

    /// The owned clock, for callers that need matching `tick` timestamps.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// The owned surface.
    pub const fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the owned surface (window event pumping in the
    /// simulator, driver maintenance on hardware).
    pub const fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
