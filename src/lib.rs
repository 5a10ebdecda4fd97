//! # Akno Face
//!
//! Expression animation engine for a 128x64 monochrome robot face.
//!
//! The face is two rounded-rectangle eyes; expressions are short frame
//! sequences that occlude, reshape, or move them. An idle blink scheduler
//! keeps the face alive between expression requests.
//!
//! ## Eye Layout
//!
//! ```text
//! +----------------------------- 128 px -----------------------------+
//! |                                                                  |
//! |      +--------------+              +--------------+              |
//! |      |              |              |              |              |
//! |      |   left eye   |              |  right eye   |    64 px     |
//! |      |   x=8 w=50   |              |  x=70 w=50   |              |
//! |      |              |              |              |              |
//! |      +--------------+              +--------------+              |
//! |                                                                  |
//! +------------------------------------------------------------------+
//! ```
//!
//! ## Architecture
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`config`] | Screen, eye, and timing constants |
//! | [`error`] | [`FaceError`] and its display impls |
//! | [`expression`] | The closed [`Expression`] set and name lookup |
//! | [`shapes`] | [`Frame`]/[`Paint`] data model and primitive rasterization |
//! | [`frames`] | The animation table: [`Expression`] to [`FramePlan`] |
//! | [`surface`] | [`Surface`] and [`Clock`] seams plus [`SystemClock`] |
//! | [`engine`] | [`AnimationEngine`]: blink scheduler and renderer |
//!
//! ## Driving the Engine
//!
//! The owning control loop calls [`AnimationEngine::tick`] every iteration
//! (sub-10 ms cadence) and [`AnimationEngine::render`] (or a named entry
//! point like [`AnimationEngine::happy`]) when an expression is requested.
//! Renders block until the sequence completes; ticks are skipped while a
//! render is in progress because the loop is single threaded.
//!
//! The `face-sim` binary (behind the `simulator` feature) runs the engine
//! against an SDL2 window with keyboard-triggered expressions.

pub mod config;
pub mod engine;
pub mod error;
pub mod expression;
pub mod frames;
pub mod shapes;
pub mod surface;

pub use engine::AnimationEngine;
pub use error::FaceError;
pub use expression::Expression;
pub use shapes::{Frame, FramePlan, Ink, Paint, Shape};
pub use surface::{Clock, Surface, SystemClock};
