//! Frame data model and the primitive drawing routine.
//!
//! An expression animation is a sequence of [`Frame`]s; each frame is a
//! handful of [`Paint`]s (a geometric primitive plus an ink) and an optional
//! hold duration. Frames are full redraws: the engine clears the buffer,
//! draws every paint in order, presents, then holds.
//!
//! Occlusion shapes (brow triangles, smile discs, lid blocks) are drawn with
//! [`Ink::Off`] over the filled eye boxes, carving the expression out of the
//! base shape the way the original hardware face did with draw-color 0.
//!
//! # No Heap Allocation
//!
//! Frames and plans use fixed-capacity `heapless::Vec`s sized for the
//! largest expression (4 paints per frame, 8 frames per plan), so building
//! and playing a plan never allocates.

use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle, RoundedRectangle, Triangle};
use embedded_graphics::text::Text;
use heapless::Vec;
use profont::PROFONT_9_POINT;

/// Most paints any single frame uses (eye boxes plus two occlusions).
pub const MAX_PAINTS_PER_FRAME: usize = 4;

/// Most frames any expression plan uses.
pub const MAX_FRAMES_PER_PLAN: usize = 8;

/// Font for the caption expressions (introduce-self, credit-team).
pub const CAPTION_FONT: &MonoFont = &PROFONT_9_POINT;

/// Whether a primitive sets or clears pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    /// Lit pixels.
    On,
    /// Cleared pixels; carves occlusions out of previously drawn shapes.
    Off,
}

/// A geometric primitive at fixed coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Filled rounded rectangle — the eye boxes.
    RoundedBox { x: i32, y: i32, w: u32, h: u32, radius: u32 },
    /// Filled axis-aligned rectangle — lid occlusions.
    Block { x: i32, y: i32, w: u32, h: u32 },
    /// Filled triangle — brow occlusions.
    Wedge { a: Point, b: Point, c: Point },
    /// Filled disc (center + radius) — smile occlusions.
    Disc { cx: i32, cy: i32, r: u32 },
    /// One line of caption text, anchored at the text baseline.
    Caption { x: i32, y: i32, line: &'static str },
}

/// A shape plus the ink it is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub shape: Shape,
    pub ink: Ink,
}

impl Paint {
    /// Paint drawn with lit pixels.
    pub const fn fill(shape: Shape) -> Self {
        Self { shape, ink: Ink::On }
    }

    /// Paint drawn with cleared pixels.
    pub const fn erase(shape: Shape) -> Self {
        Self { shape, ink: Ink::Off }
    }
}

/// One complete draw-and-present cycle of the display.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Paints drawn in order into a cleared buffer.
    pub paints: Vec<Paint, MAX_PAINTS_PER_FRAME>,

    /// How long the presented frame is held before the next one.
    /// Zero means back-to-back presentation.
    pub hold_ms: u64,
}

impl Frame {
    /// Empty frame with the given hold.
    pub fn new(hold_ms: u64) -> Self {
        Self {
            paints: Vec::new(),
            hold_ms,
        }
    }

    /// Append a paint. Paints beyond [`MAX_PAINTS_PER_FRAME`] are dropped;
    /// the animation table never exceeds the capacity.
    #[must_use]
    pub fn with(mut self, paint: Paint) -> Self {
        self.paints.push(paint).ok();
        self
    }
}

/// Ordered frame sequence for one expression.
pub type FramePlan = Vec<Frame, MAX_FRAMES_PER_PLAN>;

/// Draw a single paint onto a monochrome target.
///
/// The caller owns buffer clearing and presentation; this only rasterizes
/// the primitive with the paint's ink.
pub fn draw_paint<D>(target: &mut D, paint: &Paint) -> Result<(), D::Error>
where
    D: DrawTarget<Color = BinaryColor>,
{
    let color = match paint.ink {
        Ink::On => BinaryColor::On,
        Ink::Off => BinaryColor::Off,
    };
    let style = PrimitiveStyle::with_fill(color);

    match paint.shape {
        Shape::RoundedBox { x, y, w, h, radius } => RoundedRectangle::with_equal_corners(
            Rectangle::new(Point::new(x, y), Size::new(w, h)),
            Size::new(radius, radius),
        )
        .into_styled(style)
        .draw(target),
        Shape::Block { x, y, w, h } => Rectangle::new(Point::new(x, y), Size::new(w, h))
            .into_styled(style)
            .draw(target),
        Shape::Wedge { a, b, c } => Triangle::new(a, b, c).into_styled(style).draw(target),
        // Radius-to-diameter matches the original disc rasterization
        Shape::Disc { cx, cy, r } => Circle::with_center(Point::new(cx, cy), 2 * r + 1)
            .into_styled(style)
            .draw(target),
        Shape::Caption { x, y, line } => {
            Text::new(line, Point::new(x, y), MonoTextStyle::new(CAPTION_FONT, color))
                .draw(target)
                .map(|_| ())
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;

    // -------------------------------------------------------------------------
    // Paint Construction Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_fill_and_erase_ink() {
        let shape = Shape::Block { x: 0, y: 0, w: 1, h: 1 };
        assert_eq!(Paint::fill(shape).ink, Ink::On);
        assert_eq!(Paint::erase(shape).ink, Ink::Off);
    }

    // -------------------------------------------------------------------------
    // Frame Builder Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_frame_keeps_paint_order() {
        let a = Paint::fill(Shape::Block { x: 0, y: 0, w: 1, h: 1 });
        let b = Paint::erase(Shape::Block { x: 1, y: 0, w: 1, h: 1 });
        let frame = Frame::new(0).with(a).with(b);

        assert_eq!(frame.paints.len(), 2);
        assert_eq!(frame.paints[0], a, "Paints must draw in insertion order");
        assert_eq!(frame.paints[1], b);
    }

    #[test]
    fn test_frame_capacity_is_bounded() {
        let paint = Paint::fill(Shape::Block { x: 0, y: 0, w: 1, h: 1 });
        let mut frame = Frame::new(0);
        for _ in 0..MAX_PAINTS_PER_FRAME + 2 {
            frame = frame.with(paint);
        }
        assert_eq!(
            frame.paints.len(),
            MAX_PAINTS_PER_FRAME,
            "Paints beyond capacity are dropped"
        );
    }

    // -------------------------------------------------------------------------
    // Drawing Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_draw_block() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        draw_paint(&mut display, &Paint::fill(Shape::Block { x: 0, y: 0, w: 3, h: 2 })).unwrap();

        display.assert_pattern(&[
            "###", //
            "###",
        ]);
    }

    #[test]
    fn test_erase_carves_out_fill() {
        let mut display: MockDisplay<BinaryColor> = MockDisplay::new();
        display.set_allow_overdraw(true);

        draw_paint(&mut display, &Paint::fill(Shape::Block { x: 0, y: 0, w: 4, h: 2 })).unwrap();
        draw_paint(&mut display, &Paint::erase(Shape::Block { x: 1, y: 0, w: 2, h: 2 })).unwrap();

        display.assert_pattern(&[
            "#..#", //
            "#..#",
        ]);
    }
}
