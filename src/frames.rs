//! The animation table: one frame-plan builder per expression.
//!
//! Each expression is data, not a bespoke drawing procedure: [`plan`] returns
//! the ordered [`FramePlan`] the engine plays back verbatim. Coordinates are
//! authored against the 128x64 panel; interpolated values (brow drops, lid
//! creep, smile discs) are generated here so every frame is an explicit,
//! testable descriptor.
//!
//! # Animation Vocabulary
//!
//! | Expression | Technique |
//! |------------|-----------|
//! | Sad / Angry / Suspicious | Erased brow triangle, apex dropping 3 px/frame |
//! | Happy / Cute | Erased disc creeping up over the lower eye |
//! | Upset | Erased lid block at a caller-supplied offset |
//! | Wonder | Per-eye box height morph in two held phases |
//! | Looks | Closed-eye lead-in, then the boxes slide along one axis |
//! | Introduce / Credit | Two caption lines, no geometry |

use embedded_graphics::prelude::Point;

use crate::config::{
    EYE_WIDTH,
    LEFT_EYE_X,
    LOOK_LEAD_IN_HOLD_MS,
    NORMAL_EYE_HEIGHT,
    NORMAL_EYE_RADIUS,
    NORMAL_EYE_Y,
    RIGHT_EYE_X,
    WONDER_PHASE_HOLD_MS,
};
use crate::expression::Expression;
use crate::shapes::{Frame, FramePlan, Paint, Shape};

/// Build the frame plan for an expression.
///
/// `upset_offset` is the persisted lid offset of the upset animation; it is
/// ignored by every other expression. Plans are pure data — calling this has
/// no side effects and the same inputs always yield the same frames.
pub fn plan(expression: Expression, upset_offset: i32) -> FramePlan {
    match expression {
        Expression::Normal => single(normal_frame(0)),
        Expression::Close => single(close_frame(0)),
        Expression::Sad => sad(),
        Expression::Angry => angry(),
        Expression::Suspicious => suspicious(),
        Expression::Happy => happy(),
        Expression::Cute => cute(),
        Expression::Upset => single(upset_frame(upset_offset)),
        Expression::Wonder => wonder(),
        Expression::LookUp => look_vertical(true),
        Expression::LookDown => look_vertical(false),
        Expression::LookLeft => look_horizontal(1),
        Expression::LookRight => look_horizontal(-1),
        Expression::IntroduceSelf => single(introduce_self_frame()),
        Expression::CreditTeam => single(credit_team_frame()),
    }
}

fn single(frame: Frame) -> FramePlan {
    let mut plan = FramePlan::new();
    plan.push(frame).ok();
    plan
}

/// Both eye boxes at the same vertical geometry.
fn eye_pair(frame: Frame, y: i32, h: u32, radius: u32) -> Frame {
    frame
        .with(Paint::fill(Shape::RoundedBox {
            x: LEFT_EYE_X,
            y,
            w: EYE_WIDTH,
            h,
            radius,
        }))
        .with(Paint::fill(Shape::RoundedBox {
            x: RIGHT_EYE_X,
            y,
            w: EYE_WIDTH,
            h,
            radius,
        }))
}

/// Resting open eyes.
pub(crate) fn normal_frame(hold_ms: u64) -> Frame {
    eye_pair(Frame::new(hold_ms), NORMAL_EYE_Y, NORMAL_EYE_HEIGHT, NORMAL_EYE_RADIUS)
}

/// Fully closed eyes: low flat boxes with the region above them wiped so
/// only the lid sliver remains.
pub(crate) fn close_frame(hold_ms: u64) -> Frame {
    Frame::new(hold_ms)
        .with(Paint::fill(Shape::RoundedBox { x: 5, y: 19, w: 55, h: 18, radius: 6 }))
        .with(Paint::fill(Shape::RoundedBox { x: 67, y: 19, w: 55, h: 18, radius: 6 }))
        .with(Paint::erase(Shape::Block { x: 5, y: 1, w: 55, h: 18 }))
        .with(Paint::erase(Shape::Block { x: 67, y: 1, w: 55, h: 18 }))
}

/// Outer brows droop: mirrored triangles carve into the eye tops, apex
/// dropping 3 px per frame.
fn sad() -> FramePlan {
    let mut plan = FramePlan::new();
    for i in (0..=15).step_by(3) {
        let frame = eye_pair(Frame::new(0), 18, 29, 9)
            .with(Paint::erase(Shape::Wedge {
                a: Point::new(3, 14),
                b: Point::new(64, 14),
                c: Point::new(3, 21 + i),
            }))
            .with(Paint::erase(Shape::Wedge {
                a: Point::new(68, 14),
                b: Point::new(124, 21 + i),
                c: Point::new(124, 14),
            }));
        plan.push(frame).ok();
    }
    plan
}

/// Inner brows knit: one triangle spanning both eyes, apex dropping between
/// them.
fn angry() -> FramePlan {
    let mut plan = FramePlan::new();
    for i in (0..=15).step_by(3) {
        let frame = eye_pair(Frame::new(0), 18, 29, 9).with(Paint::erase(Shape::Wedge {
            a: Point::new(3, 14),
            b: Point::new(64, 18 + i),
            c: Point::new(124, 14),
        }));
        plan.push(frame).ok();
    }
    plan
}

/// Shallow single-sided squint over narrowed eyes.
fn suspicious() -> FramePlan {
    let mut plan = FramePlan::new();
    for i in (0..=9).step_by(3) {
        let frame = eye_pair(Frame::new(0), 12, 20, 9).with(Paint::erase(Shape::Wedge {
            a: Point::new(12, 12),
            b: Point::new(64, 12 + i),
            c: Point::new(107, 12),
        }));
        plan.push(frame).ok();
    }
    plan
}

/// Eyes curve into a smile: large discs rise to occlude the lower half.
fn happy() -> FramePlan {
    let mut plan = FramePlan::new();
    for step in 0..2 {
        let cy = 62 - 3 * step;
        let frame = eye_pair(Frame::new(0), NORMAL_EYE_Y, NORMAL_EYE_HEIGHT, 11)
            .with(Paint::erase(Shape::Disc { cx: 33, cy, r: 38 }))
            .with(Paint::erase(Shape::Disc { cx: 95, cy, r: 38 }));
        plan.push(frame).ok();
    }
    plan
}

/// Like happy but rounder: bigger discs, wider spread, softer corners.
fn cute() -> FramePlan {
    let mut plan = FramePlan::new();
    for i in (0..=2).step_by(2) {
        let frame = eye_pair(Frame::new(0), NORMAL_EYE_Y, NORMAL_EYE_HEIGHT, 12)
            .with(Paint::erase(Shape::Disc { cx: 30, cy: 66 - i, r: 40 }))
            .with(Paint::erase(Shape::Disc { cx: 98, cy: 66 - i, r: 40 }));
        plan.push(frame).ok();
    }
    plan
}

/// Lids at the persisted offset carve into the resting eyes. The offset
/// walk across repeated renders lives in the engine, not here.
fn upset_frame(offset: i32) -> Frame {
    eye_pair(Frame::new(0), NORMAL_EYE_Y, NORMAL_EYE_HEIGHT, NORMAL_EYE_RADIUS)
        .with(Paint::erase(Shape::Block {
            x: LEFT_EYE_X,
            y: offset,
            w: EYE_WIDTH,
            h: NORMAL_EYE_HEIGHT,
        }))
        .with(Paint::erase(Shape::Block {
            x: RIGHT_EYE_X,
            y: offset,
            w: EYE_WIDTH,
            h: NORMAL_EYE_HEIGHT,
        }))
}

/// Asymmetric double take: the left eye narrows against a resting right eye,
/// holds, then overshoots wide while the right eye narrows, and holds again.
fn wonder() -> FramePlan {
    let mut plan = FramePlan::new();

    for i in (1..=9).step_by(4) {
        let hold_ms = if i == 9 { WONDER_PHASE_HOLD_MS } else { 0 };
        let frame = Frame::new(hold_ms)
            .with(Paint::fill(Shape::RoundedBox {
                x: LEFT_EYE_X,
                y: NORMAL_EYE_Y + i,
                w: EYE_WIDTH,
                h: NORMAL_EYE_HEIGHT - i as u32,
                radius: NORMAL_EYE_RADIUS,
            }))
            .with(Paint::fill(Shape::RoundedBox {
                x: RIGHT_EYE_X,
                y: NORMAL_EYE_Y,
                w: EYE_WIDTH,
                h: NORMAL_EYE_HEIGHT,
                radius: NORMAL_EYE_RADIUS,
            }));
        plan.push(frame).ok();
    }

    for i in (1..=9).step_by(4) {
        let hold_ms = if i == 9 { WONDER_PHASE_HOLD_MS } else { 0 };
        let frame = Frame::new(hold_ms)
            .with(Paint::fill(Shape::RoundedBox {
                x: LEFT_EYE_X,
                y: 22 - i,
                w: EYE_WIDTH,
                h: 25 + i as u32,
                radius: NORMAL_EYE_RADIUS,
            }))
            .with(Paint::fill(Shape::RoundedBox {
                x: RIGHT_EYE_X,
                y: NORMAL_EYE_Y + i,
                w: EYE_WIDTH,
                h: NORMAL_EYE_HEIGHT - i as u32,
                radius: NORMAL_EYE_RADIUS,
            }));
        plan.push(frame).ok();
    }

    plan
}

/// Vertical look: closed-eye lead-in with a short hold, then both eye boxes
/// slide up or down together.
fn look_vertical(up: bool) -> FramePlan {
    let mut plan = FramePlan::new();
    plan.push(close_frame(LOOK_LEAD_IN_HOLD_MS)).ok();
    for i in (0..=12).step_by(4) {
        let (y, h) = if up { (NORMAL_EYE_Y - i, 25) } else { (22 + i, 21) };
        plan.push(eye_pair(Frame::new(0), y, h, NORMAL_EYE_RADIUS)).ok();
    }
    plan
}

/// Horizontal look: closed-eye lead-in, then both boxes slide sideways.
/// `dx_sign` is +1 for look-left, -1 for look-right.
fn look_horizontal(dx_sign: i32) -> FramePlan {
    let mut plan = FramePlan::new();
    plan.push(close_frame(LOOK_LEAD_IN_HOLD_MS)).ok();
    for i in (0..=8).step_by(4) {
        let dx = dx_sign * i;
        let frame = Frame::new(0)
            .with(Paint::fill(Shape::RoundedBox {
                x: LEFT_EYE_X + dx,
                y: 17,
                w: EYE_WIDTH,
                h: 27,
                radius: NORMAL_EYE_RADIUS,
            }))
            .with(Paint::fill(Shape::RoundedBox {
                x: RIGHT_EYE_X + dx,
                y: 17,
                w: EYE_WIDTH,
                h: 27,
                radius: NORMAL_EYE_RADIUS,
            }));
        plan.push(frame).ok();
    }
    plan
}

fn introduce_self_frame() -> Frame {
    Frame::new(0)
        .with(Paint::fill(Shape::Caption { x: 5, y: 15, line: "My name is Akno" }))
        .with(Paint::fill(Shape::Caption { x: 5, y: 30, line: "Nice to meet you :)" }))
}

fn credit_team_frame() -> Frame {
    Frame::new(0)
        .with(Paint::fill(Shape::Caption { x: 1, y: 15, line: "The team who made me" }))
        .with(Paint::fill(Shape::Caption { x: 1, y: 30, line: "Is FUTURISERS :)" }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::Ink;

    fn frame_count(expression: Expression) -> usize {
        plan(expression, -15).len()
    }

    // -------------------------------------------------------------------------
    // Plan Shape Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_frame_counts_per_expression() {
        assert_eq!(frame_count(Expression::Normal), 1);
        assert_eq!(frame_count(Expression::Close), 1);
        assert_eq!(frame_count(Expression::Sad), 6);
        assert_eq!(frame_count(Expression::Angry), 6);
        assert_eq!(frame_count(Expression::Suspicious), 4);
        assert_eq!(frame_count(Expression::Happy), 2);
        assert_eq!(frame_count(Expression::Cute), 2);
        assert_eq!(frame_count(Expression::Upset), 1);
        assert_eq!(frame_count(Expression::Wonder), 6);
        assert_eq!(frame_count(Expression::LookUp), 5);
        assert_eq!(frame_count(Expression::LookDown), 5);
        assert_eq!(frame_count(Expression::LookLeft), 4);
        assert_eq!(frame_count(Expression::LookRight), 4);
        assert_eq!(frame_count(Expression::IntroduceSelf), 1);
        assert_eq!(frame_count(Expression::CreditTeam), 1);
    }

    #[test]
    fn test_plans_are_deterministic() {
        for expression in Expression::ALL {
            assert_eq!(
                plan(expression, -9),
                plan(expression, -9),
                "Plan for {expression} must be reproducible"
            );
        }
    }

    // -------------------------------------------------------------------------
    // Brow Progression Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_sad_brow_apex_drops_in_steps_of_three() {
        let frames = plan(Expression::Sad, -15);
        let mut expected_drop = 0;
        for frame in &frames {
            // Paint layout: left eye, right eye, left brow, right brow
            let Shape::Wedge { c, .. } = frame.paints[2].shape else {
                panic!("expected left brow wedge");
            };
            assert_eq!(c.y, 21 + expected_drop, "Left brow apex should drop 3 px per frame");
            let Shape::Wedge { b, .. } = frame.paints[3].shape else {
                panic!("expected right brow wedge");
            };
            assert_eq!(b.y, 21 + expected_drop, "Brows must drop symmetrically");
            expected_drop += 3;
        }
        assert_eq!(expected_drop, 18, "Apex should have walked 0..=15");
    }

    #[test]
    fn test_angry_apex_sits_between_the_eyes() {
        let frames = plan(Expression::Angry, -15);
        for (idx, frame) in frames.iter().enumerate() {
            let Shape::Wedge { a, b, c } = frame.paints[2].shape else {
                panic!("expected brow wedge");
            };
            assert_eq!(b.x, 64, "Apex is centered between the eyes");
            assert_eq!(b.y, 18 + 3 * idx as i32);
            assert_eq!((a.y, c.y), (14, 14), "Brow baseline stays fixed");
        }
    }

    #[test]
    fn test_brow_wedges_are_erased_not_filled() {
        for expression in [Expression::Sad, Expression::Angry, Expression::Suspicious] {
            for frame in &plan(expression, -15) {
                for paint in &frame.paints {
                    if matches!(paint.shape, Shape::Wedge { .. }) {
                        assert_eq!(paint.ink, Ink::Off, "{expression} brows must carve, not draw");
                    }
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Smile Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_happy_discs_rise() {
        let frames = plan(Expression::Happy, -15);
        let centers: std::vec::Vec<i32> = frames
            .iter()
            .map(|frame| {
                let Shape::Disc { cy, .. } = frame.paints[2].shape else {
                    panic!("expected smile disc");
                };
                cy
            })
            .collect();
        assert_eq!(centers, [62, 59], "Smile disc should rise between frames");
    }

    #[test]
    fn test_cute_uses_larger_discs_than_happy() {
        let happy_frames = plan(Expression::Happy, -15);
        let cute_frames = plan(Expression::Cute, -15);
        let Shape::Disc { r: happy_r, .. } = happy_frames[0].paints[2].shape else {
            panic!("expected disc");
        };
        let Shape::Disc { r: cute_r, .. } = cute_frames[0].paints[2].shape else {
            panic!("expected disc");
        };
        assert!(cute_r > happy_r, "Cute smile is rounder than happy");
    }

    // -------------------------------------------------------------------------
    // Upset Frame Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_upset_lids_sit_at_given_offset() {
        for offset in [-15, -9, -6] {
            let frames = plan(Expression::Upset, offset);
            assert_eq!(frames.len(), 1);
            let Shape::Block { y, .. } = frames[0].paints[2].shape else {
                panic!("expected lid block");
            };
            assert_eq!(y, offset, "Lid block must track the persisted offset");
        }
    }

    // -------------------------------------------------------------------------
    // Hold Duration Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_wonder_holds_at_each_phase_end() {
        let holds: std::vec::Vec<u64> =
            plan(Expression::Wonder, -15).iter().map(|frame| frame.hold_ms).collect();
        assert_eq!(
            holds,
            [0, 0, WONDER_PHASE_HOLD_MS, 0, 0, WONDER_PHASE_HOLD_MS],
            "Each wonder phase ends in a long hold"
        );
    }

    #[test]
    fn test_looks_lead_in_with_held_close_frame() {
        for expression in [
            Expression::LookUp,
            Expression::LookDown,
            Expression::LookLeft,
            Expression::LookRight,
        ] {
            let frames = plan(expression, -15);
            assert_eq!(
                frames[0],
                close_frame(LOOK_LEAD_IN_HOLD_MS),
                "{expression} must start from closed eyes"
            );
            assert!(
                frames[1..].iter().all(|frame| frame.hold_ms == 0),
                "{expression} movement frames present back-to-back"
            );
        }
    }

    // -------------------------------------------------------------------------
    // Look Symmetry Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_vertical_looks_move_both_eyes_together() {
        for expression in [Expression::LookUp, Expression::LookDown] {
            for frame in &plan(expression, -15)[1..] {
                let Shape::RoundedBox { y: left_y, .. } = frame.paints[0].shape else {
                    panic!("expected eye box");
                };
                let Shape::RoundedBox { y: right_y, .. } = frame.paints[1].shape else {
                    panic!("expected eye box");
                };
                assert_eq!(left_y, right_y, "{expression}: both eyes share the vertical offset");
            }
        }
    }

    #[test]
    fn test_horizontal_looks_mirror_each_other() {
        let left = plan(Expression::LookLeft, -15);
        let right = plan(Expression::LookRight, -15);
        for (left_frame, right_frame) in left[1..].iter().zip(&right[1..]) {
            let Shape::RoundedBox { x: lx, .. } = left_frame.paints[0].shape else {
                panic!("expected eye box");
            };
            let Shape::RoundedBox { x: rx, .. } = right_frame.paints[0].shape else {
                panic!("expected eye box");
            };
            assert_eq!(lx - 8, 8 - rx, "Looks shift by mirrored offsets");
        }
    }

    // -------------------------------------------------------------------------
    // Caption Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_caption_frames_contain_two_text_lines() {
        for expression in [Expression::IntroduceSelf, Expression::CreditTeam] {
            let frames = plan(expression, -15);
            assert_eq!(frames.len(), 1);
            assert_eq!(frames[0].paints.len(), 2);
            for paint in &frames[0].paints {
                assert!(
                    matches!(paint.shape, Shape::Caption { .. }),
                    "{expression} renders text only"
                );
                assert_eq!(paint.ink, Ink::On);
            }
        }
    }

    #[test]
    fn test_introduce_self_names_the_robot() {
        let frames = plan(Expression::IntroduceSelf, -15);
        let Shape::Caption { line, .. } = frames[0].paints[0].shape else {
            panic!("expected caption");
        };
        assert!(line.contains("Akno"), "First caption line introduces the robot by name");
    }
}
