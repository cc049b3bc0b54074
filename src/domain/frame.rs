//! Frame generation
//!
//! Maps a directional command onto a rectangle inside the usable screen
//! frame, before any padding is applied. All fractions are computed on the
//! raw `f64` screen size; nothing is rounded here, so sub-pixel targets are
//! passed through to the platform as-is.

use crate::domain::core::Rect;
use crate::domain::direction::Direction;

/// Computes the unpadded target rectangle for `direction`
///
/// # Arguments
/// * `current` - The window's current frame (only `Center` reads it)
/// * `screen` - Usable screen frame in global coordinates
/// * `direction` - Requested placement
///
/// # Returns
/// The target rectangle, or `None` when the direction has no mapping
///
/// # Example
/// ```rust
/// use snapwin::domain::{core::Rect, direction::Direction, frame::generate};
///
/// let screen = Rect::new(0.0, 0.0, 1920.0, 1080.0);
/// let rect = generate(screen, screen, Direction::LeftHalf).unwrap();
/// assert_eq!(rect, Rect::new(0.0, 0.0, 960.0, 1080.0));
/// ```
pub fn generate(current: Rect, screen: Rect, direction: Direction) -> Option<Rect> {
    use Direction::*;

    let Rect { x: sx, y: sy, w: sw, h: sh } = screen;
    let half_w = sw / 2.0;
    let half_h = sh / 2.0;
    let third_w = sw / 3.0;
    let third_h = sh / 3.0;

    let rect = match direction {
        Maximize => screen,
        Center => Rect::new(
            sx + (sw - current.w) / 2.0,
            sy + (sh - current.h) / 2.0,
            current.w,
            current.h,
        ),

        TopHalf => Rect::new(sx, sy, sw, half_h),
        BottomHalf => Rect::new(sx, sy + half_h, sw, half_h),
        LeftHalf => Rect::new(sx, sy, half_w, sh),
        RightHalf => Rect::new(sx + half_w, sy, half_w, sh),

        TopLeftQuarter => Rect::new(sx, sy, half_w, half_h),
        TopRightQuarter => Rect::new(sx + half_w, sy, half_w, half_h),
        BottomLeftQuarter => Rect::new(sx, sy + half_h, half_w, half_h),
        BottomRightQuarter => Rect::new(sx + half_w, sy + half_h, half_w, half_h),

        LeftThird => Rect::new(sx, sy, third_w, sh),
        CenterThird => Rect::new(sx + third_w, sy, third_w, sh),
        RightThird => Rect::new(sx + 2.0 * third_w, sy, third_w, sh),
        LeftTwoThirds => Rect::new(sx, sy, 2.0 * third_w, sh),
        RightTwoThirds => Rect::new(sx + third_w, sy, 2.0 * third_w, sh),

        TopThird => Rect::new(sx, sy, sw, third_h),
        MiddleThird => Rect::new(sx, sy + third_h, sw, third_h),
        BottomThird => Rect::new(sx, sy + 2.0 * third_h, sw, third_h),
        TopTwoThirds => Rect::new(sx, sy, sw, 2.0 * third_h),
        BottomTwoThirds => Rect::new(sx, sy + third_h, sw, 2.0 * third_h),

        Undefined => return None,
    };

    Some(rect)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    const EPS: f64 = 1e-9;

    fn create_test_screen() -> Rect {
        Rect::new(0.0, 0.0, 1920.0, 1080.0)
    }

    fn gen_on(screen: Rect, direction: Direction) -> Rect {
        generate(Rect::new(100.0, 100.0, 800.0, 600.0), screen, direction).unwrap()
    }

    #[test]
    fn maximize_is_full_frame() {
        let screen = create_test_screen();
        assert_eq!(gen_on(screen, Direction::Maximize), screen);
    }

    #[test]
    fn undefined_has_no_result() {
        let screen = create_test_screen();
        assert_eq!(generate(screen, screen, Direction::Undefined), None);
    }

    #[test]
    fn center_keeps_window_size() {
        let screen = create_test_screen();
        let current = Rect::new(5.0, 5.0, 800.0, 600.0);
        let rect = generate(current, screen, Direction::Center).unwrap();
        assert_eq!(rect, Rect::new(560.0, 240.0, 800.0, 600.0));
    }

    #[test]
    fn quarters_anchor_to_corners() {
        let screen = create_test_screen();
        assert_eq!(
            gen_on(screen, Direction::TopLeftQuarter),
            Rect::new(0.0, 0.0, 960.0, 540.0)
        );
        assert_eq!(
            gen_on(screen, Direction::TopRightQuarter),
            Rect::new(960.0, 0.0, 960.0, 540.0)
        );
        assert_eq!(
            gen_on(screen, Direction::BottomLeftQuarter),
            Rect::new(0.0, 540.0, 960.0, 540.0)
        );
        assert_eq!(
            gen_on(screen, Direction::BottomRightQuarter),
            Rect::new(960.0, 540.0, 960.0, 540.0)
        );
    }

    #[test]
    fn halves_partition_screen() {
        let screen = create_test_screen();
        let left = gen_on(screen, Direction::LeftHalf);
        let right = gen_on(screen, Direction::RightHalf);
        assert_eq!(left.w + right.w, screen.w);
        assert_eq!(left.right(), right.x);

        let top = gen_on(screen, Direction::TopHalf);
        let bottom = gen_on(screen, Direction::BottomHalf);
        assert_eq!(top.h + bottom.h, screen.h);
        assert_eq!(top.bottom(), bottom.y);
    }

    #[test]
    fn thirds_keep_fractional_widths() {
        // 1000 / 3 is not a whole number; the value must pass through unrounded
        let screen = Rect::new(0.0, 0.0, 1000.0, 900.0);
        let left = gen_on(screen, Direction::LeftThird);
        let center = gen_on(screen, Direction::CenterThird);
        let right = gen_on(screen, Direction::RightThird);

        assert_eq!(left.w, 1000.0 / 3.0);
        assert!((left.right() - center.x).abs() < EPS);
        assert!((center.right() - right.x).abs() < EPS);
        assert!((right.right() - screen.right()).abs() < EPS);
    }

    #[test]
    fn two_thirds_complement_thirds() {
        let screen = Rect::new(0.0, 0.0, 1500.0, 900.0);
        let left_two = gen_on(screen, Direction::LeftTwoThirds);
        let right_one = gen_on(screen, Direction::RightThird);
        assert!((left_two.w + right_one.w - screen.w).abs() < EPS);
        assert!((left_two.right() - right_one.x).abs() < EPS);

        let top_one = gen_on(screen, Direction::TopThird);
        let bottom_two = gen_on(screen, Direction::BottomTwoThirds);
        assert!((top_one.h + bottom_two.h - screen.h).abs() < EPS);
        assert!((top_one.bottom() - bottom_two.y).abs() < EPS);
    }

    #[test]
    fn every_mapped_direction_stays_inside_screen() {
        let screens = [
            create_test_screen(),
            Rect::new(1920.0, 0.0, 2560.0, 1415.0),
            Rect::new(-1280.0, -200.0, 1280.0, 1024.0),
        ];

        for screen in screens {
            for direction in Direction::iter().filter(|d| *d != Direction::Center) {
                let Some(rect) = generate(screen, screen, direction) else {
                    assert_eq!(direction, Direction::Undefined);
                    continue;
                };
                assert!(rect.w >= 0.0 && rect.h >= 0.0, "{direction} has negative size");
                assert!(rect.x >= screen.x - EPS, "{direction} leaves screen on the left");
                assert!(rect.y >= screen.y - EPS, "{direction} leaves screen on the top");
                assert!(rect.right() <= screen.right() + EPS, "{direction} overflows right");
                assert!(rect.bottom() <= screen.bottom() + EPS, "{direction} overflows bottom");
            }
        }
    }

    #[test]
    fn offset_screen_shifts_origin() {
        let screen = Rect::new(1920.0, 0.0, 1920.0, 1080.0); // Second monitor
        assert_eq!(
            gen_on(screen, Direction::RightHalf),
            Rect::new(2880.0, 0.0, 960.0, 1080.0)
        );
        assert_eq!(
            gen_on(screen, Direction::BottomThird),
            Rect::new(1920.0, 720.0, 1920.0, 360.0)
        );
    }
}
