// Global replace: every pixel of one color becomes another.

use crate::canvas::Canvas;
use crate::types::Color;

/// Scan the whole grid and recolor each `target` pixel to `replacement`.
/// Returns how many pixels matched.
pub fn replace_all(canvas: &mut Canvas, target: Color, replacement: Color) -> usize {
    if target == replacement {
        return 0;
    }
    let mut matched = 0;
    for px in canvas.pixels_mut() {
        if *px == target {
            *px = replacement;
            matched += 1;
        }
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLACK, BLUE, Position, RED, WHITE};
    use pretty_assertions::assert_eq;

    #[test]
    fn all_black_becomes_all_red_then_nothing_left() {
        let mut canvas = Canvas::new(64, 48, BLACK);
        assert_eq!(replace_all(&mut canvas, BLACK, RED), 64 * 48);
        assert!(canvas.pixels().all(|c| *c == RED));
        assert_eq!(replace_all(&mut canvas, BLACK, RED), 0);
        assert!(canvas.pixels().all(|c| *c == RED));
    }

    #[test]
    fn only_matching_pixels_change_including_the_origin() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        canvas.set_pixel(Position::new(0, 0), BLACK);
        canvas.set_pixel(Position::new(9, 9), BLACK);
        canvas.set_pixel(Position::new(4, 4), BLUE);

        assert_eq!(replace_all(&mut canvas, BLACK, RED), 2);
        assert_eq!(canvas.get_pixel(Position::new(0, 0)).unwrap(), RED);
        assert_eq!(canvas.get_pixel(Position::new(9, 9)).unwrap(), RED);
        assert_eq!(canvas.get_pixel(Position::new(4, 4)).unwrap(), BLUE);
        assert_eq!(canvas.pixels().filter(|c| **c == WHITE).count(), 97);
        assert_eq!(canvas.pixels().filter(|c| **c == BLACK).count(), 0);
    }

    #[test]
    fn replacing_with_the_same_color_changes_nothing() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        assert_eq!(replace_all(&mut canvas, WHITE, WHITE), 0);
        assert!(canvas.pixels().all(|c| *c == WHITE));
    }

    #[test]
    fn disconnected_regions_are_all_replaced() {
        let mut canvas = Canvas::new(30, 30, WHITE);
        canvas.draw_line(Position::new(2, 2), Position::new(2, 2), BLACK, 2);
        canvas.draw_line(Position::new(25, 25), Position::new(25, 25), BLACK, 2);
        assert_eq!(replace_all(&mut canvas, BLACK, BLUE), 8);
        assert_eq!(canvas.pixels().filter(|c| **c == BLUE).count(), 8);
    }
}
