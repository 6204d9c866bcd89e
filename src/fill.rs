// Bucket fill: recolor the 8-connected region under the cursor.

use std::collections::VecDeque;

use crate::canvas::Canvas;
use crate::types::{Color, Position};

// Directions to the 8 surrounding cells.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// Recolor every pixel 8-connected to `start` through `target`-colored cells.
///
/// Breadth-first; visitation is tracked separately from color, so each cell
/// in the region is recolored exactly once no matter what `replacement` is.
/// Out-of-bounds starts, `target == replacement` and a start pixel that
/// isn't `target` are no-ops. Returns how many pixels changed.
pub fn flood_fill(canvas: &mut Canvas, start: Position, target: Color, replacement: Color) -> usize {
    if target == replacement {
        return 0;
    }
    match canvas.get_pixel(start) {
        Ok(c) if c == target => {}
        _ => return 0,
    }

    let (w, h) = (canvas.width(), canvas.height());
    let mut visited = vec![false; w * h];
    let mut queue = VecDeque::new();
    visited[start.y * w + start.x] = true;
    queue.push_back(start);

    let mut recolored = 0;
    while let Some(p) = queue.pop_front() {
        canvas.set_pixel(p, replacement);
        recolored += 1;

        for (dx, dy) in NEIGHBORS {
            let (Some(nx), Some(ny)) = (p.x.checked_add_signed(dx), p.y.checked_add_signed(dy)) else {
                continue;
            };
            if nx >= w || ny >= h || visited[ny * w + nx] {
                continue;
            }
            let n = Position::new(nx, ny);
            if matches!(canvas.get_pixel(n), Ok(c) if c == target) {
                visited[ny * w + nx] = true;
                queue.push_back(n);
            }
        }
    }
    recolored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BLACK, RED, WHITE};
    use pretty_assertions::assert_eq;

    fn snapshot(canvas: &Canvas) -> Vec<Color> {
        canvas.pixels().copied().collect()
    }

    #[test]
    fn same_target_and_replacement_is_a_no_op() {
        let mut canvas = Canvas::new(20, 20, WHITE);
        canvas.draw_line(Position::new(0, 10), Position::new(19, 10), BLACK, 1);
        let before = snapshot(&canvas);
        for p in [Position::new(0, 0), Position::new(5, 10), Position::new(19, 19)] {
            for c in [WHITE, BLACK, RED] {
                assert_eq!(flood_fill(&mut canvas, p, c, c), 0);
            }
        }
        assert_eq!(snapshot(&canvas), before);
    }

    #[test]
    fn out_of_bounds_start_is_a_no_op() {
        let mut canvas = Canvas::new(20, 20, WHITE);
        assert_eq!(flood_fill(&mut canvas, Position::new(20, 5), WHITE, BLACK), 0);
        assert_eq!(flood_fill(&mut canvas, Position::new(5, 500), WHITE, BLACK), 0);
        assert!(canvas.pixels().all(|c| *c == WHITE));
    }

    #[test]
    fn start_not_matching_target_is_a_no_op() {
        let mut canvas = Canvas::new(20, 20, WHITE);
        assert_eq!(flood_fill(&mut canvas, Position::new(3, 3), BLACK, RED), 0);
        assert!(canvas.pixels().all(|c| *c == WHITE));
    }

    #[test]
    fn whole_canvas_round_trip() {
        let mut canvas = Canvas::new(450, 450, WHITE);
        assert_eq!(flood_fill(&mut canvas, Position::new(10, 10), WHITE, BLACK), 450 * 450);
        assert!(canvas.pixels().all(|c| *c == BLACK));
        assert_eq!(flood_fill(&mut canvas, Position::new(10, 10), BLACK, WHITE), 450 * 450);
        assert!(canvas.pixels().all(|c| *c == WHITE));
    }

    #[test]
    fn fill_stops_at_closed_border() {
        let mut canvas = Canvas::new(10, 10, WHITE);
        // Square outline from (2,2) to (6,6).
        for i in 2..=6 {
            canvas.set_pixel(Position::new(i, 2), BLACK);
            canvas.set_pixel(Position::new(i, 6), BLACK);
            canvas.set_pixel(Position::new(2, i), BLACK);
            canvas.set_pixel(Position::new(6, i), BLACK);
        }
        assert_eq!(flood_fill(&mut canvas, Position::new(4, 4), WHITE, RED), 9);
        assert_eq!(canvas.get_pixel(Position::new(3, 3)).unwrap(), RED);
        assert_eq!(canvas.get_pixel(Position::new(5, 5)).unwrap(), RED);
        assert_eq!(canvas.get_pixel(Position::new(2, 2)).unwrap(), BLACK);
        assert_eq!(canvas.get_pixel(Position::new(0, 0)).unwrap(), WHITE);
        assert_eq!(canvas.get_pixel(Position::new(8, 8)).unwrap(), WHITE);
    }

    #[test]
    fn diagonal_gaps_leak_under_eight_connectivity() {
        let mut canvas = Canvas::new(6, 6, WHITE);
        // Anti-diagonal wall: 4-connected fill could not cross it, 8-connected can.
        for i in 0..6 {
            canvas.set_pixel(Position::new(i, 5 - i), BLACK);
        }
        let filled = flood_fill(&mut canvas, Position::new(0, 0), WHITE, RED);
        assert_eq!(filled, 30);
        assert_eq!(canvas.get_pixel(Position::new(5, 5)).unwrap(), RED);
    }

    #[test]
    fn diagonal_chain_is_one_region() {
        let mut canvas = Canvas::new(8, 8, WHITE);
        for i in 0..8 {
            canvas.set_pixel(Position::new(i, i), BLACK);
        }
        assert_eq!(flood_fill(&mut canvas, Position::new(7, 7), BLACK, RED), 8);
        assert_eq!(canvas.pixels().filter(|c| **c == BLACK).count(), 0);
    }

    #[test]
    fn replacement_equal_to_neighbor_color_does_not_spread() {
        let mut canvas = Canvas::new(10, 1, WHITE);
        // W W W R R W W W W W: filling the left white run with red must
        // not continue into the white run beyond the existing red cells.
        canvas.set_pixel(Position::new(3, 0), RED);
        canvas.set_pixel(Position::new(4, 0), RED);
        assert_eq!(flood_fill(&mut canvas, Position::new(0, 0), WHITE, RED), 3);
        assert_eq!(canvas.get_pixel(Position::new(5, 0)).unwrap(), WHITE);
    }
}
