//! Movement-budget reachability over the grid.
//! Only terrain blocks; other units are walked through. The turn controller
//! decides separately whether an occupied destination may be entered.

use std::collections::{BTreeSet, VecDeque};

use crate::grid::Grid;
use crate::types::Pos;

/// Cells reachable from `origin` in at most `movement` orthogonal steps
/// without entering blocking terrain.
///
/// The origin is always included (distance 0) whatever its own terrain.
/// A negative budget yields the empty set.
pub fn reachable_cells(grid: &Grid, origin: Pos, movement: i32) -> BTreeSet<Pos> {
    let mut visited = BTreeSet::new();
    if movement < 0 {
        return visited;
    }

    let mut queue = VecDeque::new();
    visited.insert(origin);
    queue.push_back((origin, 0));

    while let Some((current, distance)) = queue.pop_front() {
        if distance >= movement {
            continue;
        }
        for neighbor in grid.neighbors(current) {
            if !grid.is_blocking(neighbor) && visited.insert(neighbor) {
                queue.push_back((neighbor, distance + 1));
            }
        }
    }

    visited
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;

    #[test]
    fn budget_one_from_center_is_a_plus_shape() {
        let grid = open_grid(3, 3);
        let reached = reachable_cells(&grid, Pos { y: 1, x: 1 }, 1);
        assert_eq!(
            reached,
            positions(&[(1, 1), (0, 1), (2, 1), (1, 0), (1, 2)]),
            "budget 1 must reach exactly the four orthogonal neighbors and the origin"
        );
    }

    #[test]
    fn large_budget_from_corner_covers_whole_grid() {
        let grid = open_grid(3, 3);
        assert_eq!(reachable_cells(&grid, Pos { y: 0, x: 0 }, 5).len(), 9);
    }

    #[test]
    fn zero_budget_is_just_the_origin() {
        let grid = open_grid(3, 3);
        assert_eq!(reachable_cells(&grid, Pos { y: 2, x: 2 }, 0), positions(&[(2, 2)]));
    }

    #[test]
    fn negative_budget_is_empty() {
        let grid = open_grid(3, 3);
        assert!(reachable_cells(&grid, Pos { y: 0, x: 0 }, -1).is_empty());
    }

    #[test]
    fn blocking_wall_cuts_off_cells_behind_it() {
        // Column 1 is a full wall; nothing right of it is reachable.
        let grid = Grid::from_rows(&[".#.", ".#.", ".#."]).expect("grid");
        let reached = reachable_cells(&grid, Pos { y: 1, x: 0 }, 10);
        assert_eq!(reached, positions(&[(0, 0), (0, 1), (0, 2)]));
        assert!(reached.iter().all(|pos| !grid.is_blocking(*pos)));
    }

    #[test]
    fn detour_around_blocking_cell_costs_extra_steps() {
        let grid = Grid::from_rows(&["...", ".#.", "..."]).expect("grid");
        let origin = Pos { y: 1, x: 0 };
        let behind = Pos { y: 1, x: 2 };
        // Straight line is 2 steps but passes the wall; the detour is 4.
        assert!(!reachable_cells(&grid, origin, 3).contains(&behind));
        assert!(reachable_cells(&grid, origin, 4).contains(&behind));
        assert!(!reachable_cells(&grid, origin, 4).contains(&Pos { y: 1, x: 1 }));
    }

    #[test]
    fn origin_on_blocking_terrain_is_still_included() {
        let grid = Grid::from_rows(&["#.."]).expect("grid");
        let reached = reachable_cells(&grid, Pos { y: 0, x: 0 }, 2);
        assert_eq!(reached, positions(&[(0, 0), (1, 0), (2, 0)]));
    }

    #[test]
    fn distances_are_manhattan_on_open_ground() {
        let grid = open_grid(7, 7);
        let origin = Pos { y: 3, x: 3 };
        for budget in 0..5 {
            let reached = reachable_cells(&grid, origin, budget);
            for cell in grid.cells() {
                let distance = cell.pos.x.abs_diff(origin.x) + cell.pos.y.abs_diff(origin.y);
                assert_eq!(
                    reached.contains(&cell.pos),
                    distance <= budget as u32,
                    "cell {} at distance {distance} with budget {budget}",
                    cell.pos
                );
            }
        }
    }
}
