//! Closed-form wall smoothing
//!
//! Bends a desired heading just enough that a look-ahead "stick" of fixed
//! length, held out from the agent along the heading, stays inside the field.
//!
//! For each wall the headings that poke the stick through it form one
//! contiguous arc. Rotating out of that arc ends where the stick tip touches
//! the wall: with `a` the distance to the wall and `b = sqrt(stick² - a²)` the
//! tip sits `b` along the wall from the foot of the perpendicular. If that
//! tangent point is itself past the next wall in the rotation, the same
//! construction repeats on that wall.

use crate::consts::EPSILON;
use crate::geom::{ArenaVec, AxisRectangle, Point};

/// Field edges, listed in clockwise order starting from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// Edge reached next when sweeping in `rotation` (+1 clockwise)
    fn next(self, rotation: f64) -> Edge {
        match (self, rotation > 0.0) {
            (Edge::Top, true) | (Edge::Bottom, false) => Edge::Right,
            (Edge::Right, true) | (Edge::Left, false) => Edge::Bottom,
            (Edge::Bottom, true) | (Edge::Top, false) => Edge::Left,
            (Edge::Left, true) | (Edge::Right, false) => Edge::Top,
        }
    }

    /// First edge `p` lies beyond, checked top, right, bottom, left
    fn violated_by(field: &AxisRectangle, p: Point) -> Option<Edge> {
        if p.y > field.max_y + EPSILON {
            Some(Edge::Top)
        } else if p.x > field.max_x + EPSILON {
            Some(Edge::Right)
        } else if p.y < field.min_y - EPSILON {
            Some(Edge::Bottom)
        } else if p.x < field.min_x - EPSILON {
            Some(Edge::Left)
        } else {
            None
        }
    }

    /// Perpendicular distance from `source` to this edge's line (negative past it)
    fn distance_from(self, field: &AxisRectangle, source: Point) -> f64 {
        match self {
            Edge::Top => field.max_y - source.y,
            Edge::Right => field.max_x - source.x,
            Edge::Bottom => source.y - field.min_y,
            Edge::Left => source.x - field.min_x,
        }
    }

    /// Point on this edge where a stick rotating in `rotation` leaves the wall
    ///
    /// `None` when the edge is out of the stick's reach.
    fn tangent_point(
        self,
        field: &AxisRectangle,
        source: Point,
        stick_length: f64,
        rotation: f64,
    ) -> Option<Point> {
        let a = self.distance_from(field, source).max(0.0);
        let b_squared = stick_length * stick_length - a * a;
        if b_squared < 0.0 {
            return None;
        }
        let b = b_squared.sqrt() * rotation;

        Some(match self {
            Edge::Top => Point::new(source.x + b, field.max_y),
            Edge::Right => Point::new(field.max_x, source.y - b),
            Edge::Bottom => Point::new(source.x - b, field.min_y),
            Edge::Left => Point::new(field.min_x, source.y + b),
        })
    }
}

/// Heading closest to `desired_heading` (sweeping in `rotation_direction`)
/// whose stick stays inside `inset_field`
///
/// Returns `desired_heading` untouched when no correction is needed or the
/// stick is degenerate. When no heading keeps the whole stick inside, the
/// heading toward the first wall's tangent point is returned instead and the
/// caller should re-check containment.
pub fn wall_smooth(
    inset_field: &AxisRectangle,
    stick_length: f64,
    source: Point,
    desired_heading: f64,
    rotation_direction: i32,
) -> f64 {
    debug_assert!(
        rotation_direction == 1 || rotation_direction == -1,
        "rotation direction must be ±1, got {rotation_direction}"
    );
    let rotation = if rotation_direction < 0 { -1.0 } else { 1.0 };

    if stick_length < EPSILON {
        return desired_heading;
    }

    let projected = source.project(desired_heading, stick_length);
    let Some(first) = Edge::violated_by(inset_field, projected) else {
        return desired_heading;
    };

    let mut fallback = None;
    let mut edge = first;
    for _ in 0..4 {
        if let Some(candidate) = edge.tangent_point(inset_field, source, stick_length, rotation) {
            if inset_field.contains(candidate) {
                return source.bearing_to(candidate);
            }
            if fallback.is_none() {
                fallback = Some(candidate);
            }
        }
        edge = edge.next(rotation);
    }

    log::trace!(
        "no wall-safe heading from ({:.1}, {:.1}) with stick {:.1}",
        source.x,
        source.y,
        stick_length
    );
    fallback.map_or(desired_heading, |candidate| source.bearing_to(candidate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize_relative;
    use proptest::prelude::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, TAU};

    fn field() -> AxisRectangle {
        AxisRectangle::battlefield(800.0, 600.0).shrink(18.0, 18.0)
    }

    /// Rotate in small steps until the stick fits
    fn iterative_smooth(
        field: &AxisRectangle,
        stick: f64,
        source: Point,
        mut heading: f64,
        rotation: f64,
    ) -> f64 {
        for _ in 0..20_000 {
            if field.contains(source.project(heading, stick)) {
                return heading;
            }
            heading += rotation * 0.0005;
        }
        heading
    }

    #[test]
    fn test_identity_when_inside() {
        let field = field();
        let source = field.center();
        for i in 0..8 {
            let heading = i as f64 * FRAC_PI_4;
            assert_eq!(wall_smooth(&field, 160.0, source, heading, 1), heading);
            assert_eq!(wall_smooth(&field, 160.0, source, heading, -1), heading);
        }
    }

    #[test]
    fn test_single_wall_tangent() {
        let field = field();
        let source = Point::new(400.0, 500.0);
        let b = (160.0f64 * 160.0 - 82.0 * 82.0).sqrt();

        let heading = wall_smooth(&field, 160.0, source, 0.0, 1);
        let tip = source.project(heading, 160.0);
        assert!((tip.y - 582.0).abs() < 1e-9);
        assert!((tip.x - (400.0 + b)).abs() < 1e-9);

        let heading = wall_smooth(&field, 160.0, source, 0.0, -1);
        let tip = source.project(heading, 160.0);
        assert!((tip.y - 582.0).abs() < 1e-9);
        assert!((tip.x - (400.0 - b)).abs() < 1e-9);
    }

    #[test]
    fn test_corner_chains_to_next_wall() {
        let field = field();
        let source = Point::new(700.0, 520.0);

        // Clockwise out of the top-right corner slides down the right wall
        let heading = wall_smooth(&field, 160.0, source, FRAC_PI_4, 1);
        let tip = source.project(heading, 160.0);
        let b = (160.0f64 * 160.0 - 82.0 * 82.0).sqrt();
        assert!((tip.x - 782.0).abs() < 1e-9);
        assert!((tip.y - (520.0 - b)).abs() < 1e-9);
        assert!(field.contains(tip));

        // Counter-clockwise only needs the top wall
        let heading = wall_smooth(&field, 160.0, source, FRAC_PI_4, -1);
        let tip = source.project(heading, 160.0);
        let b = (160.0f64 * 160.0 - 62.0 * 62.0).sqrt();
        assert!((tip.y - 582.0).abs() < 1e-9);
        assert!((tip.x - (700.0 - b)).abs() < 1e-9);
    }

    #[test]
    fn test_oversized_stick_lands_on_nearest_wall_tangent() {
        let field = field();
        let source = field.center();
        let half_diagonal = (field.width().powi(2) + field.height().powi(2)).sqrt() / 2.0;
        let stick = half_diagonal + 100.0;

        let heading = wall_smooth(&field, stick, source, 0.0, 1);
        let tip = source.project(heading, stick);
        let a = field.max_y - source.y;
        let b = (stick * stick - a * a).sqrt();
        assert!((tip.y - field.max_y).abs() < 1e-9);
        assert!((tip.x - (source.x + b)).abs() < 1e-9);
    }

    #[test]
    fn test_source_past_wall_is_clamped() {
        let field = field();
        let source = Point::new(400.0, 590.0);
        let heading = wall_smooth(&field, 160.0, source, 0.0, 1);
        assert!(heading.is_finite());
        // Now heading along or away from the top wall, toward the east
        assert!(heading.cos() <= 0.0);
        assert!(heading.sin() > 0.0);
    }

    #[test]
    fn test_degenerate_stick() {
        let field = field();
        let source = Point::new(781.0, 300.0);
        assert_eq!(wall_smooth(&field, 0.0, source, FRAC_PI_2, 1), FRAC_PI_2);
    }

    #[test]
    fn test_matches_iterative_smoothing() {
        let field = field();
        let sources = [
            Point::new(60.0, 60.0),
            Point::new(400.0, 560.0),
            Point::new(760.0, 300.0),
            Point::new(700.0, 90.0),
        ];
        for source in sources {
            for i in 0..32 {
                let desired = i as f64 * TAU / 32.0;
                for rotation in [1, -1] {
                    let analytic = wall_smooth(&field, 160.0, source, desired, rotation);
                    let iterative =
                        iterative_smooth(&field, 160.0, source, desired, rotation as f64);
                    let diff = normalize_relative(analytic - iterative).abs();
                    assert!(
                        diff < 0.001,
                        "source {source:?} desired {desired} rotation {rotation}: {analytic} vs {iterative}"
                    );
                }
            }
        }
    }

    proptest! {
        #[test]
        fn smoothed_stick_stays_inside(
            x in 18.0f64..=782.0,
            y in 18.0f64..=582.0,
            desired in 0.0f64..TAU,
            clockwise in any::<bool>(),
        ) {
            let field = field();
            let source = Point::new(x, y);
            let rotation = if clockwise { 1 } else { -1 };
            let heading = wall_smooth(&field, 160.0, source, desired, rotation);
            prop_assert!(field.contains(source.project(heading, 160.0)));
            prop_assert_eq!(heading, wall_smooth(&field, 160.0, source, desired, rotation));
        }
    }
}
