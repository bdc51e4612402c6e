//! Planar map coordinates and turn geometry.
//!
//! Positions come from the map layout (screen-like x/y units) and are used
//! only to measure how sharply a route bends at each intermediate node.
//! They never contribute to route distance; edge weights do that.

/// A 2-D map position.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Interior angle in degrees at `self` between the legs back to `prev`
    /// and forward to `next`.
    ///
    /// 180° is a straight continuation, 90° a right-angle turn, 0° a full
    /// reversal.  Returns `None` when either leg has zero length, since no
    /// direction is defined.
    pub fn turn_angle_deg(self, prev: Point, next: Point) -> Option<f64> {
        let (ax, ay) = (prev.x - self.x, prev.y - self.y);
        let (bx, by) = (next.x - self.x, next.y - self.y);

        let len = ax.hypot(ay) * bx.hypot(by);
        if len == 0.0 || !len.is_finite() {
            return None;
        }

        // Clamp: rounding can push the cosine a hair outside [-1, 1].
        let cos = ((ax * bx + ay * by) / len).clamp(-1.0, 1.0);
        Some(cos.acos().to_degrees())
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}
