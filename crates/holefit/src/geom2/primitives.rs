use nalgebra::{Matrix2, Rotation2, Vector2};
use serde::{Deserialize, Serialize};

use crate::Point;

/// Mirror axis for [`reflect_on_axis`].
///
/// `X` flips across the horizontal line through the base (y changes),
/// `Y` flips across the vertical line through the base (x changes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Euclidean distance `|b - a|`.
#[inline]
pub fn distance(a: Point, b: Point) -> f64 {
    (b - a).norm()
}

/// Sine and cosine of an angle in degrees, exact on multiples of 90°.
fn sin_cos_degrees(degrees: f64) -> (f64, f64) {
    let r = degrees.rem_euclid(360.0);
    if r == 0.0 {
        (0.0, 1.0)
    } else if r == 90.0 {
        (1.0, 0.0)
    } else if r == 180.0 {
        (0.0, -1.0)
    } else if r == 270.0 {
        (-1.0, 0.0)
    } else {
        r.to_radians().sin_cos()
    }
}

/// Rotate `p` about `center` by `degrees` (counter-clockwise positive).
///
/// Full turns return `p` unchanged (bitwise), not `center + (p - center)`.
pub fn rotate_point(center: Point, degrees: f64, p: Point) -> Point {
    let (s, c) = sin_cos_degrees(degrees);
    if s == 0.0 && c == 1.0 {
        return p;
    }
    let rot = Rotation2::from_matrix_unchecked(Matrix2::new(c, -s, s, c));
    center + rot * (p - center)
}

/// Mirror `p` across the axis-parallel line through `base`.
#[inline]
pub fn reflect_on_axis(base: Point, p: Point, axis: Axis) -> Point {
    match axis {
        Axis::X => Vector2::new(p.x, 2.0 * base.y - p.y),
        Axis::Y => Vector2::new(2.0 * base.x - p.x, p.y),
    }
}

/// Mirror `p` across the infinite line through `from` and `to`.
///
/// Projects `p` onto the line and reflects through the foot point.
/// Returns `None` when `from == to` (no line defined).
pub fn reflect_across_segment(from: Point, to: Point, p: Point) -> Option<Point> {
    let seg = to - from;
    let len = seg.norm();
    if !(len.is_finite()) || len <= 0.0 {
        return None;
    }
    let dir = seg / len;
    let t = dir.dot(&(p - from));
    let foot = from + dir * t;
    Some(foot * 2.0 - p)
}

/// Axis-aligned bounds `(min, max)` of a point stream; `None` if empty.
pub fn bounding_box<'a, I>(points: I) -> Option<(Point, Point)>
where
    I: IntoIterator<Item = &'a Point>,
{
    let mut it = points.into_iter();
    let first = *it.next()?;
    Some(it.fold((first, first), |(lo, hi), p| (lo.inf(p), hi.sup(p))))
}
