use super::*;
use nalgebra::vector;

const TOL: f64 = 1e-12;

fn close(a: crate::Point, b: crate::Point) -> bool {
    (a - b).norm() < TOL
}

#[test]
fn distance_is_euclidean() {
    assert_eq!(distance(vector![0.0, 0.0], vector![3.0, 4.0]), 5.0);
    assert_eq!(distance(vector![1.0, 1.0], vector![1.0, 1.0]), 0.0);
}

#[test]
fn rotate_zero_is_bitwise_identity() {
    let p = vector![0.3, -7.1];
    let c = vector![0.1, 0.2];
    assert_eq!(rotate_point(c, 0.0, p), p);
    assert_eq!(rotate_point(c, 360.0, p), p);
    assert_eq!(rotate_point(c, -720.0, p), p);
}

#[test]
fn rotate_quarter_turns_stay_integral() {
    let c = vector![1.0, 1.0];
    let p = vector![4.0, 1.0];
    assert_eq!(rotate_point(c, 90.0, p), vector![1.0, 4.0]);
    assert_eq!(rotate_point(c, 180.0, p), vector![-2.0, 1.0]);
    assert_eq!(rotate_point(c, 270.0, p), vector![1.0, -2.0]);
    assert_eq!(rotate_point(c, -90.0, p), vector![1.0, -2.0]);
}

#[test]
fn rotate_generic_angle_preserves_radius() {
    let c = vector![2.0, -1.0];
    let p = vector![5.0, 3.0];
    let q = rotate_point(c, 37.5, p);
    assert!((distance(c, q) - distance(c, p)).abs() < TOL);
    // counter-clockwise: cross product of (p - c) and (q - c) is positive
    let a = p - c;
    let b = q - c;
    assert!(a.x * b.y - a.y * b.x > 0.0);
}

#[test]
fn axis_flip_keeps_the_other_coordinate() {
    let base = vector![2.0, 3.0];
    let p = vector![5.0, 7.0];
    assert_eq!(reflect_on_axis(base, p, Axis::X), vector![5.0, -1.0]);
    assert_eq!(reflect_on_axis(base, p, Axis::Y), vector![-1.0, 7.0]);
}

#[test]
fn segment_reflection_mirrors_across_line() {
    // line y = x
    let q =
        reflect_across_segment(vector![0.0, 0.0], vector![1.0, 1.0], vector![3.0, 0.0]).unwrap();
    assert!(close(q, vector![0.0, 3.0]));
    // point on the line is fixed
    let on =
        reflect_across_segment(vector![0.0, 0.0], vector![2.0, 0.0], vector![5.0, 0.0]).unwrap();
    assert!(close(on, vector![5.0, 0.0]));
    // the line is infinite, not clipped to the segment
    let far =
        reflect_across_segment(vector![0.0, 0.0], vector![1.0, 0.0], vector![9.0, 2.0]).unwrap();
    assert!(close(far, vector![9.0, -2.0]));
}

#[test]
fn segment_reflection_rejects_zero_length() {
    let p = vector![1.0, 1.0];
    assert!(reflect_across_segment(p, p, vector![3.0, 4.0]).is_none());
}

#[test]
fn bounding_box_of_points() {
    let pts = [vector![1.0, 5.0], vector![-2.0, 3.0], vector![4.0, -1.0]];
    let (lo, hi) = bounding_box(pts.iter()).unwrap();
    assert_eq!(lo, vector![-2.0, -1.0]);
    assert_eq!(hi, vector![4.0, 5.0]);
    assert!(bounding_box(std::iter::empty()).is_none());
}
