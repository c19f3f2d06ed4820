use lagrange::interpolation::errors::InterpolationError;
use lagrange::interpolation::point::{Point, PointSet};

#[test]
fn empty_set() {
    assert_eq!(PointSet::new(Vec::new()).unwrap_err(), InterpolationError::NoPointsProvided);
}

#[test]
fn non_finite_point() {
    let err = PointSet::new(vec![Point::new(0.0, 1.0), Point::new(f64::INFINITY, 1.0)]).unwrap_err();
    assert_eq!(err, InterpolationError::NonFinitePoint { idx: 1 });
}

#[test]
fn signed_zero_is_duplicate() {
    let err = PointSet::new(vec![Point::new(0.0, 1.0), Point::new(-0.0, 2.0)]).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateAbscissa { first: 0, second: 1, .. }));
}

#[test]
fn from_xy_pairs() {
    let set = PointSet::from_xy(&[2.0, -1.0], &[5.0, 6.0]).unwrap();
    assert_eq!(set.points(), &[Point::new(-1.0, 6.0), Point::new(2.0, 5.0)]);

    let err = PointSet::from_xy(&[1.0], &[]).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 1, y_len: 0 }));
}

#[test]
fn single_point_extent() {
    let set = PointSet::new(vec![Point::new(4.0, 1.0)]).unwrap();
    assert_eq!(set.x_extent(), (4.0, 4.0));
    assert_eq!(set.len(), 1);
}
