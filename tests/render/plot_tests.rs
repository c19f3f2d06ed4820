use lagrange::interpolation::lagrange::interpolate_points;
use lagrange::interpolation::point::{Point, PointSet};
use lagrange::render::plot::{sample, write_json, DEFAULT_SAMPLES};

#[test]
fn samples_cover_extent() {
    let set = PointSet::new(vec![Point::new(-1.0, 1.0), Point::new(0.0, 0.0), Point::new(2.0, 4.0)]).unwrap();
    let poly = interpolate_points(set.points()).unwrap();
    let data = sample(&set, &poly, DEFAULT_SAMPLES).unwrap();

    assert_eq!(data.x.len(), 100);
    assert_eq!(data.y.len(), 100);
    assert_eq!(data.x[0], -1.0);
    assert_eq!(data.x[99], 2.0);
    assert_eq!(data.points.len(), 3);
    for (x, y) in data.x.iter().zip(&data.y) {
        assert!((y - x * x).abs() < 1e-9);
    }
}

#[test]
fn single_point_window_is_padded() {
    let set = PointSet::new(vec![Point::new(3.0, 5.0)]).unwrap();
    let poly = interpolate_points(set.points()).unwrap();
    let data = sample(&set, &poly, 5).unwrap();
    assert_eq!(data.x, vec![2.0, 2.5, 3.0, 3.5, 4.0]);
    assert!(data.y.iter().all(|&y| y == 5.0));
}

#[test]
fn json_export() {
    let set = PointSet::new(vec![Point::new(0.0, 1.0), Point::new(1.0, 3.0)]).unwrap();
    let poly = interpolate_points(set.points()).unwrap();
    let data = sample(&set, &poly, 3).unwrap();

    let mut buf = Vec::new();
    write_json(&data, &mut buf).unwrap();
    let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();

    assert_eq!(value["polynomial"], "2.0 * x + 1.0");
    assert_eq!(value["x"].as_array().unwrap().len(), 3);
    assert_eq!(value["points"][1]["y"], 3.0);
}
