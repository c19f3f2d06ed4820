use lagrange::interpolation::lagrange::interpolate_points;
use lagrange::interpolation::point::Point;
use proptest::collection;
use proptest::prelude::*;

/// Distinct integer abscissae in [-4, 4] with y in [-50, 50).
fn point_sets() -> impl Strategy<Value = Vec<Point>> {
    collection::btree_set(-4i32..=4, 1..=6).prop_flat_map(|xs| {
        let n = xs.len();
        let xs: Vec<f64> = xs.into_iter().map(f64::from).collect();
        collection::vec(-50.0f64..50.0, n).prop_map(move |ys| {
            xs.iter().zip(ys).map(|(&x, y)| Point::new(x, y)).collect::<Vec<Point>>()
        })
    })
}

proptest! {
    #[test]
    fn reproduces_nodes(points in point_sets()) {
        let poly = interpolate_points(&points).unwrap();
        for p in &points {
            let got = poly.evaluate(p.x);
            prop_assert!(
                (got - p.y).abs() <= 1e-9 * (1.0 + p.y.abs()),
                "P({}) = {}, want {}", p.x, got, p.y
            );
        }
    }

    #[test]
    fn degree_bounded(points in point_sets()) {
        let poly = interpolate_points(&points).unwrap();
        prop_assert!(poly.degree() <= points.len() - 1);
        prop_assert_eq!(poly.len(), points.len());
    }

    #[test]
    fn order_invariant(points in point_sets(), seed in any::<u64>()) {
        let mut shuffled = points.clone();
        let k = (seed as usize) % shuffled.len();
        shuffled.rotate_left(k);
        if seed & 1 == 1 {
            shuffled.reverse();
        }

        let a = interpolate_points(&points).unwrap();
        let b = interpolate_points(&shuffled).unwrap();
        let bits = |c: &[f64]| c.iter().map(|v| v.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(bits(a.coefficients()), bits(b.coefficients()));
    }
}
