//! Property tests for the polygon cache contract and the sequence formulas.

use polygons::prelude::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn interior_angle_formula(n in 3usize..2000, r in -100.0f64..100.0) {
        let p = Polygon::new(n, r).unwrap();
        let expected = (n as f64 - 2.0) * 180.0 / n as f64;
        prop_assert!((p.interior_angle_deg() - expected).abs() < 1e-9);
    }

    #[test]
    fn area_and_perimeter_consistent(n in 3usize..500, r in 0.01f64..100.0) {
        let p = Polygon::new(n, r).unwrap();
        let tol = Tolerance::default();
        prop_assert!(tol.is_close(p.perimeter(), n as f64 * p.edge_length()));
        prop_assert!(tol.is_close(p.area(), 0.5 * p.perimeter() * p.apothem()));
        // inscribed in the circumscribed circle
        prop_assert!(p.area() < std::f64::consts::PI * r * r);
        prop_assert!(p.apothem() <= r);
    }

    #[test]
    fn cache_hit_is_idempotent(n in 3usize..100, r in 0.1f64..10.0) {
        let p = Polygon::new(n, r).unwrap();
        let first = (p.area(), p.perimeter(), p.interior_angle_deg(), p.vertex_count());
        let count = p.recompute_count();
        let second = (p.area(), p.perimeter(), p.interior_angle_deg(), p.vertex_count());
        prop_assert_eq!(first.0.to_bits(), second.0.to_bits());
        prop_assert_eq!(first.1.to_bits(), second.1.to_bits());
        prop_assert_eq!(first.2.to_bits(), second.2.to_bits());
        prop_assert_eq!(first.3, second.3);
        prop_assert_eq!(p.recompute_count(), count);
    }

    #[test]
    fn mutation_matches_fresh_instance(
        n0 in 3usize..50, r0 in 0.1f64..10.0,
        n1 in 3usize..50, r1 in 0.1f64..10.0,
    ) {
        let mut p = Polygon::new(n0, r0).unwrap();
        p.area();
        p.perimeter();
        p.interior_angle_deg();
        p.set_edge_count(n1).unwrap();
        p.set_circum_radius(r1);
        let fresh = Polygon::new(n1, r1).unwrap();
        prop_assert_eq!(p.area().to_bits(), fresh.area().to_bits());
        prop_assert_eq!(p.perimeter().to_bits(), fresh.perimeter().to_bits());
        prop_assert_eq!(p.interior_angle_deg().to_bits(), fresh.interior_angle_deg().to_bits());
        prop_assert_eq!(p.vertex_count(), n1);
        prop_assert!(p == fresh);
    }

    #[test]
    fn get_agrees_with_iteration(max in 3usize..80, r in -5.0f64..5.0) {
        let s = PolygonSequence::new(max, r).unwrap();
        prop_assert_eq!(s.len(), max - 2);
        prop_assert_eq!(s.iter().len(), s.len());
        for (i, p) in s.iter().enumerate() {
            let q = s.get(i).unwrap();
            prop_assert_eq!(p.edge_count(), i + 3);
            prop_assert!(p == q);
        }
        let out_of_range = matches!(
            s.get(s.len()),
            Err(PolygonError::IndexOutOfRange { .. })
        );
        prop_assert!(out_of_range);
    }

    #[test]
    fn ordering_ignores_radius(
        a in 3usize..40, b in 3usize..40,
        ra in 0.1f64..9.0, rb in 0.1f64..9.0,
    ) {
        let pa = Polygon::new(a, ra).unwrap();
        let pb = Polygon::new(b, rb).unwrap();
        prop_assert_eq!(pa > pb, a > b);
        prop_assert_eq!(pa < pb, a < b);
    }
}

#[test]
fn construction_below_three_edges_fails_everywhere() {
    for n in 0..3 {
        assert_eq!(Polygon::new(n, 1.0).unwrap_err(), PolygonError::TooFewEdges { got: n });
        assert_eq!(
            PolygonSequence::new(n, 1.0).unwrap_err(),
            PolygonError::TooFewEdges { got: n }
        );
    }
}
