use circle_relation::{Circle, Classifier, Relation};
use Relation::*;

fn classify(a: (i32, i32, i32), b: (i32, i32, i32)) -> Relation {
    Classifier::Exact.classify(&Circle::new(a.0, a.1, a.2), &Circle::new(b.0, b.1, b.2))
}

const CASES: &[((i32, i32, i32), (i32, i32, i32), Relation)] = &[
    ((0, 0, 3), (0, 0, 3), Coincident),
    ((0, 0, 3), (0, 0, 1), Separate),
    ((0, 0, 5), (10, 0, 5), Tangent),
    ((0, 0, 5), (3, 0, 5), Intersecting),
    ((0, 0, 5), (2, 0, 3), Tangent),
    ((0, 0, 5), (20, 0, 5), Separate),
    ((0, 0, 9), (1, 1, 2), Separate),
    ((0, 0, 2), (3, 4, 3), Tangent),
    ((0, 0, 2), (3, 4, 4), Intersecting),
    ((-5, -5, 1), (5, 5, 1), Separate),
];

#[test]
fn known_configurations() {
    for &(a, b, expected) in CASES {
        assert_eq!(classify(a, b), expected, "{a:?} vs {b:?}");
    }
}

#[test]
fn symmetric_in_the_two_circles() {
    for &(a, b, expected) in CASES {
        assert_eq!(classify(b, a), expected, "{b:?} vs {a:?}");
    }
}

#[test]
fn invariant_under_translation() {
    for &(a, b, expected) in CASES {
        for (dx, dy) in [(1, 0), (-7, 3), (1000, -1000)] {
            let moved_a = (a.0 + dx, a.1 + dy, a.2);
            let moved_b = (b.0 + dx, b.1 + dy, b.2);
            assert_eq!(classify(moved_a, moved_b), expected);
        }
    }
}

#[test]
fn codes_follow_relations() {
    let codes: Vec<i8> = CASES.iter().map(|&(a, b, _)| classify(a, b).code()).collect();
    assert_eq!(codes, vec![-1, 0, 1, 2, 1, 0, 0, 1, 2, 0]);
}

#[test]
fn sweeping_the_distance() {
    // Radii 3 and 5: contained below 2, internally tangent at 2,
    // crossing between 2 and 8, externally tangent at 8, apart beyond
    let expected = |d: i32| match d {
        0 => Separate,
        1 => Separate,
        2 => Tangent,
        3..=7 => Intersecting,
        8 => Tangent,
        _ => Separate,
    };
    for d in 0..12 {
        assert_eq!(classify((0, 0, 3), (d, 0, 5)), expected(d), "distance {d}");
        assert_eq!(classify((0, 0, 3), (0, d, 5)), expected(d), "distance {d}");
    }
}

#[test]
fn extreme_coordinates_do_not_overflow() {
    assert_eq!(
        classify((i32::MIN, 0, i32::MAX), (i32::MAX, 0, i32::MAX)),
        Separate
    );
    assert_eq!(
        classify((i32::MIN + 1, 0, i32::MAX), (i32::MAX, 0, i32::MAX)),
        Tangent
    );
    assert_eq!(
        classify((i32::MIN + 2, 0, i32::MAX), (i32::MAX, 0, i32::MAX)),
        Intersecting
    );
    assert_eq!(
        classify((i32::MIN, i32::MIN, 0), (i32::MAX, i32::MAX, 0)),
        Separate
    );
    assert_eq!(classify((i32::MAX, 0, i32::MAX), (i32::MAX, 0, i32::MAX)), Coincident);
}

#[test]
fn negative_radii_follow_the_signed_sums() {
    for (a, b, expected) in [
        ((0, 0, -5), (10, 0, 5), Tangent),
        ((0, 0, -3), (0, 0, 3), Separate),
        ((0, 0, -5), (3, 0, -5), Separate),
        ((0, 0, -2), (4, 0, 6), Tangent),
    ] {
        assert_eq!(classify(a, b), expected, "{a:?} vs {b:?}");
        assert_eq!(classify(b, a), expected, "{b:?} vs {a:?}");
    }
}
