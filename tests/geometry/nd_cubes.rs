use approx::assert_relative_eq;
use proxima::math::{Point, Vector};
use proxima::query;
use proxima::shape::Cuboid;

#[test]
fn squares_2d() {
    let c1 = Cuboid::new(Point::<2>::origin(), Vector::new(1.0, 1.0));
    let far = Cuboid::new(Point::<2>::new(3.0, 0.0), Vector::new(1.0, 1.0));
    let near = Cuboid::new(Point::<2>::new(1.5, 0.0), Vector::new(1.0, 1.0));

    let mut axis = Vector::zeros();
    assert!(!query::minimal_separation_axis(&c1, &far, &mut axis));
    assert_relative_eq!(axis, Vector::<2>::new(1.0, 0.0), epsilon = 1.0e-3);

    let mut axis = Vector::zeros();
    assert!(query::minimal_separation_axis(&c1, &near, &mut axis));
    assert_relative_eq!(axis.norm(), 0.5, epsilon = 1.0e-2);
    assert_relative_eq!(axis[0].abs(), 0.5, epsilon = 1.0e-2);
}

#[test]
fn hypercubes_4d() {
    let he = Vector::<4>::new(1.0, 1.0, 1.0, 1.0);
    let c1 = Cuboid::new(Point::origin(), he);
    let far = Cuboid::new(Point::<4>::new(3.0, 0.0, 0.0, 0.0), he);
    let near = Cuboid::new(Point::<4>::new(1.0, 0.0, 0.0, 0.0), he);

    assert!(!query::intersection_test(&c1, &far));
    assert!(query::intersection_test(&c1, &near));

    let mut axis = Vector::zeros();
    assert!(!query::minimal_separation_axis(&c1, &far, &mut axis));
    assert_relative_eq!(
        axis,
        Vector::<4>::new(1.0, 0.0, 0.0, 0.0),
        epsilon = 1.0e-3
    );

    let mut axis = Vector::zeros();
    assert!(query::minimal_separation_axis(&c1, &near, &mut axis));
    assert_relative_eq!(axis.norm(), 1.0, epsilon = 1.0e-2);
    assert_relative_eq!(axis[0].abs(), 1.0, epsilon = 1.0e-2);
}

#[test]
fn hypercubes_5d() {
    let he = Vector::<5>::from_element(1.0);
    let c1 = Cuboid::new(Point::origin(), he);
    let diag = Cuboid::new(Point::<5>::new(2.5, 2.5, 0.0, 0.0, 0.0), he);
    let same = Cuboid::new(Point::origin(), he);

    let mut axis = Vector::zeros();
    assert!(!query::minimal_separation_axis(&c1, &diag, &mut axis));
    assert_relative_eq!(axis[0], 0.5, epsilon = 1.0e-2);
    assert_relative_eq!(axis[1], 0.5, epsilon = 1.0e-2);
    assert_relative_eq!(axis.norm(), (0.5 as proxima::math::Real).hypot(0.5), epsilon = 1.0e-2);

    assert!(query::intersection_test(&c1, &same));
}
