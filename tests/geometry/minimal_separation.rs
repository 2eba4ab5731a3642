use approx::assert_relative_eq;
use proxima::math::{Point, Real, Vector};
use proxima::query;
use proxima::shape::{Ball, Cuboid};

fn unit_cube(x: Real, y: Real, z: Real) -> Cuboid<3> {
    Cuboid::new(Point::new(x, y, z), Vector::new(1.0, 1.0, 1.0))
}

#[test]
fn separated_cubes_closest_approach_axis() {
    let c1 = unit_cube(0.0, 0.0, 0.0);
    let c2 = unit_cube(3.0, 0.0, 0.0);

    let mut axis = Vector::zeros();
    assert!(!query::minimal_separation_axis(&c1, &c2, &mut axis));
    assert_relative_eq!(axis, Vector::<3>::new(1.0, 0.0, 0.0), epsilon = 1.0e-3);
}

#[test]
fn separated_balls_closest_approach_axis() {
    let b1 = Ball::new(Point::<3>::origin(), 1.0);
    let b2 = Ball::new(Point::new(4.0, 0.0, 0.0), 1.0);

    let mut axis = Vector::zeros();
    assert!(!query::minimal_separation_axis(&b1, &b2, &mut axis));
    assert_relative_eq!(axis, Vector::<3>::new(2.0, 0.0, 0.0), epsilon = 1.0e-2);
}

#[test]
fn diagonally_separated_cubes() {
    let c1 = unit_cube(0.0, 0.0, 0.0);
    let c2 = unit_cube(3.0, 3.0, 0.0);

    let mut axis = Vector::zeros();
    assert!(!query::minimal_separation_axis(&c1, &c2, &mut axis));
    assert_relative_eq!(axis, Vector::<3>::new(1.0, 1.0, 0.0), epsilon = 1.0e-2);
}

#[test]
fn translating_by_minus_axis_reaches_contact() {
    let c1 = unit_cube(0.0, 0.0, 0.0);

    for other in [
        unit_cube(3.0, 0.0, 0.0),
        unit_cube(0.0, -4.0, 0.0),
        unit_cube(3.0, 3.0, 0.0),
        unit_cube(2.5, -2.5, 2.5),
    ] {
        let mut axis = Vector::zeros();
        assert!(!query::minimal_separation_axis(&c1, &other, &mut axis));

        let moved = other.translated(&-axis);
        assert!(query::distance(&c1, &moved) <= 2.0e-2);
    }
}

#[test]
fn ball_translated_by_minus_axis_reaches_contact() {
    let b1 = Ball::new(Point::<3>::origin(), 1.0);
    let b2 = Ball::new(Point::new(2.0, 2.0, 1.0), 1.0);

    let mut axis = Vector::zeros();
    assert!(!query::minimal_separation_axis(&b1, &b2, &mut axis));

    let moved = Ball::new(b2.center - axis, b2.radius);
    assert!(query::distance(&b1, &moved) <= 2.0e-2);
}

#[test]
fn distance_between_separated_cubes() {
    let c1 = unit_cube(0.0, 0.0, 0.0);
    let c2 = unit_cube(5.0, 0.0, 0.0);

    assert_relative_eq!(query::distance(&c1, &c2), 3.0, epsilon = 1.0e-3);
}

#[test]
fn distance_of_overlapping_cubes_is_zero() {
    let c1 = unit_cube(0.0, 0.0, 0.0);
    let c2 = unit_cube(1.0, 0.0, 0.0);

    assert_relative_eq!(query::distance(&c1, &c2), 0.0, epsilon = 1.0e-5);
}

#[test]
fn axis_can_be_reused_as_a_seed() {
    let c1 = unit_cube(0.0, 0.0, 0.0);
    let c2 = unit_cube(3.0, 0.0, 0.0);

    let mut axis = Vector::zeros();
    assert!(!query::minimal_separation_axis(&c1, &c2, &mut axis));

    // Feeding the previous answer back as the initial direction must not
    // change the outcome.
    assert!(!query::minimal_separation_axis(&c1, &c2, &mut axis));
    assert_relative_eq!(axis, Vector::<3>::new(1.0, 0.0, 0.0), epsilon = 1.0e-3);
}
