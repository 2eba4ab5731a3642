use proxima::math::{Point, Real, Vector};
use proxima::na;
use proxima::query;
use proxima::shape::{ConvexPolytope, Cuboid};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_cuboid<const D: usize>(rng: &mut StdRng) -> Cuboid<D> {
    let mut center = Point::origin();
    let mut half_extents = Vector::zeros();

    for i in 0..D {
        center[i] = rng.gen_range(-4.0..4.0);
        half_extents[i] = rng.gen_range(0.1..2.0);
    }

    Cuboid::new(center, half_extents)
}

fn sat_disjoint_aabb<const D: usize>(c1: &Cuboid<D>, c2: &Cuboid<D>) -> bool {
    (0..D).any(|i| {
        (c1.center[i] - c2.center[i]).abs() > c1.half_extents[i] + c2.half_extents[i]
    })
}

#[test]
fn gjk_agrees_with_sat_on_axis_aligned_boxes_3d() {
    let mut rng = StdRng::seed_from_u64(0x17ab5eed);

    for _ in 0..200 {
        let c1 = random_cuboid::<3>(&mut rng);
        let c2 = random_cuboid::<3>(&mut rng);

        assert_eq!(
            query::intersection_test(&c1, &c2),
            !sat_disjoint_aabb(&c1, &c2),
            "disagreement on {:?} vs {:?}",
            c1,
            c2
        );
    }
}

#[test]
fn gjk_agrees_with_sat_on_axis_aligned_boxes_2d() {
    let mut rng = StdRng::seed_from_u64(0x2d5eed);

    for _ in 0..200 {
        let c1 = random_cuboid::<2>(&mut rng);
        let c2 = random_cuboid::<2>(&mut rng);

        assert_eq!(
            query::intersection_test(&c1, &c2),
            !sat_disjoint_aabb(&c1, &c2),
            "disagreement on {:?} vs {:?}",
            c1,
            c2
        );
    }
}

struct Obb {
    shape: ConvexPolytope<3>,
    axes: [Vector<3>; 3],
}

fn random_obb(rng: &mut StdRng) -> Obb {
    let center = Vector::<3>::new(
        rng.gen_range(-4.0..4.0),
        rng.gen_range(-4.0..4.0),
        rng.gen_range(-4.0..4.0),
    );
    let half_extents = Vector::<3>::new(
        rng.gen_range(0.1..2.0),
        rng.gen_range(0.1..2.0),
        rng.gen_range(0.1..2.0),
    );

    let axis = na::Unit::new_normalize(Vector::<3>::new(
        rng.gen_range(-1.0..1.0 as Real),
        rng.gen_range(-1.0..1.0),
        rng.gen_range(-1.0..1.0),
    ));
    let rot = na::Rotation3::from_axis_angle(&axis, rng.gen_range(0.0..std::f32::consts::PI as Real));

    let mut corners = Vec::new();
    for mask in 0..8u32 {
        let mut corner = half_extents;
        for i in 0..3 {
            if mask & (1 << i) != 0 {
                corner[i] = -corner[i];
            }
        }
        corners.push(Point::from(center + rot * corner));
    }

    Obb {
        shape: ConvexPolytope::from_points(corners).unwrap(),
        axes: [
            rot * Vector::ith(0, 1.0),
            rot * Vector::ith(1, 1.0),
            rot * Vector::ith(2, 1.0),
        ],
    }
}

fn projection_interval(points: &[Point<3>], axis: &Vector<3>) -> (Real, Real) {
    let mut min = Real::MAX;
    let mut max = -Real::MAX;

    for pt in points {
        let d = pt.coords.dot(axis);
        min = min.min(d);
        max = max.max(d);
    }

    (min, max)
}

fn sat_disjoint_obb(o1: &Obb, o2: &Obb) -> bool {
    let mut axes = Vec::new();
    axes.extend_from_slice(&o1.axes);
    axes.extend_from_slice(&o2.axes);

    for a in &o1.axes {
        for b in &o2.axes {
            let cross = a.cross(b);
            if cross.norm_squared() > 1.0e-8 {
                axes.push(cross);
            }
        }
    }

    axes.iter().any(|axis| {
        let (min1, max1) = projection_interval(o1.shape.points(), axis);
        let (min2, max2) = projection_interval(o2.shape.points(), axis);
        max1 < min2 || max2 < min1
    })
}

#[test]
fn gjk_agrees_with_sat_on_oriented_boxes() {
    let mut rng = StdRng::seed_from_u64(0x0bb5eed);

    for _ in 0..200 {
        let o1 = random_obb(&mut rng);
        let o2 = random_obb(&mut rng);

        assert_eq!(
            query::intersection_test(&o1.shape, &o2.shape),
            !sat_disjoint_obb(&o1, &o2),
            "disagreement on {:?} vs {:?}",
            o1.shape,
            o2.shape
        );
    }
}
