use numspring::{generate_random_vectors, Shape, SpringError, Vec2, Vec3};

#[test]
fn fills_every_cell_in_range() {
    let mut out = [Vec3::new(9.0f32, 9.0, 9.0); 4 * 4 * 4];
    generate_random_vectors(&mut out, 7, Shape::D3(4, 4, 4)).unwrap();
    for v in &out {
        for c in [v.x, v.y, v.z] {
            assert!((-1.0..1.0).contains(&c), "component out of range: {}", c);
        }
    }
}

#[test]
fn same_seed_same_output() {
    let mut a = [Vec2::new(0.0f32, 0.0); 32];
    let mut b = [Vec2::new(0.0f32, 0.0); 32];
    generate_random_vectors(&mut a, 1234, Shape::D2(8, 4)).unwrap();
    generate_random_vectors(&mut b, 1234, Shape::D2(8, 4)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn different_seeds_differ() {
    let mut a = [Vec2::new(0.0f64, 0.0); 16];
    let mut b = [Vec2::new(0.0f64, 0.0); 16];
    generate_random_vectors(&mut a, 1, Shape::D1(16)).unwrap();
    generate_random_vectors(&mut b, 2, Shape::D1(16)).unwrap();
    assert_ne!(a, b);
}

#[test]
fn roughly_uniform_mean() {
    let mut out = [Vec2::new(0.0f64, 0.0); 4096];
    generate_random_vectors(&mut out, 99, Shape::D2(64, 64)).unwrap();
    let n = out.len() as f64;
    let mean_x = out.iter().map(|v| v.x).sum::<f64>() / n;
    let mean_y = out.iter().map(|v| v.y).sum::<f64>() / n;
    assert!(mean_x.abs() < 0.05, "mean x {}", mean_x);
    assert!(mean_y.abs() < 0.05, "mean y {}", mean_y);
}

#[test]
fn rejects_mismatched_buffer() {
    let mut out = [Vec3::new(0.0f32, 0.0, 0.0); 10];
    assert_eq!(
        generate_random_vectors(&mut out, 0, Shape::D2(3, 3)),
        Err(SpringError::ShapeMismatch { expected: 9, actual: 10 })
    );
}

#[test]
fn rejects_empty_shape() {
    let mut out: [Vec2<f32>; 0] = [];
    assert_eq!(
        generate_random_vectors(&mut out, 0, Shape::D3(2, 0, 2)),
        Err(SpringError::EmptyShape)
    );
}

#[test]
fn rejects_shape_whose_cell_count_overflows() {
    // 2^63 + 1 by 2 wraps to 2 cells if multiplied unchecked.
    let mut out = [Vec2::new(0.0f32, 0.0); 2];
    assert_eq!(
        generate_random_vectors(&mut out, 0, Shape::D2(usize::MAX / 2 + 2, 2)),
        Err(SpringError::ShapeOverflow)
    );
    // Wraps to 0 cells, but no extent is zero.
    assert_eq!(
        generate_random_vectors(&mut out, 0, Shape::D2(usize::MAX / 2 + 1, 2)),
        Err(SpringError::ShapeOverflow)
    );
    assert_eq!(
        generate_random_vectors(&mut out, 0, Shape::D3(usize::MAX, 2, 1)),
        Err(SpringError::ShapeOverflow)
    );
    assert_eq!(out, [Vec2::new(0.0f32, 0.0); 2]);
}
