use numspring::{Quat, Scalar, Spring1D, Spring3D, SpringQuat, SpringState, Vec3, Vec};
use proptest::prelude::*;

proptest! {
    #[test]
    fn converges_for_any_parameters(
        start in -100.0f64..100.0,
        target in -100.0f64..100.0,
        omega in 1.0f64..50.0,
        zeta in 0.1f64..4.0,
    ) {
        let mut spring: Spring1D<f64> = SpringState::at(Scalar(start));
        for _ in 0..20_000 {
            spring.track_damping_ratio(Scalar(target), omega, zeta, 1.0 / 60.0);
        }
        prop_assert!((spring.value().0 - target).abs() < 1e-3);
        prop_assert!(spring.velocity().0.abs() < 1e-3);
    }

    #[test]
    fn large_steps_never_overshoot_when_damped(
        target in -1000.0f64..1000.0,
        omega in 0.01f64..100.0,
        zeta in 1.0f64..10.0,
        dt in 0.001f64..1.0e4,
    ) {
        let mut spring: Spring1D<f64> = SpringState::new();
        for _ in 0..10 {
            let v = spring.track_damping_ratio(Scalar(target), omega, zeta, dt).0;
            prop_assert!(v.is_finite());
            prop_assert!(v.abs() <= target.abs() * (1.0 + 1e-9) + 1e-9);
        }
    }

    #[test]
    fn zero_dt_is_identity(
        x in -10.0f32..10.0,
        v in -10.0f32..10.0,
        target in -10.0f32..10.0,
        omega in 0.0f32..100.0,
        zeta in 0.0f32..5.0,
    ) {
        let mut spring: Spring3D<f32> =
            SpringState::with_velocity(Vec3::new(x, -x, 1.0), Vec3::new(v, 0.5, -v));
        let before = spring;
        spring.track_damping_ratio(Vec3::new(target, target, target), omega, zeta, 0.0);
        prop_assert_eq!(spring.value, before.value);
        if omega >= 1e-5 {
            prop_assert_eq!(spring.velocity, before.velocity);
        }
    }

    #[test]
    fn half_life_equivalence(
        x in -10.0f32..10.0,
        hz in 0.1f32..10.0,
        hl in 1e-4f32..5.0,
        dt in 0.0f32..0.1,
    ) {
        let mut a: Spring1D<f32> = SpringState::at(Scalar(x));
        let mut b = a;
        let omega = hz * core::f32::consts::TAU;
        let zeta = core::f32::consts::LN_2 / (omega * hl);
        prop_assert_eq!(
            a.track_half_life(Scalar(1.0), hz, hl, dt),
            b.track_damping_ratio(Scalar(1.0), omega, zeta, dt)
        );
        prop_assert_eq!(a, b);
    }

    #[test]
    fn rotation_round_trip(
        ax in -1.0f32..1.0,
        ay in -1.0f32..1.0,
        az in -1.0f32..1.0,
        angle in -3.0f32..3.0,
    ) {
        let axis = Vec3::new(ax, ay, az);
        prop_assume!(axis.length() > 0.1);
        let q = Quat::from_axis_angle(axis.normalize(), angle);
        let back = Quat::from_vector(q.to_vector(), true);
        prop_assert!(q.angle_to(back) < 1e-3);
        prop_assert!(back.dot(q).abs() > 0.999);
    }

    #[test]
    fn rotation_tracking_never_flips(
        ax in -1.0f32..1.0,
        ay in -1.0f32..1.0,
        az in -1.0f32..1.0,
        angle in -3.0f32..3.0,
        zeta in 0.3f32..2.0,
    ) {
        let axis = Vec3::new(ax, ay, az);
        prop_assume!(axis.length() > 0.1);
        let target = Quat::from_axis_angle(axis.normalize(), angle);
        let mut spring: SpringQuat<f32> = SpringQuat::new();
        let mut prev = spring.value();
        for _ in 0..900 {
            let q = spring.track_damping_ratio(target, 15.0, zeta, 1.0 / 60.0);
            prop_assert!(q.dot(prev) > 0.0);
            prev = q;
        }
        prop_assert!(spring.value().angle_to(target) < 1e-2);
    }
}
