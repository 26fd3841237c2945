// Tests for display sizing and spring motion

use shapecalc::animation::{display_size, motion, DisplaySize, Outline, ShapeAnimation, Spring};
use shapecalc::geometry::{Dimensions, Field, ShapeKind};
use std::time::Duration;

fn dims(values: &[(Field, f64)]) -> Dimensions {
    values.iter().copied().collect()
}

fn settle(animation: &mut ShapeAnimation) {
    for _ in 0..600 {
        animation.tick(Duration::from_millis(16));
    }
}

#[test]
fn test_circle_sizes() {
    let size = |d: &Dimensions| display_size(ShapeKind::Circle, d);
    assert_eq!(size(&Dimensions::new()), DisplaySize::Circle { radius: 50.0 });
    assert_eq!(size(&dims(&[(Field::Radius, 1000.0)])), DisplaySize::Circle { radius: 240.0 });
    assert_eq!(size(&dims(&[(Field::Radius, 10.0)])), DisplaySize::Circle { radius: 40.0 });
    assert_eq!(size(&dims(&[(Field::Radius, -5.0)])), DisplaySize::Circle { radius: 40.0 });
    assert_eq!(size(&dims(&[(Field::Radius, 100.0)])), DisplaySize::Circle { radius: 100.0 });
    // Zero and NaN fall back to the default like an unset value
    assert_eq!(size(&dims(&[(Field::Radius, 0.0)])), DisplaySize::Circle { radius: 50.0 });
    assert_eq!(size(&dims(&[(Field::Radius, f64::NAN)])), DisplaySize::Circle { radius: 50.0 });
}

#[test]
fn test_rectangle_default_width_is_clamped() {
    // Default width 60 sits below the 80 floor
    assert_eq!(
        display_size(ShapeKind::Rectangle, &Dimensions::new()),
        DisplaySize::Rectangle {
            length: 100.0,
            width: 80.0
        }
    );
    assert_eq!(
        display_size(
            ShapeKind::Rectangle,
            &dims(&[(Field::Length, 900.0), (Field::Width, 900.0)])
        ),
        DisplaySize::Rectangle {
            length: 480.0,
            width: 320.0
        }
    );
}

#[test]
fn test_square_and_triangle_sizes() {
    assert_eq!(
        display_size(ShapeKind::Square, &dims(&[(Field::Side, 6.0)])),
        DisplaySize::Square { side: 80.0 }
    );
    assert_eq!(
        display_size(ShapeKind::Square, &dims(&[(Field::Side, f64::INFINITY)])),
        DisplaySize::Square { side: 400.0 }
    );
    assert_eq!(
        display_size(ShapeKind::Triangle, &Dimensions::new()),
        DisplaySize::Triangle {
            base: 120.0,
            height: 120.0
        }
    );
    assert_eq!(
        display_size(
            ShapeKind::Triangle,
            &dims(&[(Field::Base, 300.0), (Field::Height, 200.0)])
        ),
        DisplaySize::Triangle {
            base: 300.0,
            height: 200.0
        }
    );
}

#[test]
fn test_spring_settles_on_target() {
    let m = motion(ShapeKind::Rectangle);
    let mut spring = Spring::new(0.0, m.stiffness, m.damping);
    spring.set_target(360.0);
    assert!(!spring.is_settled());

    for _ in 0..600 {
        spring.step(Duration::from_millis(16));
    }
    assert!(spring.is_settled(), "value {}", spring.value());
    assert!((spring.value() - 360.0).abs() < 1e-3);
}

#[test]
fn test_underdamped_spring_overshoots() {
    let m = motion(ShapeKind::Rectangle);
    let mut spring = Spring::new(0.0, m.stiffness, m.damping);
    spring.set_target(1.0);
    let mut peak: f64 = 0.0;
    for _ in 0..200 {
        spring.step(Duration::from_millis(10));
        peak = peak.max(spring.value());
    }
    assert!(peak > 1.0);
}

#[test]
fn test_animation_grows_to_idle_then_calculated() {
    let mut animation = ShapeAnimation::new(ShapeKind::Square);
    assert_eq!(animation.scale(), 0.0);

    settle(&mut animation);
    assert!(animation.is_settled());
    assert!((animation.scale() - 0.5).abs() < 1e-3);
    assert!(animation.rotation().abs() < 1e-3);

    animation.retarget(ShapeKind::Square, &dims(&[(Field::Side, 6.0)]), true);
    assert!(animation.is_calculated());
    settle(&mut animation);
    assert!((animation.scale() - 1.0).abs() < 1e-3);
    assert!((animation.rotation() - 180.0).abs() < 1e-3);
}

#[test]
fn test_circle_never_rotates() {
    let mut animation = ShapeAnimation::new(ShapeKind::Circle);
    animation.retarget(ShapeKind::Circle, &dims(&[(Field::Radius, 100.0)]), true);
    settle(&mut animation);
    assert_eq!(animation.rotation(), 0.0);
    match animation.outline() {
        Outline::Circle { radius } => assert!((radius - 100.0).abs() < 1e-2),
        other => panic!("expected circle outline, got {:?}", other),
    }
}

#[test]
fn test_kind_change_restarts_from_zero() {
    let mut animation = ShapeAnimation::new(ShapeKind::Circle);
    settle(&mut animation);
    animation.retarget(ShapeKind::Triangle, &Dimensions::new(), false);
    assert_eq!(animation.kind(), ShapeKind::Triangle);
    assert_eq!(animation.scale(), 0.0);
    assert!(!animation.is_calculated());
}

#[test]
fn test_triangle_outline_fits_canvas() {
    let mut animation = ShapeAnimation::new(ShapeKind::Triangle);
    animation.retarget(
        ShapeKind::Triangle,
        &dims(&[(Field::Base, 480.0), (Field::Height, 400.0)]),
        true,
    );
    settle(&mut animation);

    let Outline::Polygon(points) = animation.outline() else {
        panic!("expected polygon");
    };
    assert_eq!(points.len(), 3);
    // A full turn brings the apex back to the top
    assert!(points[0].0.abs() < 1.0);
    assert!((points[0].1 - 200.0).abs() < 1.0);
    for (x, y) in points {
        assert!(x.abs() <= 300.0 && y.abs() <= 300.0);
    }
}
