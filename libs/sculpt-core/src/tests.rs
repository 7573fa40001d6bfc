//! Session-level tests: gestures, composition and animation wiring.

use super::*;
use approx::assert_relative_eq;
use glam::{DVec2, DVec3};
use sculpt_anim::{Color, Euler};
use std::f64::consts::FRAC_PI_2;

const ROOT_VOLUME: f64 = 20.0 * 10.0 * 20.0;

fn sculptor() -> Sculptor {
    Sculptor::new(&SessionConfig::default()).unwrap()
}

/// Ticks until the queue drains, with an upper bound.
fn settle(sculptor: &mut Sculptor) -> usize {
    let mut frames = 0;
    while !sculptor.animations().is_empty() && frames < 1000 {
        sculptor.tick();
        frames += 1;
    }
    frames
}

// =============================================================================
// SETUP
// =============================================================================

#[test]
fn test_new_session_shows_root_block() {
    let sculptor = sculptor();

    assert_relative_eq!(sculptor.volume(), ROOT_VOLUME, epsilon = 1e-9);
    assert_eq!(sculptor.scene().len(), 1);
    assert_eq!(sculptor.registry().len(), 1);
    assert_eq!(sculptor.revision(), 1);
    assert!(sculptor.controls().is_enabled());
    assert_eq!(sculptor.pointer(), DVec2::ONE);
    assert!(sculptor.composed().borrow().cast_shadow);
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = SessionConfig {
        segments: 1,
        ..SessionConfig::default()
    };
    assert!(matches!(
        Sculptor::new(&config),
        Err(SessionError::InvalidConfig { .. })
    ));
}

#[test]
fn test_config_selects_initial_tool() {
    let config = SessionConfig {
        shape: ShapeKind::Cylinder,
        width: 50.0,
        ..SessionConfig::default()
    };
    let sculptor = Sculptor::new(&config).unwrap();

    assert!(sculptor.shape().is_cylinder());
    assert_eq!(sculptor.shape().width(), 10.0);
}

// =============================================================================
// GESTURES
// =============================================================================

#[test]
fn test_click_on_block_carves_box() {
    let mut sculptor = sculptor();
    let viewport = Viewport::sized(800.0, 600.0);
    sculptor.resize(viewport.width, viewport.height);

    sculptor.pointer_move(400.0, 300.0, &viewport);
    assert_eq!(sculptor.pointer(), DVec2::ZERO);
    assert!(sculptor.is_hovering());

    let point = sculptor.pointer_down().unwrap();
    assert_relative_eq!(point.x, 5.0, epsilon = 1e-6);
    assert_relative_eq!(point.y, 5.0, epsilon = 1e-6);
    assert_relative_eq!(point.z, 5.0, epsilon = 1e-6);
    assert!(!sculptor.controls().is_enabled());

    // The 5x5x5 tool centred on the top face removes its lower half
    assert_relative_eq!(sculptor.volume(), ROOT_VOLUME - 62.5, epsilon = 1e-6);
    assert_eq!(sculptor.registry().subtractions().len(), 1);
    assert_eq!(sculptor.revision(), 2);
    assert_eq!(sculptor.scene().len(), 1);

    sculptor.pointer_up();
    assert!(sculptor.controls().is_enabled());
}

#[test]
fn test_click_off_block_does_nothing() {
    let mut sculptor = sculptor();

    assert!(sculptor.pointer_down().is_none());
    assert!(sculptor.controls().is_enabled());
    assert_eq!(sculptor.revision(), 1);
    assert!(sculptor.registry().subtractions().is_empty());
}

#[test]
fn test_sphere_tool_reduces_volume() {
    let mut sculptor = sculptor();
    sculptor.shape_mut().select(ShapeKind::Sphere);
    sculptor.set_pointer_ndc(DVec2::ZERO);

    assert!(sculptor.pointer_down().is_some());
    assert!(sculptor.volume() < ROOT_VOLUME);
    assert!(sculptor.composed().borrow().mesh().triangle_count() > 12);
}

#[test]
fn test_tool_dimensions_are_clamped() {
    let mut sculptor = sculptor();
    sculptor.shape_mut().set_width(0.0);
    sculptor.shape_mut().set_height(99.0);
    sculptor.shape_mut().set_depth(f64::NAN);

    assert_eq!(sculptor.shape().width(), 1.0);
    assert_eq!(sculptor.shape().height(), 5.0);
    assert_eq!(sculptor.shape().depth(), 1.0);
}

#[test]
fn test_reset_mesh_restores_root() {
    let mut sculptor = sculptor();
    sculptor.set_pointer_ndc(DVec2::ZERO);
    sculptor.pointer_down();
    sculptor.pointer_up();
    sculptor.showcase().unwrap();

    sculptor.reset_mesh();

    assert_relative_eq!(sculptor.volume(), ROOT_VOLUME, epsilon = 1e-9);
    assert!(sculptor.registry().subtractions().is_empty());
    assert!(sculptor.animations().is_empty());
    assert_eq!(sculptor.scene().len(), 1);
    assert!(sculptor.composed().borrow().transform.is_identity());
}

#[test]
fn test_same_clicks_give_same_mesh() {
    let carve = || {
        let mut sculptor = sculptor();
        sculptor.set_pointer_ndc(DVec2::ZERO);
        sculptor.pointer_down();
        sculptor.set_pointer_ndc(DVec2::new(0.1, -0.1));
        sculptor.pointer_down();
        let mesh = sculptor.composed().borrow().mesh().clone();
        mesh
    };

    let (a, b) = (carve(), carve());
    assert_eq!(a.vertices(), b.vertices());
    assert_eq!(a.triangles(), b.triangles());
}

#[test]
fn test_add_fill_grows_volume() {
    let mut sculptor = sculptor();
    let slab = SolidTemplate::from_mesh(
        sculpt_mesh::primitives::create_cube(DVec3::new(2.0, 2.0, 2.0), true).unwrap(),
    );

    sculptor.add_fill(&slab, DVec3::new(0.0, 7.0, 0.0));
    assert_relative_eq!(sculptor.volume(), ROOT_VOLUME + 8.0, epsilon = 1e-6);
    assert_eq!(sculptor.registry().fills().len(), 2);
}

// =============================================================================
// ANIMATION
// =============================================================================

#[test]
fn test_showcase_reaches_end_state() {
    let mut sculptor = sculptor();
    sculptor.showcase().unwrap();
    assert_eq!(sculptor.animations().len(), 5);

    settle(&mut sculptor);
    assert!(sculptor.animations().is_empty());

    let node = sculptor.composed().borrow();
    assert_eq!(node.transform.position, DVec3::new(0.0, 0.25, 0.0));
    assert_eq!(node.transform.rotation, Euler::new(FRAC_PI_2, FRAC_PI_2, FRAC_PI_2));
    assert_eq!(node.transform.scale, DVec3::splat(2.0));

    let material = node.material().borrow();
    assert_eq!(material.color, Color::RED);
    assert_eq!(material.opacity, 0.6);
    assert!(material.transparent);
}

#[test]
fn test_reset_animations_returns_to_rest() {
    let mut sculptor = sculptor();
    sculptor.showcase().unwrap();
    for _ in 0..10 {
        sculptor.tick();
    }

    sculptor.reset_animations().unwrap();
    assert_eq!(sculptor.animations().len(), 5);
    settle(&mut sculptor);

    let node = sculptor.composed().borrow();
    assert!(node.transform.is_identity());
    let material = node.material().borrow();
    assert_eq!(material.color, Color::WHITE);
    assert_eq!(material.opacity, 1.0);
    assert!(!material.transparent);
}

#[test]
fn test_spin_cycle_keeps_running() {
    let mut sculptor = sculptor();
    sculptor.spin_cycle().unwrap();
    assert_eq!(sculptor.animations().len(), 2);

    let completed: usize = (0..500).map(|_| sculptor.tick()).sum();

    assert!(completed > 2);
    assert_eq!(sculptor.animations().len(), 2);

    // Every finished quarter turn is unwound, so no axis exceeds a quarter
    let rotation = sculptor.composed().borrow().transform.rotation;
    for angle in [rotation.x, rotation.y, rotation.z] {
        assert!((0.0..=FRAC_PI_2).contains(&angle));
    }
}

#[test]
fn test_carve_after_showcase_follows_displayed_node() {
    let mut sculptor = sculptor();
    sculptor.showcase().unwrap();
    settle(&mut sculptor);

    sculptor.set_pointer_ndc(DVec2::ZERO);
    let hit = sculptor.hover_point().unwrap();
    let to_world = sculptor.composed().borrow().transform.matrix();

    let point = sculptor.pointer_down().unwrap();

    // The carve sits on the block surface and maps back onto the hit
    let reach = (point.x.abs() / 10.0).max(point.y.abs() / 5.0).max(point.z.abs() / 10.0);
    assert_relative_eq!(reach, 1.0, epsilon = 1e-6);
    let shown = to_world.transform_point3(point);
    assert_relative_eq!(shown.x, hit.x, epsilon = 1e-6);
    assert_relative_eq!(shown.y, hit.y, epsilon = 1e-6);
    assert_relative_eq!(shown.z, hit.z, epsilon = 1e-6);

    assert!(sculptor.volume() < ROOT_VOLUME);
    assert_eq!(sculptor.registry().subtractions().len(), 1);
}

#[test]
fn test_recompose_swaps_animated_node() {
    let mut sculptor = sculptor();
    sculptor.showcase().unwrap();
    sculptor.tick();

    // The old node is replaced; its tasks keep animating the detached node
    let before = sculptor.composed().clone();
    let tool = sculptor.shape().build_template().unwrap();
    sculptor.add_subtraction(&tool, DVec3::new(10.0, 5.0, 10.0));

    assert!(!std::rc::Rc::ptr_eq(&before, sculptor.composed()));
    assert!(!before.borrow().transform.is_identity());
    assert!(sculptor.composed().borrow().transform.is_identity());
}
