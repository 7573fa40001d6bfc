//! # Scheduler Tests
//!
//! Queue behaviour against a small animatable fixture.

use crate::*;
use glam::DVec3;
use std::cell::RefCell;
use std::f64::consts::FRAC_PI_2;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Dummy {
    position: DVec3,
    rotation: Euler,
    opacity: f64,
    color: Color,
}

impl Animatable for Dummy {
    fn get(&self, name: &str) -> Option<AnimatedValue> {
        match name {
            "position" => Some(self.position.into()),
            "rotation" => Some(self.rotation.into()),
            "opacity" => Some(self.opacity.into()),
            "color" => Some(self.color.into()),
            _ => None,
        }
    }

    fn set(&mut self, name: &str, value: AnimatedValue) -> bool {
        match (name, value) {
            ("position", AnimatedValue::Vector(v)) => self.position = v,
            ("rotation", AnimatedValue::Rotation(e)) => self.rotation = e,
            ("opacity", AnimatedValue::Scalar(s)) => self.opacity = s,
            ("color", AnimatedValue::Color(c)) => self.color = c,
            _ => return false,
        }
        true
    }
}

fn dummy() -> Rc<RefCell<Dummy>> {
    Rc::new(RefCell::new(Dummy::default()))
}

fn shared(dummy: &Rc<RefCell<Dummy>>) -> SharedTarget {
    dummy.clone()
}

fn animate(target: &Rc<RefCell<Dummy>>, property: &str, end: impl Into<AnimatedValue>) -> Animation {
    Animation::new(shared(target), property, end.into(), 0.1).unwrap()
}

/// Ticks until the queue drains, returning the number of ticks.
fn drain(queue: &mut AnimationQueue, limit: usize) -> usize {
    for ticks in 0..limit {
        if queue.is_empty() {
            return ticks;
        }
        queue.tick();
    }
    panic!("queue did not drain within {} ticks", limit);
}

// =============================================================================
// CONVERGENCE
// =============================================================================

#[test]
fn test_scalar_converges_and_is_removed() {
    let target = dummy();
    target.borrow_mut().opacity = 1.0;

    let mut queue = AnimationQueue::new();
    queue.enqueue(animate(&target, "opacity", 0.0));

    let mut last_distance = f64::INFINITY;
    while !queue.is_empty() {
        queue.tick();
        let distance = target.borrow().opacity.abs();
        assert!(distance < last_distance || distance == 0.0);
        last_distance = distance;
    }

    assert_eq!(target.borrow().opacity, 0.0);
}

#[test]
fn test_vector_snaps_to_end_state() {
    let target = dummy();
    let end = DVec3::new(0.0, 0.25, 0.0);

    let mut queue = AnimationQueue::new();
    queue.enqueue(animate(&target, "position", end));
    drain(&mut queue, 1000);

    assert_eq!(target.borrow().position, end);
}

#[test]
fn test_color_steps_per_channel() {
    let target = dummy();

    let mut queue = AnimationQueue::new();
    queue.enqueue(animate(&target, "color", Color::RED));
    queue.tick();

    let color = target.borrow().color;
    assert_eq!(color.r, 1.0);
    assert!((color.g - 0.9).abs() < 1e-12);
    assert!((color.b - 0.9).abs() < 1e-12);

    drain(&mut queue, 1000);
    assert_eq!(target.borrow().color, Color::RED);
}

#[test]
fn test_tasks_progress_together() {
    let target = dummy();

    let mut queue = AnimationQueue::new();
    queue.enqueue(animate(&target, "position.x", 10.0));
    queue.enqueue(animate(&target, "opacity", 10.0));
    queue.tick();

    let dummy = target.borrow();
    assert!((dummy.position.x - 1.0).abs() < 1e-12);
    assert!((dummy.opacity - 1.0).abs() < 1e-12);
}

// =============================================================================
// KEYS
// =============================================================================

#[test]
fn test_same_key_is_deduplicated() {
    let target = dummy();

    let mut queue = AnimationQueue::new();
    queue.enqueue(animate(&target, "opacity", 0.5));
    queue.enqueue(animate(&target, "opacity", 0.8));

    assert_eq!(queue.len(), 1);
    assert_eq!(
        queue.end_state(&shared(&target), "opacity"),
        Some(AnimatedValue::Scalar(0.8))
    );
}

#[test]
fn test_replacement_keeps_slot() {
    let target = dummy();

    let mut queue = AnimationQueue::new();
    queue.enqueue(animate(&target, "position", DVec3::X));
    queue.enqueue(animate(&target, "opacity", 1.0));
    queue.tick();
    queue.enqueue(animate(&target, "position", DVec3::Y));

    assert_eq!(queue.tasks()[0].property(), "position");
    assert_eq!(queue.tasks()[0].end_state(), AnimatedValue::Vector(DVec3::Y));
    assert!(!queue.tasks()[0].is_ended());
}

#[test]
fn test_distinct_targets_are_distinct_keys() {
    let first = dummy();
    let second = dummy();

    let mut queue = AnimationQueue::new();
    queue.enqueue(animate(&first, "opacity", 1.0));
    queue.enqueue(animate(&second, "opacity", 1.0));

    assert_eq!(queue.len(), 2);
    assert!(queue.contains(&shared(&first), "opacity"));
    assert!(!queue.contains(&shared(&first), "position"));
}

// =============================================================================
// CALLBACKS
// =============================================================================

#[test]
fn test_callback_chains_next_rotation() {
    let target = dummy();
    let follow_up = animate(&target, "rotation.y", FRAC_PI_2);

    let mut queue = AnimationQueue::new();
    queue.enqueue(
        animate(&target, "rotation.x", FRAC_PI_2)
            .with_callback(move |queue| queue.enqueue(follow_up.clone())),
    );

    while target.borrow().rotation.x != FRAC_PI_2 {
        queue.tick();
    }

    assert_eq!(queue.len(), 1);
    assert!(queue.contains(&shared(&target), "rotation.y"));
    assert!(!queue.contains(&shared(&target), "rotation.x"));
}

#[test]
fn test_callback_fires_once() {
    let target = dummy();
    let fired = Rc::new(RefCell::new(0));
    let counter = fired.clone();

    let mut queue = AnimationQueue::new();
    queue.enqueue(
        animate(&target, "opacity", 1.0).with_callback(move |_| *counter.borrow_mut() += 1),
    );
    drain(&mut queue, 1000);
    queue.tick();

    assert_eq!(*fired.borrow(), 1);
}

#[test]
fn test_callbacks_fire_newest_first() {
    let first = dummy();
    let second = dummy();
    let order = Rc::new(RefCell::new(Vec::new()));

    let mut queue = AnimationQueue::new();
    for (target, name) in [(&first, "first"), (&second, "second")] {
        let log = order.clone();
        queue.enqueue(
            animate(target, "opacity", 1.0).with_callback(move |_| log.borrow_mut().push(name)),
        );
    }

    let mut completed = 0;
    for _ in 0..1000 {
        assert!(order.borrow().is_empty());
        completed = queue.tick();
        if completed > 0 {
            break;
        }
    }

    assert_eq!(completed, 2);
    assert!(queue.is_empty());
    assert_eq!(*order.borrow(), vec!["second", "first"]);
}

#[test]
fn test_callback_may_touch_target() {
    let target = dummy();
    let handle = target.clone();

    let mut queue = AnimationQueue::new();
    queue.enqueue(
        animate(&target, "opacity", 1.0)
            .with_callback(move |_| handle.borrow_mut().position = DVec3::ONE),
    );
    drain(&mut queue, 1000);

    assert_eq!(target.borrow().position, DVec3::ONE);
}

// =============================================================================
// UNSUPPORTED PROPERTIES
// =============================================================================

#[test]
fn test_unknown_property_is_ignored() {
    let target = dummy();

    let mut queue = AnimationQueue::new();
    queue.enqueue(animate(&target, "wobble", 1.0));
    queue.enqueue(animate(&target, "opacity", Color::BLUE));
    for _ in 0..500 {
        assert_eq!(queue.tick(), 0);
    }

    assert_eq!(queue.len(), 2);
    assert_eq!(target.borrow().opacity, 0.0);
}

// =============================================================================
// CYCLES
// =============================================================================

#[test]
fn test_cycle_keeps_running() {
    let target = dummy();
    let steps = vec![
        animate(&target, "rotation.x", FRAC_PI_2),
        animate(&target, "rotation.y", FRAC_PI_2),
        animate(&target, "rotation.x", 0.0),
        animate(&target, "rotation.y", 0.0),
    ];

    let mut queue = AnimationQueue::new();
    start_cycle(&mut queue, steps).unwrap();

    let mut completed = 0;
    for _ in 0..2000 {
        completed += queue.tick();
        assert_eq!(queue.len(), 1);
    }
    assert!(completed > 4, "cycle should wrap around");
}

#[test]
fn test_cycle_keeps_step_callbacks() {
    let target = dummy();
    let fired = Rc::new(RefCell::new(0));
    let counter = fired.clone();
    let steps = vec![
        animate(&target, "opacity", 1.0).with_callback(move |_| *counter.borrow_mut() += 1),
        animate(&target, "opacity", 0.0),
    ];

    let mut queue = AnimationQueue::new();
    queue.enqueue(cycle(steps).unwrap());
    for _ in 0..1000 {
        queue.tick();
    }

    assert!(*fired.borrow() >= 2);
}

#[test]
fn test_empty_cycle_is_rejected() {
    assert_eq!(cycle(Vec::new()).unwrap_err(), AnimationError::EmptyCycle);
}

#[test]
fn test_clear_stops_cycle() {
    let target = dummy();
    let mut queue = AnimationQueue::new();
    start_cycle(
        &mut queue,
        vec![
            animate(&target, "opacity", 1.0),
            animate(&target, "opacity", 0.0),
        ],
    )
    .unwrap();

    queue.tick();
    queue.clear();
    queue.tick();

    assert!(queue.is_empty());
}
