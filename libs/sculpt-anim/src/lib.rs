//! # Sculpt Anim
//!
//! Frame-driven property animation for the sculpting viewer.
//!
//! ## Architecture
//!
//! ```text
//! Animation (target, property, end value, speed, callback?)
//!     → AnimationQueue::enqueue   (one task per target/property)
//!     → AnimationQueue::tick      (once per frame)
//!         → Animatable::set_property on the target
//! ```
//!
//! Targets are shared `Rc<RefCell<_>>` handles; the scheduler is
//! single-threaded and cooperative.
//!
//! ## Usage
//!
//! ```rust
//! use sculpt_anim::{cycle, Animatable, AnimatedValue, Animation, AnimationQueue};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! #[derive(Default)]
//! struct Knob(f64);
//!
//! impl Animatable for Knob {
//!     fn get(&self, name: &str) -> Option<AnimatedValue> {
//!         (name == "turn").then_some(AnimatedValue::Scalar(self.0))
//!     }
//!     fn set(&mut self, name: &str, value: AnimatedValue) -> bool {
//!         match (name, value) {
//!             ("turn", AnimatedValue::Scalar(v)) => { self.0 = v; true }
//!             _ => false,
//!         }
//!     }
//! }
//!
//! let knob = Rc::new(RefCell::new(Knob::default()));
//! let there = Animation::new(knob.clone(), "turn", 1.0.into(), 0.5).unwrap();
//! let back = Animation::new(knob.clone(), "turn", 0.0.into(), 0.5).unwrap();
//!
//! let mut queue = AnimationQueue::new();
//! queue.enqueue(cycle(vec![there, back]).unwrap());
//! for _ in 0..100 {
//!     queue.tick();
//! }
//! assert_eq!(queue.len(), 1);
//! ```

pub mod animation;
pub mod cycle;
pub mod error;
pub mod queue;
pub mod target;
pub mod value;

#[cfg(test)]
mod tests;

pub use animation::{Animation, Callback};
pub use cycle::{cycle, start_cycle};
pub use error::AnimationError;
pub use queue::AnimationQueue;
pub use target::{Animatable, SharedTarget};
pub use value::{AnimatedValue, Color, Euler, RotationOrder, ValueKind};
