//! # Animation Task
//!
//! One property transition: target, property path, end value, speed and an
//! optional completion callback.

use crate::error::AnimationError;
use crate::queue::AnimationQueue;
use crate::target::{target_address, SharedTarget};
use crate::value::AnimatedValue;
use config::constants::ANIMATION_EPSILON;
use std::fmt;
use std::rc::Rc;

/// Completion callback. Receives the queue so it can chain follow-up
/// animations.
pub type Callback = Rc<dyn Fn(&mut AnimationQueue)>;

/// A property transition towards a fixed end value.
///
/// Each tick moves the property `speed` of the remaining way. The task ends
/// when a step moves the value by less than
/// [`ANIMATION_EPSILON`](config::constants::ANIMATION_EPSILON); the property
/// is then snapped exactly onto the end value.
///
/// ## Example
///
/// ```rust
/// use sculpt_anim::{Animatable, AnimatedValue, Animation, AnimationQueue};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// struct Fader(f64);
///
/// impl Animatable for Fader {
///     fn get(&self, name: &str) -> Option<AnimatedValue> {
///         (name == "opacity").then_some(AnimatedValue::Scalar(self.0))
///     }
///     fn set(&mut self, name: &str, value: AnimatedValue) -> bool {
///         match (name, value) {
///             ("opacity", AnimatedValue::Scalar(v)) => { self.0 = v; true }
///             _ => false,
///         }
///     }
/// }
///
/// let fader = Rc::new(RefCell::new(Fader(1.0)));
/// let mut queue = AnimationQueue::new();
/// queue.enqueue(Animation::new(fader.clone(), "opacity", 0.0.into(), 0.5).unwrap());
///
/// while !queue.is_empty() {
///     queue.tick();
/// }
/// assert_eq!(fader.borrow().0, 0.0);
/// ```
#[derive(Clone)]
pub struct Animation {
    target: SharedTarget,
    property: String,
    end_state: AnimatedValue,
    speed: f64,
    callback: Option<Callback>,
    ended: bool,
}

impl Animation {
    /// Creates an animation of `property` on `target` towards `end_state`.
    ///
    /// ## Errors
    ///
    /// [`AnimationError::InvalidSpeed`] unless `0 < speed <= 1`.
    pub fn new(
        target: SharedTarget,
        property: impl Into<String>,
        end_state: AnimatedValue,
        speed: f64,
    ) -> Result<Self, AnimationError> {
        if !(speed > 0.0 && speed <= 1.0) {
            return Err(AnimationError::InvalidSpeed { speed });
        }

        Ok(Self {
            target,
            property: property.into(),
            end_state,
            speed,
            callback: None,
            ended: false,
        })
    }

    /// Attaches a completion callback.
    pub fn with_callback(self, callback: impl Fn(&mut AnimationQueue) + 'static) -> Self {
        self.with_shared_callback(Rc::new(callback))
    }

    /// Attaches an already shared completion callback.
    pub fn with_shared_callback(mut self, callback: Callback) -> Self {
        self.callback = Some(callback);
        self
    }

    pub fn target(&self) -> &SharedTarget {
        &self.target
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn end_state(&self) -> AnimatedValue {
        self.end_state
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn callback(&self) -> Option<&Callback> {
        self.callback.as_ref()
    }

    /// True once the end value has been reached.
    pub fn is_ended(&self) -> bool {
        self.ended
    }

    /// Whether this task animates `property` on `target`.
    pub fn is_for(&self, target: &SharedTarget, property: &str) -> bool {
        target_address(&self.target) == target_address(target) && self.property == property
    }

    /// Same target and property as `other`.
    pub(crate) fn same_key(&self, other: &Animation) -> bool {
        self.is_for(&other.target, &other.property)
    }

    pub(crate) fn revive(&mut self) {
        self.ended = false;
    }

    /// Advances the property one step.
    ///
    /// Returns `true` if the task completed on this step. A target that is
    /// already borrowed, lacks the property, or holds a different value kind
    /// is left untouched.
    pub(crate) fn step(&mut self) -> bool {
        let Ok(mut target) = self.target.try_borrow_mut() else {
            tracing::trace!(property = %self.property, "animation target busy");
            return false;
        };

        let Some(current) = target.property(&self.property) else {
            return false;
        };
        let Some((next, moved)) = current.step_towards(&self.end_state, self.speed) else {
            return false;
        };

        if moved < ANIMATION_EPSILON {
            if target.set_property(&self.property, self.end_state) {
                self.ended = true;
            }
        } else {
            target.set_property(&self.property, next);
        }

        self.ended
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("target", &target_address(&self.target))
            .field("property", &self.property)
            .field("end_state", &self.end_state)
            .field("speed", &self.speed)
            .field("has_callback", &self.callback.is_some())
            .field("ended", &self.ended)
            .finish()
    }
}
