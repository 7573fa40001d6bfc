//! # Animation Cycles
//!
//! Endless chains: each step enqueues the next one on completion, and the
//! last step wraps around to the first.

use crate::animation::Animation;
use crate::error::AnimationError;
use crate::queue::AnimationQueue;
use std::rc::Rc;

/// Links `steps` into an endless chain and returns its first step.
///
/// Callbacks already attached to a step still run, before the next step is
/// enqueued. Enqueue the returned animation to start the cycle; clearing the
/// queue (or overwriting the running key) stops it.
///
/// ## Errors
///
/// [`AnimationError::EmptyCycle`] if `steps` is empty.
pub fn cycle(steps: Vec<Animation>) -> Result<Animation, AnimationError> {
    if steps.is_empty() {
        return Err(AnimationError::EmptyCycle);
    }
    Ok(link(Rc::new(steps), 0))
}

/// Enqueues the cycle built from `steps`.
pub fn start_cycle(queue: &mut AnimationQueue, steps: Vec<Animation>) -> Result<(), AnimationError> {
    queue.enqueue(cycle(steps)?);
    Ok(())
}

fn link(steps: Rc<Vec<Animation>>, index: usize) -> Animation {
    let step = steps[index].clone();
    let own_callback = step.callback().cloned();
    let next = (index + 1) % steps.len();

    step.with_callback(move |queue: &mut AnimationQueue| {
        if let Some(callback) = &own_callback {
            callback(queue);
        }
        queue.enqueue(link(steps.clone(), next));
    })
}
