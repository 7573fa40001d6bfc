//! # Animation Queue
//!
//! Keyed, frame-driven task list. At most one task exists per
//! `(target, property)` key; enqueuing an existing key replaces the task in
//! its slot.
//!
//! ## Tick Phases
//!
//! 1. Step every live task, newest first, recording completions
//! 2. Fire completion callbacks (they may enqueue, including the same key)
//! 3. Drop tasks that are still ended

use crate::animation::{Animation, Callback};
use crate::target::SharedTarget;
use crate::value::AnimatedValue;

/// Pending property animations.
#[derive(Debug, Default)]
pub struct AnimationQueue {
    tasks: Vec<Animation>,
}

impl AnimationQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task, replacing any task with the same key in place.
    ///
    /// A replaced task keeps its position; its end value, speed and callback
    /// are overwritten and it becomes live again.
    pub fn enqueue(&mut self, animation: Animation) {
        match self.tasks.iter_mut().find(|task| task.same_key(&animation)) {
            Some(slot) => {
                *slot = animation;
                slot.revive();
            }
            None => self.tasks.push(animation),
        }
    }

    /// Advances every live task by one step.
    ///
    /// Returns the number of tasks that completed on this tick.
    pub fn tick(&mut self) -> usize {
        let mut callbacks: Vec<Callback> = Vec::new();
        let mut completed = 0;

        for task in self.tasks.iter_mut().rev() {
            if task.is_ended() {
                continue;
            }
            if task.step() {
                completed += 1;
                if let Some(callback) = task.callback() {
                    callbacks.push(callback.clone());
                }
            }
        }

        // Target borrows are released; callbacks may touch targets and the queue
        for callback in callbacks {
            callback(self);
        }

        self.tasks.retain(|task| !task.is_ended());

        if completed > 0 {
            tracing::trace!(completed, remaining = self.tasks.len(), "animation tick");
        }
        completed
    }

    /// Cancels every task without firing callbacks.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether a task for `property` on `target` is queued.
    pub fn contains(&self, target: &SharedTarget, property: &str) -> bool {
        self.find(target, property).is_some()
    }

    /// End value of the task for `property` on `target`.
    pub fn end_state(&self, target: &SharedTarget, property: &str) -> Option<AnimatedValue> {
        self.find(target, property).map(Animation::end_state)
    }

    /// Queued tasks in insertion order.
    pub fn tasks(&self) -> &[Animation] {
        &self.tasks
    }

    fn find(&self, target: &SharedTarget, property: &str) -> Option<&Animation> {
        self.tasks.iter().find(|task| task.is_for(target, property))
    }
}
