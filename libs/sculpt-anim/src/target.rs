//! # Animation Targets
//!
//! Anything with named properties an animation can read and write.
//!
//! Implementors expose whole properties (`"position"`, `"color"`, ...).
//! Component paths such as `"rotation.x"` or `"color.r"` are resolved by the
//! provided methods on top of that.

use crate::value::{AnimatedValue, ValueKind};
use std::cell::RefCell;
use std::rc::Rc;

/// Shared handle to an animation target.
///
/// Identity is the allocation: two handles to the same `Rc` are the same
/// target.
pub type SharedTarget = Rc<RefCell<dyn Animatable>>;

/// An object whose properties can be animated.
pub trait Animatable {
    /// Reads a whole property, `None` if the object has no such property.
    fn get(&self, name: &str) -> Option<AnimatedValue>;

    /// Writes a whole property. Returns `false` if the name is unknown.
    fn set(&mut self, name: &str, value: AnimatedValue) -> bool;

    /// Reads a property or a single component of one.
    fn property(&self, path: &str) -> Option<AnimatedValue> {
        match path.split_once('.') {
            Some((name, component)) => self
                .get(name)?
                .component(component)
                .map(AnimatedValue::Scalar),
            None => self.get(path),
        }
    }

    /// Writes a property or a single component of one.
    ///
    /// The value must have the kind the property currently has; otherwise
    /// nothing is written and `false` is returned.
    fn set_property(&mut self, path: &str, value: AnimatedValue) -> bool {
        match path.split_once('.') {
            Some((name, component)) => {
                let AnimatedValue::Scalar(scalar) = value else {
                    return false;
                };
                let Some(updated) = self
                    .get(name)
                    .and_then(|current| current.with_component(component, scalar))
                else {
                    return false;
                };
                self.set(name, updated)
            }
            None => match self.get(path) {
                Some(current) if current.kind() == value.kind() => self.set(path, value),
                _ => false,
            },
        }
    }

    /// Kind of the value at `path`, if any.
    fn property_kind(&self, path: &str) -> Option<ValueKind> {
        self.property(path).map(|value| value.kind())
    }
}

/// Address used to compare target identity.
pub(crate) fn target_address(target: &SharedTarget) -> *const () {
    Rc::as_ptr(target).cast::<()>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Color;
    use glam::DVec3;

    #[derive(Default)]
    struct Swatch {
        offset: DVec3,
        color: Color,
    }

    impl Animatable for Swatch {
        fn get(&self, name: &str) -> Option<AnimatedValue> {
            match name {
                "offset" => Some(self.offset.into()),
                "color" => Some(self.color.into()),
                _ => None,
            }
        }

        fn set(&mut self, name: &str, value: AnimatedValue) -> bool {
            match (name, value) {
                ("offset", AnimatedValue::Vector(v)) => self.offset = v,
                ("color", AnimatedValue::Color(c)) => self.color = c,
                _ => return false,
            }
            true
        }
    }

    #[test]
    fn test_component_paths() {
        let mut swatch = Swatch::default();

        assert!(swatch.set_property("offset.y", AnimatedValue::Scalar(3.0)));
        assert_eq!(swatch.offset, DVec3::new(0.0, 3.0, 0.0));
        assert_eq!(swatch.property("color.g"), Some(AnimatedValue::Scalar(1.0)));
    }

    #[test]
    fn test_unknown_and_mismatched_paths() {
        let mut swatch = Swatch::default();

        assert_eq!(swatch.property("scale"), None);
        assert_eq!(swatch.property("offset.w"), None);
        assert!(!swatch.set_property("offset", AnimatedValue::Scalar(1.0)));
        assert!(!swatch.set_property("color.r", AnimatedValue::Color(Color::RED)));
        assert_eq!(swatch.property_kind("color"), Some(ValueKind::Color));
    }

    #[test]
    fn test_target_identity() {
        let a: SharedTarget = Rc::new(RefCell::new(Swatch::default()));
        let b: SharedTarget = Rc::new(RefCell::new(Swatch::default()));

        assert_eq!(target_address(&a), target_address(&a.clone()));
        assert_ne!(target_address(&a), target_address(&b));
    }
}
