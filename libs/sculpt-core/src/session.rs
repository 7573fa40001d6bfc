//! # Sculpting Session
//!
//! Wires input, the primitive registry, the compositor and the animation
//! queue together. The host forwards pointer and resize events, calls
//! [`Sculptor::tick`] once per frame and re-reads [`Sculptor::composed`]
//! whenever [`Sculptor::revision`] changes.
//!
//! ## Gestures
//!
//! - pointer move: remember the pointer in NDC
//! - pointer down on the sculpture: disable camera controls and carve the
//!   current tool shape at the hit point
//! - pointer up: re-enable camera controls

use crate::camera::{Camera, PerspectiveCamera, Viewport};
use crate::compositor::Compositor;
use crate::controls::{Controls, OrbitControls};
use crate::error::SessionError;
use crate::picking::pick;
use crate::primitive::SolidTemplate;
use crate::registry::PrimitiveRegistry;
use crate::scene::{SceneGraph, SceneNodes, SharedSceneMesh};
use crate::settings::SessionConfig;
use crate::shape::ShapeSelector;
use config::constants::{COLOR_CYCLE_SPEED, DEFAULT_ANIMATION_SPEED};
use glam::{DVec2, DVec3};
use sculpt_anim::{start_cycle, AnimatedValue, Animation, AnimationQueue, Color, Euler, SharedTarget};
use sculpt_mesh::primitives::create_cube;
use std::f64::consts::FRAC_PI_2;

/// An interactive sculpting session.
///
/// Generic over the host's scene graph, camera and controls; the defaults
/// are the in-memory implementations.
pub struct Sculptor<G = SceneNodes, C = PerspectiveCamera, K = OrbitControls> {
    registry: PrimitiveRegistry,
    compositor: Compositor,
    shape: ShapeSelector,
    animations: AnimationQueue,
    scene: G,
    camera: C,
    controls: K,
    pointer: DVec2,
}

impl Sculptor {
    /// Starts a session with the in-memory scene, a perspective camera and
    /// orbit controls.
    ///
    /// ```rust
    /// use approx::assert_relative_eq;
    /// use sculpt_core::{Sculptor, SessionConfig};
    ///
    /// let sculptor = Sculptor::new(&SessionConfig::default()).unwrap();
    /// assert_relative_eq!(sculptor.volume(), 4000.0, epsilon = 1e-6);
    /// ```
    pub fn new(config: &SessionConfig) -> Result<Self, SessionError> {
        let camera = PerspectiveCamera {
            eye: DVec3::from_array(config.camera_position),
            fov_degrees: config.camera_fov_degrees,
            ..PerspectiveCamera::default()
        };
        Self::with_parts(config, SceneNodes::new(), camera, OrbitControls::default())
    }
}

impl<G: SceneGraph, C: Camera, K: Controls> Sculptor<G, C, K> {
    /// Starts a session on host-provided parts.
    ///
    /// The root block is built, registered and composed immediately, so
    /// the scene holds the first node on return.
    pub fn with_parts(
        config: &SessionConfig,
        scene: G,
        camera: C,
        controls: K,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        let root = create_cube(DVec3::from_array(config.root_size), true)?;

        let mut shape = ShapeSelector::with_segments(config.segments);
        shape.select(config.shape);
        shape.set_width(config.width);
        shape.set_height(config.height);
        shape.set_depth(config.depth);

        let mut sculptor = Self {
            registry: PrimitiveRegistry::new(&SolidTemplate::from_mesh(root)),
            compositor: Compositor::new(),
            shape,
            animations: AnimationQueue::new(),
            scene,
            camera,
            controls,
            // Off-canvas corner until the first pointer event
            pointer: DVec2::ONE,
        };
        sculptor.rebuild();

        Ok(sculptor)
    }

    // =========================================================================
    // REGISTRY
    // =========================================================================

    /// Adds a fill at `position` and recomposes.
    pub fn add_fill(&mut self, template: &SolidTemplate, position: DVec3) -> SharedSceneMesh {
        self.registry.add_fill(template, position);
        self.rebuild()
    }

    /// Adds a subtraction at `position` and recomposes.
    pub fn add_subtraction(&mut self, template: &SolidTemplate, position: DVec3) -> SharedSceneMesh {
        self.registry.add_subtraction(template, position);
        self.rebuild()
    }

    /// Back to the bare root block. Pending animations are cancelled.
    pub fn reset_mesh(&mut self) -> SharedSceneMesh {
        self.registry.reset();
        self.animations.clear();
        self.rebuild()
    }

    fn rebuild(&mut self) -> SharedSceneMesh {
        self.compositor.rebuild(&self.registry, &mut self.scene)
    }

    // =========================================================================
    // INPUT
    // =========================================================================

    /// Records the pointer position in pixels relative to the page.
    pub fn pointer_move(&mut self, x: f64, y: f64, viewport: &Viewport) {
        match viewport.to_ndc(x, y) {
            Some(ndc) => self.pointer = ndc,
            None => tracing::trace!(?viewport, "pointer over empty viewport"),
        }
    }

    /// Sets the pointer directly in NDC.
    pub fn set_pointer_ndc(&mut self, ndc: DVec2) {
        self.pointer = ndc;
    }

    /// Point on the sculpture under the pointer, if any.
    pub fn hover_point(&self) -> Option<DVec3> {
        let mesh = self.compositor.current().borrow();
        pick(self.pointer, &self.camera, &mesh)
    }

    pub fn is_hovering(&self) -> bool {
        self.hover_point().is_some()
    }

    /// Carves the current tool shape where the pointer hits the sculpture.
    ///
    /// The hit lies on the displayed, possibly animated, node; it is mapped
    /// back through the node transform so the carve lands under the pointer.
    /// Returns the carve position in composition space, or `None` if the
    /// pointer missed or the tool geometry could not be built.
    pub fn pointer_down(&mut self) -> Option<DVec3> {
        let hit = self.hover_point()?;
        self.controls.set_enabled(false);

        let to_local = self.compositor.current().borrow().transform.matrix().inverse();
        let point = to_local.transform_point3(hit);
        if !point.is_finite() {
            tracing::warn!(?hit, "sculpture transform is not invertible");
            return None;
        }

        let template = match self.shape.build_template() {
            Ok(template) => template,
            Err(err) => {
                tracing::warn!(%err, shape = %self.shape.kind(), "could not build carving tool");
                return None;
            }
        };

        tracing::debug!(
            shape = %self.shape.kind(),
            x = point.x,
            y = point.y,
            z = point.z,
            "placing subtraction"
        );
        self.add_subtraction(&template, point);
        Some(point)
    }

    pub fn pointer_up(&mut self) {
        self.controls.set_enabled(true);
    }

    /// Follows a canvas resize.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.camera.set_aspect(width / height);
    }

    // =========================================================================
    // ANIMATION
    // =========================================================================

    /// Advances all animations by one frame.
    pub fn tick(&mut self) -> usize {
        let completed = self.animations.tick();
        tracing::trace!(pending = self.animations.len(), completed, "tick");
        completed
    }

    /// Endless quarter turns about X, Y and Z, with the color cycling
    /// through red, green and blue.
    pub fn spin_cycle(&mut self) -> Result<(), SessionError> {
        let mesh = self.compositor.current().clone();
        let mesh_target = self.mesh_target();

        let turns: [(Euler, fn(&mut Euler)); 3] = [
            (Euler::new(FRAC_PI_2, 0.0, 0.0), |e: &mut Euler| e.x = 0.0),
            (Euler::new(0.0, FRAC_PI_2, 0.0), |e: &mut Euler| e.y = 0.0),
            (Euler::new(0.0, 0.0, FRAC_PI_2), |e: &mut Euler| e.z = 0.0),
        ];
        let mut spins = Vec::with_capacity(turns.len());
        for (turn, unwind) in turns {
            let handle = mesh.clone();
            spins.push(
                Animation::new(mesh_target.clone(), "rotation", turn.into(), DEFAULT_ANIMATION_SPEED)?
                    .with_callback(move |_| unwind(&mut handle.borrow_mut().transform.rotation)),
            );
        }

        let material_target = self.material_target();
        let colors = [Color::RED, Color::GREEN, Color::BLUE]
            .into_iter()
            .map(|color| {
                Animation::new(material_target.clone(), "color", color.into(), COLOR_CYCLE_SPEED)
            })
            .collect::<Result<Vec<_>, _>>()?;

        start_cycle(&mut self.animations, spins)?;
        start_cycle(&mut self.animations, colors)?;
        tracing::debug!("spin cycle started");
        Ok(())
    }

    /// Lift, turn, grow, redden and fade the sculpture at once.
    pub fn showcase(&mut self) -> Result<(), SessionError> {
        self.animate_all(
            DVec3::new(0.0, 0.25, 0.0),
            Euler::new(FRAC_PI_2, FRAC_PI_2, FRAC_PI_2),
            DVec3::splat(2.0),
            Color::RED,
            0.6,
        )
    }

    /// Animates the sculpture back to its resting state.
    pub fn reset_animations(&mut self) -> Result<(), SessionError> {
        self.animate_all(DVec3::ZERO, Euler::default(), DVec3::ONE, Color::WHITE, 1.0)
    }

    fn animate_all(
        &mut self,
        position: DVec3,
        rotation: Euler,
        scale: DVec3,
        color: Color,
        opacity: f64,
    ) -> Result<(), SessionError> {
        let mesh = self.mesh_target();
        let material = self.material_target();

        let tasks: [(&SharedTarget, &str, AnimatedValue); 5] = [
            (&mesh, "position", position.into()),
            (&mesh, "rotation", rotation.into()),
            (&mesh, "scale", scale.into()),
            (&material, "color", color.into()),
            (&material, "opacity", opacity.into()),
        ];
        for (target, property, end) in tasks {
            let animation = Animation::new(target.clone(), property, end, DEFAULT_ANIMATION_SPEED)?;
            self.animations.enqueue(animation);
        }
        Ok(())
    }

    fn mesh_target(&self) -> SharedTarget {
        self.compositor.current().clone()
    }

    fn material_target(&self) -> SharedTarget {
        self.compositor.current().borrow().material().clone()
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    /// The displayed composed node.
    pub fn composed(&self) -> &SharedSceneMesh {
        self.compositor.current()
    }

    /// Signed volume of the composed geometry (local space).
    pub fn volume(&self) -> f64 {
        self.compositor.current().borrow().mesh().signed_volume()
    }

    /// Incremented on every recomposition.
    pub fn revision(&self) -> u64 {
        self.compositor.revision()
    }

    pub fn registry(&self) -> &PrimitiveRegistry {
        &self.registry
    }

    pub fn shape(&self) -> &ShapeSelector {
        &self.shape
    }

    pub fn shape_mut(&mut self) -> &mut ShapeSelector {
        &mut self.shape
    }

    pub fn animations(&self) -> &AnimationQueue {
        &self.animations
    }

    pub fn animations_mut(&mut self) -> &mut AnimationQueue {
        &mut self.animations
    }

    pub fn scene(&self) -> &G {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut G {
        &mut self.scene
    }

    pub fn camera(&self) -> &C {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut C {
        &mut self.camera
    }

    pub fn controls(&self) -> &K {
        &self.controls
    }

    /// Pointer position in NDC.
    pub fn pointer(&self) -> DVec2 {
        self.pointer
    }
}
