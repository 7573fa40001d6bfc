//! WASM-facing entry points for the sculpting session.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The JavaScript host owns the canvas, the Three.js scene
//! and the frame loop; it forwards pointer events here, calls `tick` once
//! per frame and re-uploads the mesh whenever `mesh_changed` reports so.
//!
//! Native tests drive the session through the Rust-typed constructors
//! (`SculptSession::create`) to avoid depending on a JS host.
//!
//! ```
//! let mut session = sculpt_wasm::SculptSession::create(800.0, 600.0, None).unwrap();
//! session.pointer_move(400.0, 300.0);
//! assert!(session.pointer_down());
//! ```

use config::constants::DEFAULT_SEGMENTS;
use glam::DVec3;
use sculpt_anim::RotationOrder;
use sculpt_core::{
    Camera, Controls, OrbitControls, PerspectiveCamera, Sculptor, SessionConfig, SessionError,
    ShapeKind, Viewport,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

mod mesh_handle;
mod scene_store;

pub use mesh_handle::MeshHandle;
pub use scene_store::HostScene;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "sculpt-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default tessellation segment count for cylinders and
/// spheres.
///
/// # Examples
/// ```
/// let segments = sculpt_wasm::default_segments();
/// assert!(segments >= 3);
/// ```
#[wasm_bindgen]
pub fn default_segments() -> u32 {
    DEFAULT_SEGMENTS
}

/// Parses an optional JSON session configuration.
///
/// Missing fields keep their defaults; `None` yields the default config.
///
/// # Examples
/// ```
/// let config = sculpt_wasm::parse_config(Some(r#"{ "shape": "sphere" }"#)).unwrap();
/// assert_eq!(config.shape, sculpt_core::ShapeKind::Sphere);
/// ```
pub fn parse_config(json: Option<&str>) -> Result<SessionConfig, SessionError> {
    match json {
        Some(json) if !json.trim().is_empty() => serde_json::from_str(json)
            .map_err(|err| SessionError::invalid_config(format!("malformed config: {}", err))),
        _ => Ok(SessionConfig::default()),
    }
}

fn to_js(err: SessionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Node state read back by the host after each tick.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeSnapshot {
    pub position: [f64; 3],
    pub rotation: [f64; 3],
    pub rotation_order: RotationOrder,
    pub scale: [f64; 3],
    pub color: [f64; 3],
    pub opacity: f64,
    pub transparent: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

/// A sculpting session bound to one canvas.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const session = new SculptSession(canvas.width, canvas.height);
/// // canvas.onpointermove = (e) => session.pointer_move(e.clientX, e.clientY);
/// // canvas.onpointerdown = () => session.pointer_down();
/// // canvas.onpointerup = () => session.pointer_up();
/// // function frame() {
/// //   session.tick();
/// //   if (session.mesh_changed()) upload(session.mesh());
/// //   applyTransform(JSON.parse(session.snapshot_json()));
/// //   requestAnimationFrame(frame);
/// // }
/// ```
#[wasm_bindgen]
pub struct SculptSession {
    sculptor: Sculptor<HostScene, PerspectiveCamera, OrbitControls>,
    viewport: Viewport,
}

impl SculptSession {
    /// Creates a session for a canvas at the page origin.
    pub fn create(width: f64, height: f64, config_json: Option<&str>) -> Result<Self, SessionError> {
        let config = parse_config(config_json)?;

        let mut camera = PerspectiveCamera::new(width / height);
        camera.eye = DVec3::from_array(config.camera_position);
        camera.fov_degrees = config.camera_fov_degrees;

        let sculptor =
            Sculptor::with_parts(&config, HostScene::new(), camera, OrbitControls::default())?;

        Ok(Self {
            sculptor,
            viewport: Viewport::sized(width, height),
        })
    }

    pub fn sculptor(&self) -> &Sculptor<HostScene, PerspectiveCamera, OrbitControls> {
        &self.sculptor
    }

    /// Current state of the composed node.
    pub fn snapshot(&self) -> NodeSnapshot {
        let node = self.sculptor.composed().borrow();
        let material = node.material().borrow();
        let rotation = node.transform.rotation;

        NodeSnapshot {
            position: node.transform.position.to_array(),
            rotation: [rotation.x, rotation.y, rotation.z],
            rotation_order: rotation.order,
            scale: node.transform.scale.to_array(),
            color: material.color.to_array(),
            opacity: material.opacity,
            transparent: material.transparent,
            cast_shadow: node.cast_shadow,
            receive_shadow: node.receive_shadow,
        }
    }
}

#[wasm_bindgen]
impl SculptSession {
    /// Creates a session for a canvas of the given size.
    ///
    /// # Errors
    /// Returns a JavaScript error if the configuration is malformed or
    /// invalid.
    #[wasm_bindgen(constructor)]
    pub fn new(width: f64, height: f64, config_json: Option<String>) -> Result<SculptSession, JsValue> {
        Self::create(width, height, config_json.as_deref()).map_err(to_js)
    }

    // =========================================================================
    // INPUT
    // =========================================================================

    /// Moves the canvas rectangle, e.g. after a layout change.
    pub fn set_viewport(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.viewport = Viewport::new(left, top, width, height);
        self.sculptor.camera_mut().set_aspect(self.viewport.aspect());
    }

    /// Follows a canvas resize.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.viewport.width = width;
        self.viewport.height = height;
        self.sculptor.resize(width, height);
    }

    /// Pointer position in client pixels.
    pub fn pointer_move(&mut self, client_x: f64, client_y: f64) {
        self.sculptor.pointer_move(client_x, client_y, &self.viewport);
    }

    /// Returns true if a carve was placed.
    pub fn pointer_down(&mut self) -> bool {
        self.sculptor.pointer_down().is_some()
    }

    pub fn pointer_up(&mut self) {
        self.sculptor.pointer_up();
    }

    /// True while the pointer is over the sculpture.
    pub fn is_hovering(&self) -> bool {
        self.sculptor.is_hovering()
    }

    pub fn controls_enabled(&self) -> bool {
        self.sculptor.controls().is_enabled()
    }

    // =========================================================================
    // TOOL
    // =========================================================================

    /// Selects the carving shape: "rectangle", "cylinder" or "sphere".
    ///
    /// # Errors
    /// Returns a JavaScript error for unknown names.
    pub fn set_shape(&mut self, name: &str) -> Result<(), JsValue> {
        let kind: ShapeKind = name.parse().map_err(to_js)?;
        self.sculptor.shape_mut().select(kind);
        Ok(())
    }

    pub fn shape(&self) -> String {
        self.sculptor.shape().kind().to_string()
    }

    pub fn set_width(&mut self, width: f64) {
        self.sculptor.shape_mut().set_width(width);
    }

    pub fn set_height(&mut self, height: f64) {
        self.sculptor.shape_mut().set_height(height);
    }

    pub fn set_depth(&mut self, depth: f64) {
        self.sculptor.shape_mut().set_depth(depth);
    }

    /// Tool dimensions after clamping: [width, height, depth].
    pub fn dimensions(&self) -> Vec<f64> {
        let shape = self.sculptor.shape();
        vec![shape.width(), shape.height(), shape.depth()]
    }

    // =========================================================================
    // SCULPTURE
    // =========================================================================

    /// Drops every carve and shows the bare block again.
    pub fn reset_mesh(&mut self) {
        self.sculptor.reset_mesh();
    }

    /// Snapshot of the composed geometry.
    pub fn mesh(&self) -> MeshHandle {
        MeshHandle::from_mesh(self.sculptor.composed().borrow().mesh())
    }

    /// True once after every recomposition.
    pub fn mesh_changed(&mut self) -> bool {
        self.sculptor.scene_mut().take_stale()
    }

    pub fn revision(&self) -> f64 {
        self.sculptor.revision() as f64
    }

    pub fn volume(&self) -> f64 {
        self.sculptor.volume()
    }

    // =========================================================================
    // ANIMATION
    // =========================================================================

    /// Advances animations by one frame; returns completed task count.
    pub fn tick(&mut self) -> u32 {
        u32::try_from(self.sculptor.tick()).unwrap_or(u32::MAX)
    }

    pub fn spin_cycle(&mut self) -> Result<(), JsValue> {
        self.sculptor.spin_cycle().map_err(to_js)
    }

    pub fn showcase(&mut self) -> Result<(), JsValue> {
        self.sculptor.showcase().map_err(to_js)
    }

    pub fn reset_animations(&mut self) -> Result<(), JsValue> {
        self.sculptor.reset_animations().map_err(to_js)
    }

    pub fn pending_animations(&self) -> u32 {
        u32::try_from(self.sculptor.animations().len()).unwrap_or(u32::MAX)
    }

    /// Node transform and material as JSON (see `NodeSnapshot`).
    pub fn snapshot_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.snapshot()).map_err(|err| JsValue::from_str(&err.to_string()))
    }

    // =========================================================================
    // CAMERA
    // =========================================================================

    /// Mirrors the host camera after the user orbits.
    pub fn set_camera(&mut self, x: f64, y: f64, z: f64) {
        self.sculptor.camera_mut().eye = DVec3::new(x, y, z);
    }

    /// Camera eye position: [x, y, z].
    pub fn camera_position(&self) -> Vec<f64> {
        self.sculptor.camera().eye.to_array().to_vec()
    }
}
