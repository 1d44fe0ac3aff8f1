use glam::{Quat, Vec3};

use crate::sim::volume::Obb;

/// Opaque handle to a rigid body owned by the host world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u64);

/// Opaque handle to a generator device owned by the host world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeviceId(pub u64);

/// Opaque handle to a natural gravity source (planet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlanetId(pub u64);

/// Grid size classification used by the eligibility filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClass {
    Small,
    Large,
}

/// Snapshot entry for one candidate body.
///
/// The size class is cached at enumeration time so the per-generator filter
/// never has to resolve the body just to classify it.
#[derive(Debug, Clone, Copy)]
pub struct BodyRef {
    pub id: BodyId,
    pub size_class: SizeClass,
}

/// Per-use view of a live body.
///
/// Obtained through [`HostWorld::body`] immediately before each use; a body
/// that closed since the last scan simply stops resolving.
#[derive(Debug, Clone)]
pub struct BodySample {
    pub mass: f32,
    /// Center of mass in world space. Forces are applied here.
    pub center_of_mass: Vec3,
    /// The body's local bounding box carried into world space.
    pub world_obb: Obb,
    pub is_static: bool,
    pub physics_enabled: bool,
    /// Preview/ghost bodies (e.g. placement projections) never receive force.
    pub is_preview: bool,
}

/// Which field geometry a generator device projects. Fixed for the lifetime
/// of the device, so it is captured once at bind time rather than re-checked
/// every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceKind {
    Spherical,
    Flat,
}

/// Kind-specific field size, read from the device each scan.
#[derive(Debug, Clone, Copy)]
pub enum FieldSize {
    /// Radius of a spherical field.
    Radius(f32),
    /// Full width/height/depth of a flat (box) field.
    Extent(Vec3),
}

/// Per-tick view of a device. Only what the force loop needs, cheap to
/// produce: no name, no field size, nothing heap-allocated.
#[derive(Debug, Clone, Copy)]
pub struct DeviceState {
    pub is_working: bool,
    pub position: Vec3,
    pub orientation: Quat,
}

/// Per-scan view of a generator device's current configuration.
#[derive(Debug, Clone)]
pub struct DeviceSample {
    /// Powered, functional and enabled, all in one flag.
    pub is_working: bool,
    pub position: Vec3,
    pub orientation: Quat,
    /// Configured field acceleration, m/s^2. May be negative (repulsor).
    pub acceleration: f32,
    pub field_size: FieldSize,
    /// The rigid body the device is mounted on. Receives the counter-push.
    pub host_body: BodyId,
    pub custom_name: String,
}

/// The seam between the simulation core and the host world.
///
/// The host owns every body, device and planet; the core only holds ids and
/// resolves them on demand. All methods are synchronous and are only called
/// from the host's single update thread.
pub trait HostWorld {
    /// Append every candidate body to `out`: dynamic, physics active, not a
    /// volumetric/phantom entity. Called once per scan interval; the buffer
    /// is reused across calls.
    fn collect_bodies(&self, out: &mut Vec<BodyRef>);

    /// Resolve a body if it still exists. `None` means closed.
    fn body(&self, id: BodyId) -> Option<BodySample>;

    /// Apply a world-frame force (not an impulse) at a world-space point.
    /// Silently ignored for closed bodies.
    fn apply_world_force(&mut self, id: BodyId, force: Vec3, at: Vec3);

    /// Append every natural gravity source to `out`. Called once per planet
    /// scan interval.
    fn collect_gravity_sources(&self, out: &mut Vec<crate::sim::planets::GravitySource>);

    /// Resolve a generator device if it still exists. `None` means closed.
    /// Carries the custom name, so it is only called on bind, name-changed
    /// and scan paths, never per tick.
    fn device(&self, id: DeviceId) -> Option<DeviceSample>;

    /// Resolve the per-tick slice of a device's state. Runs every tick for
    /// every generator and must stay allocation-free.
    fn device_state(&self, id: DeviceId) -> Option<DeviceState>;
}
