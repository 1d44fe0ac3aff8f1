use std::cell::Cell;

use glam::{Quat, Vec3};

use gravgen::{
    BodyId, BodyRef, BodySample, DeviceId, DeviceSample, DeviceState, FieldSize, GravitySource,
    HostWorld, Obb, SizeClass,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub struct TestBody {
    pub id: BodyId,
    pub size_class: SizeClass,
    pub mass: f32,
    pub center_of_mass: Vec3,
    pub half_extents: Vec3,
    pub orientation: Quat,
    pub is_static: bool,
    pub physics_enabled: bool,
    pub is_preview: bool,
    pub closed: bool,
}

pub struct TestDevice {
    pub id: DeviceId,
    pub is_working: bool,
    pub position: Vec3,
    pub orientation: Quat,
    pub acceleration: f32,
    pub field_size: FieldSize,
    pub host_body: BodyId,
    pub custom_name: String,
    pub closed: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct AppliedForce {
    pub body: BodyId,
    pub force: Vec3,
    pub at: Vec3,
}

/// In-memory stand-in for the host game world.
#[derive(Default)]
pub struct TestWorld {
    pub bodies: Vec<TestBody>,
    pub devices: Vec<TestDevice>,
    pub planets: Vec<GravitySource>,
    pub forces: Vec<AppliedForce>,
    /// How many times the body enumeration ran, to assert snapshot sharing.
    pub enumerations: Cell<usize>,
    /// How many times the full, name-bearing device sample was taken, to
    /// assert the per-tick path sticks to the light state query.
    pub device_samples: Cell<usize>,
}

impl TestWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_body(&mut self, size_class: SizeClass, mass: f32, center_of_mass: Vec3) -> BodyId {
        let id = BodyId(self.bodies.len() as u64 + 1);
        self.bodies.push(TestBody {
            id,
            size_class,
            mass,
            center_of_mass,
            half_extents: Vec3::ZERO,
            orientation: Quat::IDENTITY,
            is_static: false,
            physics_enabled: true,
            is_preview: false,
            closed: false,
        });
        id
    }

    pub fn add_spherical_device(
        &mut self,
        name: &str,
        position: Vec3,
        radius: f32,
        acceleration: f32,
        host_body: BodyId,
    ) -> DeviceId {
        self.add_device(name, position, FieldSize::Radius(radius), acceleration, host_body)
    }

    pub fn add_flat_device(
        &mut self,
        name: &str,
        position: Vec3,
        field_size: Vec3,
        acceleration: f32,
        host_body: BodyId,
    ) -> DeviceId {
        self.add_device(name, position, FieldSize::Extent(field_size), acceleration, host_body)
    }

    fn add_device(
        &mut self,
        name: &str,
        position: Vec3,
        field_size: FieldSize,
        acceleration: f32,
        host_body: BodyId,
    ) -> DeviceId {
        let id = DeviceId(self.devices.len() as u64 + 1);
        self.devices.push(TestDevice {
            id,
            is_working: true,
            position,
            orientation: Quat::IDENTITY,
            acceleration,
            field_size,
            host_body,
            custom_name: name.to_string(),
            closed: false,
        });
        id
    }

    pub fn body_mut(&mut self, id: BodyId) -> &mut TestBody {
        self.bodies.iter_mut().find(|b| b.id == id).unwrap()
    }

    pub fn device_mut(&mut self, id: DeviceId) -> &mut TestDevice {
        self.devices.iter_mut().find(|d| d.id == id).unwrap()
    }

    pub fn forces_on(&self, id: BodyId) -> Vec<AppliedForce> {
        self.forces.iter().copied().filter(|f| f.body == id).collect()
    }

    pub fn total_force_on(&self, id: BodyId) -> Vec3 {
        self.forces_on(id).iter().map(|f| f.force).sum()
    }

    pub fn clear_forces(&mut self) {
        self.forces.clear();
    }
}

impl HostWorld for TestWorld {
    fn collect_bodies(&self, out: &mut Vec<BodyRef>) {
        self.enumerations.set(self.enumerations.get() + 1);
        out.extend(
            self.bodies
                .iter()
                .filter(|b| !b.closed)
                .map(|b| BodyRef { id: b.id, size_class: b.size_class }),
        );
    }

    fn body(&self, id: BodyId) -> Option<BodySample> {
        let body = self.bodies.iter().find(|b| b.id == id && !b.closed)?;
        Some(BodySample {
            mass: body.mass,
            center_of_mass: body.center_of_mass,
            world_obb: Obb::new(body.center_of_mass, body.half_extents, body.orientation),
            is_static: body.is_static,
            physics_enabled: body.physics_enabled,
            is_preview: body.is_preview,
        })
    }

    fn apply_world_force(&mut self, id: BodyId, force: Vec3, at: Vec3) {
        if self.bodies.iter().any(|b| b.id == id && !b.closed) {
            self.forces.push(AppliedForce { body: id, force, at });
        }
    }

    fn collect_gravity_sources(&self, out: &mut Vec<GravitySource>) {
        out.extend(self.planets.iter().copied());
    }

    fn device(&self, id: DeviceId) -> Option<DeviceSample> {
        let device = self.devices.iter().find(|d| d.id == id && !d.closed)?;
        self.device_samples.set(self.device_samples.get() + 1);
        Some(DeviceSample {
            is_working: device.is_working,
            position: device.position,
            orientation: device.orientation,
            acceleration: device.acceleration,
            field_size: device.field_size,
            host_body: device.host_body,
            custom_name: device.custom_name.clone(),
        })
    }

    fn device_state(&self, id: DeviceId) -> Option<DeviceState> {
        let device = self.devices.iter().find(|d| d.id == id && !d.closed)?;
        Some(DeviceState {
            is_working: device.is_working,
            position: device.position,
            orientation: device.orientation,
        })
    }
}
