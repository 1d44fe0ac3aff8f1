use glam::Vec3;

use crate::host::{BodyId, BodyRef, DeviceId, DeviceKind, FieldSize, HostWorld, SizeClass};
use crate::sim::planets::{dampening_factor, PlanetCatalog};
use crate::sim::volume::{FieldVolume, Obb};
use crate::sim::SimConfig;

/// Behavior flags parsed from the device's user-assigned name.
///
/// A device with neither size flag set is inert regardless of power state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeneratorFlags {
    pub small: bool,
    pub large: bool,
    pub counter_push: bool,
}

impl GeneratorFlags {
    /// Case-insensitive substring scan for `@small`, `@large`, `@counterpush`.
    pub fn parse(name: &str) -> Self {
        let name = name.to_lowercase();
        Self {
            small: name.contains("@small"),
            large: name.contains("@large"),
            counter_push: name.contains("@counterpush"),
        }
    }

    pub fn any_size(&self) -> bool {
        self.small || self.large
    }

    pub fn allows(&self, class: SizeClass) -> bool {
        match class {
            SizeClass::Small => self.small,
            SizeClass::Large => self.large,
        }
    }
}

fn on_off(value: bool) -> &'static str {
    if value {
        "On"
    } else {
        "Off"
    }
}

/// One live generator device's simulation state.
///
/// Alternates between [`slow_scan`](Self::slow_scan) at the scan cadence
/// (rebuild field geometry, refresh membership, re-sample natural gravity)
/// and [`fast_apply`](Self::fast_apply) every tick (push on the members it
/// already knows about).
#[derive(Debug)]
pub struct Generator {
    device: DeviceId,
    host_body: BodyId,
    kind: DeviceKind,
    flags: GeneratorFlags,
    field: FieldVolume,
    acceleration: f32,
    natural_attenuation: f32,
    members: Vec<BodyRef>,
}

impl Generator {
    pub fn new(device: DeviceId, host_body: BodyId, kind: DeviceKind, flags: GeneratorFlags) -> Self {
        Self {
            device,
            host_body,
            kind,
            flags,
            // Empty until the first scan; fast_apply skips on no members.
            field: FieldVolume::Sphere { center: Vec3::ZERO, radius_sq: 0.0 },
            acceleration: 0.0,
            natural_attenuation: 0.0,
            members: Vec::new(),
        }
    }

    pub fn device(&self) -> DeviceId {
        self.device
    }

    pub fn flags(&self) -> GeneratorFlags {
        self.flags
    }

    /// Replace the flags, normally from a name-changed event.
    pub fn set_flags(&mut self, flags: GeneratorFlags) {
        self.flags = flags;
    }

    /// Natural gravity magnitude sampled at the device on the last scan.
    pub fn natural_attenuation(&self) -> f32 {
        self.natural_attenuation
    }

    /// Bodies inside the field as of the last scan. Weak: each entry must be
    /// re-resolved before use.
    pub fn members(&self) -> &[BodyRef] {
        &self.members
    }

    /// Recompute field geometry and membership from the shared candidate
    /// buffer. Returns `false` when the device no longer resolves and the
    /// generator should be retired.
    pub fn slow_scan(
        &mut self,
        world: &impl HostWorld,
        candidates: &[BodyRef],
        planets: &PlanetCatalog,
    ) -> bool {
        let Some(device) = world.device(self.device) else {
            return false;
        };

        if !device.is_working || !self.flags.any_size() {
            return true;
        }

        self.acceleration = device.acceleration;
        self.field = match (self.kind, device.field_size) {
            (DeviceKind::Spherical, FieldSize::Radius(radius)) => FieldVolume::Sphere {
                center: device.position,
                radius_sq: radius * radius,
            },
            (DeviceKind::Flat, FieldSize::Extent(size)) => {
                FieldVolume::Box(Obb::new(device.position, size * 0.5, device.orientation))
            }
            (kind, size) => {
                log::warn!("device {:?}: field size {:?} does not match kind {:?}", self.device, size, kind);
                return true;
            }
        };

        self.members.clear();
        for candidate in candidates {
            if candidate.id == self.host_body || !self.flags.allows(candidate.size_class) {
                continue;
            }
            let Some(body) = world.body(candidate.id) else {
                continue;
            };
            if !body.physics_enabled || body.is_static || body.is_preview {
                continue;
            }
            if self.field.intersects(&body.world_obb) {
                self.members.push(*candidate);
            }
        }

        self.natural_attenuation = planets.total_attenuation(device.position);
        true
    }

    /// Push on every member still alive. Runs every tick against the
    /// membership computed on the last scan.
    pub fn fast_apply(&mut self, world: &mut impl HostWorld, config: &SimConfig) {
        if !self.flags.any_size() || self.members.is_empty() {
            return;
        }
        // Re-sample the device so powering it off kills the output on the
        // very next tick, not the next scan. The light state query keeps
        // this path allocation-free.
        let Some(device) = world.device_state(self.device) else {
            return;
        };
        if !device.is_working {
            return;
        }

        let factor = dampening_factor(self.natural_attenuation, config.natural_dampening);
        let down = device.orientation * Vec3::NEG_Y;

        for member in &self.members {
            // Bodies can close between a scan and the next apply.
            let Some(body) = world.body(member.id) else {
                continue;
            };

            let dir = match self.kind {
                DeviceKind::Spherical => {
                    (device.position - body.center_of_mass).normalize_or_zero()
                }
                DeviceKind::Flat => down,
            };

            let force = dir * (self.acceleration * body.mass * factor);
            world.apply_world_force(member.id, force, body.center_of_mass);

            if self.flags.counter_push {
                // Reaction on the host body, applied at the affected body's
                // center of mass so the two forces cancel linearly.
                world.apply_world_force(self.host_body, -force, body.center_of_mass);
            }
        }
    }

    /// Diagnostic block appended to the device's custom info in the UI.
    pub fn append_custom_info(&self, info: &mut String) {
        info.push('\n');
        info.push_str("Gravity generator flags:\n");
        info.push_str(&format!("@small is {}\n", on_off(self.flags.small)));
        info.push_str(&format!("@large is {}\n", on_off(self.flags.large)));
        info.push_str(&format!("@counterpush is {}\n", on_off(self.flags.counter_push)));
        info.push_str("Add flags to the device's name to enable them, separated by spaces.\n");
    }
}
