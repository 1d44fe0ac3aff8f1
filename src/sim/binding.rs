use crate::host::{DeviceId, DeviceKind, HostWorld};
use crate::sim::generator::{Generator, GeneratorFlags};
use crate::sim::scheduler::GravitySim;
use crate::sim::SimError;

/// Glue between one host device handle and its generator instance.
///
/// Holds no simulation logic: it defers registration until the device's
/// physics is ready, relays name-changed and custom-info events, and
/// deregisters on close. The registry also retires generators whose device
/// stopped resolving, so a missed close cannot leak an instance.
#[derive(Debug)]
pub struct DeviceBinding {
    device: DeviceId,
    kind: DeviceKind,
    bound: bool,
}

impl DeviceBinding {
    /// The kind is known from the concrete device type at creation and never
    /// changes, so it is captured here once.
    pub fn new(device: DeviceId, kind: DeviceKind) -> Self {
        Self { device, kind, bound: false }
    }

    pub fn device(&self) -> DeviceId {
        self.device
    }

    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Attempt to construct and register the generator. Returns whether the
    /// binding is live; call again next tick while it is not. A device whose
    /// host body has no physics yet simply stays unbound.
    pub fn try_bind(&mut self, world: &impl HostWorld, sim: &mut GravitySim) -> bool {
        if self.bound {
            return true;
        }
        let Some(device) = world.device(self.device) else {
            return false;
        };
        if world.body(device.host_body).is_none() {
            return false;
        }

        let flags = GeneratorFlags::parse(&device.custom_name);
        sim.register(Generator::new(self.device, device.host_body, self.kind, flags));
        self.bound = true;
        log::debug!("bound device {:?} as {:?}", self.device, self.kind);
        true
    }

    /// Relay of the host's name-changed event: re-parse the flags.
    pub fn name_changed(&self, world: &impl HostWorld, sim: &mut GravitySim) -> Result<(), SimError> {
        if !self.bound {
            return Ok(());
        }
        let Some(device) = world.device(self.device) else {
            return Err(SimError::DeviceUnavailable(self.device));
        };
        if let Some(generator) = sim.generator_mut(self.device) {
            generator.set_flags(GeneratorFlags::parse(&device.custom_name));
        }
        Ok(())
    }

    /// Relay of the host's custom-info request: append the flag states.
    pub fn append_custom_info(&self, sim: &GravitySim, info: &mut String) {
        if let Some(generator) = sim.generator(self.device) {
            generator.append_custom_info(info);
        }
    }

    /// Relay of the host's close event. Idempotent.
    pub fn close(&mut self, sim: &mut GravitySim) {
        if self.bound {
            sim.deregister(self.device);
            self.bound = false;
        }
    }
}
