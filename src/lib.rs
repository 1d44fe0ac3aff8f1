//! Simulation core for enhanced gravity generator devices.
//!
//! A generator projects a field volume (a sphere or an oriented box) and
//! pulls every other dynamic rigid body inside it. Spherical fields pull
//! toward the device, flat fields push along the device's local down axis,
//! and an optional counter-push applies the reaction to the generator's own
//! host body. Output is dampened near natural gravity sources the same way
//! the host game dampens its built-in generators.
//!
//! The crate owns no bodies, devices or planets; it drives everything
//! through the [`host::HostWorld`] seam, once per simulation tick via
//! [`sim::GravitySim::update`].

pub mod host;
pub mod sim;

pub use host::{BodyId, BodyRef, BodySample, DeviceId, DeviceKind, DeviceSample, DeviceState,
    FieldSize, HostWorld, PlanetId, SizeClass};
pub use sim::{DeviceBinding, FieldVolume, Generator, GeneratorFlags, GravitySim, GravitySource,
    GravityWell, Obb, PlanetCatalog, SimConfig, SimError};
