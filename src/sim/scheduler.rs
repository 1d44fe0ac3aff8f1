use std::collections::HashMap;

use crate::host::{DeviceId, HostWorld};
use crate::sim::generator::Generator;
use crate::sim::planets::PlanetCatalog;
use crate::sim::snapshot::BodySnapshot;
use crate::sim::SimConfig;

/// One simulation session's generator registry and tick driver.
///
/// Owns all shared state (planet catalog, body snapshot, generator map) so
/// multiple independent sessions can coexist and tests stay deterministic.
/// Everything runs on the host's single update thread; the snapshot and
/// catalog are only mutated here, at tick boundaries, and are read-only to
/// the generators in between.
pub struct GravitySim {
    config: SimConfig,
    generators: HashMap<DeviceId, Generator>,
    planets: PlanetCatalog,
    snapshot: BodySnapshot,
    tick: u64,
    retired: Vec<DeviceId>,
}

impl GravitySim {
    pub fn new(config: SimConfig) -> Self {
        Self {
            config,
            generators: HashMap::new(),
            planets: PlanetCatalog::new(),
            snapshot: BodySnapshot::new(),
            tick: 0,
            retired: Vec::new(),
        }
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    pub fn generator(&self, device: DeviceId) -> Option<&Generator> {
        self.generators.get(&device)
    }

    pub fn generator_mut(&mut self, device: DeviceId) -> Option<&mut Generator> {
        self.generators.get_mut(&device)
    }

    pub fn planets(&self) -> &PlanetCatalog {
        &self.planets
    }

    /// Add a generator. No-op when the device is already registered.
    pub fn register(&mut self, generator: Generator) {
        let device = generator.device();
        if self.generators.contains_key(&device) {
            return;
        }
        log::debug!("registered generator for device {:?}", device);
        self.generators.insert(device, generator);
    }

    /// Remove a generator. No-op when absent.
    pub fn deregister(&mut self, device: DeviceId) {
        if self.generators.remove(&device).is_some() {
            log::debug!("deregistered generator for device {:?}", device);
        }
    }

    /// Drop all state. Called on world unload.
    pub fn clear(&mut self) {
        self.generators.clear();
        self.planets = PlanetCatalog::new();
        self.snapshot = BodySnapshot::new();
        self.tick = 0;
    }

    /// Run one simulation tick.
    ///
    /// Planet catalog and body snapshot refresh on their own coarser
    /// cadences; field membership is rebuilt at the scan cadence against the
    /// single shared snapshot; forces apply every tick. Iteration order over
    /// generators is irrelevant since forces accumulate additively in the
    /// host physics step.
    pub fn update(&mut self, world: &mut impl HostWorld) {
        if self.tick % self.config.planet_scan_period == 0 {
            self.planets.refresh(world);
        }

        if self.tick % self.config.scan_period == 0 {
            self.snapshot.refresh(world);

            self.retired.clear();
            for (device, generator) in self.generators.iter_mut() {
                if !generator.slow_scan(world, self.snapshot.candidates(), &self.planets) {
                    self.retired.push(*device);
                }
            }
            // Devices that closed without an explicit deregister.
            while let Some(device) = self.retired.pop() {
                log::debug!("retiring generator for closed device {:?}", device);
                self.generators.remove(&device);
            }
        }

        for generator in self.generators.values_mut() {
            generator.fast_apply(world, &self.config);
        }

        self.tick += 1;
    }
}

impl Default for GravitySim {
    fn default() -> Self {
        Self::new(SimConfig::default())
    }
}
