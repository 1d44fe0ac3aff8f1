use crate::host::{BodyRef, HostWorld};

/// Shared candidate list for one scan cycle.
///
/// World enumeration is the expensive half of a scan, so it happens exactly
/// once per scan interval and every generator filters the same buffer. The
/// buffer is reused across refreshes to keep the scan allocation-free once
/// it has grown to the world's working size.
#[derive(Debug, Default)]
pub struct BodySnapshot {
    bodies: Vec<BodyRef>,
}

impl BodySnapshot {
    pub fn new() -> Self {
        Self { bodies: Vec::new() }
    }

    /// Re-enumerate the world's dynamic bodies into the buffer.
    pub fn refresh(&mut self, world: &impl HostWorld) {
        self.bodies.clear();
        world.collect_bodies(&mut self.bodies);
    }

    /// The current candidate set, valid until the next refresh. Entries are
    /// weak: every body must be re-resolved before use.
    pub fn candidates(&self) -> &[BodyRef] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}
