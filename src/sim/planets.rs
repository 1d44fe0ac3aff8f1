use glam::Vec3;

use crate::host::{HostWorld, PlanetId};

/// Spherical natural-gravity falloff: full strength at or below the surface,
/// power-law decay outside, nothing beyond the influence limit.
#[derive(Debug, Clone, Copy)]
pub struct GravityWell {
    pub surface_radius: f32,
    pub falloff_exponent: f32,
    /// Strength at the surface, already normalized to [0, 1] where 1.0 is
    /// full natural gravity.
    pub surface_strength: f32,
}

impl GravityWell {
    /// Local gravity multiplier at `point` for a well centered at `center`.
    pub fn multiplier(&self, center: Vec3, point: Vec3) -> f32 {
        let distance = (point - center).length();
        if distance <= self.surface_radius {
            return self.surface_strength;
        }
        let ratio = self.surface_radius / distance;
        self.surface_strength * ratio.powf(self.falloff_exponent)
    }
}

/// One natural gravity source as seen by the catalog. Rebuilt wholesale on
/// every refresh, never mutated in place.
#[derive(Debug, Clone, Copy)]
pub struct GravitySource {
    pub id: PlanetId,
    pub center: Vec3,
    /// Influence limit, squared. Outside this the source contributes nothing.
    pub influence_radius_sq: f32,
    pub well: GravityWell,
}

impl GravitySource {
    /// Contribution direction-times-strength at `point`, or `None` when the
    /// point is beyond the influence limit.
    fn contribution(&self, point: Vec3) -> Option<Vec3> {
        let to_center = self.center - point;
        if to_center.length_squared() > self.influence_radius_sq {
            return None;
        }
        let dir = to_center.normalize_or_zero();
        Some(dir * self.well.multiplier(self.center, point))
    }
}

/// Registry of natural gravity sources, refreshed at a coarse cadence since
/// planets rarely move relative to generators.
#[derive(Debug, Default)]
pub struct PlanetCatalog {
    sources: Vec<GravitySource>,
}

impl PlanetCatalog {
    pub fn new() -> Self {
        Self { sources: Vec::new() }
    }

    /// Rescan the world and replace the catalog. The buffer is reused, so
    /// closed planets drop out by simply not being collected again.
    pub fn refresh(&mut self, world: &impl HostWorld) {
        self.sources.clear();
        world.collect_gravity_sources(&mut self.sources);
        log::debug!("planet catalog refreshed, {} sources", self.sources.len());
    }

    pub fn sources(&self) -> &[GravitySource] {
        &self.sources
    }

    /// Magnitude of the summed natural gravity at `point`, in multiplier
    /// units. Zero when no source is in range.
    pub fn total_attenuation(&self, point: Vec3) -> f32 {
        if self.sources.is_empty() {
            return 0.0;
        }
        let mut natural = Vec3::ZERO;
        for source in &self.sources {
            if let Some(contribution) = source.contribution(point) {
                natural += contribution;
            }
        }
        if natural == Vec3::ZERO {
            0.0
        } else {
            natural.length()
        }
    }
}

/// The host's own artificial/natural gravity interaction: artificial output
/// scales by `1 - dampening * natural`, clamped to [0, 1]. `dampening` is an
/// empirical constant (2.0), not derived from first principles.
pub fn dampening_factor(attenuation: f32, dampening: f32) -> f32 {
    if attenuation > 0.0 {
        (1.0 - attenuation * dampening).clamp(0.0, 1.0)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn well() -> GravityWell {
        GravityWell { surface_radius: 1000.0, falloff_exponent: 2.0, surface_strength: 1.0 }
    }

    fn source(center: Vec3) -> GravitySource {
        GravitySource {
            id: PlanetId(1),
            center,
            influence_radius_sq: 4000.0 * 4000.0,
            well: well(),
        }
    }

    #[test]
    fn well_is_full_strength_at_surface_and_decays() {
        let w = well();
        let c = Vec3::ZERO;
        assert_eq!(w.multiplier(c, Vec3::new(500.0, 0.0, 0.0)), 1.0);
        let at_2r = w.multiplier(c, Vec3::new(2000.0, 0.0, 0.0));
        assert!((at_2r - 0.25).abs() < 1e-5);
    }

    #[test]
    fn empty_catalog_gives_zero() {
        let catalog = PlanetCatalog::new();
        assert_eq!(catalog.total_attenuation(Vec3::splat(123.0)), 0.0);
    }

    #[test]
    fn out_of_range_source_contributes_nothing() {
        let mut catalog = PlanetCatalog::new();
        catalog.sources.push(source(Vec3::ZERO));
        assert_eq!(catalog.total_attenuation(Vec3::new(5000.0, 0.0, 0.0)), 0.0);
    }

    #[test]
    fn opposing_sources_cancel() {
        let mut catalog = PlanetCatalog::new();
        catalog.sources.push(source(Vec3::new(-2000.0, 0.0, 0.0)));
        catalog.sources.push(source(Vec3::new(2000.0, 0.0, 0.0)));
        // both pull at 0.25 multiplier in opposite directions
        assert!(catalog.total_attenuation(Vec3::ZERO) < 1e-6);
    }

    #[test]
    fn dampening_clamps_at_half_natural() {
        assert_eq!(dampening_factor(0.0, 2.0), 1.0);
        assert!((dampening_factor(0.25, 2.0) - 0.5).abs() < 1e-6);
        assert_eq!(dampening_factor(0.5, 2.0), 0.0);
        assert_eq!(dampening_factor(0.9, 2.0), 0.0);
    }

    #[test]
    fn dampening_is_monotonic() {
        let mut last = 1.0f32;
        for i in 0..=50 {
            let a = i as f32 / 100.0;
            let f = dampening_factor(a, 2.0);
            assert!(f <= last);
            last = f;
        }
    }
}
