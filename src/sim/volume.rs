use glam::{Mat3, Quat, Vec3};

/// Oriented bounding box in world space.
#[derive(Debug, Clone, Copy)]
pub struct Obb {
    pub center: Vec3,
    pub half_extents: Vec3,
    pub orientation: Quat,
}

impl Obb {
    pub fn new(center: Vec3, half_extents: Vec3, orientation: Quat) -> Self {
        Self { center, half_extents, orientation }
    }

    /// Axis-aligned box, handy for bodies without rotation.
    pub fn axis_aligned(center: Vec3, half_extents: Vec3) -> Self {
        Self { center, half_extents, orientation: Quat::IDENTITY }
    }

    /// Degenerate point box. Membership tests collapse to point tests.
    pub fn point(center: Vec3) -> Self {
        Self { center, half_extents: Vec3::ZERO, orientation: Quat::IDENTITY }
    }

    pub fn contains_point(&self, point: Vec3) -> bool {
        let local = self.orientation.inverse() * (point - self.center);
        local.x.abs() <= self.half_extents.x
            && local.y.abs() <= self.half_extents.y
            && local.z.abs() <= self.half_extents.z
    }

    /// Closest point on or inside the box to `point`, in world space.
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let local = self.orientation.inverse() * (point - self.center);
        let clamped = local.clamp(-self.half_extents, self.half_extents);
        self.center + self.orientation * clamped
    }
}

/// The spatial region a generator's force applies in. One variant per device
/// kind, fixed for the device's lifetime.
#[derive(Debug, Clone, Copy)]
pub enum FieldVolume {
    Sphere { center: Vec3, radius_sq: f32 },
    Box(Obb),
}

impl FieldVolume {
    /// Does a body with this world-space bounding box touch the field?
    pub fn intersects(&self, body: &Obb) -> bool {
        match self {
            FieldVolume::Sphere { center, radius_sq } => {
                sphere_vs_obb(*center, *radius_sq, body)
            }
            FieldVolume::Box(field) => obb_vs_obb(field, body),
        }
    }
}

pub fn sphere_vs_obb(center: Vec3, radius_sq: f32, obb: &Obb) -> bool {
    let closest = obb.closest_point(center);
    (closest - center).length_squared() <= radius_sq
}

/// Separating-axis test between two oriented boxes: the 3 face axes of each
/// box plus the 9 edge-edge cross products.
pub fn obb_vs_obb(a: &Obb, b: &Obb) -> bool {
    let a_axes = Mat3::from_quat(a.orientation);
    let b_axes = Mat3::from_quat(b.orientation);

    // Rotation of b expressed in a's frame, plus its absolute value with an
    // epsilon so near-parallel edge pairs don't produce null cross axes.
    let mut r = [[0.0f32; 3]; 3];
    let mut abs_r = [[0.0f32; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            r[i][j] = a_axes.col(i).dot(b_axes.col(j));
            abs_r[i][j] = r[i][j].abs() + 1e-6;
        }
    }

    // b's center relative to a, in a's frame.
    let d = b.center - a.center;
    let t = [
        d.dot(a_axes.col(0)),
        d.dot(a_axes.col(1)),
        d.dot(a_axes.col(2)),
    ];

    let ae = [a.half_extents.x, a.half_extents.y, a.half_extents.z];
    let be = [b.half_extents.x, b.half_extents.y, b.half_extents.z];

    // a's face axes
    for i in 0..3 {
        let rb = be[0] * abs_r[i][0] + be[1] * abs_r[i][1] + be[2] * abs_r[i][2];
        if t[i].abs() > ae[i] + rb {
            return false;
        }
    }

    // b's face axes
    for j in 0..3 {
        let ra = ae[0] * abs_r[0][j] + ae[1] * abs_r[1][j] + ae[2] * abs_r[2][j];
        let tb = t[0] * r[0][j] + t[1] * r[1][j] + t[2] * r[2][j];
        if tb.abs() > ra + be[j] {
            return false;
        }
    }

    // edge-edge cross products a_i x b_j
    for i in 0..3 {
        let (i1, i2) = ((i + 1) % 3, (i + 2) % 3);
        for j in 0..3 {
            let (j1, j2) = ((j + 1) % 3, (j + 2) % 3);
            let ra = ae[i1] * abs_r[i2][j] + ae[i2] * abs_r[i1][j];
            let rb = be[j1] * abs_r[i][j2] + be[j2] * abs_r[i][j1];
            let tq = t[i2] * r[i1][j] - t[i1] * r[i2][j];
            if tq.abs() > ra + rb {
                return false;
            }
        }
    }

    true
}
