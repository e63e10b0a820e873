use std::f32::consts::{PI, TAU};

use ultraviolet::Vec3;

use crate::body::Body;
use crate::config::ScatterConfig;
use crate::error::BodyError;
use crate::id::IdAllocator;
use crate::material::Material;

/// Scatters `n` bodies through a spherical shell around the origin.
///
/// Each body moves tangentially around the z axis at `orbital_speed`.
/// The result is sorted by distance from the origin, innermost first.
pub fn scatter(
    n: usize,
    config: &ScatterConfig,
    ids: &mut IdAllocator,
    material: &Material,
) -> Result<Vec<Body>, BodyError> {
    let mut rng = fastrand::Rng::with_seed(config.seed);
    let inner_radius = config.inner_radius.max(0.0);
    let outer_radius = config.outer_radius.max(inner_radius);

    let mut bodies: Vec<Body> = Vec::with_capacity(n);

    while bodies.len() < n {
        let a = rng.f32() * TAU;
        let b = rng.f32() * PI;
        let (sin, cos) = a.sin_cos();
        let (sin_phi, cos_phi) = b.sin_cos();
        let dir = Vec3::new(cos * sin_phi, sin * sin_phi, cos_phi);

        let t = if outer_radius > 0.0 {
            inner_radius / outer_radius
        } else {
            0.0
        };
        let r = rng.f32() * (1.0 - t * t) + t * t;
        let pos = dir * outer_radius * r.sqrt();

        let tangent = Vec3::new(-sin, cos, 0.0);
        let vel = tangent * config.orbital_speed;

        let radius = config.min_radius + rng.f32() * (config.max_radius - config.min_radius);

        bodies.push(Body::with_material(ids.allocate()?, pos, vel, radius, *material)?);
    }

    bodies.sort_by(|a, b| a.pos.mag_sq().total_cmp(&b.pos.mag_sq()));
    tracing::debug!(count = bodies.len(), seed = config.seed, "scattered bodies");

    Ok(bodies)
}

/// A flat `columns × rows` block of equal bodies in the xy plane.
#[derive(Clone, Debug, PartialEq)]
pub struct GridLayout {
    /// Center of the first body.
    pub origin: Vec3,
    pub columns: u32,
    pub rows: u32,
    pub radius: f32,
    /// Gap kept on each side of every body.
    pub spacing: f32,
    pub stationary: bool,
}

/// Lays bodies out column by column, starting at `layout.origin`.
///
/// Neighbouring centers are `2 * (radius + spacing)` apart, all bodies
/// start at rest.
pub fn grid(
    layout: &GridLayout,
    ids: &mut IdAllocator,
    material: &Material,
) -> Result<Vec<Body>, BodyError> {
    let step = 2.0 * (layout.radius + layout.spacing);
    let mut bodies = Vec::with_capacity((layout.columns as usize) * (layout.rows as usize));

    for i in 0..layout.columns {
        for j in 0..layout.rows {
            let pos = layout.origin + Vec3::new(i as f32 * step, j as f32 * step, 0.0);
            let body =
                Body::with_material(ids.allocate()?, pos, Vec3::zero(), layout.radius, *material)?;
            bodies.push(if layout.stationary { body.pinned() } else { body });
        }
    }

    tracing::debug!(
        columns = layout.columns,
        rows = layout.rows,
        stationary = layout.stationary,
        "laid out grid"
    );
    Ok(bodies)
}
