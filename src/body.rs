use ultraviolet::Vec3;

use crate::error::BodyError;
use crate::id::BodyId;
use crate::material::Material;
use crate::render::{Color, SphereRenderer};
use crate::trail::Trail;

/// A spherical point mass.
///
/// Callers sum forces into the body with [`Body::add_force`] (or by writing
/// `force` directly) and then call [`Body::update`] once per tick, which
/// consumes the accumulated force.
#[derive(Clone, Debug)]
pub struct Body {
    pub id: BodyId,
    pub pos: Vec3,
    pub vel: Vec3,
    /// Sum of forces applied since the last update. Zero after every update.
    pub force: Vec3,
    pub radius: f32,
    pub stationary: bool,
    mass: f32,
    elapsed: f32,
    trail: Option<Trail>,
}

impl Body {
    /// Builds a body of the default planet material.
    pub fn new(id: BodyId, pos: Vec3, vel: Vec3, radius: f32) -> Result<Self, BodyError> {
        Self::with_material(id, pos, vel, radius, Material::PLANET)
    }

    pub fn with_material(
        id: BodyId,
        pos: Vec3,
        vel: Vec3,
        radius: f32,
        material: Material,
    ) -> Result<Self, BodyError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(BodyError::InvalidRadius(radius));
        }
        let mass = material.mass_for(radius);
        if !mass.is_normal() || mass < 0.0 {
            return Err(BodyError::InvalidMass(mass));
        }
        tracing::debug!(%id, radius, mass, "body created");

        Ok(Self {
            id,
            pos,
            vel,
            force: Vec3::zero(),
            radius,
            stationary: false,
            mass,
            elapsed: 0.0,
            trail: None,
        })
    }

    /// Pins the body in place; forces are still consumed but never move it.
    pub fn pinned(mut self) -> Self {
        self.stationary = true;
        self.vel = Vec3::zero();
        self
    }

    pub fn with_trail(mut self, mut trail: Trail) -> Self {
        trail.record(self.pos, self.elapsed);
        self.trail = Some(trail);
        self
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Simulated time this body has been stepped for.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn trail(&self) -> Option<&Trail> {
        self.trail.as_ref()
    }

    pub fn add_force(&mut self, force: Vec3) {
        self.force += force;
    }

    /// Advances the body by `dt` using semi-implicit Euler.
    pub fn update(&mut self, dt: f32) {
        if !dt.is_finite() {
            tracing::warn!(id = %self.id, dt, "non-finite time step, skipping integration");
            self.force = Vec3::zero();
            return;
        }

        if !self.stationary {
            // F = ma, so the velocity change over dt is F * dt / m.
            let dv = self.force * dt / self.mass;
            self.vel += dv;
        }
        self.force = Vec3::zero();

        if !self.stationary {
            self.pos += self.vel * dt;
        }

        self.elapsed += dt;
        if let Some(trail) = self.trail.as_mut() {
            trail.prune(self.elapsed);
            trail.record(self.pos, self.elapsed);
        }

        tracing::trace!(id = %self.id, pos = ?self.pos, vel = ?self.vel, "body stepped");
    }

    pub fn speed(&self) -> f32 {
        self.vel.mag()
    }

    pub fn momentum(&self) -> Vec3 {
        self.vel * self.mass
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.vel.mag_sq()
    }

    /// Draws the trail (if any) and then the body itself.
    pub fn draw<R: SphereRenderer + ?Sized>(&self, renderer: &mut R, color: Color) {
        if let Some(trail) = &self.trail {
            trail.draw(&mut *renderer, color, self.elapsed);
        }
        renderer.draw_sphere(self.pos, self.radius, color);
    }
}
