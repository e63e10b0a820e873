//! Planets as spherical point masses, stepped with semi-implicit Euler.
//!
//! A [`Body`] derives its mass from its radius and [`Material`] density,
//! accumulates forces between ticks, and consumes them in [`Body::update`].
//! Drawing goes through the [`SphereRenderer`] trait so any backend can
//! plug in.

pub mod body;
pub mod cli;
pub mod config;
pub mod error;
pub mod id;
pub mod log;
pub mod material;
pub mod render;
pub mod scatter;
pub mod trail;

pub use body::Body;
pub use cli::CliArgs;
pub use config::{BodyConfig, Config, DebugConfig, DemoConfig, ScatterConfig, TrailConfig};
pub use error::{BodyError, ConfigError};
pub use id::{BodyId, IdAllocator};
pub use material::{mass_for, Material, DEFAULT_DENSITY};
pub use render::{Color, DrawCommand, DrawList, SphereRenderer};
pub use trail::{Trail, TrailNode};
