//! Error types for body construction and configuration.

/// Errors raised while constructing bodies or handing out identifiers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BodyError {
    /// Radius must be finite and strictly positive.
    #[error("invalid radius {0}: must be finite and greater than zero")]
    InvalidRadius(f32),

    /// Density must be finite and strictly positive.
    #[error("invalid density {0}: must be finite and greater than zero")]
    InvalidDensity(f32),

    /// Radius and density combine into a mass that is zero, subnormal or
    /// infinite in `f32`.
    #[error("derived mass {0} is not a positive, finite f32")]
    InvalidMass(f32),

    /// Identifier above `BodyId::MAX`.
    #[error("body id {0} is out of range (max 2147483647)")]
    IdOutOfRange(u32),

    /// Every identifier up to `BodyId::MAX` has been allocated.
    #[error("body id space exhausted")]
    IdsExhausted,
}

/// Failures around `planet-sim.ron`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read planet-sim config: {0}")]
    ReadError(#[source] std::io::Error),

    /// Covers creating the config directory as well as writing the file.
    #[error("could not write planet-sim config: {0}")]
    WriteError(#[source] std::io::Error),

    #[error("planet-sim config is not valid RON: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    #[error("could not encode planet-sim config as RON: {0}")]
    SerializeError(#[source] ron::Error),
}
