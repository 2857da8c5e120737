use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("dealer {id} has invalid coordinates ({latitude}, {longitude})")]
    InvalidCoordinates {
        id: String,
        latitude: f64,
        longitude: f64,
    },

    #[error("invalid bounding box: {reason}")]
    InvalidBoundingBox { reason: String },

    #[error("invalid origin ({lng}, {lat})")]
    InvalidOrigin { lng: f64, lat: f64 },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
