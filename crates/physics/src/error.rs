use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhysicsError {
    #[error("failed to read scene file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed scene XML")]
    Xml(#[from] roxmltree::Error),
    #[error("expected <mujoco> root element, found <{0}>")]
    UnexpectedRoot(String),
    #[error("invalid value `{value}` for attribute `{attribute}` on <{element}>")]
    InvalidAttribute {
        element: String,
        attribute: &'static str,
        value: String,
    },
    #[error("unsupported geom type `{0}`")]
    UnsupportedGeom(String),
    #[error("timestep must be positive and finite, got {0}")]
    InvalidTimestep(f64),
    #[error("body `{body}` diverged at t={time:.4}s")]
    Diverged { body: String, time: f64 },
}
