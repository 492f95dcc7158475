//! # Scene Model
//!
//! The immutable description of a scene produced from an MJCF document.
//! A [`Model`] is built once per run and only read afterwards; all mutable
//! quantities live in [`crate::State`].

use crate::error::PhysicsError;
use crate::mjcf;
use crate::types::{Geom, Shape, SimOptions, Vec3};
use std::path::Path;

/// A free-floating rigid body and the geoms welded to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub name: String,
    /// World position of the body frame at `t = 0`.
    pub initial_pos: Vec3,
    /// Geoms with offsets relative to the body frame.
    pub geoms: Vec<Geom>,
}

/// Immutable scene description.
#[derive(Clone, Debug, PartialEq)]
pub struct Model {
    pub name: String,
    pub options: SimOptions,
    /// Dynamic bodies, indexed in the same order as the vectors of [`crate::State`].
    pub bodies: Vec<Body>,
    /// Geoms fixed to the world, offsets in world coordinates.
    pub static_geoms: Vec<Geom>,
}

impl Model {
    /// Load a model from an MJCF file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`PhysicsError::Io`] if the file cannot be read and any of the
    /// parse errors of [`Model::from_xml_str`] otherwise.
    pub fn from_xml_path(path: impl AsRef<Path>) -> Result<Self, PhysicsError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| PhysicsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_xml_str(&source)?;
        tracing::info!(
            "Loaded model '{}' from {}: {} dynamic bodies, {} static geoms, dt = {}",
            model.name,
            path.display(),
            model.bodies.len(),
            model.static_geoms.len(),
            model.options.timestep
        );
        Ok(model)
    }

    /// Parse a model from MJCF source text.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed XML, a root element other than
    /// `<mujoco>`, unparsable attribute values or unsupported geom types.
    pub fn from_xml_str(source: &str) -> Result<Self, PhysicsError> {
        mjcf::parse_document(source)
    }

    /// Static planes as `(point on plane, unit normal, geom)`.
    pub fn planes(&self) -> impl Iterator<Item = (Vec3, Vec3, &Geom)> {
        self.static_geoms.iter().filter_map(|geom| match geom.shape {
            Shape::Plane { normal, .. } => Some((geom.offset, normal, geom)),
            _ => None,
        })
    }
}
