//! # Scene Viewer
//!
//! A passive window onto a running [`physics`] simulation. The caller owns
//! the step loop; the viewer only looks at the model and state when asked
//! to [`PassiveViewer::sync`].

pub mod camera;
pub mod mesh;
pub mod viewer;

pub use viewer::PassiveViewer;
