//! Modelos neutrales (Artifact, Channel, Resolution).

pub mod artifact;
pub mod channel;
pub mod resolution;

pub use artifact::{Artifact, ArtifactId};
pub use channel::Channel;
pub use resolution::{ArtifactMap, Resolution, Shortfall};
