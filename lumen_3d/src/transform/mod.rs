//! Transform module — model matrices for static and orbiting bodies.

mod transform;
mod orbit;

pub use transform::Transform;
pub use orbit::Orbit;
