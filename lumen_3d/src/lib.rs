/*!
# Lumen 3D

Core types for a small OpenGL-style rendering demo: a first-person camera,
model/orbit transforms, shader and texture sources, the textured-cube scene,
and a backend-agnostic `Renderer` trait.

All math lives here and runs without a graphics context. GPU work is done by
a backend crate (`lumen_3d_renderer_gl`) implementing `Renderer`.

## Architecture

- **Camera**: first-person camera (yaw/pitch basis, view/projection) and an orbit camera
- **Transform**: model matrices and orbiting bodies
- **Resource**: shader sources and decoded texture images
- **Renderer**: backend trait, resource keys, and a recording mock
- **Scene**: the textured-cube scene and its per-frame draw sequence
- **Input**: cursor/scroll/key routing into camera operations
- **Time**: per-frame delta time
*/

mod error;
pub mod log;
pub mod camera;
pub mod transform;
pub mod resource;
pub mod renderer;
pub mod scene;
pub mod input;
pub mod time;

// Main lumen3d namespace module
pub mod lumen3d {
    // Error types
    pub use crate::error::{Error, Result};

    // Renderer trait
    pub use crate::renderer::Renderer;

    // Logging sub-module (types and logger slot, macros live at the crate root)
    pub mod log {
        pub use crate::log::{
            Logger, LogEntry, LogSeverity, DefaultLogger,
            set_logger, reset_logger, log, log_detailed,
        };
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod transform {
        pub use crate::transform::*;
    }

    pub mod render {
        pub use crate::renderer::*;
    }

    pub mod resource {
        pub use crate::resource::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }

    pub mod input {
        pub use crate::input::*;
    }

    pub mod time {
        pub use crate::time::*;
    }
}

// Re-export math library at crate root
pub use glam;
