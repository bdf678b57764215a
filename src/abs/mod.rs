//! Thin wrappers over SDL2 and OpenGL: window/context setup, shader
//! compilation and linking, mesh uploads, and GL error draining.

pub mod app;
pub mod debug;
pub mod mesh;
pub mod shader;

pub use app::*;
pub use debug::*;
pub use mesh::*;
pub use shader::*;
