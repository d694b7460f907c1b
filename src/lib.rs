// Runtime capability detection for OpenGL contexts.
//
// Nothing here creates contexts. Make one current on the calling
// thread with whatever windowing layer you use, then call
// graphics::gl::create_capabilities() to probe it.

pub mod bridge;
pub mod config;
pub mod graphics;
pub mod log;
mod utils;

#[cfg(test)]
mod testing;

pub use bridge::{Error, FunctionAddress, FunctionProvider, Result};
pub use graphics::gl::{
    CapabilitySet, ExtensionDecl, FunctionDecl, FunctionTable,
    create_capabilities, create_capabilities_with, get_capabilities,
    set_current, clear_current, function_provider, load_gl_bindings,
};
