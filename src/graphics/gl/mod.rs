// OpenGL capability detection.
//
// OpenGL keeps its current context in thread-locals, so the
// capabilities of "the current context" are per-thread too.

mod capabilities;
mod extensions;
mod functions;
mod profile;
mod queries;
mod version;

pub use capabilities::CapabilitySet;
pub use extensions::{version_extension, GL_VERSIONS};
pub use functions::{ExtensionDecl, FunctionDecl, FunctionTable};
pub use profile::ARB_COMPATIBILITY;
pub use queries::error_name;
pub use version::parse_version_string;

use crate::bridge::{self, Error, FunctionProvider, Result};
use std::cell::RefCell;
use std::ffi::c_void;
use std::sync::Arc;

thread_local! {
    static CURRENT: RefCell<Option<Arc<CapabilitySet>>> = RefCell::new(None);
}

pub fn function_provider() -> Result<&'static dyn FunctionProvider> {
    return bridge::provider();
}

/// Probes the context current on this thread and makes the result this
/// thread's current capabilities.
///
/// `forward_compatible` asks for deprecated functions to be left out even
/// if the context still exposes them; it is forced on for contexts that
/// are forward compatible or core profile. Only extensions named in
/// `registry` get function tables.
pub fn create_capabilities(forward_compatible: bool, registry: &[ExtensionDecl]) -> Result<Arc<CapabilitySet>> {
    return create_capabilities_with(bridge::provider()?, forward_compatible, registry);
}

pub fn create_capabilities_with(provider: &dyn FunctionProvider, forward_compatible: bool,
                                registry: &[ExtensionDecl]) -> Result<Arc<CapabilitySet>> {
    let caps = Arc::new(capabilities::assemble(provider, forward_compatible, registry)?);
    set_current(caps.clone());
    return Ok(caps);
}

// Call after switching this thread to a context whose capabilities were
// created earlier.
pub fn set_current(caps: Arc<CapabilitySet>) {
    CURRENT.with(|c| *c.borrow_mut() = Some(caps));
}

pub fn clear_current() {
    CURRENT.with(|c| *c.borrow_mut() = None);
}

pub fn get_capabilities() -> Result<Arc<CapabilitySet>> {
    return CURRENT.with(|c| c.borrow().clone()).ok_or(Error::NoCurrentCapabilities);
}

// Points the `gl` crate's global function pointers at this provider, for
// code that calls gl::* directly. Functions the context lacks stay
// unloaded; check `gl::Foo::is_loaded()` or the capabilities.
pub fn load_gl_bindings(provider: &dyn FunctionProvider) {
    gl::load_with(|name| provider.find_function_address(name) as *const c_void);
}
