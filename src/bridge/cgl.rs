use crate::bridge::{FunctionAddress, FunctionProvider, SharedLibrary};
use std::ffi::CString;

static OPENGL_FRAMEWORK: SharedLibrary = SharedLibrary::new(&[
    "/System/Library/Frameworks/OpenGL.framework/Versions/Current/OpenGL",
    "/System/Library/Frameworks/OpenGL.framework/OpenGL",
]);

// CGL has no GetProcAddress; every entry point, extension or not, is
// exported from the framework itself.
pub struct CglProvider;

impl CglProvider {
    pub fn new() -> CglProvider {
        return CglProvider;
    }
}

impl FunctionProvider for CglProvider {
    fn name(&self) -> &'static str {
        return "CGL";
    }

    fn context_address(&self, _name: &CString) -> FunctionAddress {
        return 0;
    }

    fn library_address(&self, name: &CString) -> FunctionAddress {
        return OPENGL_FRAMEWORK.symbol(name);
    }
}
