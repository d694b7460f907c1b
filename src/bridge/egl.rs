use crate::bridge::{FunctionAddress, FunctionProvider, SharedLibrary};
use khronos_egl as egl;
use log::*;
use once_cell::sync::OnceCell;
use std::ffi::CString;

type EglInstance = egl::DynamicInstance<egl::EGL1_0>;

#[cfg(target_os = "android")]
static LIBGL: SharedLibrary = SharedLibrary::new(&["libGLESv2.so", "libGLESv2.so.2"]);
#[cfg(not(target_os = "android"))]
static LIBGL: SharedLibrary = SharedLibrary::new(&["libOpenGL.so.0", "libGL.so.1", "libGL.so"]);

pub struct EglProvider {
    api: OnceCell<Option<EglInstance>>,
}

// The instance is only a library handle plus a table of function
// pointers, none of which are ever written after loading.
unsafe impl Send for EglProvider {}
unsafe impl Sync for EglProvider {}

impl EglProvider {
    pub fn new() -> EglProvider {
        return EglProvider { api: OnceCell::new() };
    }

    fn api(&self) -> Option<&EglInstance> {
        return self.api.get_or_init(|| {
            match unsafe { EglInstance::load_required() } {
                Ok(api) => Some(api),
                Err(e) => {
                    warn!("Unable to load the EGL library: {:?}", e);
                    None
                }
            }
        }).as_ref();
    }
}

impl FunctionProvider for EglProvider {
    fn name(&self) -> &'static str {
        return "EGL";
    }

    fn context_address(&self, name: &CString) -> FunctionAddress {
        let api = match self.api() {
            Some(a) => a,
            None => return 0,
        };
        let name = match name.to_str() {
            Ok(n) => n,
            Err(_) => return 0,
        };
        return match api.get_proc_address(name) {
            Some(f) => f as FunctionAddress,
            None => 0,
        };
    }

    fn library_address(&self, name: &CString) -> FunctionAddress {
        return LIBGL.symbol(name);
    }

    fn windowing_extensions(&self) -> Option<String> {
        let api = self.api()?;
        let display = api.get_current_display()?;
        return match api.query_string(Some(display), egl::EXTENSIONS) {
            Ok(s) => Some(s.to_string_lossy().into_owned()),
            Err(e) => {
                debug!("eglQueryString(EGL_EXTENSIONS) failed: {:?}", e);
                None
            }
        };
    }
}
