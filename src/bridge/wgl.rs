use crate::bridge::{FunctionAddress, FunctionProvider, SharedLibrary};
use crate::utils::cstr_from_ptr;
use std::ffi::{c_char, c_void, CString};

type WglGetProcAddress = unsafe extern "system" fn(*const c_char) -> *const c_void;
type WglGetCurrentDC = unsafe extern "system" fn() -> *mut c_void;
type WglGetExtensionsStringARB = unsafe extern "system" fn(*mut c_void) -> *const c_char;
type WglGetExtensionsStringEXT = unsafe extern "system" fn() -> *const c_char;

static OPENGL32: SharedLibrary = SharedLibrary::new(&["opengl32.dll"]);

// Some ICDs hand back small integers or -1 instead of NULL for
// functions they don't know.
fn valid_address(address: FunctionAddress) -> FunctionAddress {
    return match address {
        1 | 2 | 3 | usize::MAX => 0,
        a => a,
    };
}

pub struct WglProvider;

impl WglProvider {
    pub fn new() -> WglProvider {
        return WglProvider;
    }

    fn library_fn(&self, name: &str) -> FunctionAddress {
        return match CString::new(name) {
            Ok(c) => OPENGL32.symbol(&c),
            Err(_) => 0,
        };
    }
}

impl FunctionProvider for WglProvider {
    fn name(&self) -> &'static str {
        return "WGL";
    }

    fn context_address(&self, name: &CString) -> FunctionAddress {
        let get_proc = self.library_fn("wglGetProcAddress");
        if get_proc == 0 {
            return 0;
        }
        return unsafe {
            let get_proc: WglGetProcAddress = std::mem::transmute(get_proc);
            valid_address(get_proc(name.as_ptr()) as FunctionAddress)
        };
    }

    fn library_address(&self, name: &CString) -> FunctionAddress {
        return OPENGL32.symbol(name);
    }

    fn windowing_extensions(&self) -> Option<String> {
        let arb = self.get_function_address("wglGetExtensionsStringARB");
        let ptr = if arb != 0 {
            let current_dc = self.library_fn("wglGetCurrentDC");
            if current_dc == 0 {
                return None;
            }
            unsafe {
                let current_dc: WglGetCurrentDC = std::mem::transmute(current_dc);
                let arb: WglGetExtensionsStringARB = std::mem::transmute(arb);
                arb(current_dc())
            }
        } else {
            let ext = self.get_function_address("wglGetExtensionsStringEXT");
            if ext == 0 {
                return None;
            }
            unsafe {
                let ext: WglGetExtensionsStringEXT = std::mem::transmute(ext);
                ext()
            }
        };
        return unsafe { cstr_from_ptr(ptr) }.map(|s| s.to_string_lossy().into_owned());
    }
}
