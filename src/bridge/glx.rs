use crate::bridge::{FunctionAddress, FunctionProvider, SharedLibrary};
use crate::utils::cstr_from_ptr;
use libc::{c_char, c_int, c_uchar, c_void};
use std::ffi::CString;

type GlxGetProcAddress = unsafe extern "C" fn(*const c_uchar) -> *const c_void;
type GlxGetCurrentDisplay = unsafe extern "C" fn() -> *mut c_void;
type GlxGetCurrentContext = unsafe extern "C" fn() -> *mut c_void;
type GlxQueryContext = unsafe extern "C" fn(*mut c_void, *mut c_void, c_int, *mut c_int) -> c_int;
type GlxQueryExtensionsString = unsafe extern "C" fn(*mut c_void, c_int) -> *const c_char;
type GlxGetClientString = unsafe extern "C" fn(*mut c_void, c_int) -> *const c_char;

const GLX_EXTENSIONS: c_int = 3;
const GLX_SCREEN: c_int = 0x800C;
const SUCCESS: c_int = 0;

static LIBGL: SharedLibrary = SharedLibrary::new(&["libGL.so.1", "libGL.so"]);

pub struct GlxProvider;

impl GlxProvider {
    pub fn new() -> GlxProvider {
        return GlxProvider;
    }

    fn glx_fn(&self, name: &str) -> FunctionAddress {
        return match CString::new(name) {
            Ok(c) => LIBGL.symbol(&c),
            Err(_) => 0,
        };
    }

    // Screen of the current context, so the extension string matches
    // what that context can actually use.
    unsafe fn current_screen(&self, display: *mut c_void) -> Option<c_int> {
        let get_context = self.glx_fn("glXGetCurrentContext");
        let query_context = self.glx_fn("glXQueryContext");
        if get_context == 0 || query_context == 0 {
            return None;
        }
        let get_context: GlxGetCurrentContext = std::mem::transmute(get_context);
        let query_context: GlxQueryContext = std::mem::transmute(query_context);
        let context = get_context();
        if context.is_null() {
            return None;
        }
        let mut screen: c_int = 0;
        if query_context(display, context, GLX_SCREEN, &mut screen) != SUCCESS {
            return None;
        }
        return Some(screen);
    }
}

impl FunctionProvider for GlxProvider {
    fn name(&self) -> &'static str {
        return "GLX";
    }

    // Mesa and libglvnd hand out a non-null dispatch stub for any gl*
    // name, known or not. On GLX a name only resolves to 0 here when
    // libGL itself is missing, so check supports() before trusting a
    // function_table() entry.
    fn context_address(&self, name: &CString) -> FunctionAddress {
        let get_proc = self.glx_fn("glXGetProcAddressARB");
        if get_proc == 0 {
            return 0;
        }
        return unsafe {
            let get_proc: GlxGetProcAddress = std::mem::transmute(get_proc);
            get_proc(name.as_ptr() as *const c_uchar) as FunctionAddress
        };
    }

    fn library_address(&self, name: &CString) -> FunctionAddress {
        return LIBGL.symbol(name);
    }

    fn windowing_extensions(&self) -> Option<String> {
        let get_display = self.glx_fn("glXGetCurrentDisplay");
        if get_display == 0 {
            return None;
        }
        let ptr = unsafe {
            let get_display: GlxGetCurrentDisplay = std::mem::transmute(get_display);
            let display = get_display();
            if display.is_null() {
                return None;
            }
            let query = self.glx_fn("glXQueryExtensionsString");
            match self.current_screen(display) {
                Some(screen) if query != 0 => {
                    let query: GlxQueryExtensionsString = std::mem::transmute(query);
                    query(display, screen)
                }
                _ => {
                    let client = self.glx_fn("glXGetClientString");
                    if client == 0 {
                        return None;
                    }
                    let client: GlxGetClientString = std::mem::transmute(client);
                    client(display, GLX_EXTENSIONS)
                }
            }
        };
        return unsafe { cstr_from_ptr(ptr) }.map(|s| s.to_string_lossy().into_owned());
    }
}
