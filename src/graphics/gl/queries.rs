use crate::bridge::{Error, FunctionProvider, Result};
use crate::utils::cstr_from_ptr;
use gl::types::{GLenum, GLint, GLubyte, GLuint};
use log::*;

type GetErrorFn = unsafe extern "system" fn() -> GLenum;
type GetStringFn = unsafe extern "system" fn(GLenum) -> *const GLubyte;
type GetIntegervFn = unsafe extern "system" fn(GLenum, *mut GLint);
type GetStringiFn = unsafe extern "system" fn(GLenum, GLuint) -> *const GLubyte;

// How many stale error flags we are willing to clear before giving up.
// Drivers keep one flag per error kind, so a real context never gets
// close; a broken one could report an error forever.
const MAX_PENDING_ERRORS: usize = 16;

// The handful of queries needed before any capabilities exist,
// called through raw addresses from the provider.
//
// Only valid while the context they were resolved against is current.
pub struct CoreQueries {
    get_error: GetErrorFn,
    get_string: GetStringFn,
    get_integerv: GetIntegervFn,
}

impl CoreQueries {
    pub fn load(provider: &dyn FunctionProvider) -> Result<CoreQueries> {
        let get_error = provider.get_function_address("glGetError");
        let get_string = provider.get_function_address("glGetString");
        let get_integerv = provider.get_function_address("glGetIntegerv");
        if get_error == 0 || get_string == 0 || get_integerv == 0 {
            return Err(Error::MissingCoreFunctions);
        }
        return Ok(unsafe {
            CoreQueries {
                get_error: std::mem::transmute::<usize, GetErrorFn>(get_error),
                get_string: std::mem::transmute::<usize, GetStringFn>(get_string),
                get_integerv: std::mem::transmute::<usize, GetIntegervFn>(get_integerv),
            }
        });
    }

    pub fn get_error(&self) -> GLenum {
        return unsafe { (self.get_error)() };
    }

    // Clears and logs whatever errors earlier GL calls left behind.
    pub fn drain_errors(&self) {
        for _ in 0..MAX_PENDING_ERRORS {
            let code = self.get_error();
            if code == gl::NO_ERROR {
                return;
            }
            warn!("A GL context was in an error state before the creation of its capabilities instance. Error: {}",
                  error_name(code));
        }
        warn!("GL error state did not clear after {} reads", MAX_PENDING_ERRORS);
    }

    // Leaves `0` when the driver rejects `pname`; check get_error().
    pub fn get_integer(&self, pname: GLenum) -> GLint {
        let mut value: GLint = 0;
        unsafe { (self.get_integerv)(pname, &mut value) };
        return value;
    }

    pub fn get_string(&self, name: GLenum, label: &'static str) -> Result<String> {
        let ptr = unsafe { (self.get_string)(name) };
        let s = match unsafe { cstr_from_ptr(ptr) } {
            Some(s) => s,
            None => return Err(Error::NullString(label)),
        };
        return Ok(s.to_str()?.to_owned());
    }
}

// glGetStringi, only present on 3.0+ drivers.
pub struct IndexedQuery {
    get_stringi: GetStringiFn,
}

impl IndexedQuery {
    pub fn load(provider: &dyn FunctionProvider) -> Result<IndexedQuery> {
        let address = provider.get_function_address("glGetStringi");
        if address == 0 {
            return Err(Error::MissingIndexedQueryFunction);
        }
        return Ok(IndexedQuery {
            get_stringi: unsafe { std::mem::transmute::<usize, GetStringiFn>(address) },
        });
    }

    pub fn get_string(&self, name: GLenum, index: GLuint, label: &'static str) -> Result<String> {
        let ptr = unsafe { (self.get_stringi)(name, index) };
        let s = match unsafe { cstr_from_ptr(ptr) } {
            Some(s) => s,
            None => return Err(Error::NullString(label)),
        };
        return Ok(s.to_str()?.to_owned());
    }
}

pub fn error_name(code: GLenum) -> String {
    let name = match code {
        gl::NO_ERROR => "GL_NO_ERROR",
        gl::INVALID_ENUM => "GL_INVALID_ENUM",
        gl::INVALID_VALUE => "GL_INVALID_VALUE",
        gl::INVALID_OPERATION => "GL_INVALID_OPERATION",
        gl::STACK_OVERFLOW => "GL_STACK_OVERFLOW",
        gl::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW",
        gl::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        gl::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        gl::CONTEXT_LOST => "GL_CONTEXT_LOST",
        _ => return format!("Unknown (0x{:X})", code),
    };
    return name.to_owned();
}
