// Platform glue: everything that turns a function name into an address.

mod library;

#[cfg(windows)]
mod wgl;
#[cfg(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))]
mod glx;
#[cfg(all(unix, not(any(target_os = "macos", target_os = "ios"))))]
mod egl;
#[cfg(target_os = "macos")]
mod cgl;

pub use library::SharedLibrary;

use log::*;
use once_cell::sync::Lazy;
use std::ffi::CString;
use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    // glGetError, glGetString or glGetIntegerv are missing, which
    // almost always means no context is current on this thread.
    MissingCoreFunctions,
    MalformedVersionString(String),
    MissingIndexedQueryFunction,
    UnsupportedPlatform,
    // The driver returned NULL for a string query.
    NullString(&'static str),
    UTF8DecodeError,
    NoCurrentCapabilities,
}

impl From<std::str::Utf8Error> for Error {
    fn from(_e: std::str::Utf8Error) -> Self {
        return Error::UTF8DecodeError;
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Error::MissingCoreFunctions => write!(f,
                "Core OpenGL functions could not be found. Make sure that a GL context is current in the current thread."),
            Error::MalformedVersionString(v) => write!(f, "The OpenGL version string is malformed: {}", v),
            Error::MissingIndexedQueryFunction => write!(f,
                "glGetStringi could not be found on an OpenGL 3.0+ context"),
            Error::UnsupportedPlatform => write!(f, "OpenGL function loading is not implemented for this platform"),
            Error::NullString(query) => write!(f, "glGetString returned NULL for {}", query),
            Error::UTF8DecodeError => write!(f, "the driver returned a string that is not valid UTF-8"),
            Error::NoCurrentCapabilities => write!(f,
                "no OpenGL capabilities have been created or made current on this thread"),
        };
    }
}

impl std::error::Error for Error {}

// Zero means "not found".
pub type FunctionAddress = usize;

/// Resolves GL entry points for one platform.
///
/// Implementations supply the two raw lookups; the lookup order and the
/// logging live in the provided methods so every platform behaves the same.
pub trait FunctionProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Context-specific lookup (`wglGetProcAddress`, `glXGetProcAddressARB`,
    /// `eglGetProcAddress`). Only meaningful while a context is current.
    fn context_address(&self, name: &CString) -> FunctionAddress;

    /// Lookup in the platform's default GL library.
    fn library_address(&self, name: &CString) -> FunctionAddress;

    /// The windowing system's own extension string, if it has a query for
    /// one and the query resolves.
    fn windowing_extensions(&self) -> Option<String> {
        return None;
    }

    fn find_function_address(&self, name: &str) -> FunctionAddress {
        let cname = match CString::new(name) {
            Ok(c) => c,
            Err(_) => {
                warn!("GL function name {:?} contains a NUL byte", name);
                return 0;
            }
        };
        let address = self.context_address(&cname);
        if address != 0 {
            return address;
        }
        return self.library_address(&cname);
    }

    fn get_function_address(&self, name: &str) -> FunctionAddress {
        let address = self.find_function_address(name);
        if address == 0 {
            warn!("Failed to locate address for GL function {}", name);
        }
        return address;
    }
}

static PROVIDER: Lazy<Option<Box<dyn FunctionProvider>>> = Lazy::new(select_provider);

#[cfg(windows)]
fn select_provider() -> Option<Box<dyn FunctionProvider>> {
    return Some(Box::new(wgl::WglProvider::new()));
}

#[cfg(all(unix, not(any(target_os = "macos", target_os = "ios", target_os = "android"))))]
fn select_provider() -> Option<Box<dyn FunctionProvider>> {
    use crate::config::{self, Api};
    return match config::get().api {
        Api::Glx => Some(Box::new(glx::GlxProvider::new())),
        Api::Egl => Some(Box::new(egl::EglProvider::new())),
    };
}

#[cfg(target_os = "android")]
fn select_provider() -> Option<Box<dyn FunctionProvider>> {
    return Some(Box::new(egl::EglProvider::new()));
}

#[cfg(target_os = "macos")]
fn select_provider() -> Option<Box<dyn FunctionProvider>> {
    return Some(Box::new(cgl::CglProvider::new()));
}

#[cfg(not(any(windows, unix)))]
fn select_provider() -> Option<Box<dyn FunctionProvider>> {
    return None;
}

#[cfg(target_os = "ios")]
fn select_provider() -> Option<Box<dyn FunctionProvider>> {
    return None;
}

/// The provider for the platform this was compiled for. Chosen once;
/// platforms without one get `UnsupportedPlatform` on every call.
pub fn provider() -> Result<&'static dyn FunctionProvider> {
    return match PROVIDER.as_deref() {
        Some(p) => Ok(p),
        None => {
            error!("No OpenGL function provider exists for this platform");
            Err(Error::UnsupportedPlatform)
        }
    };
}
