use crate::bridge::FunctionAddress;
use crate::config;
use libloading::Library;
use log::*;
use once_cell::sync::OnceCell;
use std::ffi::CString;

// The platform's default GL library. Opened the first time somebody
// needs it and kept for the life of the process; the handle is never
// closed, so symbols taken from it never dangle.
pub struct SharedLibrary {
    candidates: &'static [&'static str],
    handle: OnceCell<Option<Library>>,
}

impl SharedLibrary {
    pub const fn new(candidates: &'static [&'static str]) -> SharedLibrary {
        return SharedLibrary { candidates: candidates, handle: OnceCell::new() };
    }

    pub fn get(&self) -> Option<&Library> {
        return self.handle.get_or_init(|| self.open()).as_ref();
    }

    fn open(&self) -> Option<Library> {
        let names: Vec<&str> = match config::get().library.as_deref() {
            Some(name) => vec![name],
            None => self.candidates.to_vec(),
        };
        for name in &names {
            match unsafe { Library::new(*name) } {
                Ok(lib) => {
                    debug!("Loaded GL library {}", name);
                    return Some(lib);
                }
                Err(e) => debug!("Could not load {}: {}", name, e),
            }
        }
        warn!("None of the GL libraries {:?} could be loaded", names);
        return None;
    }

    // Raw symbol lookup. The address is only meaningful as a function
    // pointer of whatever signature the caller knows it to have.
    pub fn symbol(&self, name: &CString) -> FunctionAddress {
        let lib = match self.get() {
            Some(l) => l,
            None => return 0,
        };
        return unsafe {
            match lib.get::<unsafe extern "system" fn()>(name.as_bytes_with_nul()) {
                Ok(sym) => *sym as FunctionAddress,
                Err(_) => 0,
            }
        };
    }
}
