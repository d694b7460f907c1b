// Test doubles: a scriptable per-thread GL driver and a log sink.
//
// The driver's entry points are real `extern "system"` functions, so the
// code under test resolves and calls them through raw addresses exactly
// as it would a driver's.

use crate::bridge::{FunctionAddress, FunctionProvider};
use gl::types::{GLenum, GLint, GLubyte, GLuint};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};
use std::ffi::CString;
use std::ptr::null;
use std::sync::Once;

thread_local! {
    static DRIVER: RefCell<MockDriver> = RefCell::new(MockDriver::default());
    static LOGS: RefCell<Vec<(Level, String)>> = RefCell::new(Vec::new());
}

#[derive(Default)]
pub struct MockDriver {
    // None makes the 3.0+ integer queries fail with GL_INVALID_ENUM.
    pub integer_version: Option<(GLint, GLint)>,
    pub version_string: Option<String>,
    pub extensions: Vec<String>,
    pub context_flags: GLint,
    pub profile_mask: GLint,
    pub pending_errors: VecDeque<GLenum>,
    // Integer queries that fail with GL_INVALID_ENUM, like GLES does.
    pub rejected_pnames: HashSet<GLenum>,
    pub windowing_extensions: Option<String>,
    // Extension entry points that resolve to a dummy function.
    pub functions: HashSet<String>,
    // Names that never resolve, core queries included.
    pub unresolvable: HashSet<String>,
    pub calls: Vec<String>,
    strings: Vec<CString>,
}

impl MockDriver {
    pub fn gl(major: GLint, minor: GLint) -> MockDriver {
        return MockDriver {
            integer_version: if major >= 3 { Some((major, minor)) } else { None },
            version_string: Some(format!("{}.{}.0 Mock 1.0", major, minor)),
            ..Default::default()
        };
    }

    pub fn with_extensions(mut self, names: &[&str]) -> MockDriver {
        self.extensions = names.iter().map(|s| s.to_string()).collect();
        return self;
    }

    pub fn with_functions(mut self, names: &[&str]) -> MockDriver {
        self.functions.extend(names.iter().map(|s| s.to_string()));
        return self;
    }

    pub fn reset(driver: MockDriver) {
        DRIVER.with(|d| *d.borrow_mut() = driver);
    }

    pub fn calls() -> Vec<String> {
        return DRIVER.with(|d| d.borrow().calls.clone());
    }

    pub fn called(name: &str) -> bool {
        return DRIVER.with(|d| d.borrow().calls.iter().any(|c| c == name));
    }

    // Keeps the string alive for as long as the driver, like a real one.
    fn hand_out(&mut self, s: &str) -> *const GLubyte {
        let cs = match CString::new(s) {
            Ok(c) => c,
            Err(_) => return null(),
        };
        let ptr = cs.as_ptr() as *const GLubyte;
        self.strings.push(cs);
        return ptr;
    }
}

fn pname_label(pname: GLenum) -> &'static str {
    return match pname {
        gl::MAJOR_VERSION => "GL_MAJOR_VERSION",
        gl::MINOR_VERSION => "GL_MINOR_VERSION",
        gl::NUM_EXTENSIONS => "GL_NUM_EXTENSIONS",
        gl::CONTEXT_FLAGS => "GL_CONTEXT_FLAGS",
        gl::CONTEXT_PROFILE_MASK => "GL_CONTEXT_PROFILE_MASK",
        gl::VERSION => "GL_VERSION",
        gl::EXTENSIONS => "GL_EXTENSIONS",
        _ => "unknown",
    };
}

extern "system" fn mock_get_error() -> GLenum {
    return DRIVER.with(|d| {
        let mut d = d.borrow_mut();
        d.calls.push("glGetError".into());
        d.pending_errors.pop_front().unwrap_or(gl::NO_ERROR)
    });
}

extern "system" fn mock_get_integerv(pname: GLenum, data: *mut GLint) {
    DRIVER.with(|d| {
        let mut d = d.borrow_mut();
        d.calls.push(format!("glGetIntegerv({})", pname_label(pname)));
        let value = match (pname, d.integer_version) {
            _ if d.rejected_pnames.contains(&pname) => None,
            (gl::MAJOR_VERSION, Some((major, _))) => Some(major),
            (gl::MINOR_VERSION, Some((_, minor))) => Some(minor),
            (gl::NUM_EXTENSIONS, Some(_)) => Some(d.extensions.len() as GLint),
            (gl::CONTEXT_FLAGS, Some(_)) => Some(d.context_flags),
            (gl::CONTEXT_PROFILE_MASK, Some(_)) => Some(d.profile_mask),
            _ => None,
        };
        match value {
            Some(v) => unsafe { *data = v },
            None => d.pending_errors.push_back(gl::INVALID_ENUM),
        }
    });
}

extern "system" fn mock_get_string(name: GLenum) -> *const GLubyte {
    return DRIVER.with(|d| {
        let mut d = d.borrow_mut();
        d.calls.push(format!("glGetString({})", pname_label(name)));
        match name {
            gl::VERSION => match d.version_string.clone() {
                Some(v) => d.hand_out(&v),
                None => null(),
            },
            gl::EXTENSIONS => {
                let joined = d.extensions.join(" ");
                d.hand_out(&joined)
            }
            _ => {
                d.pending_errors.push_back(gl::INVALID_ENUM);
                null()
            }
        }
    });
}

extern "system" fn mock_get_stringi(name: GLenum, index: GLuint) -> *const GLubyte {
    return DRIVER.with(|d| {
        let mut d = d.borrow_mut();
        d.calls.push("glGetStringi".into());
        let ext = if name == gl::EXTENSIONS { d.extensions.get(index as usize).cloned() } else { None };
        match ext {
            Some(e) => d.hand_out(&e),
            None => {
                d.pending_errors.push_back(gl::INVALID_VALUE);
                null()
            }
        }
    });
}

extern "system" fn mock_entry_point() {}

pub struct MockProvider;

impl FunctionProvider for MockProvider {
    fn name(&self) -> &'static str {
        return "mock";
    }

    fn context_address(&self, name: &CString) -> FunctionAddress {
        let name = name.to_str().unwrap_or("");
        return DRIVER.with(|d| {
            let d = d.borrow();
            if d.unresolvable.contains(name) {
                return 0;
            }
            match name {
                "glGetError" => mock_get_error as FunctionAddress,
                "glGetString" => mock_get_string as FunctionAddress,
                "glGetIntegerv" => mock_get_integerv as FunctionAddress,
                "glGetStringi" if d.integer_version.is_some() => mock_get_stringi as FunctionAddress,
                n if d.functions.contains(n) => mock_entry_point as FunctionAddress,
                _ => 0,
            }
        });
    }

    fn library_address(&self, _name: &CString) -> FunctionAddress {
        return 0;
    }

    fn windowing_extensions(&self) -> Option<String> {
        return DRIVER.with(|d| d.borrow().windowing_extensions.clone());
    }
}

// What you get with no context and no library at all.
pub struct NullProvider;

impl FunctionProvider for NullProvider {
    fn name(&self) -> &'static str {
        return "null";
    }

    fn context_address(&self, _name: &CString) -> FunctionAddress {
        return 0;
    }

    fn library_address(&self, _name: &CString) -> FunctionAddress {
        return 0;
    }
}

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        return true;
    }

    fn log(&self, record: &Record) {
        LOGS.with(|l| l.borrow_mut().push((record.level(), record.args().to_string())));
    }

    fn flush(&self) {}
}

static INSTALL_LOGGER: Once = Once::new();

// Starts capturing this thread's log records, dropping anything
// captured before.
pub fn capture_logs() {
    INSTALL_LOGGER.call_once(|| {
        let _ = log::set_logger(&CaptureLogger);
        log::set_max_level(LevelFilter::Trace);
    });
    LOGS.with(|l| l.borrow_mut().clear());
}

pub fn take_logs() -> Vec<(Level, String)> {
    return LOGS.with(|l| std::mem::take(&mut *l.borrow_mut()));
}
