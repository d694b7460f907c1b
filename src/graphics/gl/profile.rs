use crate::graphics::gl::queries::{error_name, CoreQueries};
use gl::types::GLenum;
use log::*;
use std::collections::HashSet;

pub const ARB_COMPATIBILITY: &str = "GL_ARB_compatibility";

// Decides whether deprecated functionality should be treated as absent.
//
// Drivers are inconsistent around 3.1/3.2: some 3.1 contexts work fine
// with deprecated calls but lack GL_ARB_compatibility, some core contexts
// advertise it and then fail when it is used. The order below is fixed;
// don't trust any single signal over it.
pub fn resolve(core: &CoreQueries, requested: bool, major: u32, minor: u32,
               extensions: &HashSet<String>) -> bool {
    if major < 3 {
        return requested;
    }

    let flags = query(core, gl::CONTEXT_FLAGS, "GL_CONTEXT_FLAGS");
    if flags & gl::CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT != 0 {
        debug!("Context has the forward-compatible flag set");
        return true;
    }

    if major > 3 || minor >= 2 {
        let mask = query(core, gl::CONTEXT_PROFILE_MASK, "GL_CONTEXT_PROFILE_MASK");
        if mask & gl::CONTEXT_CORE_PROFILE_BIT != 0 {
            debug!("Context is a core profile context");
            return true;
        }
    } else if minor == 1 && !extensions.contains(ARB_COMPATIBILITY) {
        debug!("3.1 context without {}", ARB_COMPATIBILITY);
        return true;
    }
    return requested;
}

// GLES rejects both context queries on some versions. A rejected query
// reads as 0 and its error flag is consumed here so it never reaches the
// caller's next glGetError.
fn query(core: &CoreQueries, pname: GLenum, label: &str) -> GLenum {
    let value = core.get_integer(pname) as GLenum;
    let code = core.get_error();
    if code != gl::NO_ERROR {
        debug!("Context rejected {}: {}", label, error_name(code));
        return 0;
    }
    return value;
}
