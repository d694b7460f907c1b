use crate::bridge::{Error, Result};
use crate::graphics::gl::queries::CoreQueries;
use crate::utils::version_tokens;
use log::*;

// Version of the current context as (major, minor).
//
// GL_MAJOR_VERSION only exists on 3.0+; older drivers flag
// GL_INVALID_ENUM and we fall back to parsing GL_VERSION.
pub fn detect(core: &CoreQueries) -> Result<(u32, u32)> {
    // Errors left over from the caller would otherwise look like the
    // integer query failing.
    core.drain_errors();

    let major = core.get_integer(gl::MAJOR_VERSION);
    if core.get_error() == gl::NO_ERROR {
        let minor = core.get_integer(gl::MINOR_VERSION);
        debug!("GL_MAJOR_VERSION/GL_MINOR_VERSION report {}.{}", major, minor);
        return match (u32::try_from(major), u32::try_from(minor)) {
            (Ok(major), Ok(minor)) => Ok((major, minor)),
            _ => Err(Error::MalformedVersionString(format!("{}.{}", major, minor))),
        };
    }

    let version = core.get_string(gl::VERSION, "GL_VERSION")?;
    debug!("Falling back to GL_VERSION string {:?}", version);
    return parse_version_string(&version);
}

pub fn parse_version_string(version: &str) -> Result<(u32, u32)> {
    let mut tokens = version_tokens(version);
    let mut next = || -> Option<u32> { tokens.next()?.parse::<u32>().ok() };
    return match (next(), next()) {
        (Some(major), Some(minor)) => Ok((major, minor)),
        _ => Err(Error::MalformedVersionString(version.to_owned())),
    };
}
