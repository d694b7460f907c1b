use crate::bridge::{FunctionProvider, Result};
use crate::graphics::gl::queries::{CoreQueries, IndexedQuery};
use crate::utils::extension_tokens;
use gl::types::GLuint;
use log::*;
use std::collections::HashSet;

// Valid minor versions for each major version, indexed by major - 1.
pub const GL_VERSIONS: &[&[u32]] = &[
    &[1, 2, 3, 4, 5],       // OpenGL 1
    &[0, 1],                // OpenGL 2
    &[0, 1, 2, 3],          // OpenGL 3
    &[0, 1, 2, 3, 4, 5, 6], // OpenGL 4
];

/// Identifier standing in for "this version or newer", e.g. `OpenGL33`.
pub fn version_extension(major: u32, minor: u32) -> String {
    return format!("OpenGL{}{}", major, minor);
}

// Every known version up to and including major.minor.
pub fn version_extensions(major: u32, minor: u32) -> impl Iterator<Item = String> {
    return GL_VERSIONS.iter().zip(1u32..).flat_map(move |(minors, m)| {
        minors
            .iter()
            .filter(move |&&n| m < major || (m == major && n <= minor))
            .map(move |&n| version_extension(m, n))
    });
}

pub fn enumerate(provider: &dyn FunctionProvider, core: &CoreQueries,
                 major: u32, minor: u32) -> Result<HashSet<String>> {
    let mut supported: HashSet<String> = HashSet::with_capacity(128);
    supported.extend(version_extensions(major, minor));

    if major < 3 {
        let all = core.get_string(gl::EXTENSIONS, "GL_EXTENSIONS")?;
        supported.extend(extension_tokens(&all).map(str::to_owned));
    } else {
        let count = core.get_integer(gl::NUM_EXTENSIONS).max(0) as GLuint;
        let indexed = IndexedQuery::load(provider)?;
        for i in 0..count {
            supported.insert(indexed.get_string(gl::EXTENSIONS, i, "GL_EXTENSIONS")?);
        }
    }

    match provider.windowing_extensions() {
        Some(ws) => supported.extend(extension_tokens(&ws).map(str::to_owned)),
        None => debug!("{} reports no windowing system extensions", provider.name()),
    }
    return Ok(supported);
}
