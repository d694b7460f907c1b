use crate::bridge::{FunctionProvider, Result};
use crate::graphics::gl::functions::{self, ExtensionDecl, FunctionTable};
use crate::graphics::gl::queries::CoreQueries;
use crate::graphics::gl::{extensions, profile, version};
use log::*;
use std::collections::{HashMap, HashSet};

/// What the current context can do. Built once per context by
/// [`assemble`] and never changed afterwards.
#[derive(Debug)]
pub struct CapabilitySet {
    major: u32,
    minor: u32,
    forward_compatible: bool,
    extensions: HashSet<String>,
    tables: HashMap<&'static str, FunctionTable>,
}

impl CapabilitySet {
    pub fn major(&self) -> u32 {
        return self.major;
    }

    pub fn minor(&self) -> u32 {
        return self.minor;
    }

    pub fn version(&self) -> (u32, u32) {
        return (self.major, self.minor);
    }

    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        return (self.major, self.minor) >= (major, minor);
    }

    pub fn is_forward_compatible(&self) -> bool {
        return self.forward_compatible;
    }

    /// True for real extension names (`GL_ARB_multisample`) as well as
    /// version pseudo-extensions (`OpenGL32`).
    pub fn supports(&self, id: &str) -> bool {
        return self.extensions.contains(id);
    }

    pub fn extensions(&self) -> impl Iterator<Item = &str> {
        return self.extensions.iter().map(String::as_str);
    }

    // None both for unsupported extensions and for supported ones whose
    // entry points didn't all resolve.
    pub fn function_table(&self, id: &str) -> Option<&FunctionTable> {
        return self.tables.get(id);
    }
}

// Probes the context that is current on this thread. Nothing is
// published unless every step succeeds.
pub fn assemble(provider: &dyn FunctionProvider, forward_compatible: bool,
                registry: &[ExtensionDecl]) -> Result<CapabilitySet> {
    // There is no capabilities instance yet, so the queries go
    // through raw addresses.
    let core = CoreQueries::load(provider)?;
    let (major, minor) = version::detect(&core)?;
    let extensions = extensions::enumerate(provider, &core, major, minor)?;
    let forward_compatible = profile::resolve(&core, forward_compatible, major, minor, &extensions);
    let tables = functions::build_tables(provider, registry, &extensions, forward_compatible);

    info!("OpenGL {}.{} via {}{}, {} extensions, {}/{} function tables",
          major, minor, provider.name(),
          if forward_compatible { " (forward compatible)" } else { "" },
          extensions.len(), tables.len(), registry.len());

    return Ok(CapabilitySet {
        major: major,
        minor: minor,
        forward_compatible: forward_compatible,
        extensions: extensions,
        tables: tables,
    });
}
