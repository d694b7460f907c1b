use crate::bridge::{FunctionAddress, FunctionProvider};
use log::*;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionDecl {
    pub name: &'static str,
    // Removed from the core profile; never loaded for forward-compatible
    // contexts.
    pub deprecated: bool,
}

impl FunctionDecl {
    pub const fn new(name: &'static str) -> FunctionDecl {
        return FunctionDecl { name: name, deprecated: false };
    }

    pub const fn deprecated(name: &'static str) -> FunctionDecl {
        return FunctionDecl { name: name, deprecated: true };
    }
}

/// One extension (or core version) and the entry points it brings.
///
/// `implied_by` lists other identifiers whose presence also means this one
/// is available, usually the version pseudo-extension it was promoted into,
/// e.g. `GL_ARB_vertex_array_object` is implied by `OpenGL30`.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionDecl {
    pub name: &'static str,
    pub implied_by: &'static [&'static str],
    pub functions: &'static [FunctionDecl],
}

impl ExtensionDecl {
    pub fn is_supported(&self, extensions: &HashSet<String>) -> bool {
        return extensions.contains(self.name)
            || self.implied_by.iter().any(|id| extensions.contains(*id));
    }
}

/// Resolved entry points of one extension. Every address in here is
/// non-zero; a table that couldn't be completed is never built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionTable {
    extension: &'static str,
    entries: Vec<(&'static str, FunctionAddress)>,
}

impl FunctionTable {
    pub fn extension(&self) -> &'static str {
        return self.extension;
    }

    pub fn address(&self, name: &str) -> Option<FunctionAddress> {
        return self.entries.iter().find(|(n, _)| *n == name).map(|&(_, a)| a);
    }

    // In declaration order, deprecated functions skipped for
    // forward-compatible contexts.
    pub fn entries(&self) -> impl Iterator<Item = (&'static str, FunctionAddress)> + '_ {
        return self.entries.iter().copied();
    }

    pub fn len(&self) -> usize {
        return self.entries.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.entries.is_empty();
    }
}

pub fn build_table(provider: &dyn FunctionProvider, decl: &ExtensionDecl,
                   extensions: &HashSet<String>, forward_compatible: bool) -> Option<FunctionTable> {
    if !decl.is_supported(extensions) {
        return None;
    }
    let mut complete = true;
    let mut entries = Vec::with_capacity(decl.functions.len());
    for f in decl.functions {
        if f.deprecated && forward_compatible {
            continue;
        }
        let address = provider.get_function_address(f.name);
        if address == 0 {
            complete = false;
        } else {
            entries.push((f.name, address));
        }
    }
    if !complete {
        warn!("[GL] {} was reported as available but an entry point is missing.", decl.name);
        return None;
    }
    return Some(FunctionTable { extension: decl.name, entries: entries });
}

pub fn build_tables(provider: &dyn FunctionProvider, registry: &[ExtensionDecl],
                    extensions: &HashSet<String>, forward_compatible: bool) -> HashMap<&'static str, FunctionTable> {
    return registry
        .iter()
        .filter_map(|decl| build_table(provider, decl, extensions, forward_compatible))
        .map(|table| (table.extension, table))
        .collect();
}
