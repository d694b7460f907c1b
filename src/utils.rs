use std::ffi::{c_char, CStr};

// Borrow a NUL-terminated string handed out by the driver.
// Returns None for null pointers.
pub unsafe fn cstr_from_ptr<'a, T>(ptr: *const T) -> Option<&'a CStr> {
    if ptr.is_null() {
        return None;
    }
    return Some(CStr::from_ptr(ptr as *const c_char));
}

// Extension strings are whitespace separated and drivers are sloppy
// about leading, trailing and doubled spaces.
pub fn extension_tokens(s: &str) -> impl Iterator<Item = &str> {
    return s.split_ascii_whitespace();
}

// Version strings look like "4.6.0 NVIDIA 535.54" or "2.1 Mesa 23.1".
pub fn version_tokens(s: &str) -> impl Iterator<Item = &str> {
    return s.split(|c: char| c == '.' || c == ' ').filter(|t| !t.is_empty());
}
