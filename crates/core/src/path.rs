//! Path-string helpers for deriving descriptor filenames.
//!
//! These operate on path *strings* as stored in a descriptor, not on
//! `std::path::Path`: the filename recorded by a signing front-end may use
//! either separator style regardless of the host platform.

/// Returns the file stem of a path string: everything after the last path
/// separator and before the last `.` of that final component.
///
/// A path with no separator is treated as a bare filename; a component with
/// no dot is returned whole. Dots before the last separator never count.
pub fn file_stem_of(path: &str) -> &str {
    let name = final_component(path);
    match name.rfind('.') {
        Some(dot) => &name[..dot],
        None => name,
    }
}

/// Returns the extension of a filename: everything after the last `.`, or
/// the empty string when there is no dot.
pub fn extension_of(name: &str) -> &str {
    let name = final_component(name);
    match name.rfind('.') {
        Some(dot) => &name[dot + 1..],
        None => "",
    }
}

fn final_component(path: &str) -> &str {
    match path.rfind(['\\', '/']) {
        Some(sep) => &path[sep + 1..],
        None => path,
    }
}
