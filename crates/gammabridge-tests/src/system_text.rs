//! Integration tests for platform error text.

use std::ffi::{c_int, CStr};

use gammabridge_core::{Bridge, BuiltinSurface};

fn platform_strerror(errnum: c_int) -> Option<String> {
    unsafe {
        let ptr = libc::strerror(errnum);
        (!ptr.is_null()).then(|| CStr::from_ptr(ptr).to_string_lossy().into_owned())
    }
}

#[test]
fn matches_platform_strerror() {
    let bridge = Bridge::new(BuiltinSurface::new());
    for errnum in [0, libc::EPERM, 987_654_321] {
        let ours = bridge
            .system_error_text(errnum)
            .unwrap()
            .map(|text| text.to_string());
        assert_eq!(ours, platform_strerror(errnum), "errno {errnum}");
    }
}

#[test]
fn eperm_is_non_empty() {
    let bridge = Bridge::new(BuiltinSurface::new());
    let text = bridge.system_error_text(libc::EPERM).unwrap().unwrap();
    assert!(!text.is_empty());
}

#[test]
fn copy_survives_later_calls() {
    let bridge = Bridge::new(BuiltinSurface::new());
    let first = bridge.system_error_text(123_456).unwrap().unwrap();
    let snapshot = first.to_string();
    let _ = bridge.system_error_text(654_321).unwrap();
    let _ = bridge.system_error_text(libc::ENOENT).unwrap();
    assert_eq!(first.to_string(), snapshot);
}
