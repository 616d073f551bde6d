//! Integration tests for the C ABI.

use std::ffi::{c_char, CStr};
use std::ptr;

use gammabridge_ffi::{
    gammabridge_name_of_error, gammabridge_required_group_id, gammabridge_system_error_text,
    gammabridge_text_free, gammabridge_value_of_error,
};

fn take(ptr: *mut c_char) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    let text = unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned();
    unsafe { gammabridge_text_free(ptr) };
    Some(text)
}

#[test]
fn c_round_trip_over_table() {
    for code in gammabridge_core::codes::ERROR_MIN..0 {
        let name = gammabridge_name_of_error(code);
        assert!(!name.is_null(), "code {code}");
        assert_eq!(unsafe { gammabridge_value_of_error(name) }, code);
        unsafe { gammabridge_text_free(name) };
    }
}

#[test]
fn c_null_name_is_zero() {
    assert_eq!(unsafe { gammabridge_value_of_error(ptr::null()) }, 0);
}

#[test]
fn c_strings_are_independent() {
    let a = gammabridge_name_of_error(-1);
    let b = gammabridge_name_of_error(-1);
    assert_ne!(a, b);
    assert_eq!(take(a), take(b));
}

#[test]
fn c_system_text_and_group() {
    assert!(take(gammabridge_system_error_text(libc::EPERM)).is_some());
    assert_eq!(gammabridge_required_group_id(), gammabridge_required_group_id());
}
