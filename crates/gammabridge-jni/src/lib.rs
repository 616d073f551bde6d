//! Native methods of `libgamma.LibgammaException`.
//!
//! Each entry point queries the process-wide [`Bridge`] and converts the
//! owned result into a Java object. Absent values become `null`. When the
//! JVM fails to allocate a string, the pending Java exception is left in
//! place and `null` is returned.

pub mod error;

use std::ffi::{c_void, CStr};
use std::ptr;

use gammabridge_core::{logging, Bridge, ErrorCode, GroupId, OwnedText};
use jni::objects::{JClass, JString};
use jni::sys::{jint, jstring, JNI_VERSION_1_6};
use jni::{JNIEnv, JavaVM};
use tracing::{debug, warn};

pub use error::{HostError, HostResult};

#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: JavaVM, _reserved: *mut c_void) -> jint {
    logging::init();
    debug!("gammabridge JNI natives loaded");
    JNI_VERSION_1_6
}

/// Hand an owned copy to the JVM as a `java.lang.String`.
fn to_java(env: &mut JNIEnv<'_>, text: Option<OwnedText>) -> HostResult<jstring> {
    match text {
        Some(text) => Ok(env.new_string(text.to_string_lossy())?.into_raw()),
        None => Ok(ptr::null_mut()),
    }
}

fn or_null(operation: &'static str, result: HostResult<jstring>) -> jstring {
    result.unwrap_or_else(|e| {
        warn!(operation, error = %e, "Returning null to Java");
        ptr::null_mut()
    })
}

/// Java `int` view of a group id, wrapping like a C conversion.
fn gid_to_jint(gid: GroupId) -> jint {
    gid as jint
}

/// Look up a Java string's code using its modified UTF-8 chars directly.
///
/// The chars are released when `chars` drops, before this returns.
fn lookup_name(env: &mut JNIEnv<'_>, name: &JString<'_>) -> HostResult<ErrorCode> {
    let bridge = Bridge::global();
    if name.is_null() {
        return Ok(bridge.value_of_error(None));
    }
    let chars = env.get_string(name)?;
    let encoded: &CStr = &chars;
    Ok(bridge.value_of_error(Some(encoded)))
}

#[no_mangle]
pub extern "system" fn Java_libgamma_LibgammaException_name_1of_1error<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    value: jint,
) -> jstring {
    let result = Bridge::global()
        .name_of_error(value)
        .map_err(HostError::from)
        .and_then(|text| to_java(&mut env, text));
    or_null("name_of_error", result)
}

#[no_mangle]
pub extern "system" fn Java_libgamma_LibgammaException_value_1of_1error<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    name: JString<'local>,
) -> jint {
    match lookup_name(&mut env, &name) {
        Ok(code) => code,
        Err(e) => {
            warn!(error = %e, "Could not read error name from Java");
            0
        }
    }
}

#[no_mangle]
pub extern "system" fn Java_libgamma_LibgammaException_libgamma_1group_1gid<'local>(
    _env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> jint {
    gid_to_jint(Bridge::global().required_group_id())
}

#[no_mangle]
pub extern "system" fn Java_libgamma_LibgammaException_libgamma_1group_1name<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
) -> jstring {
    let result = Bridge::global()
        .required_group_name()
        .map_err(HostError::from)
        .and_then(|text| to_java(&mut env, text));
    or_null("libgamma_group_name", result)
}

#[no_mangle]
pub extern "system" fn Java_libgamma_LibgammaException_strerror<'local>(
    mut env: JNIEnv<'local>,
    _class: JClass<'local>,
    error_code: jint,
) -> jstring {
    let result = Bridge::global()
        .system_error_text(error_code)
        .map_err(HostError::from)
        .and_then(|text| to_java(&mut env, text));
    or_null("strerror", result)
}
