//! gammabridge core - libgamma error metadata for host runtimes
//!
//! This crate moves libgamma's error metadata across a native/host boundary:
//! - `codes`: libgamma error code constants and the definition table
//! - `surface`: the native capability surface (`ErrorSurface`) and its
//!   builtin and linked implementations
//! - `owned`: the copy step every outbound string goes through
//! - `bridge`: the five host-facing operations
//! - `syserr`: platform `strerror` text
//!
//! Strings never leave as borrows of native memory. Lookup misses are
//! `None` or `0`, never errors.

pub mod bridge;
pub mod codes;
pub mod config;
pub mod error;
pub mod logging;
pub mod owned;
pub mod surface;
pub mod syserr;

pub use bridge::Bridge;
pub use codes::ErrorCode;
pub use config::BridgeConfig;
pub use error::{BridgeError, Result};
pub use owned::{duplicate, AllocPolicy, OwnedText};
#[cfg(feature = "libgamma")]
pub use surface::LinkedSurface;
pub use surface::{
    BuiltinSurface, DefaultSurface, ErrorSurface, GroupId, GroupIdentity, SurfaceKind,
};
pub use syserr::system_error_text;
