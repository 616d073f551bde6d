//! Native capability surfaces.
//!
//! A surface answers the four questions the bridge asks of libgamma: the
//! name of a code, the code of a name, and the required group id and name.
//! Strings come back as loans; the bridge copies them before returning.

mod builtin;
#[cfg(feature = "libgamma")]
mod linked;

pub use builtin::BuiltinSurface;
#[cfg(feature = "libgamma")]
pub use linked::LinkedSurface;

use std::ffi::CStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codes::ErrorCode;
use crate::error::{BridgeError, Result};
use crate::owned::OwnedText;

/// Numeric OS group id, the platform `gid_t`.
pub type GroupId = libc::gid_t;

/// Lookups provided by the native error library.
///
/// Returned `&CStr` values are loans. They are only guaranteed valid until
/// the caller next enters the surface, so callers copy them at once.
pub trait ErrorSurface: Send + Sync {
    /// Definition name for `code`, or `None` if the code has none.
    fn name_of_error(&self, code: ErrorCode) -> Option<&CStr>;

    /// Code whose definition name is exactly `name`, or `0`.
    fn value_of_error(&self, name: &CStr) -> ErrorCode;

    /// Group whose membership grants device access.
    fn group_gid(&self) -> GroupId;

    /// Name of the group reported by [`ErrorSurface::group_gid`], if set.
    fn group_name(&self) -> Option<&CStr>;
}

/// The group a user must belong to for device access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupIdentity {
    pub gid: GroupId,
    pub name: Option<OwnedText>,
}

/// Which surface a bridge should query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SurfaceKind {
    /// The compiled-in copy of libgamma's error table.
    Builtin,
    /// The system libgamma, when built with the `libgamma` feature.
    Linked,
}

impl SurfaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Builtin => "builtin",
            Self::Linked => "linked",
        }
    }
}

impl Default for SurfaceKind {
    fn default() -> Self {
        if cfg!(feature = "libgamma") {
            Self::Linked
        } else {
            Self::Builtin
        }
    }
}

impl std::str::FromStr for SurfaceKind {
    type Err = BridgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "builtin" => Ok(Self::Builtin),
            "linked" => Ok(Self::Linked),
            _ => Err(BridgeError::Config {
                key: "surface",
                value: s.to_string(),
            }),
        }
    }
}

/// Surface chosen at runtime from a [`SurfaceKind`].
#[derive(Debug)]
pub enum DefaultSurface {
    Builtin(BuiltinSurface),
    #[cfg(feature = "libgamma")]
    Linked(LinkedSurface),
}

impl DefaultSurface {
    /// Build the surface for `kind`.
    ///
    /// Without the `libgamma` feature, `Linked` falls back to the builtin
    /// table.
    pub fn select(kind: SurfaceKind) -> Self {
        match kind {
            SurfaceKind::Builtin => {
                debug!("Using builtin libgamma error table");
                Self::Builtin(BuiltinSurface::new())
            }
            #[cfg(feature = "libgamma")]
            SurfaceKind::Linked => {
                debug!("Using linked libgamma");
                Self::Linked(LinkedSurface)
            }
            #[cfg(not(feature = "libgamma"))]
            SurfaceKind::Linked => {
                tracing::warn!("Linked libgamma requested but not compiled in, using builtin table");
                Self::Builtin(BuiltinSurface::new())
            }
        }
    }

    pub fn kind(&self) -> SurfaceKind {
        match self {
            Self::Builtin(_) => SurfaceKind::Builtin,
            #[cfg(feature = "libgamma")]
            Self::Linked(_) => SurfaceKind::Linked,
        }
    }
}

impl ErrorSurface for DefaultSurface {
    fn name_of_error(&self, code: ErrorCode) -> Option<&CStr> {
        match self {
            Self::Builtin(s) => s.name_of_error(code),
            #[cfg(feature = "libgamma")]
            Self::Linked(s) => s.name_of_error(code),
        }
    }

    fn value_of_error(&self, name: &CStr) -> ErrorCode {
        match self {
            Self::Builtin(s) => s.value_of_error(name),
            #[cfg(feature = "libgamma")]
            Self::Linked(s) => s.value_of_error(name),
        }
    }

    fn group_gid(&self) -> GroupId {
        match self {
            Self::Builtin(s) => s.group_gid(),
            #[cfg(feature = "libgamma")]
            Self::Linked(s) => s.group_gid(),
        }
    }

    fn group_name(&self) -> Option<&CStr> {
        match self {
            Self::Builtin(s) => s.group_name(),
            #[cfg(feature = "libgamma")]
            Self::Linked(s) => s.group_name(),
        }
    }
}
