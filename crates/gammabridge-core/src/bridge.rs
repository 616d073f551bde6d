//! The error metadata bridge.
//!
//! Every operation is an independent request against an [`ErrorSurface`].
//! Strings the surface loans out are copied through [`duplicate`] before
//! they leave, so a caller never holds a pointer into native memory.

use std::ffi::{c_int, CStr, CString};
use std::sync::OnceLock;

use tracing::trace;

use crate::codes::{ErrorCode, NOT_FOUND};
use crate::config::BridgeConfig;
use crate::error::Result;
use crate::owned::{duplicate, AllocPolicy, OwnedText};
use crate::surface::{DefaultSurface, ErrorSurface, GroupId, GroupIdentity};
use crate::syserr;

/// Marshals libgamma error metadata into owned values.
#[derive(Debug)]
pub struct Bridge<S> {
    surface: S,
    policy: AllocPolicy,
}

static GLOBAL: OnceLock<Bridge<DefaultSurface>> = OnceLock::new();

impl Bridge<DefaultSurface> {
    /// Process-wide bridge, configured from the environment on first use.
    pub fn global() -> &'static Bridge<DefaultSurface> {
        GLOBAL.get_or_init(|| Self::from_config(&BridgeConfig::from_env()))
    }

    pub fn from_config(config: &BridgeConfig) -> Self {
        Bridge::with_policy(DefaultSurface::select(config.surface), config.alloc_policy)
    }
}

impl<S: ErrorSurface> Bridge<S> {
    pub fn new(surface: S) -> Self {
        Self::with_policy(surface, AllocPolicy::default())
    }

    pub fn with_policy(surface: S, policy: AllocPolicy) -> Self {
        Self { surface, policy }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn policy(&self) -> AllocPolicy {
        self.policy
    }

    /// Name of the definition for `code`, or `None` if there is none.
    ///
    /// libgamma defines no name for `0`, so `name_of_error(0)` is `None`.
    pub fn name_of_error(&self, code: ErrorCode) -> Result<Option<OwnedText>> {
        match self.surface.name_of_error(code) {
            Some(loaned) => duplicate(loaned, self.policy).map(Some),
            None => {
                trace!(code, "No libgamma error name for code");
                Ok(None)
            }
        }
    }

    /// Code for the definition called `name`.
    ///
    /// Returns `0` for `None` without querying the surface, and `0` when the
    /// name is unknown. `0` is also the "no error" code; the two cases are
    /// not distinguished.
    pub fn value_of_error(&self, name: Option<&CStr>) -> ErrorCode {
        let Some(name) = name else {
            return NOT_FOUND;
        };
        let code = self.surface.value_of_error(name);
        if code == NOT_FOUND {
            trace!(name = ?name, "No libgamma error code for name");
        }
        code
    }

    /// [`Bridge::value_of_error`] for host text.
    ///
    /// The text is encoded into a temporary NUL-terminated buffer that is
    /// dropped before returning. Text with an interior NUL cannot name a
    /// definition and yields `0`.
    pub fn value_of_error_str(&self, name: Option<&str>) -> ErrorCode {
        let Some(name) = name else {
            return NOT_FOUND;
        };
        match CString::new(name) {
            Ok(encoded) => self.value_of_error(Some(&encoded)),
            Err(_) => {
                trace!(name, "Error name contains NUL");
                NOT_FOUND
            }
        }
    }

    /// Id of the group required for device access.
    pub fn required_group_id(&self) -> GroupId {
        self.surface.group_gid()
    }

    /// Name of the group required for device access, copied on every call.
    pub fn required_group_name(&self) -> Result<Option<OwnedText>> {
        self.surface
            .group_name()
            .map(|loaned| duplicate(loaned, self.policy))
            .transpose()
    }

    /// Both halves of the required group in one snapshot.
    pub fn group_identity(&self) -> Result<GroupIdentity> {
        Ok(GroupIdentity {
            gid: self.required_group_id(),
            name: self.required_group_name()?,
        })
    }

    /// Description of a platform `errno` value, or `None` if the platform
    /// has none.
    pub fn system_error_text(&self, errnum: c_int) -> Result<Option<OwnedText>> {
        syserr::system_error_text(errnum, self.policy)
    }
}
