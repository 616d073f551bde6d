//! JNI host errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("JNI call failed: {0}")]
    Jni(#[from] jni::errors::Error),
    #[error(transparent)]
    Bridge(#[from] gammabridge_core::BridgeError),
}

pub type HostResult<T> = std::result::Result<T, HostError>;
