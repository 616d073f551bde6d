//! Integration test crate for gammabridge.
//!
//! This crate exists solely to hold cross-crate integration tests.

#[cfg(test)]
mod lookup;

#[cfg(test)]
mod concurrency;

#[cfg(test)]
mod system_text;

#[cfg(test)]
mod c_abi;
