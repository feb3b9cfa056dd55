//! Constant values for the mpckyber library
//!
//! Numeric constants shared by the kernel, sampler and codec layers, plus the
//! [`SecurityLevel`](pqc::kyber::SecurityLevel) selector that fixes every
//! derived byte length.

#![no_std]

pub mod pqc;
pub mod utils;

pub use pqc::kyber::SecurityLevel;
