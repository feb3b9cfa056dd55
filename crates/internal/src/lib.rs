//! Internal utilities shared by the mpckyber crates
//!
//! Nothing here is part of the public API surface; the helpers exist so that
//! constant-time selection and little-endian reads are written once.

#![no_std]

pub mod constant_time;
pub mod endian;
