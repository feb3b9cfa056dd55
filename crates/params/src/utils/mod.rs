//! Constants for the symmetric collaborators

pub mod hash;
