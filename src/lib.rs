#![doc = include_str!("../README.md")]
//!
//! ## Feature flags
#![doc = document_features::document_features!()]

pub use errors::*;
pub use kernel::Kernel;
pub use specializations::{KernelFloat, KernelInt};

mod errors;
mod kernel;
mod specializations;
