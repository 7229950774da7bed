//! Shared setup for the runnable MixEnergetico demos.
pub mod common;
