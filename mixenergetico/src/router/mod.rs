pub mod aggregate;
pub mod probe;
