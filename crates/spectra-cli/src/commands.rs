pub mod absorption;
pub mod sweep;
pub mod transform;
