// basic crypto primitives
pub mod sha2;
