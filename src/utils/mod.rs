pub mod keys;
pub mod scratch;
