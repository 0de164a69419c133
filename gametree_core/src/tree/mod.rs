pub mod node;
pub mod random;
pub mod samples;
pub mod validate;
