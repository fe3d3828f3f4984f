pub mod applications;
pub mod errors;
