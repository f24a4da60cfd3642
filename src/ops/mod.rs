pub mod harvest;
pub mod reliability;
pub mod validate;
