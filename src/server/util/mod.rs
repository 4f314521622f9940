pub mod link;
pub mod validate;
