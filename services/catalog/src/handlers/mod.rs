pub mod product;
pub mod relation;
