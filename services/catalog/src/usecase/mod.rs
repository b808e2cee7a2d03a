pub mod favorites;
pub mod product;
pub mod relation;
