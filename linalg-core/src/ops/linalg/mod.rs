// src/ops/linalg/mod.rs

pub mod inner_product;
pub mod matmul;
pub mod transpose;

pub use inner_product::inner_product;
pub use matmul::{matmul, matvec};
pub use transpose::transpose;
