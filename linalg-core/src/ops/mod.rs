// src/ops/mod.rs

pub mod linalg;
