#![no_std]

//! spmat-core - Sparse Integer Matrix Storage and Arithmetic
//!
//! This crate provides the core sparse matrix data structure together with
//! element access and the three arithmetic operations (add, subtract,
//! multiply). It performs no I/O; loading and printing live in the `spmat`
//! crate.

extern crate alloc;

pub mod error;
pub mod matrix;
pub mod triple;

pub use error::*;
pub use matrix::*;
pub use triple::*;
