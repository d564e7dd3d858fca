//! Growable contiguous array with manual buffer management, a stable merge
//! sort, and sorted merge-in of another array.
//!
//! The `cli`, `config`, `compare`, `input` and `output` modules back the
//! `dynsort` binary, which sorts and merges delimited records through
//! [`DynamicArray`].

mod array;
mod raw;

pub mod cli;
pub mod compare;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod sort;

pub use array::DynamicArray;
pub use error::{DynArrayError, Result};
