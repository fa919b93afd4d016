#![doc = include_str!("../README.md")]

mod error;

pub mod bytes;
pub mod csv;
pub mod dataset;
pub mod header;
pub mod pd0;
pub mod qc;

pub use dataset::{DatasetKind, Element, Grid};
pub use error::{Error, Result};
pub use header::{generate_header, header_size, DatasetHeader};
