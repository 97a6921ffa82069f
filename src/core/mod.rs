//! Foundation layer: data types shared by all selection stages.

pub mod types;
