//! UI components.

pub mod treemap;
