#![deny(clippy::expect_used, clippy::unwrap_used)]

//! The root of the inline-edit lifecycle library.
//! 行内编辑生命周期库的根。

pub mod commit;
pub mod config;
pub mod error;
pub mod machine;
