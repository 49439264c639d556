//! Command implementations behind the `dreduce` binary.

pub mod commands;
