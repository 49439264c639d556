//! Text I/O: dictionary pairs in, DOT descriptions out.

pub mod dot;
pub mod reader;

pub use dot::DotWriter;
pub use reader::PairReader;
