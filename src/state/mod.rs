//! Table lifecycle state types and the read-only queries over them.

pub mod reader;
pub mod table;
