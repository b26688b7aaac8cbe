//! Display preparation logic.

pub mod prepare;
