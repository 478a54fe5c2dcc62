pub mod assembler;
pub mod layout;
pub mod parameters;
pub mod stats;
pub mod types;
