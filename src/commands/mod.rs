// ABOUTME: Command implementations for each CLI operation
// ABOUTME: Exports extract and inspect commands

pub mod extract;
pub mod inspect;

pub use extract::extract;
pub use inspect::inspect;
