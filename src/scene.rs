pub mod animator;
pub mod chain;
pub mod stage;
