pub mod scale;
pub mod state;
