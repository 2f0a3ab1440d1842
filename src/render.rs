pub(crate) mod draw;
pub mod surface;
