pub mod plot;
pub mod viewer;
