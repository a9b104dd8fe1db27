pub mod api;
pub mod select;
pub mod timer;
