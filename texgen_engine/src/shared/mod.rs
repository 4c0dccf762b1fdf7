pub mod grid_component;
pub mod math;
pub mod validate;
