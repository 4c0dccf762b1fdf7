pub mod generator;
pub mod grid;
pub mod pixel;
pub mod renderer;
pub mod sink;
