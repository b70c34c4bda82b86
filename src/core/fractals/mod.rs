pub mod colour_mapping;
pub mod escape_time;
pub mod julia;
pub mod mandelbrot;
pub mod variant;
