pub mod draw_fractal;
