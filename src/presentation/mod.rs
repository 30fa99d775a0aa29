// Presentation layer - Chart surface implementations
pub mod console_surface;
