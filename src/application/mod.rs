// Application layer - Fetch/transform/sync use cases and their boundaries
pub mod chart_surface;
pub mod fetcher;
pub mod sync_controller;
pub mod transform;
