// Domain layer - Pure data models and date/color math
pub mod colors;
pub mod range;
pub mod series;
