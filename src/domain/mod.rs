//! Input-side domain logic: direction classification, pointer
//! resolution, and persisted settings.

pub mod direction;
pub mod resolver;
pub mod settings;

pub use direction::Direction;
pub use resolver::{DirectionResolver, PointerSample, WidgetBounds};
