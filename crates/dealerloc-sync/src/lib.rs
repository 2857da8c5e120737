pub mod engine;
pub mod error;
pub mod render;
pub mod sync;

pub use engine::LocatorEngine;
pub use error::ViewError;
pub use render::{MarkerLayer, SidebarList};
pub use sync::{ViewEvent, ViewSync};
