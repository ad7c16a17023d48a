pub mod content;
pub mod item;

pub use content::*;
pub use item::*;
