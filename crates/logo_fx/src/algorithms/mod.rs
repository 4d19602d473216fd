pub mod classify;
pub mod composite;
pub mod background;
pub mod color;
pub mod outline;
pub mod glow;

pub use classify::*;
pub use composite::*;
pub use background::*;
pub use color::*;
pub use outline::*;
pub use glow::*;
