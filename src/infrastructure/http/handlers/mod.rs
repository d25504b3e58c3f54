//! HTTP Handlers

mod novel;
mod static_assets;
mod system;

pub use novel::*;
pub use static_assets::*;
pub use system::*;
