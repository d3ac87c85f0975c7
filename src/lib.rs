pub mod commands;
pub mod di;
pub mod entity;
pub mod ggdeals;
pub mod interactor;
pub mod presenter;
pub mod router;
pub mod services;
pub mod utils;
pub mod view;

// Re-export commonly used items
pub use commands::*;
pub use di::*;
pub use entity::*;
pub use ggdeals::*;
pub use interactor::*;
pub use presenter::*;
pub use router::*;
pub use services::*;
pub use utils::*;
pub use view::*;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
