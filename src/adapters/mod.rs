// Adapters layer: concrete implementations of the domain ports (file
// loading, terminal rendering).

pub mod loader;
pub mod presenter;

pub use loader::FileLoader;
pub use presenter::{JsonPresenter, TablePresenter};
