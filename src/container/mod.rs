#[allow(clippy::module_inception)]
pub mod container;

pub use container::Container;
