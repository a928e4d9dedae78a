mod builder;
#[allow(clippy::module_inception)]
mod engine;

pub use self::builder::Builder;
pub use self::engine::Engine;
