//! The typed value model carried by messages and actions.

mod codec;
mod ty;
mod value;

pub use self::codec::{BufExt, BufMutExt};
pub use self::ty::Type;
pub use self::value::Value;
