pub mod element;
pub mod kind;
pub mod visibility;

pub use element::*;
pub use kind::*;
pub use visibility::*;
