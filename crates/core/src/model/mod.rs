pub mod attributes;
pub mod dump;
pub mod element;
pub mod hierarchy;
pub mod kind;

pub use attributes::{CustomAttribute, NamespaceMappingAttribute, RegisterAttribute};
pub use element::{Element, ElementData, ElementId, ObjectData, Parent};
pub use hierarchy::Hierarchy;
pub use kind::ElementKind;
