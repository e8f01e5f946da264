//! Domain types shared by every underbar crate

pub mod capabilities;
pub mod container;
pub mod nested;
pub mod record;
pub mod truthy;

pub use capabilities::{Capabilities, Capability, Method};
pub use container::{Container, KeyedMapping, MappingMut, OrderedSequence};
pub use nested::Nested;
pub use record::{AsNumber, Record};
pub use truthy::Truthy;
