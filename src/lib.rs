//! This crate decodes the Vulkan XML registry (`vk.xml`, including its
//! VulkanSC flavor) into strongly-typed Rust values.
//!
//! The entry points are `parse_file` and `parse_stream`, which return a
//! `Registry`. Callers that already hold an element tree can use
//! `decode_registry` directly. `Registry::write_xml` goes the other way and
//! produces a document that decodes back to an equal `Registry`.

mod element;
mod encode;
mod error;
mod parse;
mod types;
mod util;

pub use element::{Attribute, Element, Node};
pub use error::{Error, FatalError, FieldKind};
pub use parse::{decode_registry, parse_file, parse_stream};
pub use types::*;
pub use util::{is_optional_flag, split_list};
