//! Linked collection types. Currently only [`SingleLinkedList`], a list with links in one
//! direction.

pub mod list;

#[doc(inline)]
pub use list::SingleLinkedList;
