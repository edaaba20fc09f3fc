mod iter;
mod length;
mod node;
mod single_linked_list;

pub use iter::*;
pub(crate) use length::*;
pub(crate) use node::*;
pub use single_linked_list::*;
