//! General-purpose collection types.
//!
//! At the moment this is just the [`linked`] module, but the layout leaves room for more.

pub mod linked;
