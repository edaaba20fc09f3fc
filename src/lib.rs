//! A singly linked list, written by hand as a learning exercise in pointers, ownership and
//! allocation.
//!
//! # Purpose
//! This crate exists to understand linked lists properly, not to replace [`std`]'s collections.
//! It still aims to be correct enough that it could be used: no leaks, no double frees and no
//! panics that aren't documented.
//!
//! # Structure
//! The only collection is [`SingleLinkedList`](collections::linked::SingleLinkedList), which
//! lives under [`collections::linked`]. Its nodes are individual heap allocations linked through
//! raw (but non-null) pointers, with the list itself responsible for freeing them.
//!
//! # Error Handling
//! Index-based methods come in pairs. The `try_` variant returns a [`Result`] with a strongly
//! typed error, [`IndexOutOfBounds`](collections::linked::list::IndexOutOfBounds), while the
//! plain variant panics with that error's message. Most callers know their indices are valid and
//! shouldn't be forced to handle an error every time they call [`get`].
//!
//! Errors are plain structs that implement [`Error`](std::error::Error), derived with
//! `derive_more` to avoid some very repetitive programming.
//!
//! [`get`]: collections::linked::SingleLinkedList::get

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
