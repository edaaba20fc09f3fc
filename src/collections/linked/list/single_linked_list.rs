use std::any::Any;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::Index;

use derive_more::IsVariant;

use super::{Iter, Length, Node, NodeRef, ONE};
#[doc(inline)]
pub use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

/// A list with links in one direction, from the head towards the tail.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the SingleLinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `head/tail` | `O(1)` |
/// | `add` | `O(1)` |
/// | `pop_head` | `O(1)` |
/// | `get` | `O(i)` (`O(1)` for the last index) |
/// | `insert` | `O(i)` |
/// | `force_insert` | `O(i)`, or `O(1)` when appending |
/// | `remove` | `O(i)` |
/// | `search/contains` | `O(n)` |
///
/// Because the links only go forwards, there is no cheap way to reach the node before the tail,
/// so removing the last element still walks the whole list.
///
/// # Empty Lists
/// An empty list has no head and no tail at all, rather than a tail that may or may not be
/// stale. [`tail`](SingleLinkedList::tail) returns [`None`] for an empty list and removing the
/// only element leaves the list in exactly the same state as [`SingleLinkedList::new`].
pub struct SingleLinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(IsVariant)]
pub(crate) enum ListState<T> {
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodeRef<T>,
    pub tail: NodeRef<T>,
}

impl<T> SingleLinkedList<T> {
    /// Creates a new SingleLinkedList with no elements.
    pub const fn new() -> SingleLinkedList<T> {
        SingleLinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    /// Returns the length of the SingleLinkedList.
    pub const fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns true if the SingleLinkedList contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Returns a reference to the first element in the list, if it exists.
    pub fn head(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    /// Returns a reference to the last element in the list, if it exists.
    pub fn tail(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    /// Adds the provided element to the end of the SingleLinkedList.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn add(&mut self, value: T) {
        match &mut self.state {
            Empty => self.state = ListState::single(value),
            Full(contents) => contents.push_back(value),
        }
    }

    /// Removes the first element from the list and returns it, if the list isn't empty.
    pub fn pop_head(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                // SAFETY: The head is a live node owned by this list and it is replaced below, so
                // the handle is never used again.
                let node = unsafe { head.take_node() };

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // SAFETY: Previous length is greater than 1, so the first element is
                        // followed by at least one more.
                        *head = unsafe { node.next.unwrap_unchecked() };
                        *len = new_len;
                    },
                    None => self.state = Empty,
                }

                Some(node.value)
            },
        }
    }

    /// Returns a reference to the element at the provided `index`, panicking on a failure.
    ///
    /// The same functionality can be achieved using the [`Index`] operator.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SingleLinkedList.
    #[track_caller]
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the element at the provided `index`, returning an [`Err`] on a
    /// failure rather than panicking.
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_contents_for_index(index)?.seek(index).value())
    }

    /// Inserts `value` so that it ends up at `index`, moving the element currently at `index` (and
    /// everything after it) back by one.
    ///
    /// `index` has to refer to an existing element, so this can't be used to add to the end of
    /// the list. Use [`add`](SingleLinkedList::add) for that, or
    /// [`force_insert`](SingleLinkedList::force_insert) when the index may be past the end.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SingleLinkedList, or if the length of the list
    /// would overflow a `usize`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts `value` at `index`, returning an [`Err`] rather than panicking if `index` doesn't
    /// refer to an existing element.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let contents = self.checked_contents_for_index_mut(index)?;
        match index {
            0 => contents.push_front(value),
            val => {
                let prev_node = contents.seek(val - 1);
                contents.insert_after(prev_node, value);
            },
        }
        Ok(())
    }

    /// Inserts `value` at `index` like [`insert`](SingleLinkedList::insert), unless `index` is
    /// past the last element, in which case `value` is added to the end of the list instead.
    /// This never fails due to the index.
    ///
    /// # Panics
    /// Panics if the length of the list would overflow a `usize`.
    pub fn force_insert(&mut self, index: usize, value: T) {
        if index >= self.len() {
            self.add(value);
        } else {
            self.insert(index, value);
        }
    }

    /// Removes the element at `index` and returns it, panicking on a failure.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds of the SingleLinkedList.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at `index` and returns it, returning an [`Err`] on a failure rather
    /// than panicking.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let contents = self.checked_contents_for_index_mut(index)?;
        match index {
            0 => {
                // SAFETY: contents is already checked to be valid for the provided index.
                Ok(unsafe { self.pop_head().unwrap_unchecked() })
            },
            val => {
                let prev_node = contents.seek(val - 1);

                // SAFETY: val is in bounds, so the node before it has a next node. It is unlinked
                // straight away, so the handle is never used again.
                let node = unsafe { prev_node.next().unwrap_unchecked().take_node() };
                *prev_node.next_mut() = node.next;

                if node.next.is_none() {
                    contents.tail = prev_node;
                }

                // SAFETY: Both index 0 and val were in bounds, so the length was at least 2.
                contents.len = unsafe { contents.len.checked_sub(1).unwrap_unchecked() };

                Ok(node.value)
            },
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T: PartialEq> SingleLinkedList<T> {
    /// Returns the index of the first element equal to `item`, or [`None`] if there isn't one.
    pub fn search(&self, item: &T) -> Option<usize> {
        for (index, element) in self.iter().enumerate() {
            if element == item { return Some(index); }
        }
        None
    }

    pub fn contains(&self, item: &T) -> bool {
        self.search(item).is_some()
    }
}

impl<T> SingleLinkedList<T> {
    pub(crate) const fn checked_contents_for_index(
        &self,
        index: usize,
    ) -> Result<&ListContents<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    pub(crate) const fn checked_contents_for_index_mut(
        &mut self,
        index: usize,
    ) -> Result<&mut ListContents<T>, IndexOutOfBounds> {
        match &mut self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) => {
                let len = contents.len.get();
                if index < len {
                    Ok(contents)
                } else {
                    Err(IndexOutOfBounds { index, len })
                }
            },
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_links(&self) {
        match &self.state {
            Empty => {},
            Full(ListContents { len, head, tail }) => {
                let mut count = 1;
                let mut curr = *head;
                while let Some(next) = curr.next() {
                    count += 1;
                    curr = *next;
                }
                assert!(*tail == curr, "Tail should be the last reachable node.");
                assert_eq!(count, len.get(), "Length should match the number of reachable nodes.");
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Returns the node at `index`, which must be in bounds.
    pub fn seek(&self, index: usize) -> NodeRef<T> {
        if index == self.last_index() {
            return self.tail;
        }

        let mut node = self.head;
        for _ in 0..index {
            // SAFETY: index is in bounds, so every node before it has a next node.
            node = unsafe { node.next().unwrap_unchecked() };
        }
        node
    }

    pub fn push_front(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            next: Some(self.head),
        });

        self.head = node;
    }

    pub fn push_back(&mut self, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::new_unlinked(value);

        *self.tail.next_mut() = Some(node);
        self.tail = node;
    }

    /// Links a new node holding `value` directly after `prev_node`.
    pub fn insert_after(&mut self, prev_node: NodeRef<T>, value: T) {
        self.len = self.len.checked_add(1).ok_or(CapacityOverflow).throw();

        let node = NodeRef::from_node(Node {
            value,
            next: *prev_node.next(),
        });

        *prev_node.next_mut() = Some(node);
        if prev_node == self.tail {
            self.tail = node;
        }
    }

    pub fn wrap_one(value: T) -> ListContents<T> {
        let node = NodeRef::new_unlinked(value);

        ListContents {
            len: ONE,
            head: node,
            tail: node,
        }
    }

    pub const fn last_index(&self) -> usize {
        self.len.get() - 1
    }
}

impl<T> ListState<T> {
    pub fn single(value: T) -> ListState<T> {
        Full(ListContents::wrap_one(value))
    }

    pub const fn len(&self) -> usize {
        match self {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }
}

impl<T> Index<usize> for SingleLinkedList<T> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> FromIterator<T> for SingleLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = SingleLinkedList::new();
        for item in iter.into_iter() {
            list.add(item);
        }
        list
    }
}

impl<T> Default for SingleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SingleLinkedList<T> {
    fn drop(&mut self) {
        match mem::replace(&mut self.state, Empty) {
            Empty => {},
            Full(ListContents { head, .. }) => {
                let mut curr = Some(head);
                while let Some(ptr) = curr {
                    // SAFETY: Each node is reached exactly once while walking forwards and the
                    // state has already been emptied, so nothing else can use these handles.
                    let node = unsafe { ptr.take_node() };
                    curr = node.next;
                }
            },
        }
    }
}

impl<T: Clone> Clone for SingleLinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for SingleLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for SingleLinkedList<T> {}

impl<T: Debug> Debug for SingleLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("SingleLinkedList")
            .field("contents", &self.iter())
            .field("len", &self.len())
            .finish()
    }
}

/// Formats the list as its elements in square brackets, separated by commas, e.g. `[1, 2]`.
/// Elements use their [`Display`] representation, except that [`String`]s and `&'static str`s
/// are also wrapped in double quotes, e.g. `["a", "b"]`. Nothing inside the quotes is escaped.
impl<T: Display + 'static> Display for SingleLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            if is_string(item) {
                write!(f, "\"{item}\"")?;
            } else {
                write!(f, "{item}")?;
            }
        }
        write!(f, "]")
    }
}

fn is_string(item: &dyn Any) -> bool {
    item.is::<String>() || item.is::<&'static str>()
}
