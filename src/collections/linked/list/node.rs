use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated with Box<T> rather than alloc directly, because Box<T> lets the node
// be moved back out of the heap in one step when it is removed.

/// A handle to a heap allocated [`Node`]. The handle is [`Copy`] and owns nothing, the list that
/// the node belongs to is responsible for freeing it exactly once.
#[derive(Debug)]
pub(crate) struct NodeRef<T>(NonNull<Node<T>>);

impl<T> NodeRef<T> {
    /// Moves `node` onto the heap and returns a handle to it.
    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Creates a new, unlinked node holding `value`.
    pub fn new_unlinked(value: T) -> NodeRef<T> {
        NodeRef::from_node(Node { value, next: None })
    }

    // The methods below hand out references with an unbounded lifetime. They are only called by
    // the list, which ties that lifetime to a borrow of itself before returning it.

    pub fn value<'a>(&self) -> &'a T {
        // SAFETY: A NodeRef always points to a live node while its list is alive.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn next<'a>(&self) -> &'a Link<T> {
        // SAFETY: A NodeRef always points to a live node while its list is alive.
        unsafe { &(*self.0.as_ptr()).next }
    }

    #[allow(clippy::mut_from_ref)]
    pub fn next_mut<'a>(&self) -> &'a mut Link<T> {
        // SAFETY: A NodeRef always points to a live node while its list is alive, and the list
        // never holds another reference into the node while relinking it.
        unsafe { &mut (*self.0.as_ptr()).next }
    }

    /// Moves the node back off of the heap, freeing its allocation.
    ///
    /// # Safety
    /// The node must still be allocated and no other NodeRef to it may be used afterwards.
    pub unsafe fn take_node(self) -> Node<T> {
        // SAFETY: The allocation came from Box::leak in from_node and the caller guarantees that
        // it hasn't been freed yet.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// A single cell of a list. The value is never changed after construction, only the link to the
/// next node is.
pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}
