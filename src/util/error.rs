use derive_more::{Display, Error};

/// The error returned when an index doesn't refer to an existing element.
#[derive(Debug, Display, Error, PartialEq, Eq, Clone, Copy)]
#[display("Index {index} out of bounds for list with {len} elements!")]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time of the request.
    pub len: usize,
}

/// The error raised when adding an element would overflow the length of a collection.
#[derive(Debug, Display, Error, PartialEq, Eq, Clone, Copy)]
#[display("Capacity overflow!")]
pub struct CapacityOverflow;
