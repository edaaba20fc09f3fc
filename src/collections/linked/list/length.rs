use std::num::NonZero;

/// The length of a non-empty list. An empty list is represented by [`ListState::Empty`]
/// instead, so a length of zero never needs to be stored.
///
/// [`ListState::Empty`]: super::ListState::Empty
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub(crate) struct Length(pub NonZero<usize>);

impl Length {
    /// Adds `other` to this length, returning [`None`] on overflow.
    pub const fn checked_add(self, other: usize) -> Option<Length> {
        match self.0.checked_add(other) {
            Some(res) => Some(Length(res)),
            None => None,
        }
    }

    /// Subtracts `other` from this length, returning [`None`] if the result would be zero (or
    /// less). A [`None`] here means the list is about to become empty.
    pub const fn checked_sub(self, other: usize) -> Option<Length> {
        match self.0.get().checked_sub(other) {
            Some(res) => match NonZero::new(res) {
                Some(non_zero) => Some(Length(non_zero)),
                None => None,
            },
            None => None,
        }
    }

    pub const fn get(self) -> usize {
        self.0.get()
    }
}

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);
