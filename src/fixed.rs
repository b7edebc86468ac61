use crate::{Error, ErrorKind, ResultMut, ResultRef};
use std::fmt::{self, Debug};
use std::ops::{Index, IndexMut};

/// Array with a compile-time capacity and inline storage.
///
/// Every slot is initialised at construction, so the whole `N` range is
/// always readable. Building one from a literal of the wrong length does not
/// compile:
///
/// ```compile_fail
/// use holdfast::FixedArray;
///
/// let items: FixedArray<i32, 3> = FixedArray::from([1, 2]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FixedArray<T, const N: usize> {
    data: [T; N],
}

impl<T, const N: usize> FixedArray<T, N> {
    pub const CAPACITY: usize = N;

    /// Creates an array with every slot set to `T::default()`.
    pub fn new() -> Self where T: Default {
        FixedArray { data: std::array::from_fn(|_| T::default()) }
    }

    #[inline(always)]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the item at `index`, or `IndexOutOfRange` if
    /// `index >= N`.
    pub fn at(&self, index: usize) -> ResultRef<'_, T> {
        self.data.get(index).ok_or_else(index_error)
    }

    pub fn at_mut(&mut self, index: usize) -> ResultMut<'_, T> {
        self.data.get_mut(index).ok_or_else(index_error)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

fn index_error() -> Error {
    Error::new(ErrorKind::IndexOutOfRange, "index out of range in fixed array element access")
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        FixedArray::new()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(data: [T; N]) -> Self {
        FixedArray { data }
    }
}

impl<T: Debug, const N: usize> Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}

/// Unchecked access; panics on `index >= N` like slice indexing.
impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.data[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.data[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedArray<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
