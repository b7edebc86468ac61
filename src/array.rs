use crate::{Error, ErrorKind, ResultMut, ResultRef};
use std::fmt::{self, Debug};
use std::iter::FromIterator;
use std::ops::{Add, Index, IndexMut};

/// Heap buffer with a fixed length and a single owner.
///
/// The empty array holds no allocation. `Clone` produces an independent deep
/// copy; [`Array::take`] moves the buffer out and leaves the source empty.
/// The buffer is released exactly once, on `clear`, reassignment or drop.
pub struct Array<T> {
    data: Option<Box<[T]>>,
}

impl<T> Array<T> {
    pub const fn new() -> Array<T> {
        Array { data: None }
    }

    /// Creates an array of `len` default values.
    pub fn with_len(len: usize) -> Array<T> where T: Default {
        (0..len).map(|_| T::default()).collect()
    }

    /// Copies `items` into a new buffer.
    pub fn from_slice(items: &[T]) -> Array<T> where T: Clone {
        Array::from_boxed(items.to_vec().into_boxed_slice())
    }

    fn from_boxed(items: Box<[T]>) -> Array<T> {
        if items.is_empty() {
            return Array::new();
        }
        trace!("alloc array of {} items", items.len());
        Array { data: Some(items) }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |data| data.len())
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Releases the buffer and leaves the array empty.
    pub fn clear(&mut self) {
        if let Some(data) = self.data.take() {
            trace!("release array of {} items", data.len());
            std::mem::drop(data);
        }
    }

    /// Moves the buffer into a new array, leaving this one empty.
    pub fn take(&mut self) -> Array<T> {
        Array { data: self.data.take() }
    }

    /// Returns a reference to the item at `index`.
    ///
    /// Fails with `EmptyArray` if the array holds no buffer and with
    /// `IndexOutOfRange` if `index >= len`.
    pub fn at(&self, index: usize) -> ResultRef<'_, T> {
        match &self.data {
            None => Err(empty_array_error()),
            Some(data) => data.get(index).ok_or_else(index_error),
        }
    }

    /// Mutable variant of [`Array::at`].
    pub fn at_mut(&mut self, index: usize) -> ResultMut<'_, T> {
        match &mut self.data {
            None => Err(empty_array_error()),
            Some(data) => data.get_mut(index).ok_or_else(index_error),
        }
    }

    pub fn as_slice(&self) -> &[T] {
        self.data.as_deref().unwrap_or_default()
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data.as_deref_mut().unwrap_or_default()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a new array holding the items of `self` followed by the items
    /// of `other`. Neither input is modified.
    pub fn concat(&self, other: &Array<T>) -> Array<T> where T: Clone {
        self.iter().chain(other.iter()).cloned().collect()
    }

    pub fn into_vec(mut self) -> Vec<T> {
        self.data.take().map(Vec::from).unwrap_or_default()
    }
}

fn empty_array_error() -> Error {
    Error::new(ErrorKind::EmptyArray, "could not access data of an empty array")
}

fn index_error() -> Error {
    Error::new(ErrorKind::IndexOutOfRange, "index out of range in array element access")
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Array::new()
    }
}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        Array::from_slice(self.as_slice())
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Unchecked access: an out-of-range index is a contract violation and
/// panics like slice indexing. Use [`Array::at`] for checked access.
impl<T> Index<usize> for Array<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.as_slice()[index]
    }
}

impl<T> IndexMut<usize> for Array<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.as_mut_slice()[index]
    }
}

impl<'a, T: Clone> Add<&'a Array<T>> for &'a Array<T> {
    type Output = Array<T>;

    fn add(self, other: &'a Array<T>) -> Array<T> {
        self.concat(other)
    }
}

impl<T> Add for Array<T> {
    type Output = Array<T>;

    fn add(self, other: Array<T>) -> Array<T> {
        let mut items = self.into_vec();
        items.extend(other.into_vec());
        Array::from(items)
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    fn from(items: [T; N]) -> Self {
        let boxed: Box<[T]> = Box::new(items);
        Array::from_boxed(boxed)
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(items: Vec<T>) -> Self {
        Array::from_boxed(items.into_boxed_slice())
    }
}

impl<T: Clone> From<&[T]> for Array<T> {
    fn from(items: &[T]) -> Self {
        Array::from_slice(items)
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod array_tests {
    use crate::dropflag::{DropFlag, Droppable};
    use crate::{Array, ErrorKind};
    use std::cell::RefCell;

    fn droppables(count: usize, flag: &DropFlag<usize>) -> Array<Droppable> {
        (0..count).map(|_| Droppable { dropflag: flag.clone() }).collect()
    }

    #[test]
    fn sized_array_is_value_initialized() {
        let items = Array::<i32>::with_len(4);
        assert_eq!(4, items.len());
        assert!(items.iter().all(|v| *v == 0));
    }

    #[test]
    fn copy_is_independent() {
        let mut a = Array::<i32>::with_len(3);
        a[0] = 1;
        a[1] = 2;
        a[2] = 3;
        let mut b = a.clone();
        b[0] = 99;
        assert_eq!(1, a[0]);
        assert_eq!(99, b[0]);
        assert_eq!(&[1, 2, 3], a.as_slice());
    }

    #[test]
    fn copy_of_empty_is_empty() {
        let empty = Array::<String>::new();
        let copy = empty.clone();
        assert!(copy.is_empty());
        assert_eq!(empty, copy);
    }

    #[test]
    fn take_clears_source() {
        let mut original = Array::from([1, 2, 3]);
        let moved = original.take();
        assert_eq!(0, original.len());
        assert!(original.is_empty());
        assert_eq!(&[1, 2, 3], moved.as_slice());
    }

    #[test]
    fn checked_access_on_empty() {
        let mut empty = Array::<u8>::new();
        for i in [0, 1, 17, usize::MAX].iter() {
            assert_eq!(ErrorKind::EmptyArray, empty.at(*i).unwrap_err().kind());
            assert_eq!(ErrorKind::EmptyArray, empty.at_mut(*i).unwrap_err().kind());
        }
    }

    #[test]
    fn checked_access_bounds() {
        let items = Array::from(["a", "b"]);
        assert_eq!(items[0], *items.at(0).unwrap());
        assert_eq!(items[1], *items.at(1).unwrap());
        assert_eq!(ErrorKind::IndexOutOfRange, items.at(2).unwrap_err().kind());
    }

    #[test]
    fn concatenation_keeps_order_and_inputs() {
        let left = Array::from([1, 2]);
        let right = Array::from([3]);
        let joined = &left + &right;
        assert_eq!(&[1, 2, 3], joined.as_slice());
        assert_eq!(&[1, 2], left.as_slice());
        assert_eq!(&[3], right.as_slice());

        let owned = left + Array::new();
        assert_eq!(&[1, 2], owned.as_slice());
    }

    #[test]
    fn equality_is_by_content() {
        assert_eq!(Array::from([1, 2]), Array::from(vec![1, 2]));
        assert_ne!(Array::from([1, 2]), Array::from([1, 2, 3]));
        assert_ne!(Array::from([1, 2]), Array::from([1, 3]));
        assert_eq!(Array::<i32>::new(), Array::from(Vec::new()));
    }

    #[test]
    fn clear_releases_every_item_once() {
        let flag = DropFlag::new(RefCell::new(0));
        let mut items = droppables(5, &flag);
        items.clear();
        assert_eq!(5, *flag.borrow());
        assert!(items.is_empty());
        std::mem::drop(items);
        assert_eq!(5, *flag.borrow());
    }

    #[test]
    fn reassignment_releases_previous_buffer() {
        let flag = DropFlag::new(RefCell::new(0));
        let mut items = droppables(2, &flag);
        assert_eq!(2, items.len());
        items = droppables(3, &flag);
        assert_eq!(2, *flag.borrow());
        std::mem::drop(items);
        assert_eq!(5, *flag.borrow());
    }

    #[test]
    fn take_releases_nothing() {
        let flag = DropFlag::new(RefCell::new(0));
        let mut items = droppables(3, &flag);
        let moved = items.take();
        std::mem::drop(items);
        assert_eq!(0, *flag.borrow());
        std::mem::drop(moved);
        assert_eq!(3, *flag.borrow());
    }
}
