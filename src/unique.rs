use std::fmt::{self, Debug};
use std::marker::PhantomData;

/// Decides what happens to a value when its [`Unique`] owner lets go of it.
pub trait Release<T: ?Sized> {
    fn release(value: Box<T>);
}

/// Default policy: drop the value and free its allocation.
pub struct DropRelease;

impl<T: ?Sized> Release<T> for DropRelease {
    #[inline(always)]
    fn release(value: Box<T>) {
        std::mem::drop(value);
    }
}

/// Single-owner heap cell, possibly null.
///
/// Not `Clone`: ownership is only ever transferred, either by a Rust move or
/// by [`Unique::take`], which leaves the source null. Whenever the cell gives
/// up a value it still owns (on [`Unique::reset`] or drop), the value goes
/// through the release policy `R`, exactly once.
pub struct Unique<T: ?Sized, R: Release<T> = DropRelease> {
    value: Option<Box<T>>,
    _release: PhantomData<R>,
}

impl<T: ?Sized, R: Release<T>> Unique<T, R> {
    pub const fn null() -> Self {
        Unique { value: None, _release: PhantomData }
    }

    /// Takes ownership of an existing allocation.
    pub fn from_box(value: Box<T>) -> Self {
        Unique { value: Some(value), _release: PhantomData }
    }

    #[inline(always)]
    pub fn is_null(&self) -> bool {
        self.value.is_none()
    }

    /// `true` when a value is owned.
    #[inline(always)]
    pub fn is_some(&self) -> bool {
        self.value.is_some()
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_deref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.value.as_deref_mut()
    }

    /// Moves ownership into a new cell, leaving this one null.
    pub fn take(&mut self) -> Self {
        Unique { value: self.value.take(), _release: PhantomData }
    }

    /// Releases the current value, if any, and adopts `value`.
    pub fn reset(&mut self, value: Option<Box<T>>) {
        if let Some(old) = std::mem::replace(&mut self.value, value) {
            trace!("release unique value");
            R::release(old);
        }
    }

    /// Gives up ownership without releasing; the caller now owns the value.
    pub fn release(&mut self) -> Option<Box<T>> {
        self.value.take()
    }
}

impl<T, R: Release<T>> Unique<T, R> {
    /// Moves `value` into a new heap allocation.
    pub fn new(value: T) -> Self {
        Unique::from_box(Box::new(value))
    }

    /// Stores `value`, with two distinct behaviours:
    ///
    /// - null cell: allocates a new box for `value`;
    /// - owning cell: overwrites the pointee in place. No allocation happens
    ///   and the old pointee is dropped directly, without the release policy,
    ///   because the allocation itself is kept.
    pub fn assign(&mut self, value: T) {
        match &mut self.value {
            Some(current) => **current = value,
            None => self.value = Some(Box::new(value)),
        }
    }
}

impl<T: ?Sized, R: Release<T>> Drop for Unique<T, R> {
    fn drop(&mut self) {
        self.reset(None);
    }
}

impl<T: ?Sized, R: Release<T>> Default for Unique<T, R> {
    fn default() -> Self {
        Unique::null()
    }
}

impl<T: ?Sized, R: Release<T>> From<Box<T>> for Unique<T, R> {
    fn from(value: Box<T>) -> Self {
        Unique::from_box(value)
    }
}

impl<T: ?Sized + Debug, R: Release<T>> Debug for Unique<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Unique").field(&value).finish(),
            None => f.write_str("Unique(null)"),
        }
    }
}
