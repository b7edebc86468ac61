use crate::{Array, Error, ErrorKind, Result};
use std::ffi::CStr;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign};

/// Length of `bytes` up to the first nul, or of the whole slice.
fn c_len(bytes: &[u8]) -> usize {
    bytes.iter().position(|b| *b == 0).unwrap_or(bytes.len())
}

/// Nul-terminated byte string with a fixed capacity.
///
/// The buffer is an [`Array<u8>`] one byte longer than the capacity, and its
/// last byte is always `0`. The length is not stored: it is the position of
/// the first `0` within the capacity.
///
/// Input that does not fit is truncated, never written past the buffer.
/// Appending with `+=` does not grow the buffer either; bytes beyond the
/// capacity are dropped. Use `+` to build a new, larger string.
///
/// Content is treated as bytes. `Display` renders it as lossy UTF-8.
#[derive(Clone)]
pub struct ZStr {
    buf: Array<u8>,
}

impl ZStr {
    pub fn new() -> ZStr {
        ZStr::with_capacity(0)
    }

    /// Creates an empty string able to hold `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> ZStr {
        ZStr { buf: Array::with_len(capacity.saturating_add(1)) }
    }

    /// Creates a string of capacity `len` from the first `len` bytes of
    /// `src`. Reads stop at the end of `src`; unfilled bytes stay `0`.
    pub fn from_bytes_with_len(src: &[u8], len: usize) -> ZStr {
        let mut s = ZStr::with_capacity(len);
        let n = len.min(src.len());
        s.buf.as_mut_slice()[..n].copy_from_slice(&src[..n]);
        s.terminate();
        s
    }

    /// Creates a string from `src` up to its first `0` byte.
    pub fn from_c_bytes(src: &[u8]) -> ZStr {
        let len = c_len(src);
        ZStr::from_bytes_with_len(src, len)
    }

    /// Creates a string of `count` copies of `byte`.
    pub fn filled(count: usize, byte: u8) -> ZStr {
        let mut s = ZStr::with_capacity(count);
        for b in s.buf.as_mut_slice()[..count].iter_mut() {
            *b = byte;
        }
        s.terminate();
        s
    }

    /// Creates a string holding `prefix` followed by `s`.
    pub fn prefixed(prefix: &str, s: &ZStr) -> ZStr {
        ZStr::joined(&prefix.as_bytes()[..c_len(prefix.as_bytes())], s.as_bytes())
    }

    /// Formats an unsigned integer in decimal.
    pub fn from_unsigned(value: u64) -> ZStr {
        let mut digits = [0u8; 20];
        let mut start = digits.len();
        let mut rest = value;
        loop {
            start -= 1;
            digits[start] = b'0' + (rest % 10) as u8;
            rest /= 10;
            if rest == 0 {
                break;
            }
        }
        ZStr::from_bytes_with_len(&digits[start..], digits.len() - start)
    }

    /// Formats a signed integer in decimal.
    pub fn from_signed(value: i64) -> ZStr {
        let digits = ZStr::from_unsigned(value.unsigned_abs());
        if value < 0 {
            ZStr::prefixed("-", &digits)
        } else {
            digits
        }
    }

    fn joined(left: &[u8], right: &[u8]) -> ZStr {
        let mut s = ZStr::with_capacity(left.len() + right.len());
        let (head, tail) = s.buf.as_mut_slice().split_at_mut(left.len());
        head.copy_from_slice(left);
        tail[..right.len()].copy_from_slice(right);
        s.terminate();
        s
    }

    fn terminate(&mut self) {
        if let Some(last) = self.buf.as_mut_slice().last_mut() {
            *last = 0;
        }
    }

    /// Number of content bytes the buffer can hold, excluding the terminator.
    pub fn capacity(&self) -> usize {
        self.buf.len().saturating_sub(1)
    }

    /// Scans for the terminator; `O(capacity)`.
    pub fn len(&self) -> usize {
        c_len(&self.buf.as_slice()[..self.capacity()])
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes that `+=` can still append.
    pub fn remaining(&self) -> usize {
        self.capacity() - self.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf.as_slice()[..self.len()]
    }

    /// Content followed by its terminator.
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        if self.buf.is_empty() {
            return b"\0";
        }
        &self.buf.as_slice()[..=self.len()]
    }

    /// Content as a C string; empty if the buffer was released.
    pub fn c_str(&self) -> &CStr {
        CStr::from_bytes_with_nul(self.as_bytes_with_nul()).unwrap_or_default()
    }

    /// Returns the byte at `index`, or `IndexOutOfRange` past the length.
    pub fn at(&self, index: usize) -> Result<u8> {
        self.as_bytes().get(index).copied().ok_or_else(|| {
            Error::new(ErrorKind::IndexOutOfRange, "index out of range in string character access")
        })
    }

    /// Appends as much of `bytes` as fits in the remaining capacity and
    /// returns how many bytes were written.
    pub fn append(&mut self, bytes: &[u8]) -> usize {
        let len = self.len();
        let bytes = &bytes[..c_len(bytes)];
        let n = bytes.len().min(self.capacity() - len);
        let buf = self.buf.as_mut_slice();
        buf[len..len + n].copy_from_slice(&bytes[..n]);
        if let Some(b) = buf.get_mut(len + n) {
            *b = 0;
        }
        self.terminate();
        n
    }

    /// Releases the buffer; the string keeps no storage afterwards.
    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Moves the buffer into a new string, leaving this one without storage.
    pub fn take(&mut self) -> ZStr {
        ZStr { buf: self.buf.take() }
    }
}

impl Default for ZStr {
    fn default() -> Self {
        ZStr::new()
    }
}

impl From<&str> for ZStr {
    fn from(value: &str) -> Self {
        ZStr::from_c_bytes(value.as_bytes())
    }
}

impl From<&String> for ZStr {
    fn from(value: &String) -> Self {
        ZStr::from(value.as_str())
    }
}

impl From<&CStr> for ZStr {
    fn from(value: &CStr) -> Self {
        ZStr::from_c_bytes(value.to_bytes())
    }
}

impl From<u64> for ZStr {
    fn from(value: u64) -> Self {
        ZStr::from_unsigned(value)
    }
}

impl From<usize> for ZStr {
    fn from(value: usize) -> Self {
        ZStr::from_unsigned(value as u64)
    }
}

impl From<i64> for ZStr {
    fn from(value: i64) -> Self {
        ZStr::from_signed(value)
    }
}

impl PartialEq for ZStr {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ZStr {}

impl PartialEq<str> for ZStr {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == &other.as_bytes()[..c_len(other.as_bytes())]
    }
}

impl PartialEq<&str> for ZStr {
    fn eq(&self, other: &&str) -> bool {
        self.eq(*other)
    }
}

impl PartialEq<ZStr> for str {
    fn eq(&self, other: &ZStr) -> bool {
        other.eq(self)
    }
}

impl PartialEq<ZStr> for &str {
    fn eq(&self, other: &ZStr) -> bool {
        other.eq(*self)
    }
}

impl Hash for ZStr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state)
    }
}

impl Debug for ZStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&String::from_utf8_lossy(self.as_bytes()), f)
    }
}

impl Display for ZStr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&String::from_utf8_lossy(self.as_bytes()), f)
    }
}

impl Add<&ZStr> for &ZStr {
    type Output = ZStr;

    fn add(self, other: &ZStr) -> ZStr {
        ZStr::joined(self.as_bytes(), other.as_bytes())
    }
}

impl Add<&str> for &ZStr {
    type Output = ZStr;

    fn add(self, other: &str) -> ZStr {
        ZStr::joined(self.as_bytes(), &other.as_bytes()[..c_len(other.as_bytes())])
    }
}

impl Add<&ZStr> for ZStr {
    type Output = ZStr;

    fn add(self, other: &ZStr) -> ZStr {
        &self + other
    }
}

impl Add<&str> for ZStr {
    type Output = ZStr;

    fn add(self, other: &str) -> ZStr {
        &self + other
    }
}

/// Appends within the current capacity; overflow is dropped.
impl AddAssign<&ZStr> for ZStr {
    fn add_assign(&mut self, other: &ZStr) {
        self.append(other.as_bytes());
    }
}

impl AddAssign<&str> for ZStr {
    fn add_assign(&mut self, other: &str) {
        self.append(other.as_bytes());
    }
}
