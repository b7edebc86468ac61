use crate::{Error, ErrorKind};

/// Outcome of a fallible operation: a value or an [`Error`].
///
/// The state must be inspected (`match`, `?`, `ok()`, `err()`) before the
/// value can be reached, so there is no way to read the wrong variant.
pub type Result<T> = std::result::Result<T, Error>;

/// Outcome that borrows its value from a container instead of owning it.
///
/// The borrow never extends the lifetime of the referenced object; the
/// compiler rejects any use after the container is gone.
pub type ResultRef<'a, T> = Result<&'a T>;

/// Mutable counterpart of [`ResultRef`].
pub type ResultMut<'a, T> = Result<&'a mut T>;

/// Adds context to the error of a [`Result`] while forwarding it upward.
pub trait ResultExt<T> {
    /// Prefixes the inner message with `context`, keeping the kind.
    fn context(self, context: &str) -> Result<T>;

    /// Prefixes the inner message with `context` and re-categorises the
    /// error as `kind`.
    fn kind_context(self, kind: ErrorKind, context: &str) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: &str) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn kind_context(self, kind: ErrorKind, context: &str) -> Result<T> {
        self.map_err(|e| e.with_kind_and_context(kind, context))
    }
}

#[cfg(test)]
mod result_tests {
    use crate::{Array, Error, ErrorKind, Result, ResultExt, ZStr};

    fn checked_div(a: i64, b: i64) -> Result<i64> {
        if b == 0 {
            return Err(Error::new(ErrorKind::ZeroDivision, "division by zero"));
        }
        Ok(a / b)
    }

    fn average(items: &Array<i64>) -> Result<i64> {
        items.at(0).context("could not read first sample")?;
        let sum: i64 = items.iter().sum();
        checked_div(sum, items.len() as i64).context("could not average samples")
    }

    #[test]
    fn state_is_exclusive() {
        let ok: Result<i64> = Ok(7);
        assert!(ok.is_ok());
        assert!(!ok.is_err());

        let failed: Result<i64> = Err(Error::new(ErrorKind::Failure, "boom"));
        assert!(failed.is_err());
        assert!(!failed.is_ok());
    }

    #[test]
    fn errors_propagate_with_context() {
        let samples = Array::from([2i64, 4, 6]);
        assert_eq!(4, average(&samples).unwrap());

        let empty = Array::<i64>::new();
        let error = average(&empty).unwrap_err();
        assert_eq!(ErrorKind::EmptyArray, error.kind());
        assert_eq!(
            "could not read first sample: could not access data of an empty array",
            error.message()
        );
    }

    #[test]
    fn kind_context_recategorizes() {
        let result: Result<()> = Err(Error::new(ErrorKind::OutOfRange, "speed 12 outside 0..10"));
        let error = result
            .kind_context(ErrorKind::InitFailed, &(ZStr::from("motor ") + &ZStr::from(3usize)).to_string())
            .unwrap_err();
        assert_eq!(ErrorKind::InitFailed, error.kind());
        assert_eq!("motor 3: speed 12 outside 0..10", error.message());
    }

    #[test]
    fn borrowed_result_points_into_container() {
        let mut items = Array::from([1, 2, 3]);
        {
            let second = items.at(1).unwrap();
            assert_eq!(2, *second);
        }
        *items.at_mut(1).unwrap() = 20;
        assert_eq!(20, items[1]);
    }
}
