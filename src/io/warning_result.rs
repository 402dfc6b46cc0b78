/// A value produced by a parsing step, together with the warnings the step raised.
///
/// Unlike `Result`, there is always a value; warnings never stop the reading process.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum WarningResult<T, W> {
    Ok(T),
    Warned(T, Vec<W>),
}

impl<T, W> WarningResult<T, W> {
    /// Builds a result from a value and a (possibly empty) list of warnings.
    pub fn new(value: T, warnings: Vec<W>) -> Self {
        if warnings.is_empty() {
            WarningResult::Ok(value)
        } else {
            WarningResult::Warned(value, warnings)
        }
    }

    /// Returns the value, passing the warnings (if any) to the callback.
    pub fn consume_warnings<F>(self, f: F) -> T
    where
        F: FnOnce(Vec<W>),
    {
        match self {
            WarningResult::Ok(t) => t,
            WarningResult::Warned(t, w) => {
                f(w);
                t
            }
        }
    }

    /// Applies a function to the value, keeping the warnings.
    pub fn map<U, F>(self, f: F) -> WarningResult<U, W>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            WarningResult::Ok(t) => WarningResult::Ok(f(t)),
            WarningResult::Warned(t, w) => WarningResult::Warned(f(t), w),
        }
    }

    /// Combines two results into a result for the couple of values.
    ///
    /// The warnings of `self` come first.
    pub fn zip<U>(self, other: WarningResult<U, W>) -> WarningResult<(T, U), W> {
        let (t, mut warnings) = self.into_parts();
        let (u, other_warnings) = other.into_parts();
        warnings.extend(other_warnings);
        WarningResult::new((t, u), warnings)
    }

    fn into_parts(self) -> (T, Vec<W>) {
        match self {
            WarningResult::Ok(t) => (t, vec![]),
            WarningResult::Warned(t, w) => (t, w),
        }
    }
}
