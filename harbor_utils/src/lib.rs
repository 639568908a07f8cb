mod macros;

/// Returns the version string used in the CLI and the HTTP user agent.
///
/// Falls back to the crate version if `HARBOR_VERSION` was not set at compile
/// time.
pub fn harbor_version() -> &'static str {
    option_env!("HARBOR_VERSION").unwrap_or(env!("CARGO_PKG_VERSION"))
}

/// Extension methods on [`Vec`] for order-preserving unique collections.
pub trait VecExt<T> {
    /// Removes the first element matching `pred` and returns it.
    fn remove_first(&mut self, pred: impl FnMut(&T) -> bool) -> Option<T>;
}

impl<T> VecExt<T> for Vec<T> {
    fn remove_first(&mut self, pred: impl FnMut(&T) -> bool) -> Option<T> {
        let idx = self.iter().position(pred)?;
        Some(self.remove(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_first() {
        let mut v = vec![1, 2, 3, 2];
        assert_eq!(v.remove_first(|&x| x == 2), Some(2));
        assert_eq!(v, [1, 3, 2]);
        assert_eq!(v.remove_first(|&x| x == 7), None);
        assert_eq!(v, [1, 3, 2]);
    }

    #[test]
    fn assert_matches_guard() {
        let x: Result<u8, ()> = Ok(3);
        crate::assert_matches!(x, Ok(n) if *n == 3);
    }
}
