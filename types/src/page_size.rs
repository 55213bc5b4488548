use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{Error, Result, err};

/// Number of rows per table page. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct PageSize(NonZeroUsize);

impl PageSize {
    pub const DEFAULT: PageSize = PageSize(NonZeroUsize::MIN.saturating_add(9));

    pub fn new(size: usize) -> Result<Self> {
        NonZeroUsize::new(size)
            .map(Self)
            .ok_or_else(|| err!("page size must be greater than zero"))
    }

    /// Like [`PageSize::new`], but clamps to a minimum of one.
    pub fn clamped(size: usize) -> Self {
        Self(NonZeroUsize::new(size).unwrap_or(NonZeroUsize::MIN))
    }

    pub fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<usize> for PageSize {
    type Error = Error;

    fn try_from(size: usize) -> Result<Self> {
        Self::new(size)
    }
}

impl From<PageSize> for usize {
    fn from(size: PageSize) -> Self {
        size.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected_or_clamped() {
        assert!(PageSize::new(0).is_err());
        assert_eq!(PageSize::clamped(0).get(), 1);
        assert_eq!(PageSize::clamped(20).get(), 20);
    }

    #[test]
    fn default_is_ten() {
        assert_eq!(PageSize::default().get(), 10);
    }
}
