/// How far past the last bit an index may go before it is rejected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Bounds {
    /// Reject only `index > size`. The index `size` itself is accepted, but has no storage
    /// behind it: it always reads as `false` and writes to it are discarded.
    #[default]
    Inclusive,
    /// Reject `index >= size`.
    Exclusive,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub bounds: Bounds,
}

impl Bounds {
    pub(crate) fn rejects(self, index: usize, size: usize) -> bool {
        match self {
            Self::Inclusive => index > size,
            Self::Exclusive => index >= size,
        }
    }
}
