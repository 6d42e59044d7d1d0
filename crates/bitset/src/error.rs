#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("index out of bounds: the size is {size} but the index is {index}")]
    OutOfRange { index: usize, size: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
