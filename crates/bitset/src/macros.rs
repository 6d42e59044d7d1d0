/// Cast a bit index to a usize using TryInto.
///
/// Evaluates to `Result<usize, Error>`. An index that does not fit in a usize (negative, or
/// wider than the target) can never address a bit, so it is reported as out of range with the
/// index saturated to `usize::MAX`.
#[macro_export]
macro_rules! cast_index {
    ($e:expr, $size:expr) => {{
        match <_ as TryInto<usize>>::try_into($e) {
            Ok(index) => Ok(index),
            Err(_) => Err($crate::Error::OutOfRange {
                index: usize::MAX,
                size: $size,
            }),
        }
    }};
}
