use crate::core::library::{LibraryError, LibraryResult};

pub mod command;

/// Computes `n!` by recursive reduction: `0! = 1! = 1`, `n! = n * (n - 1)!`.
///
/// Negative input is rejected with [`LibraryError::InvalidArgument`]. The
/// result is a `u128`, which holds every factorial up to [`MAX_FACTORIAL_INPUT`];
/// anything larger fails with [`LibraryError::Overflow`] instead of wrapping.
pub fn factorial(n: i64) -> LibraryResult<u128> {
    if n < 0 {
        return Err(LibraryError::invalid_argument(
            format!("factorial is undefined for negative input {}", n).as_str(), Some(n.to_string())));
    }
    if n > MAX_FACTORIAL_INPUT {
        return Err(LibraryError::overflow(
            format!("factorial of {} does not fit in 128 bits", n).as_str()));
    }
    reduce(n as u128)
}

/// Largest input whose factorial fits in a `u128`.
pub const MAX_FACTORIAL_INPUT: i64 = 34;

fn reduce(n: u128) -> LibraryResult<u128> {
    if n <= 1 {
        return Ok(1);
    }
    let rest = reduce(n - 1)?;
    n.checked_mul(rest).ok_or_else(|| LibraryError::overflow(
        format!("factorial of {} does not fit in 128 bits", n).as_str()))
}
