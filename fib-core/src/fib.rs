use crate::error::BenchError;

/// Input used when the caller does not pick one.
pub const DEFAULT_INPUT: u32 = 35;

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_INPUT: u32 = 93;

/// Computes the n-th Fibonacci number by naive double recursion.
///
/// No memoization and no iterative fallback: the call tree grows as
/// `O(2^n)` and the stack as `O(n)`. Inputs above [`MAX_INPUT`] overflow.
pub fn fib(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }
    fib(n - 1) + fib(n - 2)
}

pub fn check_input(n: u32) -> Result<u32, BenchError> {
    if n > MAX_INPUT {
        return Err(BenchError::InputTooLarge { n, max: MAX_INPUT });
    }
    Ok(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_cases() {
        assert_eq!(fib(0), 0);
        assert_eq!(fib(1), 1);
    }

    #[test]
    fn known_values() {
        assert_eq!(fib(2), 1);
        assert_eq!(fib(10), 55);
        assert_eq!(fib(20), 6765);
        assert_eq!(fib(DEFAULT_INPUT), 9_227_465);
    }

    #[test]
    fn check_input_accepts_supported_range() {
        assert_eq!(check_input(0).unwrap(), 0);
        assert_eq!(check_input(MAX_INPUT).unwrap(), MAX_INPUT);
    }

    #[test]
    fn check_input_rejects_overflowing_index() {
        let err = check_input(MAX_INPUT + 1).unwrap_err();
        assert!(matches!(err, BenchError::InputTooLarge { n: 94, max: 93 }));
        assert_eq!(
            err.to_string(),
            "input n=94 exceeds the largest supported value 93"
        );
    }
}
