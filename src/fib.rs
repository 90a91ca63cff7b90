//! The recurrence `fib(0) = 0, fib(1) = 1, fib(n) = fib(n - 1) + fib(n - 2)`.

/// Naive double recursion, no memoization. Exponential in `n`.
///
/// Any `n < 2` is returned unchanged, so negative input yields itself.
pub fn fibonacci(n: i64) -> i64 {
    if n < 2 {
        return n;
    }
    fibonacci(n - 1) + fibonacci(n - 2)
}

/// Same values as [`fibonacci`] in linear time. Overflows past `n = 92`.
pub fn fibonacci_tail(n: i64) -> i64 {
    if n < 2 { n } else { fib_tail(n - 1, 0, 1) }
}

fn fib_tail(n: i64, a: i64, b: i64) -> i64 {
    if n == 0 { b } else { fib_tail(n - 1, b, a + b) }
}
