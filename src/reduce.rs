//! Digit reduction with master number preservation

/// Numbers exempt from further reduction once reached.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// True if `n` is one of the master numbers 11, 22 or 33.
pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of the base-10 digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Collapse `n` to a single digit, halting early on a master number.
///
/// The master check runs both on entry and after every digit-sum step, so a
/// value like 29 stops at 11 (2+9) rather than collapsing to 2. The result is
/// always in {0, 1..9, 11, 22, 33}; `reduce(0)` is 0.
pub fn reduce(mut n: u32) -> u32 {
    if is_master(n) {
        return n;
    }
    while n > 9 {
        n = digit_sum(n);
        if is_master(n) {
            return n;
        }
    }
    n
}
