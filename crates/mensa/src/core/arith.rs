//! Low-level arithmetic primitives.
//!
//! These are the only code paths the synthesizer and the oracle share. They
//! know nothing about domains or rule parameters: each is a plain integer
//! function that both sides call with their own independently derived
//! arguments.

/// Digit alphabet for positional notation up to base 36.
pub const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Non-negative residue of `a` modulo `m`.
///
/// Unlike `%`, the result is always in `[0, m)` even for negative `a`.
///
/// # Example
///
/// ```
/// use mensa::arith::modulo;
///
/// assert_eq!(modulo(7, 4), 3);
/// assert_eq!(modulo(-26, 4), 2);
/// assert_eq!(modulo(-4, 4), 0);
/// ```
#[inline]
#[must_use]
pub const fn modulo(a: i64, m: i64) -> i64 {
    a.rem_euclid(m)
}

/// Small primes whose absence as divisors makes a number "prime-like".
pub const PRIME_LIKE_SIEVE: [i64; 4] = [2, 3, 5, 7];

/// Returns true when `n` has no divisor in {2, 3, 5, 7}.
///
/// Equivalently, `n` is coprime to 210. The primes 2, 3, 5 and 7 themselves
/// are *not* prime-like.
///
/// # Example
///
/// ```
/// use mensa::arith::is_prime_like;
///
/// assert!(is_prime_like(11));
/// assert!(is_prime_like(121)); // 11², still coprime to 210
/// assert!(!is_prime_like(7));
/// assert!(!is_prime_like(15));
/// ```
#[must_use]
pub const fn is_prime_like(n: i64) -> bool {
    let mut i = 0;
    while i < PRIME_LIKE_SIEVE.len() {
        if n % PRIME_LIKE_SIEVE[i] == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Trial-division primality test.
///
/// # Example
///
/// ```
/// use mensa::arith::is_prime;
///
/// assert!(!is_prime(1));
/// assert!(is_prime(2));
/// assert!(is_prime(97));
/// assert!(!is_prime(91)); // 7 × 13
/// ```
#[must_use]
pub const fn is_prime(n: u32) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut f = 3;
    while f <= n / f {
        if n % f == 0 {
            return false;
        }
        f += 2;
    }
    true
}

/// Returns true when the decimal notation of `n` contains `digit`.
///
/// # Example
///
/// ```
/// use mensa::arith::contains_digit;
///
/// assert!(contains_digit(100, 0));
/// assert!(contains_digit(37, 7));
/// assert!(!contains_digit(37, 5));
/// assert!(contains_digit(0, 0));
/// ```
#[must_use]
pub const fn contains_digit(n: u32, digit: u32) -> bool {
    let mut x = n;
    loop {
        if x % 10 == digit {
            return true;
        }
        x /= 10;
        if x == 0 {
            return false;
        }
    }
}

/// Renders `n` in positional notation with the given base (2..=36).
///
/// Digits above 9 use upper-case letters. Bases outside `2..=36` are clamped
/// into that range.
///
/// # Example
///
/// ```
/// use mensa::arith::to_base;
///
/// assert_eq!(to_base(255, 16), "FF");
/// assert_eq!(to_base(0, 7), "0");
/// assert_eq!(to_base(234, 5), "1414");
/// ```
#[must_use]
pub fn to_base(n: u64, base: u32) -> String {
    let base = u64::from(base.clamp(2, 36));
    if n == 0 {
        return "0".to_owned();
    }
    let mut out = Vec::new();
    let mut x = n;
    while x > 0 {
        // x % base < 36 so the index is in bounds.
        out.push(DIGITS[(x % base) as usize]);
        x /= base;
    }
    out.reverse();
    out.into_iter().map(char::from).collect()
}

/// Maps an alphabet position to its upper-case letter, reducing mod 26.
///
/// # Example
///
/// ```
/// use mensa::arith::letter;
///
/// assert_eq!(letter(0), 'A');
/// assert_eq!(letter(25), 'Z');
/// assert_eq!(letter(27), 'B');
/// ```
#[inline]
#[must_use]
pub const fn letter(position: i64) -> char {
    // modulo(_, 26) is in [0, 26) so the cast cannot truncate.
    (b'A' + modulo(position, 26) as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modulo_is_non_negative() {
        for a in -200..200 {
            for m in 1..30 {
                let r = modulo(a, m);
                assert!((0..m).contains(&r), "modulo({a}, {m}) = {r}");
                assert_eq!((a - r) % m, 0);
            }
        }
    }

    #[test]
    fn prime_like_is_coprime_to_210() {
        fn gcd(a: i64, b: i64) -> i64 {
            if b == 0 {
                a
            } else {
                gcd(b, a % b)
            }
        }
        for n in 1..=2000 {
            assert_eq!(is_prime_like(n), gcd(n, 210) == 1, "n = {n}");
        }
    }

    #[test]
    fn primes_below_100() {
        let primes: Vec<u32> = (1..=100).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes.len(), 25);
        assert_eq!(primes.first(), Some(&2));
        assert_eq!(primes.last(), Some(&97));
    }

    #[test]
    fn contains_digit_matches_string_search() {
        for n in 0..=1000u32 {
            let text = n.to_string();
            for d in 0..10u32 {
                let expected = text.contains(char::from(b'0' + d as u8));
                assert_eq!(contains_digit(n, d), expected, "n = {n}, d = {d}");
            }
        }
    }

    #[test]
    fn to_base_round_trips_through_parse() {
        for base in 2..=36u32 {
            for n in [0u64, 1, 35, 36, 200, 17_317, 999_999] {
                let text = to_base(n, base);
                assert_eq!(u64::from_str_radix(&text, base), Ok(n), "base {base}");
            }
        }
    }

    #[test]
    fn letter_wraps() {
        assert_eq!(letter(-1), 'Z');
        assert_eq!(letter(13), 'N');
    }
}
