//! Prime sizing and the growth policy for the bucket array.

/// Multiplier applied to the current capacity when a chain grows too deep.
pub const GROWTH_FACTOR: f64 = 1.5;

/// Trial division by every candidate in `2..=isqrt(n)`.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2usize;
    while d <= n / d {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Smallest prime that is `>= n`. Inputs below 2 yield 2 so a bucket array
/// is never empty.
///
/// # Panics
///
/// Panics with "capacity overflow" when no prime `>= n` fits in `usize`.
pub fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate = candidate
            .checked_add(1)
            .unwrap_or_else(|| capacity_overflow());
    }
    candidate
}

#[cold]
#[track_caller]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

/// Capacity to grow to from `size`: `size * 1.5` (truncated), rounded up to
/// the next prime. Always strictly larger than `size` for `size >= 2`.
pub fn grown_size(size: usize) -> usize {
    next_prime((size as f64 * GROWTH_FACTOR) as usize)
}

/// Growth trigger: a chain already `depth` entries long is too deep for a
/// table of `size` buckets once it exceeds `log2(size)`.
#[inline]
pub fn exceeds_depth(depth: usize, size: usize) -> bool {
    depth as f64 > (size as f64).log2()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes() {
        let primes: Vec<usize> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn squares_of_primes_are_composite() {
        for p in [2usize, 3, 5, 7, 11, 101] {
            assert!(!is_prime(p * p), "{} should be composite", p * p);
        }
    }

    #[test]
    fn next_prime_rounds_up() {
        assert_eq!(next_prime(0), 2);
        assert_eq!(next_prime(1), 2);
        assert_eq!(next_prime(2), 2);
        assert_eq!(next_prime(3), 3);
        assert_eq!(next_prime(4), 5);
        assert_eq!(next_prime(10), 11);
        assert_eq!(next_prime(16), 17);
        assert_eq!(next_prime(90), 97);
        assert_eq!(next_prime(7920), 7927);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn next_prime_past_usize_max_panics() {
        // usize::MAX is divisible by 3, and nothing larger fits.
        next_prime(usize::MAX);
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn next_prime_below_usize_max_panics_instead_of_wrapping() {
        // usize::MAX - 1 is even and usize::MAX is composite.
        next_prime(usize::MAX - 1);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn next_prime_above_u32_range() {
        // 2^32 + 15 is the first prime past 2^32.
        assert_eq!(next_prime(u32::MAX as usize), 4_294_967_311);
    }

    #[test]
    fn growth_sequence_from_eleven() {
        // 11 * 1.5 = 16 -> 17; 17 * 1.5 = 25 -> 29; 29 * 1.5 = 43 -> 43
        assert_eq!(grown_size(11), 17);
        assert_eq!(grown_size(17), 29);
        assert_eq!(grown_size(29), 43);
    }

    #[test]
    fn growth_is_strict_from_smallest_capacity() {
        let mut size = 2;
        for _ in 0..40 {
            let next = grown_size(size);
            assert!(next > size);
            assert!(is_prime(next));
            size = next;
        }
    }

    #[test]
    fn depth_threshold_tracks_log2() {
        // log2(11) ~= 3.46
        assert!(!exceeds_depth(3, 11));
        assert!(exceeds_depth(4, 11));
        // log2(2) == 1
        assert!(!exceeds_depth(1, 2));
        assert!(exceeds_depth(2, 2));
        assert!(!exceeds_depth(0, 2));
    }
}
