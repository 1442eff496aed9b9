//! Operand synthesis
//!
//! Numbers are either drawn uniformly over every value of a given width,
//! or assembled digit by digit from a restricted pool. Pooled numbers are
//! deliberately not uniform over the range: a {6,7,8,9} pool only ever
//! yields operands made of those digits.

use rand::seq::SliceRandom;
use rand::Rng;

/// Term count range for endless addition
pub const ENDLESS_ADD_TERMS: std::ops::RangeInclusive<usize> = 3..=6;

/// Operand widths for endless addition terms
pub const ENDLESS_ADD_WIDTHS: [u32; 3] = [2, 3, 4];

/// Operand widths for endless subtraction
pub const ENDLESS_SUB_WIDTHS: [u32; 2] = [3, 4];

/// Widest operand that still fits an i64 sum of several terms
const MAX_DIGITS: u32 = 17;

/// Generate a number with exactly `digits` digits.
///
/// With a non-empty pool the leading digit comes from the pool's nonzero
/// members (or is 1 when the pool holds only zeros) and every further digit
/// from the whole pool. Without a pool the value is uniform over
/// `[10^(digits-1), 10^digits - 1]`. Pool entries above 9 are ignored.
pub fn generate_number<R: Rng + ?Sized>(rng: &mut R, digits: u32, pool: Option<&[u8]>) -> i64 {
    let digits = digits.clamp(1, MAX_DIGITS);

    let pool: Vec<u8> = pool
        .map(|p| p.iter().copied().filter(|d| *d <= 9).collect())
        .unwrap_or_default();

    if pool.is_empty() {
        let start = 10_i64.pow(digits - 1);
        let end = 10_i64.pow(digits) - 1;
        return rng.gen_range(start..=end);
    }

    let leading: Vec<u8> = pool.iter().copied().filter(|d| *d != 0).collect();
    let first = leading.choose(rng).copied().unwrap_or(1);

    let mut value = i64::from(first);
    for _ in 1..digits {
        let digit = pool.choose(rng).copied().unwrap_or(0);
        value = value * 10 + i64::from(digit);
    }
    value
}

/// Put the larger operand first so the difference is never negative
pub fn ordered_pair(a: i64, b: i64) -> [i64; 2] {
    [a.max(b), a.min(b)]
}

/// Endless addition: 3 to 6 terms, each 2 to 4 digits wide
pub fn endless_addition_operands<R: Rng + ?Sized>(rng: &mut R) -> Vec<i64> {
    let terms = rng.gen_range(ENDLESS_ADD_TERMS);
    (0..terms)
        .map(|_| {
            let width = *ENDLESS_ADD_WIDTHS.choose(rng).unwrap_or(&2);
            generate_number(rng, width, None)
        })
        .collect()
}

/// Endless subtraction: two operands sharing a width of 3 or 4 digits
pub fn endless_subtraction_operands<R: Rng + ?Sized>(rng: &mut R) -> Vec<i64> {
    let width = *ENDLESS_SUB_WIDTHS.choose(rng).unwrap_or(&3);
    let a = generate_number(rng, width, None);
    let b = generate_number(rng, width, None);
    ordered_pair(a, b).to_vec()
}

/// Count the decimal digits of a non-negative number
pub fn digit_count(value: i64) -> u32 {
    value.unsigned_abs().checked_ilog10().map_or(1, |log| log + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn digits_of(value: i64) -> Vec<u8> {
        value
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect()
    }

    #[test]
    fn test_unpooled_numbers_have_exact_width() {
        let mut rng = StdRng::seed_from_u64(7);
        for digits in 1..=6 {
            let low = 10_i64.pow(digits - 1);
            let high = 10_i64.pow(digits) - 1;
            for _ in 0..500 {
                let n = generate_number(&mut rng, digits, None);
                assert!((low..=high).contains(&n), "{} outside {}..={}", n, low, high);
            }
        }
    }

    #[test]
    fn test_pooled_digits_stay_in_pool() {
        let mut rng = StdRng::seed_from_u64(11);
        let pools: [&[u8]; 4] = [&[0, 1, 2, 3, 4, 5], &[6, 7, 8, 9], &[0, 9], &[3]];
        for pool in pools {
            for digits in 1..=4 {
                for _ in 0..300 {
                    let n = generate_number(&mut rng, digits, Some(pool));
                    let ds = digits_of(n);
                    assert_eq!(ds.len(), digits as usize);
                    assert_ne!(ds[0], 0, "leading zero in {}", n);
                    assert!(ds.iter().all(|d| pool.contains(d)), "{} uses digit outside {:?}", n, pool);
                }
            }
        }
    }

    #[test]
    fn test_zero_only_pool_leads_with_one() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            assert_eq!(generate_number(&mut rng, 3, Some(&[0])), 100);
        }
    }

    #[test]
    fn test_empty_pool_behaves_like_no_pool() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..200 {
            let n = generate_number(&mut rng, 2, Some(&[]));
            assert!((10..=99).contains(&n));
        }
    }

    #[test]
    fn test_zero_digits_treated_as_one() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let n = generate_number(&mut rng, 0, None);
            assert!((1..=9).contains(&n));
        }
    }

    #[test]
    fn test_carry_pool_covers_its_digits() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut seen = [false; 10];
        for _ in 0..500 {
            for d in digits_of(generate_number(&mut rng, 2, Some(&[6, 7, 8, 9]))) {
                seen[d as usize] = true;
            }
        }
        assert_eq!(seen, [false, false, false, false, false, false, true, true, true, true]);
    }

    #[test]
    fn test_endless_addition_shape() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..500 {
            let ops = endless_addition_operands(&mut rng);
            assert!(ENDLESS_ADD_TERMS.contains(&ops.len()));
            assert!(ops.iter().all(|n| (10..=9999).contains(n)));
        }
    }

    #[test]
    fn test_endless_subtraction_shape() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..500 {
            let ops = endless_subtraction_operands(&mut rng);
            assert_eq!(ops.len(), 2);
            assert!(ops[0] >= ops[1]);
            assert_eq!(digit_count(ops[0]), digit_count(ops[1]));
            assert!((100..=9999).contains(&ops[0]));
        }
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(9999), 4);
    }
}
