//! Trial-division reference
//!
//! O(√p) per candidate. Only used to cross-check the sieve.

/// Whether `p` has no divisor other than 1 and itself.
pub fn is_prime(p: u64) -> bool {
    if p < 2 {
        return false;
    }

    let mut divisor = 2u64;
    while divisor <= p / divisor {
        if p % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// All primes in `[2, n]` by testing each candidate, ascending.
pub fn primes_by_trial_division(n: u64) -> Vec<u64> {
    (2..=n).filter(|&candidate| is_prime(candidate)).collect()
}
