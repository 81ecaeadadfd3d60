use std::collections::HashMap;

/// Incremental sieve of Eratosthenes, emitting primes in ascending order.
///
/// Each discovered composite is mapped to the primes witnessing it; a prime
/// q registers q*q as its first witnessed multiple, so the map never runs
/// ahead of the scan. State is local to one iterator and discarded with it.
#[derive(Debug, Clone)]
pub struct PrimeSieve {
    composites: HashMap<u64, Vec<u64>>,
    q: u64,
}

impl PrimeSieve {
    pub fn new() -> Self {
        PrimeSieve {
            composites: HashMap::new(),
            q: 2,
        }
    }
}

impl Default for PrimeSieve {
    fn default() -> Self {
        return Self::new();
    }
}

impl Iterator for PrimeSieve {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            let q = self.q;
            self.q += 1;
            match self.composites.remove(&q) {
                None => {
                    // q is a new prime; its first unmarked multiple is q*q.
                    self.composites.insert(q * q, vec![q]);
                    return Some(q);
                }
                Some(witnesses) => {
                    // q is composite; advance each witness to its next multiple.
                    for p in witnesses {
                        self.composites.entry(p + q).or_default().push(p);
                    }
                }
            }
        }
    }
}

/// First `n` primes, ascending, starting at 2.
pub fn first_n_primes(n: usize) -> Vec<u64> {
    return PrimeSieve::new().take(n).collect();
}
