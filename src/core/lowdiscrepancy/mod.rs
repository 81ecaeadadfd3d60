pub mod primes;
pub mod radical_inverse;

pub use primes::*;
pub use radical_inverse::*;
