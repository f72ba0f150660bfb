use rand::Rng;
use rand::distr::Alphanumeric;

/// The 62 characters a chunk may contain: the set [`Alphanumeric`] samples from.
pub const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Builds `length` characters, each drawn uniformly and independently from
/// [`ALPHABET`].
///
/// # Examples
///
/// ```
/// use create_large_file::generator::{ALPHABET, generate_chunk};
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
///
/// let mut rng = SmallRng::seed_from_u64(7);
/// let chunk = generate_chunk(&mut rng, 64);
/// assert_eq!(chunk.len(), 64);
/// assert!(chunk.iter().all(|byte| ALPHABET.contains(byte)));
/// ```
pub fn generate_chunk<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Vec<u8> {
    rng.sample_iter(Alphanumeric).take(length).collect()
}
