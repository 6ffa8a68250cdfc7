//! Define the [`HashFunction`] trait as well as standard hash functions.
use sha2::Digest;

/// Abstraction of hash function used to compute blank node signatures.
pub trait HashFunction {
    /// Output of the hash function; usually `[u8; N]`.
    type Output: AsRef<[u8]> + Copy + Eq + Ord + std::fmt::Debug;

    /// Start the computation of a hash
    fn initialize() -> Self;

    /// Update internal state by hashing `data`
    fn update(&mut self, data: impl AsRef<[u8]>);

    /// Return the hash
    fn finalize(self) -> Self::Output;
}

/// The [SHA-256](https://en.wikipedia.org/wiki/SHA-2) [`HashFunction`]
pub struct Sha256(sha2::Sha256);

impl HashFunction for Sha256 {
    type Output = [u8; 32];

    fn initialize() -> Self {
        Sha256(sha2::Sha256::new())
    }

    fn update(&mut self, data: impl AsRef<[u8]>) {
        self.0.update(data.as_ref());
    }

    fn finalize(self) -> Self::Output {
        self.0.finalize().into()
    }
}

/// The [SHA-384](https://en.wikipedia.org/wiki/SHA-2) [`HashFunction`]
pub struct Sha384(sha2::Sha384);

impl HashFunction for Sha384 {
    type Output = [u8; 48];

    fn initialize() -> Self {
        Sha384(sha2::Sha384::new())
    }

    fn update(&mut self, data: impl AsRef<[u8]>) {
        self.0.update(data.as_ref());
    }

    fn finalize(self) -> Self::Output {
        self.0.finalize().into()
    }
}

/// Lowercase hexadecimal representation of a hash.
pub(crate) fn hex(hash: &impl AsRef<[u8]>) -> String {
    hash.as_ref().iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn digest<H: HashFunction>(data: &str) -> String {
        let mut h = H::initialize();
        h.update(data);
        hex(&h.finalize())
    }

    #[test]
    fn sha256() {
        assert_eq!(
            digest::<Sha256>("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn sha384() {
        assert_eq!(
            digest::<Sha384>("abc"),
            "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed8086072ba1e7cc2358baeca134c825a7"
        );
    }

    #[test]
    fn incremental_update() {
        let mut h = Sha256::initialize();
        h.update("a");
        h.update(b"bc");
        assert_eq!(hex(&h.finalize()), digest::<Sha256>("abc"));
    }
}
