use md5::Digest;

pub trait Hasher: Send {
    fn update(&mut self, data: &[u8]);
    fn finalize(self) -> Vec<u8>;
}

/// MD5, the digest format published alongside firmware metadata.
pub struct Md5Hasher(md5::Md5);

impl Hasher for Md5Hasher {
    fn update(&mut self, data: &[u8]) { self.0.update(data); }
    fn finalize(self) -> Vec<u8> { self.0.finalize().to_vec() }
}

impl Default for Md5Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Md5Hasher {
    pub fn new() -> Self { Self(md5::Md5::new()) }

    pub fn digest(data: &[u8]) -> Vec<u8> { md5::Md5::digest(data).to_vec() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hasher() {
        let mut hasher = Md5Hasher::new();
        hasher.update(b"hello world");
        let hash = hasher.finalize();

        let expected = hex::decode("5eb63bbbe01eeed093cb22bb8f5acdc3").unwrap();
        assert_eq!(hash, expected);
    }

    #[test]
    fn test_incremental_equals_oneshot() {
        let data = vec![0xabu8; 4096];
        let mut hasher = Md5Hasher::new();
        for chunk in data.chunks(1024) {
            hasher.update(chunk);
        }
        assert_eq!(hasher.finalize(), Md5Hasher::digest(&data));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            hex::encode(Md5Hasher::new().finalize()),
            "d41d8cd98f00b204e9800998ecf8427e"
        );
    }
}
