use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for an installation finding.
///
/// Identity fields:
/// - check_id
/// - code
/// - assembly name
/// - raw load path
pub fn fingerprint_for_component(check_id: &str, code: &str, name: &str, path: &str) -> String {
    let canonical = [check_id, code, name, path].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_distinguishes_paths() {
        let a = fingerprint_for_component("install.duplicate_harmony", "wrong_location", "0Harmony", "GameData/A");
        let b = fingerprint_for_component("install.duplicate_harmony", "wrong_location", "0Harmony", "GameData/A");
        let c = fingerprint_for_component("install.duplicate_harmony", "wrong_location", "0Harmony", "GameData/B");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
