//! Identifier generation
//!
//! Numeric ids come from a monotonic clock-seeded counter so two entities
//! created within the same millisecond still get distinct ids. Prefixed ids
//! (`sub-…`, `cert-…`, `ach-…`) are built on top of it.

use chrono::Utc;
use uuid::Uuid;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Length of random tokens (competition and session user ids)
pub const TOKEN_LEN: usize = 9;

/// Monotonic id source
///
/// Each call returns `max(last + 1, now_ms)`, so ids stay time-ordered and
/// never repeat within one generator.
#[derive(Debug, Default, Clone)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Create a generator that has not issued any ids yet
    pub fn new() -> Self {
        Self::default()
    }

    /// Next numeric id
    pub fn next_id(&mut self) -> u64 {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        self.last = now.max(self.last + 1);
        self.last
    }

    /// Next id with a string prefix, e.g. `sub-1718000000000`
    pub fn next_prefixed(&mut self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_id())
    }
}

/// A random lowercase base-36 token of `TOKEN_LEN` characters
pub fn random_token() -> String {
    let mut value = Uuid::new_v4().as_u128();
    let mut token = String::with_capacity(TOKEN_LEN);
    for _ in 0..TOKEN_LEN {
        token.push(BASE36[(value % 36) as usize] as char);
        value /= 36;
    }
    token
}

/// Student id for the given 1-based sequence number (`ST-001`)
pub fn student_id(sequence: usize) -> String {
    format!("ST-{:03}", sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_strictly_increasing() {
        let mut ids = IdGenerator::new();
        let mut last = 0;
        for _ in 0..1000 {
            let id = ids.next_id();
            assert!(id > last);
            last = id;
        }
    }

    #[test]
    fn test_prefixed_ids_unique() {
        let mut ids = IdGenerator::new();
        let generated: HashSet<String> = (0..100).map(|_| ids.next_prefixed("sub")).collect();
        assert_eq!(generated.len(), 100);
        assert!(generated.iter().all(|id| id.starts_with("sub-")));
    }

    #[test]
    fn test_random_token_shape() {
        let token = random_token();
        assert_eq!(token.len(), TOKEN_LEN);
        assert!(token
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
        assert_ne!(random_token(), random_token());
    }

    #[test]
    fn test_student_id_padding() {
        assert_eq!(student_id(1), "ST-001");
        assert_eq!(student_id(21), "ST-021");
        assert_eq!(student_id(1234), "ST-1234");
    }
}
