//! Sequential id generation
//!
//! Generates decimal ids in index order: `"0"`, `"1"`, `"2"`, ...

/// Offset added to every id
const BASE_ID: u64 = 0;

/// Sequential id generator
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Id for a given index
    pub fn id_at(index: u64) -> String {
        (BASE_ID + index).to_string()
    }
}

impl Iterator for SequentialIds {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let id = Self::id_at(self.next);
        self.next += 1;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_basic() {
        let ids: Vec<String> = SequentialIds::new().take(4).collect();
        assert_eq!(ids, vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn test_sequential_id_at() {
        assert_eq!(SequentialIds::id_at(0), "0");
        assert_eq!(SequentialIds::id_at(1_000_000), "1000000");
    }
}
