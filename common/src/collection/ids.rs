/// Generates synthetic ids for garden entries: `<catalogId>_<millis>` with a
/// `_<n>` suffix when several entries are created in the same millisecond.
///
/// The caller passes a predicate for ids already present in the collection
/// being written; the sequence is bumped until the id is free.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last_millis: i64,
    sequence: u32,
}

impl IdGenerator {
    pub fn next_id(
        &mut self,
        catalog_id: &str,
        now_millis: i64,
        taken: impl Fn(&str) -> bool,
    ) -> String {
        if now_millis == self.last_millis {
            self.sequence += 1;
        } else {
            self.last_millis = now_millis;
            self.sequence = 0;
        }

        loop {
            let id = match self.sequence {
                0 => format!("{}_{}", catalog_id, now_millis),
                n => format!("{}_{}_{}", catalog_id, now_millis, n),
            };
            if !taken(&id) {
                return id;
            }
            self.sequence += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_millisecond_gets_a_sequence_suffix() {
        let mut ids = IdGenerator::default();
        assert_eq!(ids.next_id("fern", 1000, |_| false), "fern_1000");
        assert_eq!(ids.next_id("fern", 1000, |_| false), "fern_1000_1");
        assert_eq!(ids.next_id("fern", 1001, |_| false), "fern_1001");
    }

    #[test]
    fn ids_already_in_the_collection_are_skipped() {
        let mut ids = IdGenerator::default();
        let existing = ["fern_1000", "fern_1000_1"];
        let id = ids.next_id("fern", 1000, |id| existing.contains(&id));
        assert_eq!(id, "fern_1000_2");
    }
}
