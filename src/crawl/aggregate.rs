//! Result accumulation across pages

use crate::extraction::ProductRecord;

/// Append-only ordered sequence of records, the pipeline's final
/// artifact.
///
/// Records from earlier pages precede records from later pages; within a
/// page the model's output order is preserved as given. Nothing is ever
/// removed or deduplicated.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    records: Vec<ProductRecord>,
}

impl ResultAggregator {
    /// Empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one page's records, preserving their order
    pub fn append(&mut self, records: impl IntoIterator<Item = ProductRecord>) {
        self.records.extend(records);
    }

    /// View the records accumulated so far
    pub fn snapshot(&self) -> &[ProductRecord] {
        &self.records
    }

    /// Number of records accumulated so far
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether nothing has been accumulated yet
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume into the final ordered record sequence
    pub fn into_records(self) -> Vec<ProductRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            price: "-".to_string(),
            description: "-".to_string(),
        }
    }

    #[test]
    fn test_pages_accumulate_in_order() {
        let mut aggregator = ResultAggregator::new();
        aggregator.append(vec![record("a"), record("b")]);
        aggregator.append(vec![record("c")]);

        let names: Vec<_> = aggregator
            .snapshot()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, ["a", "b", "c"]);
    }

    #[test]
    fn test_empty_page_contributes_nothing() {
        let mut aggregator = ResultAggregator::new();
        aggregator.append(Vec::new());
        assert!(aggregator.is_empty());
        assert_eq!(aggregator.len(), 0);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let mut aggregator = ResultAggregator::new();
        aggregator.append(vec![record("same")]);
        aggregator.append(vec![record("same")]);
        assert_eq!(aggregator.len(), 2);
    }
}
