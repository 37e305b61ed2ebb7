use crate::record::MetadataRecord;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Records keyed by symbol.
pub type RecordIndex = BTreeMap<String, Arc<MetadataRecord>>;

/// Records keyed by group, then by symbol.
pub type GroupIndex = BTreeMap<String, RecordIndex>;

/// The loaded metadata description with its lookup indices.
///
/// Every group name seen in any record is a key of all three group indices, even
/// when the base or aggregate subset for that group is empty. Nothing here can be
/// mutated after loading.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MetadataModel {
    records: Vec<Arc<MetadataRecord>>,
    by_name: RecordIndex,
    by_group: GroupIndex,
    base_by_name: RecordIndex,
    base_by_group: GroupIndex,
    aggregates_by_name: RecordIndex,
    aggregates_by_group: GroupIndex,
}

impl MetadataModel {
    /// Builds every index from records that already passed the loader's checks.
    pub(crate) fn from_records(records: Vec<MetadataRecord>) -> Self {
        let records: Vec<Arc<MetadataRecord>> = records.into_iter().map(Arc::new).collect();
        let mut model = Self { records: Vec::with_capacity(records.len()), ..Self::default() };

        let observed: BTreeSet<&str> =
            records.iter().flat_map(|r| r.groups.iter().map(String::as_str)).collect();
        for group in observed {
            model.by_group.insert(group.to_owned(), RecordIndex::new());
            model.base_by_group.insert(group.to_owned(), RecordIndex::new());
            model.aggregates_by_group.insert(group.to_owned(), RecordIndex::new());
        }

        for record in &records {
            let (by_name, by_group) = if record.is_aggregate() {
                (&mut model.aggregates_by_name, &mut model.aggregates_by_group)
            } else {
                (&mut model.base_by_name, &mut model.base_by_group)
            };
            by_name.insert(record.symbol.clone(), Arc::clone(record));
            model.by_name.insert(record.symbol.clone(), Arc::clone(record));

            for group in &record.groups {
                by_group
                    .entry(group.clone())
                    .or_default()
                    .insert(record.symbol.clone(), Arc::clone(record));
                model
                    .by_group
                    .entry(group.clone())
                    .or_default()
                    .insert(record.symbol.clone(), Arc::clone(record));
            }
        }

        model.records = records;
        model
    }

    /// Records in source order.
    pub fn records(&self) -> impl ExactSizeIterator<Item = &MetadataRecord> {
        self.records.iter().map(|record| &**record)
    }

    #[must_use]
    pub fn record(&self, symbol: &str) -> Option<&MetadataRecord> {
        self.by_name.get(symbol).map(|record| &**record)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Every group name observed in the source, sorted.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.by_group.keys().map(String::as_str)
    }

    #[must_use]
    pub const fn flags_by_name(&self) -> &RecordIndex {
        &self.by_name
    }

    #[must_use]
    pub const fn flags_by_group(&self) -> &GroupIndex {
        &self.by_group
    }

    #[must_use]
    pub const fn base_flags_by_name(&self) -> &RecordIndex {
        &self.base_by_name
    }

    #[must_use]
    pub const fn base_flags_by_group(&self) -> &GroupIndex {
        &self.base_by_group
    }

    #[must_use]
    pub const fn aggregate_flags_by_name(&self) -> &RecordIndex {
        &self.aggregates_by_name
    }

    #[must_use]
    pub const fn aggregate_flags_by_group(&self) -> &GroupIndex {
        &self.aggregates_by_group
    }

    /// The base symbols an aggregate's `flags` list stands for, with nested aggregates
    /// expanded. A base record yields itself; an unknown symbol yields nothing.
    #[must_use]
    pub fn flattened_sub_flags(&self, symbol: &str) -> BTreeSet<&str> {
        let mut out = BTreeSet::new();
        let mut visiting = BTreeSet::new();
        self.flatten_into(symbol, &mut out, &mut visiting);
        out
    }

    fn flatten_into<'m>(
        &'m self,
        symbol: &str,
        out: &mut BTreeSet<&'m str>,
        visiting: &mut BTreeSet<&'m str>,
    ) {
        let Some(record) = self.by_name.get(symbol) else {
            return;
        };
        if !visiting.insert(record.symbol.as_str()) {
            return;
        }
        if record.is_aggregate() {
            for sub in record.sub_flags() {
                self.flatten_into(sub, out, visiting);
            }
        } else {
            out.insert(record.symbol.as_str());
        }
    }
}
