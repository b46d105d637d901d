use crate::config::DATA_POINT_COUNT;

/// One named, toggle-able data point slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPointEntry {
    /// 1-based slot index, fixed by position
    pub index: usize,
    pub checked: bool,
    pub name: String,
}

impl DataPointEntry {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            checked: false,
            name: default_name(index),
        }
    }
}

pub fn default_name(index: usize) -> String {
    format!("Data Point {}", index)
}

/// The fixed set of data point slots of one camera.
///
/// Entry at position `i` always carries `index == i + 1`, so every index in
/// `1..=DATA_POINT_COUNT` appears exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPoints {
    entries: [DataPointEntry; DATA_POINT_COUNT],
}

impl Default for DataPoints {
    fn default() -> Self {
        Self {
            entries: std::array::from_fn(|i| DataPointEntry::new(i + 1)),
        }
    }
}

impl DataPoints {
    /// Build a full set from arbitrary entries, matching by `index`.
    ///
    /// Indices missing from `existing` get the default name, unchecked.
    /// Entries with an index outside the valid range are ignored.
    pub fn from_existing(existing: &[DataPointEntry]) -> Self {
        Self {
            entries: std::array::from_fn(|i| {
                let index = i + 1;
                existing
                    .iter()
                    .find(|entry| entry.index == index)
                    .cloned()
                    .unwrap_or_else(|| DataPointEntry::new(index))
            }),
        }
    }

    pub fn entries(&self) -> &[DataPointEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&DataPointEntry> {
        index.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut DataPointEntry> {
        index.checked_sub(1).and_then(|i| self.entries.get_mut(i))
    }

    /// Names of the checked entries, in index order
    pub fn checked_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.checked)
            .map(|entry| entry.name.as_str())
            .collect()
    }

    pub fn checked_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.checked).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let points = DataPoints::default();
        assert_eq!(points.entries().len(), DATA_POINT_COUNT);
        for (i, entry) in points.entries().iter().enumerate() {
            assert_eq!(entry.index, i + 1);
            assert!(!entry.checked);
            assert_eq!(entry.name, format!("Data Point {}", i + 1));
        }
        assert!(points.checked_names().is_empty());
    }

    #[test]
    fn test_from_existing_matches_by_index() {
        let existing = vec![
            DataPointEntry {
                index: 7,
                checked: true,
                name: "Flow".to_string(),
            },
            DataPointEntry {
                index: 2,
                checked: false,
                name: "Level".to_string(),
            },
        ];

        let points = DataPoints::from_existing(&existing);

        assert_eq!(points.get(2).map(|e| e.name.as_str()), Some("Level"));
        assert_eq!(points.get(7).map(|e| e.checked), Some(true));
        assert_eq!(points.get(1), Some(&DataPointEntry::new(1)));
        assert_eq!(points.checked_names(), vec!["Flow"]);
    }

    #[test]
    fn test_from_existing_ignores_out_of_range() {
        let existing = vec![
            DataPointEntry {
                index: 0,
                checked: true,
                name: "Zero".to_string(),
            },
            DataPointEntry {
                index: 17,
                checked: true,
                name: "Seventeen".to_string(),
            },
        ];

        let points = DataPoints::from_existing(&existing);
        assert_eq!(points, DataPoints::default());
    }

    #[test]
    fn test_get_bounds() {
        let points = DataPoints::default();
        assert!(points.get(0).is_none());
        assert!(points.get(16).is_some());
        assert!(points.get(17).is_none());
    }
}
