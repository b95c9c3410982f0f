// Copyright 2021 Twitter, Inc.
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::collections::HashMap;

/// Reading recorded for a trial in which the attack never succeeded.
pub const NO_SUCCESS: i64 = -1;

/// Readings of one experiment: the attempt index at which each successful
/// trial first succeeded, and the number of trials overall.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    readings: Vec<i64>,
    total: u64,
}

impl Series {
    pub fn new() -> Self {
        Default::default()
    }

    /// Count one trial. Unsuccessful trials only contribute to the total.
    pub fn record(&mut self, reading: i64) {
        self.total += 1;
        if reading != NO_SUCCESS {
            self.readings.push(reading);
        }
    }

    /// Readings of successful trials, in the order they were recorded.
    pub fn readings(&self) -> &[i64] {
        &self.readings
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn successes(&self) -> u64 {
        self.readings.len() as u64
    }
}

/// Series partitioned by key, kept in the order each key first appeared.
#[derive(Clone, Debug, Default)]
pub struct GroupedSeries {
    groups: Vec<(i64, Series)>,
    index: HashMap<i64, usize>,
}

impl GroupedSeries {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn record(&mut self, key: i64, reading: i64) {
        let groups = &mut self.groups;
        let idx = *self.index.entry(key).or_insert_with(|| {
            groups.push((key, Series::new()));
            groups.len() - 1
        });
        self.groups[idx].1.record(reading);
    }

    pub fn get(&self, key: i64) -> Option<&Series> {
        self.index.get(&key).map(|idx| &self.groups[*idx].1)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &Series)> {
        self.groups.iter().map(|(key, series)| (*key, series))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_counts_toward_total() {
        let mut series = Series::new();
        for reading in &[2, 2, 5, NO_SUCCESS] {
            series.record(*reading);
        }
        assert_eq!(series.readings(), &[2, 2, 5]);
        assert_eq!(series.total(), 4);
        assert_eq!(series.successes(), 3);
    }

    #[test]
    fn groups_are_lazily_created() {
        let mut grouped = GroupedSeries::new();
        assert!(grouped.is_empty());

        grouped.record(1, 0);
        grouped.record(1, NO_SUCCESS);
        grouped.record(2, 3);

        assert_eq!(grouped.len(), 2);

        let one = grouped.get(1).unwrap();
        assert_eq!(one.readings(), &[0]);
        assert_eq!(one.total(), 2);

        let two = grouped.get(2).unwrap();
        assert_eq!(two.readings(), &[3]);
        assert_eq!(two.total(), 1);

        assert!(grouped.get(3).is_none());
    }

    #[test]
    fn groups_keep_first_seen_order() {
        let mut grouped = GroupedSeries::new();
        grouped.record(8, 1);
        grouped.record(2, 1);
        grouped.record(8, 4);
        grouped.record(4, NO_SUCCESS);

        let keys: Vec<i64> = grouped.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![8, 2, 4]);
    }
}
