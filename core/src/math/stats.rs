/// Per-key running sums, kept in the order keys were first seen.
///
/// Means come out as `sum / count` so results match a plain group-by average,
/// and minimum/maximum lookups resolve ties to the earliest key.
#[derive(Debug, Clone, Default)]
pub struct GroupedMean {
    groups: Vec<Group>,
}

#[derive(Debug, Clone)]
struct Group {
    key: String,
    sum: f64,
    count: usize,
}

impl GroupedMean {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &str, value: f64) {
        match self.groups.iter_mut().find(|group| group.key == key) {
            Some(group) => {
                group.sum += value;
                group.count += 1;
            }
            None => self.groups.push(Group {
                key: key.to_string(),
                sum: value,
                count: 1,
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.groups.iter().any(|group| group.key == key)
    }

    pub fn mean(&self, key: &str) -> Option<f64> {
        self.groups
            .iter()
            .find(|group| group.key == key)
            .map(Group::mean)
    }

    pub fn means(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.groups
            .iter()
            .map(|group| (group.key.as_str(), group.mean()))
    }

    pub fn min(&self) -> Option<(&str, f64)> {
        first_min_by(self.means(), |(_, mean)| *mean)
    }

    pub fn max(&self) -> Option<(&str, f64)> {
        first_min_by(self.means(), |(_, mean)| -*mean)
    }

    /// Minimum restricted to keys accepted by `filter`.
    pub fn min_where<F: Fn(&str) -> bool>(&self, filter: F) -> Option<(&str, f64)> {
        let candidates = self.means().filter(|(key, _)| filter(*key));
        first_min_by(candidates, |(_, mean)| *mean)
    }
}

impl Group {
    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Item with the smallest key; the first one wins on ties.
pub fn first_min_by<T, F>(items: impl IntoIterator<Item = T>, key: F) -> Option<T>
where
    F: Fn(&T) -> f64,
{
    let mut best: Option<(T, f64)> = None;
    for item in items {
        let value = key(&item);
        match &best {
            Some((_, current)) if value >= *current => {}
            _ => best = Some((item, value)),
        }
    }
    best.map(|(item, _)| item)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouped_mean_averages_per_key() {
        let mut grouped = GroupedMean::new();
        grouped.add("a", 1.0);
        grouped.add("b", 10.0);
        grouped.add("a", 3.0);
        assert_eq!(grouped.mean("a"), Some(2.0));
        assert_eq!(grouped.mean("b"), Some(10.0));
        assert_eq!(grouped.mean("c"), None);
        assert_eq!(grouped.len(), 2);
    }

    #[test]
    fn ties_resolve_to_first_seen_key() {
        let mut grouped = GroupedMean::new();
        grouped.add("late", 5.0);
        grouped.add("early", 5.0);
        assert_eq!(grouped.min(), Some(("late", 5.0)));
        assert_eq!(grouped.max(), Some(("late", 5.0)));
    }

    #[test]
    fn min_where_skips_filtered_keys() {
        let mut grouped = GroupedMean::new();
        grouped.add("a", 1.0);
        grouped.add("b", 2.0);
        grouped.add("c", 3.0);
        assert_eq!(grouped.min_where(|key| key != "a"), Some(("b", 2.0)));
        assert_eq!(grouped.min_where(|_| false), None);
    }

    #[test]
    fn first_min_by_on_empty_input_is_none() {
        let empty: Vec<f64> = Vec::new();
        assert_eq!(first_min_by(empty, |v| *v), None);
    }
}
