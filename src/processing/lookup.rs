use std::collections::HashMap;

use crate::state::data_series::{Orientation, Point};

/// Key → value table of a reference series, built for one partition pass.
///
/// Keys compare exactly; `-0.0` and `0.0` share an entry, as do all NaNs.
/// On duplicate keys the last point wins.
#[derive(Debug, Clone, Default)]
pub struct ReferenceLookup {
    values: HashMap<u64, f64>,
}

fn key_bits(key: f64) -> u64 {
    if key == 0.0 {
        0.0f64.to_bits()
    } else if key.is_nan() {
        f64::NAN.to_bits()
    } else {
        key.to_bits()
    }
}

impl ReferenceLookup {
    pub fn build(points: &[Point], orientation: Orientation) -> Self {
        let mut values = HashMap::with_capacity(points.len());
        for point in points {
            let (key, value) = point.key_value(orientation);
            values.insert(key_bits(key), value);
        }
        Self { values }
    }

    pub fn get(&self, key: f64) -> Option<f64> {
        self.values.get(&key_bits(key)).copied()
    }

    pub fn contains_key(&self, key: f64) -> bool {
        self.values.contains_key(&key_bits(key))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True when the point sits strictly below its reference value.
    /// Points whose key has no reference entry are never below.
    pub fn is_below(&self, key: f64, value: f64) -> bool {
        match self.get(key) {
            Some(reference) => value < reference,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_duplicate_wins() {
        let pts = vec![Point::new(1.0, 5.0), Point::new(2.0, 4.0), Point::new(1.0, 9.0)];
        let lookup = ReferenceLookup::build(&pts, Orientation::Vertical);
        assert_eq!(lookup.len(), 2);
        assert_eq!(lookup.get(1.0), Some(9.0));
        assert_eq!(lookup.get(2.0), Some(4.0));
        assert_eq!(lookup.get(3.0), None);
    }

    #[test]
    fn horizontal_keys_on_vertical_coordinate() {
        let pts = vec![Point::new(10.0, 1.0), Point::new(20.0, 2.0)];
        let lookup = ReferenceLookup::build(&pts, Orientation::Horizontal);
        assert_eq!(lookup.get(1.0), Some(10.0));
        assert_eq!(lookup.get(2.0), Some(20.0));
        assert!(!lookup.contains_key(10.0));
    }

    #[test]
    fn signed_zero_shares_an_entry() {
        let lookup = ReferenceLookup::build(&[Point::new(-0.0, 3.0)], Orientation::Vertical);
        assert_eq!(lookup.get(0.0), Some(3.0));
    }

    #[test]
    fn below_requires_a_match() {
        let lookup = ReferenceLookup::build(&[Point::new(1.0, 5.0)], Orientation::Vertical);
        assert!(lookup.is_below(1.0, 4.9));
        assert!(!lookup.is_below(1.0, 5.0));
        assert!(!lookup.is_below(2.0, -100.0));
    }

    #[test]
    fn empty_reference_builds_empty_lookup() {
        assert!(ReferenceLookup::build(&[], Orientation::Vertical).is_empty());
    }
}
