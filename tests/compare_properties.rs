//! Invariants of the partition pass over arbitrary inputs.

use proptest::prelude::*;
use splitplot::{partition, CompareConfig, Point, Series};

fn points(max_len: usize) -> impl Strategy<Value = Vec<(i32, i32)>> {
    prop::collection::vec((0..16i32, -50..50i32), 0..max_len)
}

/// Subject points carry their original index as a third field.
fn build(subject: &[(i32, i32)], reference: &[(i32, i32)], horizontal: bool) -> Vec<Series> {
    let subject_points = subject
        .iter()
        .enumerate()
        .map(|(i, &(k, v))| Point::with_extra(k as f64, v as f64, &[i as f64]))
        .collect();
    let reference_points = reference
        .iter()
        .map(|&(k, v)| Point::new(k as f64, v as f64))
        .collect();
    let mut subject = Series::new("subject", subject_points).with_compare(CompareConfig::against(0));
    subject.bars.horizontal = horizontal;
    vec![Series::new("reference", reference_points), subject]
}

proptest! {
    #[test]
    fn every_point_is_classified_once(
        subject in points(40),
        reference in points(40),
        horizontal in any::<bool>(),
    ) {
        let mut all = build(&subject, &reference, horizontal);
        partition(&mut all, 1);
        prop_assert_eq!(all.len(), 4);
        prop_assert_eq!(all[2].data.len() + all[3].data.len(), subject.len());
    }

    #[test]
    fn merging_by_original_index_restores_subject(
        subject in points(40),
        reference in points(40),
    ) {
        let mut all = build(&subject, &reference, false);
        let original = all[1].data.clone();
        partition(&mut all, 1);

        for derived in &all[2..] {
            let order: Vec<f64> = derived.data.iter().map(|p| p.extra()[0]).collect();
            prop_assert!(order.windows(2).all(|w| w[0] < w[1]));
        }

        let mut merged: Vec<Point> = all[2].data.iter().chain(all[3].data.iter()).cloned().collect();
        merged.sort_by(|a, b| a.extra()[0].total_cmp(&b.extra()[0]));
        prop_assert_eq!(merged, original);
    }

    #[test]
    fn below_only_holds_matched_smaller_values(
        subject in points(40),
        reference in points(40),
    ) {
        let mut all = build(&subject, &reference, false);
        partition(&mut all, 1);
        for point in &all[3].data {
            let last = reference.iter().rev().find(|&&(k, _)| k as f64 == point.x());
            prop_assert!(matches!(last, Some(&(_, v)) if point.y() < v as f64));
        }
        for point in &all[2].data {
            let last = reference.iter().rev().find(|&&(k, _)| k as f64 == point.x());
            if let Some(&(_, v)) = last {
                prop_assert!(point.y() >= v as f64);
            }
        }
    }

    #[test]
    fn disabled_or_self_referencing_subject_is_untouched(
        subject in points(20),
        reference in points(20),
        self_reference in any::<bool>(),
    ) {
        let mut all = build(&subject, &reference, false);
        if self_reference {
            all[1].compare.reference_index = 1;
        } else {
            all[1].compare.enabled = false;
        }
        let before = all.clone();
        prop_assert!(!partition(&mut all, 1).is_split());
        prop_assert_eq!(all.len(), before.len());
        for (after, before) in all.iter().zip(before.iter()) {
            prop_assert_eq!(&after.data, &before.data);
            prop_assert_eq!(after.is_visible(), before.is_visible());
        }
    }
}
