//! Weapon ranking
//!
//! Weapons are ranked by a key tuple, compared lexicographically:
//!
//! 1. raw attack
//! 2. sharpness gauge, reversed so the best colour compares first
//! 3. element attack
//! 4. affinity
//! 5. slot count
//! 6. defense
//!
//! Absent entries (a bowgun's sharpness, a raw weapon's element) are skipped
//! rather than ordered, and nested sequences compare element-wise.

use std::cmp::Ordering;

use serde::Serialize;

use crate::record::WeaponRecord;

/// One position of a sort key
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SortValue {
    Number(f64),
    Seq(Vec<SortValue>),
}

impl From<f64> for SortValue {
    fn from(n: f64) -> Self {
        SortValue::Number(n)
    }
}

/// Sort key for a weapon; `None` entries never decide a comparison
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SortKey(pub Vec<Option<SortValue>>);

/// Build the ranking key for a weapon
pub fn sort_key(record: &WeaponRecord) -> SortKey {
    let sharpness_reversed = record.sharpness_gauge().map(|gauge| {
        SortValue::Seq(
            gauge
                .iter()
                .rev()
                .map(|&points| SortValue::Number(f64::from(points)))
                .collect(),
        )
    });

    SortKey(vec![
        record.attack.map(SortValue::from),
        sharpness_reversed,
        record.element_attack.map(SortValue::from),
        record.affinity.map(SortValue::from),
        record.num_slots.map(|n| SortValue::Number(f64::from(n))),
        record.defense.map(SortValue::from),
    ])
}

/// Compare two keys; `Less`/`Equal`/`Greater` map to -1/0/1
pub fn compare(a: &SortKey, b: &SortKey) -> Ordering {
    compare_slots(
        a.0.iter().map(Option::as_ref),
        b.0.iter().map(Option::as_ref),
    )
}

/// Compare two weapons by their keys
pub fn compare_weapons(a: &WeaponRecord, b: &WeaponRecord) -> Ordering {
    compare(&sort_key(a), &sort_key(b))
}

// Walks the left side; positions missing on the right count as absent.
fn compare_slots<'a, A, B>(a: A, mut b: B) -> Ordering
where
    A: Iterator<Item = Option<&'a SortValue>>,
    B: Iterator<Item = Option<&'a SortValue>>,
{
    for left in a {
        let right = b.next().flatten();
        let ord = match (left, right) {
            (Some(left), Some(right)) => compare_values(left, right),
            _ => Ordering::Equal,
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

fn compare_values(a: &SortValue, b: &SortValue) -> Ordering {
    match (a, b) {
        (SortValue::Number(x), SortValue::Number(y)) => x.partial_cmp(y).unwrap_or(Ordering::Equal),
        (SortValue::Seq(xs), SortValue::Seq(ys)) => {
            compare_slots(xs.iter().map(Some), ys.iter().map(Some))
        }
        _ => Ordering::Equal,
    }
}

/// Sort weapons best first
///
/// Skipping absent entries means the comparison is not a total order, which
/// `slice::sort_by` may reject; this uses a stable insertion sort instead.
pub fn rank(records: &mut [WeaponRecord]) {
    let keys: Vec<SortKey> = records.iter().map(sort_key).collect();
    let mut order: Vec<usize> = Vec::with_capacity(records.len());

    for i in 0..records.len() {
        let pos = order
            .iter()
            .rposition(|&j| compare(&keys[j], &keys[i]) != Ordering::Less)
            .map_or(0, |p| p + 1);
        order.insert(pos, i);
    }

    let mut sorted: Vec<WeaponRecord> = order.iter().map(|&i| records[i].clone()).collect();
    records.swap_with_slice(&mut sorted);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weapon(name: &str, attack: f64, sharpness: Option<Vec<u32>>) -> WeaponRecord {
        WeaponRecord {
            name: name.into(),
            wtype: "Long Sword".into(),
            attack: Some(attack),
            sharpness,
            affinity: Some(0.0),
            num_slots: Some(0),
            defense: Some(0.0),
            ..Default::default()
        }
    }

    fn key(values: Vec<Option<SortValue>>) -> SortKey {
        SortKey(values)
    }

    fn seq(values: &[f64]) -> Option<SortValue> {
        Some(SortValue::Seq(values.iter().copied().map(SortValue::Number).collect()))
    }

    #[test]
    fn test_sort_key_reverses_sharpness() {
        let record = weapon("Iron Katana", 120.0, Some(vec![0, 2, 5]));
        let key = sort_key(&record);
        assert_eq!(key.0[0], Some(SortValue::Number(120.0)));
        assert_eq!(key.0[1], seq(&[5.0, 2.0, 0.0]));
        assert_eq!(key.0[2], None);
        assert_eq!(key.0.len(), 6);
    }

    #[test]
    fn test_sharpness_decides_before_later_fields() {
        let a = key(vec![Some(100.0.into()), seq(&[5.0, 2.0, 0.0]), None, Some(0.0.into())]);
        let b = key(vec![Some(100.0.into()), seq(&[4.0, 3.0, 0.0]), None, Some(40.0.into())]);
        assert_eq!(compare(&a, &b), Ordering::Greater);
        assert_eq!(compare(&b, &a), Ordering::Less);
    }

    #[test]
    fn test_numeric_not_string_order() {
        let a = key(vec![Some(100.0.into()), seq(&[10.0])]);
        let b = key(vec![Some(100.0.into()), seq(&[9.0])]);
        assert_eq!(compare(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_absent_entries_are_skipped() {
        let a = key(vec![Some(100.0.into()), None, Some(20.0.into())]);
        let b = key(vec![Some(100.0.into()), seq(&[9.0]), Some(10.0.into())]);
        assert_eq!(compare(&a, &b), Ordering::Greater);

        let a = key(vec![None, Some(1.0.into())]);
        let b = key(vec![Some(500.0.into()), Some(2.0.into())]);
        assert_eq!(compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_equal_keys() {
        let a = key(vec![Some(100.0.into()), seq(&[1.0, 2.0])]);
        assert_eq!(compare(&a, &a.clone()), Ordering::Equal);
        assert_eq!(compare(&key(vec![]), &key(vec![])), Ordering::Equal);
    }

    #[test]
    fn test_shorter_right_side() {
        let a = key(vec![Some(1.0.into()), Some(5.0.into())]);
        let b = key(vec![Some(1.0.into())]);
        assert_eq!(compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_mismatched_kinds_are_equal() {
        let a = key(vec![seq(&[1.0])]);
        let b = key(vec![Some(3.0.into())]);
        assert_eq!(compare(&a, &b), Ordering::Equal);
    }

    #[test]
    fn test_compare_weapons() {
        let a = weapon("Iron Katana", 100.0, Some(vec![0, 2, 5]));
        let b = weapon("Bone Katana", 100.0, Some(vec![0, 3, 4]));
        assert_eq!(compare_weapons(&a, &b), Ordering::Greater);
    }

    #[test]
    fn test_rank_best_first() {
        let mut records = vec![
            weapon("Low", 80.0, Some(vec![5, 5])),
            weapon("High", 150.0, Some(vec![5, 5])),
            weapon("Mid Sharp", 100.0, Some(vec![0, 9])),
            weapon("Mid Dull", 100.0, Some(vec![9, 0])),
        ];
        rank(&mut records);

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["High", "Mid Sharp", "Mid Dull", "Low"]);
    }

    #[test]
    fn test_rank_is_stable() {
        let mut records = vec![
            weapon("First", 100.0, None),
            weapon("Second", 100.0, None),
            weapon("Third", 100.0, None),
        ];
        rank(&mut records);

        let names: Vec<_> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }
}
