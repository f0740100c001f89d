//! Sharpness gauge titles
//!
//! Gauges are shown as comma-joined segment lengths. The combined title puts
//! the Sharpness+1 gauge in parentheses after the base gauge, or lists all
//! three tiers separated by `"; "` when a second upgrade tier exists.

use serde::Serialize;

use crate::record::WeaponRecord;

/// Display strings for a weapon's sharpness gauges
///
/// All fields are empty for weapons without sharpness (bowguns, bows).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SharpnessTitles {
    pub title: String,
    pub plus_title: String,
    pub plus2_title: String,
    pub all_title: String,
}

/// Build the sharpness titles for a record
pub fn format(record: &WeaponRecord) -> SharpnessTitles {
    let Some(base) = record.sharpness_gauge() else {
        return SharpnessTitles::default();
    };
    let plus = record.sharpness_plus_gauge().unwrap_or(base);

    let title = join_gauge(base);
    let plus_title = join_gauge(plus);

    match record.sharpness_plus2_gauge() {
        Some(plus2) => {
            let plus2_title = join_gauge(plus2);
            let all_title = format!("{title}; {plus_title}; {plus2_title}");
            SharpnessTitles {
                title,
                plus_title,
                plus2_title,
                all_title,
            }
        }
        None => {
            let all_title = format!("{title} ({plus_title})");
            SharpnessTitles {
                title,
                plus_title,
                plus2_title: String::new(),
                all_title,
            }
        }
    }
}

/// Comma-joined gauge, e.g. `"0,2,5"`
pub fn join_gauge(gauge: &[u32]) -> String {
    gauge
        .iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blade(sharpness: Vec<u32>, plus: Vec<u32>) -> WeaponRecord {
        WeaponRecord {
            name: "Bone Blade".into(),
            wtype: "Great Sword".into(),
            sharpness: Some(sharpness),
            sharpness_plus: Some(plus),
            ..Default::default()
        }
    }

    #[test]
    fn test_base_and_plus() {
        let titles = format(&blade(vec![0, 2, 5], vec![0, 3, 6]));
        assert_eq!(titles.title, "0,2,5");
        assert_eq!(titles.plus_title, "0,3,6");
        assert_eq!(titles.plus2_title, "");
        assert_eq!(titles.all_title, "0,2,5 (0,3,6)");
    }

    #[test]
    fn test_second_upgrade_tier() {
        let mut record = blade(vec![10, 5, 0], vec![10, 5, 5]);
        record.sharpness_plus2 = Some(vec![10, 5, 10]);

        let titles = format(&record);
        assert_eq!(titles.plus2_title, "10,5,10");
        assert_eq!(titles.all_title, "10,5,0; 10,5,5; 10,5,10");
    }

    #[test]
    fn test_no_sharpness() {
        let record = WeaponRecord {
            name: "Hunter's Rifle".into(),
            wtype: "Light Bowgun".into(),
            ..Default::default()
        };
        assert_eq!(format(&record), SharpnessTitles::default());
        assert_eq!(format(&record).all_title, "");
    }

    #[test]
    fn test_missing_plus_uses_base() {
        let record = WeaponRecord {
            sharpness: Some(vec![4, 4]),
            ..Default::default()
        };
        let titles = format(&record);
        assert_eq!(titles.plus_title, "4,4");
        assert_eq!(titles.all_title, "4,4 (4,4)");
    }

    #[test]
    fn test_idempotent() {
        let record = blade(vec![0, 2, 5], vec![0, 3, 6]);
        assert_eq!(format(&record), format(&record));
    }

    #[test]
    fn test_multi_digit_segments() {
        assert_eq!(join_gauge(&[100, 20, 3]), "100,20,3");
        assert_eq!(join_gauge(&[]), "");
    }
}
