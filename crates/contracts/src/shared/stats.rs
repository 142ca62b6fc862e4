//! Summary counts for the stat cards above list pages.

use serde::{Deserialize, Serialize};

/// A record with a type dimension and a status dimension.
pub trait Classified {
    type Kind: Copy + PartialEq;
    type Status: Copy + PartialEq;

    fn kind(&self) -> Self::Kind;
    fn status(&self) -> Self::Status;
}

/// Records whose kind equals `kind` (any kind when `None`) and whose status
/// is one of `statuses`.
pub fn count_matching<R: Classified>(
    records: &[R],
    kind: Option<R::Kind>,
    statuses: &[R::Status],
) -> usize {
    records
        .iter()
        .filter(|r| kind.map_or(true, |k| r.kind() == k))
        .filter(|r| statuses.contains(&r.status()))
        .count()
}

/// Records of one kind, any status.
pub fn count_kind<R: Classified>(records: &[R], kind: R::Kind) -> usize {
    records.iter().filter(|r| r.kind() == kind).count()
}

/// "value / total" pair, e.g. 3 of 5 PS4 units available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitRatio {
    pub value: usize,
    pub total: usize,
}

impl UnitRatio {
    pub fn new(value: usize, total: usize) -> Self {
        Self { value, total }
    }

    /// Matching records of `kind` against all records of `kind`.
    pub fn of_kind<R: Classified>(records: &[R], kind: R::Kind, statuses: &[R::Status]) -> Self {
        Self {
            value: count_matching(records, Some(kind), statuses),
            total: count_kind(records, kind),
        }
    }

    /// Matching records against the whole registry.
    pub fn of_all<R: Classified>(records: &[R], statuses: &[R::Status]) -> Self {
        Self {
            value: count_matching(records, None, statuses),
            total: records.len(),
        }
    }

    /// `"3/5 units"`
    pub fn label(&self, unit: &str) -> String {
        format!("{}/{} {}", self.value, self.total, unit)
    }

    /// Share in whole percent, 0 for an empty total.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            ((self.value as f64 / self.total as f64) * 100.0).round() as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy)]
    struct Unit(u8, bool);

    impl Classified for Unit {
        type Kind = u8;
        type Status = bool;

        fn kind(&self) -> u8 {
            self.0
        }

        fn status(&self) -> bool {
            self.1
        }
    }

    #[test]
    fn test_count_matching() {
        let units = [Unit(1, true), Unit(1, false), Unit(2, true), Unit(1, true)];
        assert_eq!(count_matching(&units, Some(1), &[true]), 2);
        assert_eq!(count_matching(&units, None, &[true]), 3);
        assert_eq!(count_matching(&units, Some(2), &[false]), 0);
        assert_eq!(count_matching(&units, Some(1), &[true, false]), 3);
        assert_eq!(count_matching(&units, Some(1), &[]), 0);
    }

    #[test]
    fn test_unit_ratio() {
        let units = [Unit(1, true), Unit(1, false), Unit(2, true)];
        let ratio = UnitRatio::of_kind(&units, 1, &[true]);
        assert_eq!(ratio, UnitRatio::new(1, 2));
        assert_eq!(ratio.label("units"), "1/2 units");
        assert_eq!(ratio.percent(), 50);
        assert_eq!(UnitRatio::of_all(&units, &[true]), UnitRatio::new(2, 3));
        assert_eq!(UnitRatio::new(0, 0).percent(), 0);
        assert_eq!(UnitRatio::new(12, 18).percent(), 67);
    }
}
