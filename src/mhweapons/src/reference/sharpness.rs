//! Sharpness colour bands

/// Sharpness colour bands, worst first. Gauge arrays index by these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SharpnessLevel {
    Red = 0,
    Orange = 1,
    Yellow = 2,
    Green = 3,
    Blue = 4,
    White = 5,
    Purple = 6,
}

impl SharpnessLevel {
    /// All levels in gauge order
    pub const ALL: &'static [SharpnessLevel] = &[
        SharpnessLevel::Red,
        SharpnessLevel::Orange,
        SharpnessLevel::Yellow,
        SharpnessLevel::Green,
        SharpnessLevel::Blue,
        SharpnessLevel::White,
        SharpnessLevel::Purple,
    ];

    /// Level for a gauge index
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            SharpnessLevel::Red => "Red",
            SharpnessLevel::Orange => "Orange",
            SharpnessLevel::Yellow => "Yellow",
            SharpnessLevel::Green => "Green",
            SharpnessLevel::Blue => "Blue",
            SharpnessLevel::White => "White",
            SharpnessLevel::Purple => "Purple",
        }
    }
}

impl std::fmt::Display for SharpnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Best colour band with a nonzero segment
pub fn max_level(gauge: &[u32]) -> Option<SharpnessLevel> {
    gauge
        .iter()
        .enumerate()
        .rev()
        .find(|(_, &points)| points > 0)
        .and_then(|(i, _)| SharpnessLevel::from_index(i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_level() {
        assert_eq!(max_level(&[5, 10, 5]), Some(SharpnessLevel::Yellow));
        assert_eq!(max_level(&[5, 10, 5, 10, 0, 0]), Some(SharpnessLevel::Green));
        assert_eq!(max_level(&[1, 1, 1, 1, 1, 1, 1]), Some(SharpnessLevel::Purple));
        assert_eq!(max_level(&[0, 0, 0]), None);
        assert_eq!(max_level(&[]), None);
    }

    #[test]
    fn test_level_names() {
        assert_eq!(SharpnessLevel::from_index(4).map(|l| l.name()), Some("Blue"));
        assert_eq!(SharpnessLevel::White.to_string(), "White");
        assert_eq!(SharpnessLevel::from_index(7), None);
    }
}
