use crate::prize::PrizeList;

/// Fill, label ink and label outline for one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentStyle {
    pub fill: &'static str,
    pub text: &'static str,
    pub outline: &'static str,
}

pub const SEGMENT_BORDER: &str = "rgba(255, 255, 255, 0.3)";
pub const HUB_GRADIENT: (&str, &str) = ("#D4AF37", "#B8860B");
pub const HUB_STROKE: &str = "#1a1a2e";

const GOLD_FILLS: [&str; 15] = [
    "#D4AF37", "#B8860B", "#DAA520", "#C9A961", "#F4D03F", "#E6C200", "#FFD700", "#FFA500",
    "#CD853F", "#DEB887", "#F5DEB3", "#FFE4B5", "#D4AF37", "#B8860B", "#DAA520",
];

/// Resolves `index -> style`. The sentinel slot always gets its own muted fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub fills: Vec<&'static str>,
    pub sentinel_fill: &'static str,
    pub text: &'static str,
    pub outline: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            fills: GOLD_FILLS.to_vec(),
            sentinel_fill: "#8B7355",
            text: "#1a1a2e",
            outline: "#ffffff",
        }
    }
}

impl Palette {
    pub fn style(&self, index: usize, prizes: &PrizeList) -> SegmentStyle {
        let fill = if prizes.is_sentinel(index) || self.fills.is_empty() {
            self.sentinel_fill
        } else {
            self.fills[index % self.fills.len()]
        };
        SegmentStyle {
            fill,
            text: self.text,
            outline: self.outline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_matches_gold_scheme() {
        let palette = Palette::default();
        let prizes = PrizeList::default();
        assert_eq!(palette.style(0, &prizes).fill, "#D4AF37");
        assert_eq!(palette.style(12, &prizes).fill, "#D4AF37");
        assert_eq!(palette.style(15, &prizes).fill, "#8B7355");
    }

    #[test]
    fn test_sentinel_fill_follows_sentinel() {
        let palette = Palette::default();
        let prizes = PrizeList::new(["none", "a", "b"], Some(0)).unwrap();
        assert_eq!(palette.style(0, &prizes).fill, palette.sentinel_fill);
        assert_ne!(palette.style(1, &prizes).fill, palette.style(2, &prizes).fill);
    }
}
