use std::f64::consts::{FRAC_PI_2, PI};

use crate::palette::{Palette, SegmentStyle};
use crate::prize::PrizeList;

// Metrics at a 400px wheel; everything except the rim margin scales with the radius.
const RIM_MARGIN: f64 = 10.0;
const REFERENCE_RADIUS: f64 = 190.0;
const LABEL_INNER: f64 = 50.0;
const LABEL_RIM_CLEARANCE: f64 = 15.0;
const HUB_RADIUS: f64 = 35.0;

pub const MIN_FONT_PX: u32 = 8;
pub const MAX_FONT_PX: u32 = 14;
pub const CHAR_SPACING: f64 = 1.3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// One filled sector, angles in canvas radians (0 = 3 o'clock, clockwise).
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentGeometry {
    pub index: usize,
    pub start_angle: f64,
    pub end_angle: f64,
    pub style: SegmentStyle,
}

impl SegmentGeometry {
    pub fn bisector(&self) -> f64 {
        (self.start_angle + self.end_angle) / 2.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub ch: char,
    /// Distance from the wheel centre along the bisector.
    pub offset: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub index: usize,
    pub rotation: f64,
    pub font_px: u32,
    pub glyphs: Vec<Glyph>,
}

impl LabelLayout {
    pub fn position(&self, glyph: &Glyph, center: Point) -> Point {
        Point {
            x: center.x + glyph.offset * self.rotation.cos(),
            y: center.y + glyph.offset * self.rotation.sin(),
        }
    }
}

/// Everything the painter needs for one raster of the wheel.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelLayout {
    pub edge: u32,
    pub center: Point,
    pub radius: f64,
    pub label_inner: f64,
    pub label_outer: f64,
    pub hub_radius: f64,
    pub segments: Vec<SegmentGeometry>,
    pub labels: Vec<LabelLayout>,
}

/// Shrinks with label length, clamped to the legible range.
pub fn font_size_for(chars: usize, available: f64) -> u32 {
    if chars == 0 {
        return MAX_FONT_PX;
    }
    let fitted = (available / (chars as f64 * CHAR_SPACING)).floor();
    (fitted.max(0.0) as u32).clamp(MIN_FONT_PX, MAX_FONT_PX)
}

impl WheelLayout {
    pub fn compute(prizes: &PrizeList, edge: u32, palette: &Palette) -> Self {
        let half = edge as f64 / 2.0;
        let center = Point { x: half, y: half };
        let radius = (half - RIM_MARGIN).max(1.0);
        let scale = radius / REFERENCE_RADIUS;
        let label_inner = LABEL_INNER * scale;
        let label_outer = radius - LABEL_RIM_CLEARANCE * scale;
        let hub_radius = HUB_RADIUS * scale;

        let sweep = 2.0 * PI / prizes.len() as f64;
        let mut segments = Vec::with_capacity(prizes.len());
        let mut labels = Vec::with_capacity(prizes.len());

        for prize in prizes.iter() {
            let segment = SegmentGeometry {
                index: prize.index,
                start_angle: prize.index as f64 * sweep - FRAC_PI_2,
                end_angle: (prize.index + 1) as f64 * sweep - FRAC_PI_2,
                style: palette.style(prize.index, prizes),
            };
            labels.push(layout_label(
                prize.index,
                &prize.label,
                segment.bisector(),
                label_inner,
                label_outer,
            ));
            segments.push(segment);
        }

        Self {
            edge,
            center,
            radius,
            label_inner,
            label_outer,
            hub_radius,
            segments,
            labels,
        }
    }
}

fn layout_label(index: usize, label: &str, rotation: f64, inner: f64, outer: f64) -> LabelLayout {
    let chars: Vec<char> = label.chars().collect();
    let available = outer - inner;
    let font_px = font_size_for(chars.len(), available);
    let spacing = font_px as f64 * CHAR_SPACING;
    let run = chars.len() as f64 * spacing;
    let first = inner + (available - run) / 2.0 + spacing / 2.0;

    LabelLayout {
        index,
        rotation,
        font_px,
        glyphs: chars
            .into_iter()
            .enumerate()
            .map(|(i, ch)| Glyph {
                ch,
                offset: first + i as f64 * spacing,
            })
            .collect(),
    }
}
