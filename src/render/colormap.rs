//! Color scaling for heat maps

use super::heatmap::HeatMap;
use clap::ValueEnum;
use plotters::style::RGBColor;

/// How the color range of the panels of one dataset is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorScale {
    /// One range over every selected step, so panels are comparable
    #[default]
    Global,
    /// Each panel uses its own min and max
    PerStep,
}

/// Value range mapped onto the color map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRange {
    pub min: f64,
    pub max: f64,
}

impl ColorRange {
    /// Extrema of the finite values, or `None` if there are none.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values
            .into_iter()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some(Self { min: v, max: v }),
                Some(r) => Some(Self {
                    min: r.min.min(v),
                    max: r.max.max(v),
                }),
            })
    }

    /// Position of `value` in the range, clamped to `[0, 1]`.
    /// A flat range maps everything to the middle.
    #[must_use]
    pub fn normalize(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.5;
        }
        ((value - self.min) / span).clamp(0.0, 1.0)
    }
}

/// One color range per panel, following `scale`.
#[must_use]
pub fn panel_ranges(panels: &[HeatMap], scale: ColorScale) -> Vec<ColorRange> {
    let fallback = ColorRange { min: 0.0, max: 0.0 };
    match scale {
        ColorScale::Global => {
            let range = ColorRange::from_values(panels.iter().flat_map(|p| p.values()))
                .unwrap_or(fallback);
            vec![range; panels.len()]
        }
        ColorScale::PerStep => panels
            .iter()
            .map(|p| ColorRange::from_values(p.values()).unwrap_or(fallback))
            .collect(),
    }
}

// Sequential white-to-navy ramp ("Blues").
const BLUES: [(u8, u8, u8); 9] = [
    (0xf7, 0xfb, 0xff),
    (0xde, 0xeb, 0xf7),
    (0xc6, 0xdb, 0xef),
    (0x9e, 0xca, 0xe1),
    (0x6b, 0xae, 0xd6),
    (0x42, 0x92, 0xc6),
    (0x21, 0x71, 0xb5),
    (0x08, 0x51, 0x9c),
    (0x08, 0x30, 0x6b),
];

/// Color for a normalized position `t` in `[0, 1]`.
#[must_use]
pub fn blues(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (BLUES.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(BLUES.len() - 2);
    let frac = scaled - lower as f64;

    let (r0, g0, b0) = BLUES[lower];
    let (r1, g1, b1) = BLUES[lower + 1];
    let lerp = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * frac).round() as u8;

    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}
