//! Frequency bar graph: analyser resolution, colours and per-frame geometry.

use crate::config::SiteConfig;

pub const DEFAULT_SENSITIVITY: f64 = 1.0;
pub const DEFAULT_SMOOTHING: f64 = 0.8;
pub const DEFAULT_PRIMARY: &str = "#AF0404";
pub const DEFAULT_SECONDARY: &str = "#262626";

/// Overlay painted every frame so old bars fade out.
pub const FADE_FILL: &str = "rgba(0, 0, 0, 0.2)";
pub const REFLECTION_FILL: &str = "rgba(255, 255, 255, 0.1)";
pub const REFLECTION_HEIGHT: f64 = 2.0;
pub const BAR_SPACING: f64 = 1.0;
pub const MIN_BAR_HEIGHT: f64 = 1.0;

pub const MIN_FFT_SIZE: u32 = 32;

/// Canvas width (px) at which each FFT size kicks in, roughly one bar per 8-10px.
const FFT_BREAKPOINTS: [(u32, u32); 5] = [
    (480, 64),
    (768, 128),
    (1200, 256),
    (1600, 512),
    (2400, 1024),
];

/// Analyser FFT size for a canvas of `width` pixels.
pub fn fft_size_for_width(width: u32) -> u32 {
    FFT_BREAKPOINTS
        .iter()
        .take_while(|(min_width, _)| width >= *min_width)
        .last()
        .map_or(MIN_FFT_SIZE, |(_, size)| *size)
}

#[derive(Clone, Debug, PartialEq)]
pub struct VisualizerSettings {
    pub sensitivity: f64,
    pub smoothing: f64,
    pub primary: String,
    pub secondary: String,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            sensitivity: DEFAULT_SENSITIVITY,
            smoothing: DEFAULT_SMOOTHING,
            primary: DEFAULT_PRIMARY.to_string(),
            secondary: DEFAULT_SECONDARY.to_string(),
        }
    }
}

impl VisualizerSettings {
    /// Bar colours fall back to the theme's `accent`/`secondary` colours, then
    /// to fixed defaults.
    pub fn from_config(config: &SiteConfig) -> Self {
        let visualizer = config.audio().and_then(|a| a.visualizer.as_ref());
        let colors = visualizer.and_then(|v| v.colors.as_ref());

        let sensitivity = visualizer
            .and_then(|v| v.sensitivity)
            .filter(|s| s.is_finite() && *s > 0.0)
            .unwrap_or(DEFAULT_SENSITIVITY);
        let smoothing = visualizer
            .and_then(|v| v.smoothing)
            .filter(|s| s.is_finite())
            .map_or(DEFAULT_SMOOTHING, |s| s.clamp(0.0, 1.0));

        let primary = colors
            .and_then(|c| c.primary.as_deref())
            .filter(|c| !c.is_empty())
            .or_else(|| config.theme_color("accent"))
            .unwrap_or(DEFAULT_PRIMARY);
        let secondary = colors
            .and_then(|c| c.secondary.as_deref())
            .filter(|c| !c.is_empty())
            .or_else(|| config.theme_color("secondary"))
            .unwrap_or(DEFAULT_SECONDARY);

        Self {
            sensitivity,
            smoothing,
            primary: primary.to_string(),
            secondary: secondary.to_string(),
        }
    }
}

/// Horizontal placement of `bins` bars separated by [`BAR_SPACING`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    pub bar_width: f64,
    pub start_x: f64,
}

impl BarLayout {
    pub fn new(canvas_width: f64, bins: usize) -> Self {
        if bins == 0 {
            return Self {
                bar_width: 0.0,
                start_x: 0.0,
            };
        }
        let n = bins as f64;
        let total_spacing = (n - 1.0) * BAR_SPACING;
        let bar_width = ((canvas_width - total_spacing) / n).max(1.0);
        let start_x = (canvas_width - (n * bar_width + total_spacing)) / 2.0;
        Self { bar_width, start_x }
    }

    pub fn x(&self, index: usize) -> f64 {
        self.start_x + index as f64 * (self.bar_width + BAR_SPACING)
    }
}

/// One bar, in canvas coordinates (y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

pub fn bar_height(magnitude: u8, canvas_height: f64, sensitivity: f64) -> f64 {
    (f64::from(magnitude) / 255.0 * canvas_height * sensitivity).max(MIN_BAR_HEIGHT)
}

/// Geometry of every bar for one frame of byte frequency data.
pub fn frame_bars(data: &[u8], width: f64, height: f64, sensitivity: f64) -> Vec<Bar> {
    let layout = BarLayout::new(width, data.len());
    data.iter()
        .enumerate()
        .map(|(i, &magnitude)| {
            let h = bar_height(magnitude, height, sensitivity);
            Bar {
                x: layout.x(i),
                y: height - h,
                width: layout.bar_width,
                height: h,
            }
        })
        .collect()
}
