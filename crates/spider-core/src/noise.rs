//! Procedural grain overlay, rendered by the browser from an inline SVG
//! `feTurbulence` filter.

use rand::Rng;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

const MONO_MATRIX: &str = "0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 0 1 0";
const COLOR_MATRIX: &str = "1 0 0 0 0 0 1 0 0 0 0 0 1 0 0 0 0 0 1 0";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NoiseKind {
    /// Alpha-only grain, multiplied over the content.
    #[default]
    Mono,
    Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoiseParams {
    /// 1..=10, smaller means coarser grain.
    pub size: u8,
    /// 0..=100, overlay opacity in percent.
    pub density: u8,
    pub kind: NoiseKind,
}

impl Default for NoiseParams {
    fn default() -> Self {
        Self {
            size: 3,
            density: 5,
            kind: NoiseKind::Mono,
        }
    }
}

impl NoiseParams {
    pub fn clamped(self) -> Self {
        Self {
            size: self.size.clamp(1, 10),
            density: self.density.min(100),
            kind: self.kind,
        }
    }

    #[inline]
    pub fn base_frequency(&self) -> f32 {
        self.size as f32 * 0.2
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.density as f32 / 100.0
    }
}

/// Everything needed to paint one overlay layer.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseOverlay {
    pub params: NoiseParams,
    pub filter_id: String,
    pub seed: u32,
}

impl NoiseOverlay {
    pub fn new<R: Rng + ?Sized>(params: NoiseParams, rng: &mut R) -> Self {
        let filter_id: String = (0..ID_LEN)
            .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
            .collect();
        Self {
            params: params.clamped(),
            filter_id: format!("noise-{filter_id}"),
            seed: rng.gen_range(0..100),
        }
    }

    pub fn color_matrix(&self) -> &'static str {
        match self.params.kind {
            NoiseKind::Mono => MONO_MATRIX,
            NoiseKind::Color => COLOR_MATRIX,
        }
    }

    /// CSS `mix-blend-mode` for the overlay element.
    pub fn blend_mode(&self) -> &'static str {
        match self.params.kind {
            NoiseKind::Mono => "multiply",
            NoiseKind::Color => "normal",
        }
    }

    /// Percent-encoded `data:` URI of the SVG.
    pub fn data_uri(&self) -> String {
        let id = &self.filter_id;
        format!(
            "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'%3E\
             %3Cfilter id='{id}'%3E\
             %3CfeTurbulence type='fractalNoise' baseFrequency='{freq:.1}' numOctaves='1' seed='{seed}'/%3E\
             %3CfeColorMatrix values='{matrix}'/%3E\
             %3C/filter%3E\
             %3Crect width='100%25' height='100%25' filter='url(%23{id})' opacity='{opacity:.2}'/%3E\
             %3C/svg%3E",
            freq = self.params.base_frequency(),
            seed = self.seed,
            matrix = self.color_matrix(),
            opacity = self.params.opacity(),
        )
    }

    /// Value for the CSS `background-image` property.
    pub fn css_background(&self) -> String {
        format!("url(\"{}\")", self.data_uri())
    }
}
