//! Color cycler: an index walking a fixed palette, wrapping at the end.

use crate::error::{AppError, Result};

/// The cycle shown by the color button.
pub const DEFAULT_PALETTE: &[&str] = &["red", "green", "yellow"];

#[derive(Debug, Clone)]
pub struct ColorCycler {
    palette: &'static [&'static str],
    /// Always in `[0, palette.len())`.
    index: usize,
}

impl Default for ColorCycler {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE,
            index: 0,
        }
    }
}

impl ColorCycler {
    #[allow(dead_code)]
    pub fn with_palette(palette: &'static [&'static str]) -> Result<Self> {
        if palette.is_empty() {
            return Err(AppError::EmptyPalette);
        }
        Ok(Self { palette, index: 0 })
    }

    /// Step to the next color, wrapping to the first after the last.
    pub fn advance(&mut self) {
        self.index = (self.index + 1) % self.palette.len();
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current_color(&self) -> &'static str {
        self.palette[self.index]
    }

    pub fn palette(&self) -> &'static [&'static str] {
        self.palette
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_first_color() {
        let cycler = ColorCycler::default();
        assert_eq!(cycler.index(), 0);
        assert_eq!(cycler.current_color(), "red");
    }

    #[test]
    fn five_clicks_land_on_yellow() {
        let mut cycler = ColorCycler::default();
        for _ in 0..5 {
            cycler.advance();
        }
        assert_eq!(cycler.index(), 2);
        assert_eq!(cycler.current_color(), "yellow");
    }

    #[test]
    fn index_is_click_count_mod_palette_len() {
        let mut cycler = ColorCycler::default();
        let k = cycler.palette().len();
        for n in 1..=20 {
            cycler.advance();
            assert_eq!(cycler.index(), n % k);
            assert!(cycler.index() < k);
        }
    }

    #[test]
    fn single_color_palette_stays_put() {
        static MONO: &[&str] = &["blue"];
        let mut cycler = ColorCycler::with_palette(MONO).unwrap();
        cycler.advance();
        cycler.advance();
        assert_eq!(cycler.current_color(), "blue");
    }

    #[test]
    fn empty_palette_is_rejected() {
        assert!(matches!(
            ColorCycler::with_palette(&[]),
            Err(AppError::EmptyPalette)
        ));
    }
}
