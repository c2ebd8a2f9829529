//! Terminal width probe backing the fitting engine.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::fit::TextMetric;

/// Measures text in terminal display columns.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellWidth;

impl CellWidth {
    /// Display columns occupied by `text`.
    #[must_use]
    pub fn columns(text: &str) -> usize {
        text.width()
    }
}

impl TextMetric for CellWidth {
    fn width_of(&self, text: &str) -> f64 {
        f64::from(u32::try_from(Self::columns(text)).unwrap_or(u32::MAX))
    }
}

/// Clip `text` to `width` columns, ending in `…` when anything was cut.
#[must_use]
pub fn clip_with_ellipsis(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut clipped = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > width {
            break;
        }
        clipped.push(ch);
        used += ch_width;
    }
    clipped.push('…');
    clipped
}
