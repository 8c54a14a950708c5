use eframe::egui::{Align2, Color32, FontId, Galley, Painter, Rect, pos2, vec2};
use std::sync::Arc;

use crate::ticker::TickerDisplay;
use crate::ui::config::{UI_CONFIG, UI_TEXT};

/// Font size of the integer part for a panel `width` pixels wide.
pub fn figure_size(width: f32) -> f32 {
    (width * UI_CONFIG.figure_width_fraction).clamp(UI_CONFIG.figure_min_size, UI_CONFIG.figure_max_size)
}

struct FigureParts {
    currency: Arc<Galley>,
    integer: Arc<Galley>,
    decimal: Arc<Galley>,
    glow: Option<Arc<Galley>>,
    gap: f32,
}

impl FigureParts {
    fn width(&self) -> f32 {
        self.currency.size().x + self.integer.size().x + self.decimal.size().x + 2.0 * self.gap
    }

    fn height(&self) -> f32 {
        self.integer.size().y
    }
}

/// Paints the ticker figure straight from the animator's display buffers.
pub struct TickerView<'a> {
    pub display: &'a TickerDisplay,
    pub currency: &'a str,
    /// Pulse scale, 1.0 when idle
    pub scale: f32,
    /// Glow halo under the integer part (off in low motion mode)
    pub glow: bool,
    pub paused: bool,
}

impl TickerView<'_> {
    pub fn paint(&self, painter: &Painter, rect: Rect) {
        let colors = UI_CONFIG.colors;

        let mut size = figure_size(rect.width()) * self.scale;
        let mut parts = self.layout(painter, size);
        let max_width = rect.width() * 0.95;
        if parts.width() > max_width && parts.width() > 0.0 {
            // Long salaries: shrink to fit instead of clipping
            size *= max_width / parts.width();
            parts = self.layout(painter, size);
        }

        let center = rect.center();
        let top = center.y - parts.height() / 2.0;
        let bottom = top + parts.height();
        let mut x = center.x - parts.width() / 2.0;

        painter.text(
            pos2(center.x, top - 16.0),
            Align2::CENTER_BOTTOM,
            UI_TEXT.ticker_heading,
            FontId::monospace(UI_CONFIG.heading_font_size),
            colors.heading,
        );

        // Currency sits at the top like a superscript
        painter.galley(pos2(x, top), parts.currency.clone(), colors.currency);
        x += parts.currency.size().x + parts.gap;

        if let Some(glow) = &parts.glow {
            let r = UI_CONFIG.glow_radius;
            for offset in [
                vec2(-r, 0.0),
                vec2(r, 0.0),
                vec2(0.0, -r),
                vec2(0.0, r),
                vec2(-r, -r),
                vec2(r, r),
                vec2(-r, r),
                vec2(r, -r),
            ] {
                painter.galley(pos2(x, top) + offset, glow.clone(), colors.glow);
            }
        }
        painter.galley(pos2(x, top), parts.integer.clone(), colors.figure);
        x += parts.integer.size().x + parts.gap;

        // Decimals share the integer's bottom edge
        painter.galley(
            pos2(x, bottom - parts.decimal.size().y),
            parts.decimal.clone(),
            colors.decimals,
        );

        let progress_rect = painter.text(
            pos2(center.x, bottom + 28.0),
            Align2::CENTER_TOP,
            &self.display.progress,
            FontId::monospace(UI_CONFIG.progress_font_size),
            colors.progress,
        );

        if self.paused {
            painter.text(
                pos2(center.x, progress_rect.bottom() + 12.0),
                Align2::CENTER_TOP,
                UI_TEXT.label_paused,
                FontId::monospace(UI_CONFIG.progress_font_size),
                Color32::from_rgb(255, 215, 0),
            );
        }
    }

    fn layout(&self, painter: &Painter, size: f32) -> FigureParts {
        let colors = UI_CONFIG.colors;
        let integer_font = FontId::proportional(size);
        FigureParts {
            currency: painter.layout_no_wrap(
                self.currency.to_string(),
                FontId::proportional(size * UI_CONFIG.currency_size_ratio),
                colors.currency,
            ),
            integer: painter.layout_no_wrap(
                self.display.integer.clone(),
                integer_font.clone(),
                colors.figure,
            ),
            decimal: painter.layout_no_wrap(
                self.display.decimal.clone(),
                FontId::monospace(size * UI_CONFIG.decimals_size_ratio),
                colors.decimals,
            ),
            glow: self
                .glow
                .then(|| painter.layout_no_wrap(self.display.integer.clone(), integer_font, colors.glow)),
            gap: size * 0.08,
        }
    }
}
