use crate::logic::calculations::round_to_u64;
use crate::report::format_indian;
use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Color bands as `(lower bound, color)`, ascending.
type Bands = &'static [(u64, Color)];

const SCORE_BANDS: Bands = &[
    (0, Theme::ERROR),
    (50, Theme::WARNING),
    (65, Theme::HIGHLIGHT),
    (80, Theme::SUCCESS),
];

const PERCENT_BANDS: Bands = &[(0, Theme::HARVEST)];

const RAINFALL_BANDS: Bands = &[
    (0, Theme::WARNING),
    (600, Theme::RAIN),
    (1500, Theme::MONSOON),
];

/// Wettest reference region (Mumbai) sits just under this.
const RAINFALL_FULL_SCALE_MM: u64 = 2600;

/// Whole-number reading with a fill bar against a fixed full scale.
pub struct GaugeWidget<'a> {
    title: &'a str,
    reading: Option<u64>,
    unit: &'a str,
    full_scale: u64,
    bands: Bands,
}

impl<'a> GaugeWidget<'a> {
    fn new(title: &'a str, reading: Option<u64>, unit: &'a str, full_scale: u64, bands: Bands) -> Self {
        Self {
            title,
            reading,
            unit,
            full_scale,
            bands,
        }
    }

    fn band_color(&self, reading: u64) -> Color {
        self.bands
            .iter()
            .rev()
            .find(|(floor, _)| reading >= *floor)
            .map(|(_, color)| *color)
            .unwrap_or(Theme::FG)
    }

    fn filled_cells(&self, reading: u64, width: u16) -> u16 {
        if self.full_scale == 0 {
            return 0;
        }
        let capped = reading.min(self.full_scale);
        (u64::from(width) * capped / self.full_scale) as u16
    }
}

impl Widget for GaugeWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 3 || area.width < 10 {
            return;
        }

        let block = Block::default()
            .title(self.title)
            .borders(Borders::ALL)
            .border_style(Theme::border());

        let inner = block.inner(area);
        block.render(area, buf);

        let Some(reading) = self.reading else {
            Paragraph::new(Span::styled("N/A", Theme::dim())).render(inner, buf);
            return;
        };

        let color = self.band_color(reading);
        let label = format!("{}{}", format_indian(reading), self.unit);
        Paragraph::new(Line::from(Span::styled(label, Style::default().fg(color))))
            .render(inner, buf);

        if inner.height < 2 {
            return;
        }
        let y = inner.y + 1;
        let filled = self.filled_cells(reading, inner.width);
        for offset in 0..inner.width {
            let ch = if offset < filled { '█' } else { '░' };
            buf[(inner.x + offset, y)].set_char(ch).set_fg(color);
        }
    }
}

/// Feasibility score, colored by the status bands it falls into.
pub fn score_gauge(title: &str, score: u32) -> GaugeWidget<'_> {
    GaugeWidget::new(title, Some(u64::from(score)), "%", 100, SCORE_BANDS)
}

pub fn percent_gauge(title: &str, percent: u32) -> GaugeWidget<'_> {
    GaugeWidget::new(title, Some(u64::from(percent)), "%", 100, PERCENT_BANDS)
}

pub fn rainfall_gauge(title: &str, annual_mm: Option<f64>) -> GaugeWidget<'_> {
    GaugeWidget::new(
        title,
        annual_mm.map(round_to_u64),
        " mm",
        RAINFALL_FULL_SCALE_MM,
        RAINFALL_BANDS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(gauge: GaugeWidget<'_>) -> String {
        let area = Rect::new(0, 0, 20, 4);
        let mut buf = Buffer::empty(area);
        gauge.render(area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn score_colors_follow_status_bands() {
        let gauge = score_gauge("Score", 90);
        assert_eq!(gauge.band_color(90), Theme::SUCCESS);
        assert_eq!(gauge.band_color(80), Theme::SUCCESS);
        assert_eq!(gauge.band_color(70), Theme::HIGHLIGHT);
        assert_eq!(gauge.band_color(55), Theme::WARNING);
        assert_eq!(gauge.band_color(10), Theme::ERROR);
    }

    #[test]
    fn bar_fill_is_capped_at_full_scale() {
        let gauge = rainfall_gauge("Rain", Some(1300.0));
        assert_eq!(gauge.filled_cells(1300, 18), 9);
        assert_eq!(gauge.filled_cells(5000, 18), 18);
        assert_eq!(gauge.filled_cells(0, 18), 0);
    }

    #[test]
    fn renders_value_and_bar() {
        let text = rendered(percent_gauge("Flood", 50));
        assert!(text.contains("50%"));
        assert!(text.contains('█'));
        assert!(text.contains('░'));
    }

    #[test]
    fn rainfall_reading_uses_indian_grouping() {
        let text = rendered(rainfall_gauge("Rain", Some(2543.0)));
        assert!(text.contains("2,543 mm"));
    }

    #[test]
    fn missing_value_renders_na() {
        let text = rendered(rainfall_gauge("Rain", None));
        assert!(text.contains("N/A"));
    }
}
