pub mod hydrogeology;
pub mod overview;
pub mod rainfall;
pub mod structure;

pub use hydrogeology::HydrogeologyScreen;
pub use overview::OverviewScreen;
pub use rainfall::RainfallScreen;
pub use structure::StructureScreen;

use crate::ui::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Status line shared by every screen. Failures render in the warning color.
pub(crate) fn render_status_message(message: Option<&str>, area: Rect, buf: &mut Buffer) {
    if let Some(msg) = message {
        let lower = msg.to_lowercase();
        let style = if lower.contains("failed") || lower.contains("error") {
            Theme::warning()
        } else {
            Theme::success()
        };
        Paragraph::new(Span::styled(msg, style)).render(area, buf);
    }
}

pub(crate) fn render_nav(area: Rect, buf: &mut Buffer) {
    let nav = Line::from(vec![
        Span::styled("[1]", Theme::nav_key()),
        Span::styled("Overview ", Theme::nav_label()),
        Span::styled("[2]", Theme::nav_key()),
        Span::styled("Rainfall ", Theme::nav_label()),
        Span::styled("[3]", Theme::nav_key()),
        Span::styled("Aquifer ", Theme::nav_label()),
        Span::styled("[4]", Theme::nav_key()),
        Span::styled("Structure ", Theme::nav_label()),
        Span::styled("[r]", Theme::nav_key()),
        Span::styled("Re-estimate ", Theme::nav_label()),
        Span::styled("[e]", Theme::nav_key()),
        Span::styled("Export ", Theme::nav_label()),
        Span::styled("[q]", Theme::nav_key()),
        Span::styled("Quit", Theme::nav_label()),
    ]);

    Paragraph::new(nav).render(area, buf);
}

/// Flatten a rendered buffer into text lines for assertions.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    (area.y..area.y + area.height)
        .map(|y| {
            (area.x..area.x + area.width)
                .map(|x| buf[(x, y)].symbol().to_string())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
pub(crate) fn sample_assessment() -> crate::logic::Assessment {
    use crate::logic::AssessmentService;
    use crate::models::PropertyAttributes;
    use crate::rng::EstimatorRng;

    let mut service = AssessmentService::new(EstimatorRng::from_seed_u64(21));
    let property = PropertyAttributes {
        name: "Asha Patel".into(),
        ..PropertyAttributes::default()
    };
    service
        .assess("Mumbai", property)
        .expect("sample assessment")
}
