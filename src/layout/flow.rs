//! Sequential layouts: timeline, process_flow, metric_bar

use crate::deck::{Align, Slide, TextStyle, MARGIN};
use crate::request::{MetricBarSlide, ProcessFlowSlide, TimelineSlide};

use super::helpers;
use super::LayoutContext;

/// Width of the filled track on a metric row
pub const METRIC_TRACK_W: f64 = 5.5;
/// Left edge of the metric track
const METRIC_TRACK_X: f64 = 2.9;

/// Timeline: nodes on a horizontal track, phase above, duration and
/// description below.
pub fn timeline(spec: &TimelineSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.text_light);

    helpers::accent_bar_top(&mut slide, &theme.primary);
    helpers::section_label(&mut slide, MARGIN, 0.45, "Timeline", ctx);
    slide.text(
        MARGIN,
        0.75,
        9.0,
        0.65,
        spec.title.as_str(),
        TextStyle::body(ctx.fonts.header, 28.0, &theme.text_dark).bold(),
    );

    let track_y = 2.5;
    if !spec.steps.is_empty() {
        slide.line(MARGIN, track_y, MARGIN + 9.0, track_y, &theme.secondary, 2.0);
    }

    let node = 0.28;
    for ((dx, w), step) in helpers::partition(9.0, spec.steps.len(), 0.3)
        .into_iter()
        .zip(&spec.steps)
    {
        let x = MARGIN + dx;
        let cx = x + w / 2.0;
        slide.oval(cx - node / 2.0, track_y - node / 2.0, node, node, &theme.primary, 1.0);
        slide.text(
            x,
            1.75,
            w,
            0.55,
            step.phase.as_str(),
            TextStyle::body(ctx.fonts.body, 14.0, &theme.text_dark)
                .bold()
                .align(Align::Center),
        );
        if !step.duration.is_empty() {
            slide.text(
                x,
                track_y + 0.25,
                w,
                0.3,
                &step.duration.as_str().to_uppercase(),
                TextStyle::body(ctx.fonts.body, 10.0, &theme.accent)
                    .bold()
                    .align(Align::Center),
            );
        }
        slide.text(
            x + 0.1,
            track_y + 0.65,
            w - 0.2,
            1.4,
            step.description.as_str(),
            TextStyle::body(ctx.fonts.body, 11.0, &theme.text_muted).align(Align::Center),
        );
    }

    helpers::footer(&mut slide, ctx, false);
    slide
}

/// Process flow: numbered cards joined by arrow connectors.
pub fn process_flow(spec: &ProcessFlowSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.text_light);

    helpers::accent_bar_top(&mut slide, &theme.primary);
    helpers::section_label(&mut slide, MARGIN, 0.45, "How it works", ctx);
    slide.text(
        MARGIN,
        0.75,
        9.0,
        0.65,
        spec.title.as_str(),
        TextStyle::body(ctx.fonts.header, 28.0, &theme.text_dark).bold(),
    );

    let top = 1.8;
    let card_h = 2.2;
    let parts = helpers::partition(9.0, spec.steps.len(), 0.2);
    for (i, ((dx, w), step)) in parts.iter().zip(&spec.steps).enumerate() {
        let x = MARGIN + dx;
        slide.rect(x, top, *w, card_h, &theme.light);
        slide.text(
            x + 0.2,
            top + 0.15,
            w - 0.4,
            0.35,
            &format!("{:02}", i + 1),
            TextStyle::body(ctx.fonts.header, 14.0, &theme.accent).bold(),
        );
        slide.text(
            x + 0.2,
            top + 0.55,
            w - 0.4,
            0.4,
            step.title.as_str(),
            TextStyle::body(ctx.fonts.body, 14.0, &theme.text_dark).bold(),
        );
        slide.text(
            x + 0.2,
            top + 1.0,
            w - 0.4,
            card_h - 1.15,
            step.description.as_str(),
            TextStyle::body(ctx.fonts.body, 10.5, &theme.text_muted),
        );

        // Arrow connector into the next card
        if i + 1 < parts.len() {
            let (next_dx, _) = parts[i + 1];
            let from_x = x + w;
            let to_x = MARGIN + next_dx;
            let mid_y = top + card_h / 2.0;
            slide.line(from_x, mid_y, to_x, mid_y, &theme.accent, 2.0);
            slide.line(to_x - 0.07, mid_y - 0.06, to_x, mid_y, &theme.accent, 2.0);
            slide.line(to_x - 0.07, mid_y + 0.06, to_x, mid_y, &theme.accent, 2.0);
        }
    }

    helpers::footer(&mut slide, ctx, false);
    slide
}

/// Metric bars: label, proportional track fill, display value per row.
pub fn metric_bar(spec: &MetricBarSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.text_light);

    helpers::accent_bar_top(&mut slide, &theme.primary);
    helpers::section_label(&mut slide, MARGIN, 0.45, "Performance", ctx);
    slide.text(
        MARGIN,
        0.75,
        9.0,
        0.65,
        spec.title.as_str(),
        TextStyle::body(ctx.fonts.header, 28.0, &theme.text_dark).bold(),
    );

    let top = 1.65;
    let row_h = helpers::stack_height(0.8, 3.5, spec.metrics.len());
    let bar_h = 0.28;
    for (i, metric) in spec.metrics.iter().enumerate() {
        let y = top + i as f64 * row_h;
        let bar_y = y + (row_h - bar_h) / 2.0;
        slide.text(
            MARGIN,
            y,
            2.2,
            row_h,
            metric.label.as_str(),
            TextStyle::body(ctx.fonts.body, 13.0, &theme.text_dark).bold().middle(),
        );
        slide.rect(METRIC_TRACK_X, bar_y, METRIC_TRACK_W, bar_h, &theme.secondary);
        if let Some(fill_w) =
            helpers::bar_fill(METRIC_TRACK_W, metric.value.value(), metric.max_value.value())
        {
            slide.rect(METRIC_TRACK_X, bar_y, fill_w, bar_h, &theme.primary);
        }
        let display = if metric.display.is_empty() {
            format_value(metric.value.value())
        } else {
            metric.display.as_str().to_string()
        };
        slide.text(
            8.5,
            y,
            1.0,
            row_h,
            &display,
            TextStyle::body(ctx.fonts.body, 13.0, &theme.primary)
                .bold()
                .align(Align::Right)
                .middle(),
        );
    }

    helpers::footer(&mut slide, ctx, false);
    slide
}

/// Trim trailing zeros from a metric value for display
fn format_value(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{}", value.round() as i64)
    } else {
        format!("{value:.1}")
    }
}
