//! Vertically stacked list layouts: agenda, content (default), checklist,
//! two_column, comparison
//!
//! These share the per-row vertical stacking policy: row height is capped
//! and shrinks once the item count exceeds the vertical budget, so any
//! number of items fits without overflow.

use crate::deck::{Align, Slide, TextStyle, MARGIN};
use crate::request::{
    AgendaSlide, ChecklistSlide, ComparisonSlide, ContentSlide, Text, TwoColumnSlide,
};

use super::helpers;
use super::LayoutContext;

/// Slide heading: section label plus the 28pt title.
fn heading(slide: &mut Slide, title: &str, caption: &str, ctx: &LayoutContext) {
    if !caption.is_empty() {
        helpers::section_label(slide, MARGIN, 0.45, caption, ctx);
    }
    slide.text(
        MARGIN,
        0.75,
        9.0,
        0.65,
        title,
        TextStyle::body(ctx.fonts.header, 28.0, &ctx.theme.text_dark).bold(),
    );
}

/// Agenda: numbered rows with oval badges and hairline dividers.
pub fn agenda(spec: &AgendaSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.text_light);

    helpers::accent_bar_top(&mut slide, &theme.primary);
    helpers::dot_grid(&mut slide, 8.5, 0.55, 3, 5, &theme.primary);
    heading(&mut slide, spec.title.as_str(), "Agenda", ctx);

    let top = 1.55;
    let row_h = helpers::stack_height(0.62, 3.6, spec.bullets.len());
    for (i, bullet) in spec.bullets.iter().enumerate() {
        let y = top + i as f64 * row_h;
        let badge = 0.4;
        slide.oval(MARGIN, y + (row_h - badge) / 2.0, badge, badge, &theme.primary, 1.0);
        slide.text(
            MARGIN,
            y + (row_h - badge) / 2.0,
            badge,
            badge,
            &format!("{:02}", i + 1),
            TextStyle::body(ctx.fonts.body, 11.0, &theme.text_light)
                .bold()
                .align(Align::Center)
                .middle(),
        );
        slide.text(
            MARGIN + 0.6,
            y,
            8.2,
            row_h,
            bullet.as_str(),
            TextStyle::body(ctx.fonts.body, 15.0, &theme.text_dark).middle(),
        );
        if i + 1 < spec.bullets.len() {
            slide.line(
                MARGIN + 0.6,
                y + row_h,
                MARGIN + 8.6,
                y + row_h,
                &theme.secondary,
                0.75,
            );
        }
    }

    helpers::footer(&mut slide, ctx, false);
    slide
}

/// Default content layout, also the fallback for unknown tags.
///
/// Subtitle presence shifts the content card's top edge and shrinks its
/// height, moving every later y-coordinate on the slide.
pub fn content(spec: &ContentSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.text_light);

    helpers::accent_bar_top(&mut slide, &theme.primary);
    heading(&mut slide, spec.title.as_str(), ctx.presentation_type, ctx);

    let card_top = if spec.subtitle.is_empty() {
        1.45
    } else {
        slide.text(
            MARGIN,
            1.42,
            9.0,
            0.35,
            spec.subtitle.as_str(),
            TextStyle::body(ctx.fonts.body, 15.0, &theme.text_muted),
        );
        1.75
    };
    let card_h = helpers::FOOTER_Y - card_top - 0.25;
    slide.rect(MARGIN, card_top, 9.0, card_h, &theme.light);

    if !spec.bullets.is_empty() {
        let inner_top = card_top + 0.3;
        let row_h = helpers::stack_height(0.6, card_h - 0.6, spec.bullets.len());
        for (i, bullet) in spec.bullets.iter().enumerate() {
            let y = inner_top + i as f64 * row_h;
            slide.rect(MARGIN + 0.35, y + row_h / 2.0 - 0.02, 0.18, 0.05, &theme.accent);
            slide.text(
                MARGIN + 0.7,
                y,
                7.9,
                row_h,
                bullet.as_str(),
                TextStyle::body(ctx.fonts.body, 14.0, &theme.text_dark).middle(),
            );
        }
    } else if !spec.body.is_empty() {
        slide.text(
            MARGIN + 0.35,
            card_top + 0.3,
            8.3,
            card_h - 0.6,
            spec.body.as_str(),
            TextStyle::body(ctx.fonts.body, 13.0, &theme.text_dark),
        );
    }

    helpers::footer(&mut slide, ctx, false);
    slide
}

/// Checklist: check badges down the left, same offset chain as content.
pub fn checklist(spec: &ChecklistSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.text_light);

    helpers::accent_bar_top(&mut slide, &theme.primary);
    heading(&mut slide, spec.title.as_str(), "Checklist", ctx);

    let list_top = if spec.subtitle.is_empty() {
        1.55
    } else {
        slide.text(
            MARGIN,
            1.45,
            9.0,
            0.35,
            spec.subtitle.as_str(),
            TextStyle::body(ctx.fonts.body, 15.0, &theme.text_muted),
        );
        1.85
    };
    let avail = helpers::FOOTER_Y - list_top - 0.2;
    let row_h = helpers::stack_height(0.6, avail, spec.items.len());
    for (i, item) in spec.items.iter().enumerate() {
        let y = list_top + i as f64 * row_h;
        let badge = 0.34;
        slide.oval(MARGIN, y + (row_h - badge) / 2.0, badge, badge, &theme.accent, 1.0);
        slide.text(
            MARGIN,
            y + (row_h - badge) / 2.0,
            badge,
            badge,
            "\u{2713}",
            TextStyle::body(ctx.fonts.body, 12.0, &theme.text_light)
                .bold()
                .align(Align::Center)
                .middle(),
        );
        slide.text(
            MARGIN + 0.55,
            y,
            8.3,
            row_h,
            item.as_str(),
            TextStyle::body(ctx.fonts.body, 14.0, &theme.text_dark).middle(),
        );
    }

    helpers::footer(&mut slide, ctx, false);
    slide
}

/// One bulleted column card for two_column.
fn column_card(
    slide: &mut Slide,
    x: f64,
    w: f64,
    title: &Text,
    bullets: &[Text],
    ctx: &LayoutContext,
) {
    let theme = ctx.theme;
    let top = 1.55;
    slide.rect(x, top, w, 3.3, &theme.light);
    slide.text(
        x + 0.3,
        top + 0.2,
        w - 0.6,
        0.45,
        title.as_str(),
        TextStyle::body(ctx.fonts.header, 17.0, &theme.primary).bold(),
    );
    slide.rect(x + 0.3, top + 0.68, 0.9, 0.05, &theme.accent);

    let row_h = helpers::stack_height(0.52, 2.3, bullets.len());
    for (i, bullet) in bullets.iter().enumerate() {
        let y = top + 0.9 + i as f64 * row_h;
        slide.rect(x + 0.3, y + row_h / 2.0 - 0.02, 0.14, 0.04, &theme.accent);
        slide.text(
            x + 0.58,
            y,
            w - 0.9,
            row_h,
            bullet.as_str(),
            TextStyle::body(ctx.fonts.body, 13.0, &theme.text_dark).middle(),
        );
    }
}

/// Two side-by-side bulleted cards.
pub fn two_column(spec: &TwoColumnSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.text_light);

    helpers::accent_bar_top(&mut slide, &theme.primary);
    heading(&mut slide, spec.title.as_str(), ctx.presentation_type, ctx);

    let parts = helpers::partition(9.0, 2, 0.4);
    let (x0, w) = parts[0];
    let (x1, _) = parts[1];
    column_card(
        &mut slide,
        MARGIN + x0,
        w,
        &spec.left_title,
        &spec.left_bullets,
        ctx,
    );
    column_card(
        &mut slide,
        MARGIN + x1,
        w,
        &spec.right_title,
        &spec.right_bullets,
        ctx,
    );

    helpers::footer(&mut slide, ctx, false);
    slide
}

/// Comparison: light panel vs primary panel with a central VS badge.
pub fn comparison(spec: &ComparisonSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.text_light);

    helpers::accent_bar_top(&mut slide, &theme.primary);
    heading(&mut slide, spec.title.as_str(), "Comparison", ctx);

    let top = 1.55;
    let panel_h = 3.3;
    let parts = helpers::partition(9.0, 2, 0.4);
    let (x0, w) = parts[0];
    let (x1, _) = parts[1];
    let left_x = MARGIN + x0;
    let right_x = MARGIN + x1;

    slide.rect(left_x, top, w, panel_h, &theme.light);
    slide.rect(right_x, top, w, panel_h, &theme.primary);

    let panel = |slide: &mut Slide, x: f64, title: &Text, points: &[Text], text_color: &str| {
        slide.text(
            x,
            top + 0.2,
            w,
            0.45,
            title.as_str(),
            TextStyle::body(ctx.fonts.header, 18.0, text_color)
                .bold()
                .align(Align::Center),
        );
        let row_h = helpers::stack_height(0.5, panel_h - 1.0, points.len());
        for (i, point) in points.iter().enumerate() {
            let y = top + 0.85 + i as f64 * row_h;
            slide.text(
                x + 0.35,
                y,
                w - 0.7,
                row_h,
                point.as_str(),
                TextStyle::body(ctx.fonts.body, 13.0, text_color).middle(),
            );
        }
    };
    panel(
        &mut slide,
        left_x,
        &spec.left_title,
        &spec.left_points,
        &theme.text_dark,
    );
    panel(
        &mut slide,
        right_x,
        &spec.right_title,
        &spec.right_points,
        &theme.text_light,
    );

    // Central VS badge straddles the gap between the panels
    let badge = 0.7;
    let cx = 5.0 - badge / 2.0;
    let cy = top + panel_h / 2.0 - badge / 2.0;
    slide.oval(cx, cy, badge, badge, &theme.accent, 1.0);
    slide.text(
        cx,
        cy,
        badge,
        badge,
        "VS",
        TextStyle::body(ctx.fonts.header, 14.0, &theme.text_light)
            .bold()
            .align(Align::Center)
            .middle(),
    );

    helpers::footer(&mut slide, ctx, false);
    slide
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::DrawPrimitive;
    use crate::layout::testing;
    use crate::theme::{ColorTheme, FontPairing};

    fn text_prims(slide: &Slide) -> Vec<(&str, f64)> {
        slide
            .primitives
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Text { content, y, .. } => Some((content.as_str(), *y)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_agenda_rows_shrink_past_budget() {
        let theme = ColorTheme::default();
        let fonts = FontPairing::default();
        let ctx = testing::ctx(&theme, &fonts);
        let few = agenda(
            &AgendaSlide {
                title: "Agenda".into(),
                bullets: vec!["a".into(), "b".into(), "c".into()],
            },
            &ctx,
        );
        let many = agenda(
            &AgendaSlide {
                title: "Agenda".into(),
                bullets: (0..9).map(|i| Text::new(&format!("item {i}"))).collect(),
            },
            &ctx,
        );
        // Last item of the long agenda still sits above the footer band
        let last_y = text_prims(&many)
            .iter()
            .filter(|(c, _)| c.starts_with("item"))
            .map(|(_, y)| *y)
            .fold(0.0_f64, f64::max);
        assert!(last_y < helpers::FOOTER_Y);
        assert!(few.primitives.len() < many.primitives.len());
    }

    #[test]
    fn test_agenda_empty_bullets_render_no_rows() {
        let theme = ColorTheme::default();
        let fonts = FontPairing::default();
        let ctx = testing::ctx(&theme, &fonts);
        let slide = agenda(
            &AgendaSlide {
                title: "Agenda".into(),
                bullets: vec![],
            },
            &ctx,
        );
        // No badges: the only oval-free content is heading, decor, footer
        let ovals = slide
            .primitives
            .iter()
            .filter(|p| matches!(p, DrawPrimitive::Oval { alpha, .. } if *alpha >= 1.0))
            .count();
        assert_eq!(ovals, 0);
    }

    #[test]
    fn test_content_subtitle_shifts_card() {
        let theme = ColorTheme::default();
        let fonts = FontPairing::default();
        let ctx = testing::ctx(&theme, &fonts);
        let card_top = |slide: &Slide| -> f64 {
            slide
                .primitives
                .iter()
                .find_map(|p| match p {
                    DrawPrimitive::Rect { x, y, w, fill, .. }
                        if *fill == theme.light && *w > 8.0 && *x >= MARGIN - 1e-9 =>
                    {
                        Some(*y)
                    }
                    _ => None,
                })
                .expect("content card present")
        };
        let without = content(
            &ContentSlide {
                title: "T".into(),
                bullets: vec!["a".into()],
                ..ContentSlide::default()
            },
            &ctx,
        );
        let with = content(
            &ContentSlide {
                title: "T".into(),
                subtitle: "S".into(),
                bullets: vec!["a".into()],
                ..ContentSlide::default()
            },
            &ctx,
        );
        assert!((card_top(&without) - 1.45).abs() < 1e-9);
        assert!((card_top(&with) - 1.75).abs() < 1e-9);
    }

    #[test]
    fn test_content_body_used_when_no_bullets() {
        let theme = ColorTheme::default();
        let fonts = FontPairing::default();
        let ctx = testing::ctx(&theme, &fonts);
        let slide = content(
            &ContentSlide {
                title: "T".into(),
                body: "A paragraph of body text.".into(),
                ..ContentSlide::default()
            },
            &ctx,
        );
        assert!(text_prims(&slide)
            .iter()
            .any(|(c, _)| c.contains("paragraph")));
    }

    #[test]
    fn test_checklist_subtitle_offset_chain() {
        let theme = ColorTheme::default();
        let fonts = FontPairing::default();
        let ctx = testing::ctx(&theme, &fonts);
        let first_badge_y = |slide: &Slide| -> f64 {
            slide
                .primitives
                .iter()
                .find_map(|p| match p {
                    DrawPrimitive::Oval { y, fill, .. } if *fill == theme.accent => Some(*y),
                    _ => None,
                })
                .expect("check badge present")
        };
        let plain = checklist(
            &ChecklistSlide {
                title: "T".into(),
                items: vec!["x".into()],
                ..ChecklistSlide::default()
            },
            &ctx,
        );
        let with_subtitle = checklist(
            &ChecklistSlide {
                title: "T".into(),
                subtitle: "S".into(),
                items: vec!["x".into()],
            },
            &ctx,
        );
        assert!((first_badge_y(&with_subtitle) - first_badge_y(&plain) - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_two_column_cards_split_evenly() {
        let theme = ColorTheme::default();
        let fonts = FontPairing::default();
        let ctx = testing::ctx(&theme, &fonts);
        let slide = two_column(
            &TwoColumnSlide {
                title: "T".into(),
                left_title: "Now".into(),
                left_bullets: vec!["a".into()],
                right_title: "Later".into(),
                right_bullets: vec!["b".into()],
            },
            &ctx,
        );
        let cards: Vec<(f64, f64)> = slide
            .primitives
            .iter()
            .filter_map(|p| match p {
                DrawPrimitive::Rect { x, w, h, fill, .. }
                    if *fill == theme.light && *h > 3.0 =>
                {
                    Some((*x, *w))
                }
                _ => None,
            })
            .collect();
        assert_eq!(cards.len(), 2);
        assert!((cards[0].1 - 4.3).abs() < 1e-9);
        assert!((cards[1].0 - 5.2).abs() < 1e-9);
    }

    #[test]
    fn test_comparison_panels_and_badge() {
        let theme = ColorTheme::default();
        let fonts = FontPairing::default();
        let ctx = testing::ctx(&theme, &fonts);
        let slide = comparison(
            &ComparisonSlide {
                title: "Us vs Them".into(),
                left_title: "Them".into(),
                right_title: "Us".into(),
                left_points: vec!["slow".into()],
                right_points: vec!["fast".into()],
            },
            &ctx,
        );
        let has_primary_panel = slide.primitives.iter().any(|p| {
            matches!(p, DrawPrimitive::Rect { fill, h, .. } if *fill == theme.primary && *h > 3.0)
        });
        assert!(has_primary_panel);
        assert!(text_prims(&slide).iter().any(|(c, _)| *c == "VS"));
    }
}
