//! Card-grid layouts: stats, icon_grid, pricing, team
//!
//! All four are built on the equal horizontal partition; icon_grid adds the
//! column-count heuristic for arbitrary item counts.

use crate::deck::{Align, Slide, TextStyle, MARGIN};
use crate::request::{IconGridSlide, PricingSlide, StatsSlide, TeamSlide};

use super::helpers;
use super::LayoutContext;

/// Most stat cards that fit on one row
const STATS_CAP: usize = 4;
/// Gap between stat/pricing/team cards
const CARD_GAP: f64 = 0.25;

/// Stats: up to four cards, each with a top accent strip, big value, label,
/// and description. Items past the fourth are not rendered.
pub fn stats(spec: &StatsSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.text_light);

    helpers::accent_bar_top(&mut slide, &theme.primary);
    helpers::section_label(&mut slide, MARGIN, 0.45, "By the numbers", ctx);
    slide.text(
        MARGIN,
        0.75,
        9.0,
        0.65,
        spec.title.as_str(),
        TextStyle::body(ctx.fonts.header, 28.0, &theme.text_dark).bold(),
    );

    let shown = &spec.stats[..spec.stats.len().min(STATS_CAP)];
    let top = 1.6;
    let card_h = 2.9;
    for ((dx, w), stat) in helpers::partition(9.0, shown.len(), CARD_GAP)
        .into_iter()
        .zip(shown)
    {
        let x = MARGIN + dx;
        slide.rect(x, top, w, card_h, &theme.light);
        slide.rect(x, top, w, 0.06, &theme.primary);
        slide.text(
            x,
            top + 0.5,
            w,
            0.8,
            stat.value.as_str(),
            TextStyle::body(ctx.fonts.header, 34.0, &theme.primary)
                .bold()
                .align(Align::Center),
        );
        slide.text(
            x + 0.15,
            top + 1.45,
            w - 0.3,
            0.4,
            stat.label.as_str(),
            TextStyle::body(ctx.fonts.body, 14.0, &theme.text_dark)
                .bold()
                .align(Align::Center),
        );
        slide.text(
            x + 0.2,
            top + 1.95,
            w - 0.4,
            0.8,
            stat.description.as_str(),
            TextStyle::body(ctx.fonts.body, 11.0, &theme.text_muted).align(Align::Center),
        );
    }

    helpers::footer(&mut slide, ctx, false);
    slide
}

/// Icon grid: column count from the heuristic table, row height clamped.
/// An optional subtitle shifts the grid down.
pub fn icon_grid(spec: &IconGridSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.text_light);

    helpers::accent_bar_top(&mut slide, &theme.primary);
    slide.text(
        MARGIN,
        0.55,
        9.0,
        0.65,
        spec.title.as_str(),
        TextStyle::body(ctx.fonts.header, 28.0, &theme.text_dark).bold(),
    );

    let grid_top = if spec.subtitle.is_empty() {
        1.4
    } else {
        slide.text(
            MARGIN,
            1.25,
            9.0,
            0.35,
            spec.subtitle.as_str(),
            TextStyle::body(ctx.fonts.body, 14.0, &theme.text_muted),
        );
        1.75
    };

    let cols = helpers::grid_columns(spec.items.len());
    let rows = spec.items.len().div_ceil(cols);
    let row_h = helpers::grid_row_height(helpers::FOOTER_Y - grid_top - 0.2, rows);
    let columns = helpers::partition(9.0, cols, CARD_GAP);
    for (i, item) in spec.items.iter().enumerate() {
        let (dx, w) = columns[i % cols];
        let x = MARGIN + dx;
        let y = grid_top + (i / cols) as f64 * row_h;
        let badge = 0.5;
        slide.oval(x, y + 0.1, badge, badge, &theme.secondary, 1.0);
        slide.text(
            x,
            y + 0.1,
            badge,
            badge,
            item.icon.as_str(),
            TextStyle::body(ctx.fonts.body, 16.0, &theme.primary)
                .align(Align::Center)
                .middle(),
        );
        slide.text(
            x + badge + 0.15,
            y + 0.08,
            w - badge - 0.15,
            0.35,
            item.title.as_str(),
            TextStyle::body(ctx.fonts.body, 14.0, &theme.text_dark).bold(),
        );
        slide.text(
            x + badge + 0.15,
            y + 0.46,
            w - badge - 0.15,
            row_h - 0.5,
            item.description.as_str(),
            TextStyle::body(ctx.fonts.body, 10.5, &theme.text_muted),
        );
    }

    helpers::footer(&mut slide, ctx, false);
    slide
}

/// Vertical shift applied to a highlighted tier's content so the badge has
/// room above the name.
const HIGHLIGHT_SHIFT: f64 = 0.3;

/// Pricing: one card per tier; a highlighted tier gets the inverted fill, a
/// "RECOMMENDED" badge, and content shifted down to make room for it.
pub fn pricing(spec: &PricingSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.text_light);

    helpers::accent_bar_top(&mut slide, &theme.primary);
    helpers::section_label(&mut slide, MARGIN, 0.45, "Pricing", ctx);
    slide.text(
        MARGIN,
        0.75,
        9.0,
        0.65,
        spec.title.as_str(),
        TextStyle::body(ctx.fonts.header, 28.0, &theme.text_dark).bold(),
    );

    let top = 1.5;
    let card_h = 3.4;
    for ((dx, w), tier) in helpers::partition(9.0, spec.tiers.len(), CARD_GAP)
        .into_iter()
        .zip(&spec.tiers)
    {
        let x = MARGIN + dx;
        let (card_fill, name_color, price_color, feature_color) = if tier.highlight {
            (
                theme.primary.as_str(),
                theme.text_light.as_str(),
                theme.accent.as_str(),
                theme.text_light.as_str(),
            )
        } else {
            (
                theme.light.as_str(),
                theme.text_dark.as_str(),
                theme.primary.as_str(),
                theme.text_dark.as_str(),
            )
        };
        slide.rect(x, top, w, card_h, card_fill);

        let shift = if tier.highlight {
            // Badge overlaps the card's top edge
            let badge_w = 1.6;
            slide.rect(x + (w - badge_w) / 2.0, top - 0.15, badge_w, 0.3, &theme.accent);
            slide.text(
                x + (w - badge_w) / 2.0,
                top - 0.15,
                badge_w,
                0.3,
                "RECOMMENDED",
                TextStyle::body(ctx.fonts.body, 9.0, &theme.dark)
                    .bold()
                    .align(Align::Center)
                    .middle(),
            );
            HIGHLIGHT_SHIFT
        } else {
            0.0
        };

        slide.text(
            x,
            top + 0.25 + shift,
            w,
            0.4,
            tier.name.as_str(),
            TextStyle::body(ctx.fonts.body, 15.0, name_color)
                .bold()
                .align(Align::Center),
        );
        slide.text(
            x,
            top + 0.7 + shift,
            w,
            0.7,
            tier.price.as_str(),
            TextStyle::body(ctx.fonts.header, 26.0, price_color)
                .bold()
                .align(Align::Center),
        );
        if !tier.period.is_empty() {
            slide.text(
                x,
                top + 1.35 + shift,
                w,
                0.3,
                tier.period.as_str(),
                TextStyle::body(ctx.fonts.body, 10.0, &theme.text_muted).align(Align::Center),
            );
        }

        let feature_top = top + 1.75 + shift;
        let row_h = helpers::stack_height(0.38, card_h - 2.0 - shift, tier.features.len());
        for (i, feature) in tier.features.iter().enumerate() {
            let y = feature_top + i as f64 * row_h;
            slide.rect(x + 0.25, y + row_h / 2.0 - 0.02, 0.12, 0.04, &theme.accent);
            slide.text(
                x + 0.48,
                y,
                w - 0.7,
                row_h,
                feature.as_str(),
                TextStyle::body(ctx.fonts.body, 11.0, feature_color).middle(),
            );
        }
    }

    helpers::footer(&mut slide, ctx, false);
    slide
}

/// Team: avatar initials, name, uppercase role, short bio per member.
pub fn team(spec: &TeamSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.text_light);

    helpers::accent_bar_top(&mut slide, &theme.primary);
    helpers::section_label(&mut slide, MARGIN, 0.45, "The team", ctx);
    slide.text(
        MARGIN,
        0.75,
        9.0,
        0.65,
        spec.title.as_str(),
        TextStyle::body(ctx.fonts.header, 28.0, &theme.text_dark).bold(),
    );

    let top = 1.7;
    for ((dx, w), member) in helpers::partition(9.0, spec.members.len(), CARD_GAP)
        .into_iter()
        .zip(&spec.members)
    {
        let x = MARGIN + dx;
        let avatar = 0.9;
        let ax = x + (w - avatar) / 2.0;
        slide.oval(ax, top, avatar, avatar, &theme.secondary, 1.0);
        slide.text(
            ax,
            top,
            avatar,
            avatar,
            &helpers::initials(member.name.as_str()),
            TextStyle::body(ctx.fonts.header, 20.0, &theme.primary)
                .bold()
                .align(Align::Center)
                .middle(),
        );
        slide.text(
            x,
            top + 1.05,
            w,
            0.35,
            member.name.as_str(),
            TextStyle::body(ctx.fonts.body, 14.0, &theme.text_dark)
                .bold()
                .align(Align::Center),
        );
        slide.text(
            x,
            top + 1.42,
            w,
            0.3,
            &member.role.as_str().to_uppercase(),
            TextStyle::body(ctx.fonts.body, 11.0, &theme.accent)
                .bold()
                .align(Align::Center),
        );
        slide.text(
            x + 0.15,
            top + 1.8,
            w - 0.3,
            1.2,
            member.bio.as_str(),
            TextStyle::body(ctx.fonts.body, 10.0, &theme.text_muted).align(Align::Center),
        );
    }

    helpers::footer(&mut slide, ctx, false);
    slide
}
