//! Dark cover-style layouts: title, quote, big_statement, closing
//!
//! All four use the dark theme background. Only quote and big_statement
//! carry a footer; the opening and closing pages stay clean.

use crate::deck::{Align, Slide, TextStyle, CANVAS_W};
use crate::request::{BigStatementSlide, ClosingSlide, QuoteSlide, TitleSlide};

use super::helpers;
use super::LayoutContext;

/// Title slide: brackets, decorative circles and dots, presentation-type
/// caption, client/title block, subtitle, prepared-by line, logo top-right.
pub fn title(spec: &TitleSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.dark);

    helpers::corner_brackets(&mut slide, &theme.accent, 0.35);
    helpers::decorative_circle(&mut slide, 7.6, -0.9, 2.8, &theme.secondary, 0.08);
    helpers::decorative_circle(&mut slide, 8.9, 3.9, 1.1, &theme.accent, 0.15);
    helpers::dot_grid(&mut slide, 0.7, 3.9, 4, 6, &theme.text_light);

    if !ctx.presentation_type.is_empty() {
        slide.text(
            0.8,
            1.2,
            8.4,
            0.35,
            &ctx.presentation_type.to_uppercase(),
            TextStyle::body(ctx.fonts.body, 13.0, &theme.accent).bold(),
        );
    }

    // Short accent rule above the headline
    slide.rect(0.82, 1.68, 1.2, 0.07, &theme.accent);

    let headline = if spec.title.is_empty() {
        ctx.client
    } else {
        spec.title.as_str()
    };
    slide.text(
        0.8,
        1.9,
        8.4,
        1.2,
        headline,
        TextStyle::body(ctx.fonts.header, 40.0, &theme.text_light).bold(),
    );

    if !spec.subtitle.is_empty() {
        slide.text(
            0.8,
            3.1,
            8.4,
            0.7,
            spec.subtitle.as_str(),
            TextStyle::body(ctx.fonts.body, 18.0, &theme.secondary),
        );
    }

    let mut prepared = Vec::new();
    if !ctx.company.is_empty() {
        prepared.push(format!("Prepared by {}", ctx.company));
    }
    if !ctx.date_label.is_empty() {
        prepared.push(ctx.date_label.to_string());
    }
    if !prepared.is_empty() {
        slide.text(
            0.8,
            4.75,
            6.0,
            0.35,
            &prepared.join(" · "),
            TextStyle::body(ctx.fonts.body, 12.0, &theme.text_muted),
        );
    }

    if let Some(logo) = ctx.logo {
        helpers::place_logo(&mut slide, logo, 8.1, 0.55, 1.2);
    }

    slide
}

/// Quote slide: oversized opening quotation mark, italic quote, attribution.
pub fn quote(spec: &QuoteSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.dark);

    helpers::accent_bar_top(&mut slide, &theme.accent);
    helpers::dot_grid(&mut slide, 8.3, 4.1, 3, 5, &theme.text_light);

    slide.text(
        0.7,
        0.35,
        1.6,
        1.6,
        "\u{201C}",
        TextStyle::body(ctx.fonts.header, 110.0, &theme.accent).bold(),
    );
    slide.text(
        1.35,
        1.85,
        7.4,
        1.9,
        spec.quote.as_str(),
        TextStyle::body(ctx.fonts.header, 24.0, &theme.text_light).italic(),
    );
    if !spec.attribution.is_empty() {
        slide.text(
            1.35,
            3.9,
            7.0,
            0.4,
            &format!("— {}", spec.attribution),
            TextStyle::body(ctx.fonts.body, 15.0, &theme.accent).bold(),
        );
    }
    if !spec.role.is_empty() {
        slide.text(
            1.35,
            4.3,
            7.0,
            0.35,
            spec.role.as_str(),
            TextStyle::body(ctx.fonts.body, 12.0, &theme.text_muted),
        );
    }

    helpers::footer(&mut slide, ctx, true);
    slide
}

/// Big statement slide: a single oversized claim with supporting text.
pub fn big_statement(spec: &BigStatementSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.dark);

    helpers::side_stripe(&mut slide, &theme.accent);
    helpers::decorative_circle(&mut slide, 8.4, 0.4, 1.4, &theme.secondary, 0.1);
    helpers::dot_grid(&mut slide, 8.1, 3.6, 4, 5, &theme.text_light);

    // Statement text prefers the dedicated field, falling back to the title
    let statement = if spec.statement.is_empty() {
        spec.title.as_str()
    } else {
        spec.statement.as_str()
    };
    slide.text(
        0.9,
        1.55,
        8.2,
        2.2,
        statement,
        TextStyle::body(ctx.fonts.header, 32.0, &theme.text_light).bold(),
    );
    if !spec.supporting.is_empty() {
        slide.text(
            0.9,
            3.85,
            7.6,
            0.8,
            spec.supporting.as_str(),
            TextStyle::body(ctx.fonts.body, 15.0, &theme.secondary),
        );
    }

    helpers::footer(&mut slide, ctx, true);
    slide
}

/// Closing slide: centered thank-you block with contact details and logo.
pub fn closing(spec: &ClosingSlide, ctx: &LayoutContext) -> Slide {
    let theme = ctx.theme;
    let mut slide = Slide::new(&theme.dark);

    helpers::corner_brackets(&mut slide, &theme.accent, 0.35);
    helpers::decorative_circle(&mut slide, -0.8, 3.9, 2.4, &theme.secondary, 0.08);
    helpers::decorative_circle(&mut slide, 9.1, -0.5, 1.6, &theme.accent, 0.12);

    let headline = if spec.title.is_empty() {
        "Thank You"
    } else {
        spec.title.as_str()
    };
    slide.text(
        0.5,
        1.7,
        9.0,
        1.0,
        headline,
        TextStyle::body(ctx.fonts.header, 40.0, &theme.text_light)
            .bold()
            .align(Align::Center),
    );

    // Centered accent rule under the headline
    slide.rect((CANVAS_W - 1.2) / 2.0, 2.85, 1.2, 0.07, &theme.accent);

    if !spec.subtitle.is_empty() {
        slide.text(
            1.0,
            3.1,
            8.0,
            0.6,
            spec.subtitle.as_str(),
            TextStyle::body(ctx.fonts.body, 16.0, &theme.secondary).align(Align::Center),
        );
    }
    if !spec.contact.is_empty() {
        slide.text(
            1.0,
            3.75,
            8.0,
            0.45,
            spec.contact.as_str(),
            TextStyle::body(ctx.fonts.body, 14.0, &theme.accent)
                .bold()
                .align(Align::Center),
        );
    }
    if !ctx.company.is_empty() {
        slide.text(
            1.0,
            4.35,
            8.0,
            0.35,
            &ctx.company.to_uppercase(),
            TextStyle::body(ctx.fonts.body, 11.0, &theme.text_muted).align(Align::Center),
        );
    }

    if let Some(logo) = ctx.logo {
        helpers::place_logo(&mut slide, logo, (CANVAS_W - 1.0) / 2.0, 4.75, 1.0);
    }

    slide
}
