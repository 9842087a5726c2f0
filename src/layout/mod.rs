//! Layout resolution
//!
//! Maps each slide spec to a [`Slide`] full of draw primitives. Selection is
//! exhaustive over the closed [`SlideSpec`] enum; every rule is a pure
//! function of its fields and the [`LayoutContext`], which carries the theme,
//! fonts, and deck-level strings explicitly (no ambient captured state).
//!
//! Within one slide, primitives are emitted background → decorative →
//! structural cards/bars → text → footer, since later primitives paint on
//! top of earlier ones.

pub mod cards;
pub mod cover;
pub mod flow;
pub mod helpers;
pub mod lists;

use crate::assets::Logo;
use crate::deck::{Deck, Slide};
use crate::request::{DeckRequest, SlideSpec};
use crate::theme::{ColorTheme, FontPairing};

/// Everything a layout rule may consult besides its own slide fields
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext<'a> {
    pub theme: &'a ColorTheme,
    pub fonts: &'a FontPairing,
    pub client: &'a str,
    pub company: &'a str,
    pub presentation_type: &'a str,
    pub tone: &'a str,
    /// Formatted "Month Year" label shown on the title slide, injected by
    /// the caller so the resolver stays deterministic
    pub date_label: &'a str,
    pub logo: Option<&'a Logo>,
    /// 1-based page number of the slide being resolved
    pub page: usize,
    /// Total slide count, for the footer counter
    pub total: usize,
}

/// Resolve one slide spec into a slide
pub fn resolve_slide(spec: &SlideSpec, ctx: &LayoutContext) -> Slide {
    match spec {
        SlideSpec::Title(s) => cover::title(s, ctx),
        SlideSpec::Agenda(s) => lists::agenda(s, ctx),
        SlideSpec::TwoColumn(s) => lists::two_column(s, ctx),
        SlideSpec::Stats(s) => cards::stats(s, ctx),
        SlideSpec::Timeline(s) => flow::timeline(s, ctx),
        SlideSpec::IconGrid(s) => cards::icon_grid(s, ctx),
        SlideSpec::Comparison(s) => lists::comparison(s, ctx),
        SlideSpec::Quote(s) => cover::quote(s, ctx),
        SlideSpec::MetricBar(s) => flow::metric_bar(s, ctx),
        SlideSpec::ProcessFlow(s) => flow::process_flow(s, ctx),
        SlideSpec::Checklist(s) => lists::checklist(s, ctx),
        SlideSpec::BigStatement(s) => cover::big_statement(s, ctx),
        SlideSpec::Pricing(s) => cards::pricing(s, ctx),
        SlideSpec::Team(s) => cards::team(s, ctx),
        SlideSpec::Closing(s) => cover::closing(s, ctx),
        SlideSpec::Content(s) => lists::content(s, ctx),
    }
}

/// Resolve a whole request into a deck, in input slide order
pub fn resolve_deck(
    request: &DeckRequest,
    theme: &ColorTheme,
    fonts: &FontPairing,
    logo: Option<&Logo>,
    date_label: &str,
) -> Deck {
    let total = request.slides.len();
    let mut deck = Deck::new();
    for (index, spec) in request.slides.iter().enumerate() {
        let ctx = LayoutContext {
            theme,
            fonts,
            client: request.client_name.as_str(),
            company: request.company_name.as_str(),
            presentation_type: request.presentation_type.as_str(),
            tone: request.tone.as_str(),
            date_label,
            logo,
            page: index + 1,
            total,
        };
        deck.push(resolve_slide(spec, &ctx));
    }
    deck
}
