//! Integration tests for slide geometry and footer/background conventions

use decksmith::deck::{DrawPrimitive, Slide};
use decksmith::{build_deck, DeckOptions, DeckRequest};

fn deck_for(slides_json: &str) -> decksmith::Deck {
    let json = format!(
        r#"{{
            "outputPath": "o.svg",
            "clientName": "Acme",
            "companyName": "Northwind",
            "presentationType": "Proposal",
            "slides": {slides_json}
        }}"#
    );
    let request = DeckRequest::from_json(&json).expect("should parse");
    let options = DeckOptions::new().with_date_label("March 2026");
    build_deck(&request, &options)
}

fn texts(slide: &Slide) -> Vec<&str> {
    slide
        .primitives
        .iter()
        .filter_map(|p| match p {
            DrawPrimitive::Text { content, .. } => Some(content.as_str()),
            _ => None,
        })
        .collect()
}

fn has_page_footer(slide: &Slide, page: usize, total: usize) -> bool {
    let label = format!("{page} / {total}");
    texts(slide).iter().any(|t| **t == label)
}

#[test]
fn test_title_and_closing_skip_the_footer() {
    let deck = deck_for(
        r#"[
            {"layout": "title", "title": "Kickoff"},
            {"layout": "agenda", "title": "Agenda", "bullets": ["a"]},
            {"layout": "closing"}
        ]"#,
    );
    assert!(!has_page_footer(&deck.slides[0], 1, 3));
    assert!(has_page_footer(&deck.slides[1], 2, 3));
    assert!(!has_page_footer(&deck.slides[2], 3, 3));
}

#[test]
fn test_dark_layouts_use_the_dark_background() {
    let deck = deck_for(
        r#"[
            {"layout": "title", "title": "T"},
            {"layout": "quote", "quote": "Q"},
            {"layout": "big_statement", "statement": "S"},
            {"layout": "closing"},
            {"layout": "content", "title": "C"}
        ]"#,
    );
    let dark = "#0F1629";
    assert_eq!(deck.slides[0].background, dark);
    assert_eq!(deck.slides[1].background, dark);
    assert_eq!(deck.slides[2].background, dark);
    assert_eq!(deck.slides[3].background, dark);
    assert_eq!(deck.slides[4].background, "#FFFFFF");
}

#[test]
fn test_stats_render_at_most_four_cards() {
    let deck = deck_for(
        r#"[{"layout": "stats", "title": "Numbers", "stats": [
            {"value": "1", "label": "a"},
            {"value": "2", "label": "b"},
            {"value": "3", "label": "c"},
            {"value": "4", "label": "d"},
            {"value": "5", "label": "e"},
            {"value": "6", "label": "f"}
        ]}]"#,
    );
    let shown = texts(&deck.slides[0]);
    assert!(shown.contains(&"4"));
    assert!(!shown.contains(&"5"));
    assert!(!shown.contains(&"6"));
}

#[test]
fn test_icon_grid_column_count_follows_item_count() {
    // 4 items wrap onto 2 columns, so only 2 distinct badge x positions
    let deck = deck_for(
        r#"[{"layout": "icon_grid", "title": "Features", "items": [
            {"icon": "A", "title": "one"},
            {"icon": "B", "title": "two"},
            {"icon": "C", "title": "three"},
            {"icon": "D", "title": "four"}
        ]}]"#,
    );
    let secondary = "#CADCFC";
    let mut xs: Vec<i64> = deck.slides[0]
        .primitives
        .iter()
        .filter_map(|p| match p {
            DrawPrimitive::Oval { x, fill, .. } if fill == secondary => Some((*x * 1000.0) as i64),
            _ => None,
        })
        .collect();
    xs.sort_unstable();
    xs.dedup();
    assert_eq!(xs.len(), 2);
}

#[test]
fn test_pricing_highlight_shifts_and_inverts_the_card() {
    let deck = deck_for(
        r#"[{"layout": "pricing", "title": "Plans", "tiers": [
            {"name": "Starter", "price": "$29"},
            {"name": "Business", "price": "$49", "highlight": true}
        ]}]"#,
    );
    let slide = &deck.slides[0];
    let primary = "#1E2761";
    let highlighted_card = slide.primitives.iter().any(|p| {
        matches!(p, DrawPrimitive::Rect { fill, h, .. } if fill == primary && *h > 3.0)
    });
    assert!(highlighted_card, "highlighted tier should fill with primary");

    let y_of = |name: &str| {
        slide
            .primitives
            .iter()
            .find_map(|p| match p {
                DrawPrimitive::Text { y, content, .. } if content == name => Some(*y),
                _ => None,
            })
            .expect("tier name should render")
    };
    let shift = y_of("Business") - y_of("Starter");
    assert!((shift - 0.3).abs() < 1e-9);
    assert!(texts(slide).contains(&"RECOMMENDED"));
}

#[test]
fn test_metric_bar_fill_is_proportional() {
    let deck = deck_for(
        r#"[{"layout": "metric_bar", "title": "Perf", "metrics": [
            {"label": "Half", "value": 50, "max_value": 100},
            {"label": "Full", "value": 100, "max_value": 100},
            {"label": "None", "value": 0, "max_value": 100}
        ]}]"#,
    );
    let accentless: Vec<f64> = deck.slides[0]
        .primitives
        .iter()
        .filter_map(|p| match p {
            DrawPrimitive::Rect { w, fill, .. } if fill == "#1E2761" => Some(*w),
            _ => None,
        })
        .collect();
    assert!(accentless.iter().any(|w| (*w - 2.75).abs() < 1e-9));
    assert!(accentless.iter().any(|w| (*w - 5.5).abs() < 1e-9));
    // zero-value metric draws no fill bar at all
    assert_eq!(
        accentless.iter().filter(|w| **w <= 5.5 + 1e-9).count(),
        2
    );
}

#[test]
fn test_timeline_without_steps_skips_the_track() {
    let deck = deck_for(r#"[{"layout": "timeline", "title": "Plan"}]"#);
    let has_line = deck.slides[0]
        .primitives
        .iter()
        .any(|p| matches!(p, DrawPrimitive::Line { .. }));
    assert!(!has_line);
    assert!(texts(&deck.slides[0]).contains(&"Plan"));
}

#[test]
fn test_title_slide_carries_the_date_label() {
    let deck = deck_for(r#"[{"layout": "title", "title": "Kickoff"}]"#);
    let joined = texts(&deck.slides[0]).join("|");
    assert!(joined.contains("March 2026"));
    assert!(joined.contains("Northwind"));
}

#[test]
fn test_two_column_cards_split_the_content_width() {
    let deck = deck_for(
        r#"[{"layout": "two_column", "title": "Split",
            "left_title": "L", "left_bullets": ["a"],
            "right_title": "R", "right_bullets": ["b"]}]"#,
    );
    let mut card_xs: Vec<f64> = deck.slides[0]
        .primitives
        .iter()
        .filter_map(|p| match p {
            DrawPrimitive::Rect { x, w, .. } if (*w - 4.3).abs() < 1e-9 => Some(*x),
            _ => None,
        })
        .collect();
    card_xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    assert_eq!(card_xs.len(), 2);
    assert!((card_xs[0] - 0.5).abs() < 1e-9);
    assert!((card_xs[1] - 5.2).abs() < 1e-9);
}
