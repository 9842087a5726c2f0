//! Request data model
//!
//! The wire format is a single JSON document (see the README for the full
//! shape). Per-field handling is deliberately permissive: missing or
//! wrong-typed scalars default to empty via the lenient [`Text`] / [`Num`]
//! types, missing arrays default to empty, and an unknown or unparseable
//! slide falls back to the default content layout. The only hard error is
//! malformed JSON itself.

use std::fmt;

use serde::de::Deserializer;
use serde::Deserialize;
use serde_json::Value;

/// The top-level presentation request, parsed once per invocation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckRequest {
    /// File path the finished deck is written to
    pub output_path: String,
    #[serde(default)]
    pub client_name: Text,
    #[serde(default)]
    pub company_name: Text,
    #[serde(default)]
    pub presentation_type: Text,
    #[serde(default)]
    pub tone: Text,
    #[serde(default)]
    pub slides: Vec<SlideSpec>,
    #[serde(default)]
    pub colors: RawColors,
    #[serde(default)]
    pub logo_path: Option<String>,
    #[serde(default)]
    pub font_style: Text,
}

impl DeckRequest {
    /// Parse a request from a JSON string
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }
}

/// The possibly-partial color map from the request, pre-resolution
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawColors {
    #[serde(default)]
    pub primary: Option<String>,
    #[serde(default)]
    pub secondary: Option<String>,
    #[serde(default)]
    pub accent: Option<String>,
    #[serde(default)]
    pub dark: Option<String>,
    #[serde(default)]
    pub light: Option<String>,
    #[serde(default)]
    pub text_dark: Option<String>,
    #[serde(default)]
    pub text_light: Option<String>,
    #[serde(default)]
    pub text_muted: Option<String>,
}

/// A lenient string: accepts any JSON scalar, defaults to empty.
///
/// Numbers and booleans are rendered with their JSON representation; null,
/// arrays, and objects collapse to the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text(pub String);

impl Text {
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<&str> for Text {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for Text {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self(match value {
            Value::String(s) => s,
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => String::new(),
        }))
    }
}

/// A lenient number: accepts a JSON number or a numeric string
/// (leading/trailing junk like `%` or whitespace is trimmed), defaults to 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Num(pub f64);

impl Num {
    pub fn value(self) -> f64 {
        self.0
    }
}

impl<'de> Deserialize<'de> for Num {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self(match value {
            Value::Number(n) => n.as_f64().unwrap_or(0.0),
            Value::String(s) => s
                .trim()
                .trim_start_matches('$')
                .trim_end_matches('%')
                .trim()
                .parse()
                .unwrap_or(0.0),
            _ => 0.0,
        }))
    }
}

/// One slide, discriminated by its `layout` tag.
///
/// Closed enum over the 14 known tags; anything else (including a missing
/// tag or a slide whose typed fields fail to parse) becomes `Content`.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideSpec {
    Title(TitleSlide),
    Agenda(AgendaSlide),
    TwoColumn(TwoColumnSlide),
    Stats(StatsSlide),
    Timeline(TimelineSlide),
    IconGrid(IconGridSlide),
    Comparison(ComparisonSlide),
    Quote(QuoteSlide),
    MetricBar(MetricBarSlide),
    ProcessFlow(ProcessFlowSlide),
    Checklist(ChecklistSlide),
    BigStatement(BigStatementSlide),
    Pricing(PricingSlide),
    Team(TeamSlide),
    Closing(ClosingSlide),
    Content(ContentSlide),
}

impl SlideSpec {
    /// The layout tag this spec was selected by (default content reports
    /// `content`).
    pub fn tag(&self) -> &'static str {
        match self {
            SlideSpec::Title(_) => "title",
            SlideSpec::Agenda(_) => "agenda",
            SlideSpec::TwoColumn(_) => "two_column",
            SlideSpec::Stats(_) => "stats",
            SlideSpec::Timeline(_) => "timeline",
            SlideSpec::IconGrid(_) => "icon_grid",
            SlideSpec::Comparison(_) => "comparison",
            SlideSpec::Quote(_) => "quote",
            SlideSpec::MetricBar(_) => "metric_bar",
            SlideSpec::ProcessFlow(_) => "process_flow",
            SlideSpec::Checklist(_) => "checklist",
            SlideSpec::BigStatement(_) => "big_statement",
            SlideSpec::Pricing(_) => "pricing",
            SlideSpec::Team(_) => "team",
            SlideSpec::Closing(_) => "closing",
            SlideSpec::Content(_) => "content",
        }
    }

    fn from_value(value: Value) -> Self {
        let tag = value
            .get("layout")
            .and_then(Value::as_str)
            .unwrap_or("content")
            .to_string();

        // Attempt the typed parse for the tag; any failure degrades to the
        // default content layout, salvaging the title.
        fn parse<T, F>(value: &Value, wrap: F) -> SlideSpec
        where
            T: serde::de::DeserializeOwned,
            F: FnOnce(T) -> SlideSpec,
        {
            serde_json::from_value(value.clone())
                .map(wrap)
                .unwrap_or_else(|_| SlideSpec::fallback(value))
        }

        match tag.as_str() {
            "title" => parse(&value, SlideSpec::Title),
            "agenda" => parse(&value, SlideSpec::Agenda),
            "two_column" => parse(&value, SlideSpec::TwoColumn),
            "stats" => parse(&value, SlideSpec::Stats),
            "timeline" => parse(&value, SlideSpec::Timeline),
            "icon_grid" => parse(&value, SlideSpec::IconGrid),
            "comparison" => parse(&value, SlideSpec::Comparison),
            "quote" => parse(&value, SlideSpec::Quote),
            "metric_bar" => parse(&value, SlideSpec::MetricBar),
            "process_flow" => parse(&value, SlideSpec::ProcessFlow),
            "checklist" => parse(&value, SlideSpec::Checklist),
            "big_statement" => parse(&value, SlideSpec::BigStatement),
            "pricing" => parse(&value, SlideSpec::Pricing),
            "team" => parse(&value, SlideSpec::Team),
            "closing" => parse(&value, SlideSpec::Closing),
            _ => parse(&value, SlideSpec::Content),
        }
    }

    fn fallback(value: &Value) -> Self {
        let title = value
            .get("title")
            .and_then(Value::as_str)
            .unwrap_or_default();
        SlideSpec::Content(ContentSlide {
            title: Text::new(title),
            ..ContentSlide::default()
        })
    }
}

impl<'de> Deserialize<'de> for SlideSpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Even a non-object slide degrades to the default layout rather than
        // failing the whole request.
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(value))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TitleSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub subtitle: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AgendaSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub bullets: Vec<Text>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ContentSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub subtitle: Text,
    #[serde(default)]
    pub bullets: Vec<Text>,
    #[serde(default)]
    pub body: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TwoColumnSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub left_title: Text,
    #[serde(default)]
    pub left_bullets: Vec<Text>,
    #[serde(default)]
    pub right_title: Text,
    #[serde(default)]
    pub right_bullets: Vec<Text>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatsSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub stats: Vec<StatItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StatItem {
    #[serde(default)]
    pub value: Text,
    #[serde(default)]
    pub label: Text,
    #[serde(default)]
    pub description: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TimelineSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub steps: Vec<TimelineStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TimelineStep {
    #[serde(default)]
    pub phase: Text,
    #[serde(default)]
    pub description: Text,
    #[serde(default)]
    pub duration: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IconGridSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub subtitle: Text,
    #[serde(default)]
    pub items: Vec<IconGridItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct IconGridItem {
    #[serde(default)]
    pub icon: Text,
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub description: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ComparisonSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub left_title: Text,
    #[serde(default)]
    pub left_points: Vec<Text>,
    #[serde(default)]
    pub right_title: Text,
    #[serde(default)]
    pub right_points: Vec<Text>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct QuoteSlide {
    #[serde(default)]
    pub quote: Text,
    #[serde(default)]
    pub attribution: Text,
    #[serde(default)]
    pub role: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MetricBarSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub metrics: Vec<MetricItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct MetricItem {
    #[serde(default)]
    pub label: Text,
    #[serde(default)]
    pub value: Num,
    /// Scale maximum; zero or missing falls back to 100 at layout time
    #[serde(default)]
    pub max_value: Num,
    /// Display text for the value column; empty renders the raw value
    #[serde(default)]
    pub display: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProcessFlowSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub steps: Vec<ProcessStep>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProcessStep {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub description: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChecklistSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub subtitle: Text,
    #[serde(default)]
    pub items: Vec<Text>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BigStatementSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub statement: Text,
    #[serde(default)]
    pub supporting: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PricingSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub tiers: Vec<PricingTier>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PricingTier {
    #[serde(default)]
    pub name: Text,
    #[serde(default)]
    pub price: Text,
    #[serde(default)]
    pub period: Text,
    #[serde(default)]
    pub features: Vec<Text>,
    #[serde(default)]
    pub highlight: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TeamSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TeamMember {
    #[serde(default)]
    pub name: Text,
    #[serde(default)]
    pub role: Text,
    #[serde(default)]
    pub bio: Text,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ClosingSlide {
    #[serde(default)]
    pub title: Text,
    #[serde(default)]
    pub subtitle: Text,
    #[serde(default)]
    pub contact: Text,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_minimal_request() {
        let request = DeckRequest::from_json(r#"{"outputPath": "/tmp/deck.svg"}"#)
            .expect("should parse");
        assert_eq!(request.output_path, "/tmp/deck.svg");
        assert!(request.slides.is_empty());
        assert!(request.client_name.is_empty());
        assert!(request.logo_path.is_none());
    }

    #[test]
    fn test_missing_output_path_is_an_error() {
        assert!(DeckRequest::from_json(r#"{"slides": []}"#).is_err());
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(DeckRequest::from_json("{not json").is_err());
    }

    #[test]
    fn test_slide_tag_dispatch() {
        let request = DeckRequest::from_json(
            r#"{
                "outputPath": "out.svg",
                "slides": [
                    {"layout": "title", "title": "Acme"},
                    {"layout": "stats", "stats": [{"value": "98%", "label": "uptime"}]},
                    {"layout": "pricing", "tiers": [{"name": "Pro", "highlight": true}]}
                ]
            }"#,
        )
        .expect("should parse");
        assert_eq!(request.slides[0].tag(), "title");
        assert_eq!(request.slides[1].tag(), "stats");
        assert_eq!(request.slides[2].tag(), "pricing");
    }

    #[test]
    fn test_unknown_layout_falls_back_to_content() {
        let request = DeckRequest::from_json(
            r#"{"outputPath": "o", "slides": [{"layout": "hologram", "title": "X"}]}"#,
        )
        .expect("should parse");
        match &request.slides[0] {
            SlideSpec::Content(slide) => assert_eq!(slide.title.as_str(), "X"),
            other => panic!("expected content fallback, got {}", other.tag()),
        }
    }

    #[test]
    fn test_missing_layout_falls_back_to_content() {
        let request = DeckRequest::from_json(
            r#"{"outputPath": "o", "slides": [{"title": "Plain"}]}"#,
        )
        .expect("should parse");
        assert_eq!(request.slides[0].tag(), "content");
    }

    #[test]
    fn test_wrong_typed_array_degrades_to_content() {
        // `stats` as a string instead of an array: the typed parse fails and
        // the slide degrades to the default layout, keeping the title.
        let request = DeckRequest::from_json(
            r#"{"outputPath": "o", "slides": [{"layout": "stats", "title": "KPIs", "stats": "oops"}]}"#,
        )
        .expect("should parse");
        match &request.slides[0] {
            SlideSpec::Content(slide) => assert_eq!(slide.title.as_str(), "KPIs"),
            other => panic!("expected content fallback, got {}", other.tag()),
        }
    }

    #[test]
    fn test_lenient_text_accepts_scalars() {
        let v: Text = serde_json::from_value(serde_json::json!(42)).unwrap();
        assert_eq!(v.as_str(), "42");
        let v: Text = serde_json::from_value(serde_json::json!(true)).unwrap();
        assert_eq!(v.as_str(), "true");
        let v: Text = serde_json::from_value(serde_json::json!(null)).unwrap();
        assert!(v.is_empty());
        let v: Text = serde_json::from_value(serde_json::json!({"a": 1})).unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_lenient_num_accepts_strings() {
        let v: Num = serde_json::from_value(serde_json::json!(12.5)).unwrap();
        assert_eq!(v.value(), 12.5);
        let v: Num = serde_json::from_value(serde_json::json!("98%")).unwrap();
        assert_eq!(v.value(), 98.0);
        let v: Num = serde_json::from_value(serde_json::json!("$49")).unwrap();
        assert_eq!(v.value(), 49.0);
        let v: Num = serde_json::from_value(serde_json::json!("n/a")).unwrap();
        assert_eq!(v.value(), 0.0);
    }

    #[test]
    fn test_metric_defaults() {
        let slide: MetricBarSlide = serde_json::from_value(serde_json::json!({
            "metrics": [{"label": "NPS", "value": 62}]
        }))
        .unwrap();
        let metric = &slide.metrics[0];
        assert_eq!(metric.value.value(), 62.0);
        assert_eq!(metric.max_value.value(), 0.0);
        assert!(metric.display.is_empty());
    }

    #[test]
    fn test_non_object_slide_degrades_to_content() {
        let request = DeckRequest::from_json(r#"{"outputPath": "o", "slides": ["nope"]}"#)
            .expect("should parse");
        assert_eq!(request.slides[0].tag(), "content");
    }
}
