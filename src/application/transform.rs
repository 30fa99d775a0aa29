// Series transformers - Raw API payloads into the uniform plotting shape
use crate::domain::colors;
use crate::domain::series::{CategorySeries, SeriesPoint};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    #[error("unexpected payload shape: {0}")]
    Shape(String),
}

impl From<serde_json::Error> for TransformError {
    fn from(err: serde_json::Error) -> Self {
        TransformError::Shape(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct RawPoint {
    #[serde(deserialize_with = "de_point_datetime")]
    datetime: DateTime<Utc>,
    value: f64,
}

#[derive(Debug, Deserialize)]
struct GenerationEntry {
    psr_type: String,
    #[serde(default)]
    psr_type_human_readable: Option<String>,
    points: Vec<RawPoint>,
}

#[derive(Debug, Deserialize)]
struct ForecastedLoadPayload {
    forecasted_load: LoadBody,
}

#[derive(Debug, Deserialize)]
struct ActualLoadPayload {
    actual_load: LoadBody,
}

#[derive(Debug, Deserialize)]
struct LoadBody {
    total_load: PointList,
}

#[derive(Debug, Deserialize)]
struct PointList {
    points: Vec<RawPoint>,
}

#[derive(Debug, Deserialize)]
struct RenewablePayload {
    forecasted_renewable_percentage: Vec<RawPoint>,
}

/// Generation-style payload: a map from category code to a named point list.
/// Emits one series per code, sorted by code so dataset order is
/// deterministic regardless of JSON key order. Point order is preserved as
/// received; the upstream API delivers chronological order.
///
/// `default_visible = None` shows every series; `Some(codes)` hides all
/// categories outside `codes` (the actual-generation chart shows only solar
/// and wind by default).
pub fn generation_series(
    raw: serde_json::Value,
    default_visible: Option<&[String]>,
) -> Result<Vec<CategorySeries>, TransformError> {
    let payload: BTreeMap<String, GenerationEntry> = serde_json::from_value(raw)?;
    Ok(payload
        .into_iter()
        .map(|(code, entry)| {
            let color = colors::color_of(&entry.psr_type);
            let visible = default_visible
                .is_none_or(|codes| codes.iter().any(|c| *c == entry.psr_type));
            CategorySeries {
                category_code: code,
                label: entry
                    .psr_type_human_readable
                    .unwrap_or_else(|| "Unknown".to_string()),
                points: to_points(entry.points),
                color: color.as_ref().map(|c| c.base.clone()),
                border_color: color.map(|c| c.darker),
                visible_by_default: visible,
            }
        })
        .collect())
}

/// Total-load comparison: two independent payloads reduced to exactly two
/// series in the stable order [Forecasted, Actual]. Empty point lists still
/// yield both entries.
pub fn total_load_series(
    forecast_raw: serde_json::Value,
    actual_raw: serde_json::Value,
) -> Result<Vec<CategorySeries>, TransformError> {
    let forecast: ForecastedLoadPayload = serde_json::from_value(forecast_raw)?;
    let actual: ActualLoadPayload = serde_json::from_value(actual_raw)?;
    Ok(vec![
        unstyled_series(
            "forecasted_load",
            "Forecasted",
            forecast.forecasted_load.total_load.points,
        ),
        unstyled_series("actual_load", "Actual", actual.actual_load.total_load.points),
    ])
}

/// Renewable-share payload: one flat point list, one series.
pub fn renewable_share_series(
    raw: serde_json::Value,
) -> Result<Vec<CategorySeries>, TransformError> {
    let payload: RenewablePayload = serde_json::from_value(raw)?;
    Ok(vec![unstyled_series(
        "renewable_percentage",
        "Forecasted renewable percentage",
        payload.forecasted_renewable_percentage,
    )])
}

fn unstyled_series(code: &str, label: &str, points: Vec<RawPoint>) -> CategorySeries {
    CategorySeries {
        category_code: code.to_string(),
        label: label.to_string(),
        points: to_points(points),
        color: None,
        border_color: None,
        visible_by_default: true,
    }
}

fn to_points(raw: Vec<RawPoint>) -> Vec<SeriesPoint> {
    // Values pass through untouched: no unit conversion, no interpolation,
    // no resorting.
    raw.into_iter()
        .map(|p| SeriesPoint::new(p.datetime, p.value))
        .collect()
}

fn de_point_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let text = String::deserialize(deserializer)?;
    parse_point_datetime(&text).map_err(serde::de::Error::custom)
}

/// The upstream API emits RFC 3339 timestamps, sometimes at minute
/// precision without a seconds field ("2024-01-01T00:00Z").
fn parse_point_datetime(text: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%MZ") {
        return Ok(Utc.from_utc_datetime(&naive));
    }
    Err(format!("unrecognized point datetime: {text}"))
}
