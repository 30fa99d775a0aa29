use crate::application::sync_controller::{ChartBinding, SourceSpec};
use crate::domain::colors::{PSR_SOLAR, PSR_WIND_OFFSHORE, PSR_WIND_ONSHORE};
use anyhow::Context;
use chrono_tz::Tz;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub display: DisplaySettings,
    pub sources: SourceSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplaySettings {
    /// IANA timezone name used for all date formatting and axis math.
    pub timezone: String,
    /// Compact layout: skip explicit axis bounding on updates.
    #[serde(default)]
    pub compact: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SourceSettings {
    pub generation_forecast_url: String,
    pub load_forecast_url: String,
    pub load_actual_url: String,
    pub renewable_share_url: String,
    /// Optional; the actual-generation chart only exists when configured.
    #[serde(default)]
    pub generation_actual_url: Option<String>,
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

impl DisplaySettings {
    pub fn parse_timezone(&self) -> anyhow::Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(anyhow::Error::msg)
            .with_context(|| format!("unknown IANA timezone {:?}", self.timezone))
    }
}

/// Replace `${var}` placeholders in a template string.
pub fn render_template(template: &str, vars: &HashMap<String, String>) -> String {
    let mut result = template.to_string();
    for (key, value) in vars {
        let placeholder = format!("${{{}}}", key);
        result = result.replace(&placeholder, value);
    }
    result
}

/// The dashboard's chart panels: day-ahead solar/wind forecast, total-load
/// comparison, renewable share, and (when a source is configured) actual
/// generation per production type with only solar and wind visible at first.
pub fn standard_bindings(sources: &SourceSettings) -> Vec<ChartBinding> {
    let mut bindings = vec![
        ChartBinding {
            chart_id: "day_ahead_solar_wind".to_string(),
            title_template: "Forecasted generation from ${start} to ${end}".to_string(),
            source: SourceSpec::Generation {
                url: sources.generation_forecast_url.clone(),
                default_visible: None,
            },
        },
        ChartBinding {
            chart_id: "day_ahead_total_load".to_string(),
            title_template: "Forecasted total load from ${start} to ${end}".to_string(),
            source: SourceSpec::TotalLoad {
                forecast_url: sources.load_forecast_url.clone(),
                actual_url: sources.load_actual_url.clone(),
            },
        },
        ChartBinding {
            chart_id: "renewable_percentage".to_string(),
            title_template: "Forecasted percentage of renewable production from ${start} to ${end}"
                .to_string(),
            source: SourceSpec::RenewableShare {
                url: sources.renewable_share_url.clone(),
            },
        },
    ];

    if let Some(url) = &sources.generation_actual_url {
        bindings.push(ChartBinding {
            chart_id: "actual_generation".to_string(),
            title_template: "Actual generation per production type from ${start} to ${end}"
                .to_string(),
            source: SourceSpec::Generation {
                url: url.clone(),
                default_visible: Some(vec![
                    PSR_SOLAR.to_string(),
                    PSR_WIND_OFFSHORE.to_string(),
                    PSR_WIND_ONSHORE.to_string(),
                ]),
            },
        });
    }

    bindings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sources() -> SourceSettings {
        SourceSettings {
            generation_forecast_url: "http://api/solar-wind-forecast".to_string(),
            load_forecast_url: "http://api/total-load-forecast".to_string(),
            load_actual_url: "http://api/total-load-actual".to_string(),
            renewable_share_url: "http://api/renewable-percentage-forecast".to_string(),
            generation_actual_url: None,
        }
    }

    #[test]
    fn test_render_template() {
        let mut vars = HashMap::new();
        vars.insert("start".to_string(), "January 1 2024".to_string());
        vars.insert("end".to_string(), "January 7 2024".to_string());

        let result = render_template("Forecasted generation from ${start} to ${end}", &vars);

        assert_eq!(
            result,
            "Forecasted generation from January 1 2024 to January 7 2024"
        );
    }

    #[test]
    fn test_parse_timezone() {
        let display = DisplaySettings {
            timezone: "Europe/Amsterdam".to_string(),
            compact: false,
        };
        assert_eq!(
            display.parse_timezone().unwrap(),
            chrono_tz::Europe::Amsterdam
        );

        let display = DisplaySettings {
            timezone: "Europe/Atlantis".to_string(),
            compact: false,
        };
        assert!(display.parse_timezone().is_err());
    }

    #[test]
    fn test_standard_bindings_without_actual_generation() {
        let bindings = standard_bindings(&sources());
        let ids: Vec<&str> = bindings.iter().map(|b| b.chart_id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "day_ahead_solar_wind",
                "day_ahead_total_load",
                "renewable_percentage"
            ]
        );
    }

    #[test]
    fn test_actual_generation_binding_is_config_gated() {
        let mut sources = sources();
        sources.generation_actual_url = Some("http://api/actual-generation".to_string());

        let bindings = standard_bindings(&sources);
        assert_eq!(bindings.len(), 4);

        let actual = bindings.last().unwrap();
        assert_eq!(actual.chart_id, "actual_generation");
        match &actual.source {
            SourceSpec::Generation {
                default_visible: Some(codes),
                ..
            } => assert_eq!(codes, &vec!["B16", "B18", "B19"]),
            other => panic!("unexpected source spec: {other:?}"),
        }
    }
}
