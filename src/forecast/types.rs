use serde::{Deserialize, Serialize};

/// One forecast point in crate-internal shape, decoupled from the wire
/// format. `ts_text` keeps the provider's "YYYY-MM-DD HH:MM:SS" form so the
/// reducer can match the date component by prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherSample {
    pub ts_text: String,
    pub temp_c: f64,
    pub condition: String,
    pub rain_p: f64,
}

/// What a provider hands back: the resolved display name plus the raw
/// time-ordered sample series.
#[derive(Debug, Clone)]
pub struct CityForecast {
    pub city_name: String,
    pub samples: Vec<WeatherSample>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Fog,
    Rain,
    Heat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastSummary {
    pub city: String,
    pub day_label: String,
    /// One-decimal average ("22.0") or the "N/A" sentinel when no samples
    /// fell on the target day.
    pub avg_temp: String,
    pub alerts: Vec<Alert>,
}

// OpenWeather 5-day / 3-hour forecast wire types. Only the fields the
// pipeline consumes are modeled; serde skips the rest.

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastFeed {
    pub list: Vec<ForecastItem>,
    pub city: FeedCity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastItem {
    pub dt_txt: String,
    pub main: ForecastMain,
    pub weather: Vec<ForecastCondition>,
    #[serde(default)]
    pub pop: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastMain {
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastCondition {
    pub main: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedCity {
    pub name: String,
}

impl From<&ForecastItem> for WeatherSample {
    fn from(item: &ForecastItem) -> Self {
        Self {
            ts_text: item.dt_txt.clone(),
            temp_c: item.main.temp,
            condition: item
                .weather
                .first()
                .map(|w| w.main.clone())
                .unwrap_or_default(),
            rain_p: item.pop,
        }
    }
}

impl From<ForecastFeed> for CityForecast {
    fn from(feed: ForecastFeed) -> Self {
        Self {
            city_name: feed.city.name,
            samples: feed.list.iter().map(WeatherSample::from).collect(),
        }
    }
}
