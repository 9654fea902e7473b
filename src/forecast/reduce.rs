use super::types::{Alert, AlertKind, ForecastSummary, WeatherSample};
use chrono::{Days, NaiveDate};

pub const FOG_MESSAGE: &str = "🌫 Fog Alert: Low visibility expected";
pub const RAIN_MESSAGE: &str = "🌧 Rain Risk: Possible rainfall";
pub const HEAT_MESSAGE: &str = "🔥 Heat Warning: High temperature";

const RAIN_PROBABILITY_THRESHOLD: f64 = 0.4;
const HEAT_THRESHOLD_C: f64 = 35.0;

/// Calendar date the selector points at. Only "tomorrow" advances the date;
/// every other value targets today.
pub fn target_date(day: &str, today: NaiveDate) -> NaiveDate {
    if day == "tomorrow" {
        today.checked_add_days(Days::new(1)).unwrap_or(today)
    } else {
        today
    }
}

/// Display label for the selector. Only "today" maps to "Today"; anything
/// else falls through to "Tomorrow", matching target_date's asymmetry.
pub fn day_label(day: &str) -> &'static str {
    if day == "today" {
        "Today"
    } else {
        "Tomorrow"
    }
}

/// Reduce a raw sample series to a one-day summary: filter to the target
/// date, classify alerts, dedup them by value, and average the temperatures.
pub fn summarize(
    samples: &[WeatherSample],
    target: NaiveDate,
    city: &str,
    day: &str,
) -> ForecastSummary {
    let date_prefix = target.format("%Y-%m-%d").to_string();
    let matched: Vec<&WeatherSample> = samples
        .iter()
        .filter(|s| s.ts_text.starts_with(&date_prefix))
        .collect();

    let mut alerts: Vec<Alert> = Vec::new();
    for sample in &matched {
        for alert in classify(sample) {
            if !alerts.contains(&alert) {
                alerts.push(alert);
            }
        }
    }

    let avg_temp = if matched.is_empty() {
        "N/A".to_string()
    } else {
        let sum: f64 = matched.iter().map(|s| s.temp_c).sum();
        format!("{:.1}", sum / matched.len() as f64)
    };

    ForecastSummary {
        city: city.to_string(),
        day_label: day_label(day).to_string(),
        avg_temp,
        alerts,
    }
}

// The three checks are independent; one sample can raise all of fog, rain
// and heat at once.
fn classify(sample: &WeatherSample) -> Vec<Alert> {
    let mut alerts = Vec::new();

    if sample.condition == "Fog" || sample.condition == "Mist" {
        alerts.push(Alert {
            kind: AlertKind::Fog,
            message: FOG_MESSAGE.to_string(),
        });
    }

    if sample.condition == "Rain" || sample.rain_p >= RAIN_PROBABILITY_THRESHOLD {
        alerts.push(Alert {
            kind: AlertKind::Rain,
            message: RAIN_MESSAGE.to_string(),
        });
    }

    if sample.temp_c >= HEAT_THRESHOLD_C {
        alerts.push(Alert {
            kind: AlertKind::Heat,
            message: HEAT_MESSAGE.to_string(),
        });
    }

    alerts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(ts_text: &str, temp_c: f64, condition: &str, rain_p: f64) -> WeatherSample {
        WeatherSample {
            ts_text: ts_text.to_string(),
            temp_c,
            condition: condition.to_string(),
            rain_p,
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_target_date_and_label() {
        let today = day(2026, 8, 28);
        assert_eq!(target_date("today", today), today);
        assert_eq!(target_date("tomorrow", today), day(2026, 8, 29));
        assert_eq!(day_label("today"), "Today");
        assert_eq!(day_label("tomorrow"), "Tomorrow");

        // Unrecognized selectors target today's date but label as Tomorrow
        assert_eq!(target_date("yesterday", today), today);
        assert_eq!(day_label("yesterday"), "Tomorrow");
    }

    #[test]
    fn test_average_over_matching_samples() {
        let samples = vec![
            sample("2026-08-28 06:00:00", 10.0, "Clear", 0.0),
            sample("2026-08-28 12:00:00", 20.0, "Clear", 0.0),
            sample("2026-08-28 18:00:00", 30.0, "Clear", 0.0),
            // Different date, must be ignored
            sample("2026-08-29 12:00:00", 99.0, "Clear", 0.0),
        ];

        let summary = summarize(&samples, day(2026, 8, 28), "Paris", "today");

        assert_eq!(summary.avg_temp, "20.0");
        assert_eq!(summary.day_label, "Today");
        assert_eq!(summary.city, "Paris");
        assert!(summary.alerts.is_empty());
    }

    #[test]
    fn test_no_matching_samples_yields_sentinel() {
        let samples = vec![sample("2026-08-27 12:00:00", 20.0, "Clear", 0.0)];

        let summary = summarize(&samples, day(2026, 8, 28), "Paris", "today");

        assert_eq!(summary.avg_temp, "N/A");
        assert!(summary.alerts.is_empty());
    }

    #[test]
    fn test_alerts_deduplicate_by_value() {
        let samples = vec![
            sample("2026-08-28 09:00:00", 20.0, "Rain", 0.8),
            sample("2026-08-28 12:00:00", 21.0, "Rain", 0.9),
        ];

        let summary = summarize(&samples, day(2026, 8, 28), "Paris", "today");

        assert_eq!(summary.alerts.len(), 1);
        assert_eq!(summary.alerts[0].kind, AlertKind::Rain);
        assert_eq!(summary.alerts[0].message, RAIN_MESSAGE);
    }

    #[test]
    fn test_alert_checks_are_independent() {
        // Rain condition + heat temperature on a single sample, no fog
        let samples = vec![sample("2026-08-28 12:00:00", 36.0, "Rain", 0.9)];

        let summary = summarize(&samples, day(2026, 8, 28), "Cairo", "today");

        let kinds: Vec<AlertKind> = summary.alerts.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AlertKind::Rain, AlertKind::Heat]);
    }

    #[test]
    fn test_fog_and_mist_both_trigger_fog() {
        let samples = vec![
            sample("2026-08-28 06:00:00", 12.0, "Mist", 0.0),
            sample("2026-08-28 09:00:00", 13.0, "Fog", 0.0),
        ];

        let summary = summarize(&samples, day(2026, 8, 28), "London", "today");

        assert_eq!(summary.alerts.len(), 1);
        assert_eq!(summary.alerts[0].kind, AlertKind::Fog);
    }

    #[test]
    fn test_rain_probability_threshold() {
        let below = vec![sample("2026-08-28 12:00:00", 20.0, "Clouds", 0.39)];
        let at = vec![sample("2026-08-28 12:00:00", 20.0, "Clouds", 0.4)];

        let quiet = summarize(&below, day(2026, 8, 28), "Paris", "today");
        let risky = summarize(&at, day(2026, 8, 28), "Paris", "today");

        assert!(quiet.alerts.is_empty());
        assert_eq!(risky.alerts.len(), 1);
        assert_eq!(risky.alerts[0].kind, AlertKind::Rain);
    }

    #[test]
    fn test_alert_order_is_first_occurrence() {
        let samples = vec![
            sample("2026-08-28 06:00:00", 36.0, "Clear", 0.0),
            sample("2026-08-28 12:00:00", 20.0, "Fog", 0.0),
            sample("2026-08-28 18:00:00", 21.0, "Rain", 0.9),
        ];

        let summary = summarize(&samples, day(2026, 8, 28), "Cairo", "today");

        let kinds: Vec<AlertKind> = summary.alerts.iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec![AlertKind::Heat, AlertKind::Fog, AlertKind::Rain]);
    }
}
