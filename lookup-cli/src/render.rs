use std::fmt::Write as _;

use lookup_core::LookupOutcome;
use lookup_core::model::WeatherRecord;

/// Human label for a US EPA air-quality index code. Total over "1".."6";
/// anything else, including a missing code, is Unknown.
pub fn epa_label(index: Option<&str>) -> &'static str {
    match index {
        Some("1") => "Good",
        Some("2") => "Moderate",
        Some("3") => "Unhealthy for Sensitive Groups",
        Some("4") => "Unhealthy",
        Some("5") => "Very Unhealthy",
        Some("6") => "Hazardous",
        _ => "Unknown",
    }
}

pub fn render_outcome(outcome: &LookupOutcome) -> String {
    match outcome {
        LookupOutcome::Success { message, record } => {
            format!("{message}\n\n{}", render_record(record))
        }
        LookupOutcome::Failure { message } => format!("{message}\n"),
    }
}

/// Project a weather record into a read-only text summary. No field is
/// recomputed; the only selections are the first icon and the EPA label.
pub fn render_record(record: &WeatherRecord) -> String {
    let location = &record.location;
    let current = &record.current;

    let mut out = String::new();
    let _ = writeln!(out, "{}", location.name);
    let _ = writeln!(out, "Local time: {}", location.localtime);
    let _ = writeln!(out);

    if let Some(icon) = current.weather_icons.first() {
        let _ = writeln!(out, "Icon: {icon}");
    }
    let _ = writeln!(out, "{}°C", current.temperature);
    let _ = writeln!(out, "{}", current.weather_descriptions.join(", "));
    let _ = writeln!(out, "Feels like: {}°C", current.feelslike);
    let _ = writeln!(out);

    let _ = writeln!(out, "Humidity: {}%", current.humidity);
    let _ = writeln!(out, "Wind: {} km/h {}", current.wind_speed, current.wind_dir);
    let _ = writeln!(out, "Pressure: {} mb", current.pressure);
    let _ = writeln!(out, "UV Index: {}", current.uv_index);
    let _ = writeln!(out, "Sunrise: {}", current.astro.sunrise);
    let _ = writeln!(out, "Sunset: {}", current.astro.sunset);

    let epa = current.air_quality.us_epa_index.as_deref();
    let _ = writeln!(
        out,
        "Air Quality: {} ({})",
        epa.unwrap_or(""),
        epa_label(epa)
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use lookup_core::model::{AirQuality, Astro, Current, Location};

    fn paris_record() -> WeatherRecord {
        WeatherRecord {
            location: Location {
                name: "Paris".into(),
                country: "FR".into(),
                localtime: "2025-06-23 10:00".into(),
            },
            current: Current {
                temperature: 22.0,
                feelslike: 21.0,
                weather_descriptions: vec!["Sunny".into()],
                weather_icons: vec!["icon.png".into()],
                humidity: 40.0,
                wind_speed: 10.0,
                wind_dir: "N".into(),
                pressure: 1012.0,
                uv_index: 5.0,
                astro: Astro {
                    sunrise: "06:00".into(),
                    sunset: "21:00".into(),
                },
                air_quality: AirQuality {
                    us_epa_index: Some("2".into()),
                },
            },
        }
    }

    #[test]
    fn epa_labels_cover_all_codes() {
        let expected = [
            ("1", "Good"),
            ("2", "Moderate"),
            ("3", "Unhealthy for Sensitive Groups"),
            ("4", "Unhealthy"),
            ("5", "Very Unhealthy"),
            ("6", "Hazardous"),
        ];
        for (code, label) in expected {
            assert_eq!(epa_label(Some(code)), label);
        }

        assert_eq!(epa_label(Some("0")), "Unknown");
        assert_eq!(epa_label(Some("7")), "Unknown");
        assert_eq!(epa_label(Some("moderate")), "Unknown");
        assert_eq!(epa_label(None), "Unknown");
    }

    #[test]
    fn renders_the_paris_example() {
        let text = render_record(&paris_record());

        assert!(text.contains("Paris"));
        assert!(text.contains("Local time: 2025-06-23 10:00"));
        assert!(text.contains("Icon: icon.png"));
        assert!(text.contains("22°C"));
        assert!(text.contains("Sunny"));
        assert!(text.contains("Feels like: 21°C"));
        assert!(text.contains("Humidity: 40%"));
        assert!(text.contains("Wind: 10 km/h N"));
        assert!(text.contains("Pressure: 1012 mb"));
        assert!(text.contains("UV Index: 5"));
        assert!(text.contains("Sunrise: 06:00"));
        assert!(text.contains("Sunset: 21:00"));
        assert!(text.contains("Air Quality: 2 (Moderate)"));
    }

    #[test]
    fn joins_multiple_descriptions_with_commas() {
        let mut record = paris_record();
        record.current.weather_descriptions = vec!["Partly cloudy".into(), "Windy".into()];

        let text = render_record(&record);
        assert!(text.contains("Partly cloudy, Windy"));
    }

    #[test]
    fn missing_icon_and_epa_code_are_tolerated() {
        let mut record = paris_record();
        record.current.weather_icons.clear();
        record.current.air_quality.us_epa_index = None;

        let text = render_record(&record);
        assert!(!text.contains("Icon:"));
        assert!(text.contains("(Unknown)"));
    }

    #[test]
    fn success_outcome_renders_message_then_record() {
        let outcome = LookupOutcome::Success {
            message: "Success! Here is the weather data stored with ID \"Paris-2025-06-23\":"
                .into(),
            record: paris_record(),
        };

        let text = render_outcome(&outcome);
        assert!(text.starts_with("Success! Here is the weather data stored with ID"));
        assert!(text.contains("Paris"));
        assert!(text.contains("Moderate"));
    }

    #[test]
    fn failure_outcome_renders_the_message_alone() {
        let outcome = LookupOutcome::Failure {
            message: "Network error: Could not connect to the server".into(),
        };

        assert_eq!(
            render_outcome(&outcome),
            "Network error: Could not connect to the server\n"
        );
    }
}
