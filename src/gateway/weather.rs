use crate::types::WeatherSnapshot;
use serde::Deserialize;

/// `current` block of an Open-Meteo forecast response
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentConditions {
    pub temperature_2m: f64,
    pub relative_humidity_2m: f64,
    pub wind_speed_10m: f64,
    #[serde(default)]
    pub weather_code: u16,
}

impl From<CurrentConditions> for WeatherSnapshot {
    fn from(current: CurrentConditions) -> Self {
        let (description, icon) = describe_weather_code(current.weather_code);
        Self {
            temperature: current.temperature_2m,
            description: description.to_string(),
            humidity: current.relative_humidity_2m,
            wind_speed: current.wind_speed_10m,
            icon: icon.to_string(),
        }
    }
}

/// WMO weather code to a short description and an OpenWeather icon code.
pub fn describe_weather_code(code: u16) -> (&'static str, &'static str) {
    match code {
        0 => ("Clear sky", "01d"),
        1 => ("Mainly clear", "02d"),
        2 => ("Partly cloudy", "02d"),
        3 => ("Overcast", "04d"),
        45 | 48 => ("Fog", "50d"),
        51..=57 => ("Drizzle", "09d"),
        61..=67 | 80..=82 => ("Rain", "10d"),
        71..=77 | 85 | 86 => ("Snow", "13d"),
        95..=99 => ("Thunderstorm", "11d"),
        _ => ("Unknown", "03d"),
    }
}
