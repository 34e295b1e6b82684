/// City/country pair handed to a weather data provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    pub city: String,
    pub country_code: String,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self { city: city.into(), country_code: country_code.into() }
    }

    /// `"Miami,US"`, the location form both providers accept in `q`.
    pub fn location(&self) -> String {
        format!("{},{}", self.city, self.country_code)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherResult {
    pub description: String,
}
