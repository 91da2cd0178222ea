use crate::domain::DEFAULT_RADIUS_KM;
use crate::retry_policy::{DEFAULT_MAX_ATTEMPTS, DEFAULT_WAIT, GEOCODING_WAIT, RetryPolicy};
use crate::travel_time::{PeakWindow, TravelTimeHeuristic};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    server: Server,
    search: Search,
    fleet: Fleet,
    http: Http,
    provider: Provider,
    reverse_geocoding: ReverseGeocoding,
    retry: Retry,
    travel_time: TravelTime,
}

impl AppConfig {
    /// Reads `config.toml`, then the optional `config_local.toml`, then environment variables such as
    /// `PROVIDER__ACCESS_TOKEN`.
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn server(&self) -> &Server {
        &self.server
    }

    pub fn search(&self) -> &Search {
        &self.search
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn http(&self) -> &Http {
        &self.http
    }

    pub fn provider(&self) -> &Provider {
        &self.provider
    }

    pub fn reverse_geocoding(&self) -> &ReverseGeocoding {
        &self.reverse_geocoding
    }

    pub fn retry(&self) -> &Retry {
        &self.retry
    }

    pub fn travel_time(&self) -> &TravelTime {
        &self.travel_time
    }
}

#[derive(Debug, Deserialize)]
pub struct Server {
    bind_address: String,
}

impl Server {
    pub fn bind_address(&self) -> &str {
        &self.bind_address
    }
}

#[derive(Debug, Deserialize)]
pub struct Search {
    #[serde(default = "default_radius_km")]
    default_radius_km: f64,
}

fn default_radius_km() -> f64 {
    DEFAULT_RADIUS_KM
}

impl Search {
    pub fn default_radius_km(&self) -> f64 {
        self.default_radius_km
    }
}

#[derive(Debug, Deserialize)]
pub struct Fleet {
    file: String,
}

impl Fleet {
    pub fn file(&self) -> &str {
        &self.file
    }
}

#[derive(Debug, Deserialize)]
pub struct Http {
    #[serde(with = "humantime_serde")]
    request_timeout: Duration,
    user_agent: String,
}

impl Http {
    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[derive(Debug, Deserialize)]
pub struct Provider {
    base_url: String,
    access_token: String,
}

impl Provider {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }
}

#[derive(Debug, Deserialize)]
pub struct ReverseGeocoding {
    url: String,
    language: String,
}

impl ReverseGeocoding {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn language(&self) -> &str {
        &self.language
    }
}

#[derive(Debug, Deserialize)]
pub struct Retry {
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,
    #[serde(default = "default_geocoding_wait", with = "humantime_serde")]
    geocoding_wait: Duration,
    #[serde(default = "default_wait", with = "humantime_serde")]
    default_wait: Duration,
    #[serde(default, with = "humantime_serde")]
    deadline: Option<Duration>,
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

fn default_geocoding_wait() -> Duration {
    GEOCODING_WAIT
}

fn default_wait() -> Duration {
    DEFAULT_WAIT
}

impl Retry {
    pub fn geocoding_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, self.geocoding_wait).with_deadline(self.deadline)
    }

    pub fn default_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_attempts, self.default_wait).with_deadline(self.deadline)
    }
}

#[derive(Debug, Deserialize)]
pub struct TravelTime {
    minutes_per_km: f64,
    peak_multiplier: f64,
    peak_hours: Vec<PeakWindow>,
    #[serde(default)]
    utc_offset_minutes: Option<i32>,
}

impl TravelTime {
    pub fn heuristic(&self) -> TravelTimeHeuristic {
        TravelTimeHeuristic::new(self.minutes_per_km, self.peak_multiplier, self.peak_hours.clone(), self.utc_offset_minutes)
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                server: Server {
                    bind_address: "127.0.0.1:0".to_string(),
                },
                search: Search { default_radius_km: 5.0 },
                fleet: Fleet {
                    file: "tests/resources/fleet.json".to_string(),
                },
                http: Http {
                    request_timeout: Duration::from_secs(5),
                    user_agent: "ambulance-match-test".to_string(),
                },
                provider: Provider {
                    base_url: "https://provider.url/".to_string(),
                    access_token: "token".to_string(),
                },
                reverse_geocoding: ReverseGeocoding {
                    url: "https://reverse.url/".to_string(),
                    language: "fr".to_string(),
                },
                retry: Retry {
                    max_attempts: 3,
                    geocoding_wait: Duration::ZERO,
                    default_wait: Duration::ZERO,
                    deadline: None,
                },
                travel_time: TravelTime {
                    minutes_per_km: 2.0,
                    peak_multiplier: 1.5,
                    peak_hours: vec![PeakWindow::new(8, 10), PeakWindow::new(17, 19)],
                    utc_offset_minutes: Some(0),
                },
            },
        }
    }

    pub fn provider_url(mut self, url: String) -> Self {
        self.config.provider.base_url = url;
        self
    }

    pub fn reverse_geocoding_url(mut self, url: String) -> Self {
        self.config.reverse_geocoding.url = url;
        self
    }

    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.config.http.user_agent = user_agent;
        self
    }

    pub fn peak_hours(mut self, peak_hours: Vec<PeakWindow>) -> Self {
        self.config.travel_time.peak_hours = peak_hours;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
