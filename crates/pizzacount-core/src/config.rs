//! Configuration module
//!
//! Endpoint paths, asset paths and UI strings are configuration values so the
//! client is not tied to one server layout.

use std::env;

use anyhow::bail;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_PROCESS_PATH: &str = "/process";
const DEFAULT_FIELD_NAME: &str = "image";
const DEFAULT_RESULT_IMAGE: &str = "/static/result.jpg";
const DEFAULT_RESULT_VIDEO: &str = "/static/result.mp4";
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Language of the user-visible strings
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Locale::En),
            "ru" | "russian" => Some(Locale::Ru),
            _ => None,
        }
    }
}

/// User-visible strings
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Labels {
    /// Label text when no file is selected
    pub placeholder: String,
    /// Stats prefix, rendered as "{count_prefix} {n}"
    pub count_prefix: String,
    /// Alt text of the processed image
    pub image_alt: String,
    /// Single message shown for every failed upload
    pub error_message: String,
}

impl Labels {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                placeholder: "Choose an image or video".to_string(),
                count_prefix: "Count:".to_string(),
                image_alt: "Result".to_string(),
                error_message: "File processing failed".to_string(),
            },
            Locale::Ru => Self {
                placeholder: "Выберите изображение или видео".to_string(),
                count_prefix: "Количество пицц:".to_string(),
                image_alt: "Результат".to_string(),
                error_message: "Ошибка обработки файла".to_string(),
            },
        }
    }

    pub fn count_text(&self, count: u64) -> String {
        format!("{} {}", self.count_prefix, count)
    }
}

impl Default for Labels {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}

/// Client configuration
#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub process_path: String,
    /// Multipart field carrying the uploaded file
    pub field_name: String,
    pub result_image_path: String,
    pub result_video_path: String,
    pub timeout_secs: u64,
    pub locale: Locale,
    pub labels: Labels,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            process_path: DEFAULT_PROCESS_PATH.to_string(),
            field_name: DEFAULT_FIELD_NAME.to_string(),
            result_image_path: DEFAULT_RESULT_IMAGE.to_string(),
            result_video_path: DEFAULT_RESULT_VIDEO.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            locale: Locale::default(),
            labels: Labels::default(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables.
    ///
    /// PIZZACOUNT_API_URL (or API_URL), PIZZACOUNT_PROCESS_PATH, PIZZACOUNT_FIELD_NAME,
    /// PIZZACOUNT_RESULT_IMAGE, PIZZACOUNT_RESULT_VIDEO, PIZZACOUNT_TIMEOUT_SECS,
    /// PIZZACOUNT_LOCALE.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("PIZZACOUNT_API_URL")
            .or_else(|| lookup("API_URL"))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let locale = match lookup("PIZZACOUNT_LOCALE") {
            Some(value) => match Locale::parse(&value) {
                Some(locale) => locale,
                None => {
                    tracing::warn!(locale = %value, "Unknown locale, falling back to default");
                    Locale::default()
                }
            },
            None => Locale::default(),
        };

        let config = Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            process_path: lookup("PIZZACOUNT_PROCESS_PATH")
                .unwrap_or_else(|| DEFAULT_PROCESS_PATH.to_string()),
            field_name: lookup("PIZZACOUNT_FIELD_NAME")
                .unwrap_or_else(|| DEFAULT_FIELD_NAME.to_string()),
            result_image_path: lookup("PIZZACOUNT_RESULT_IMAGE")
                .unwrap_or_else(|| DEFAULT_RESULT_IMAGE.to_string()),
            result_video_path: lookup("PIZZACOUNT_RESULT_VIDEO")
                .unwrap_or_else(|| DEFAULT_RESULT_VIDEO.to_string()),
            timeout_secs: lookup("PIZZACOUNT_TIMEOUT_SECS")
                .unwrap_or_else(|| DEFAULT_TIMEOUT_SECS.to_string())
                .parse::<u64>()
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            locale,
            labels: Labels::for_locale(locale),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self.labels = Labels::for_locale(locale);
        self
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            bail!("Base URL must start with http:// or https://: {}", self.base_url);
        }
        for (name, path) in [
            ("process path", &self.process_path),
            ("result image path", &self.result_image_path),
            ("result video path", &self.result_video_path),
        ] {
            if !path.starts_with('/') {
                bail!("The {} must start with '/': {}", name, path);
            }
        }
        if self.field_name.trim().is_empty() {
            bail!("Multipart field name must not be empty");
        }
        Ok(())
    }

    pub fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
