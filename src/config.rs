use crate::collaborators::{
    ApiClient, Collaborators, HttpAdminApi, JsonFileMockData, MockDataSource, StaticMockData,
};
use config::{Config, File};
use reqwest::Url;
use secrecy::SecretString;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;
use std::{env, error::Error, sync::Arc};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub collaborators: CollaboratorSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub hmac_secret: SecretString,
    #[serde(default = "default_secure_cookies")]
    pub secure_cookies: bool,
}

fn default_secure_cookies() -> bool {
    true
}

/// Where the harness finds the modules it probes.
#[derive(Deserialize, Clone, Default)]
pub struct CollaboratorSettings {
    /// JSON file holding the mock catalogue. The built-in sample is used when unset.
    pub mock_data_path: Option<String>,
    /// Base URL of a live admin backend. Admin calls are answered from the mock catalogue when unset.
    pub admin_api_base_url: Option<String>,
}

impl CollaboratorSettings {
    pub fn collaborators(&self) -> Result<Collaborators, String> {
        let mock_data: Arc<dyn MockDataSource> = match &self.mock_data_path {
            Some(path) => Arc::new(JsonFileMockData::new(path)),
            None => Arc::new(StaticMockData::default()),
        };

        match &self.admin_api_base_url {
            Some(raw) => {
                let url = Url::parse(raw).map_err(|e| format!("{raw} is not a valid URL: {e}"))?;
                Ok(Collaborators::new(mock_data, ApiClient::new(HttpAdminApi::new(url))))
            }
            None => Ok(Collaborators::mocked(mock_data)),
        }
    }
}

pub fn get() -> Result<Settings, Box<dyn Error>> {
    let config_path = env::current_dir()?.join("config");

    let app_env: Environment = env::var("APP_ENV")
        .unwrap_or_else(|_| "local".into())
        .try_into()?;

    let env_file = match app_env {
        Environment::Local => "Local.toml",
        Environment::Production => "Production.toml",
    };

    let settings = Config::builder()
        .add_source(File::from(config_path.join("Base.toml")))
        .add_source(File::from(config_path.join(env_file)))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<Settings>()?)
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl TryFrom<&str> for Environment {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "local" => Ok(Self::Local),
            other => Err(format!(
                "{other} is not a supported environment. \
                Use either `{}` or `{}`.",
                Self::Local.as_str(),
                Self::Production.as_str(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claims::{assert_err, assert_ok};

    #[test]
    fn environments_are_case_insensitive() {
        assert!(matches!(Environment::try_from("Production"), Ok(Environment::Production)));
        assert!(matches!(Environment::try_from("LOCAL"), Ok(Environment::Local)));
    }

    #[test]
    fn unknown_environments_are_rejected() {
        assert_err!(Environment::try_from("staging"));
    }

    #[test]
    fn an_invalid_admin_api_url_is_rejected() {
        let settings = CollaboratorSettings {
            mock_data_path: None,
            admin_api_base_url: Some("not a url".into()),
        };
        assert!(settings.collaborators().is_err());
    }

    #[test]
    fn default_collaborators_expose_an_admin_api() {
        let collaborators = assert_ok!(CollaboratorSettings::default().collaborators());
        assert!(collaborators.api_client.admin_api().is_some());
    }
}
