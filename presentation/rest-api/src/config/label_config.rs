use std::env;

use anyhow::Context;
use url::Url;

/// Public origin used to build the `/id/<id>` link embedded in labels
#[derive(Debug, Clone)]
pub struct LabelConfig {
    pub public_origin: Option<Url>,
}

impl LabelConfig {
    /// Environment variables:
    /// - PUBLIC_ORIGIN: Base URL the labels point at, e.g. "http://localhost:5173"
    ///   (labels carry no link when unset)
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_value(env::var("PUBLIC_ORIGIN").ok())
    }

    fn from_value(value: Option<String>) -> anyhow::Result<Self> {
        let public_origin = value
            .filter(|v| !v.trim().is_empty())
            .map(|v| Url::parse(v.trim()).context("PUBLIC_ORIGIN must be an absolute URL"))
            .transpose()?;

        Ok(Self { public_origin })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_leave_origin_unset_when_blank() {
        let config = LabelConfig::from_value(Some("  ".to_string())).unwrap();

        assert!(config.public_origin.is_none());
    }

    #[test]
    fn should_parse_origin() {
        let config = LabelConfig::from_value(Some("http://localhost:5173".to_string())).unwrap();

        assert_eq!(
            config.public_origin.unwrap().as_str(),
            "http://localhost:5173/"
        );
    }

    #[test]
    fn should_reject_relative_origin() {
        assert!(LabelConfig::from_value(Some("localhost".to_string())).is_err());
    }
}
