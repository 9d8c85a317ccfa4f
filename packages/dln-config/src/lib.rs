mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Search, Service, Weights};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.api_base must be non-empty.".to_string(),
		});
	}
	if cfg.service.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "service.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if !matches!(cfg.search.mode.as_str(), "basic" | "weighted" | "advanced") {
		return Err(Error::Validation {
			message: "search.mode must be one of basic, weighted, or advanced.".to_string(),
		});
	}

	for (label, value) in [
		("alpha", cfg.search.weights.alpha),
		("beta", cfg.search.weights.beta),
		("gamma", cfg.search.weights.gamma),
	] {
		if !value.is_finite() {
			return Err(Error::Validation {
				message: format!("search.weights.{label} must be a finite number."),
			});
		}
		if !(0.0..=1.0).contains(&value) {
			return Err(Error::Validation {
				message: format!("search.weights.{label} must be in the range 0.0-1.0."),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let api_base = cfg.service.api_base.trim().trim_end_matches('/');

	if api_base.len() != cfg.service.api_base.len() {
		cfg.service.api_base = api_base.to_string();
	}
}
