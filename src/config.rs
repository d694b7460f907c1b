use log::LevelFilter;
use once_cell::sync::Lazy;
use std::env;

pub const LIBRARY_VAR: &str = "GLCAPS_LIBRARY";
pub const API_VAR: &str = "GLCAPS_API";
pub const LOG_VAR: &str = "GLCAPS_LOG";

// Which context API to probe on platforms that have more than one.
// Only Linux and the BSDs really care, Android is always EGL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Api {
    Glx,
    Egl,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// File name of the GL library to fall back on, replacing the
    /// platform default list when set.
    pub library: Option<String>,
    pub api: Api,
    pub log_level: LevelFilter,
    // Values we couldn't make sense of. Reported once logging is up,
    // since the config is read before any logger exists.
    pub rejected: Vec<(&'static str, String)>,
}

impl Default for Config {
    fn default() -> Self {
        return Config {
            library: None,
            api: if cfg!(target_os = "android") { Api::Egl } else { Api::Glx },
            log_level: LevelFilter::Warn,
            rejected: Vec::new(),
        };
    }
}

impl Config {
    pub fn from_env() -> Config {
        return Self::from_lookup(|key| env::var(key).ok());
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Config {
        let mut cfg = Config::default();
        if let Some(lib) = lookup(LIBRARY_VAR) {
            let lib = lib.trim();
            if !lib.is_empty() {
                cfg.library = Some(lib.to_owned());
            }
        }
        if let Some(api) = lookup(API_VAR) {
            match parse_api(&api) {
                Some(a) => cfg.api = a,
                None => cfg.rejected.push((API_VAR, api)),
            }
        }
        if let Some(level) = lookup(LOG_VAR) {
            match level.trim().parse::<LevelFilter>() {
                Ok(l) => cfg.log_level = l,
                Err(_) => cfg.rejected.push((LOG_VAR, level)),
            }
        }
        return cfg;
    }

    pub fn report_rejected(&self) {
        for (key, value) in &self.rejected {
            log::warn!("Ignoring unrecognized value {:?} for {}", value, key);
        }
    }
}

fn parse_api(s: &str) -> Option<Api> {
    return match s.trim().to_ascii_lowercase().as_str() {
        "glx" => Some(Api::Glx),
        "egl" => Some(Api::Egl),
        _ => None,
    };
}

static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);

// Read once, on first use.
pub fn get() -> &'static Config {
    return &CONFIG;
}
