use std::path::PathBuf;

use rp_core::formats::rst::DEFAULT_FOOTNOTE_RUBRIC;
use rp_core::workspace::DEFAULT_MERGED_DIR;
use thiserror::Error;

pub const DEFAULT_WINDOW_WIDTH: f32 = 1100.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 800.0;
const PREFS_DIR: &str = "rst2po";
const PREFS_FILE: &str = "prefs.v1";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrefsError {
    #[error("{0}")]
    Io(String),
    #[error("line {0}: expected key=value")]
    Format(usize),
    #[error("invalid value for {0}")]
    InvalidValue(&'static str),
    #[error("invalid escape sequence")]
    Escape,
    #[error("unsupported prefs version: {0}")]
    UnsupportedVersion(u32),
    #[error("prefs version is missing")]
    MissingVersion,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppPrefs {
    pub merged_dir: String,
    pub footnote_rubric: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for AppPrefs {
    fn default() -> Self {
        Self {
            merged_dir: DEFAULT_MERGED_DIR.to_string(),
            footnote_rubric: DEFAULT_FOOTNOTE_RUBRIC.to_string(),
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

pub fn prefs_path() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(dir).join(PREFS_DIR).join(PREFS_FILE));
    }
    if let Ok(home) = std::env::var("HOME") {
        return Some(
            PathBuf::from(home)
                .join(".config")
                .join(PREFS_DIR)
                .join(PREFS_FILE),
        );
    }
    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return Some(PathBuf::from(appdata).join(PREFS_DIR).join(PREFS_FILE));
        }
    }
    None
}

pub fn load_prefs() -> Result<AppPrefs, PrefsError> {
    let Some(path) = prefs_path() else {
        return Ok(AppPrefs::default());
    };
    if !path.exists() {
        return Ok(AppPrefs::default());
    }
    let content = std::fs::read_to_string(&path)
        .map_err(|err| PrefsError::Io(format!("read {}: {err}", path.display())))?;
    parse_prefs(&content)
}

pub fn parse_prefs(content: &str) -> Result<AppPrefs, PrefsError> {
    let mut out = AppPrefs::default();
    let mut version = None::<u32>;
    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once('=') else {
            return Err(PrefsError::Format(lineno + 1));
        };
        match key {
            "version" => {
                let v = value
                    .parse::<u32>()
                    .map_err(|_| PrefsError::InvalidValue("version"))?;
                version = Some(v);
            }
            "merged_dir" => out.merged_dir = unescape_pref_value(value)?,
            "footnote_rubric" => out.footnote_rubric = unescape_pref_value(value)?,
            "window_width" => out.window_width = parse_size(value, "window_width")?,
            "window_height" => out.window_height = parse_size(value, "window_height")?,
            _ => {}
        }
    }
    match version {
        Some(1) => Ok(out),
        Some(v) => Err(PrefsError::UnsupportedVersion(v)),
        None => Err(PrefsError::MissingVersion),
    }
}

fn parse_size(value: &str, key: &'static str) -> Result<f32, PrefsError> {
    value
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
        .ok_or(PrefsError::InvalidValue(key))
}

fn unescape_pref_value(input: &str) -> Result<String, PrefsError> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0usize;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if i + 2 >= bytes.len() {
                return Err(PrefsError::Escape);
            }
            let hi = (bytes[i + 1] as char).to_digit(16).ok_or(PrefsError::Escape)?;
            let lo = (bytes[i + 2] as char).to_digit(16).ok_or(PrefsError::Escape)?;
            out.push((hi * 16 + lo) as u8);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| PrefsError::Escape)
}
