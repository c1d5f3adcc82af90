use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use taskrank_core::BoardOptions;

use crate::state::{ensure_taskrank_home, taskrank_home};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplaySection,
    #[serde(default)]
    pub board: BoardSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    pub show_completed: bool,
    /// Max entries printed per listing.
    pub limit: usize,
    /// Print the ranked view as JSON instead of a table.
    pub json: bool,
    /// IANA timezone used to compute "today" for due-date labels.
    pub timezone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSection {
    pub capture_momentum: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            show_completed: true,
            limit: 50,
            json: false,
            timezone: "America/Chicago".to_string(),
        }
    }
}

impl Default for BoardSection {
    fn default() -> Self {
        Self {
            capture_momentum: true,
        }
    }
}

impl Config {
    pub fn board_options(&self) -> BoardOptions {
        BoardOptions {
            capture_momentum: self.board.capture_momentum,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(taskrank_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    load_config_from(&config_path()?)
}

pub fn load_config_from(p: &Path) -> Result<Config> {
    if !p.exists() {
        return Ok(Config::default());
    }
    let s = fs::read_to_string(p).with_context(|| format!("read {}", p.display()))?;
    toml::from_str(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn save_config_to(cfg: &Config, p: &Path) -> Result<()> {
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(())
}

pub fn init_config() -> Result<PathBuf> {
    let p = ensure_taskrank_home()?.join("config.toml");
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(p);
    }
    save_config_to(&Config::default(), &p)?;
    println!("Wrote {}", p.display());
    Ok(p)
}
