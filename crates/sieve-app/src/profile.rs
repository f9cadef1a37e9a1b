use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::Context;
use sieve_config::Config;
use serde::{Deserialize, Serialize};

/// Default config shipped next to the binary
const REPO_DEFAULT_CONFIG: &str = "config.json";

const MAIN_PROFILE: &str = "main";

/// Load the default config shipped in the repo, or built-in defaults without one
fn load_repo_default_config() -> anyhow::Result<Config> {
    if !Path::new(REPO_DEFAULT_CONFIG).exists() {
        tracing::info!("No {REPO_DEFAULT_CONFIG}, using built-in defaults");
        return Ok(Config::new());
    }

    tracing::info!("Loading repo default config...");
    let file = File::open(REPO_DEFAULT_CONFIG)?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse {REPO_DEFAULT_CONFIG}"))?;
    Ok(config)
}

/// Represents a user profile
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Profiles stored as `<root>/profiles/<name>.json`
pub struct ProfileStore {
    root: PathBuf,
}

impl ProfileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `<config dir>/sieve`
    pub fn new_default() -> anyhow::Result<Self> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(Self::new(config_dir.join("sieve")))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn profiles_dir(&self) -> PathBuf {
        self.root.join("profiles")
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.profiles_dir().join(format!("{name}.json"))
    }

    /// Initialize user config folders and main profile if missing
    pub fn init_user_config(&self) -> anyhow::Result<()> {
        fs::create_dir_all(self.profiles_dir())
            .with_context(|| format!("Failed to create {}", self.profiles_dir().display()))?;

        let main_profile = self.profile_path(MAIN_PROFILE);

        if !main_profile.exists() {
            // Use repo default as the initial main profile
            let default_config = load_repo_default_config()?;
            self.save_user_profile(MAIN_PROFILE, &default_config)?;
            tracing::info!("Created main profile in {}", self.root.display());
        }

        Ok(())
    }

    /// Load a user profile by name, defaulting to main if name not found.
    /// Legacy settings are migrated and values clamped on the way in.
    pub fn load_user_profile(&self, name: &str) -> anyhow::Result<Config> {
        let mut config = self.read_profile(name)?;

        if config.migrate() {
            self.save_user_profile(name, &config)?;
        }
        config.validate();
        config.apply_env();

        Ok(config)
    }

    fn read_profile(&self, name: &str) -> anyhow::Result<Config> {
        let profile_file = self.profile_path(name);

        if profile_file.exists() {
            return read_profile_file(&profile_file);
        }

        tracing::warn!("Profile {name} not found, falling back to main profile or repo default");
        let main_file = self.profile_path(MAIN_PROFILE);
        if main_file.exists() {
            read_profile_file(&main_file)
        } else {
            // First-run fallback to repo default
            load_repo_default_config()
        }
    }

    pub fn save_user_profile(&self, name: &str, config: &Config) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(self.profiles_dir())?;

        let profile = Profile {
            name: name.into(),
            value: config.clone(),
        };
        let file = self.profile_path(name);
        fs::write(&file, serde_json::to_string_pretty(&profile)?)
            .with_context(|| format!("Failed to write profile {}", file.display()))?;
        Ok(file)
    }

    /// Add a new profile cloned from main (or repo default if main missing)
    pub fn add_profile_from_default(&self, new_name: &str) -> anyhow::Result<PathBuf> {
        let default_config = self.read_profile(MAIN_PROFILE)?;
        let file = self.save_user_profile(new_name, &default_config)?;
        tracing::info!("Created new profile: {new_name}");
        Ok(file)
    }

    /// Delete all user data and start over with an empty directory
    pub fn delete_user_data(&self) -> anyhow::Result<()> {
        if self.root.exists() {
            fs::remove_dir_all(&self.root)
                .with_context(|| format!("Failed to delete {}", self.root.display()))?;
        }
        fs::create_dir_all(&self.root)?;
        tracing::warn!("Deleted user data in {}", self.root.display());
        Ok(())
    }
}

fn read_profile_file(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let profile: Profile = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse profile {}", path.display()))?;
    Ok(profile.value)
}
