//! Settings file persistence.
//!
//! One comma-separated line:
//! `length,number,lower,upper,digits,symbols,enforce,show`.

use std::env;
use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::Settings;
use crate::pass::{MAX_LENGTH, MIN_LENGTH};

const FIELD_COUNT: usize = 8;

pub fn save(settings: &Settings, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    let data = format!(
        "{},{},{},{},{},{},{},{}\n",
        settings.pass_length,
        settings.number_of_passwords,
        settings.lowercase,
        settings.uppercase,
        settings.digits,
        settings.symbols,
        settings.enforce_coverage,
        settings.show_password,
    );

    file.write_all(data.as_bytes())?;
    debug!(path = %path.display(), "settings saved");
    Ok(())
}

pub fn load(settings: &mut Settings, path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        return save(settings, path);
    }

    let mut reader = BufReader::new(File::open(path)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    let parts: Vec<&str> = line.trim().split(',').collect();
    if parts.len() != FIELD_COUNT {
        warn!(
            path = %path.display(),
            fields = parts.len(),
            "malformed settings file, rewriting defaults"
        );
        *settings = Settings::default();
        return save(settings, path);
    }

    settings.pass_length = parts[0]
        .parse()
        .unwrap_or(settings.pass_length)
        .clamp(MIN_LENGTH, MAX_LENGTH);
    settings.number_of_passwords = parts[1]
        .parse()
        .unwrap_or(settings.number_of_passwords)
        .max(1);
    settings.lowercase = parts[2].parse().unwrap_or(settings.lowercase);
    settings.uppercase = parts[3].parse().unwrap_or(settings.uppercase);
    settings.digits = parts[4].parse().unwrap_or(settings.digits);
    settings.symbols = parts[5].parse().unwrap_or(settings.symbols);
    settings.enforce_coverage = parts[6].parse().unwrap_or(settings.enforce_coverage);
    settings.show_password = parts[7].parse().unwrap_or(settings.show_password);

    if !(settings.lowercase || settings.uppercase || settings.digits || settings.symbols) {
        warn!("settings file disables every character class, using default classes");
        let defaults = Settings::default();
        settings.set_classes(defaults.classes());
    }

    debug!(path = %path.display(), "settings loaded");
    Ok(())
}

#[inline]
pub fn get_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    PathBuf::from(format!("{}/.config/passforge/settings", home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_is_created_with_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/settings");
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded, Settings::default());
        assert!(path.exists());
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "12,1,true,true,true,false,true,true\n");
    }

    #[test]
    fn round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings");
        let settings = Settings {
            pass_length: 33,
            number_of_passwords: 5,
            lowercase: false,
            symbols: true,
            enforce_coverage: false,
            show_password: false,
            ..Settings::default()
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), settings);
    }

    #[test]
    fn wrong_field_count_rewrites_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "20,3,true\n").unwrap();
        assert_eq!(Settings::load_from(&path).unwrap(), Settings::default());
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim().split(',').count(), FIELD_COUNT);
    }

    #[test]
    fn bad_fields_keep_defaults_and_length_is_clamped() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "500,zero,maybe,true,true,true,true,no\n").unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.pass_length, MAX_LENGTH);
        assert_eq!(loaded.number_of_passwords, 1);
        assert!(loaded.lowercase);
        assert!(loaded.symbols);
        assert!(loaded.show_password);
    }

    #[test]
    fn all_classes_off_is_repaired() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("settings");
        fs::write(&path, "16,1,false,false,false,false,true,true\n").unwrap();
        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.classes(), Settings::default().classes());
        assert_eq!(loaded.pass_length, 16);
    }
}
