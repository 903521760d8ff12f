use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration:\n");
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    fn default_editor() -> String {
        std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            })
    }

    /// Open `path` in the requested editor, falling back to the default one.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let fallback = Self::default_editor();
        let first = editor.clone().unwrap_or_else(|| fallback.clone());

        match Command::new(&first).arg(path).status() {
            Ok(s) if s.success() => return Ok(first),
            _ => eprintln!(
                "⚠️  Editor '{}' not available, falling back to '{}'",
                first, fallback
            ),
        }

        match Command::new(&fallback).arg(path).status() {
            Ok(s) if s.success() => Ok(fallback),
            Ok(s) => Err(AppError::Config(format!("editor '{fallback}' exited with {s}"))),
            Err(e) => Err(AppError::Config(format!("cannot run '{fallback}': {e}"))),
        }
    }
}
