// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::store::{Collection, DocumentStore};
use crate::ui::messages::warning;
use crate::utils::path::{expand_tilde, is_absolute};
use std::path::PathBuf;

/// High-level export of one collection.
pub struct ExportLogic;

impl ExportLogic {
    /// Write every record of `collection` to `file`.
    ///
    /// `file` must be absolute (after `~` expansion). Returns the number of
    /// exported records; nothing is written when the collection is empty.
    pub fn export(
        store: &dyn DocumentStore,
        collection: Collection,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path: PathBuf = expand_tilde(file);

        if !is_absolute(&path) {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let records = store.list(collection)?;

        if records.is_empty() {
            warning(format!("No {} records to export.", collection.as_str()));
            return Ok(0);
        }

        ensure_writable(&path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&records, &path)?,
            ExportFormat::Json => export_json(&records, &path)?,
        }

        store.audit(
            "export",
            &path.to_string_lossy(),
            &format!(
                "{} {} records exported as {}",
                records.len(),
                collection.as_str(),
                format.as_str()
            ),
        );

        Ok(records.len())
    }
}
