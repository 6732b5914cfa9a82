//! # File I/O Module
//!
//! Worksheet persistence with two safety features:
//! - **Atomic saves**: write to a `.tmp` sibling, verify it parses, then rename
//! - **Version validation**: refuse files from an incompatible schema
//!
//! ## File Format
//!
//! Worksheets are saved as `.reckon` files containing pretty-printed JSON.
//!
//! ## Example
//!
//! ```rust,no_run
//! use reckon_core::file_io::{save_worksheet, load_worksheet};
//! use reckon_core::worksheet::Worksheet;
//! use std::path::Path;
//!
//! let sheet = Worksheet::new("Household");
//! let path = Path::new("household.reckon");
//!
//! save_worksheet(&sheet, path).unwrap();
//! let loaded = load_worksheet(path).unwrap();
//! assert_eq!(loaded.meta.title, "Household");
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{CalcError, CalcResult};
use crate::worksheet::{Worksheet, SCHEMA_VERSION};

/// File extension for saved worksheets
pub const WORKSHEET_EXTENSION: &str = "reckon";

/// Temporary sibling used during a save (`budget.reckon` → `budget.reckon.tmp`)
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn serialization_error(e: serde_json::Error) -> CalcError {
    CalcError::SerializationError { reason: e.to_string() }
}

/// Save a worksheet to a file with atomic write semantics.
///
/// The save process:
/// 1. Serialize worksheet to JSON
/// 2. Write to a temporary file (.tmp) and sync to disk
/// 3. Read the temporary file back and check it parses
/// 4. Rename .tmp over the target (atomic on most filesystems)
///
/// An interrupted save leaves the previous file untouched.
pub fn save_worksheet(sheet: &Worksheet, path: &Path) -> CalcResult<()> {
    let json = serde_json::to_string_pretty(sheet).map_err(serialization_error)?;
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    tmp_file.write_all(json.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    drop(tmp_file);

    // Verify before replacing the previous save
    let written = fs::read_to_string(&tmp_path).map_err(|e| {
        CalcError::file_error("verify temp file", tmp_path.display().to_string(), e.to_string())
    })?;
    if let Err(e) = serde_json::from_str::<Worksheet>(&written) {
        let _ = fs::remove_file(&tmp_path);
        return Err(serialization_error(e));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    tracing::info!(path = %path.display(), items = sheet.item_count(), "worksheet saved");
    Ok(())
}

/// Load a worksheet from a file.
///
/// # Returns
///
/// * `Ok(Worksheet)` - Successfully loaded worksheet
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_worksheet(path: &Path) -> CalcResult<Worksheet> {
    let contents = fs::read_to_string(path)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;

    let sheet: Worksheet = serde_json::from_str(&contents).map_err(serialization_error)?;
    validate_version(&sheet.meta.version)?;

    tracing::info!(
        path = %path.display(),
        version = %sheet.meta.version,
        items = sheet.item_count(),
        "worksheet loaded"
    );
    Ok(sheet)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version.split('.').filter_map(|p| p.parse().ok()).collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION.split('.').filter_map(|p| p.parse().ok()).collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions, a newer minor may contain breaking changes
    if current_parts[0] == 0 && file_parts.len() > 1 && current_parts.len() > 1 && file_parts[1] > current_parts[1] {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::{CalculationItem, LoanInput, PaymentFrequency};
    use std::env::temp_dir;

    fn temp_worksheet_path(name: &str) -> PathBuf {
        temp_dir().join(format!("reckon_test_{}.{}", name, WORKSHEET_EXTENSION))
    }

    #[test]
    fn test_tmp_path_generation() {
        let tmp = tmp_path_for(Path::new("/path/to/budget.reckon"));
        assert_eq!(tmp, Path::new("/path/to/budget.reckon.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_worksheet_path("roundtrip");

        let mut sheet = Worksheet::new("Roundtrip");
        let id = sheet.add(
            "Car",
            CalculationItem::Loan(LoanInput {
                principal: 20_000.0,
                annual_rate_pct: 6.0,
                term_years: 5.0,
                frequency: PaymentFrequency::Monthly,
            }),
        );
        sheet.recompute(&id).unwrap();
        save_worksheet(&sheet, &path).unwrap();

        let loaded = load_worksheet(&path).unwrap();
        assert_eq!(loaded.meta.title, "Roundtrip");
        let entry = loaded.get(&id).unwrap();
        assert_eq!(entry.label, "Car");
        assert!(entry.last_result.is_some());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_worksheet_path("atomic");
        save_worksheet(&Worksheet::new("Atomic"), &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_worksheet_path("future");
        let mut sheet = Worksheet::new("Future");
        sheet.meta.version = "1.0.0".to_string();
        save_worksheet(&sheet, &path).unwrap();

        let err = load_worksheet(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_worksheet(&temp_worksheet_path("does_not_exist")).unwrap_err();
        assert_eq!(err.error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_load_invalid_json() {
        let path = temp_worksheet_path("garbage");
        fs::write(&path, "{ not json").unwrap();
        let err = load_worksheet(&path).unwrap_err();
        assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.5").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("garbage").is_err());
    }
}
