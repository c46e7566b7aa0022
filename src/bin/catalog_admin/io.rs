#![deny(clippy::all, clippy::pedantic)]

use std::fs;
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use catalog_admin::domain::payload::ImageUpload;

use crate::client::CliError;

fn read_file(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::InputFile {
        path: path.display().to_string(),
        source,
    })
}

/// Inline value or file contents; the file wins when both are given.
pub fn read_opt_value(
    val: Option<String>,
    file: Option<PathBuf>,
) -> Result<Option<String>, CliError> {
    if let Some(path) = file {
        return read_file(&path).map(Some);
    }
    Ok(val)
}

pub fn read_image(path: Option<PathBuf>) -> Result<Option<ImageUpload>, CliError> {
    let Some(path) = path else {
        return Ok(None);
    };
    let bytes = fs::read(&path).map_err(|source| CliError::InputFile {
        path: path.display().to_string(),
        source,
    })?;
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::InvalidInput(format!("{} is not a file", path.display())))?;
    Ok(Some(ImageUpload::new(file_name, bytes)))
}

/// Password from a file, the environment, or one line of stdin.
pub fn read_password(file: Option<PathBuf>, env: Option<String>) -> Result<String, CliError> {
    if let Some(path) = file {
        return Ok(read_file(&path)?.trim_end_matches(['\r', '\n']).to_string());
    }
    if let Some(value) = env {
        return Ok(value);
    }

    eprint!("Password: ");
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .map_err(|e| CliError::InvalidInput(format!("failed to read password: {e}")))?;
    let password = line.trim_end_matches(['\r', '\n']).to_string();
    if password.is_empty() {
        return Err(CliError::InvalidInput("password required".into()));
    }
    Ok(password)
}
