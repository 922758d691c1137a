use crate::error::Result;
use crate::paths;
use dialbook_core::Contact;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Returns `None` when the file does not exist.
pub fn read_if_exists(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

pub fn write_contacts(path: &Path, contacts: &[Contact]) -> Result<()> {
    paths::ensure_parent_dir(path)?;
    let mut file = open_for_overwrite(path)?;
    serde_json::to_writer_pretty(&mut file, contacts)?;
    writeln!(file)?;
    file.flush()?;
    restrict_file_permissions(path)?;
    Ok(())
}

#[cfg(unix)]
fn open_for_overwrite(path: &Path) -> Result<fs::File> {
    use std::os::unix::fs::OpenOptionsExt;
    let file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    Ok(file)
}

#[cfg(not(unix))]
fn open_for_overwrite(path: &Path) -> Result<fs::File> {
    Ok(fs::File::create(path)?)
}

// Existing files keep their old mode when reopened.
#[cfg(unix)]
fn restrict_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o600);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
