//! Write-then-rename helper so readers never observe half-written files

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::Error;

/// A fully written temporary file waiting to be moved onto its target path.
/// Dropping it without [`StagedFile::commit`] removes the temporary file.
#[derive(Debug)]
pub(crate) struct StagedFile {
    temp: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl StagedFile {
    /// Writes the content produced by `write` next to `target`
    pub(crate) fn write<F>(target: &Path, write: F) -> Result<Self, Error>
    where
        F: FnOnce(&mut BufWriter<File>) -> Result<(), Error>,
    {
        let staged = Self {
            temp: with_suffix(target, ".partial")?,
            target: target.to_path_buf(),
            committed: false,
        };

        let mut writer = BufWriter::new(File::create(&staged.temp)?);
        write(&mut writer)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;

        Ok(staged)
    }

    pub(crate) fn commit(mut self) -> Result<(), Error> {
        fs::rename(&self.temp, &self.target)?;
        self.committed = true;
        Ok(())
    }
}

/// Moves several staged files onto their targets as one unit.
///
/// Existing targets are set aside first. If any rename fails, the targets
/// already replaced are removed and every set-aside file is put back, so
/// readers see either all new files or all previous ones.
pub(crate) fn commit_all(mut files: Vec<StagedFile>) -> Result<(), Error> {
    for file in &files {
        if file.target.exists() && !file.target.is_file() {
            return Err(Error::InvalidData(format!(
                "Output target {} is not a regular file",
                file.target.display()
            )));
        }
    }

    let mut backups: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(files.len());
    for file in &files {
        match set_aside(&file.target) {
            Ok(Some(backup)) => backups.push((backup, file.target.clone())),
            Ok(None) => {}
            Err(e) => {
                restore(&backups);
                return Err(e);
            }
        }
    }

    for (idx, file) in files.iter().enumerate() {
        if let Err(e) = fs::rename(&file.temp, &file.target) {
            for done in &files[..idx] {
                let _ = fs::remove_file(&done.target);
            }
            restore(&backups);
            return Err(e.into());
        }
    }

    for file in &mut files {
        file.committed = true;
    }
    for (backup, _) in &backups {
        let _ = fs::remove_file(backup);
    }
    Ok(())
}

fn with_suffix(target: &Path, suffix: &str) -> Result<PathBuf, Error> {
    let mut name = target
        .file_name()
        .map(OsString::from)
        .ok_or_else(|| Error::InvalidData(format!("Not a file path: {}", target.display())))?;
    name.push(suffix);
    Ok(target.with_file_name(name))
}

fn set_aside(target: &Path) -> Result<Option<PathBuf>, Error> {
    if !target.exists() {
        return Ok(None);
    }
    let backup = with_suffix(target, ".backup")?;
    fs::rename(target, &backup)?;
    Ok(Some(backup))
}

fn restore(backups: &[(PathBuf, PathBuf)]) {
    for (backup, target) in backups {
        let _ = fs::rename(backup, target);
    }
}

impl Drop for StagedFile {
    fn drop(&mut self) {
        if !self.committed {
            let _ = fs::remove_file(&self.temp);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_moves_content_into_place() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.csv");

        let staged = StagedFile::write(&target, |w| Ok(w.write_all(b"a,b\n")?)).unwrap();
        assert!(!target.exists());
        staged.commit().unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "a,b\n");
        assert!(!dir.path().join("out.csv.partial").exists());
    }

    #[test]
    fn dropped_file_leaves_nothing_behind() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.csv");

        drop(StagedFile::write(&target, |w| Ok(w.write_all(b"x")?)).unwrap());
        assert!(!target.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn failing_writer_is_cleaned_up() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("out.csv");

        let result = StagedFile::write(&target, |_| Err(Error::InvalidData("boom".into())));
        assert!(result.is_err());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn commit_all_replaces_every_target() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        fs::write(&a, "OLD").unwrap();

        let first = StagedFile::write(&a, |w| Ok(w.write_all(b"new a")?)).unwrap();
        let second = StagedFile::write(&b, |w| Ok(w.write_all(b"new b")?)).unwrap();
        commit_all(vec![first, second]).unwrap();

        assert_eq!(fs::read_to_string(&a).unwrap(), "new a");
        assert_eq!(fs::read_to_string(&b).unwrap(), "new b");
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn failed_rename_restores_previous_targets() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        fs::write(&a, "OLD").unwrap();

        let first = StagedFile::write(&a, |w| Ok(w.write_all(b"new a")?)).unwrap();
        let second = StagedFile::write(&b, |w| Ok(w.write_all(b"new b")?)).unwrap();
        fs::remove_file(dir.path().join("b.csv.partial")).unwrap();

        assert!(commit_all(vec![first, second]).is_err());
        assert_eq!(fs::read_to_string(&a).unwrap(), "OLD");
        assert!(!b.exists());
        assert!(!dir.path().join("a.csv.backup").exists());
        assert!(!dir.path().join("a.csv.partial").exists());
    }

    #[test]
    fn directory_target_is_rejected_before_anything_moves() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.csv");
        let b = dir.path().join("b.csv");
        fs::write(&a, "OLD").unwrap();
        fs::create_dir(&b).unwrap();

        let first = StagedFile::write(&a, |w| Ok(w.write_all(b"new a")?)).unwrap();
        let second = StagedFile::write(&b, |w| Ok(w.write_all(b"new b")?)).unwrap();

        assert!(matches!(
            commit_all(vec![first, second]),
            Err(Error::InvalidData(_))
        ));
        assert_eq!(fs::read_to_string(&a).unwrap(), "OLD");
        assert!(b.is_dir());
    }
}
