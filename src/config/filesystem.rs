use std::{
    cell::{Cell, RefCell},
    collections::HashMap,
    env, fs,
    io::{Error, ErrorKind, Result},
    path::{Path, PathBuf},
};

/// File operations needed to persist the configuration.
///
/// Config loading and saving never touch the operating system directly;
/// they go through this trait so that the same logic can run against
/// [`OsFileAccess`] in production and [`MemoryFileAccess`] in tests.
///
/// Implementations must report a missing file as [`ErrorKind::NotFound`].
pub trait FileAccess {
    /// Reads the full contents of the file at `path`.
    ///
    /// # Errors
    /// Returns an error with kind [`ErrorKind::NotFound`] if the file does not exist.
    fn read_file(&self, path: &Path) -> Result<Vec<u8>>;

    /// Writes `data` to `path`, replacing any existing content.
    ///
    /// `mode` holds Unix permission bits (e.g. `0o644`) applied to the file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    fn write_file(&self, path: &Path, data: &[u8], mode: u32) -> Result<()>;

    /// Returns the current working directory.
    ///
    /// # Errors
    /// Returns an error if the working directory cannot be determined.
    fn current_dir(&self) -> Result<PathBuf>;

    /// Returns the home directory of the current user.
    ///
    /// # Errors
    /// Returns an error if the home directory cannot be determined.
    fn home_dir(&self) -> Result<PathBuf>;
}

/// [`FileAccess`] backed by the real operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileAccess;

impl FileAccess for OsFileAccess {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        fs::read(path)
    }

    fn write_file(&self, path: &Path, data: &[u8], mode: u32) -> Result<()> {
        fs::write(path, data)?;
        set_mode(path, mode)
    }

    fn current_dir(&self) -> Result<PathBuf> {
        env::current_dir()
    }

    fn home_dir(&self) -> Result<PathBuf> {
        env::var("HOME")
            .map(PathBuf::from)
            .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not set"))
    }
}

#[cfg(unix)]
fn set_mode(path: &Path, mode: u32) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(mode))
}

#[cfg(not(unix))]
fn set_mode(_path: &Path, _mode: u32) -> Result<()> {
    Ok(())
}

/// A failure injected into [`MemoryFileAccess`].
#[derive(Debug, Clone)]
struct InjectedError {
    kind: ErrorKind,
    message: String,
}

impl InjectedError {
    fn to_error(&self) -> Error {
        Error::new(self.kind, self.message.clone())
    }
}

/// In-memory [`FileAccess`] for tests.
///
/// Files live in a path to bytes map. Working and home directories are
/// plain values set at construction. Writes can be made to fail, and every
/// write attempt is counted so tests can assert whether persistence was tried.
#[derive(Debug, Default)]
pub struct MemoryFileAccess {
    files: RefCell<HashMap<PathBuf, Vec<u8>>>,
    working_dir: PathBuf,
    home: PathBuf,
    write_calls: Cell<usize>,
    write_error: Option<InjectedError>,
    dir_error: Option<InjectedError>,
}

impl MemoryFileAccess {
    /// Creates an empty filesystem whose home and working directory are `home`.
    pub fn new(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            working_dir: home.clone(),
            home,
            ..Self::default()
        }
    }

    /// Sets the directory returned by [`FileAccess::current_dir`].
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = dir.into();
        self
    }

    /// Seeds a file before the test runs. Does not count as a write.
    pub fn with_file(self, path: impl Into<PathBuf>, data: impl Into<Vec<u8>>) -> Self {
        self.files.borrow_mut().insert(path.into(), data.into());
        self
    }

    /// Makes every subsequent write fail with an error of `kind`.
    pub fn fail_writes(&mut self, kind: ErrorKind, message: impl Into<String>) {
        self.write_error = Some(InjectedError {
            kind,
            message: message.into(),
        });
    }

    /// Makes directory lookups fail with an error of `kind`.
    pub fn fail_dirs(&mut self, kind: ErrorKind, message: impl Into<String>) {
        self.dir_error = Some(InjectedError {
            kind,
            message: message.into(),
        });
    }

    /// Number of times [`FileAccess::write_file`] has been called, failed writes included.
    pub fn write_calls(&self) -> usize {
        self.write_calls.get()
    }

    /// Returns a copy of the stored contents of `path`, if any.
    pub fn contents(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    fn dir(&self, dir: &Path) -> Result<PathBuf> {
        match &self.dir_error {
            Some(err) => Err(err.to_error()),
            None => Ok(dir.to_path_buf()),
        }
    }
}

impl FileAccess for MemoryFileAccess {
    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        self.files.borrow().get(path).cloned().ok_or_else(|| {
            Error::new(
                ErrorKind::NotFound,
                format!("no such file: {}", path.display()),
            )
        })
    }

    fn write_file(&self, path: &Path, data: &[u8], _mode: u32) -> Result<()> {
        self.write_calls.set(self.write_calls.get() + 1);

        if let Some(err) = &self.write_error {
            return Err(err.to_error());
        }

        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), data.to_vec());
        Ok(())
    }

    fn current_dir(&self) -> Result<PathBuf> {
        self.dir(&self.working_dir)
    }

    fn home_dir(&self) -> Result<PathBuf> {
        self.dir(&self.home)
    }
}
