use std::path::Path;

use anyhow::Context as _;
use serde::{de::DeserializeOwned, Serialize};
use xshell::Shell;

/// Marker for YAML-backed config files; brings in the blanket read/save impls.
pub trait FileConfig: Serialize + DeserializeOwned {}

/// Read a typed config from a YAML file.
pub trait ReadConfig: Sized {
    fn read(shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<Self>;
}

/// Save a typed config as a YAML file.
pub trait SaveConfig {
    fn save(&self, shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<()>;
}

impl<T: FileConfig> ReadConfig for T {
    fn read(shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = shell
            .read_file(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_yaml::from_str(&raw).with_context(|| format!("malformed config {}", path.display()))
    }
}

impl<T: FileConfig> SaveConfig for T {
    fn save(&self, shell: &Shell, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = path.as_ref();
        let raw = serde_yaml::to_string(self)?;
        shell
            .write_file(path, raw)
            .with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }
}
