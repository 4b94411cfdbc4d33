use crate::config::{CONFIG_FILE_NAME, DEFAULT_CONFIG_TEMPLATE};
use crate::io;
use anyhow::Result;
use std::path::{Path, PathBuf};

pub fn init_config(force: bool) -> Result<()> {
    init_config_in(Path::new("."), force)?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);
    Ok(())
}

/// Write the default configuration into `dir`
pub fn init_config_in(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    io::write_file(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from_path;
    use std::fs;

    #[test]
    fn test_init_writes_loadable_config() {
        let temp = tempfile::tempdir().unwrap();
        let path = init_config_in(temp.path(), false).unwrap();
        assert!(load_config_from_path(&path).is_ok());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(CONFIG_FILE_NAME), "# mine\n").unwrap();

        let err = init_config_in(temp.path(), false).unwrap_err();
        assert!(err.to_string().contains("--force"));

        init_config_in(temp.path(), true).unwrap();
        let contents = fs::read_to_string(temp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert!(contents.starts_with("# wqindex configuration"));
    }
}
