use std::env;
use std::path::{Path, PathBuf};

use anyhow::Context;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "sorteo.toml";
/// Variable de entorno para usar otro archivo de configuración.
pub const CONFIG_ENV: &str = "SORTEO_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Semilla fija para repetir un sorteo; `None` usa entropía del sistema.
    pub seed: Option<u64>,
    /// Filtro de `tracing` cuando no hay `RUST_LOG`.
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Carga `$SORTEO_CONFIG` o `./sorteo.toml`.
    pub fn load() -> anyhow::Result<Self> {
        let path = env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
        Self::load_from(&path)
    }

    /// Si el archivo no existe se usan los valores por defecto (no se crea nada).
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        confy::load_path(path).with_context(|| format!("could not load config {}", path.display()))
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use std::fs;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("sorteo-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn missing_file_gives_defaults_and_is_not_created() {
        let path = temp_path("missing");
        let _ = fs::remove_file(&path);
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(!path.exists());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let path = temp_path("partial");
        fs::write(&path, "seed = 7\n").unwrap();
        let cfg = Config::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.log_filter, "warn");
    }

    #[test]
    fn broken_file_is_an_error() {
        let path = temp_path("broken");
        fs::write(&path, "seed = \"not a number\"\n").unwrap();
        let result = Config::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn same_seed_same_numbers() {
        let cfg = Config {
            seed: Some(99),
            ..Config::default()
        };
        let (mut a, mut b) = (cfg.rng(), cfg.rng());
        let xs: Vec<u32> = (0..5).map(|_| a.gen()).collect();
        let ys: Vec<u32> = (0..5).map(|_| b.gen()).collect();
        assert_eq!(xs, ys);
    }
}
