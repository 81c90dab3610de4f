//! Configuration loading from relay.toml
//!
//! The suite and project tables can be specified in a `relay.toml` file,
//! discovered by walking up from the current directory. Without one, the
//! built-in default suite applies.

use benchrelay_suite::{ProjectTable, Suite, default_projects};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Benchrelay configuration: the injectable static tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelayConfig {
    /// Benchmark and backend tables.
    #[serde(default)]
    pub suite: Suite,
    /// Project name to commit source.
    #[serde(default = "default_projects")]
    pub projects: ProjectTable,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            suite: Suite::default(),
            projects: default_projects(),
        }
    }
}

impl RelayConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Try to discover and load configuration by walking up from the current
    /// directory.
    pub fn discover() -> Option<Self> {
        let mut dir = std::env::current_dir().ok()?;
        loop {
            let config_path = dir.join("relay.toml");
            if config_path.exists() {
                return Self::load(&config_path).ok();
            }
            if !dir.pop() {
                break;
            }
        }
        None
    }

    /// Generate a default configuration as a TOML string.
    pub fn default_toml() -> String {
        r#"# Benchrelay configuration
# https://github.com/ml-rust/benchrelay

[suite]
# Benchmarks in report order.
benchmarks = [
    "small_compile",
    "large_compile",
    "fibonacci",
    "sha1",
    "sum",
    "nbody",
    "fannkuch",
]
# Backend whose mean is the denominator for performance ratios.
reference = "native"

# Backends in report order. `kind` is one of "native", "compiler",
# "interpreter", "embedder"; compile benchmarks are only measured on
# compilers. `display` is the name used by the legacy results layout.

[[suite.backends]]
name = "native"
display = "rust-native"
kind = "native"
project = "rust"

[[suite.backends]]
name = "cranelift"
display = "wasmer-clif"
kind = "compiler"
project = "wasmer"

[[suite.backends]]
name = "llvm"
display = "wasmer-llvm"
kind = "compiler"
project = "wasmer"

[[suite.backends]]
name = "singlepass"
display = "wasmer-singlepass"
kind = "compiler"
project = "wasmer"

[[suite.backends]]
name = "wasmi"
display = "wasmi"
kind = "interpreter"
project = "wasmi"

[[suite.backends]]
name = "v8"
display = "wasm-c-api-v8"
kind = "embedder"
project = "v8"

# Where each project's commit identifier comes from outside CI: a pinned
# `commit`, or a `lock-package` whose pinned source in Cargo.lock carries
# the hash.

[projects.rust]
commit = "3c3d3c1777041200bb7ed7a65b6562d62899778c"

[projects.v8]
commit = "e0ea8246c6ad7b698643995ba25da09d7012f679"

[projects.wasmer]
lock-package = "wasmer-vm"

[projects.wasmi]
commit = "0267b20e6ec0085f6dc7d5d813aa2cc17383f9d5"
"#
        .to_string()
    }
}
