//! Benchmark suite description
//!
//! The suite is an ordered list of benchmark names plus a table of execution
//! backends. Ordering is significant: reports render rows in table order.

use serde::{Deserialize, Serialize};

/// What a backend fundamentally is, used by the pairing rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackendKind {
    /// The reference implementation compiled ahead of time; denominator for
    /// relative-performance ratios.
    Native,
    /// A code-generating backend. The only kind with meaningful compile-time
    /// benchmarks.
    Compiler,
    /// A pure interpreter.
    Interpreter,
    /// An embedded third-party engine driven through a C API.
    Embedder,
}

/// A single execution backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backend {
    /// Canonical backend name, used in result paths and uploaded records.
    pub name: String,
    /// Display name used by the legacy results layout; defaults to `name`.
    #[serde(default)]
    pub display: Option<String>,
    /// Backend category.
    pub kind: BackendKind,
    /// Owning project, must be a key in the project table when uploading.
    pub project: String,
}

impl Backend {
    /// Name under the legacy `<benchmark> <display>/new/raw.csv` layout.
    pub fn display_name(&self) -> &str {
        self.display.as_deref().unwrap_or(&self.name)
    }
}

/// The full benchmark suite: which workloads exist and which backends ran them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suite {
    /// Ordered benchmark names.
    pub benchmarks: Vec<String>,
    /// Name of the reference backend (ratio denominator).
    pub reference: String,
    /// Backend table, in report order.
    pub backends: Vec<Backend>,
}

impl Suite {
    /// Look up a backend by canonical name.
    pub fn backend(&self, name: &str) -> Option<&Backend> {
        self.backends.iter().find(|b| b.name == name)
    }

    /// The designated reference backend, if present in the table.
    pub fn reference_backend(&self) -> Option<&Backend> {
        self.backend(&self.reference)
    }

    /// Whether a (benchmark, backend) pairing is conceptually measurable.
    ///
    /// Compile-time benchmarks only exist for code-generating backends: the
    /// reference backend has nothing to compile and interpreters never
    /// compile, so those rows are skipped everywhere (table and upload alike),
    /// regardless of whether a stray results file exists.
    pub fn is_measured(&self, benchmark: &str, backend: &Backend) -> bool {
        !benchmark.contains("compile") || backend.kind == BackendKind::Compiler
    }

    /// All measurable pairings, in report order.
    pub fn pairings(&self) -> impl Iterator<Item = (&str, &Backend)> {
        self.benchmarks.iter().flat_map(move |benchmark| {
            self.backends
                .iter()
                .filter(move |backend| self.is_measured(benchmark, backend))
                .map(move |backend| (benchmark.as_str(), backend))
        })
    }
}

impl Default for Suite {
    fn default() -> Self {
        let backend = |name: &str, display: &str, kind, project: &str| Backend {
            name: name.to_string(),
            display: Some(display.to_string()),
            kind,
            project: project.to_string(),
        };

        Self {
            benchmarks: [
                "small_compile",
                "large_compile",
                "fibonacci",
                "sha1",
                "sum",
                "nbody",
                "fannkuch",
            ]
            .map(String::from)
            .to_vec(),
            reference: "native".to_string(),
            backends: vec![
                backend("native", "rust-native", BackendKind::Native, "rust"),
                backend("cranelift", "wasmer-clif", BackendKind::Compiler, "wasmer"),
                backend("llvm", "wasmer-llvm", BackendKind::Compiler, "wasmer"),
                backend(
                    "singlepass",
                    "wasmer-singlepass",
                    BackendKind::Compiler,
                    "wasmer",
                ),
                backend("wasmi", "wasmi", BackendKind::Interpreter, "wasmi"),
                backend("v8", "wasm-c-api-v8", BackendKind::Embedder, "v8"),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_benchmarks_only_pair_with_compilers() {
        let suite = Suite::default();
        let native = suite.backend("native").unwrap();
        let wasmi = suite.backend("wasmi").unwrap();
        let v8 = suite.backend("v8").unwrap();
        let cranelift = suite.backend("cranelift").unwrap();

        assert!(!suite.is_measured("small_compile", native));
        assert!(!suite.is_measured("small_compile", wasmi));
        assert!(!suite.is_measured("large_compile", v8));
        assert!(suite.is_measured("small_compile", cranelift));
    }

    #[test]
    fn runtime_benchmarks_pair_with_everything() {
        let suite = Suite::default();
        for backend in &suite.backends {
            assert!(suite.is_measured("fibonacci", backend));
            assert!(suite.is_measured("sum", backend));
        }
    }

    #[test]
    fn pairings_follow_table_order_and_skip_invalid() {
        let suite = Suite::default();
        let pairs: Vec<_> = suite
            .pairings()
            .map(|(bench, backend)| (bench, backend.name.as_str()))
            .collect();

        // Compile benchmarks list only the three compiler backends.
        assert_eq!(pairs[0], ("small_compile", "cranelift"));
        assert_eq!(pairs[1], ("small_compile", "llvm"));
        assert_eq!(pairs[2], ("small_compile", "singlepass"));
        // First runtime benchmark starts with the reference backend.
        assert_eq!(pairs[6], ("fibonacci", "native"));
    }

    #[test]
    fn display_name_falls_back_to_name() {
        let backend = Backend {
            name: "wasmi".to_string(),
            display: None,
            kind: BackendKind::Interpreter,
            project: "wasmi".to_string(),
        };
        assert_eq!(backend.display_name(), "wasmi");
    }

    #[test]
    fn suite_parses_from_toml() {
        let toml_str = r#"
            benchmarks = ["sum"]
            reference = "native"

            [[backends]]
            name = "native"
            kind = "native"
            project = "rust"

            [[backends]]
            name = "cranelift"
            display = "wasmer-clif"
            kind = "compiler"
            project = "wasmer"
        "#;

        let suite: Suite = toml::from_str(toml_str).unwrap();
        assert_eq!(suite.benchmarks, ["sum"]);
        assert_eq!(suite.backends.len(), 2);
        assert_eq!(suite.backends[1].display_name(), "wasmer-clif");
        assert_eq!(suite.reference_backend().unwrap().kind, BackendKind::Native);
    }
}
