//! Environment-backed settings
//!
//! Everything benchrelay takes from the process environment is read once at
//! startup into [`EnvSettings`] and passed down; no other component touches
//! environment variables.

/// Results collector endpoint, e.g. `https://speed.example.io`.
pub const ENV_URL: &str = "BENCHRELAY_URL";
/// API credential for the results collector.
pub const ENV_TOKEN: &str = "BENCHRELAY_TOKEN";
/// Set to `true` by GitHub Actions.
pub const ENV_CI: &str = "GITHUB_ACTIONS";
/// Commit hash of the checkout being benchmarked in CI.
pub const ENV_CI_COMMIT: &str = "GITHUB_SHA";

/// Settings sourced from the process environment at startup.
#[derive(Debug, Clone)]
pub struct EnvSettings {
    /// Collector endpoint; required when uploading.
    pub collector_url: Option<String>,
    /// Collector credential; required when uploading.
    pub api_token: Option<String>,
    /// CI-provided commit hash, set only when running in CI. Tags the whole
    /// batch regardless of project.
    pub ci_commit: Option<String>,
    /// Environment name recorded on uploaded results.
    pub environment: String,
}

impl EnvSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary variable lookup. Tests inject
    /// their own.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |value: Option<String>| value.filter(|v| !v.is_empty());

        let in_ci = lookup(ENV_CI).as_deref() == Some("true");
        let ci_commit = if in_ci {
            non_empty(lookup(ENV_CI_COMMIT))
        } else {
            None
        };
        let environment = if in_ci {
            "github-actions".to_string()
        } else {
            hostname().unwrap_or_else(|| "unknown".to_string())
        };

        Self {
            collector_url: non_empty(lookup(ENV_URL)),
            api_token: non_empty(lookup(ENV_TOKEN)),
            ci_commit,
            environment,
        }
    }
}

/// Best-effort machine name, degrading to `None` off Linux without
/// `$HOSTNAME`.
fn hostname() -> Option<String> {
    if let Ok(name) = std::env::var("HOSTNAME")
        && !name.is_empty()
    {
        return Some(name);
    }
    std::fs::read_to_string("/etc/hostname")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> EnvSettings {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        EnvSettings::from_lookup(|name| map.get(name).cloned())
    }

    #[test]
    fn ci_run_takes_commit_and_environment_from_ci() {
        let env = settings(&[
            (ENV_CI, "true"),
            (ENV_CI_COMMIT, "abc123"),
            (ENV_URL, "https://speed.example.io"),
            (ENV_TOKEN, "secret"),
        ]);
        assert_eq!(env.ci_commit.as_deref(), Some("abc123"));
        assert_eq!(env.environment, "github-actions");
        assert_eq!(env.collector_url.as_deref(), Some("https://speed.example.io"));
    }

    #[test]
    fn local_run_has_no_ci_commit() {
        let env = settings(&[(ENV_CI_COMMIT, "abc123")]);
        assert_eq!(env.ci_commit, None);
    }

    #[test]
    fn empty_values_count_as_absent() {
        let env = settings(&[(ENV_URL, ""), (ENV_TOKEN, "")]);
        assert_eq!(env.collector_url, None);
        assert_eq!(env.api_token, None);
    }
}
