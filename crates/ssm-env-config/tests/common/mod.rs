// crates/ssm-env-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared helpers for config validation tests.
// Purpose: Reduce duplication across integration tests for ssm-env-config.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::collections::BTreeMap;

use ssm_env_config::ActionInputs;
use ssm_env_config::ConfigError;
use ssm_env_config::SsmEnvConfig;
use ssm_env_config::input_variable;

/// Parses a TOML string into an `SsmEnvConfig` for tests.
pub fn config_from_toml(toml_str: &str) -> Result<SsmEnvConfig, toml::de::Error> {
    toml::from_str(toml_str)
}

/// Returns a minimal config with all defaults applied.
pub fn minimal_config() -> Result<SsmEnvConfig, toml::de::Error> {
    config_from_toml("")
}

/// Builds action inputs from `(input name, value)` pairs.
pub fn inputs(pairs: &[(&str, &str)]) -> ActionInputs {
    let variables: BTreeMap<String, String> =
        pairs.iter().map(|(name, value)| (input_variable(name), (*value).to_string())).collect();
    ActionInputs::from_lookup(|variable| variables.get(variable).cloned())
}

/// Asserts that a validation result failed with a message containing `needle`.
pub fn assert_invalid(result: Result<(), ConfigError>, needle: &str) -> Result<(), String> {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error {message} did not contain {needle}"))
            }
        }
        Ok(()) => Err("expected invalid config".to_string()),
    }
}
