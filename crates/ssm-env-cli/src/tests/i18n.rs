// crates/ssm-env-cli/src/tests/i18n.rs
// ============================================================================
// Module: CLI i18n Tests
// Description: Unit tests for the message catalog and placeholder substitution.
// Purpose: Ensure CLI messages stay well-formed.
// Dependencies: ssm-env-cli i18n module
// ============================================================================

use std::collections::BTreeSet;

use crate::i18n::CATALOG_ITEMS;
use crate::i18n::MessageArg;
use crate::i18n::catalog;
use crate::i18n::translate;

#[test]
fn catalog_keys_are_unique() {
    let keys: BTreeSet<&str> = CATALOG_ITEMS.iter().map(|(key, _)| *key).collect();
    assert_eq!(keys.len(), CATALOG_ITEMS.len(), "duplicate catalog keys");
    assert_eq!(catalog().len(), CATALOG_ITEMS.len());
}

#[test]
fn translate_substitutes_placeholders() {
    let output = translate(
        "run.exported",
        vec![MessageArg::new("count", "3"), MessageArg::new("target", "env file /tmp/env")],
    );
    assert_eq!(output, "Exported 3 variables to env file /tmp/env.");
}

#[test]
fn translate_falls_back_to_key() {
    assert_eq!(translate("missing.key", Vec::new()), "missing.key");
}

#[test]
fn macro_formats_named_arguments() {
    let output = crate::t!("config.load_failed", error = "boom");
    assert_eq!(output, "Failed to load config: boom");
    assert_eq!(crate::t!("config.validate.ok"), "Config valid.");
}
