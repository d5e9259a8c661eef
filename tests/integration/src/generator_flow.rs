//! End-to-end generator flow tests
//!
//! These exercise the complete path: command line -> resolver -> report,
//! both through the library seams and through the built binary.

use assert_cmd::Command;
use gen_resolve::{CliValues, Resolver};
use gen_schema::{OptionValue, ResolvedValues, SchemaRegistry};
use gen_testkit::{ScriptedPrompts, StaticProbe};

#[tokio::test]
async fn test_full_interactive_session() {
    let registry = SchemaRegistry::with_builtins();
    let mut engine = ScriptedPrompts::new()
        .answer("primer-box")
        .answer("Box")
        .answer("A fresh box")
        .answer("product")
        .answer("utilities")
        .answer(OptionValue::list(["primer-css", "primer-product"]))
        .answer("");
    let probe = StaticProbe::new();

    let mut resolver = Resolver::new(&registry, &mut engine, &probe);
    let resolved = resolver.resolve(&CliValues::new()).await.unwrap();

    let mut expected = ResolvedValues::new();
    expected.set("module", "primer-box");
    expected.set("type", "css");
    expected.set("title", "Box");
    expected.set("description", "A fresh box");
    expected.set("category", "product");
    expected.set("module_type", "utilities");
    expected.set(
        "dependents",
        OptionValue::list(["primer-css", "primer-product"]),
    );
    expected.set("docs", "");
    expected.set("status", "Experimental");
    expected.set("todo", true);
    assert_eq!(resolved, expected);

    // The prompts that did run saw the answers given before them.
    let records = engine.records();
    assert_eq!(records.len(), 7);
    assert_eq!(records[1].option, "title");
    assert_eq!(records[1].default, Some(OptionValue::from("Box")));
    assert_eq!(records[5].option, "dependents");
    assert_eq!(
        records[5].default,
        Some(OptionValue::list(["primer-css", "primer-product"]))
    );
}

#[tokio::test]
async fn test_mixed_session_threads_flag_values_into_prompts() {
    let registry = SchemaRegistry::with_builtins();
    let mut engine = ScriptedPrompts::new()
        .answer("Alerts")
        .answer("Alert styles")
        .answer("components")
        .answer(OptionValue::list(["primer-css", "primer-marketing"]))
        .answer("");
    let probe = StaticProbe::new();

    let input = CliValues::new()
        .with_positional("primer-alerts")
        .with_flag("category", "marketing")
        .with_bool_flag("no-todo", true);

    let mut resolver = Resolver::new(&registry, &mut engine, &probe);
    let resolved = resolver.resolve(&input).await.unwrap();

    let records = engine.records();
    let asked: Vec<&str> = records.iter().map(|r| r.option.as_str()).collect();
    assert_eq!(
        asked,
        vec!["title", "description", "module_type", "dependents", "docs"]
    );

    // The title default came from the positional argument, the
    // dependents default from the category flag.
    assert_eq!(records[0].default, Some(OptionValue::from("Alerts")));
    assert_eq!(
        records[3].default,
        Some(OptionValue::list(["primer-css", "primer-marketing"]))
    );

    assert_eq!(resolved.get_text("module"), Some("primer-alerts"));
    assert_eq!(resolved.get_text("category"), Some("marketing"));
    assert_eq!(resolved.get_bool("todo"), Some(false));
}

#[tokio::test]
async fn test_rejected_answers_never_discard_earlier_ones() {
    let registry = SchemaRegistry::with_builtins();
    let mut engine = ScriptedPrompts::new()
        .answer("tabs")
        .answer("still-not-right")
        .answer("primer-tabs")
        .answer("Tabs")
        .answer("Tab styles")
        .answer("core")
        .answer("components")
        .answer(OptionValue::list(["primer-css"]))
        .answer("");
    let probe = StaticProbe::new();

    let mut resolver = Resolver::new(&registry, &mut engine, &probe);
    let resolved = resolver.resolve(&CliValues::new()).await.unwrap();

    assert_eq!(engine.rejections().len(), 2);
    // Two retries for module, then one prompt per remaining option.
    assert_eq!(engine.records().len(), 9);
    assert_eq!(resolved.get_text("module"), Some("primer-tabs"));
    assert_eq!(resolved.get_text("title"), Some("Tabs"));
}

/// The binary must hand the resolver exactly what the library would.
#[tokio::test(flavor = "multi_thread")]
async fn test_binary_json_matches_library_resolution() {
    let assert = Command::cargo_bin("primer-gen")
        .unwrap()
        .args([
            "primer-tabs",
            "--title",
            "Tabs",
            "--description",
            "Tab styles",
            "--category",
            "core",
            "--module-type",
            "components",
            "--no-dependents",
            "--docs",
            "",
            "--json",
        ])
        .assert()
        .success();
    let from_binary: serde_json::Value =
        serde_json::from_slice(&assert.get_output().stdout).unwrap();

    let registry = SchemaRegistry::with_builtins();
    let mut engine = ScriptedPrompts::new();
    let probe = StaticProbe::new();
    let input = CliValues::new()
        .with_positional("primer-tabs")
        .with_flag("title", "Tabs")
        .with_flag("description", "Tab styles")
        .with_flag("category", "core")
        .with_flag("module-type", "components")
        .with_bool_flag("no-dependents", true)
        .with_flag("docs", "");
    let resolved = Resolver::new(&registry, &mut engine, &probe)
        .resolve(&input)
        .await
        .unwrap();
    let from_library = serde_json::to_value(&resolved).unwrap();

    assert_eq!(from_binary, from_library);
    assert!(engine.records().is_empty());
}

#[test]
fn test_binary_summary_follows_declaration_order() {
    let assert = Command::cargo_bin("primer-gen")
        .unwrap()
        .args([
            "primer-tabs",
            "--title",
            "Tabs",
            "--description",
            "Tab styles",
            "--category",
            "core",
            "--module-type",
            "components",
            "--dependents",
            "--docs",
            "",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let module_at = stdout.find("module:").unwrap();
    let status_at = stdout.find("status:").unwrap();
    let verbose_at = stdout.find("verbose:").unwrap();
    assert!(module_at < status_at);
    assert!(status_at < verbose_at);
}
