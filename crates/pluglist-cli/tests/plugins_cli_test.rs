mod common;

use common::pluglist;
use pluglist_runtime::{Config, PluginCatalog, SiteConfig};
use pluglist_testing::TestWorld;
use pluglist_testing::assertions::assert_cell_count;
use pluglist_testing::fixtures::{sample_capabilities, sample_catalog};
use predicates::prelude::*;

#[test]
fn test_list_plain_shows_rows() {
    let world = TestWorld::new().with_catalog(&sample_catalog());

    pluglist(&world)
        .args(["plugins", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Plugins for admin@1"))
        .stdout(predicate::str::contains("Akismet Anti-Spam"))
        .stdout(predicate::str::contains("(Update to 5.3)"))
        .stdout(predicate::str::contains("Active, Autoupdates on"))
        .stdout(predicate::str::contains("Plugin files"));
}

#[test]
fn test_list_json_uses_configured_site() {
    let config = Config {
        site: SiteConfig {
            site_id: 42,
            username: "editor".to_string(),
        },
        ..Default::default()
    };
    let world = TestWorld::new()
        .with_config(&config)
        .with_catalog(&sample_catalog());

    let output = pluglist(&world)
        .args(["--format", "json", "plugins", "list"])
        .output()
        .expect("Failed to run plugins list");
    assert!(
        output.status.success(),
        "plugins list failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["site"], "editor@42");
    assert!(json.get("panel").is_none());
    assert_cell_count(&json, 6).unwrap();
    assert_eq!(json["cells"][1]["title"], "Hello Dolly");
    assert_eq!(json["cells"][1]["identifier"], "PluginListRow");
    assert_eq!(json["cells"][3]["title"], "Site");
    assert_eq!(json["cells"][3]["detail"], "editor@42");
    assert_eq!(json["cells"][3]["identifier"], "TextRow");
}

#[test]
fn test_list_without_catalog_shows_empty_panel() {
    let world = TestWorld::new();

    let output = pluglist(&world)
        .args(["--format", "json", "plugins", "list"])
        .output()
        .expect("Failed to run plugins list");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["panel"]["kind"], "empty");
    assert_eq!(json["panel"]["title"], "No Plugins");
    assert_cell_count(&json, 0).unwrap();
}

#[test]
fn test_list_with_unreadable_catalog_shows_error_panel() {
    let world = TestWorld::new();
    std::fs::write(PluginCatalog::path_in(world.data_dir()), "{ not json").unwrap();

    pluglist(&world)
        .args(["plugins", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Oops"))
        .stdout(predicate::str::contains("[Contact support]"));
}

#[test]
fn test_list_empty_catalog_shows_no_plugins() {
    let catalog = PluginCatalog {
        plugins: Vec::new(),
        capabilities: sample_capabilities(),
    };
    let world = TestWorld::new().with_catalog(&catalog);

    pluglist(&world)
        .args(["plugins", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No Plugins"));
}

#[test]
fn test_watch_requires_terminal() {
    let world = TestWorld::new().with_catalog(&sample_catalog());

    pluglist(&world)
        .args(["plugins", "watch"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn test_invalid_config_is_reported() {
    let world = TestWorld::new();
    std::fs::write(world.data_dir().join("config.toml"), "site = 3").unwrap();

    pluglist(&world)
        .args(["plugins", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}
