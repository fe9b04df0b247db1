mod common;

use common::{loaded_screen, screen_for};
use pluglist_runtime::PluginStore;
use pluglist_testing::TableCommand;
use pluglist_testing::assertions::assert_selective_reload;
use pluglist_testing::fixtures::{sample_capabilities, sample_plugins, sample_site};
use pluglist_types::{
    Accessory, IndexPath, NoResults, NoResultsKind, Plugin, RowAnimation, StateChange,
};

#[test]
fn test_load_reloads_all_and_hides_panel() {
    let store = PluginStore::new();
    store.receive_plugins(&sample_site(), sample_plugins(), sample_capabilities());
    let mut screen = screen_for(&store);

    screen.load();

    assert!(screen.is_loaded());
    assert_eq!(
        screen.widget().commands(),
        &[TableCommand::HideEmptyState, TableCommand::ReloadAll]
    );
    assert_eq!(screen.number_of_sections(), 2);
    assert_eq!(screen.number_of_rows(0), 3);
    assert_eq!(screen.number_of_rows(1), 3);
}

#[test]
fn test_selective_change_reloads_only_listed_rows() {
    let (store, mut screen) = loaded_screen();

    store.update_plugin(&sample_site(), "hello-dolly", |p| p.active = true);
    assert_eq!(screen.pump(), 1);

    let commands = screen.widget().commands().to_vec();
    assert_selective_reload(&commands, &[1]).unwrap();
    assert_eq!(screen.widget().reload_all_count(), 0);
    assert!(commands.contains(&TableCommand::ReloadRows(
        vec![IndexPath::row(1)],
        RowAnimation::None
    )));

    let cell = screen.cell_for(IndexPath::row(1));
    assert_eq!(cell.detail.as_deref(), Some("Active, Autoupdates off"));
}

#[test]
fn test_selective_change_with_several_rows() {
    let (_store, mut screen) = loaded_screen();

    screen.on_state_change(StateChange::selective([2, 0]));

    assert_selective_reload(screen.widget().commands(), &[0, 2]).unwrap();
}

#[test]
fn test_replace_reloads_all_exactly_once() {
    let (store, mut screen) = loaded_screen();

    let mut plugins = sample_plugins();
    plugins.push(Plugin::new("woocommerce", "WooCommerce"));
    store.receive_plugins(&sample_site(), plugins, sample_capabilities());
    screen.pump();

    assert_eq!(screen.widget().reload_all_count(), 1);
    assert!(
        !screen
            .widget()
            .commands()
            .iter()
            .any(|command| matches!(command, TableCommand::ReloadRows(..)))
    );
    assert_eq!(screen.number_of_rows(0), 4);
}

#[test]
fn test_replace_on_empty_table_still_reloads() {
    let store = PluginStore::new();
    store.receive_plugins(&sample_site(), Vec::new(), sample_capabilities());
    let mut screen = screen_for(&store);
    screen.load();
    screen.widget_mut().take_commands();

    screen.on_state_change(StateChange::Replace);

    assert_eq!(screen.widget().reload_all_count(), 1);
    assert_eq!(screen.number_of_sections(), 0);
}

#[test]
fn test_selective_on_empty_table_skips_row_reload() {
    let store = PluginStore::new();
    store.start_loading(&sample_site());
    let mut screen = screen_for(&store);
    screen.load();
    screen.widget_mut().take_commands();

    screen.on_state_change(StateChange::selective([0]));

    assert_eq!(
        screen.widget().commands(),
        &[TableCommand::ShowEmptyState(NoResults::loading())]
    );
}

#[test]
fn test_panel_follows_state() {
    let store = PluginStore::new();
    let site = sample_site();
    store.start_loading(&site);
    let mut screen = screen_for(&store);
    screen.load();
    assert_eq!(
        screen.widget().panel().map(|panel| panel.kind),
        Some(NoResultsKind::Loading)
    );

    store.fail(&site, "timed out");
    screen.pump();
    let panel = screen.widget().panel().cloned().unwrap();
    assert_eq!(panel, NoResults::error("timed out"));

    store.receive_plugins(&site, sample_plugins(), sample_capabilities());
    screen.pump();
    assert!(screen.widget().panel().is_none());

    store.receive_plugins(&site, Vec::new(), sample_capabilities());
    screen.pump();
    assert_eq!(
        screen.widget().panel().map(|panel| panel.kind),
        Some(NoResultsKind::Empty)
    );
}

#[test]
fn test_repeated_change_keeps_panel_state() {
    let (_store, mut screen) = loaded_screen();

    screen.on_state_change(StateChange::Replace);
    screen.on_state_change(StateChange::Replace);

    assert!(screen.widget().panel().is_none());
    let hides = screen
        .widget()
        .commands()
        .iter()
        .filter(|command| **command == TableCommand::HideEmptyState)
        .count();
    assert_eq!(hides, 2);
}

#[test]
fn test_cell_for_configures_plugin_rows() {
    let (_store, mut screen) = loaded_screen();

    let cell = screen.cell_for(IndexPath::row(0));

    assert_eq!(cell.identifier, "PluginListRow");
    assert_eq!(cell.title, "Akismet Anti-Spam");
    assert_eq!(cell.detail.as_deref(), Some("Active, Autoupdates off"));
    assert_eq!(cell.badge.as_deref(), Some("Update to 5.3"));
    assert_eq!(cell.accessory, Accessory::Disclosure);
}

#[test]
fn test_cell_for_reuses_recycled_cells() {
    let (_store, mut screen) = loaded_screen();

    let first = screen.cell_for(IndexPath::row(0));
    screen.widget_mut().recycle(first);
    let reused = screen.cell_for(IndexPath::row(1));

    assert_eq!(screen.widget().allocated(), 1);
    assert_eq!(screen.widget().dequeued(), 2);
    assert_eq!(reused.title, "Hello Dolly");
    assert_eq!(reused.badge, None);
}

#[test]
fn test_cell_for_is_deterministic() {
    let (_store, mut screen) = loaded_screen();

    let once = screen.cell_for(IndexPath::row(2));
    screen.widget_mut().recycle(once.clone());
    let twice = screen.cell_for(IndexPath::row(2));

    assert_eq!(once, twice);
}

#[test]
#[should_panic(expected = "out of range")]
fn test_cell_for_out_of_range_panics() {
    let (_store, mut screen) = loaded_screen();
    screen.cell_for(IndexPath::row(3));
}

#[test]
fn test_on_select_presents_plugin() {
    let (_store, mut screen) = loaded_screen();

    screen.on_select(IndexPath::row(2));

    assert_eq!(
        screen.navigator().presented,
        vec![("jetpack".to_string(), sample_capabilities())]
    );
}

#[test]
#[should_panic(expected = "out of range")]
fn test_on_select_out_of_range_panics() {
    let (_store, mut screen) = loaded_screen();
    screen.on_select(IndexPath::new(2, 0));
}

#[test]
fn test_on_select_row_without_action_does_nothing() {
    let (_store, mut screen) = loaded_screen();

    screen.on_select(IndexPath::new(1, 0));

    assert!(screen.navigator().presented.is_empty());
    assert_eq!(screen.navigator().support_requests, 0);
    assert!(screen.widget().commands().is_empty());
}

#[test]
fn test_on_select_plugin_removed_before_pump() {
    let (store, mut screen) = loaded_screen();
    let mut plugins = sample_plugins();
    plugins.remove(1);
    store.receive_plugins(&sample_site(), plugins, sample_capabilities());

    screen.on_select(IndexPath::row(1));
    assert!(screen.navigator().presented.is_empty());

    screen.pump();
    screen.on_select(IndexPath::row(1));
    assert_eq!(
        screen.navigator().presented,
        vec![("jetpack".to_string(), sample_capabilities())]
    );
}

#[test]
fn test_cell_for_site_rows() {
    let (_store, mut screen) = loaded_screen();

    let site = screen.cell_for(IndexPath::new(1, 0));
    assert_eq!(site.identifier, "TextRow");
    assert_eq!(site.title, "Site");
    assert_eq!(site.detail.as_deref(), Some("admin@9001"));
    assert_eq!(site.accessory, Accessory::None);

    let files = screen.cell_for(IndexPath::new(1, 1));
    assert_eq!(files.detail.as_deref(), Some("Can modify"));
}

#[test]
fn test_empty_state_tap_asks_for_support() {
    let store = PluginStore::new();
    store.fail(&sample_site(), "server error");
    let mut screen = screen_for(&store);
    screen.load();

    screen.on_empty_state_tapped();

    assert_eq!(screen.navigator().support_requests, 1);
}

#[test]
fn test_unload_stops_updates() {
    let (store, mut screen) = loaded_screen();

    screen.unload();
    store.update_plugin(&sample_site(), "akismet", |p| p.active = false);

    assert!(!screen.is_loaded());
    assert_eq!(screen.pump(), 0);
    assert!(screen.widget().commands().is_empty());
    assert_eq!(store.subscriber_count(), 0);
}
