//! Common test utilities shared across integration tests.
#![allow(dead_code)]

use assert_cmd::Command;
use pluglist_runtime::{PluginListViewModel, PluginStore};
use pluglist_testing::fixtures::{sample_capabilities, sample_plugins, sample_site};
use pluglist_testing::{RecordingTable, TestWorld};
use pluglist_types::{Plugin, SitePluginCapabilities};

use pluglist::presentation::{PluginListScreen, PluginNavigator};

pub fn pluglist(world: &TestWorld) -> Command {
    world.command_from_path(assert_cmd::cargo::cargo_bin!("pluglist"))
}

/// Navigator that remembers where it was sent
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub presented: Vec<(String, SitePluginCapabilities)>,
    pub support_requests: usize,
}

impl PluginNavigator for RecordingNavigator {
    fn present(&mut self, plugin: &Plugin, capabilities: SitePluginCapabilities) {
        self.presented.push((plugin.slug.clone(), capabilities));
    }

    fn show_support(&mut self) {
        self.support_requests += 1;
    }
}

pub type TestScreen = PluginListScreen<RecordingTable, RecordingNavigator>;

pub fn screen_for(store: &PluginStore) -> TestScreen {
    let view_model = PluginListViewModel::new(sample_site(), store.clone());
    PluginListScreen::new(view_model, RecordingTable::new(), RecordingNavigator::default())
}

/// Store holding the sample plugins, and a loaded screen with its load commands cleared
pub fn loaded_screen() -> (PluginStore, TestScreen) {
    let store = PluginStore::new();
    store.receive_plugins(&sample_site(), sample_plugins(), sample_capabilities());
    let mut screen = screen_for(&store);
    screen.load();
    screen.widget_mut().take_commands();
    (store, screen)
}
