//! Main menu system with settings configuration

use crate::mode::SupplyMode;
use crate::settings::{MAX_CAPACITY, MIN_CAPACITY, Settings};

/// Menu screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuScreen {
    Main,
    ModeSelect,
    Settings,
}

/// Menu state
#[derive(Debug, Clone)]
pub struct Menu {
    pub screen: MenuScreen,
    pub selected: usize,
    pub items: Vec<MenuItem>,
    /// Status line shown under the items (e.g. after saving)
    pub notice: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MenuItem {
    pub label: String,
    pub item_type: MenuItemType,
}

#[derive(Debug, Clone)]
pub enum MenuItemType {
    /// Simple button that triggers an action
    Button(MenuAction),
    /// Cycle through options
    Cycle { key: SettingKey, options: Vec<String>, current: usize },
    /// Numeric value with increment/decrement
    Number { key: SettingKey, value: u64, min: u64, max: u64, step: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    StartGame(SupplyMode),
    GoToScreen(MenuScreen),
    Back,
    Quit,
    SaveSettings,
}

/// Setting keys for identifying which setting to modify
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingKey {
    QueueCapacity,
    ReserveCapacity,
    DefaultMode,
}

fn button(label: &str, action: MenuAction) -> MenuItem {
    MenuItem {
        label: label.to_string(),
        item_type: MenuItemType::Button(action),
    }
}

fn capacity_item(label: &str, key: SettingKey, value: usize) -> MenuItem {
    MenuItem {
        label: label.to_string(),
        item_type: MenuItemType::Number {
            key,
            value: value as u64,
            min: MIN_CAPACITY as u64,
            max: MAX_CAPACITY as u64,
            step: 1,
        },
    }
}

impl Menu {
    pub fn new() -> Self {
        Self::main_menu()
    }

    pub fn main_menu() -> Self {
        Self {
            screen: MenuScreen::Main,
            selected: 0,
            notice: None,
            items: vec![
                button("Play", MenuAction::GoToScreen(MenuScreen::ModeSelect)),
                button("Settings", MenuAction::GoToScreen(MenuScreen::Settings)),
                button("Quit", MenuAction::Quit),
            ],
        }
    }

    pub fn mode_select(settings: &Settings) -> Self {
        let mut items: Vec<MenuItem> = SupplyMode::all()
            .iter()
            .map(|&mode| button(mode.name(), MenuAction::StartGame(mode)))
            .collect();
        items.push(button("Back", MenuAction::Back));

        let selected = SupplyMode::all()
            .iter()
            .position(|&mode| mode == settings.session.default_mode)
            .unwrap_or(0);

        Self {
            screen: MenuScreen::ModeSelect,
            selected,
            notice: None,
            items,
        }
    }

    pub fn settings_menu(settings: &Settings) -> Self {
        let mode_names: Vec<String> = SupplyMode::all()
            .iter()
            .map(|mode| mode.name().to_string())
            .collect();
        let current = SupplyMode::all()
            .iter()
            .position(|&mode| mode == settings.session.default_mode)
            .unwrap_or(0);

        Self {
            screen: MenuScreen::Settings,
            selected: 0,
            notice: None,
            items: vec![
                capacity_item(
                    "Queue Capacity",
                    SettingKey::QueueCapacity,
                    settings.supply.queue_capacity,
                ),
                capacity_item(
                    "Reserve Capacity",
                    SettingKey::ReserveCapacity,
                    settings.supply.reserve_capacity,
                ),
                MenuItem {
                    label: "Default Mode".to_string(),
                    item_type: MenuItemType::Cycle {
                        key: SettingKey::DefaultMode,
                        options: mode_names,
                        current,
                    },
                },
                button("Save", MenuAction::SaveSettings),
                button("Back", MenuAction::Back),
            ],
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        } else {
            self.selected = self.items.len().saturating_sub(1);
        }
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        } else {
            self.selected = 0;
        }
    }

    /// Handle left/right for cycling options and numbers
    pub fn adjust_left(&mut self, settings: &mut Settings) {
        if let Some(item) = self.items.get_mut(self.selected) {
            match &mut item.item_type {
                MenuItemType::Cycle { key, options, current } => {
                    *current = if *current == 0 { options.len() - 1 } else { *current - 1 };
                    apply_setting(settings, key, &SettingValue::Index(*current));
                }
                MenuItemType::Number { key, value, min, step, .. } => {
                    *value = value.saturating_sub(*step).max(*min);
                    apply_setting(settings, key, &SettingValue::Number(*value));
                }
                MenuItemType::Button(_) => {}
            }
        }
    }

    pub fn adjust_right(&mut self, settings: &mut Settings) {
        if let Some(item) = self.items.get_mut(self.selected) {
            match &mut item.item_type {
                MenuItemType::Cycle { key, options, current } => {
                    *current = (*current + 1) % options.len();
                    apply_setting(settings, key, &SettingValue::Index(*current));
                }
                MenuItemType::Number { key, value, max, step, .. } => {
                    *value = (*value + *step).min(*max);
                    apply_setting(settings, key, &SettingValue::Number(*value));
                }
                MenuItemType::Button(_) => {}
            }
        }
    }

    /// Get the action for the current selection (for Button types)
    pub fn select(&self) -> Option<&MenuAction> {
        if let Some(item) = self.items.get(self.selected) {
            if let MenuItemType::Button(action) = &item.item_type {
                return Some(action);
            }
        }
        None
    }

    pub fn go_to(&mut self, screen: MenuScreen, settings: &Settings) {
        *self = match screen {
            MenuScreen::Main => Self::main_menu(),
            MenuScreen::ModeSelect => Self::mode_select(settings),
            MenuScreen::Settings => Self::settings_menu(settings),
        };
    }

    /// Go back to previous screen
    pub fn go_back(&mut self, settings: &Settings) {
        // Every sub-screen hangs off the main menu
        self.go_to(MenuScreen::Main, settings);
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper enum for setting values
enum SettingValue {
    Number(u64),
    Index(usize),
}

/// Apply a setting change to the Settings struct
fn apply_setting(settings: &mut Settings, key: &SettingKey, value: &SettingValue) {
    match (key, value) {
        (SettingKey::QueueCapacity, SettingValue::Number(v)) => {
            settings.supply.queue_capacity = *v as usize;
        }
        (SettingKey::ReserveCapacity, SettingValue::Number(v)) => {
            settings.supply.reserve_capacity = *v as usize;
        }
        (SettingKey::DefaultMode, SettingValue::Index(i)) => {
            if let Some(&mode) = SupplyMode::all().get(*i) {
                settings.session.default_mode = mode;
            }
        }
        _ => {}
    }
    settings.supply.clamp();
}
