// Menu state management and the top-level app state machine

use crate::leaderboard::normalize_player_name;

/// Longest name accepted by the name prompt
pub const MAX_NAME_LEN: usize = 20;

/// Application state machine
#[derive(Debug, Clone, PartialEq)]
pub enum AppState {
    /// Currently in the main menu
    Menu,
    /// Playing a shootout as the named player
    Game(String),
    /// Graceful shutdown
    Exiting,
}

/// Menu items
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuItem {
    Play,
    Instructions,
    Quit,
}

impl MenuItem {
    pub fn display_text(&self) -> &str {
        match self {
            MenuItem::Play => "Play",
            MenuItem::Instructions => "Instructions",
            MenuItem::Quit => "Quit",
        }
    }

    pub fn all() -> Vec<MenuItem> {
        vec![MenuItem::Play, MenuItem::Instructions, MenuItem::Quit]
    }
}

/// Which screen of the menu has focus
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuScreen {
    Main,
    NamePrompt,
    Instructions,
}

pub struct MenuState {
    pub selected_index: usize,
    pub items: Vec<MenuItem>,
    pub screen: MenuScreen,
    /// Name typed into the prompt so far
    pub name_input: String,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            selected_index: 0,
            items: MenuItem::all(),
            screen: MenuScreen::Main,
            name_input: String::new(),
        }
    }

    pub fn selected_item(&self) -> MenuItem {
        self.items[self.selected_index]
    }

    /// Move selection up (wraps around)
    pub fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = self.items.len() - 1;
        }
    }

    /// Move selection down (wraps around)
    pub fn select_next(&mut self) {
        if self.selected_index < self.items.len() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// Open the name prompt, keeping the last name as a starting point
    pub fn start_name_input(&mut self) {
        self.screen = MenuScreen::NamePrompt;
    }

    pub fn cancel_name_input(&mut self) {
        self.screen = MenuScreen::Main;
    }

    /// Close the prompt and return the cleaned-up name
    pub fn submit_name(&mut self) -> String {
        self.screen = MenuScreen::Main;
        normalize_player_name(&self.name_input)
    }

    pub fn add_char_to_name(&mut self, c: char) {
        if self.name_input.chars().count() < MAX_NAME_LEN {
            self.name_input.push(c);
        }
    }

    pub fn backspace_name(&mut self) {
        self.name_input.pop();
    }

    pub fn show_instructions(&mut self) {
        self.screen = MenuScreen::Instructions;
    }

    pub fn close_instructions(&mut self) {
        self.screen = MenuScreen::Main;
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::DEFAULT_PLAYER_NAME;

    #[test]
    fn test_selection_wraps() {
        let mut menu = MenuState::new();
        assert_eq!(menu.selected_item(), MenuItem::Play);
        menu.select_previous();
        assert_eq!(menu.selected_item(), MenuItem::Quit);
        menu.select_next();
        assert_eq!(menu.selected_item(), MenuItem::Play);
    }

    #[test]
    fn test_name_input_is_capped_and_normalized() {
        let mut menu = MenuState::new();
        menu.start_name_input();
        for c in "  a very long goalkeeper name  ".chars() {
            menu.add_char_to_name(c);
        }
        assert_eq!(menu.name_input.chars().count(), MAX_NAME_LEN);

        let name = menu.submit_name();
        assert_eq!(name, "a very long goalke");
        assert_eq!(menu.screen, MenuScreen::Main);
    }

    #[test]
    fn test_empty_name_becomes_default() {
        let mut menu = MenuState::new();
        menu.start_name_input();
        menu.add_char_to_name(' ');
        assert_eq!(menu.submit_name(), DEFAULT_PLAYER_NAME);
    }
}
