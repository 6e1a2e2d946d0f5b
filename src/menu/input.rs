// Menu input handling

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

use super::state::{MenuItem, MenuScreen, MenuState};

/// Menu action result
#[derive(Debug, PartialEq)]
pub enum MenuAction {
    /// Stay in the menu
    None,
    /// Start a shootout for the named player
    StartGame(String),
    /// Exit application
    Quit,
}

/// Wait briefly for a key and apply it to the menu
pub fn handle_menu_input(menu_state: &mut MenuState) -> Result<MenuAction, io::Error> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key_press(menu_state, key.code));
            }
        }
    }

    Ok(MenuAction::None)
}

pub fn handle_key_press(menu_state: &mut MenuState, key_code: KeyCode) -> MenuAction {
    match menu_state.screen {
        MenuScreen::NamePrompt => handle_name_input(menu_state, key_code),
        MenuScreen::Instructions => {
            // Any key closes the instructions
            menu_state.close_instructions();
            MenuAction::None
        }
        MenuScreen::Main => match key_code {
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => {
                menu_state.select_previous();
                MenuAction::None
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => {
                menu_state.select_next();
                MenuAction::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => handle_menu_selection(menu_state),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => MenuAction::Quit,
            _ => MenuAction::None,
        },
    }
}

fn handle_menu_selection(menu_state: &mut MenuState) -> MenuAction {
    match menu_state.selected_item() {
        MenuItem::Play => {
            menu_state.start_name_input();
            MenuAction::None
        }
        MenuItem::Instructions => {
            menu_state.show_instructions();
            MenuAction::None
        }
        MenuItem::Quit => MenuAction::Quit,
    }
}

fn handle_name_input(menu_state: &mut MenuState, key_code: KeyCode) -> MenuAction {
    match key_code {
        KeyCode::Enter => MenuAction::StartGame(menu_state.submit_name()),
        KeyCode::Esc => {
            menu_state.cancel_name_input();
            MenuAction::None
        }
        KeyCode::Backspace => {
            menu_state.backspace_name();
            MenuAction::None
        }
        KeyCode::Char(c) => {
            if !c.is_control() && c != ',' {
                menu_state.add_char_to_name(c);
            }
            MenuAction::None
        }
        _ => MenuAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_asks_for_name_then_starts() {
        let mut menu = MenuState::new();
        assert_eq!(handle_key_press(&mut menu, KeyCode::Enter), MenuAction::None);
        assert_eq!(menu.screen, MenuScreen::NamePrompt);

        for c in "Jo,".chars() {
            handle_key_press(&mut menu, KeyCode::Char(c));
        }
        handle_key_press(&mut menu, KeyCode::Backspace);
        handle_key_press(&mut menu, KeyCode::Char('e'));

        assert_eq!(
            handle_key_press(&mut menu, KeyCode::Enter),
            MenuAction::StartGame("Je".to_string())
        );
    }

    #[test]
    fn test_q_types_into_name_but_quits_menu() {
        let mut menu = MenuState::new();
        menu.start_name_input();
        assert_eq!(handle_key_press(&mut menu, KeyCode::Char('q')), MenuAction::None);
        assert_eq!(menu.name_input, "q");

        handle_key_press(&mut menu, KeyCode::Esc);
        assert_eq!(handle_key_press(&mut menu, KeyCode::Char('q')), MenuAction::Quit);
    }

    #[test]
    fn test_instructions_close_on_any_key() {
        let mut menu = MenuState::new();
        handle_key_press(&mut menu, KeyCode::Down);
        handle_key_press(&mut menu, KeyCode::Enter);
        assert_eq!(menu.screen, MenuScreen::Instructions);

        handle_key_press(&mut menu, KeyCode::Char('x'));
        assert_eq!(menu.screen, MenuScreen::Main);
    }
}
