use crate::application::{App, AppMode, Screen};
use crossterm::event::KeyCode;

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode) {
        match app.screen {
            Screen::Points { .. } => Self::handle_points(app, key),
            Screen::Home => match app.mode {
                AppMode::Browsing => Self::handle_browsing(app, key),
                AppMode::RegionList | AppMode::CityList => Self::handle_list(app, key),
            },
        }
    }

    fn handle_browsing(app: &mut App, key: KeyCode) {
        app.status_message = None;

        match key {
            KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => {
                app.focus_next();
            }
            KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => {
                app.focus_previous();
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                app.activate_focused();
            }
            KeyCode::Char('r') => {
                app.retry();
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_list(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Up | KeyCode::Char('k') => {
                app.move_list_up(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.move_list_down(1);
            }
            KeyCode::PageUp => {
                app.move_list_up(5);
            }
            KeyCode::PageDown => {
                app.move_list_down(5);
            }
            KeyCode::Home => {
                app.list_index = 0;
            }
            KeyCode::End => {
                app.list_index = app.open_list_len().saturating_sub(1);
            }
            KeyCode::Enter => {
                app.confirm_list_selection();
            }
            KeyCode::Esc => {
                app.cancel_list();
            }
            _ => {}
        }
    }

    fn handle_points(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Backspace => {
                app.leave_points();
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{AppMode, FetchEvent, Focus, Screen};
    use crate::domain::{Locality, Region};

    fn region(code: &str) -> Region {
        Region {
            code: code.to_string(),
            name: format!("{} State", code),
        }
    }

    fn loaded_app() -> App {
        let mut app = App::new();
        app.take_pending();
        app.apply_fetch_event(FetchEvent::Regions(Ok(vec![region("AA"), region("BB")])));
        app
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut app = loaded_app();
        assert_eq!(app.focus, Focus::Uf);

        InputHandler::handle_key_event(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::City);

        InputHandler::handle_key_event(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Submit);

        InputHandler::handle_key_event(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::City);
    }

    #[test]
    fn test_enter_opens_state_list() {
        let mut app = loaded_app();

        InputHandler::handle_key_event(&mut app, KeyCode::Enter);

        assert_eq!(app.mode, AppMode::RegionList);
        assert_eq!(app.list_index, 0);
    }

    #[test]
    fn test_list_navigation_and_cancel() {
        let mut app = loaded_app();
        InputHandler::handle_key_event(&mut app, KeyCode::Enter);

        InputHandler::handle_key_event(&mut app, KeyCode::Down);
        InputHandler::handle_key_event(&mut app, KeyCode::Down);
        assert_eq!(app.list_index, 2);

        InputHandler::handle_key_event(&mut app, KeyCode::Home);
        assert_eq!(app.list_index, 0);

        InputHandler::handle_key_event(&mut app, KeyCode::End);
        assert_eq!(app.list_index, 2);

        InputHandler::handle_key_event(&mut app, KeyCode::Esc);
        assert_eq!(app.mode, AppMode::Browsing);
        assert!(!app.selection.has_uf());
    }

    #[test]
    fn test_selecting_state_queues_city_fetch() {
        let mut app = loaded_app();
        InputHandler::handle_key_event(&mut app, KeyCode::Enter);
        InputHandler::handle_key_event(&mut app, KeyCode::Down);
        InputHandler::handle_key_event(&mut app, KeyCode::Enter);

        assert_eq!(app.selection.uf, "AA");
        assert!(app.cities_loading);
        assert_eq!(app.take_pending().len(), 1);
    }

    #[test]
    fn test_submit_via_keyboard() {
        let mut app = loaded_app();
        app.select_uf("AA");
        app.take_pending();
        app.apply_fetch_event(FetchEvent::Localities {
            epoch: 1,
            result: Ok(vec![Locality {
                id: 1,
                name: "Altown".to_string(),
            }]),
        });
        app.select_city("Altown");
        app.focus = Focus::Submit;

        InputHandler::handle_key_event(&mut app, KeyCode::Enter);

        assert!(matches!(app.screen, Screen::Points { .. }));
    }

    #[test]
    fn test_escape_on_points_returns_to_fresh_picker() {
        let mut app = loaded_app();
        app.select_uf("AA");
        app.take_pending();
        app.apply_fetch_event(FetchEvent::Localities {
            epoch: 1,
            result: Ok(vec![Locality {
                id: 1,
                name: "Altown".to_string(),
            }]),
        });
        app.select_city("Altown");
        app.submit();
        assert!(matches!(app.screen, Screen::Points { .. }));

        InputHandler::handle_key_event(&mut app, KeyCode::Esc);

        assert_eq!(app.screen, Screen::Home);
        assert!(!app.selection.has_uf());
        assert!(app.regions_loading);
    }

    #[test]
    fn test_retry_key_reissues_failed_fetch() {
        let mut app = App::new();
        app.take_pending();
        app.apply_fetch_event(FetchEvent::Regions(Err(
            crate::domain::LookupError::Status(500),
        )));

        InputHandler::handle_key_event(&mut app, KeyCode::Char('r'));

        assert!(app.regions_loading);
        assert_eq!(app.take_pending().len(), 1);
    }

    #[test]
    fn test_browsing_keys_clear_status_message() {
        let mut app = loaded_app();
        app.status_message = Some("Select a state first".to_string());

        InputHandler::handle_key_event(&mut app, KeyCode::Tab);

        assert!(app.status_message.is_none());
    }
}
