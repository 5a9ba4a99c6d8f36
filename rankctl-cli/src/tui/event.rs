//! Event handling for the dashboard

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, MainTab, Mode};

/// Poll for events with timeout
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Result of handling a key event
pub enum HandleResult {
    /// Continue running
    Continue,
    /// Quit the dashboard
    Quit,
    /// Run the palette action with this id
    Execute(&'static str),
}

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) -> HandleResult {
    // Global quit shortcuts (Ctrl+C, Ctrl+Q)
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return HandleResult::Quit,
            _ => {}
        }
    }

    // An open plan notice swallows the next key
    if app.plan_notice.take().is_some() {
        return HandleResult::Continue;
    }

    match app.mode {
        Mode::Normal => handle_normal_mode(app, key),
        Mode::Search => handle_search_mode(app, key),
        Mode::ActionPalette => handle_action_palette(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        // Quit
        KeyCode::Char('q') => HandleResult::Quit,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => {
            app.cursor_down();
            HandleResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor_up();
            HandleResult::Continue
        }
        KeyCode::Home | KeyCode::Char('g') => {
            app.cursor_top();
            HandleResult::Continue
        }
        KeyCode::End | KeyCode::Char('G') => {
            app.cursor_bottom();
            HandleResult::Continue
        }

        // Selection
        KeyCode::Char(' ') => {
            app.toggle_at_cursor();
            HandleResult::Continue
        }
        KeyCode::Char('A') => {
            app.select_all_visible();
            HandleResult::Continue
        }

        // Search and facets
        KeyCode::Char('/') => {
            app.enter_search();
            HandleResult::Continue
        }
        KeyCode::Char('s') => {
            app.cycle_status_facet();
            HandleResult::Continue
        }
        KeyCode::Char('c') => {
            app.cycle_category_facet();
            HandleResult::Continue
        }
        KeyCode::Char('r') => {
            app.reset_current_view();
            HandleResult::Continue
        }

        // Platform kind paging on the submissions tab
        KeyCode::Char('h') | KeyCode::Left if app.tab == MainTab::Submissions => {
            app.submission_kind_prev();
            HandleResult::Continue
        }
        KeyCode::Char('l') | KeyCode::Right if app.tab == MainTab::Submissions => {
            app.submission_kind_next();
            HandleResult::Continue
        }

        // Action palette
        KeyCode::Char('a') | KeyCode::Enter => {
            app.open_palette();
            HandleResult::Continue
        }

        // Detail pane toggle
        KeyCode::Char('p') => {
            app.show_detail = !app.show_detail;
            HandleResult::Continue
        }

        // Tab switching
        KeyCode::Tab => {
            app.next_tab();
            HandleResult::Continue
        }
        KeyCode::BackTab => {
            app.prev_tab();
            HandleResult::Continue
        }
        KeyCode::Char('1') => {
            app.switch_tab(MainTab::Overview);
            HandleResult::Continue
        }
        KeyCode::Char('2') => {
            app.switch_tab(MainTab::Projects);
            HandleResult::Continue
        }
        KeyCode::Char('3') => {
            app.switch_tab(MainTab::Submissions);
            HandleResult::Continue
        }
        KeyCode::Char('4') => {
            app.switch_tab(MainTab::Tools);
            HandleResult::Continue
        }
        KeyCode::Char('5') => {
            app.switch_tab(MainTab::Reports);
            HandleResult::Continue
        }
        KeyCode::Char('6') => {
            app.switch_tab(MainTab::Admin);
            HandleResult::Continue
        }

        _ => HandleResult::Continue,
    }
}

/// Handle keys in live-search mode
fn handle_search_mode(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc => {
            app.cancel_search();
            HandleResult::Continue
        }
        KeyCode::Enter => {
            app.accept_search();
            HandleResult::Continue
        }
        KeyCode::Backspace => {
            app.search_pop();
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            app.search_push(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}

/// Handle keys in action palette mode
fn handle_action_palette(app: &mut App, key: KeyEvent) -> HandleResult {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => {
            app.close_palette();
            HandleResult::Continue
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.palette_next();
            HandleResult::Continue
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.palette_prev();
            HandleResult::Continue
        }
        KeyCode::Enter => {
            if let Some(action) = app.palette.get(app.palette_ix) {
                let id = action.id;
                app.close_palette();
                HandleResult::Execute(id)
            } else {
                HandleResult::Continue
            }
        }
        // Quick action shortcuts (1-9)
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c.to_digit(10).unwrap() as usize - 1;
            if let Some(action) = app.palette.get(idx) {
                let id = action.id;
                app.close_palette();
                HandleResult::Execute(id)
            } else {
                HandleResult::Continue
            }
        }
        _ => HandleResult::Continue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rankctl_core::RankConfig;

    fn test_app() -> App {
        App::new(&RankConfig::default()).0
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        assert!(matches!(
            handle_key(&mut app, press(KeyCode::Char('q'))),
            HandleResult::Quit
        ));

        // Ctrl+C quits from any mode
        app.switch_tab(MainTab::Projects);
        app.enter_search();
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(matches!(handle_key(&mut app, ctrl_c), HandleResult::Quit));
    }

    #[test]
    fn test_search_keys_narrow_the_list() {
        let mut app = test_app();
        app.switch_tab(MainTab::Projects);

        handle_key(&mut app, press(KeyCode::Char('/')));
        assert_eq!(app.mode, Mode::Search);
        for c in "store".chars() {
            handle_key(&mut app, press(KeyCode::Char(c)));
        }
        assert_eq!(app.visible_len(), 1);

        handle_key(&mut app, press(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Normal);
        assert_eq!(app.visible_len(), 3);
    }

    #[test]
    fn test_space_toggles_the_row_under_the_cursor() {
        let mut app = test_app();
        app.switch_tab(MainTab::Projects);

        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert_eq!(app.projects.roster.selected_count(), 1);
        handle_key(&mut app, press(KeyCode::Char(' ')));
        assert_eq!(app.projects.roster.selected_count(), 0);
    }

    #[test]
    fn test_palette_enter_executes_the_highlighted_action() {
        let mut app = test_app();
        app.switch_tab(MainTab::Projects);

        handle_key(&mut app, press(KeyCode::Char('a')));
        assert_eq!(app.mode, Mode::ActionPalette);

        match handle_key(&mut app, press(KeyCode::Enter)) {
            HandleResult::Execute(id) => assert_eq!(id, "pause"),
            _ => panic!("expected an action execution"),
        }
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn test_plan_notice_swallows_one_key() {
        let mut app = test_app();
        app.plan_notice = Some("upgrade".to_string());

        let result = handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(matches!(result, HandleResult::Continue));
        assert!(app.plan_notice.is_none());

        // The next key acts normally again
        assert!(matches!(
            handle_key(&mut app, press(KeyCode::Char('q'))),
            HandleResult::Quit
        ));
    }

    #[test]
    fn test_kind_paging_only_on_the_submissions_tab() {
        let mut app = test_app();
        app.switch_tab(MainTab::Submissions);
        let before = app.submission.kind;
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_ne!(app.submission.kind, before);

        app.switch_tab(MainTab::Projects);
        let kind = app.submission.kind;
        handle_key(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.submission.kind, kind);
    }
}
