use super::network::Event as NetworkEvent;
use crate::state::{State, View};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => {
                            error!("Failed to read terminal event: {}", e);
                            break;
                        }
                    },
                    Ok(false) => (),
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(key) => Ok(handle_key(state, key)),
            Event::Tick => {
                state.advance_spinner_index();
                Ok(true)
            }
        }
    }
}

/// Apply a key press to state. Returns false if exit was requested.
///
pub fn handle_key(state: &mut State, key: KeyEvent) -> bool {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        debug!("Processing exit terminal event '{:?}'...", key);
        return false;
    }

    if state.get_pending_confirmation().is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => state.answer_confirmation(true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                state.answer_confirmation(false)
            }
            _ => (),
        }
        return true;
    }

    if state.is_search_mode() {
        handle_search_key(state, key);
        return true;
    }

    match state.current_view() {
        View::ProductEdit => handle_editor_key(state, key),
        view => handle_browse_key(state, view, key),
    }
}

fn handle_search_key(state: &mut State, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => state.exit_search_mode(),
        KeyCode::Backspace => state.get_product_list_mut().pop_filter_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            state.get_product_list_mut().push_filter_char(c)
        }
        _ => (),
    }
}

fn handle_editor_key(state: &mut State, key: KeyEvent) -> bool {
    let control = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('s') if control => {
            if editor_is_valid(state) == Some(true) {
                state.dispatch(NetworkEvent::SaveProduct);
            } else {
                debug!("Ignoring save for invalid or busy editor");
            }
        }
        KeyCode::Char('d') if control => {
            if editor_is_valid(state).is_some() {
                state.dispatch(NetworkEvent::DeleteProduct);
            }
        }
        KeyCode::Tab => state.next_form_field(),
        KeyCode::BackTab => state.previous_form_field(),
        KeyCode::PageUp | KeyCode::PageDown => state.switch_form_section(),
        KeyCode::Esc => state.back(),
        KeyCode::Backspace => state.remove_form_char(),
        KeyCode::Char(c) if !control => state.add_form_char(c),
        _ => (),
    }
    true
}

/// Validity of the mounted editor, `None` if it is absent or busy.
///
fn editor_is_valid(state: &State) -> Option<bool> {
    let editor = state.get_product_edit()?;
    let mut editor = editor.try_lock().ok()?;
    Some(editor.is_valid())
}

fn handle_browse_key(state: &mut State, view: View, key: KeyEvent) -> bool {
    match (view, key.code) {
        (_, KeyCode::Char('q')) => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        (View::ProductList, KeyCode::Esc) if !state.get_product_list().filter().is_empty() => {
            state.get_product_list_mut().clear_filter()
        }
        (_, KeyCode::Esc) => state.back(),
        (View::Welcome, KeyCode::Enter) | (_, KeyCode::Char('p')) => state.navigate(&["/products"]),
        (_, KeyCode::Char('n')) if view != View::PageNotFound => {
            state.navigate(&["/products", "0", "edit"])
        }
        (View::PageNotFound, KeyCode::Enter) => state.navigate(&["/welcome"]),
        (View::ProductList, KeyCode::Char('j')) | (View::ProductList, KeyCode::Down) => {
            state.get_product_list_mut().select_next()
        }
        (View::ProductList, KeyCode::Char('k')) | (View::ProductList, KeyCode::Up) => {
            state.get_product_list_mut().select_previous()
        }
        (View::ProductList, KeyCode::Char('/')) => state.enter_search_mode(),
        (View::ProductList, KeyCode::Enter) => {
            if let Some(id) = selected_id(state) {
                state.navigate(&["/products", id.as_str()]);
            }
        }
        (View::ProductList, KeyCode::Char('e')) => {
            if let Some(id) = selected_id(state) {
                state.navigate(&["/products", id.as_str(), "edit"]);
            }
        }
        (View::ProductDetail, KeyCode::Char('e')) => {
            if let Some(id) = detail_id(state) {
                state.navigate(&["/products", id.as_str(), "edit"]);
            }
        }
        _ => (),
    }
    true
}

fn selected_id(state: &State) -> Option<String> {
    state
        .get_product_list()
        .selected_product()
        .map(|p| p.id.to_string())
}

fn detail_id(state: &State) -> Option<String> {
    let detail = state.get_product_detail()?;
    let detail = detail.try_lock().ok()?;
    detail.product().map(|p| p.id.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogBuffer;
    use crate::products::testing::{product, Doubles, MockCatalog};
    use crate::products::{ProductDetail, ProductEdit, ProductResolved};
    use crate::services::MessageService;
    use crate::state::{EditField, ParamMap};
    use std::sync::Arc;
    use tokio::sync::{watch, Mutex};

    struct Harness {
        state: State,
        events: mpsc::Receiver<NetworkEvent>,
        params: watch::Receiver<ParamMap>,
    }

    fn harness() -> Harness {
        let (net_tx, events) = mpsc::channel();
        let (param_tx, params) = watch::channel(ParamMap::default());
        let detail = ProductDetail::new(Arc::new(MockCatalog::new()));
        let state = State::new(
            net_tx,
            param_tx,
            Arc::new(Mutex::new(detail)),
            Arc::new(MessageService::new()),
            LogBuffer::default(),
        );
        Harness {
            state,
            events,
            params,
        }
    }

    fn press(state: &mut State, code: KeyCode) -> bool {
        handle_key(state, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn ctrl(state: &mut State, c: char) -> bool {
        handle_key(state, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn mount_editor(h: &mut Harness, product: Option<crate::catalog::Product>) {
        let id = product.as_ref().map_or(0, |p| p.id).to_string();
        h.state.navigate(&["/products", id.as_str(), "edit"]);
        while h.events.try_recv().is_ok() {}

        let doubles = Doubles::new(MockCatalog::new(), true);
        let mut editor = ProductEdit::new(doubles.services());
        editor.init(ProductResolved {
            product,
            error: None,
        });
        assert!(h.state.activate_editor(&id, editor));
    }

    #[test]
    fn quit_and_interrupt_exit() {
        let mut h = harness();
        assert!(!press(&mut h.state, KeyCode::Char('q')));
        assert!(!ctrl(&mut h.state, 'c'));
    }

    #[test]
    fn welcome_enter_opens_list() {
        let mut h = harness();
        assert!(press(&mut h.state, KeyCode::Enter));
        assert_eq!(h.state.current_view(), View::ProductList);
        assert_eq!(h.events.try_recv().ok(), Some(NetworkEvent::GetProducts));
    }

    #[test]
    fn list_enter_opens_selected_detail() {
        let mut h = harness();
        press(&mut h.state, KeyCode::Enter);
        h.state
            .get_product_list_mut()
            .on_products_retrieved(Ok(vec![product(1, "Leaf Rake"), product(4, "Hammer")]));
        press(&mut h.state, KeyCode::Char('j'));
        press(&mut h.state, KeyCode::Enter);

        assert_eq!(h.state.current_view(), View::ProductDetail);
        assert_eq!(h.params.borrow().get("id"), Some("4"));
    }

    #[test]
    fn search_mode_captures_characters() {
        let mut h = harness();
        press(&mut h.state, KeyCode::Enter);
        press(&mut h.state, KeyCode::Char('/'));
        assert!(h.state.is_search_mode());
        assert!(press(&mut h.state, KeyCode::Char('q')));
        press(&mut h.state, KeyCode::Char('x'));
        press(&mut h.state, KeyCode::Backspace);
        press(&mut h.state, KeyCode::Enter);

        assert!(!h.state.is_search_mode());
        assert_eq!(h.state.get_product_list().filter(), "q");
        press(&mut h.state, KeyCode::Esc);
        assert_eq!(h.state.get_product_list().filter(), "");
        assert_eq!(h.state.current_view(), View::ProductList);
    }

    #[test]
    fn new_product_requests_resolution() {
        let mut h = harness();
        press(&mut h.state, KeyCode::Char('n'));
        assert_eq!(
            h.events.try_recv().ok(),
            Some(NetworkEvent::ResolveProduct {
                id: "0".to_string()
            })
        );
    }

    #[test]
    fn editor_types_instead_of_quitting() {
        let mut h = harness();
        mount_editor(&mut h, Some(product(2, "Saw")));
        assert!(press(&mut h.state, KeyCode::Char('q')));
        press(&mut h.state, KeyCode::Tab);
        assert_eq!(h.state.get_edit_form().field, EditField::Code);

        let editor = h.state.editor_handle().unwrap();
        let name = editor.try_lock().unwrap().product().unwrap().product_name.clone();
        assert_eq!(name, "Sawq");
    }

    #[test]
    fn save_only_dispatched_when_valid() {
        let mut h = harness();
        mount_editor(&mut h, Some(product(2, "Sa")));
        ctrl(&mut h.state, 's');
        assert!(h.events.try_recv().is_err());

        press(&mut h.state, KeyCode::Char('w'));
        ctrl(&mut h.state, 's');
        assert_eq!(h.events.try_recv().ok(), Some(NetworkEvent::SaveProduct));
    }

    #[test]
    fn delete_dispatched_from_editor() {
        let mut h = harness();
        mount_editor(&mut h, Some(product(2, "Saw")));
        ctrl(&mut h.state, 'd');
        assert_eq!(h.events.try_recv().ok(), Some(NetworkEvent::DeleteProduct));
    }

    #[test]
    fn escape_while_resolving_cancels_edit() {
        let mut h = harness();
        press(&mut h.state, KeyCode::Enter);
        press(&mut h.state, KeyCode::Char('n'));
        assert!(h.state.is_resolving());

        press(&mut h.state, KeyCode::Esc);
        assert!(!h.state.is_resolving());
        assert_eq!(h.state.current_view(), View::Welcome);
    }

    #[test]
    fn escape_leaves_editor() {
        let mut h = harness();
        press(&mut h.state, KeyCode::Enter);
        mount_editor(&mut h, Some(product(2, "Saw")));
        press(&mut h.state, KeyCode::Esc);
        assert_eq!(h.state.current_view(), View::ProductList);
        assert!(h.state.get_product_edit().is_none());
    }
}
