use super::{EditField, EditForm, ParamMap, Route, StateError, View};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::logger::LogBuffer;
use crate::products::{ProductDetail, ProductEdit, ProductList, Section, ID_PARAM};
use crate::services::{ConfirmPrompt, Message, MessageService};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use std::sync::Arc;
use tokio::sync::{watch, Mutex};

pub type ParamSender = watch::Sender<ParamMap>;

const DEFAULT_MESSAGE_LIMIT: usize = 5;

/// Houses data representative of application state.
///
/// Components that run remote calls sit behind their own lock so the UI can
/// keep drawing while a call is in flight.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    param_sender: Option<ParamSender>,
    spinner_index: usize,
    view_stack: Vec<View>,
    product_list: ProductList,
    product_detail: Option<Arc<Mutex<ProductDetail>>>,
    product_edit: Option<Arc<Mutex<ProductEdit>>>,
    edit_form: EditForm,
    pending_edit: Option<String>,
    search_mode: bool,
    pending_confirmation: Option<ConfirmPrompt>,
    messages: Option<Arc<MessageService>>,
    message_limit: usize,
    log_buffer: LogBuffer,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            param_sender: None,
            spinner_index: 0,
            view_stack: vec![View::Welcome],
            product_list: ProductList::new(),
            product_detail: None,
            product_edit: None,
            edit_form: EditForm::for_product(None),
            pending_edit: None,
            search_mode: false,
            pending_confirmation: None,
            messages: None,
            message_limit: DEFAULT_MESSAGE_LIMIT,
            log_buffer: LogBuffer::default(),
            theme: Theme::default(),
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        param_sender: ParamSender,
        product_detail: Arc<Mutex<ProductDetail>>,
        messages: Arc<MessageService>,
        log_buffer: LogBuffer,
    ) -> Self {
        State {
            net_sender: Some(net_sender),
            param_sender: Some(param_sender),
            product_detail: Some(product_detail),
            messages: Some(messages),
            log_buffer,
            ..State::default()
        }
    }

    pub fn set_theme(&mut self, theme: Theme) -> &mut Self {
        self.theme = theme;
        self
    }

    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    pub fn set_message_limit(&mut self, limit: usize) -> &mut Self {
        self.message_limit = limit;
        self
    }

    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Advances the spinner index, wrapping around the frame count.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self
    }

    /// Returns the currently visible view.
    ///
    pub fn current_view(&self) -> View {
        self.view_stack.last().copied().unwrap_or(View::Welcome)
    }

    /// Apply a navigation request. The edit route only activates once its
    /// product has been resolved, see [`State::activate_editor`]. Any other
    /// route cancels a pending resolution.
    ///
    pub fn navigate<S: AsRef<str>>(&mut self, segments: &[S]) {
        let route = Route::parse(segments);
        info!("Navigating to {:?}", route);
        if !matches!(route, Route::ProductEdit { .. }) {
            self.cancel_pending_edit();
        }
        match route {
            Route::ProductList => {
                self.product_list.set_loading();
                self.dispatch(NetworkEvent::GetProducts);
                self.push_view(View::ProductList);
            }
            Route::ProductDetail { id } => {
                self.publish_params(ParamMap::from([(ID_PARAM, id.as_str())]));
                self.push_view(View::ProductDetail);
            }
            Route::ProductEdit { id } => {
                self.pending_edit = Some(id.clone());
                self.dispatch(NetworkEvent::ResolveProduct { id });
            }
            other => self.push_view(other.view()),
        }
    }

    /// Return to the previous view, keeping at least one on the stack.
    ///
    pub fn back(&mut self) {
        self.cancel_pending_edit();
        if self.view_stack.len() > 1 {
            self.view_stack.pop();
        }
        self.teardown_inactive();
    }

    /// Mount the editor resolved for `id` and show it. The editor is dropped
    /// unless `id` is the edit route still awaiting resolution. Returns
    /// whether the editor was mounted.
    ///
    pub fn activate_editor(&mut self, id: &str, editor: ProductEdit) -> bool {
        if self.pending_edit.as_deref() != Some(id) {
            debug!(
                "Dropping editor for product '{}', edit route no longer pending",
                id
            );
            return false;
        }
        self.pending_edit = None;
        self.edit_form = EditForm::for_product(editor.product());
        self.product_edit = Some(Arc::new(Mutex::new(editor)));
        self.push_view(View::ProductEdit);
        true
    }

    pub fn is_resolving(&self) -> bool {
        self.pending_edit.is_some()
    }

    pub fn get_product_list(&self) -> &ProductList {
        &self.product_list
    }

    pub fn get_product_list_mut(&mut self) -> &mut ProductList {
        &mut self.product_list
    }

    pub fn get_product_detail(&self) -> Option<&Arc<Mutex<ProductDetail>>> {
        self.product_detail.as_ref()
    }

    pub fn get_product_edit(&self) -> Option<&Arc<Mutex<ProductEdit>>> {
        self.product_edit.as_ref()
    }

    /// Shared handle to the mounted editor, for work done off the UI thread.
    ///
    pub fn editor_handle(&self) -> Result<Arc<Mutex<ProductEdit>>, StateError> {
        self.product_edit.clone().ok_or(StateError::EditorNotActive)
    }

    pub fn get_edit_form(&self) -> &EditForm {
        &self.edit_form
    }

    pub fn next_form_field(&mut self) {
        self.edit_form.field = self.edit_form.field.next();
    }

    pub fn previous_form_field(&mut self) {
        self.edit_form.field = self.edit_form.field.previous();
    }

    /// Move focus to the first field of the other editor tab.
    ///
    pub fn switch_form_section(&mut self) {
        let current = self.edit_form.section();
        let target = Section::ALL
            .iter()
            .copied()
            .find(|s| *s != current)
            .unwrap_or(current);
        if let Some(field) = EditField::fields_in(target).next() {
            self.edit_form.field = field;
        }
    }

    /// Type a character into the focused field, unless a request holds the editor.
    ///
    pub fn add_form_char(&mut self, c: char) {
        if let Some(editor) = &self.product_edit {
            if let Ok(mut editor) = editor.try_lock() {
                if let Some(product) = editor.product_mut() {
                    self.edit_form.push_char(product, c);
                }
            }
        }
    }

    pub fn remove_form_char(&mut self) {
        if let Some(editor) = &self.product_edit {
            if let Ok(mut editor) = editor.try_lock() {
                if let Some(product) = editor.product_mut() {
                    self.edit_form.pop_char(product);
                }
            }
        }
    }

    pub fn is_search_mode(&self) -> bool {
        self.search_mode
    }

    pub fn enter_search_mode(&mut self) {
        self.search_mode = true;
    }

    pub fn exit_search_mode(&mut self) {
        self.search_mode = false;
    }

    pub fn set_pending_confirmation(&mut self, prompt: ConfirmPrompt) {
        if let Some(previous) = self.pending_confirmation.replace(prompt) {
            warn!("Replacing unanswered confirmation '{}'", previous.message());
            previous.answer(false);
        }
    }

    pub fn get_pending_confirmation(&self) -> Option<&ConfirmPrompt> {
        self.pending_confirmation.as_ref()
    }

    /// Answer the open confirmation, if any.
    ///
    pub fn answer_confirmation(&mut self, confirmed: bool) {
        if let Some(prompt) = self.pending_confirmation.take() {
            debug!("Confirmation '{}' answered {}", prompt.message(), confirmed);
            prompt.answer(confirmed);
        }
    }

    /// Returns the most recent user messages, newest first.
    ///
    pub fn get_messages(&self) -> Vec<Message> {
        self.messages
            .as_ref()
            .map(|m| m.recent(self.message_limit))
            .unwrap_or_default()
    }

    pub fn get_log_entries(&self) -> Vec<String> {
        self.log_buffer
            .lock()
            .map(|entries| entries.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Dispatches an asynchronous network event.
    ///
    pub fn dispatch(&self, event: NetworkEvent) {
        match &self.net_sender {
            Some(net_sender) => {
                if let Err(err) = net_sender.send(event) {
                    error!("{}", StateError::DispatchFailed(err.to_string()));
                }
            }
            None => warn!("No network handler to receive {:?}", event),
        }
    }

    fn cancel_pending_edit(&mut self) {
        if let Some(id) = self.pending_edit.take() {
            debug!("Cancelled pending edit of product '{}'", id);
        }
    }

    fn publish_params(&self, params: ParamMap) {
        if let Some(param_sender) = &self.param_sender {
            if param_sender.send(params).is_err() {
                error!("{}", StateError::ParamsClosed);
            }
        }
    }

    fn push_view(&mut self, view: View) {
        match self.view_stack.iter().position(|v| *v == view) {
            Some(index) => self.view_stack.truncate(index + 1),
            None => self.view_stack.push(view),
        }
        self.teardown_inactive();
    }

    /// Drop the editor once its view has left the stack.
    ///
    fn teardown_inactive(&mut self) {
        if !self.view_stack.contains(&View::ProductEdit) && self.product_edit.take().is_some() {
            debug!("Product editor torn down");
            self.edit_form = EditForm::for_product(None);
        }
    }
}
