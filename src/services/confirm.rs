use super::Confirm;
use std::sync::mpsc::{self, Receiver, Sender};
use tokio::runtime::{Handle, RuntimeFlavor};

pub type ConfirmReceiver = Receiver<ConfirmPrompt>;

/// Question waiting for the user's answer in the confirmation modal.
///
#[derive(Debug)]
pub struct ConfirmPrompt {
    message: String,
    respond_to: Sender<bool>,
}

impl ConfirmPrompt {
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Deliver the answer to the waiting caller.
    ///
    pub fn answer(self, confirmed: bool) {
        // The caller may already be gone if the app is shutting down.
        let _ = self.respond_to.send(confirmed);
    }
}

/// Asks the UI thread to show a modal and blocks until it is answered.
///
/// A prompt that is dropped unanswered counts as "no".
///
pub struct ModalConfirm {
    prompts: Sender<ConfirmPrompt>,
}

impl ModalConfirm {
    pub fn new(prompts: Sender<ConfirmPrompt>) -> Self {
        ModalConfirm { prompts }
    }
}

impl Confirm for ModalConfirm {
    fn confirm(&self, message: &str) -> bool {
        let (tx, rx) = mpsc::channel();
        let prompt = ConfirmPrompt {
            message: message.to_owned(),
            respond_to: tx,
        };
        if self.prompts.send(prompt).is_err() {
            log::warn!("Confirmation modal unavailable, treating as declined");
            return false;
        }
        let wait = move || rx.recv().unwrap_or(false);
        match Handle::try_current() {
            Ok(handle) if handle.runtime_flavor() == RuntimeFlavor::MultiThread => {
                tokio::task::block_in_place(wait)
            }
            _ => wait(),
        }
    }
}
