use super::Navigator;
use std::sync::mpsc::{Receiver, Sender};

pub type NavigationReceiver = Receiver<Vec<String>>;

/// Forwards navigation requests to the UI thread, which owns the router.
///
pub struct ChannelNavigator {
    sender: Sender<Vec<String>>,
}

impl ChannelNavigator {
    pub fn new(sender: Sender<Vec<String>>) -> Self {
        ChannelNavigator { sender }
    }
}

impl Navigator for ChannelNavigator {
    fn navigate(&self, segments: &[&str]) {
        log::debug!("Requesting navigation to {:?}", segments);
        let segments = segments.iter().map(|s| (*s).to_owned()).collect();
        if let Err(err) = self.sender.send(segments) {
            log::error!("Received error from navigation dispatch: {}", err);
        }
    }
}
