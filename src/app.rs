use crate::catalog::Catalog;
use crate::config::Config;
use crate::error::AppError;
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::Handler as TerminalEventHandler;
use crate::logger::{self, LogBuffer};
use crate::products::{self, ProductDetail};
use crate::services::{
    ChannelNavigator, ConfirmReceiver, MessageService, ModalConfirm, NavigationReceiver, Services,
};
use crate::state::{ParamMap, State};
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::{mpsc, Arc};
use tokio::sync::{watch, Mutex};

pub type NetworkEventSender = mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
    services: Services,
    detail: Arc<Mutex<ProductDetail>>,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let log_buffer = LogBuffer::default();
        logger::init(log_buffer.clone(), LevelFilter::Debug)?;

        info!("Starting application...");
        let (net_sender, net_receiver) = mpsc::channel::<NetworkEvent>();
        let (nav_sender, nav_receiver) = mpsc::channel();
        let (confirm_sender, confirm_receiver) = mpsc::channel();
        let (param_sender, param_receiver) = watch::channel(ParamMap::default());

        let catalog = Arc::new(Catalog::new(
            &config.api_base_url,
            config.access_token.as_deref(),
        ));
        let messages = Arc::new(MessageService::new().with_capacity(config.message_limit));
        let services = Services {
            catalog: catalog.clone(),
            messages: messages.clone(),
            navigator: Arc::new(ChannelNavigator::new(nav_sender)),
            confirm: Arc::new(ModalConfirm::new(confirm_sender)),
        };
        let detail = Arc::new(Mutex::new(ProductDetail::new(catalog)));

        let theme = Theme::from_name(&config.theme_name).unwrap_or_else(|| {
            warn!(
                "Unknown theme '{}', available: {}",
                config.theme_name,
                Theme::available_themes().join(", ")
            );
            Theme::default()
        });
        let mut state = State::new(
            net_sender,
            param_sender,
            detail.clone(),
            messages,
            log_buffer,
        );
        state
            .set_theme(theme)
            .set_message_limit(config.message_limit);

        let app = App {
            state: Arc::new(Mutex::new(state)),
            services,
            detail,
        };
        app.start_network(net_receiver, param_receiver)?;
        app.start_ui(nav_receiver, confirm_receiver).await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations. The detail
    /// view's parameter subscription runs on the same runtime.
    ///
    fn start_network(
        &self,
        net_receiver: NetworkEventReceiver,
        param_receiver: watch::Receiver<ParamMap>,
    ) -> Result<(), AppError> {
        debug!("Creating new thread for asynchronous networking...");
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .map_err(|e| AppError::RuntimeCreation(e.to_string()))?;
        let state = Arc::clone(&self.state);
        let services = self.services.clone();
        let detail = Arc::clone(&self.detail);
        std::thread::spawn(move || {
            runtime.block_on(async move {
                tokio::spawn(products::subscribe(detail, param_receiver));
                let mut network_event_handler = NetworkEventHandler::new(state, services);
                while let Ok(network_event) = net_receiver.recv() {
                    if let Err(e) = network_event_handler.handle(network_event).await {
                        error!("Failed to handle network event: {}", e);
                    }
                }
            })
        });
        Ok(())
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. Return the result following an exit
    /// request or unrecoverable error.
    ///
    async fn start_ui(
        &self,
        nav_receiver: NavigationReceiver,
        confirm_receiver: ConfirmReceiver,
    ) -> Result<()> {
        debug!("Starting user interface on main thread...");
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        enable_raw_mode()?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;

        let result = self
            .run_ui(&mut terminal, nav_receiver, confirm_receiver)
            .await;

        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn run_ui(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        nav_receiver: NavigationReceiver,
        confirm_receiver: ConfirmReceiver,
    ) -> Result<()> {
        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let mut state = self.state.lock().await;
            while let Ok(route) = nav_receiver.try_recv() {
                state.navigate(&route);
            }
            while let Ok(prompt) = confirm_receiver.try_recv() {
                state.set_pending_confirmation(prompt);
            }
            terminal.draw(|frame| crate::ui::render(frame, &mut state))?;
            if !terminal_event_handler.handle_next(&mut state)? {
                debug!("Received application exit request.");
                break;
            }
        }
        Ok(())
    }
}
