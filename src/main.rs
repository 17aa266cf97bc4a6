use iced::task::Handle;
use iced::{window, Element, Size, Subscription, Task, Theme};
use tracing::{debug, warn};

mod ui;

use pocket_wardrobe::config::Config;
use pocket_wardrobe::host::{self, DesktopBridge, HostEvent, PendingPhoto, UploadKind};
use pocket_wardrobe::state::data::{ItemId, OutfitId};
use pocket_wardrobe::state::view::ViewKind;
use pocket_wardrobe::state::wardrobe::Wardrobe;

/// Main application state
struct WardrobeApp {
    /// The wardrobe core (catalog, outfits, view state)
    core: Wardrobe<DesktopBridge>,
    /// Timer standing in for the selfie upload, while one is in flight
    photo_timer: Option<Handle>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
pub enum Message {
    /// User picked a navigation tab
    SelectView(ViewKind),
    /// User clicked a garment tile
    SelectItem(ItemId),
    CloseDetail,
    DeleteItem(ItemId),
    EditItem(ItemId),
    SaveOutfit(OutfitId),
    TryOnOutfit(OutfitId),
    TryOnItem(ItemId),
    StartUpload(UploadKind),
    /// User picked a garment to overlay on the preview
    ChooseOverlay(ItemId),
    /// The context-aware main button was pressed
    MainAction,
    /// Simulated upload latency elapsed for this ticket
    PhotoTimerElapsed(u64),
    /// The window was resized
    ViewportChanged(Size),
}

impl WardrobeApp {
    /// Create a new instance of the application
    fn new(config: Config) -> (Self, Task<Message>) {
        let core = match Wardrobe::from_config(&config, DesktopBridge) {
            Ok(core) => core,
            Err(e) => {
                tracing::error!(error = %e, "failed to load wardrobe, starting empty");
                Wardrobe::empty(&config, DesktopBridge)
            }
        };

        (
            WardrobeApp {
                core,
                photo_timer: None,
            },
            Task::none(),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        let task = match message {
            Message::SelectView(view) => {
                self.core.select_view(view);
                Task::none()
            }
            Message::SelectItem(id) => {
                self.core.select_item(&id);
                Task::none()
            }
            Message::CloseDetail => {
                self.core.close_item_detail();
                Task::none()
            }
            Message::DeleteItem(id) => {
                self.core.delete_item(&id);
                Task::none()
            }
            Message::EditItem(id) => {
                self.core.edit_item(&id);
                Task::none()
            }
            Message::SaveOutfit(id) => {
                self.core.save_outfit(&id);
                Task::none()
            }
            Message::TryOnOutfit(id) => {
                self.core.try_on_outfit(&id);
                Task::none()
            }
            Message::TryOnItem(id) => {
                self.core.try_on_item(&id);
                Task::none()
            }
            Message::StartUpload(kind) => {
                let pending = self.core.start_upload(kind);
                self.schedule_photo(pending)
            }
            Message::ChooseOverlay(id) => {
                self.core.choose_preview_overlay(&id);
                Task::none()
            }
            Message::MainAction => match self.core.trigger_main_action() {
                Ok(pending) => self.schedule_photo(pending),
                Err(e) => {
                    warn!(error = %e, "main action failed");
                    Task::none()
                }
            },
            Message::PhotoTimerElapsed(ticket) => {
                self.photo_timer = None;
                self.core.photo_timer_elapsed(ticket);
                Task::none()
            }
            Message::ViewportChanged(size) => {
                debug!(width = size.width, height = size.height, "viewport changed");
                if let Err(e) = self.core.handle_host_event(HostEvent::ViewportChanged) {
                    warn!(error = %e, "viewport event failed");
                }
                Task::none()
            }
        };

        // Drop the timer once the core stopped waiting for it (e.g., navigation)
        if self.core.pending_photo().is_none() {
            if let Some(handle) = self.photo_timer.take() {
                handle.abort();
            }
        }

        task
    }

    /// Start the simulated upload timer, replacing any previous one
    fn schedule_photo(&mut self, pending: Option<PendingPhoto>) -> Task<Message> {
        let Some(pending) = pending else {
            return Task::none();
        };

        if let Some(previous) = self.photo_timer.take() {
            previous.abort();
        }

        let (task, handle) =
            Task::perform(host::wait_for_photo(pending), Message::PhotoTimerElapsed).abortable();
        self.photo_timer = Some(handle);
        task
    }

    /// Build the user interface
    fn view(&self) -> Element<Message> {
        ui::frame(self.core.frame())
    }

    fn subscription(&self) -> Subscription<Message> {
        window::resize_events().map(|(_id, size)| Message::ViewportChanged(size))
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    tracing_subscriber::fmt()
        .with_max_level(config.tracing_level())
        .init();

    if let Err(e) = &loaded {
        warn!(error = %e, "⚠️  using default config");
    }
    debug!(
        upload_delay = ?config.upload_delay(),
        max_outfits = ?config.max_outfits,
        "config loaded"
    );

    iced::application("Pocket Wardrobe", WardrobeApp::update, WardrobeApp::view)
        .subscription(WardrobeApp::subscription)
        .theme(WardrobeApp::theme)
        .centered()
        .run_with(move || WardrobeApp::new(config))
}
