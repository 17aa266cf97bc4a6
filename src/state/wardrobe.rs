use std::time::Duration;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use super::catalog::Catalog;
use super::data::{ItemId, Outfit, OutfitId};
use super::outfits::OutfitStore;
use super::sample::SampleWardrobe;
use super::selection::{random_one_from_each_category, RandomSource, SeededRandom, OUTFIT_CATEGORIES};
use super::view::{ViewKind, ViewState};
use crate::config::Config;
use crate::error::Result;
use crate::host::{HostBridge, HostEvent, PendingPhoto, UploadKind, UploadOutcome};
use crate::render::description::{Frame, MainAction};
use crate::render::{main_button, render, render_item_detail};

const GENERATED_OUTFIT_NAME: &str = "New Generated Outfit";
const GENERATED_OUTFIT_DESCRIPTION: &str = "AI-generated outfit based on your style preferences";

/// The wardrobe core.
///
/// Owns the catalog, the outfit store and the view state, and implements
/// every inbound command and host event. All mutation happens here, one
/// call at a time; `frame` re-renders the whole active view afterwards.
pub struct Wardrobe<B: HostBridge> {
    catalog: Catalog,
    outfits: OutfitStore,
    view: ViewState,
    rng: Box<dyn RandomSource>,
    bridge: B,
    /// Item shown in the details modal
    detail: Option<ItemId>,
    /// Item to overlay as soon as the try-on photo arrives
    staged_overlay: Option<ItemId>,
    /// Ticket of the live simulated upload, if any
    pending_photo: Option<u64>,
    next_ticket: u64,
    last_outfit_millis: i64,
    upload_delay: Duration,
}

impl<B: HostBridge> Wardrobe<B> {
    pub fn new(
        catalog: Catalog,
        outfits: OutfitStore,
        bridge: B,
        rng: Box<dyn RandomSource>,
        upload_delay: Duration,
    ) -> Self {
        Self {
            catalog,
            outfits,
            view: ViewState::default(),
            rng,
            bridge,
            detail: None,
            staged_overlay: None,
            pending_photo: None,
            next_ticket: 0,
            last_outfit_millis: 0,
            upload_delay,
        }
    }

    /// Build the core from user configuration
    pub fn from_config(config: &Config, bridge: B) -> Result<Self> {
        if !config.load_sample_data {
            return Ok(Self::empty(config, bridge));
        }

        let sample = SampleWardrobe::load()?;
        let catalog = Catalog::from_items(sample.items)?;
        let outfits = OutfitStore::from_outfits(sample.outfits, config.max_outfits)?;

        info!(
            items = catalog.len(),
            outfits = outfits.len(),
            "🎨 Pocket Wardrobe initialized"
        );

        Ok(Self::new(
            catalog,
            outfits,
            bridge,
            Box::new(SeededRandom::from_seed_or_clock(config.selection_seed)),
            config.upload_delay(),
        ))
    }

    /// An empty wardrobe honouring every other config setting
    pub fn empty(config: &Config, bridge: B) -> Self {
        info!("🎨 Pocket Wardrobe initialized with an empty catalog");
        Self::new(
            Catalog::new(),
            OutfitStore::with_capacity_limit(config.max_outfits),
            bridge,
            Box::new(SeededRandom::from_seed_or_clock(config.selection_seed)),
            config.upload_delay(),
        )
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn outfits(&self) -> &OutfitStore {
        &self.outfits
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Ticket of the simulated upload still in flight
    pub fn pending_photo(&self) -> Option<u64> {
        self.pending_photo
    }

    /// Full description of what must be on screen now
    pub fn frame(&self) -> Frame {
        Frame {
            view: render(&self.view, &self.catalog, &self.outfits),
            detail: self
                .detail
                .as_deref()
                .and_then(|id| render_item_detail(id, &self.catalog)),
        }
    }

    // ========== Inbound commands ==========

    /// Navigate. Cancels any in-flight try-on upload.
    pub fn select_view(&mut self, view: ViewKind) {
        if let Some(ticket) = self.pending_photo.take() {
            debug!(ticket, "cancelled pending photo on navigation");
        }
        self.staged_overlay = None;
        self.detail = None;
        self.view.switch_to(view);
        debug!(?view, "switched view");
    }

    /// Open the details modal for an item
    pub fn select_item(&mut self, id: &str) {
        if self.catalog.get(id).is_some() {
            self.detail = Some(id.to_string());
        } else {
            debug!(id, "ignoring selection of unknown item");
        }
    }

    pub fn close_item_detail(&mut self) {
        self.detail = None;
    }

    pub fn delete_item(&mut self, id: &str) {
        match self.catalog.remove(id) {
            Some(item) => info!(id = %item.id, name = item.display_name(), "🗑️  removed item"),
            None => debug!(id, "delete of unknown item ignored"),
        }
        if self.detail.as_deref() == Some(id) {
            self.detail = None;
        }
        if self.staged_overlay.as_deref() == Some(id) {
            self.staged_overlay = None;
        }
    }

    /// Editing is performed by the upload backend; this is only the hook
    pub fn edit_item(&mut self, id: &str) {
        self.detail = None;
        debug!(id, "edit requested");
    }

    /// Compose a random outfit, prepend it and show the outfits view
    pub fn generate_outfit(&mut self) -> Result<OutfitId> {
        self.generate_outfit_at(Utc::now())
    }

    fn generate_outfit_at(&mut self, now: DateTime<Utc>) -> Result<OutfitId> {
        // Millisecond ids, forced strictly increasing
        let millis = now.timestamp_millis().max(self.last_outfit_millis + 1);
        let items = random_one_from_each_category(&OUTFIT_CATEGORIES, &self.catalog, self.rng.as_mut());

        let outfit = Outfit {
            id: format!("outfit-{millis}"),
            name: Some(GENERATED_OUTFIT_NAME.to_string()),
            description: Some(GENERATED_OUTFIT_DESCRIPTION.to_string()),
            items,
            created: now,
        };
        let id = outfit.id.clone();
        let count = outfit.items.len();

        self.outfits.add(outfit)?;
        self.last_outfit_millis = millis;
        info!(%id, items = count, "✨ generated outfit");

        self.select_view(ViewKind::Outfits);
        Ok(id)
    }

    /// Persistence belongs to the backend; this is only the hook
    pub fn save_outfit(&mut self, id: &str) {
        if self.outfits.get(id).is_some() {
            debug!(id, "save requested");
        } else {
            debug!(id, "save of unknown outfit ignored");
        }
    }

    /// Open the try-on view with the outfit's first available garment staged
    pub fn try_on_outfit(&mut self, id: &str) {
        let Some(outfit) = self.outfits.get(id) else {
            debug!(id, "try-on of unknown outfit ignored");
            return;
        };
        let first = outfit
            .items
            .iter()
            .find(|item_id| self.catalog.get(item_id.as_str()).is_some())
            .cloned();

        self.select_view(ViewKind::VirtualTryOn);
        self.staged_overlay = first;
    }

    /// Open the try-on view with one garment staged
    pub fn try_on_item(&mut self, id: &str) {
        if self.catalog.get(id).is_none() {
            debug!(id, "try-on of unknown item ignored");
            return;
        }
        self.select_view(ViewKind::VirtualTryOn);
        self.staged_overlay = Some(id.to_string());
    }

    /// Ask the host for an upload.
    ///
    /// A selfie requested from the try-on view also schedules the simulated
    /// "photo supplied" callback; the returned ticket must come back through
    /// `photo_timer_elapsed`.
    pub fn start_upload(&mut self, kind: UploadKind) -> Option<PendingPhoto> {
        self.bridge.request_upload(kind);

        if kind != UploadKind::Selfie || self.view.kind() != ViewKind::VirtualTryOn {
            return None;
        }

        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.pending_photo = Some(ticket);
        debug!(ticket, delay_ms = self.upload_delay.as_millis() as u64, "scheduled photo");

        Some(PendingPhoto {
            ticket,
            delay: self.upload_delay,
        })
    }

    /// Overlay a garment on the preview; unknown items are ignored
    pub fn choose_preview_overlay(&mut self, item_id: &str) {
        match self.catalog.get(item_id) {
            Some(item) => self.view.overlay_requested(item.clone()),
            None => debug!(item_id, "overlay of unknown item ignored"),
        }
    }

    /// Run the context action of the host's main button
    pub fn trigger_main_action(&mut self) -> Result<Option<PendingPhoto>> {
        let action = main_button(self.view.kind()).action;
        match action {
            MainAction::UploadClothing => Ok(self.start_upload(UploadKind::Clothing)),
            MainAction::GenerateOutfit => self.generate_outfit().map(|_| None),
            MainAction::StartTryOn => Ok(self.start_upload(UploadKind::Selfie)),
        }
    }

    // ========== Host events ==========

    /// The simulated upload latency elapsed.
    /// Stale tickets and tickets outliving the try-on view are no-ops.
    pub fn photo_timer_elapsed(&mut self, ticket: u64) {
        if self.pending_photo != Some(ticket) {
            debug!(ticket, "stale photo timer ignored");
            return;
        }
        self.pending_photo = None;
        self.apply_photo();
    }

    pub fn handle_host_event(&mut self, event: HostEvent) -> Result<()> {
        match event {
            HostEvent::ViewportChanged => {
                debug!(view = ?self.view.kind(), "viewport changed, re-rendering");
            }
            HostEvent::UploadCompleted(outcome) => match outcome {
                UploadOutcome::Clothing(item) => {
                    let id = item.id.clone();
                    self.catalog.add(item)?;
                    info!(%id, "📸 added clothing item");
                }
                UploadOutcome::Selfie => {
                    self.pending_photo = None;
                    self.apply_photo();
                }
                UploadOutcome::Failed { kind, reason } => {
                    warn!(?kind, %reason, "upload failed");
                }
            },
        }
        Ok(())
    }

    fn apply_photo(&mut self) {
        let seed = self.rng.next_u64();
        self.view.photo_supplied(seed);

        if let Some(id) = self.staged_overlay.take() {
            if let Some(item) = self.catalog.get(&id) {
                self.view.overlay_requested(item.clone());
            }
        }
    }
}
