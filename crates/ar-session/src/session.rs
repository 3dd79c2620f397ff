//! Session controller: one tap places the content, every tracking update
//! re-evaluates the plane-follow policy.
//!
//! Two callback sources drive a session. Taps arrive synchronously on the
//! interaction thread via [`Session::handle_tap`]. Anchor updates arrive from
//! the tracker via [`Session::submit_anchor_update`] and are funnelled through
//! one named worker thread, so adjustments for different anchors never race
//! each other. Both paths take the same lock, so a tap cannot interleave with
//! an in-flight adjustment either.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread;

use glam::Vec3;

use ar_core::{
    adjust_onto_plane, Adjustment, ContentConfig, HitTest, PlacedObject, Placement, PlaneAnchor,
    PARTICLE_PITCH_RADIANS,
};

use crate::host::{HostError, SceneHost};

struct Shared<H: SceneHost> {
    host: H,
    config: ContentConfig,
    placement: Placement,
}

impl<H: SceneHost> Shared<H> {
    /// Placement trigger. Instantiates the composed content at the hit point
    /// on first invocation; afterwards a no-op.
    fn place_at(&mut self, hit: HitTest) -> Result<bool, HostError> {
        if self.placement.is_placed() {
            log::debug!("[session] tap ignored; content already placed");
            return Ok(false);
        }

        let position = hit.world_position();
        let character = self
            .host
            .attach_model(&self.config.character_model, position, self.config.scale)?;
        self.host.attach_child_model(
            character,
            &self.config.caption_model,
            self.config.caption_offset,
        )?;
        self.host.play_animation(character, &self.config.animation)?;
        self.host.attach_particles(
            &self.config.particle_effect,
            position,
            PARTICLE_PITCH_RADIANS,
        )?;
        self.host
            .play_audio_looping(character, &self.config.audio_clip)?;

        // The transition commits only once every asset has loaded; a failure
        // above leaves the machine Unplaced so a later tap can retry.
        self.placement.try_place(PlacedObject {
            node: character,
            position,
        });
        log::info!("[session] placed content at {position}");
        Ok(true)
    }

    /// Re-evaluate the plane-follow policy for one anchor snapshot.
    fn adjust(&mut self, anchor: &PlaneAnchor) {
        let Some(object) = self.placement.placed_mut() else {
            return;
        };
        match adjust_onto_plane(object.position, anchor) {
            Adjustment::Correct(correction) => {
                log::debug!(
                    "[session] easing object to y={} over {}s",
                    correction.target_y,
                    correction.duration_secs
                );
                object.position.y = correction.target_y;
                self.host.animate_height(object.node, correction);
            }
            outcome => {
                log::trace!("[session] anchor update skipped: {outcome:?}");
            }
        }
    }
}

/// One AR session: owns the host handle, the placement state machine, and the
/// serial anchor-update worker.
pub struct Session<H: SceneHost> {
    shared: Arc<Mutex<Shared<H>>>,
    anchor_tx: mpsc::Sender<PlaneAnchor>,
}

impl<H: SceneHost + 'static> Session<H> {
    /// Create a session and spawn its anchor-update worker. The worker exits
    /// when the session is dropped.
    pub fn new(host: H, config: ContentConfig) -> std::io::Result<Self> {
        let shared = Arc::new(Mutex::new(Shared {
            host,
            config,
            placement: Placement::Unplaced,
        }));
        let (anchor_tx, anchor_rx) = mpsc::channel::<PlaneAnchor>();

        let worker_shared = Arc::clone(&shared);
        thread::Builder::new()
            .name("anchor-updates".into())
            .spawn(move || {
                while let Ok(anchor) = anchor_rx.recv() {
                    worker_shared.lock().unwrap().adjust(&anchor);
                }
                log::debug!("[session] anchor-update worker stopped");
            })?;

        Ok(Self { shared, anchor_tx })
    }

    /// Interaction-thread entry point for a resolved tap. Returns `Ok(true)`
    /// if the content was placed by this call, `Ok(false)` if it already was.
    pub fn handle_tap(&self, hit: HitTest) -> Result<bool, HostError> {
        self.shared.lock().unwrap().place_at(hit)
    }

    /// Queue one plane-anchor snapshot for the serial worker.
    pub fn submit_anchor_update(&self, anchor: PlaneAnchor) {
        // A send only fails once the worker is gone, i.e. during teardown.
        let _ = self.anchor_tx.send(anchor);
    }

    /// Run one adjustment synchronously on the calling thread. The worker
    /// goes through the same path; this is the deterministic variant for
    /// hosts (and tests) that already have their own update cadence.
    pub fn apply_anchor_update(&self, anchor: &PlaneAnchor) {
        self.shared.lock().unwrap().adjust(anchor);
    }

    /// World position of the placed content, if any.
    pub fn placed_position(&self) -> Option<Vec3> {
        self.shared
            .lock()
            .unwrap()
            .placement
            .placed()
            .map(|object| object.position)
    }
}
