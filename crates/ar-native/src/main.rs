use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use glam::{Mat4, Vec3};
use rand::{Rng, SeedableRng};

use ar_core::{AnimationConfig, ContentConfig, Correction, HitTest, NodeId, PlaneAnchor};
use ar_session::{HostError, SceneHost, Session};

/// Stand-in for a real rendering/audio engine: hands out node ids and logs
/// every request the session makes.
#[derive(Default)]
struct LoggingHost {
    next_node: u64,
}

impl LoggingHost {
    fn mint_node(&mut self) -> NodeId {
        self.next_node += 1;
        NodeId(self.next_node)
    }
}

impl SceneHost for LoggingHost {
    fn attach_model(
        &mut self,
        asset: &str,
        position: Vec3,
        scale: f32,
    ) -> Result<NodeId, HostError> {
        let node = self.mint_node();
        log::info!("[host] attach model {asset:?} at {position} (scale {scale}) -> {node:?}");
        Ok(node)
    }

    fn attach_child_model(
        &mut self,
        parent: NodeId,
        asset: &str,
        offset: Vec3,
    ) -> Result<NodeId, HostError> {
        let node = self.mint_node();
        log::info!("[host] attach child {asset:?} under {parent:?} at offset {offset} -> {node:?}");
        Ok(node)
    }

    fn play_animation(
        &mut self,
        node: NodeId,
        animation: &AnimationConfig,
    ) -> Result<(), HostError> {
        log::info!(
            "[host] play animation {:?} on {node:?} ({}x, fade {}s/{}s)",
            animation.name,
            animation.repeat_count,
            animation.fade_in_secs,
            animation.fade_out_secs
        );
        Ok(())
    }

    fn attach_particles(
        &mut self,
        asset: &str,
        position: Vec3,
        pitch_radians: f32,
    ) -> Result<NodeId, HostError> {
        let node = self.mint_node();
        log::info!("[host] attach particles {asset:?} at {position} (pitch {pitch_radians} rad) -> {node:?}");
        Ok(node)
    }

    fn play_audio_looping(&mut self, node: NodeId, clip: &str) -> Result<(), HostError> {
        log::info!("[host] loop audio {clip:?} on {node:?}");
        Ok(())
    }

    fn animate_height(&mut self, node: NodeId, correction: Correction) {
        log::info!(
            "[host] ease {node:?} to y={} over {}s ({:?})",
            correction.target_y,
            correction.duration_secs,
            correction.easing
        );
    }
}

/// Simulated tracker: the true surface sits at y = 0, but the first estimate
/// is a few centimetres low and converges over the run while the detected
/// extent grows, as a real tracker's does.
fn start_plane_tracker(session: Arc<Session<LoggingHost>>, run_for: Duration) -> std::io::Result<()> {
    thread::Builder::new()
        .name("plane-tracker".into())
        .spawn(move || {
            let mut rng = rand::rngs::StdRng::seed_from_u64(7);
            let mut estimated_y = -0.03_f32;
            let mut extent = 0.4_f32;
            let started = Instant::now();
            while started.elapsed() < run_for {
                // Pull the estimate toward the true height with sub-mm jitter.
                estimated_y += -estimated_y * 0.15 + rng.gen_range(-0.0003..0.0003);
                extent = (extent + 0.02).min(1.2);
                session.submit_anchor_update(PlaneAnchor {
                    transform: Mat4::from_translation(Vec3::new(0.0, estimated_y, 0.0)),
                    center: Vec3::ZERO,
                    extent: Vec3::new(extent, 0.0, extent),
                });
                thread::sleep(Duration::from_millis(30));
            }
            log::info!("[tracker] stopped at estimate y={estimated_y}");
        })
        .map(|_| ())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let session = Arc::new(Session::new(LoggingHost::default(), ContentConfig::default())?);

    start_plane_tracker(Arc::clone(&session), Duration::from_secs(3))?;

    // Let the tracker refine for a moment, then simulate a tap resolved
    // against the current (still low) plane estimate.
    thread::sleep(Duration::from_millis(400));
    let hit = HitTest::at_position(Vec3::new(0.05, -0.012, 0.3));
    let placed = session.handle_tap(hit)?;
    log::info!("[demo] tap placed content: {placed}");

    // A second tap is a no-op by design.
    let second = session.handle_tap(HitTest::at_position(Vec3::new(0.4, 0.1, -0.2)))?;
    log::info!("[demo] second tap placed content: {second}");

    thread::sleep(Duration::from_secs(3));
    if let Some(position) = session.placed_position() {
        log::info!("[demo] final content position: {position}");
    }
    Ok(())
}
