//! Headless replay of a scripted viewing session.
//!
//! Drives a [`ModeController`] through sensor look-around, a manual drag, a
//! tap selection, and a focus flight out and back, logging the events and
//! camera state along the way. Run with `RUST_LOG=debug` for gesture
//! details.

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use glam::{Quat, Vec2, Vec3};
use skyview::controller::{ModeController, SkyCommand};
use skyview::input::{FrameInput, Touch};
use skyview::options::SkyOptions;
use skyview::scene::{CelestialObject, ObjectId, SkyCatalog};

const DT: f32 = 1.0 / 60.0;
const VIEWPORT: Vec2 = Vec2::new(1170.0, 2532.0);

struct Replay {
    controller: ModeController,
    ranking: Vec<ObjectId>,
    frame: u32,
}

impl Replay {
    fn new(options: SkyOptions) -> Self {
        let mut catalog = SkyCatalog::new();
        let mut ranking = Vec::new();
        let stars = [
            ("Sirius", Vec3::new(-20.0, 15.0, -95.0), -1.46),
            ("Betelgeuse", Vec3::new(15.0, 30.0, -90.0), 0.42),
            ("Rigel", Vec3::new(25.0, 5.0, -95.0), 0.13),
        ];
        for (name, position, magnitude) in stars {
            ranking.push(catalog.add_principal(
                CelestialObject::new(name, position).with_magnitude(magnitude),
            ));
        }
        ranking.push(catalog.add(
            CelestialObject::new("Mars", Vec3::new(0.0, 8.0, -60.0))
                .with_scale(2.0)
                .with_magnitude(-1.0),
        ));

        Self {
            controller: ModeController::new(
                options,
                catalog,
                VIEWPORT,
                Quat::IDENTITY,
            ),
            ranking,
            frame: 0,
        }
    }

    fn step(&mut self, attitude: Option<Quat>, touches: &[Touch]) {
        let mut input = FrameInput::new(DT)
            .with_touches(touches)
            .with_rankings(&self.ranking, &self.ranking);
        input.attitude = attitude;
        self.controller.update(&input);
        self.frame += 1;

        for event in self.controller.take_events() {
            log::info!("[frame {}] {event:?}", self.frame);
        }
    }

    fn idle(&mut self, frames: u32) {
        for _ in 0..frames {
            self.step(None, &[]);
        }
    }

    fn finish_transition(&mut self) {
        while self.controller.is_switching_mode() {
            self.step(None, &[]);
        }
    }

    fn tap(&mut self, position: Vec2) {
        let touch = [Touch::at(position)];
        for _ in 0..6 {
            self.step(None, &touch);
        }
        self.step(None, &[]);
    }

    fn report(&self, phase: &str) {
        let camera = self.controller.camera();
        log::info!(
            "{phase}: mode={} fov={:.1} pos={:.2} fwd={:.3}",
            self.controller.mode(),
            camera.fov,
            camera.position,
            camera.forward()
        );
        let labels: Vec<&str> = self
            .controller
            .label_slots()
            .iter()
            .filter(|slot| slot.alpha > 0.0)
            .map(|slot| slot.text.as_str())
            .collect();
        if !labels.is_empty() {
            log::info!("{phase}: labels {labels:?}");
        }
    }

    fn run(&mut self) {
        // Phone held upright, slowly sweeping left
        for i in 0..120 {
            let sweep = Quat::from_rotation_z(i as f32 * 0.002);
            self.step(Some(sweep * Quat::from_rotation_x(FRAC_PI_2)), &[]);
        }
        self.report("gyro");

        let _ = self.controller.execute(SkyCommand::ToggleGyroManual);
        let center = VIEWPORT / 2.0;
        for i in 0..30 {
            let drag = [Touch::moved(
                center + Vec2::new(i as f32 * 2.0, 0.0),
                Vec2::new(2.0, 0.0),
            )];
            self.step(None, &drag);
        }
        self.idle(30);
        self.report("manual");

        let mars = self
            .controller
            .catalog()
            .find_by_name("Mars")
            .map(|o| (o.id, o.position));
        let Some((mars_id, mars_pos)) = mars else {
            return;
        };
        let screen = self.controller.camera().world_to_screen(mars_pos);
        self.tap(screen.truncate());
        self.idle(40);
        self.report("selected");

        if self.controller.focus_target() != Some(mars_id) {
            log::warn!("Tap missed Mars; focusing it directly");
            let _ = self
                .controller
                .execute(SkyCommand::SetFocusTarget { id: mars_id });
        }
        let _ = self.controller.execute(SkyCommand::RequestFocusedMode);
        self.finish_transition();
        self.report("focused");

        let orbit = [Touch::moved(center, Vec2::new(6.0, 2.0))];
        for _ in 0..20 {
            self.step(None, &orbit);
        }
        self.report("orbit");

        let _ = self.controller.execute(SkyCommand::LeaveFocusedMode);
        self.finish_transition();
        self.report("returned");
    }
}

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match SkyOptions::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => SkyOptions::default(),
    };

    let mut replay = Replay::new(options);
    replay.run();
    log::info!("Replayed {} frames", replay.frame);
}
