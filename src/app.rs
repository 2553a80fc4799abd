//! Native desktop viewer hosting the renderer inside an eframe window
use anyhow::{Result, anyhow};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::{
    body::PlanetId,
    config::ExplorerConfig,
    renderer::{DrawSurface, EguiSurface, RenderState, Renderer},
    scenario::Scenario,
    ui::{UiAction, UserInterface},
};

pub struct ExplorerApp {
    renderer: Renderer,
    scenario: Scenario,
    ui: UserInterface,
    /// Wall-clock time the animation was paused at, redrawn while paused
    paused_at_ms: Option<f64>,
}

impl ExplorerApp {
    /// Build the viewer showing the system of `focus`, or of the first result when
    /// no focus is given.
    pub fn new(
        scenario: Scenario,
        focus: Option<PlanetId>,
        config: &ExplorerConfig,
    ) -> Result<Self> {
        let focus = match focus {
            Some(id) => id,
            None => scenario
                .first_planet()
                .map(|planet| planet.planet_id())
                .ok_or_else(|| anyhow!("result set contains no planets"))?,
        };

        let mut app = Self {
            renderer: Renderer::from_config(config),
            scenario,
            ui: UserInterface::new(),
            paused_at_ms: None,
        };
        app.select_planet(focus)?;
        app.renderer.draw_solar_system();
        Ok(app)
    }

    pub fn run(self, config: &ExplorerConfig) -> Result<()> {
        let window = &config.window;
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(window.title.clone())
                .with_inner_size([window.width, window.height])
                .with_min_inner_size([640.0, 360.0]),
            renderer: eframe::Renderer::Wgpu,
            ..Default::default()
        };

        log::info!("Opening viewer window {}x{}", window.width, window.height);
        eframe::run_native(
            &window.title,
            options,
            Box::new(|_cc| Ok(Box::new(self))),
        )
        .map_err(|e| anyhow!("{e}"))
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Focus a planet, switching the displayed system if it orbits another star.
    /// A paused animation stays paused.
    fn select_planet(&mut self, planet_id: PlanetId) -> Result<()> {
        let star = self
            .scenario
            .star_of(planet_id)
            .ok_or_else(|| anyhow!("no star system contains planet {planet_id}"))?;

        let showing = self.renderer.star().map(|shown| shown.star_id());
        if showing != Some(star.star_id()) {
            let planets: Vec<_> = star.planets().values().cloned().collect();
            self.renderer.set_bodies(star.clone(), planets);
        }
        self.renderer.set_focus(planet_id);
        Ok(())
    }

    fn toggle_animation(&mut self, now_ms: f64) {
        match self.renderer.state() {
            RenderState::Animating => {
                self.renderer.stop();
                self.paused_at_ms = Some(now_ms);
            }
            RenderState::Idle => {
                self.renderer.draw_solar_system();
                self.paused_at_ms = None;
            }
        }
    }

    /// Draw the current frame. While paused the frame frozen at the pause time is
    /// redrawn, since egui does not keep the previous frame's shapes.
    fn paint<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) -> RenderState {
        match self.paused_at_ms {
            Some(paused_at) if self.renderer.state() == RenderState::Idle => {
                if let Err(e) = self.renderer.render_frame(surface, paused_at) {
                    log::warn!("Skipping paused frame: {e}");
                }
                RenderState::Idle
            }
            _ => self.renderer.tick(surface, now_ms),
        }
    }

    fn handle_ui_actions(&mut self, now_ms: f64) {
        for action in self.ui.take_actions() {
            match action {
                UiAction::SelectPlanet(planet_id) => {
                    if let Err(e) = self.select_planet(planet_id) {
                        log::warn!("Cannot select planet {planet_id}: {e}");
                    }
                }
                UiAction::ClearFocus => self.renderer.clear_focus(),
                UiAction::ToggleAnimation => self.toggle_animation(now_ms),
            }
        }
    }
}

fn now_ms() -> f64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

impl eframe::App for ExplorerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = now_ms();
        let animating = self.renderer.state() == RenderState::Animating;
        self.ui.show(
            ctx,
            &self.scenario,
            self.renderer.star(),
            self.renderer.focus(),
            animating,
        );
        self.handle_ui_actions(now);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let mut surface = EguiSurface::new(&painter, response.rect);
                let (width, height) = surface.device_size();
                self.renderer.determine_size(width, height);

                if self.paint(&mut surface, now) == RenderState::Animating {
                    ctx.request_repaint();
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::StarId;
    use crate::renderer::{DrawCommand, RecordingSurface};

    fn scenario() -> Scenario {
        Scenario::from_json(include_str!("../data/kepler_results.json")).unwrap()
    }

    #[test]
    fn test_initial_focus_is_first_result() {
        let app = ExplorerApp::new(scenario(), None, &ExplorerConfig::default()).unwrap();

        assert_eq!(app.renderer().focus(), Some(PlanetId::new(701.03).unwrap()));
        assert_eq!(app.renderer().star().unwrap().star_id(), StarId(701));
        assert_eq!(app.renderer().planets().len(), 5);
        assert_eq!(app.renderer().state(), RenderState::Animating);
    }

    #[test]
    fn test_select_planet_switches_system() {
        let focus = PlanetId::new(72.02).unwrap();
        let mut app =
            ExplorerApp::new(scenario(), Some(focus), &ExplorerConfig::default()).unwrap();
        assert_eq!(app.renderer().star().unwrap().star_id(), StarId(72));

        app.select_planet(PlanetId::new(351.01).unwrap()).unwrap();
        assert_eq!(app.renderer().star().unwrap().star_id(), StarId(351));
        assert_eq!(app.renderer().planets().len(), 2);

        assert!(app.select_planet(PlanetId::new(9999.01).unwrap()).is_err());
        assert_eq!(app.renderer().focus(), Some(PlanetId::new(351.01).unwrap()));
    }

    #[test]
    fn test_paused_frame_is_redrawn() {
        let mut app = ExplorerApp::new(scenario(), None, &ExplorerConfig::default()).unwrap();
        app.renderer.determine_size(1400, 900);

        let mut surface = RecordingSurface::new();
        assert_eq!(app.paint(&mut surface, 1_000.0), RenderState::Animating);

        app.toggle_animation(2_000.0);
        surface.take_commands();
        assert_eq!(app.paint(&mut surface, 5_000.0), RenderState::Idle);
        let frozen = surface.take_commands();
        // Star plus five planets
        assert_eq!(
            frozen
                .iter()
                .filter(|command| matches!(command, DrawCommand::FillCircle { .. }))
                .count(),
            6
        );

        // Time no longer moves the planets
        app.paint(&mut surface, 9_000.0);
        assert_eq!(surface.take_commands(), frozen);

        // Resizing still refits the frozen frame: Earth's orbit overflows 1000 * 0.475
        app.renderer.determine_size(1000, 900);
        app.paint(&mut surface, 9_500.0);
        assert!(surface.scale() < 1.0);
        assert_eq!(surface.filled_circles().count(), 6);

        app.toggle_animation(10_000.0);
        assert_eq!(app.paint(&mut surface, 10_016.0), RenderState::Animating);
    }

    #[test]
    fn test_switching_system_keeps_pause() {
        let mut app = ExplorerApp::new(scenario(), None, &ExplorerConfig::default()).unwrap();
        app.toggle_animation(1_000.0);

        app.select_planet(PlanetId::new(72.01).unwrap()).unwrap();
        assert_eq!(app.renderer().star().unwrap().star_id(), StarId(72));
        assert_eq!(app.renderer().state(), RenderState::Idle);
    }
}
