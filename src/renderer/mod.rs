//! Orbital diagram rendering
//! Draws one star system per frame onto any `DrawSurface`, fitting the viewport to the
//! system's largest orbit
#[cfg(feature = "web")]
pub mod canvas_surface;
pub mod egui_surface;
pub mod recording;
pub mod surface;

use std::collections::BTreeMap;
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use glam::DVec2;

use crate::{
    ExplorerError, ExplorerResult,
    body::{Planet, PlanetId, Star},
    config::ExplorerConfig,
    math::{Color, MathUtils, PhysicalScale},
};

#[cfg(feature = "web")]
pub use canvas_surface::CanvasSurface;
pub use egui_surface::EguiSurface;
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{DrawSurface, TextStyle};

pub const BACKGROUND_COLOR: Color = Color::BLACK;
pub const ORBIT_COLOR: Color = Color::WHITE;
pub const FOCUS_ORBIT_COLOR: Color = Color::rgb(0, 195, 148);
pub const HALO_COLOR: Color = Color::rgba(255, 240, 240, 179);
pub const SCALE_ORBIT_COLOR: Color = Color::BLUE;
pub const LABEL_COLOR: Color = Color::WHITE;

const LINE_WIDTH: f64 = 1.0;
const HALO_WIDTH: f64 = 2.0;

pub const SCALE_LABEL: &str = "Earth's Orbit";
/// Horizontal offset of the scale label from the star, in plot space
pub const SCALE_LABEL_OFFSET: f64 = 560.0;
pub const SCALE_LABEL_STYLE: TextStyle = TextStyle {
    family: "Helvetica",
    size_px: 24.0,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderState {
    /// Constructed or stopped; no frame is scheduled
    Idle,
    /// The host should keep requesting frames
    Animating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Drawn,
    /// Zero-sized surface, nothing to draw this frame
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleChange {
    /// Zoom out so the largest orbit fits
    Fit(f64),
    /// The unscaled system fits again
    Reset,
    Unchanged,
}

/// Viewport fitting with hysteresis.
///
/// The scale shrinks as soon as the largest orbit overflows the scaled viewport, but only
/// returns to 1 once the system would fit unscaled, so it never oscillates between two
/// nearly equal zoom levels.
pub fn autoscale(
    current_scale: f64,
    largest_orbit: f64,
    width: f64,
    fill_fraction: f64,
) -> ScaleChange {
    let limit = width * fill_fraction * 0.5;
    if limit <= 0.0 {
        return ScaleChange::Unchanged;
    }

    if largest_orbit > limit / current_scale {
        ScaleChange::Fit(limit / largest_orbit)
    } else if current_scale < 1.0 && largest_orbit <= limit {
        ScaleChange::Reset
    } else {
        ScaleChange::Unchanged
    }
}

/// Shared flag a host checks before scheduling the next frame
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

pub struct Renderer {
    physical: PhysicalScale,
    fill_fraction: f64,

    // Surface size in device pixels
    width: u32,
    height: u32,

    // Zoom, the only state carried from one frame to the next
    scale: f64,

    star: Option<Star>,
    planets: BTreeMap<PlanetId, Planet>,
    focus: Option<PlanetId>,

    state: RenderState,
    cancel: CancelToken,
}

impl Renderer {
    pub fn new(physical: PhysicalScale, fill_fraction: f64) -> Self {
        Self {
            physical,
            fill_fraction,
            width: 0,
            height: 0,
            scale: 1.0,
            star: None,
            planets: BTreeMap::new(),
            focus: None,
            state: RenderState::Idle,
            cancel: CancelToken::new(),
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(config.scale, config.viewport.fill_fraction)
    }

    /// Record the container's size. Safe to call at any time, including mid-animation;
    /// the next frame picks it up.
    pub fn determine_size(&mut self, width: u32, height: u32) {
        if (width, height) != (self.width, self.height) {
            log::debug!("Renderer resized to {}x{}", width, height);
            self.width = width;
            self.height = height;
        }
    }

    /// Replace the star and planets drawn from the next frame on
    pub fn set_bodies(&mut self, star: Star, planets: impl IntoIterator<Item = Planet>) {
        let planets: BTreeMap<PlanetId, Planet> = planets
            .into_iter()
            .map(|planet| (planet.planet_id(), planet))
            .collect();

        log::info!(
            "Showing {} with {} planets",
            star.label(),
            planets.len()
        );
        self.star = Some(star);
        self.planets = planets;
    }

    /// Show a star with all of its planets and start animating. Returns `true` when the
    /// loop was idle and the host must schedule the first frame.
    pub fn show_star(&mut self, star: Star) -> bool {
        let planets: Vec<Planet> = star.planets().values().cloned().collect();
        self.set_bodies(star, planets);
        self.draw_solar_system()
    }

    pub fn set_focus(&mut self, planet_id: PlanetId) {
        self.focus = Some(planet_id);
    }

    pub fn clear_focus(&mut self) {
        self.focus = None;
    }

    pub fn focus(&self) -> Option<PlanetId> {
        self.focus
    }

    pub fn star(&self) -> Option<&Star> {
        self.star.as_ref()
    }

    pub fn planets(&self) -> &BTreeMap<PlanetId, Planet> {
        &self.planets
    }

    /// Current zoom factor applied to the surface
    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Token a host can hand to its frame scheduling callback
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Start animating. Returns `true` if the loop was idle, meaning the host must
    /// schedule the first frame; an already running loop simply keeps going.
    pub fn draw_solar_system(&mut self) -> bool {
        if self.state == RenderState::Animating && !self.cancel.is_cancelled() {
            return false;
        }
        if self.cancel.is_cancelled() {
            // Callbacks still holding the old token stay cancelled
            self.cancel = CancelToken::new();
        }
        log::info!("Starting render loop");
        self.state = RenderState::Animating;
        true
    }

    /// Stop animating; the loop ends before drawing its next frame
    pub fn stop(&mut self) {
        if self.state == RenderState::Animating {
            log::info!("Stopping render loop");
        }
        self.cancel.cancel();
        self.state = RenderState::Idle;
    }

    /// Run one iteration of the frame loop.
    ///
    /// Frame failures are logged and swallowed so the loop survives them. Returns the
    /// state after the frame: the host schedules another frame only while `Animating`.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S, now_ms: f64) -> RenderState {
        if self.state == RenderState::Idle {
            return RenderState::Idle;
        }
        if self.cancel.is_cancelled() {
            log::info!("Render loop cancelled");
            self.state = RenderState::Idle;
            return RenderState::Idle;
        }

        match self.render_frame(surface, now_ms) {
            Ok(FrameOutcome::Drawn) => {}
            Ok(FrameOutcome::Skipped) => {
                log::trace!("Nothing to draw on a {}x{} surface", self.width, self.height);
            }
            Err(e) => log::warn!("Skipping frame: {e}"),
        }

        self.state
    }

    /// Draw one frame at wall-clock time `now_ms` (milliseconds since the Unix epoch)
    pub fn render_frame<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        now_ms: f64,
    ) -> ExplorerResult<FrameOutcome> {
        if !surface.is_available() {
            return Err(ExplorerError::SurfaceUnavailable(
                "drawing surface has been discarded".to_string(),
            ));
        }
        if self.width == 0 || self.height == 0 {
            return Ok(FrameOutcome::Skipped);
        }

        self.update_scale();
        surface.set_uniform_scale(self.scale);

        let extent = self.plot_extent();
        surface.clear_rect(DVec2::ZERO, extent);
        surface.fill_rect(DVec2::ZERO, extent, BACKGROUND_COLOR);

        let center = self.center();
        if let Some(star) = &self.star {
            surface.fill_circle(center, star.radius_pixels(&self.physical), star.color());
        }

        for planet in self.planets.values() {
            let focused = self.focus == Some(planet.planet_id());
            self.draw_planet(surface, center, planet, focused, now_ms);
        }

        self.draw_scale_orbit(surface, center);

        Ok(FrameOutcome::Drawn)
    }

    /// Run the autoscale step against the current bodies and surface width
    pub fn update_scale(&mut self) -> ScaleChange {
        let change = autoscale(
            self.scale,
            self.largest_orbit() as f64,
            self.width as f64,
            self.fill_fraction,
        );

        match change {
            ScaleChange::Fit(scale) => {
                if scale != self.scale {
                    log::debug!("Zooming out from {:.4} to {:.4}", self.scale, scale);
                }
                self.scale = scale;
            }
            ScaleChange::Reset => {
                log::debug!("System fits unscaled, resetting zoom from {:.4}", self.scale);
                self.scale = 1.0;
            }
            ScaleChange::Unchanged => {}
        }

        change
    }

    /// Largest orbit to fit, never smaller than Earth's so the reference orbit stays visible
    pub fn largest_orbit(&self) -> u32 {
        self.planets
            .values()
            .map(|planet| planet.orbit_pixels(&self.physical))
            .fold(self.physical.earth_orbit_pixels(), u32::max)
    }

    /// Surface center in plot space
    pub fn center(&self) -> DVec2 {
        DVec2::new(
            (self.width as f64 / 2.0 / self.scale).round(),
            (self.height as f64 / 2.0 / self.scale).round(),
        )
    }

    /// Whole device surface in plot space
    fn plot_extent(&self) -> DVec2 {
        DVec2::new(
            self.width as f64 / self.scale,
            self.height as f64 / self.scale,
        )
    }

    /// Where `planet` is at `now_ms`, in plot space
    pub fn planet_position(&self, planet: &Planet, now_ms: f64) -> DVec2 {
        let angle = MathUtils::orbital_angle(planet.period_seconds(), now_ms);
        MathUtils::orbit_point(
            self.center(),
            planet.orbit_pixels(&self.physical) as f64,
            angle,
        )
    }

    fn draw_planet<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        center: DVec2,
        planet: &Planet,
        focused: bool,
        now_ms: f64,
    ) {
        let orbit = planet.orbit_pixels(&self.physical) as f64;
        let orbit_color = if focused {
            FOCUS_ORBIT_COLOR
        } else {
            ORBIT_COLOR
        };
        surface.stroke_circle(center, orbit, orbit_color, LINE_WIDTH);

        let angle = MathUtils::orbital_angle(planet.period_seconds(), now_ms);
        let position = MathUtils::orbit_point(center, orbit, angle);
        let radius = planet.radius_pixels(&self.physical) as f64;
        surface.fill_circle(position, radius, planet.color());

        if focused {
            surface.stroke_circle(position, radius, HALO_COLOR, HALO_WIDTH);
        }
    }

    /// Earth's orbit at its true display size, for comparison
    fn draw_scale_orbit<S: DrawSurface + ?Sized>(&self, surface: &mut S, center: DVec2) {
        surface.stroke_circle(
            center,
            self.physical.orbit_scale,
            SCALE_ORBIT_COLOR,
            LINE_WIDTH,
        );
        surface.fill_text(
            SCALE_LABEL,
            center + DVec2::new(SCALE_LABEL_OFFSET, 0.0),
            &SCALE_LABEL_STYLE,
            LABEL_COLOR,
        );
    }
}
