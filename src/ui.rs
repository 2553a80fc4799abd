//! Side panel listing the result set and describing the selected system

use crate::body::{Planet, PlanetId, Star};
use crate::scenario::Scenario;

/// Actions that the UI can request from the application
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiAction {
    /// Focus a planet, switching to its star system if needed
    SelectPlanet(PlanetId),
    ClearFocus,
    ToggleAnimation,
}

pub struct UserInterface {
    show_results: bool,
    show_info: bool,
    pending_actions: Vec<UiAction>,
}

impl Default for UserInterface {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInterface {
    pub fn new() -> Self {
        Self {
            show_results: true,
            show_info: true,
            pending_actions: Vec::new(),
        }
    }

    /// Drain the actions queued since the last call
    pub fn take_actions(&mut self) -> Vec<UiAction> {
        std::mem::take(&mut self.pending_actions)
    }

    pub fn show(
        &mut self,
        ctx: &egui::Context,
        scenario: &Scenario,
        star: Option<&Star>,
        focus: Option<PlanetId>,
        animating: bool,
    ) {
        let mut show_results = self.show_results;
        let mut show_info = self.show_info;
        let mut pending_actions = Vec::new();

        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut show_results, "Results");
                    ui.checkbox(&mut show_info, "System Info");
                });
                let label = if animating { "Pause" } else { "Resume" };
                if ui.button(label).clicked() {
                    pending_actions.push(UiAction::ToggleAnimation);
                }
            });
        });

        if show_results || show_info {
            egui::SidePanel::left("results_panel")
                .default_width(280.0)
                .resizable(true)
                .show(ctx, |ui| {
                    if show_results {
                        Self::results_section(ui, scenario, focus, &mut pending_actions);
                    }
                    if show_results && show_info {
                        ui.separator();
                    }
                    if show_info {
                        Self::info_section(ui, star, focus, &mut pending_actions);
                    }
                });
        }

        self.show_results = show_results;
        self.show_info = show_info;
        self.pending_actions.extend(pending_actions);
    }

    fn results_section(
        ui: &mut egui::Ui,
        scenario: &Scenario,
        focus: Option<PlanetId>,
        pending_actions: &mut Vec<UiAction>,
    ) {
        ui.heading("Results");
        ui.label(format!(
            "{} planets in {} systems",
            scenario.results.len(),
            scenario.stars.len()
        ));
        ui.separator();

        egui::ScrollArea::vertical()
            .id_salt("results_scroll")
            .max_height(360.0)
            .show(ui, |ui| {
                for planet in &scenario.results {
                    let selected = focus == Some(planet.planet_id());
                    let response = ui
                        .selectable_label(selected, planet.label())
                        .on_hover_text(planet.summary());
                    if response.clicked() {
                        log::info!("Selected {}", planet.label());
                        pending_actions.push(UiAction::SelectPlanet(planet.planet_id()));
                    }
                }
            });
    }

    fn info_section(
        ui: &mut egui::Ui,
        star: Option<&Star>,
        focus: Option<PlanetId>,
        pending_actions: &mut Vec<UiAction>,
    ) {
        ui.heading("System");
        let Some(star) = star else {
            ui.label("No system selected");
            return;
        };

        ui.label(star.label());
        ui.small(format!("Temperature: {} K", star.temperature()));
        ui.small(format!("Radius: {} R☉", star.sol_radii()));
        ui.small(format!("Planets: {}", star.planets().len()));
        ui.separator();

        match focus.and_then(|id| star.planet(id)) {
            Some(planet) => {
                Self::planet_details(ui, planet);
                if ui.button("Clear Selection").clicked() {
                    pending_actions.push(UiAction::ClearFocus);
                }
            }
            None => {
                ui.label("No planet selected");
            }
        }
    }

    fn planet_details(ui: &mut egui::Ui, planet: &Planet) {
        ui.label(planet.label());
        ui.small(planet.probable_type().to_string());
        ui.small(format!("Temperature: {} K", planet.temperature()));
        ui.small(format!("Radius: {} R⊕", planet.earth_radii()));
        ui.small(format!("Semi-major axis: {} AU", planet.axis()));
        ui.small(format!("Period: {} days", planet.period_days()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_actions_drains_queue() {
        let mut ui = UserInterface::new();
        let id = PlanetId::new(701.02).unwrap();
        ui.pending_actions.push(UiAction::SelectPlanet(id));
        ui.pending_actions.push(UiAction::ClearFocus);

        assert_eq!(
            ui.take_actions(),
            vec![UiAction::SelectPlanet(id), UiAction::ClearFocus]
        );
        assert!(ui.take_actions().is_empty());
    }
}
