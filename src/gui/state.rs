use std::collections::HashSet;

use crate::config::Timings;
use crate::core::Controller;
use crate::gui::screens::input_form::InputForm;
use crate::models::Screen;
use crate::view::Section;

/// Open/closed state of the project details sections. Lives with the
/// presentation only and is reset whenever another screen is shown.
#[derive(Debug, Default)]
pub struct PanelState {
    collapsed: HashSet<Section>,
}

impl PanelState {
    pub fn is_collapsed(&self, section: Section) -> bool {
        self.collapsed.contains(&section)
    }

    pub fn toggle(&mut self, section: Section) {
        if !self.collapsed.remove(&section) {
            self.collapsed.insert(section);
        }
    }

    pub fn reset(&mut self) {
        self.collapsed.clear();
    }
}

#[derive(Debug)]
pub struct AppState {
    pub controller: Controller,
    pub form: InputForm,
    pub panel: PanelState,
    rendered: Screen,
}

impl AppState {
    pub fn new(timings: Timings) -> Self {
        Self {
            controller: Controller::new(timings),
            form: InputForm::default(),
            panel: PanelState::default(),
            rendered: Screen::Loading,
        }
    }

    /// Reset presentation-only state if the controller switched screens.
    pub fn sync_screen(&mut self) {
        let screen = self.controller.state().screen();
        if screen != self.rendered {
            self.panel.reset();
            self.rendered = screen;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LaunchParams;
    use crate::core::Event;

    #[test]
    fn test_panel_toggle_independent() {
        let mut panel = PanelState::default();
        panel.toggle(Section::Questions);
        assert!(panel.is_collapsed(Section::Questions));
        assert!(!panel.is_collapsed(Section::Requirements));
        panel.toggle(Section::Questions);
        assert!(!panel.is_collapsed(Section::Questions));
    }

    #[test]
    fn test_panel_resets_on_screen_change() {
        let mut state = AppState::new(Timings::default());
        state.panel.toggle(Section::Requirements);
        state.sync_screen();
        assert!(state.panel.is_collapsed(Section::Requirements));

        state.controller.handle(Event::Boot(LaunchParams::default()));
        state.sync_screen();
        assert!(!state.panel.is_collapsed(Section::Requirements));
    }
}
