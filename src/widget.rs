use cropmon_agenda::{DayId, Host};
use strum::VariantArray;

/// One day button of the rendered widget.
#[derive(Debug, Clone, PartialEq)]
pub struct Control {
    pub day: DayId,
    pub label: String,
    /// Whether the button issues a selection request when clicked
    pub bound: bool,
    pub active: bool,
}

/// HTML host: the day buttons plus the `#agenda-content` region, rendered by
/// `partials/agenda-widget.html` once the selector is done with it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidgetHost {
    pub controls: Vec<Control>,
    pub content: Option<String>,
}

impl WidgetHost {
    pub fn new() -> Self {
        Self {
            controls: DayId::VARIANTS
                .iter()
                .map(|day| Control {
                    day: *day,
                    label: day.label(),
                    bound: false,
                    active: false,
                })
                .collect(),
            content: Some(String::new()),
        }
    }

    pub fn active(&self) -> Option<DayId> {
        self.controls
            .iter()
            .find(|control| control.active)
            .map(|control| control.day)
    }

    pub fn into_parts(self) -> (Vec<Control>, String) {
        (self.controls, self.content.unwrap_or_default())
    }

    fn control_mut(&mut self, day: DayId) -> Option<&mut Control> {
        self.controls.iter_mut().find(|control| control.day == day)
    }
}

impl Host for WidgetHost {
    fn has_display(&self) -> bool {
        self.content.is_some()
    }

    fn bind(&mut self, day: DayId) -> bool {
        match self.control_mut(day) {
            Some(control) => {
                control.bound = true;
                true
            }
            None => false,
        }
    }

    fn show(&mut self, markup: &str) {
        self.content = Some(markup.to_owned());
    }

    fn mark(&mut self, day: DayId, active: bool) {
        if let Some(control) = self.control_mut(day) {
            control.active = active;
        }
    }
}
