use strum::VariantArray;

use crate::{AgendaTable, DayId, Error, Result};

/// Environment owning the day controls and the display region.
pub trait Host {
    fn has_display(&self) -> bool;

    /// Attaches the click responder of the control for `day`.
    /// Returns `false` when no such control exists.
    fn bind(&mut self, day: DayId) -> bool;

    /// Replaces the display region's content.
    fn show(&mut self, markup: &str);

    fn mark(&mut self, day: DayId, active: bool);
}

/// Messages delivered by the host's event mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Select(DayId),
}

pub struct AgendaSelector<'a, H> {
    table: &'a AgendaTable,
    host: H,
    active: DayId,
}

impl<'a, H: Host> AgendaSelector<'a, H> {
    /// Binds every day control, then renders `default`.
    ///
    /// Fails without touching the display when the host lacks the display
    /// region or any control.
    pub fn initialize(table: &'a AgendaTable, mut host: H, default: DayId) -> Result<Self> {
        if !host.has_display() {
            return Err(Error::MissingDisplay);
        }

        for day in DayId::VARIANTS {
            if !host.bind(*day) {
                return Err(Error::MissingControl(*day));
            }
        }

        let mut selector = Self {
            table,
            host,
            active: default,
        };
        selector.select(default);

        Ok(selector)
    }

    pub fn select(&mut self, day: DayId) {
        tracing::debug!(day = %day, previous = %self.active, "select agenda day");

        self.host.show(self.table.get(day));
        for candidate in DayId::VARIANTS {
            self.host.mark(*candidate, *candidate == day);
        }
        self.active = day;
    }

    pub fn dispatch(&mut self, event: Event) {
        match event {
            Event::Select(day) => self.select(day),
        }
    }

    pub fn active(&self) -> DayId {
        self.active
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }
}
