use cropmon_agenda::{AgendaSelector, DayId, Event};

use crate::{AppState, config::Config, widget::WidgetHost};

/// Display region content after selecting `day` on a freshly initialized widget.
pub fn show(config: Config, day: DayId) -> anyhow::Result<String> {
    let state = AppState::new(config)?;
    let mut selector = AgendaSelector::initialize(
        &state.table,
        WidgetHost::new(),
        state.config.agenda.default_day,
    )?;
    selector.dispatch(Event::Select(day));

    let (_, content) = selector.into_host().into_parts();

    Ok(content)
}
