use std::path::PathBuf;

use crate::DayId;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("host has no display region")]
    MissingDisplay,

    #[error("host has no control for {0}")]
    MissingControl(DayId),

    #[error("no fragment for {day} at {}", path.display())]
    MissingFragment { day: DayId, path: PathBuf },

    #[error("fragment for {0} is empty")]
    EmptyFragment(DayId),

    #[error("unknown day identifier `{0}`")]
    UnknownDay(String),

    #[error("cannot read fragment for {day} at {}: {source}", path.display())]
    Io {
        day: DayId,
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
