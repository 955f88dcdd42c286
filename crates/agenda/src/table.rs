use std::{borrow::Cow, path::Path};

use strum::VariantArray;

use crate::{DayId, Error, Result};

fn embedded(day: DayId) -> &'static str {
    match day {
        DayId::Day1 => include_str!("../fragments/day1.html"),
        DayId::Day2 => include_str!("../fragments/day2.html"),
        DayId::Day3 => include_str!("../fragments/day3.html"),
        DayId::Day4 => include_str!("../fragments/day4.html"),
        DayId::Day5 => include_str!("../fragments/day5.html"),
    }
}

/// Immutable mapping from every [`DayId`] to its markup fragment.
///
/// Every constructor walks `DayId::VARIANTS`, so a table that exists is
/// total over the closed set.
#[derive(Debug, Clone, PartialEq)]
pub struct AgendaTable {
    fragments: Vec<Cow<'static, str>>,
}

impl AgendaTable {
    /// Fragments compiled into the binary.
    pub fn embedded() -> Self {
        Self {
            fragments: DayId::VARIANTS
                .iter()
                .map(|day| Cow::Borrowed(embedded(*day)))
                .collect(),
        }
    }

    pub fn from_fn<F>(mut f: F) -> Result<Self>
    where
        F: FnMut(DayId) -> Result<String>,
    {
        let mut fragments = Vec::with_capacity(DayId::VARIANTS.len());

        for day in DayId::VARIANTS {
            let markup = f(*day)?;
            if markup.trim().is_empty() {
                return Err(Error::EmptyFragment(*day));
            }

            fragments.push(Cow::Owned(markup));
        }

        Ok(Self { fragments })
    }

    /// Loads `<dir>/day1.html` .. `<dir>/day5.html`.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        Self::from_fn(|day| {
            let path = dir.join(format!("{day}.html"));
            match std::fs::read_to_string(&path) {
                Ok(markup) => Ok(markup),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    Err(Error::MissingFragment { day, path })
                }
                Err(source) => Err(Error::Io { day, path, source }),
            }
        })
    }

    pub fn get(&self, day: DayId) -> &str {
        &self.fragments[day.index()]
    }
}

impl Default for AgendaTable {
    fn default() -> Self {
        Self::embedded()
    }
}
