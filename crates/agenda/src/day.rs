use serde::Deserialize;
use strum::{AsRefStr, Display, EnumString, VariantArray};

use crate::{Error, Result};

/// Closed set of meeting days. The lowercase variant name (`day1`..`day5`)
/// is the token used in URLs, config files and the CLI.
#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DayId {
    #[default]
    Day1,
    Day2,
    Day3,
    Day4,
    Day5,
}

impl DayId {
    pub fn parse(token: &str) -> Result<Self> {
        token
            .parse()
            .map_err(|_| Error::UnknownDay(token.to_owned()))
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Button caption, e.g. "Day 3".
    pub fn label(self) -> String {
        format!("Day {}", self.index() + 1)
    }
}
