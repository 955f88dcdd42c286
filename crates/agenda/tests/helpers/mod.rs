#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use cropmon_agenda::{DayId, Host};

/// In-memory host recording what the selector did to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MemoryHost {
    pub display: Option<String>,
    pub controls: HashMap<DayId, bool>,
    pub bound: HashSet<DayId>,
    pub shows: usize,
}

impl MemoryHost {
    pub fn complete() -> Self {
        Self::with_controls(&[
            DayId::Day1,
            DayId::Day2,
            DayId::Day3,
            DayId::Day4,
            DayId::Day5,
        ])
    }

    pub fn with_controls(days: &[DayId]) -> Self {
        Self {
            display: Some(String::new()),
            controls: days.iter().map(|day| (*day, false)).collect(),
            ..Default::default()
        }
    }

    pub fn without_display() -> Self {
        Self {
            display: None,
            ..Self::complete()
        }
    }

    pub fn active(&self) -> Vec<DayId> {
        let mut active: Vec<DayId> = self
            .controls
            .iter()
            .filter(|(_, active)| **active)
            .map(|(day, _)| *day)
            .collect();
        active.sort_by_key(|day| day.index());
        active
    }

    /// What a user looking at the page would see.
    pub fn observable(&self) -> (Option<String>, Vec<DayId>) {
        (self.display.clone(), self.active())
    }
}

impl Host for MemoryHost {
    fn has_display(&self) -> bool {
        self.display.is_some()
    }

    fn bind(&mut self, day: DayId) -> bool {
        if !self.controls.contains_key(&day) {
            return false;
        }

        self.bound.insert(day);
        true
    }

    fn show(&mut self, markup: &str) {
        self.shows += 1;
        self.display = Some(markup.to_owned());
    }

    fn mark(&mut self, day: DayId, active: bool) {
        if let Some(flag) = self.controls.get_mut(&day) {
            *flag = active;
        }
    }
}
