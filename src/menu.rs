use std::{fmt, str::FromStr};

use crate::processor::ProcessorError;

/// Text shown when asking for a menu selection
pub const MENU_PROMPT: &str = "Choose a menu item:
    1: Show the team hierarchy, i.e. each department and the teams in it
    2: Show the department summary: name, head count, salary range (min - max), mean salary
    3: Save the department summary as a csv file
-->>";

/// What the run should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Hierarchy,
    Report,
    ExportReport,
}

impl FromStr for MenuChoice {
    type Err = ProcessorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // numeric like an integer prompt: "+1" and "01" both select item 1
        match s.trim().parse::<u8>() {
            Ok(1) => Ok(MenuChoice::Hierarchy),
            Ok(2) => Ok(MenuChoice::Report),
            Ok(3) => Ok(MenuChoice::ExportReport),
            _ => Err(ProcessorError::InvalidSelection(s.trim().to_string())),
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = match self {
            MenuChoice::Hierarchy => 1,
            MenuChoice::Report => 2,
            MenuChoice::ExportReport => 3,
        };
        write!(f, "{n}")
    }
}
