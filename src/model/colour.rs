// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Pipegrid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Pipegrid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::coord::BOARD_SIZE;

/// One of the eight fixed pipe colours, `1..=8`.
///
/// Each colour starts out owning one board row, so the label doubles as that row's index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColourLabel(u8);

impl ColourLabel {
    pub fn new(value: u8) -> Result<Self, ColourLabelError> {
        if value == 0 || usize::from(value) > BOARD_SIZE {
            return Err(ColourLabelError::OutOfRange { value });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn all() -> impl Iterator<Item = ColourLabel> {
        (1..=BOARD_SIZE as u8).map(ColourLabel)
    }
}

impl fmt::Display for ColourLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ColourLabel {
    type Err = ColourLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<u8>().map_err(|_| ColourLabelError::NotALabel {
            value: s.to_owned(),
        })?;
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColourLabelError {
    #[error("colour label {value} is outside 1..=8")]
    OutOfRange { value: u8 },
    #[error("{value:?} is not a colour label")]
    NotALabel { value: String },
}

#[cfg(test)]
mod tests {
    use super::{ColourLabel, ColourLabelError};

    #[test]
    fn accepts_one_through_eight() {
        let labels: Vec<String> = ColourLabel::all().map(|l| l.to_string()).collect();
        assert_eq!(labels, ["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn rejects_zero_and_nine() {
        assert_eq!(ColourLabel::new(0), Err(ColourLabelError::OutOfRange { value: 0 }));
        assert_eq!(ColourLabel::new(9), Err(ColourLabelError::OutOfRange { value: 9 }));
    }

    #[test]
    fn parses_digits_only() {
        assert_eq!("3".parse::<ColourLabel>().map(ColourLabel::get), Ok(3));
        assert!("x".parse::<ColourLabel>().is_err());
        assert!("0".parse::<ColourLabel>().is_err());
    }
}
