//! Grid topology tags.

use crate::error::GridTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hexagon orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HexOrientation {
    /// Two sides horizontal; columns are offset.
    Flat,
    /// Two vertices point up and down; rows are offset.
    Pointy,
}

/// Which alternating rows (pointy) or columns (flat) get the half-step shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parity {
    /// Odd-indexed lines are shifted.
    Odd,
    /// Even-indexed lines are shifted.
    Even,
}

impl Parity {
    /// Whether line `index` receives the half-step shift.
    pub fn shifts(self, index: i64) -> bool {
        let odd = index.rem_euclid(2) == 1;
        match self {
            Parity::Odd => odd,
            Parity::Even => !odd,
        }
    }
}

/// One of the five supported grid topologies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GridType {
    /// Axis-aligned square tiles.
    Square,
    /// Flat-topped hexes, odd columns shifted down.
    HexFlatOdd,
    /// Flat-topped hexes, even columns shifted down.
    HexFlatEven,
    /// Pointy-topped hexes, odd rows shifted right.
    HexPointyOdd,
    /// Pointy-topped hexes, even rows shifted right.
    HexPointyEven,
}

impl GridType {
    /// Every grid type, square first.
    pub const ALL: [GridType; 5] = [
        GridType::Square,
        GridType::HexFlatOdd,
        GridType::HexFlatEven,
        GridType::HexPointyOdd,
        GridType::HexPointyEven,
    ];

    /// Build a hex grid type from its parts.
    pub fn hex(orientation: HexOrientation, parity: Parity) -> Self {
        match (orientation, parity) {
            (HexOrientation::Flat, Parity::Odd) => GridType::HexFlatOdd,
            (HexOrientation::Flat, Parity::Even) => GridType::HexFlatEven,
            (HexOrientation::Pointy, Parity::Odd) => GridType::HexPointyOdd,
            (HexOrientation::Pointy, Parity::Even) => GridType::HexPointyEven,
        }
    }

    /// Wire tag, e.g. `hex-flat-odd`.
    pub fn as_str(self) -> &'static str {
        match self {
            GridType::Square => "square",
            GridType::HexFlatOdd => "hex-flat-odd",
            GridType::HexFlatEven => "hex-flat-even",
            GridType::HexPointyOdd => "hex-pointy-odd",
            GridType::HexPointyEven => "hex-pointy-even",
        }
    }

    /// The storage family this type's config is persisted under.
    pub fn family(self) -> GridFamily {
        match self {
            GridType::Square => GridFamily::Square,
            GridType::HexFlatOdd | GridType::HexFlatEven => GridFamily::HexFlat,
            GridType::HexPointyOdd | GridType::HexPointyEven => GridFamily::HexPointy,
        }
    }

    /// True for every hex variant.
    pub fn is_hex(self) -> bool {
        self != GridType::Square
    }

    /// Hex orientation, `None` for square grids.
    pub fn orientation(self) -> Option<HexOrientation> {
        match self {
            GridType::Square => None,
            GridType::HexFlatOdd | GridType::HexFlatEven => Some(HexOrientation::Flat),
            GridType::HexPointyOdd | GridType::HexPointyEven => Some(HexOrientation::Pointy),
        }
    }

    /// Offset parity, `None` for square grids.
    pub fn parity(self) -> Option<Parity> {
        match self {
            GridType::Square => None,
            GridType::HexFlatOdd | GridType::HexPointyOdd => Some(Parity::Odd),
            GridType::HexFlatEven | GridType::HexPointyEven => Some(Parity::Even),
        }
    }
}

impl fmt::Display for GridType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GridType {
    type Err = GridTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GridType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| GridTypeError {
                input: s.to_string(),
            })
    }
}

/// A config storage family. Hex parities share one family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GridFamily {
    /// `square`
    Square,
    /// `hex-flat`
    HexFlat,
    /// `hex-pointy`
    HexPointy,
}

impl GridFamily {
    /// Every family.
    pub const ALL: [GridFamily; 3] = [GridFamily::Square, GridFamily::HexFlat, GridFamily::HexPointy];

    /// Storage key.
    pub fn key(self) -> &'static str {
        match self {
            GridFamily::Square => "square",
            GridFamily::HexFlat => "hex-flat",
            GridFamily::HexPointy => "hex-pointy",
        }
    }

    /// Inverse of [`key`](Self::key).
    pub fn from_key(key: &str) -> Option<Self> {
        GridFamily::ALL.into_iter().find(|f| f.key() == key)
    }

    /// The type selected when switching to this family with odd parity.
    pub fn default_type(self) -> GridType {
        match self {
            GridFamily::Square => GridType::Square,
            GridFamily::HexFlat => GridType::HexFlatOdd,
            GridFamily::HexPointy => GridType::HexPointyOdd,
        }
    }
}

impl fmt::Display for GridFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
