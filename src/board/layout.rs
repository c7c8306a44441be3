//! The gameboard: a validated ring of squares.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::design::{BoardDesign, DesignIssue};
use super::square::{BehaviorTag, Square};
use crate::core::PlayerId;

/// Fatal board construction error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    /// The design failed validation; the board must not be used.
    #[error("invalid board design: {}", format_issues(.0))]
    InvalidDesign(Vec<DesignIssue>),
}

fn format_issues(issues: &[DesignIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// A validated board.
///
/// Every location in `[1, size]` maps to exactly one square. The Go
/// location always exists; the jail location exists whenever the board
/// has a Go To Jail square.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Gameboard {
    size: u16,
    squares: BTreeMap<u16, Square>,
    go_location: u16,
    jail_location: Option<u16>,
}

impl Gameboard {
    /// Build a board from a design, validating it first.
    pub fn from_design(design: &BoardDesign) -> Result<Self, BoardError> {
        let issues = design.check();
        if !issues.is_empty() {
            return Err(BoardError::InvalidDesign(issues));
        }

        let mut squares = BTreeMap::new();
        let mut go_location = None;
        let mut jail_location = None;

        for property in &design.properties {
            squares.insert(
                property.location,
                Square::Property {
                    location: property.location,
                    name: property.name.clone(),
                    price: property.price,
                    rent: property.rent,
                    owner: None,
                    owner_name: String::new(),
                },
            );
        }

        for function in &design.functions {
            let tag = BehaviorTag::parse(&function.name);
            if tag.is_none() {
                log::warn!(
                    "behavior {:?} at location {} is not defined, square will have no effect",
                    function.name,
                    function.location
                );
            }

            match tag {
                Some(BehaviorTag::Go) => go_location = Some(function.location),
                Some(BehaviorTag::JustVisitingOrInJail) => jail_location = Some(function.location),
                _ => {}
            }

            squares.insert(
                function.location,
                Square::Function {
                    location: function.location,
                    name: function.name.clone(),
                    tag,
                },
            );
        }

        // check() guarantees a Go square exists.
        let go_location = go_location.expect("validated design has a Go square");

        Ok(Self {
            size: design.size,
            squares,
            go_location,
            jail_location,
        })
    }

    /// Number of squares on the ring.
    #[must_use]
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Location of the Go square.
    #[must_use]
    pub fn go_location(&self) -> u16 {
        self.go_location
    }

    /// Location of the Just Visiting / In Jail square, when present.
    #[must_use]
    pub fn jail_location(&self) -> Option<u16> {
        self.jail_location
    }

    /// The square at `location`.
    ///
    /// Panics on an out-of-range location; callers pass normalized
    /// player positions.
    #[must_use]
    pub fn square(&self, location: u16) -> &Square {
        self.squares
            .get(&location)
            .expect("location is on the board")
    }

    /// Mutable access to the square at `location`.
    pub fn square_mut(&mut self, location: u16) -> &mut Square {
        self.squares
            .get_mut(&location)
            .expect("location is on the board")
    }

    /// Iterate over all squares in location order.
    pub fn squares(&self) -> impl Iterator<Item = &Square> {
        self.squares.values()
    }

    /// Assign ownership of the property at `location`.
    ///
    /// No-ops (with a log line) when the square is not ownable or is
    /// already owned. Ownership contention is expected, never an error.
    pub fn assign_owner(&mut self, location: u16, id: PlayerId, name: &str) {
        match self.squares.get_mut(&location) {
            Some(Square::Property { owner, owner_name, .. }) => {
                if owner.is_none() {
                    *owner = Some(id);
                    *owner_name = name.to_string();
                } else {
                    log::warn!("ownership update failed: location {location} is already owned");
                }
            }
            _ => log::warn!("location {location} is not ownable"),
        }
    }

    /// Clear ownership of the property at `location`.
    pub fn clear_owner(&mut self, location: u16) {
        if let Some(Square::Property { owner, owner_name, .. }) = self.squares.get_mut(&location) {
            *owner = None;
            owner_name.clear();
        }
    }
}
