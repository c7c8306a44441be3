//! Board design data model and validation.
//!
//! A design is the serializable description a board is built from:
//! property rows, function rows, and a size. Designs come from JSON
//! files authored outside the engine; [`BoardDesign::check`] reports every
//! problem found rather than stopping at the first, so an author can
//! fix a file in one pass.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::square::BehaviorTag;

/// An ownable square in a design.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyDesign {
    /// 1-indexed board position.
    pub location: u16,
    /// Display name, unique among properties.
    pub name: String,
    /// Purchase price.
    pub price: i64,
    /// Rent charged to visitors.
    pub rent: i64,
}

/// A fixed-behavior square in a design. The name doubles as the
/// behavior tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FunctionDesign {
    /// 1-indexed board position.
    pub location: u16,
    /// Behavior name, e.g. `"Go To Jail"`.
    pub name: String,
}

/// A complete board design.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardDesign {
    /// Require the square count to be a multiple of 4 so the board can
    /// be drawn as a square.
    #[serde(default)]
    pub enforce_square_design: bool,
    /// Number of squares on the ring.
    pub size: u16,
    /// Ownable squares.
    pub properties: Vec<PropertyDesign>,
    /// Fixed-behavior squares.
    pub functions: Vec<FunctionDesign>,
}

/// A single problem found in a design.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DesignIssue {
    #[error("board size must be a multiple of 4 to enforce a square layout")]
    NotSquare,
    #[error("location {0} is empty")]
    EmptyLocation(u16),
    #[error("board size {size} does not match square count {squares}")]
    SizeMismatch { size: u16, squares: usize },
    #[error("location {0} is used more than once")]
    DuplicateLocation(u16),
    #[error("property name {0:?} is used more than once")]
    DuplicateName(String),
    #[error("square at location {0} has an empty name")]
    EmptyName(u16),
    #[error("no Go square in the design")]
    MissingGo,
    #[error("Go To Jail requires a Just Visiting / In Jail square")]
    MissingJail,
}

/// Per-field update for a property row.
///
/// `None` means "keep the current value"; there is no in-band sentinel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PropertyUpdate {
    pub location: Option<u16>,
    pub name: Option<String>,
    pub price: Option<i64>,
    pub rent: Option<i64>,
}

impl BoardDesign {
    /// Create an empty design of the given size.
    #[must_use]
    pub fn new(size: u16) -> Self {
        Self {
            enforce_square_design: false,
            size,
            properties: Vec::new(),
            functions: Vec::new(),
        }
    }

    /// Validate the design, returning every issue found.
    ///
    /// An empty result means the design can be turned into a board.
    #[must_use]
    pub fn check(&self) -> Vec<DesignIssue> {
        let mut issues = Vec::new();

        if self.enforce_square_design && self.size % 4 != 0 {
            issues.push(DesignIssue::NotSquare);
        }

        let mut locations: Vec<u16> = self
            .properties
            .iter()
            .map(|p| p.location)
            .chain(self.functions.iter().map(|f| f.location))
            .collect();

        for location in 1..=self.size {
            if !locations.contains(&location) {
                issues.push(DesignIssue::EmptyLocation(location));
            }
        }

        let square_count = self.properties.len() + self.functions.len();
        if usize::from(self.size) != square_count {
            issues.push(DesignIssue::SizeMismatch {
                size: self.size,
                squares: square_count,
            });
        }

        locations.sort_unstable();
        for pair in locations.windows(2) {
            if pair[0] == pair[1] && !issues.contains(&DesignIssue::DuplicateLocation(pair[0])) {
                issues.push(DesignIssue::DuplicateLocation(pair[0]));
            }
        }

        let mut names: Vec<&str> = self.properties.iter().map(|p| p.name.as_str()).collect();
        names.sort_unstable();
        for pair in names.windows(2) {
            if pair[0] == pair[1] {
                let issue = DesignIssue::DuplicateName(pair[0].to_string());
                if !issues.contains(&issue) {
                    issues.push(issue);
                }
            }
        }

        for property in &self.properties {
            if property.name.is_empty() {
                issues.push(DesignIssue::EmptyName(property.location));
            }
        }
        for function in &self.functions {
            if function.name.is_empty() {
                issues.push(DesignIssue::EmptyName(function.location));
            }
        }

        let has_tag = |tag: BehaviorTag| {
            self.functions
                .iter()
                .any(|f| BehaviorTag::parse(&f.name) == Some(tag))
        };

        if !has_tag(BehaviorTag::Go) {
            issues.push(DesignIssue::MissingGo);
        }
        if has_tag(BehaviorTag::GoToJail) && !has_tag(BehaviorTag::JustVisitingOrInJail) {
            issues.push(DesignIssue::MissingJail);
        }

        issues
    }

    /// Locations not yet used by any square.
    #[must_use]
    pub fn available_locations(&self) -> Vec<u16> {
        (1..=self.size)
            .filter(|loc| {
                !self.properties.iter().any(|p| p.location == *loc)
                    && !self.functions.iter().any(|f| f.location == *loc)
            })
            .collect()
    }

    /// Insert a property at a free location. Returns false if the
    /// location is already taken.
    pub fn insert_property(&mut self, property: PropertyDesign) -> bool {
        if !self.available_locations().contains(&property.location) {
            return false;
        }
        self.properties.push(property);
        true
    }

    /// Insert a function square at a free location. Returns false if
    /// the location is already taken.
    pub fn insert_function(&mut self, function: FunctionDesign) -> bool {
        if !self.available_locations().contains(&function.location) {
            return false;
        }
        self.functions.push(function);
        true
    }

    /// Apply a per-field update to the property at `location`.
    /// Returns false when no property exists there.
    pub fn update_property(&mut self, location: u16, update: PropertyUpdate) -> bool {
        let Some(property) = self.properties.iter_mut().find(|p| p.location == location) else {
            return false;
        };

        if let Some(new_location) = update.location {
            property.location = new_location;
        }
        if let Some(name) = update.name {
            property.name = name;
        }
        if let Some(price) = update.price {
            property.price = price;
        }
        if let Some(rent) = update.rent {
            property.rent = rent;
        }
        true
    }

    /// Remove the property at `location`. Returns false when absent.
    pub fn remove_property(&mut self, location: u16) -> bool {
        let before = self.properties.len();
        self.properties.retain(|p| p.location != location);
        self.properties.len() != before
    }

    /// Remove the function square at `location`. Returns false when absent.
    pub fn remove_function(&mut self, location: u16) -> bool {
        let before = self.functions.len();
        self.functions.retain(|f| f.location != location);
        self.functions.len() != before
    }

    /// A ready-to-play 20-square design: Go at 1, the five other
    /// function squares spread around the ring, properties everywhere
    /// else.
    #[must_use]
    pub fn classic() -> Self {
        let functions = vec![
            FunctionDesign { location: 1, name: "Go".to_string() },
            FunctionDesign { location: 4, name: "Income Tax".to_string() },
            FunctionDesign { location: 6, name: "Just Visiting / In Jail".to_string() },
            FunctionDesign { location: 9, name: "Chance".to_string() },
            FunctionDesign { location: 11, name: "Free Parking".to_string() },
            FunctionDesign { location: 16, name: "Go To Jail".to_string() },
        ];

        let names = [
            (2, "Old Kent Road", 60, 2),
            (3, "Whitechapel Road", 60, 4),
            (5, "The Angel Islington", 100, 6),
            (7, "Euston Road", 100, 6),
            (8, "Pentonville Road", 120, 8),
            (10, "Pall Mall", 140, 10),
            (12, "Whitehall", 140, 10),
            (13, "Northumberland Avenue", 160, 12),
            (14, "Bow Street", 180, 14),
            (15, "Marlborough Street", 180, 14),
            (17, "Vine Street", 200, 16),
            (18, "Strand", 220, 18),
            (19, "Fleet Street", 220, 18),
            (20, "Trafalgar Square", 240, 20),
        ];

        let properties = names
            .into_iter()
            .map(|(location, name, price, rent)| PropertyDesign {
                location,
                name: name.to_string(),
                price,
                rent,
            })
            .collect();

        Self {
            enforce_square_design: true,
            size: 20,
            properties,
            functions,
        }
    }
}
