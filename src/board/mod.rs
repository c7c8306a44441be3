//! Board design, validation, and the validated gameboard.

pub mod design;
pub mod layout;
pub mod square;

pub use design::{BoardDesign, DesignIssue, FunctionDesign, PropertyDesign, PropertyUpdate};
pub use layout::{BoardError, Gameboard};
pub use square::{BehaviorTag, Square};
