pub mod human;

pub use human::{HumanConfig, HumanMode};
