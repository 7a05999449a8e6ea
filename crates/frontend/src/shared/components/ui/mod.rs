pub mod badge;

pub use badge::{Badge, BadgeSpec, BadgeVariant, SpecBadge};
