//! Small presentational building blocks shared by the views.

use dioxus::prelude::*;

mod badge;
mod banner;
mod button;
mod card;
mod input;

pub use badge::{Badge, BadgeTone, ClasseBadge};
pub use banner::{Banner, BannerKind};
pub use button::{Button, ButtonVariant};
pub use card::{Card, Skeleton, StatCard};
pub use input::{Input, Label, Select};

pub const COMPONENTS_CSS: Asset = asset!("/assets/styling/components.css");
