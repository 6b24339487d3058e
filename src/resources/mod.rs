//! ECS resources and asset access.
//!
//! Overview
//! - `atlasstore` – loaded atlas regions grouped into animations and images
//! - `projectconfig` – pixel-to-world scale and resolution settings (INI)
//! - `resourceretriever` – the lookup trait factories resolve assets through
//! - `worldtime` – simulation time and delta
pub mod atlasstore;
pub mod projectconfig;
pub mod resourceretriever;
pub mod worldtime;
