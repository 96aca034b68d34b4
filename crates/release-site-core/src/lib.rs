//! Configuration model and renderers for a single page music release site.
//!
//! Renderers are plain functions from a [`SiteConfig`] to a list of
//! [`Patch`]es. Applying those patches to a live document is left to the
//! caller; [`page::StaticPage`] applies them to an in-memory page.

pub mod album;
pub mod audio;
pub mod config;
pub mod embed;
pub mod footer;
pub mod page;
pub mod patch;
pub mod platforms;
pub mod player;
pub mod render;
pub mod reveal;
pub mod seo;
pub mod structured_data;
pub mod theme;
pub mod tracklist;
pub mod visualizer;

pub use config::{ConfigError, SiteConfig};
pub use patch::{Action, Node, Patch};
pub use render::{render_site, SitePlan};

/// Where the page fetches its configuration from.
pub const CONFIG_PATH: &str = "/config.json";
