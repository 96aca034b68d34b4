use std::collections::BTreeMap;
use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Artist name used when `site.artist` is not configured.
pub const DEFAULT_ARTIST: &str = "Svaryx";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The whole site configuration, loaded once from `config.json`.
///
/// Every section is optional. A renderer whose section is absent produces no
/// patches at all.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub theme: Option<ThemeConfig>,
    pub site: Option<SiteInfo>,
    pub seo: Option<SeoConfig>,
    pub album: Option<AlbumInfo>,
    pub music_platforms: Option<Vec<MusicPlatform>>,
    pub tracks: Option<Vec<Track>>,
    pub media_embed: Option<MediaEmbed>,
    pub features: Option<Features>,
}

impl SiteConfig {
    /// Parse a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the text is not valid JSON or a
    /// field has the wrong shape.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config = serde_json::from_str(text)?;
        Ok(config)
    }

    pub fn artist(&self) -> &str {
        self.site
            .as_ref()
            .and_then(|s| s.artist.as_deref())
            .filter(|a| !a.is_empty())
            .unwrap_or(DEFAULT_ARTIST)
    }

    pub fn theme_color(&self, name: &str) -> Option<&str> {
        self.theme
            .as_ref()
            .and_then(|t| t.colors.get(name))
            .map(String::as_str)
            .filter(|c| !c.is_empty())
    }

    pub fn audio(&self) -> Option<&AudioFeature> {
        self.features.as_ref().and_then(|f| f.audio.as_ref())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub colors: BTreeMap<String, String>,
    pub fonts: Option<ThemeFonts>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ThemeFonts {
    pub main: Option<String>,
    pub headings: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteInfo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub footer_text: Option<String>,
    pub artist: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SeoConfig {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub canonical_url: Option<String>,
    pub open_graph: Option<OpenGraph>,
    pub twitter: Option<TwitterCard>,
    pub structured_data: Option<StructuredData>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    pub site_name: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TwitterCard {
    pub card: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub creator: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StructuredData {
    pub music_album: Option<MusicAlbum>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MusicAlbum {
    pub name: Option<String>,
    pub alternate_name: Option<String>,
    pub image: Option<String>,
    pub date_published: Option<String>,
    pub artist: Option<AlbumArtist>,
    pub genre: Option<serde_json::Value>,
    pub aggregate_rating: Option<AggregateRating>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AlbumArtist {
    pub name: Option<String>,
    pub url: Option<String>,
}

/// Rating values are copied verbatim, so numbers and strings both survive.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregateRating {
    pub rating_value: Option<serde_json::Value>,
    pub best_rating: Option<serde_json::Value>,
    pub worst_rating: Option<serde_json::Value>,
    pub rating_count: Option<serde_json::Value>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AlbumInfo {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub cover_image: Option<String>,
    pub release_date: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MusicPlatform {
    pub name: String,
    pub icon: String,
    pub url: Option<String>,
    pub available: bool,
}

impl MusicPlatform {
    /// The link the button should navigate to, if the platform is live.
    pub fn live_url(&self) -> Option<&str> {
        if !self.available {
            return None;
        }
        self.url.as_deref().filter(|u| !u.is_empty())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Track {
    pub number: Option<TrackNumber>,
    pub title: String,
    pub duration: Option<String>,
    pub links: Option<TrackLinks>,
}

/// `"number": 1` and `"number": "01"` are both accepted.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TrackNumber {
    Number(u64),
    Text(String),
}

impl fmt::Display for TrackNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrackNumber::Number(n) => write!(f, "{n}"),
            TrackNumber::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct TrackLinks {
    pub youtube: Option<String>,
    pub spotify: Option<String>,
    pub soundcloud: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MediaEmbed {
    pub youtube: Option<String>,
    pub autoplay: bool,
    pub mute: bool,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Features {
    pub audio_visualizer: bool,
    pub audio: Option<AudioFeature>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct AudioFeature {
    pub enabled: bool,
    pub source: Option<String>,
    pub title: Option<String>,
    pub autoplay: bool,
    pub visualizer: Option<VisualizerConfig>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub sensitivity: Option<f64>,
    pub smoothing: Option<f64>,
    pub colors: Option<VisualizerColors>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct VisualizerColors {
    pub primary: Option<String>,
    pub secondary: Option<String>,
}
