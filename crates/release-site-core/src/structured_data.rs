//! JSON-LD `MusicAlbum` block maintenance.

use serde_json::{json, Map, Value};

use crate::config::{MusicAlbum, Track};

pub const SCHEMA_ELEMENT: &str = "#schema-music-album";

/// Convert `MM:SS` into an ISO-8601 style `PT{M}M{S}S` duration.
///
/// Anything that is not two numeric colon-separated parts is returned as is.
pub fn iso_duration(duration: &str) -> String {
    if duration.is_empty() {
        return String::new();
    }
    let mut parts = duration.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(m), Some(s), None) => match (m.trim().parse::<u32>(), s.trim().parse::<u32>()) {
            (Ok(m), Ok(s)) => format!("PT{m}M{s}S"),
            _ => duration.to_string(),
        },
        _ => duration.to_string(),
    }
}

fn default_document() -> Map<String, Value> {
    let mut map = Map::new();
    map.insert("@context".into(), json!("https://schema.org"));
    map.insert("@type".into(), json!("MusicAlbum"));
    map
}

/// Fields to write into an existing structured-data document.
///
/// Keys in `set` replace whatever the page had, keys in `remove` are deleted
/// and every other key already present is left alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StructuredDataUpdate {
    pub set: Map<String, Value>,
    pub remove: Vec<&'static str>,
}

impl StructuredDataUpdate {
    pub fn new(album: &MusicAlbum, tracks: Option<&[Track]>) -> Self {
        let mut update = Self::default();

        update.managed("name", album.name.as_deref());
        update.managed("alternateName", album.alternate_name.as_deref());
        update.managed("image", album.image.as_deref());
        update.managed("datePublished", album.date_published.as_deref());

        if let Some(artist) = &album.artist {
            update.set.insert(
                "byArtist".into(),
                json!({
                    "@type": "MusicGroup",
                    "name": artist.name,
                    "url": artist.url,
                }),
            );
        }
        if let Some(genre) = &album.genre {
            update.set.insert("genre".into(), genre.clone());
        }
        if let Some(rating) = &album.aggregate_rating {
            update.set.insert(
                "aggregateRating".into(),
                json!({
                    "@type": "AggregateRating",
                    "ratingValue": rating.rating_value,
                    "bestRating": rating.best_rating,
                    "worstRating": rating.worst_rating,
                    "ratingCount": rating.rating_count,
                }),
            );
        }

        if let Some(tracks) = tracks {
            update
                .set
                .insert("numTracks".into(), Value::String(tracks.len().to_string()));
            let records = tracks.iter().map(recording).collect();
            update.set.insert("track".into(), Value::Array(records));
        }

        update
    }

    fn managed(&mut self, key: &'static str, value: Option<&str>) {
        match value {
            Some(v) => {
                self.set.insert(key.into(), Value::String(v.to_string()));
            }
            None => self.remove.push(key),
        }
    }

    /// Merge into `existing` and return the pretty-printed result.
    ///
    /// Text that is not a JSON object is replaced by a minimal `MusicAlbum`
    /// document before merging.
    pub fn apply_to(&self, existing: &str) -> String {
        let mut doc = match serde_json::from_str::<Value>(existing) {
            Ok(Value::Object(map)) => map,
            _ => {
                log::warn!("structured data block is not a JSON object, starting from a default");
                default_document()
            }
        };

        for key in &self.remove {
            doc.shift_remove(*key);
        }
        for (key, value) in &self.set {
            doc.insert(key.clone(), value.clone());
        }

        let doc = Value::Object(doc);
        serde_json::to_string_pretty(&doc).unwrap_or_else(|_| doc.to_string())
    }
}

fn recording(track: &Track) -> Value {
    let mut record = Map::new();
    record.insert("@type".into(), json!("MusicRecording"));
    record.insert("name".into(), json!(track.title));
    record.insert(
        "duration".into(),
        json!(iso_duration(track.duration.as_deref().unwrap_or_default())),
    );
    if let Some(url) = track
        .links
        .as_ref()
        .and_then(|l| l.spotify.as_deref())
        .filter(|u| !u.is_empty())
    {
        record.insert("url".into(), json!(url));
    }
    Value::Object(record)
}
