//! Custom audio player: transport state, seek/volume math and what the
//! controls should look like for a given state.

pub const PLAY_PAUSE_BUTTON: &str = "#play-pause-button";
pub const MUTE_BUTTON: &str = "#mute-button";
pub const PROGRESS_CONTAINER: &str = ".progress-bar-container";
pub const PROGRESS_FILL: &str = ".progress-bar-fill";
pub const SEEK_BALL: &str = ".seek-ball";
pub const CURRENT_TIME: &str = ".current-time";
pub const DURATION: &str = ".duration";
pub const VOLUME_SLIDER: &str = ".volume-slider-container";
pub const VOLUME_LEVEL: &str = ".volume-level";

/// Anchors without which the player is not wired at all.
pub const REQUIRED_ANCHORS: [&str; 3] = [PLAY_PAUSE_BUTTON, PROGRESS_CONTAINER, PROGRESS_FILL];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Transport {
    #[default]
    Unloaded,
    /// Metadata is known, nothing has played yet.
    Ready,
    Playing,
    Paused,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PlayerEvent {
    MetadataLoaded { duration: f64 },
    Played,
    Paused,
    TimeUpdate { current_time: f64, duration: f64 },
    MuteToggled,
    VolumeSet(f64),
}

/// What a click on the play/pause control should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    Play,
    Pause,
}

impl Toggle {
    pub fn for_paused(paused: bool) -> Self {
        if paused {
            Toggle::Play
        } else {
            Toggle::Pause
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlayerModel {
    pub transport: Transport,
    pub muted: bool,
    pub volume: f64,
    pub current_time: f64,
    pub duration: Option<f64>,
}

impl Default for PlayerModel {
    fn default() -> Self {
        Self {
            transport: Transport::Unloaded,
            muted: false,
            volume: 1.0,
            current_time: 0.0,
            duration: None,
        }
    }
}

impl PlayerModel {
    pub fn new(volume: f64, muted: bool) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
            muted,
            ..Self::default()
        }
    }

    pub fn is_playing(&self) -> bool {
        self.transport == Transport::Playing
    }

    pub fn toggle(&self) -> Toggle {
        Toggle::for_paused(!self.is_playing())
    }

    pub fn handle(&mut self, event: PlayerEvent) {
        match event {
            PlayerEvent::MetadataLoaded { duration } => {
                self.duration = known(duration);
                if self.transport == Transport::Unloaded {
                    self.transport = Transport::Ready;
                }
            }
            PlayerEvent::Played => self.transport = Transport::Playing,
            PlayerEvent::Paused => self.transport = Transport::Paused,
            PlayerEvent::TimeUpdate {
                current_time,
                duration,
            } => {
                self.current_time = current_time;
                if let Some(d) = known(duration) {
                    self.duration = Some(d);
                }
            }
            PlayerEvent::MuteToggled => self.muted = !self.muted,
            PlayerEvent::VolumeSet(volume) => {
                self.volume = volume.clamp(0.0, 1.0);
                self.muted = false;
            }
        }
    }

    /// Playback position as a fraction of the track, once the length is known.
    pub fn progress(&self) -> Option<f64> {
        self.duration.map(|d| (self.current_time / d).clamp(0.0, 1.0))
    }

    pub fn view(&self) -> PlayerView {
        let playing = self.is_playing();
        PlayerView {
            show_play_icon: !playing,
            show_pause_icon: playing,
            play_label: if playing { "Pause" } else { "Play" },
            show_volume_icon: !self.muted,
            show_mute_icon: self.muted,
            mute_label: if self.muted { "Unmute" } else { "Mute" },
            progress_percent: self.progress().map(|p| p * 100.0),
            volume_percent: if self.muted { 0.0 } else { self.volume * 100.0 },
            current_time: format_time(self.current_time),
            duration: self.duration.map_or_else(|| format_time(0.0), format_time),
        }
    }
}

/// Media elements report `NaN` (or infinity for streams) before the length is known.
fn known(duration: f64) -> Option<f64> {
    (duration.is_finite() && duration > 0.0).then_some(duration)
}

/// Visual state of the player controls.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerView {
    pub show_play_icon: bool,
    pub show_pause_icon: bool,
    pub play_label: &'static str,
    pub show_volume_icon: bool,
    pub show_mute_icon: bool,
    pub mute_label: &'static str,
    pub progress_percent: Option<f64>,
    pub volume_percent: f64,
    pub current_time: String,
    pub duration: String,
}

/// `m:ss`, as shown next to the progress bar.
pub fn format_time(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let mins = (seconds / 60.0).floor() as u64;
    let secs = (seconds % 60.0).floor() as u64;
    format!("{mins}:{secs:02}")
}

/// Where a click landed inside a bar, as a fraction of its width.
pub fn click_fraction(client_x: f64, left: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    (client_x - left) / width
}

pub fn seek_time(fraction: f64, duration: f64) -> Option<f64> {
    let duration = known(duration)?;
    Some((fraction * duration).clamp(0.0, duration))
}

pub fn volume_from_fraction(fraction: f64) -> f64 {
    if fraction.is_nan() {
        return 0.0;
    }
    fraction.clamp(0.0, 1.0)
}
