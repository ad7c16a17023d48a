//! Featured gallery video: looping, muted aftermovie with a play/pause toggle.

use tracing::debug;

/// Whether the host allows autoplay, from `FEST_VIDEO_AUTOPLAY`.
///
/// Anything other than `0`, `false`, `off` or `no` allows it.
pub fn autoplay_from_env() -> bool {
    std::env::var("FEST_VIDEO_AUTOPLAY")
        .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no"))
        .unwrap_or(true)
}

/// Playback state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Stopped,
    Playing,
    Paused,
}

#[derive(Debug, Clone)]
pub struct FeaturedVideo {
    pub title: &'static str,
    pub source: &'static str,
    pub poster: &'static str,
    /// Running time as shown on the card, e.g. "2:34".
    pub duration_label: &'static str,
    state: PlaybackState,
}

impl FeaturedVideo {
    pub fn highlights() -> Self {
        Self {
            title: "ZION 2025 Highlights",
            source: "/legacy.mp4",
            poster: "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=1200&q=80",
            duration_label: "2:34",
            state: PlaybackState::Stopped,
        }
    }

    /// Try to start playback when the section mounts.
    ///
    /// `allowed` is false when the host refuses autoplay; the video then
    /// stays stopped until toggled.
    pub fn autoplay(&mut self, allowed: bool) {
        if self.state == PlaybackState::Stopped && allowed {
            self.state = PlaybackState::Playing;
            debug!(video = self.title, "Autoplay started");
        }
    }

    /// Toggle play/pause. A stopped video starts playing.
    pub fn toggle_pause(&mut self) -> PlaybackState {
        self.state = match self.state {
            PlaybackState::Playing => PlaybackState::Paused,
            PlaybackState::Paused | PlaybackState::Stopped => PlaybackState::Playing,
        };
        debug!(video = self.title, state = ?self.state, "Video toggled");
        self.state
    }

    pub fn playback_state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }
}
