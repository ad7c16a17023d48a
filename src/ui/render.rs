//! Plain-text rendering of the page state.

use std::fmt::Write as _;

use crate::carousel::{Carousel, TickScheduler};
use crate::countdown::TimeLeft;
use crate::models::Category;
use crate::video::{FeaturedVideo, PlaybackState};

const ACTIVE_DOT: char = '●';
const IDLE_DOT: char = '○';

/// Dot indicators with the active position filled.
pub fn dots(len: usize, active: usize) -> String {
    (0..len)
        .map(|i| if i == active { ACTIVE_DOT } else { IDLE_DOT })
        .collect()
}

/// One line for the carousel strip, plus a lightbox line when it is open.
pub fn carousel<S: TickScheduler>(carousel: &Carousel<S>) -> String {
    let state = carousel.state();
    let len = carousel.items().len();
    let mut out = format!("[{}] {}", carousel.name(), dots(len, state.current_index));

    if let Some(item) = carousel.current_item() {
        let _ = write!(
            out,
            "  {}/{}  {}: {}",
            state.current_index + 1,
            len,
            item.ordinal_label(state.current_index),
            item.title
        );
        if let Category::Sponsor(tier) = item.category {
            let _ = write!(out, " ({})", tier.accent());
        }
        let _ = write!(out, " - {}", item.description);
    }
    if state.paused {
        out.push_str("  [Paused]");
    } else {
        let _ = write!(
            out,
            "  [Auto-scrolling ({}s)]",
            carousel.config().period.as_secs_f64()
        );
    }

    if let (Some(item), Some(counter)) = (carousel.modal_item(), carousel.modal_counter()) {
        let _ = write!(
            out,
            "\n[lightbox] {counter}  {}: {}  <{}>",
            item.title, item.description, item.image
        );
    }
    out
}

/// Featured video card: poster while stopped, source while playing.
pub fn video(video: &FeaturedVideo) -> String {
    let (state, media) = match video.playback_state() {
        PlaybackState::Playing => ("playing, loop, muted", video.source),
        PlaybackState::Paused => ("paused", video.source),
        PlaybackState::Stopped => ("stopped", video.poster),
    };
    format!(
        "[video] {}  {}  {state}  <{media}>",
        video.title, video.duration_label
    )
}

pub fn countdown(left: &TimeLeft) -> String {
    if left.is_zero() {
        "[hero] ZION 2025 is live".to_string()
    } else {
        format!("[hero] {left} until ZION 2025")
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::carousel::timer::testing::RecordingScheduler;
    use crate::carousel::CarouselConfig;
    use crate::models::{MEMORIES, SPONSORS};
    use crate::scroll::PageScroll;

    #[test]
    fn test_dots() {
        assert_eq!(dots(4, 1), "○●○○");
        assert_eq!(dots(0, 0), "");
    }

    #[test]
    fn test_sponsor_line_shows_tier_and_pause() {
        let scroll = PageScroll::new();
        let mut c = Carousel::mount(
            "sponsors",
            SPONSORS.to_vec(),
            CarouselConfig::builder().build().unwrap(),
            RecordingScheduler::default(),
            &scroll,
        )
        .unwrap();
        c.pointer_enter();
        let line = carousel(&c);
        assert!(line.starts_with(
            "[sponsors] ●○○○○○○○  1/8  Platinum Partner: TechCorp Industries (slate)"
        ));
        assert!(line.ends_with("  [Paused]"));
    }

    #[test]
    fn test_running_gallery_shows_ordinal_and_cadence() {
        let scroll = PageScroll::new();
        let config = CarouselConfig::builder()
            .period(Duration::from_millis(3000))
            .build()
            .unwrap();
        let c = Carousel::mount(
            "gallery",
            MEMORIES.to_vec(),
            config,
            RecordingScheduler::default(),
            &scroll,
        )
        .unwrap();
        let line = carousel(&c);
        assert!(line.starts_with("[gallery] ●○○  1/3  Memory 01: Opening Ceremony - "));
        assert!(line.ends_with("  [Auto-scrolling (3s)]"));

        let config = CarouselConfig::builder()
            .period(Duration::from_millis(2500))
            .build()
            .unwrap();
        let c = Carousel::mount(
            "sponsors",
            SPONSORS.to_vec(),
            config,
            RecordingScheduler::default(),
            &scroll,
        )
        .unwrap();
        assert!(carousel(&c).ends_with("[Auto-scrolling (2.5s)]"));
    }

    #[test]
    fn test_video_line_follows_playback() {
        let mut v = FeaturedVideo::highlights();
        assert!(video(&v).starts_with("[video] ZION 2025 Highlights  2:34  stopped  <https://"));
        v.autoplay(true);
        assert_eq!(
            video(&v),
            "[video] ZION 2025 Highlights  2:34  playing, loop, muted  </legacy.mp4>"
        );
        v.toggle_pause();
        assert_eq!(video(&v), "[video] ZION 2025 Highlights  2:34  paused  </legacy.mp4>");
    }

    #[test]
    fn test_lightbox_line() {
        let scroll = PageScroll::new();
        let config = CarouselConfig::builder()
            .period(Duration::from_secs(3))
            .modal(true)
            .build()
            .unwrap();
        let mut c = Carousel::mount(
            "gallery",
            MEMORIES.to_vec(),
            config,
            RecordingScheduler::default(),
            &scroll,
        )
        .unwrap();
        c.open_modal(1);
        let rendered = carousel(&c);
        let lightbox = rendered.lines().nth(1).unwrap();
        assert!(lightbox.starts_with("[lightbox] 2 / 3  Night Concert: Unforgettable musical performances"));
    }

    #[test]
    fn test_countdown_line() {
        assert_eq!(countdown(&TimeLeft::default()), "[hero] ZION 2025 is live");
        let left = TimeLeft {
            days: 12,
            hours: 1,
            minutes: 2,
            seconds: 3,
        };
        assert_eq!(countdown(&left), "[hero] 12d 01h 02m 03s until ZION 2025");
    }
}
