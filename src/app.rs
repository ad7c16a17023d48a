//! The festival page: hero countdown, gallery and sponsor carousels on one
//! event loop.

use std::io::Write;
use std::str::FromStr;
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use flume::Receiver;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info, warn};

use crate::carousel::{Carousel, CarouselConfig, Tick, TickScheduler, TokioTicker};
use crate::countdown::Countdown;
use crate::error::CarouselError;
use crate::models::{MEMORIES, SPONSORS};
use crate::scroll::PageScroll;
use crate::ui::{render, Action, Command};
use crate::video::{self, FeaturedVideo};

const COUNTDOWN_PERIOD: Duration = Duration::from_secs(1);
/// The countdown timer is armed once and never replaced.
const COUNTDOWN_GENERATION: u64 = 0;

/// Page sections that own a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Gallery,
    Sponsors,
}

impl Section {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Gallery => "gallery",
            Self::Sponsors => "sponsors",
        }
    }
}

impl FromStr for Section {
    type Err = CarouselError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hero" => Ok(Self::Hero),
            "gallery" => Ok(Self::Gallery),
            "sponsors" => Ok(Self::Sponsors),
            other => Err(CarouselError::UnknownSection(other.to_string())),
        }
    }
}

type SectionCarousel = Carousel<TokioTicker<Section>>;

pub struct FestivalPage {
    scroll: PageScroll,
    gallery: SectionCarousel,
    sponsors: SectionCarousel,
    countdown: Countdown,
    countdown_timer: TokioTicker<Section>,
    video: FeaturedVideo,
    ticks: Receiver<Tick<Section>>,
}

impl FestivalPage {
    /// Mount every section with its preset configuration.
    ///
    /// Must be called inside a tokio runtime.
    pub fn mount() -> Result<Self> {
        Self::with_configs(
            CarouselConfig::gallery(),
            CarouselConfig::sponsors(),
            Countdown::from_env(),
        )
    }

    pub fn with_configs(
        gallery: CarouselConfig,
        sponsors: CarouselConfig,
        countdown: Countdown,
    ) -> Result<Self> {
        let (tx, ticks) = flume::unbounded();
        let scroll = PageScroll::new();

        let gallery = Carousel::mount(
            Section::Gallery.name(),
            MEMORIES.to_vec(),
            gallery,
            TokioTicker::new(Section::Gallery, tx.clone()),
            &scroll,
        )
        .context("Failed to mount gallery carousel")?;
        let sponsors = Carousel::mount(
            Section::Sponsors.name(),
            SPONSORS.to_vec(),
            sponsors,
            TokioTicker::new(Section::Sponsors, tx.clone()),
            &scroll,
        )
        .context("Failed to mount sponsors carousel")?;

        let mut countdown_timer = TokioTicker::new(Section::Hero, tx);
        countdown_timer
            .start(COUNTDOWN_PERIOD, COUNTDOWN_GENERATION)
            .context("Failed to start countdown timer")?;

        let mut video = FeaturedVideo::highlights();
        video.autoplay(video::autoplay_from_env());

        info!("Festival page mounted");
        Ok(Self {
            scroll,
            gallery,
            sponsors,
            countdown,
            countdown_timer,
            video,
            ticks,
        })
    }

    pub fn gallery(&self) -> &SectionCarousel {
        &self.gallery
    }

    pub fn sponsors(&self) -> &SectionCarousel {
        &self.sponsors
    }

    pub fn video(&self) -> &FeaturedVideo {
        &self.video
    }

    pub fn scroll(&self) -> &PageScroll {
        &self.scroll
    }

    fn carousel_mut(&mut self, section: Section) -> Option<&mut SectionCarousel> {
        match section {
            Section::Gallery => Some(&mut self.gallery),
            Section::Sponsors => Some(&mut self.sponsors),
            Section::Hero => None,
        }
    }

    /// Apply one timer tick. Returns the section that changed, if any.
    pub fn handle_tick(&mut self, tick: Tick<Section>) -> Option<Section> {
        match tick.key {
            Section::Hero => (tick.generation == COUNTDOWN_GENERATION).then_some(Section::Hero),
            section => {
                let carousel = self.carousel_mut(section)?;
                carousel.on_tick(tick.generation).then_some(section)
            }
        }
    }

    /// Apply a parsed command. Returns false when the page should stop.
    pub fn apply(&mut self, command: Command) -> bool {
        let (section, action) = match command {
            Command::Quit => return false,
            Command::Show => return true,
            Command::Section(section, action) => (section, action),
        };
        debug!(section = section.name(), ?action, "Applying command");
        if action == Action::ToggleVideo {
            let state = self.video.toggle_pause();
            info!(?state, "Featured video toggled");
            return true;
        }
        let Some(carousel) = self.carousel_mut(section) else {
            return true;
        };

        match action {
            Action::Next => carousel.next(),
            Action::Prev => carousel.prev(),
            Action::Goto(index) => {
                if !carousel.goto(index) {
                    warn!(section = section.name(), position = index + 1, "No such item");
                }
            }
            Action::Hover => carousel.pointer_enter(),
            Action::Leave => carousel.pointer_leave(),
            Action::Pause => carousel.pause(),
            Action::Resume => carousel.resume(),
            Action::Open(index) => {
                if !carousel.open_modal(index) {
                    warn!(section = section.name(), position = index + 1, "Cannot open viewer");
                }
            }
            Action::Close => {
                carousel.close_modal();
            }
            Action::Click(target) => {
                carousel.click(target);
            }
            Action::Key(key) => {
                carousel.key(key);
            }
            Action::ToggleVideo => {}
        }
        true
    }

    pub fn render_section(&self, section: Section, now: SystemTime) -> String {
        match section {
            Section::Hero => render::countdown(&self.countdown.remaining(now)),
            Section::Gallery => format!(
                "{}\n{}",
                render::carousel(&self.gallery),
                render::video(&self.video)
            ),
            Section::Sponsors => render::carousel(&self.sponsors),
        }
    }

    pub fn render(&self, now: SystemTime) -> String {
        let mut page = [Section::Hero, Section::Gallery, Section::Sponsors]
            .iter()
            .map(|s| self.render_section(*s, now))
            .collect::<Vec<_>>()
            .join("\n");
        if self.scroll.is_locked() {
            page.push_str("\n[page] scroll locked");
        }
        page
    }

    /// Run the page loop until `quit` or end of input.
    ///
    /// Ticks redraw the section that changed; commands redraw the page.
    pub async fn run<R, W>(&mut self, input: R, out: &mut W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let mut lines = input.lines();
        writeln!(out, "{}", self.render(SystemTime::now()))?;

        loop {
            tokio::select! {
                tick = self.ticks.recv_async() => {
                    let Ok(tick) = tick else { break };
                    if let Some(section) = self.handle_tick(tick) {
                        writeln!(out, "{}", self.render_section(section, SystemTime::now()))?;
                    }
                }
                line = lines.next_line() => {
                    let Some(line) = line.context("Failed to read command")? else { break };
                    if line.trim().is_empty() {
                        continue;
                    }
                    match line.parse::<Command>() {
                        Ok(command) => {
                            if !self.apply(command) {
                                break;
                            }
                            writeln!(out, "{}", self.render(SystemTime::now()))?;
                        }
                        Err(err) => warn!(error = %err, "Ignoring command"),
                    }
                }
            }
            out.flush()?;
        }

        info!("Festival page loop finished");
        Ok(())
    }

    pub fn unmount(&mut self) {
        self.countdown_timer.stop();
        self.gallery.unmount();
        self.sponsors.unmount();
    }
}

impl Drop for FestivalPage {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use std::time::UNIX_EPOCH;

    use tokio::io::BufReader;
    use tokio::time::{self, Instant};

    use super::*;
    use crate::carousel::ClickTarget;

    fn page() -> FestivalPage {
        let gallery = CarouselConfig::builder()
            .period(Duration::from_millis(3000))
            .modal(true)
            .pause_on_hover(false)
            .build()
            .unwrap();
        let sponsors = CarouselConfig::builder()
            .period(Duration::from_millis(2000))
            .build()
            .unwrap();
        let countdown = Countdown::new(UNIX_EPOCH + Duration::from_secs(1_773_532_800));
        FestivalPage::with_configs(gallery, sponsors, countdown).unwrap()
    }

    async fn next_tick(page: &FestivalPage) -> Tick<Section> {
        page.ticks.recv_async().await.unwrap()
    }

    #[test]
    fn test_section_names_round_trip() {
        for section in [Section::Hero, Section::Gallery, Section::Sponsors] {
            assert_eq!(section.name().parse::<Section>().unwrap(), section);
        }
        assert!("footer".parse::<Section>().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_sponsors_advance_every_two_seconds() {
        let mut page = page();
        let start = Instant::now();
        let mut advanced = 0;
        while advanced < 2 {
            let tick = next_tick(&page).await;
            if page.handle_tick(tick) == Some(Section::Sponsors) {
                advanced += 1;
            }
        }
        assert!(start.elapsed() >= Duration::from_millis(4000));
        assert!(start.elapsed() < Duration::from_millis(4100));
        assert_eq!(page.sponsors().state().current_index, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_hover_freezes_sponsors() {
        let mut page = page();
        page.apply(Command::Section(Section::Sponsors, Action::Hover));

        let deadline = Instant::now() + Duration::from_secs(20);
        while Instant::now() < deadline {
            let tick = next_tick(&page).await;
            page.handle_tick(tick);
        }
        assert_eq!(page.sponsors().state().current_index, 0);
        assert!(page.sponsors().state().paused);
        assert!(!page.sponsors().is_timer_running());

        page.apply(Command::Section(Section::Sponsors, Action::Leave));
        let resumed = Instant::now();
        loop {
            let tick = next_tick(&page).await;
            if page.handle_tick(tick) == Some(Section::Sponsors) {
                break;
            }
        }
        assert!(resumed.elapsed() >= Duration::from_millis(2000));
        assert_eq!(page.sponsors().state().current_index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_long_hover_resumes_without_catch_up() {
        let mut page = page();
        page.apply(Command::Section(Section::Sponsors, Action::Hover));
        time::sleep(Duration::from_secs(20)).await;
        while let Ok(tick) = page.ticks.try_recv() {
            page.handle_tick(tick);
        }
        assert_eq!(page.sponsors().state().current_index, 0);

        page.apply(Command::Section(Section::Sponsors, Action::Leave));
        let window_end = Instant::now() + Duration::from_millis(2000 + 50);
        let mut advances = 0;
        loop {
            tokio::select! {
                tick = page.ticks.recv_async() => {
                    if page.handle_tick(tick.unwrap()) == Some(Section::Sponsors) {
                        advances += 1;
                    }
                }
                _ = time::sleep_until(window_end) => break,
            }
        }
        assert_eq!(advances, 1);
        assert_eq!(page.sponsors().state().current_index, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_countdown_ticks_only_for_its_generation() {
        let mut page = page();
        let tick = next_tick(&page).await;
        assert_eq!(tick, Tick { key: Section::Hero, generation: COUNTDOWN_GENERATION });
        assert_eq!(page.handle_tick(tick), Some(Section::Hero));
        let stale = Tick { key: Section::Hero, generation: COUNTDOWN_GENERATION + 1 };
        assert_eq!(page.handle_tick(stale), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gallery_video_toggles_and_renders() {
        let mut page = page();
        let before = page.video().is_playing();
        assert!(page.apply(Command::Section(Section::Gallery, Action::ToggleVideo)));
        assert_ne!(page.video().is_playing(), before);
        assert_eq!(page.gallery().state().current_index, 0);

        let gallery = page.render_section(Section::Gallery, UNIX_EPOCH);
        let video_line = gallery.lines().nth(1).unwrap();
        assert!(video_line.starts_with("[video] ZION 2025 Highlights  2:34  "));
    }

    #[tokio::test(start_paused = true)]
    async fn test_lightbox_locks_page_and_stops_gallery() {
        let mut page = page();
        page.apply(Command::Section(Section::Gallery, Action::Open(1)));
        assert!(page.scroll().is_locked());
        assert!(page.render(UNIX_EPOCH).contains("[lightbox] 2 / 3"));

        time::sleep(Duration::from_secs(10)).await;
        while let Ok(tick) = page.ticks.try_recv() {
            page.handle_tick(tick);
        }
        assert_eq!(page.gallery().state().current_index, 0);

        page.apply(Command::Section(
            Section::Gallery,
            Action::Click(ClickTarget::Backdrop),
        ));
        assert!(!page.scroll().is_locked());
        assert!(page.gallery().is_timer_running());
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_applies_script() {
        let mut page = page();
        let script = b"sponsors goto 4\ngallery open 3\ngallery key right\nbogus\nquit\n";
        let mut out = Vec::new();
        page.run(BufReader::new(&script[..]), &mut out).await.unwrap();

        assert_eq!(page.sponsors().state().current_index, 3);
        let gallery = page.gallery().state();
        assert!(gallery.modal_open);
        assert_eq!(gallery.modal_index, 0);

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("[lightbox] 1 / 3  Opening Ceremony"));
        assert!(text.contains("[sponsors] ○○○●○○○○  4/8  Gold Partner: "));
        assert!(text.contains("[page] scroll locked"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases_everything() {
        let mut page = page();
        let scroll = page.scroll().clone();
        page.apply(Command::Section(Section::Gallery, Action::Open(0)));
        drop(page);
        assert!(!scroll.is_locked());
    }
}
