// Line commands for driving the page from a terminal.
//
// Commands:
// - <section> next | prev | goto <n>
// - <section> hover | leave | pause | resume
// - <section> open <n> | close
// - <section> click backdrop|item|close|prev|next
// - <section> key left|right|enter|escape
// - gallery video (play/pause the featured video)
// - show
// - quit
//
// Sections: gallery, sponsors. Indices are 1-based, as on the page.

use std::str::FromStr;

use crate::app::Section;
use crate::carousel::{ClickTarget, Key};
use crate::error::CarouselError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    Goto(usize),
    Hover,
    Leave,
    Pause,
    Resume,
    Open(usize),
    Close,
    Click(ClickTarget),
    Key(Key),
    ToggleVideo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Section(Section, Action),
    Show,
    Quit,
}

fn invalid(input: &str, reason: impl Into<String>) -> CarouselError {
    CarouselError::InvalidCommand {
        input: input.to_string(),
        reason: reason.into(),
    }
}

fn parse_position(input: &str, arg: Option<&str>) -> Result<usize, CarouselError> {
    let arg = arg.ok_or_else(|| invalid(input, "missing position"))?;
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(invalid(input, format!("'{arg}' is not a position (1, 2, ...)"))),
    }
}

fn parse_click_target(name: &str) -> Option<ClickTarget> {
    match name {
        "backdrop" => Some(ClickTarget::Backdrop),
        "item" | "image" => Some(ClickTarget::Item),
        "close" => Some(ClickTarget::CloseButton),
        "prev" => Some(ClickTarget::PrevButton),
        "next" => Some(ClickTarget::NextButton),
        _ => None,
    }
}

impl FromStr for Command {
    type Err = CarouselError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let lowered = input.trim().to_ascii_lowercase();
        let mut words = lowered.split_whitespace();

        let first = words.next().ok_or_else(|| invalid(input, "empty command"))?;
        match first {
            "quit" | "exit" => return Ok(Self::Quit),
            "show" => return Ok(Self::Show),
            _ => {}
        }

        let section = first.parse::<Section>()?;
        if section == Section::Hero {
            return Err(invalid(input, "the hero section takes no commands"));
        }

        let verb = words.next().ok_or_else(|| invalid(input, "missing action"))?;
        let arg = words.next();
        let action = match verb {
            "next" => Action::Next,
            "prev" => Action::Prev,
            "goto" => Action::Goto(parse_position(input, arg)?),
            "hover" | "enter" => Action::Hover,
            "leave" => Action::Leave,
            "pause" => Action::Pause,
            "resume" => Action::Resume,
            "open" => Action::Open(parse_position(input, arg)?),
            "close" => Action::Close,
            "click" => {
                let target = arg.ok_or_else(|| invalid(input, "missing click target"))?;
                Action::Click(
                    parse_click_target(target)
                        .ok_or_else(|| invalid(input, format!("unknown click target '{target}'")))?,
                )
            }
            "key" => {
                let name = arg.ok_or_else(|| invalid(input, "missing key"))?;
                Action::Key(
                    Key::from_name(name)
                        .ok_or_else(|| invalid(input, format!("unknown key '{name}'")))?,
                )
            }
            "video" if section == Section::Gallery => Action::ToggleVideo,
            "video" => return Err(invalid(input, "only the gallery has a video")),
            other => return Err(invalid(input, format!("unknown action '{other}'"))),
        };

        Ok(Self::Section(section, action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_navigation() {
        assert_eq!(
            "sponsors next".parse::<Command>().unwrap(),
            Command::Section(Section::Sponsors, Action::Next)
        );
        assert_eq!(
            "Sponsors GOTO 3".parse::<Command>().unwrap(),
            Command::Section(Section::Sponsors, Action::Goto(2))
        );
    }

    #[test]
    fn test_parse_modal_commands() {
        assert_eq!(
            "gallery open 2".parse::<Command>().unwrap(),
            Command::Section(Section::Gallery, Action::Open(1))
        );
        assert_eq!(
            "gallery click backdrop".parse::<Command>().unwrap(),
            Command::Section(Section::Gallery, Action::Click(ClickTarget::Backdrop))
        );
        assert_eq!(
            "gallery key esc".parse::<Command>().unwrap(),
            Command::Section(Section::Gallery, Action::Key(Key::Escape))
        );
    }

    #[test]
    fn test_parse_video_toggle() {
        assert_eq!(
            "gallery video".parse::<Command>().unwrap(),
            Command::Section(Section::Gallery, Action::ToggleVideo)
        );
        assert!(matches!(
            "sponsors video".parse::<Command>(),
            Err(CarouselError::InvalidCommand { .. })
        ));
    }

    #[test]
    fn test_parse_global_commands() {
        assert_eq!("  quit ".parse::<Command>().unwrap(), Command::Quit);
        assert_eq!("show".parse::<Command>().unwrap(), Command::Show);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "".parse::<Command>(),
            Err(CarouselError::InvalidCommand { .. })
        ));
        assert!(matches!(
            "schedule next".parse::<Command>(),
            Err(CarouselError::UnknownSection(_))
        ));
        assert!(matches!(
            "hero next".parse::<Command>(),
            Err(CarouselError::InvalidCommand { .. })
        ));
        assert!(matches!(
            "gallery open 0".parse::<Command>(),
            Err(CarouselError::InvalidCommand { .. })
        ));
        assert!(matches!(
            "gallery click sky".parse::<Command>(),
            Err(CarouselError::InvalidCommand { .. })
        ));
        assert!(matches!(
            "gallery dance".parse::<Command>(),
            Err(CarouselError::InvalidCommand { .. })
        ));
    }
}
