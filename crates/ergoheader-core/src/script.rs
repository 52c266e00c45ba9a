//! Event scripts for replaying header and menu interactions
//!
//! One command per line, `#` starts a comment:
//!
//! ```text
//! start 0          # initial scroll offset, before any event
//! viewport 300     # viewport height for following scrolls
//! scroll 150
//! enter header     # or: leave header, enter badge, leave badge
//! toggle           # mobile menu button
//! link             # mobile nav link
//! ```

use crate::error::CoreError;
use crate::header::HeaderEvent;
use crate::menu::MenuEvent;
use std::fmt;

/// Hoverable region of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Header,
    Badge,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScriptAction {
    Start(f64),
    Viewport(f64),
    Scroll(f64),
    Enter(Region),
    Leave(Region),
    Toggle,
    Link,
}

impl ScriptAction {
    /// Header event for this action, given the current viewport height
    pub fn header_event(&self, viewport_height: f64) -> Option<HeaderEvent> {
        match *self {
            ScriptAction::Scroll(offset) => Some(HeaderEvent::Scroll {
                offset,
                viewport_height,
            }),
            ScriptAction::Enter(Region::Header) => Some(HeaderEvent::HeaderEnter),
            ScriptAction::Leave(Region::Header) => Some(HeaderEvent::HeaderLeave),
            ScriptAction::Enter(Region::Badge) => Some(HeaderEvent::BadgeEnter),
            ScriptAction::Leave(Region::Badge) => Some(HeaderEvent::BadgeLeave),
            _ => None,
        }
    }

    pub fn menu_event(&self) -> Option<MenuEvent> {
        match self {
            ScriptAction::Toggle => Some(MenuEvent::Toggle),
            ScriptAction::Link => Some(MenuEvent::LinkClick),
            _ => None,
        }
    }
}

impl fmt::Display for ScriptAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptAction::Start(offset) => write!(f, "start {}", offset),
            ScriptAction::Viewport(height) => write!(f, "viewport {}", height),
            ScriptAction::Scroll(offset) => write!(f, "scroll {}", offset),
            ScriptAction::Enter(Region::Header) => write!(f, "enter header"),
            ScriptAction::Leave(Region::Header) => write!(f, "leave header"),
            ScriptAction::Enter(Region::Badge) => write!(f, "enter badge"),
            ScriptAction::Leave(Region::Badge) => write!(f, "leave badge"),
            ScriptAction::Toggle => write!(f, "toggle"),
            ScriptAction::Link => write!(f, "link"),
        }
    }
}

/// One parsed script line
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptStep {
    /// 1-based source line
    pub line: usize,
    pub action: ScriptAction,
}

pub fn parse_script(source: &str) -> Result<Vec<ScriptStep>, CoreError> {
    let mut steps = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.split('#').next().unwrap_or("").trim();
        if text.is_empty() {
            continue;
        }

        let mut words = text.split_whitespace();
        let command = words.next().unwrap_or_default();
        let argument = words.next();
        if let Some(extra) = words.next() {
            return Err(CoreError::script(
                line,
                format!("unexpected argument '{}'", extra),
            ));
        }

        let action = match command {
            "start" => ScriptAction::Start(parse_pixels(line, command, argument)?),
            "viewport" => {
                let height = parse_pixels(line, command, argument)?;
                if height <= 0.0 {
                    return Err(CoreError::script(line, "viewport height must be positive"));
                }
                ScriptAction::Viewport(height)
            }
            "scroll" => ScriptAction::Scroll(parse_pixels(line, command, argument)?),
            "enter" => ScriptAction::Enter(parse_region(line, argument)?),
            "leave" => ScriptAction::Leave(parse_region(line, argument)?),
            "toggle" | "link" => {
                if let Some(arg) = argument {
                    return Err(CoreError::script(
                        line,
                        format!("'{}' takes no argument, got '{}'", command, arg),
                    ));
                }
                if command == "toggle" {
                    ScriptAction::Toggle
                } else {
                    ScriptAction::Link
                }
            }
            other => {
                return Err(CoreError::script(
                    line,
                    format!("unknown command '{}'", other),
                ))
            }
        };

        if matches!(action, ScriptAction::Start(_))
            && steps
                .iter()
                .any(|s: &ScriptStep| !matches!(s.action, ScriptAction::Viewport(_)))
        {
            return Err(CoreError::script(line, "'start' must come before any event"));
        }

        steps.push(ScriptStep { line, action });
    }

    Ok(steps)
}

fn parse_pixels(line: usize, command: &str, argument: Option<&str>) -> Result<f64, CoreError> {
    let arg = argument
        .ok_or_else(|| CoreError::script(line, format!("'{}' needs a pixel value", command)))?;
    let arg = arg.strip_suffix("px").unwrap_or(arg);
    let value: f64 = arg
        .parse()
        .map_err(|_| CoreError::script(line, format!("'{}' is not a number", arg)))?;
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::script(
            line,
            format!("'{}' must be a non-negative number", arg),
        ));
    }
    Ok(value)
}

fn parse_region(line: usize, argument: Option<&str>) -> Result<Region, CoreError> {
    match argument {
        Some("header") => Ok(Region::Header),
        Some("badge") | Some("logo") => Ok(Region::Badge),
        Some(other) => Err(CoreError::script(
            line,
            format!("unknown region '{}' (expected header or badge)", other),
        )),
        None => Err(CoreError::script(line, "missing region (header or badge)")),
    }
}
