//! Gamepad input scripts.
//!
//! One instruction per line: a frame or an inclusive frame range, then the
//! buttons held during it. Frame 0 is the first frame after boot.
//!
//! ```text
//! # open the menu, wait, pick the character test, walk right
//! 0        A
//! 40       A
//! 60-120   RIGHT
//! 121-140  UP|LEFT
//! ```
//!
//! Overlapping lines add up. Frames no line mentions have nothing held.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, anyhow, bail};
use gameman::Buttons;

/// Played when no script is given: opens the character test and walks around.
pub const DEMO: &str = "\
0 A
40 A
60-99 RIGHT
100-139 DOWN
140-179 LEFT|UP
";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Hold {
    first: u32,
    last: u32,
    buttons: Buttons,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Script {
    holds: Vec<Hold>,
}

impl Script {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading input script {}", path.display()))?;
        text.parse()
            .with_context(|| format!("parsing input script {}", path.display()))
    }

    /// Buttons held during `frame`.
    pub fn buttons_at(&self, frame: u32) -> Buttons {
        self.holds
            .iter()
            .filter(|h| (h.first..=h.last).contains(&frame))
            .fold(Buttons::NONE, |held, h| held | h.buttons)
    }

    /// Last frame any line mentions.
    pub fn last_frame(&self) -> Option<u32> {
        self.holds.iter().map(|h| h.last).max()
    }
}

fn parse_frames(field: &str) -> anyhow::Result<(u32, u32)> {
    let (first, last) = match field.split_once('-') {
        Some((first, last)) => (first, last),
        None => (field, field),
    };
    let first: u32 = first.parse().with_context(|| format!("bad frame number `{first}`"))?;
    let last: u32 = last.parse().with_context(|| format!("bad frame number `{last}`"))?;
    if last < first {
        bail!("frame range {first}-{last} runs backwards");
    }
    Ok((first, last))
}

fn parse_buttons(field: &str) -> anyhow::Result<Buttons> {
    if field == "-" {
        return Ok(Buttons::NONE);
    }
    let mut held = Buttons::NONE;
    for name in field.split(['|', '+']) {
        held |= Buttons::from_name(&name.trim().to_ascii_uppercase())
            .ok_or_else(|| anyhow!("unknown button `{name}`"))?;
    }
    Ok(held)
}

impl FromStr for Script {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut holds = Vec::new();
        for (number, line) in s.lines().enumerate() {
            let line = line.split('#').next().unwrap_or_default().trim();
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (Some(frames), Some(buttons), None) = (fields.next(), fields.next(), fields.next())
            else {
                bail!("line {}: expected `<frame>[-<frame>] <buttons>`", number + 1);
            };

            let (first, last) = parse_frames(frames).with_context(|| format!("line {}", number + 1))?;
            let buttons = parse_buttons(buttons).with_context(|| format!("line {}", number + 1))?;
            holds.push(Hold {
                first,
                last,
                buttons,
            });
        }
        Ok(Script { holds })
    }
}
