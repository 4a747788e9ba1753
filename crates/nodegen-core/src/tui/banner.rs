//! Animated completion banner

use anyhow::Result;
use colored::Colorize;
use std::time::{Duration, Instant};

const FRAME_INTERVAL: Duration = Duration::from_millis(80);

/// Hue shift between neighbouring characters, in degrees
const HUE_STEP: usize = 15;

/// Show `message` cycling through rainbow colours for `duration`, then
/// leave the last frame on screen.
pub async fn celebrate(message: &str, duration: Duration) -> Result<()> {
    let term = console::Term::stdout();

    println!();
    if duration.is_zero() || !term.is_term() {
        term.write_line(&rainbow_frame(message, 0))?;
        return Ok(());
    }

    term.hide_cursor()?;
    let started = Instant::now();
    let mut offset = 0;
    while started.elapsed() < duration {
        term.clear_line()?;
        term.write_str(&rainbow_frame(message, offset))?;
        offset += 1;
        tokio::time::sleep(FRAME_INTERVAL).await;
    }

    term.clear_line()?;
    term.write_line(&rainbow_frame(message, offset))?;
    term.show_cursor()?;

    Ok(())
}

/// Render one animation frame; `offset` rotates the palette
pub fn rainbow_frame(message: &str, offset: usize) -> String {
    message
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            if ch.is_whitespace() {
                return ch.to_string();
            }
            let (r, g, b) = hue_to_rgb((i + offset) * HUE_STEP);
            ch.to_string().truecolor(r, g, b).bold().to_string()
        })
        .collect()
}

/// Fully saturated colour for a hue in degrees
fn hue_to_rgb(hue: usize) -> (u8, u8, u8) {
    let h = hue % 360;
    let ramp = |degrees: usize| (degrees * 255 / 60) as u8;

    match h / 60 {
        0 => (255, ramp(h), 0),
        1 => (255 - ramp(h - 60), 255, 0),
        2 => (0, 255, ramp(h - 120)),
        3 => (0, 255 - ramp(h - 180), 255),
        4 => (ramp(h - 240), 0, 255),
        _ => (255, 0, 255 - ramp(h - 300)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hue_to_rgb(0), (255, 0, 0));
        assert_eq!(hue_to_rgb(120), (0, 255, 0));
        assert_eq!(hue_to_rgb(240), (0, 0, 255));
        assert_eq!(hue_to_rgb(360), (255, 0, 0));
    }

    #[test]
    fn test_frame_keeps_text_when_colour_disabled() {
        colored::control::set_override(false);
        assert_eq!(rainbow_frame("Done, enjoy!", 7), "Done, enjoy!");
        colored::control::unset_override();
    }
}
