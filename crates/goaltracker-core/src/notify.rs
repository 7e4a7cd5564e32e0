//! Goal notifications.
//!
//! The default notifier hands a media file to the platform opener and does
//! not wait for playback.

use std::path::PathBuf;

use crate::error::Result;
use crate::events::Event;
use crate::storage::NotificationsConfig;

/// Reacts to `Event::GoalReached`.
pub trait Notifier: Send {
    fn notify(&self, event: &Event) -> Result<()>;
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, event: &Event) -> Result<()> {
        (**self).notify(event)
    }
}

/// Plays a sound file through the system's default handler.
#[derive(Debug, Clone)]
pub struct SoundNotifier {
    sound: PathBuf,
}

impl SoundNotifier {
    pub fn new(sound: impl Into<PathBuf>) -> Self {
        Self {
            sound: sound.into(),
        }
    }

    pub fn sound(&self) -> &std::path::Path {
        &self.sound
    }
}

impl Notifier for SoundNotifier {
    fn notify(&self, event: &Event) -> Result<()> {
        tracing::debug!(sound = %self.sound.display(), ?event, "playing goal sound");
        open::that_detached(&self.sound)?;
        Ok(())
    }
}

/// Drops every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _event: &Event) -> Result<()> {
        Ok(())
    }
}

/// Build the notifier described by the notifications config.
pub fn from_config(config: &NotificationsConfig) -> Box<dyn Notifier> {
    if config.enabled {
        Box::new(SoundNotifier::new(&config.sound))
    } else {
        Box::new(SilentNotifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_config_is_silent() {
        let config = NotificationsConfig {
            enabled: false,
            sound: "music.mp3".into(),
        };
        let notifier = from_config(&config);
        let milestone = crate::dates::MilestoneDate::parse_line("2016|8|2|10|30|0").unwrap();
        let event = Event::GoalReached {
            milestone,
            goals_reached: 1,
            next_goal_secs: 172_800.0,
            at: milestone.as_naive(),
        };
        assert!(notifier.notify(&event).is_ok());
    }

    #[test]
    fn sound_notifier_keeps_path() {
        let notifier = SoundNotifier::new("chime.wav");
        assert_eq!(notifier.sound(), std::path::Path::new("chime.wav"));
    }
}
