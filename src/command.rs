//! Runtime control surface
//!
//! Buttons, a serial console or a network task push [`MirrorCommand`]s into
//! a [`CommandChannel`]. The mirror drains the channel at the start of every
//! tick and applies the commands in order, before the effect renders.

use crate::channel::{Channel, Receiver, Sender};
use crate::presence::AudienceWatch;
use crate::scheduler::{EffectScheduler, Override};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Request to change what the mirror shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MirrorCommand {
    /// Jump to a preset, clamped to the list
    SetPreset(u8),
    NextPreset,
    PrevPreset,
    NextStyle,
    PrevStyle,
    SetOverride(Override),
    ToggleOverride(Override),
    SetAutoAdvance(bool),
    ToggleAutoAdvance,
}

/// Type alias for command sender
pub type CommandSender<'a, const SIZE: usize> = Sender<'a, MirrorCommand, SIZE>;

/// Type alias for command receiver
pub type CommandReceiver<'a, const SIZE: usize> = Receiver<'a, MirrorCommand, SIZE>;

/// Type alias for the command channel
pub type CommandChannel<const SIZE: usize> = Channel<MirrorCommand, SIZE>;

/// Applies queued commands to the scheduler and the presence policy
pub struct CommandProcessor<'a, const SIZE: usize> {
    commands: CommandReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> CommandProcessor<'a, SIZE> {
    pub const fn new(commands: CommandReceiver<'a, SIZE>) -> Self {
        Self { commands }
    }

    /// Apply all pending commands (non-blocking)
    ///
    /// Returns the number of commands applied.
    pub fn process_pending<const MAX_PRESETS: usize>(
        &mut self,
        scheduler: &mut EffectScheduler<MAX_PRESETS>,
        watch: &mut AudienceWatch,
    ) -> usize {
        let mut applied = 0;
        for command in self.commands.drain() {
            Self::apply(command, scheduler, watch);
            applied += 1;
        }
        applied
    }

    fn apply<const MAX_PRESETS: usize>(
        command: MirrorCommand,
        scheduler: &mut EffectScheduler<MAX_PRESETS>,
        watch: &mut AudienceWatch,
    ) {
        #[cfg(feature = "esp32-log")]
        println!("[command] {:?}", command);

        match command {
            MirrorCommand::SetPreset(index) => scheduler.set_preset(usize::from(index)),
            MirrorCommand::NextPreset => scheduler.next_preset(),
            MirrorCommand::PrevPreset => scheduler.prev_preset(),
            MirrorCommand::NextStyle => {
                scheduler.next_style();
            }
            MirrorCommand::PrevStyle => {
                scheduler.prev_style();
            }
            MirrorCommand::SetOverride(mode) => scheduler.set_override(mode),
            MirrorCommand::ToggleOverride(mode) => {
                scheduler.toggle_override(mode);
            }
            MirrorCommand::SetAutoAdvance(enabled) => watch.set_auto_advance(enabled),
            MirrorCommand::ToggleAutoAdvance => {
                watch.toggle_auto_advance();
            }
        }
    }
}
