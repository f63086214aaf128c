#![no_std]

pub mod canvas;
pub mod channel;
pub mod color;
pub mod command;
pub mod effect;
pub mod error;
pub mod fsm;
pub mod geometry;
pub mod math8;
pub mod mirror;
pub mod pacer;
pub mod presence;
pub mod preset;
pub mod scheduler;
pub mod segmenter;
pub mod style;
pub mod throttle;

pub use canvas::Canvas;
pub use channel::{Channel, TrySendError};
pub use command::{
    CommandChannel, CommandProcessor, CommandReceiver, CommandSender, MirrorCommand,
};
pub use effect::{
    CustomEffect, CustomRender, Effect, EffectId, EffectSlot, FrameContext, Progress,
};
pub use error::{ConfigError, SegmentError};
pub use fsm::EffectMachine;
pub use geometry::{Geometry, Side};
pub use mirror::{Mirror, MirrorConfig};
pub use pacer::{FramePacer, FrameResult};
pub use presence::{AudienceWatch, Presence, PresenceConfig, WatchAction};
pub use preset::{Preset, PresetList};
pub use scheduler::{ChangeFlag, EffectScheduler, Override};
pub use segmenter::{StripSegmenter, segment};
pub use style::Style;
pub use throttle::Throttle;

pub use color::{Hsv, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to push the full mirror frame to hardware.
/// The frame pacer is generic over this trait.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
