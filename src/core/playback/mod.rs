//! core/playback/mod.rs
//! Single-channel playback: engine thread + UI-side controller.

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

mod engine;

use engine::PlaybackEngine;

use super::error::{Result, SoundscapeError};
use super::types::ItemId;

pub const DEFAULT_VOLUME: f32 = 0.5;

/// Clamp to 0.0..=1.0; NaN and infinities give `fallback` instead.
pub fn sanitize_volume(volume: f32, fallback: f32) -> f32 {
    if volume.is_finite() {
        volume.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

/// What the channel is doing, from the UI's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Nothing selected yet.
    Unbound,
    /// `id` is loaded; `playing` is whether it is audible.
    Bound { id: ItemId, playing: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlayerCommand {
    Load(PathBuf),
    Play,
    Pause,
    SetVolume(f32), // 0.0..=1.0
    Shutdown,
}

#[derive(Debug, Clone)]
pub enum PlayerEvent {
    Loaded { path: PathBuf },
    Error(String),
}

/// UI-side handle: tracks the bound item and forwards commands to the engine.
pub struct PlaybackController {
    command_tx: Sender<PlayerCommand>,
    state: PlaybackState,
    volume: f32,
}

impl PlaybackController {
    fn new(command_tx: Sender<PlayerCommand>, volume: f32) -> Self {
        Self {
            command_tx,
            state: PlaybackState::Unbound,
            volume: sanitize_volume(volume, DEFAULT_VOLUME),
        }
    }

    /// Controller wired to a plain channel instead of an engine thread.
    #[cfg(test)]
    pub(crate) fn detached(volume: f32) -> (Self, Receiver<PlayerCommand>) {
        let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
        (Self::new(command_tx, volume), command_rx)
    }

    /// Best-effort send. If the engine died, the command is dropped.
    fn send(&self, cmd: PlayerCommand) {
        let _ = self.command_tx.send(cmd);
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn bound_id(&self) -> Option<ItemId> {
        match self.state {
            PlaybackState::Unbound => None,
            PlaybackState::Bound { id, .. } => Some(id),
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, PlaybackState::Bound { playing: true, .. })
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Load `sound` for `id`, replacing the previous source. Does not start output.
    pub fn bind(&mut self, id: ItemId, sound: PathBuf) {
        log::debug!("bind {id} -> {}", sound.display());
        self.send(PlayerCommand::Load(sound));
        self.state = PlaybackState::Bound { id, playing: false };
    }

    /// Start or resume the bound source.
    pub fn play(&mut self) -> Result<()> {
        let PlaybackState::Bound { id, .. } = self.state else {
            return Err(SoundscapeError::NothingBound);
        };

        log::debug!("play {id}");
        self.send(PlayerCommand::Play);
        self.state = PlaybackState::Bound { id, playing: true };
        Ok(())
    }

    /// Stop output, keeping position. No-op while unbound.
    pub fn pause(&mut self) {
        let PlaybackState::Bound { id, .. } = self.state else {
            return;
        };

        log::debug!("pause {id}");
        self.send(PlayerCommand::Pause);
        self.state = PlaybackState::Bound { id, playing: false };
    }

    pub fn set_volume(&mut self, volume: f32) {
        let volume = sanitize_volume(volume, self.volume);
        log::debug!("volume {volume:.2}");
        self.volume = volume;
        self.send(PlayerCommand::SetVolume(volume));
    }
}

impl Drop for PlaybackController {
    fn drop(&mut self) {
        self.send(PlayerCommand::Shutdown);
    }
}

/// Spawns playback thread and returns:
/// - PlaybackController (store in GUI state)
/// - Receiver<PlayerEvent> (drained by the GUI tick)
pub fn start_playback(volume: f32) -> (PlaybackController, Receiver<PlayerEvent>) {
    let (command_tx, command_rx) = mpsc::channel::<PlayerCommand>();
    let (event_tx, event_rx) = mpsc::channel::<PlayerEvent>();

    thread::spawn(move || {
        let mut engine = match PlaybackEngine::new(event_tx.clone(), volume) {
            Ok(e) => e,
            Err(err) => {
                let _ = event_tx.send(PlayerEvent::Error(err.to_string()));
                return;
            }
        };

        engine.run(command_rx);
    });

    (PlaybackController::new(command_tx, volume), event_rx)
}
