//! core/playback/engine.rs
//! Playback engine (rodio owner).
//!
//! Owns:
//! - OutputStream (must stay alive)
//! - the single Sink, replaced on every Load
//! - the command loop
//!
//! Emits PlayerEvent back via a channel.
//! No Iced imports.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, Sender};

use rodio::decoder::LoopedDecoder;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};

use super::{DEFAULT_VOLUME, PlayerCommand, PlayerEvent, sanitize_volume};
use crate::core::error::{Result, SoundscapeError};

/// Seeks back to the start at end of stream; nothing is buffered.
pub(crate) type LoopedSource = LoopedDecoder<BufReader<File>>;

pub struct PlaybackEngine {
    // Keep this alive for the lifetime of the engine!
    stream: OutputStream,

    // The one channel
    sink: Option<Sink>,
    volume: f32,

    // Event channel
    event_tx: Sender<PlayerEvent>,
}

impl PlaybackEngine {
    pub fn new(event_tx: Sender<PlayerEvent>, volume: f32) -> Result<Self> {
        let stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| SoundscapeError::Output(e.to_string()))?;

        Ok(Self {
            stream,
            sink: None,
            volume: sanitize_volume(volume, DEFAULT_VOLUME),
            event_tx,
        })
    }

    pub fn run(&mut self, command_rx: Receiver<PlayerCommand>) {
        // Blocks until the controller sends something or hangs up.
        while let Ok(cmd) = command_rx.recv() {
            if self.handle_command(cmd) {
                break;
            }
        }

        self.stop_internal();
    }

    fn handle_command(&mut self, cmd: PlayerCommand) -> bool {
        match cmd {
            PlayerCommand::Load(path) => {
                if let Err(e) = self.load(path) {
                    let _ = self.event_tx.send(PlayerEvent::Error(e.to_string()));
                }
            }
            PlayerCommand::Play => {
                if let Some(sink) = &self.sink {
                    sink.play();
                }
            }
            PlayerCommand::Pause => {
                if let Some(sink) = &self.sink {
                    sink.pause();
                }
            }
            PlayerCommand::SetVolume(v) => {
                self.volume = sanitize_volume(v, self.volume);
                if let Some(sink) = &self.sink {
                    sink.set_volume(self.volume);
                }
            }
            PlayerCommand::Shutdown => return true,
        }

        false
    }

    /// Replace whatever is loaded with `path`, paused.
    fn load(&mut self, path: PathBuf) -> Result<()> {
        self.stop_internal();

        let source = open_looped(&path)?;

        // rodio 0.21.x: Sink is created from the stream's mixer
        let sink = Sink::connect_new(self.stream.mixer());
        sink.pause();
        sink.set_volume(self.volume);
        sink.append(source);

        log::debug!("engine loaded {}", path.display());

        self.sink = Some(sink);

        let _ = self.event_tx.send(PlayerEvent::Loaded { path });

        Ok(())
    }

    fn stop_internal(&mut self) {
        if let Some(sink) = self.sink.take() {
            sink.stop();
        }
    }
}

/// Open `path` as an endlessly repeating source.
pub(crate) fn open_looped(path: &Path) -> Result<LoopedSource> {
    let file = File::open(path).map_err(|e| SoundscapeError::io(path, e))?;
    let reader = BufReader::new(file);

    Decoder::new_looped(reader).map_err(|e| SoundscapeError::decode(path, e))
}
