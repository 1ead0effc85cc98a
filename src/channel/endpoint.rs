use std::path::{Path, PathBuf};

use nix::sys::stat::Mode;
use nix::unistd::mkfifo;
use tokio::net::unix::pipe;

use crate::app::APP_NAME;
use crate::error::{AppError, AppResult};

/// Filesystem-visible end of the control channel: one live FIFO node per
/// process, reopened (a new generation) every time the writing peer goes
/// away, unlinked at shutdown.
#[derive(Debug)]
pub struct ControlChannelEndpoint {
    path: PathBuf,
    generation: u64,
}

impl ControlChannelEndpoint {
    /// Derives the node path as `<fifodir>/<app>_<window-id>`.
    pub fn at(fifo_dir: &Path, window_id: u64) -> Self {
        Self {
            path: fifo_dir.join(format!("{APP_NAME}_{window_id}")),
            generation: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn create_node(&self) -> AppResult<()> {
        mkfifo(&self.path, Mode::from_bits_truncate(0o666)).map_err(|errno| {
            AppError::ChannelCreate {
                path: self.path.clone(),
                source: std::io::Error::from_raw_os_error(errno as i32),
            }
        })
    }

    /// Opens the node for reading without blocking on a writer; each
    /// successful open starts a new read session.
    pub fn open_receiver(&mut self) -> AppResult<pipe::Receiver> {
        let receiver = pipe::OpenOptions::new()
            .open_receiver(&self.path)
            .map_err(|source| AppError::ChannelOpen {
                path: self.path.clone(),
                source,
            })?;
        self.generation += 1;
        Ok(receiver)
    }

    pub fn remove_node(&self) {
        let _ = std::fs::remove_file(&self.path);
    }
}
