//! Periodic snapshot refresh running beside the input loop.
//!
//! The scheduler owns the data source and pushes fresh snapshots into the
//! store on a fixed cadence. It never touches the terminal: the UI thread
//! picks a new snapshot up on its next frame, so a repaint can never show
//! a half-applied refresh.

use color_eyre::eyre::Result;
use derive_builder::Builder;
use std::{
    sync::{
        Arc,
        mpsc::{Receiver, RecvTimeoutError},
    },
    thread::{self, JoinHandle},
    time::Duration,
};

use crate::{
    source::{DataSource, TableSnapshot},
    ui::store::{Dispatcher, action::Action},
};

/// Periodically pulls a fresh snapshot from the data source and hands it
/// to the store. A failed tick reports the failure and keeps the cadence;
/// it never ends the session.
#[derive(Builder)]
#[builder(pattern = "owned")]
pub struct RefreshScheduler {
    /// Cadence of refresh ticks
    interval: Duration,
    /// Source queried on every tick
    source: Box<dyn DataSource>,
    /// Store receiving refreshed snapshots
    dispatcher: Arc<dyn Dispatcher>,
    /// Signalling or closing this channel stops the loop at its next wait
    exit: Receiver<()>,
}

impl RefreshScheduler {
    /// Returns builder for RefreshScheduler
    pub fn builder() -> RefreshSchedulerBuilder {
        RefreshSchedulerBuilder::default()
    }

    /// Spawns the refresh thread. The loop ends when the exit channel is
    /// signalled or dropped.
    pub fn start(self) -> JoinHandle<Result<()>> {
        thread::spawn(move || self.run())
    }

    fn run(&self) -> Result<()> {
        log::info!("starting refresh loop");

        loop {
            // an interruptible sleep: closing or signalling the exit
            // channel wakes the wait immediately, so shutdown never sits
            // out a full interval and no tick starts afterwards
            match self.exit.recv_timeout(self.interval) {
                Ok(_) | Err(RecvTimeoutError::Disconnected) => {
                    log::info!("refresh loop stopped");
                    return Ok(());
                }
                Err(RecvTimeoutError::Timeout) => {}
            }

            self.tick()?;
        }
    }

    /// One refresh cycle: fetch, then either swap the new snapshot in or
    /// surface the failure without disturbing the displayed table.
    fn tick(&self) -> Result<()> {
        match TableSnapshot::from_source(self.source.as_ref()) {
            Ok(snapshot) => {
                log::debug!(
                    "refreshed snapshot: {} rows",
                    snapshot.row_count()
                );
                self.dispatcher
                    .dispatch(Action::UpdateSnapshot(snapshot))
            }
            Err(e) => {
                log::warn!("refresh failed: {e}");
                self.dispatcher.dispatch(Action::UpdateMessage(Some(
                    format!("refresh failed: {e}"),
                )))
            }
        }
    }
}

#[cfg(test)]
#[path = "./refresh_tests.rs"]
mod tests;
