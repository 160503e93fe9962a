// ABOUTME: Periodic readings refresh task publishing on a watch channel
// ABOUTME: Sequential ticks, skipped missed ticks and explicit shutdown on stop or drop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 OceanSafe

use std::sync::Arc;
use std::time::Duration;

use oceansafe_core::models::{Coordinates, Measurement};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use super::conditions::ConditionsService;

/// Shortest allowed refresh period
const MIN_PERIOD: Duration = Duration::from_millis(10);

/// Background task regenerating readings on a fixed period
///
/// Dropping the refresher closes the shutdown channel and the task exits at
/// its next wake-up.
pub struct ReadingsRefresher {
    readings: watch::Receiver<Vec<Measurement>>,
    shutdown_tx: Option<mpsc::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl ReadingsRefresher {
    /// Start refreshing; the first refresh happens immediately
    #[must_use]
    pub fn spawn(
        service: Arc<ConditionsService>,
        coordinates: Option<Coordinates>,
        period: Duration,
    ) -> Self {
        let (readings_tx, readings_rx) = watch::channel(Vec::new());
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);
        let period = period.max(MIN_PERIOD);

        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        // awaited inline so two refreshes never overlap
                        let readings = service.current_readings(coordinates).await;
                        debug!(count = readings.len(), "Readings refreshed");
                        if readings_tx.send(readings).is_err() {
                            break;
                        }
                    }
                    _ = shutdown_rx.recv() => {
                        debug!("Readings refresher received shutdown signal");
                        break;
                    }
                }
            }
        });

        Self {
            readings: readings_rx,
            shutdown_tx: Some(shutdown_tx),
            handle: Some(handle),
        }
    }

    /// A receiver that observes every published set
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Vec<Measurement>> {
        self.readings.clone()
    }

    /// Most recently published readings; empty before the first refresh
    #[must_use]
    pub fn latest(&self) -> Vec<Measurement> {
        self.readings.borrow().clone()
    }

    /// Signal the task and wait for it to exit
    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            // a full channel already carries a shutdown
            let _ = tx.try_send(());
        }
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                debug!("Readings refresher ended abnormally: {e}");
            }
        }
    }

    /// True once the task has exited
    #[must_use]
    pub fn is_finished(&self) -> bool {
        match &self.handle {
            Some(handle) => handle.is_finished(),
            None => true,
        }
    }
}

impl Drop for ReadingsRefresher {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.try_send(());
        }
    }
}
