//! Periodic automatic transfers.
//!
//! [`Scheduler`] owns one background task that fires a job on a fixed
//! interval. A tick that arrives while the previous job is still running is
//! skipped, so at most one job runs at a time. Job failures and panics are
//! logged and discarded; the following tick runs regardless.

use std::{
    future::Future,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

use crate::{
    Res, apple_music, info,
    spotify::auth::access_token,
    state::AppState,
    success,
    transfer::{self, TransferReport},
    warning,
};

pub struct Scheduler {
    shutdown: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl Scheduler {
    /// Starts firing `job` every `interval`. The first tick fires after one
    /// full interval.
    pub fn start<F, Fut>(interval: Duration, job: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Res<()>> + Send + 'static,
    {
        let (shutdown, mut stop) = watch::channel(false);
        let running = Arc::new(AtomicBool::new(false));

        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {}
                    _ = stop.changed() => break,
                }

                if running.swap(true, Ordering::AcqRel) {
                    warning!("Previous scheduled transfer still running, skipping this tick");
                    continue;
                }

                let guard = RunningGuard(Arc::clone(&running));
                let run = job();
                let task = tokio::spawn(async move {
                    let _guard = guard;
                    run.await
                });

                tokio::spawn(async move {
                    match task.await {
                        Ok(Ok(())) => {}
                        Ok(Err(e)) => warning!("Scheduled transfer failed: {}", e),
                        Err(e) => warning!("Scheduled transfer aborted: {}", e),
                    }
                });
            }
        });

        Self { shutdown, handle }
    }

    /// Stops the timer and waits for the loop to exit. A job that is already
    /// running is left to finish on its own.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.handle.await;
    }
}

/// Clears the running flag when the job finishes, even if it panics.
struct RunningGuard(Arc<AtomicBool>);

impl Drop for RunningGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Starts the automatic transfer job for `state`.
pub fn start_automatic_transfers(state: AppState) -> Scheduler {
    let interval = state.config.transfer_interval;
    info!(
        "Scheduling automatic transfers every {} seconds",
        interval.as_secs()
    );

    Scheduler::start(interval, move || {
        let state = state.clone();
        async move {
            let report = automatic_transfer(&state).await?;
            success!(
                "Scheduled transfer copied {} tracks into playlist {}",
                report.tracks,
                report.playlist.id
            );
            Ok(())
        }
    })
}

/// One unattended transfer with freshly minted credentials.
///
/// Uses the configured Spotify refresh token when present and a
/// client-credentials token otherwise.
pub async fn automatic_transfer(state: &AppState) -> Res<TransferReport> {
    let spotify_token = match &state.config.spotify_refresh_token {
        Some(refresh) => state.spotify_auth.refresh_access_token(refresh).await?,
        None => state.spotify_auth.client_credentials_token().await?,
    };
    let spotify_token = access_token(&spotify_token)?;
    let apple_music_token = apple_music::mint_developer_token(&state.config)?;

    transfer::transfer(
        &state.spotify,
        state.library.as_ref(),
        &spotify_token,
        &apple_music_token,
    )
    .await
}
