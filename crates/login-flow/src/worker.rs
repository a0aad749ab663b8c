//! Background thread that performs store reads and writes off the UI thread.

use crate::locale::LanguageCode;
use crate::store::{LocaleStore, StoreError};
use crossbeam_channel::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

#[derive(Debug)]
enum Job {
    Load,
    Save(LanguageCode),
}

/// Result of a job, delivered back to the event loop.
#[derive(Debug)]
pub enum PreferenceEvent {
    Loaded(Option<LanguageCode>),
    Saved(Result<LanguageCode, StoreError>),
}

/// Owns the worker thread. Jobs are fire-and-forget; results are polled.
pub struct PreferenceWorker {
    jobs: Option<Sender<Job>>,
    events: Receiver<PreferenceEvent>,
    handle: Option<JoinHandle<()>>,
}

impl PreferenceWorker {
    pub fn spawn(store: Arc<dyn LocaleStore>) -> Self {
        let (job_tx, job_rx) = crossbeam_channel::unbounded::<Job>();
        let (event_tx, event_rx) = crossbeam_channel::unbounded();

        let handle = thread::spawn(move || {
            tracing::debug!("Preference worker started");
            for job in job_rx {
                let event = match job {
                    Job::Load => PreferenceEvent::Loaded(store.get()),
                    Job::Save(code) => PreferenceEvent::Saved(store.set(code).map(|()| code)),
                };
                // The receiver is gone once the UI has shut down.
                if event_tx.send(event).is_err() {
                    break;
                }
            }
            tracing::debug!("Preference worker stopped");
        });

        Self {
            jobs: Some(job_tx),
            events: event_rx,
            handle: Some(handle),
        }
    }

    pub fn load(&self) {
        self.submit(Job::Load);
    }

    pub fn save(&self, code: LanguageCode) {
        self.submit(Job::Save(code));
    }

    fn submit(&self, job: Job) {
        if let Some(jobs) = &self.jobs
            && jobs.send(job).is_err()
        {
            tracing::error!("Preference worker is no longer running");
        }
    }

    /// Returns a finished job's result without blocking.
    pub fn try_next(&self) -> Option<PreferenceEvent> {
        match self.events.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Blocks until the next result arrives, or the worker has exited.
    #[cfg(test)]
    fn next_blocking(&self) -> Option<PreferenceEvent> {
        self.events.recv().ok()
    }
}

impl Drop for PreferenceWorker {
    fn drop(&mut self) {
        // Closing the job channel lets the thread drain pending writes and exit.
        self.jobs.take();
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            tracing::error!("Preference worker panicked");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryLocaleStore;

    #[test]
    fn load_reports_stored_value() {
        let store = Arc::new(MemoryLocaleStore::with_value(LanguageCode::Hi));
        let worker = PreferenceWorker::spawn(store);

        worker.load();

        assert!(matches!(
            worker.next_blocking(),
            Some(PreferenceEvent::Loaded(Some(LanguageCode::Hi)))
        ));
    }

    #[test]
    fn save_persists_and_reports_code() {
        let store = Arc::new(MemoryLocaleStore::new());
        let worker = PreferenceWorker::spawn(store.clone());

        worker.save(LanguageCode::Ta);

        assert!(matches!(
            worker.next_blocking(),
            Some(PreferenceEvent::Saved(Ok(LanguageCode::Ta)))
        ));
        assert_eq!(store.get(), Some(LanguageCode::Ta));
    }

    #[test]
    fn save_failure_is_reported() {
        let worker = PreferenceWorker::spawn(Arc::new(MemoryLocaleStore::unavailable()));

        worker.save(LanguageCode::Pa);

        assert!(matches!(
            worker.next_blocking(),
            Some(PreferenceEvent::Saved(Err(StoreError::Unavailable)))
        ));
    }

    #[test]
    fn drop_flushes_pending_writes() {
        let store = Arc::new(MemoryLocaleStore::new());
        {
            let worker = PreferenceWorker::spawn(store.clone());
            worker.save(LanguageCode::Pa);
        }
        assert_eq!(store.get(), Some(LanguageCode::Pa));
    }

    #[test]
    fn try_next_does_not_block_when_idle() {
        let worker = PreferenceWorker::spawn(Arc::new(MemoryLocaleStore::new()));
        assert!(worker.try_next().is_none());
    }
}
