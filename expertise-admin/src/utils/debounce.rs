//! Trailing-edge debouncer
//!
//! Values pushed in quick succession collapse into one callback carrying the
//! last value, fired once the input has been quiet for `delay`.

use std::future::Future;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

pub struct Debouncer<T> {
    tx: mpsc::UnboundedSender<T>,
    handle: JoinHandle<()>,
}

impl<T: Send + 'static> Debouncer<T> {
    /// Spawn the debounce loop on the current runtime
    pub fn spawn<F, Fut>(delay: Duration, on_settled: F) -> Self
    where
        F: Fn(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<T>();

        let handle = tokio::spawn(async move {
            let mut pending: Option<T> = None;
            let mut deadline: Option<Instant> = None;

            loop {
                let sleep_until = deadline.unwrap_or_else(|| Instant::now() + Duration::from_secs(3600));

                tokio::select! {
                    _ = tokio::time::sleep_until(sleep_until), if deadline.is_some() => {
                        deadline = None;
                        if let Some(value) = pending.take() {
                            on_settled(value).await;
                        }
                    }

                    received = rx.recv() => {
                        match received {
                            Some(value) => {
                                pending = Some(value);
                                deadline = Some(Instant::now() + delay);
                            }
                            None => {
                                // 发送端已关闭：丢弃未到期的输入
                                tracing::debug!("Debouncer input closed");
                                break;
                            }
                        }
                    }
                }
            }
        });

        Self { tx, handle }
    }

    /// Record a new value and restart the quiet window
    pub fn push(&self, value: T) {
        if self.tx.send(value).is_err() {
            tracing::warn!("Debouncer task is gone, input dropped");
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[tokio::test(start_paused = true)]
    async fn test_debouncer_fires_once_with_last_value() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let debouncer = Debouncer::spawn(ms(500), move |v: String| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(v);
            }
        });

        for text in ["b", "bn", "bnp"] {
            debouncer.push(text.to_string());
            tokio::time::sleep(ms(100)).await;
        }
        assert!(seen.lock().unwrap().is_empty());

        tokio::time::sleep(ms(600)).await;
        assert_eq!(*seen.lock().unwrap(), vec!["bnp".to_string()]);

        debouncer.push("boa".to_string());
        tokio::time::sleep(ms(600)).await;
        assert_eq!(seen.lock().unwrap().len(), 2);
    }
}
