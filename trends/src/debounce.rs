use futures::future::BoxFuture;
use futures::FutureExt;
use log::trace;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Delays values until input settles.
///
/// Every `schedule` call supersedes the pending one. A scheduled future resolves to
/// `Some(value)` once `delay` has passed with no newer value scheduled, and to `None`
/// when it was superseded or cancelled in the meantime.
pub struct Debouncer<T> {
    delay: Duration,
    generation: Arc<AtomicU64>,
    _value_type: PhantomData<fn(T)>,
}

impl<T> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Debouncer {
            delay: self.delay,
            generation: self.generation.clone(),
            _value_type: PhantomData,
        }
    }
}

impl<T> Default for Debouncer<T>
where
    T: 'static + Send,
{
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl<T> Debouncer<T>
where
    T: 'static + Send,
{
    pub fn new(delay: Duration) -> Self {
        Debouncer {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
            _value_type: PhantomData,
        }
    }

    pub fn schedule(&self, value: T) -> BoxFuture<'static, Option<T>> {
        let scheduled = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = self.generation.clone();
        // Deadline is taken now so the window starts at scheduling, not at first poll.
        let deadline = Instant::now() + self.delay;
        async move {
            tokio::time::sleep_until(deadline).await;
            if generation.load(Ordering::SeqCst) == scheduled {
                Some(value)
            } else {
                trace!("Debounced value {} superseded", scheduled);
                None
            }
        }
        .boxed()
    }

    /// Supersedes the pending value, if any.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn settled_value_resolves_after_delay() {
        let debouncer = Debouncer::new(DEFAULT_DEBOUNCE);
        let start = Instant::now();

        assert_eq!(debouncer.schedule("rust").await, Some("rust"));
        assert_eq!(start.elapsed(), DEFAULT_DEBOUNCE);
    }

    #[tokio::test(start_paused = true)]
    async fn newer_value_supersedes_pending() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let start = Instant::now();

        let first = debouncer.schedule("ru");
        tokio::time::sleep(Duration::from_millis(200)).await;
        let second = debouncer.schedule("rust");
        let (first, second) = tokio::join!(first, second);

        assert_eq!(first, None);
        assert_eq!(second, Some("rust"));
        assert_eq!(start.elapsed(), Duration::from_millis(700));
    }

    #[tokio::test(start_paused = true)]
    async fn only_last_of_burst_resolves() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let mut pending = Vec::new();
        for typed in ["P", "Po", "Pol", "Pola", "Polan", "Poland"] {
            pending.push(debouncer.schedule(typed.to_string()));
            tokio::time::sleep(Duration::from_millis(100)).await;
        }

        let resolved: Vec<String> = futures::future::join_all(pending).await.into_iter().flatten().collect();

        assert_eq!(resolved, vec!["Poland".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn sequential_settled_values() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        assert_eq!(debouncer.schedule(1).await, Some(1));
        assert_eq!(debouncer.schedule(2).await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_supersedes_pending() {
        let debouncer = Debouncer::new(Duration::from_millis(500));
        let pending = debouncer.schedule(1);
        debouncer.clone().cancel();
        assert_eq!(pending.await, None);
    }
}
