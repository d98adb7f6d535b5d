//! Off-thread execution for the `_async` operations.
//!
//! # Design
//! Every async operation is the blocking one submitted as a work item to a
//! tokio blocking pool. `Executor::Shared` uses a process-wide runtime built on
//! first use and kept for the life of the process; `Executor::Handle` submits
//! to a runtime the caller already owns. Work is submitted when the `_async`
//! method is called, not when the returned future is first polled, and runs to
//! completion even if the future is dropped.

use std::future::Future;
use std::pin::Pin;
use std::sync::OnceLock;
use std::task::{ready, Context, Poll};

use tokio::runtime::{Handle, Runtime};
use tokio::task::JoinHandle;

use crate::error::ApiError;

static SHARED: OnceLock<Result<Runtime, String>> = OnceLock::new();

fn shared_handle() -> Result<Handle, ApiError> {
    SHARED
        .get_or_init(|| {
            tokio::runtime::Builder::new_multi_thread()
                .thread_name("resource-api")
                .enable_all()
                .build()
                .map_err(|e| e.to_string())
        })
        .as_ref()
        .map(|rt| rt.handle().clone())
        .map_err(|e| ApiError::Executor(format!("shared runtime unavailable: {e}")))
}

/// Where `_async` operations run.
#[derive(Debug, Clone, Default)]
pub enum Executor {
    /// The process-wide pool.
    #[default]
    Shared,
    /// A caller-supplied runtime.
    Handle(Handle),
}

impl Executor {
    /// Submit `work` to the blocking pool.
    pub fn spawn<T, F>(&self, work: F) -> Pending<T>
    where
        F: FnOnce() -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let handle = match self {
            Executor::Shared => shared_handle(),
            Executor::Handle(handle) => Ok(handle.clone()),
        };
        match handle {
            Ok(handle) => Pending {
                state: State::Running(handle.spawn_blocking(work)),
            },
            Err(e) => Pending {
                state: State::Failed(Some(e)),
            },
        }
    }
}

impl From<Handle> for Executor {
    fn from(handle: Handle) -> Self {
        Executor::Handle(handle)
    }
}

/// Result of an `_async` operation. Resolves to what the blocking call returned.
#[must_use = "the operation runs regardless, but its result is only observable by awaiting"]
pub struct Pending<T> {
    state: State<T>,
}

enum State<T> {
    Running(JoinHandle<Result<T, ApiError>>),
    Failed(Option<ApiError>),
}

impl<T> Future for Pending<T> {
    type Output = Result<T, ApiError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match &mut self.get_mut().state {
            State::Running(handle) => match ready!(Pin::new(handle).poll(cx)) {
                Ok(result) => Poll::Ready(result),
                Err(e) => Poll::Ready(Err(ApiError::Executor(e.to_string()))),
            },
            State::Failed(err) => Poll::Ready(Err(err
                .take()
                .unwrap_or_else(|| ApiError::Executor("polled after completion".to_string())))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shared_pool_runs_outside_any_runtime() {
        let pending = Executor::Shared.spawn(|| Ok(21 * 2));
        let value = shared_handle().unwrap().block_on(pending).unwrap();
        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn caller_handle_runs_work() {
        let executor = Executor::from(Handle::current());
        let value = executor
            .spawn(|| Ok(std::thread::current().name().map(str::to_string)))
            .await
            .unwrap();
        assert_ne!(value.as_deref(), Some("resource-api"));
    }

    #[tokio::test]
    async fn shared_pool_uses_named_threads() {
        let name = Executor::Shared
            .spawn(|| Ok(std::thread::current().name().map(str::to_string)))
            .await
            .unwrap();
        assert_eq!(name.as_deref(), Some("resource-api"));
    }

    #[tokio::test]
    async fn errors_pass_through_unchanged() {
        let err = Executor::Shared
            .spawn::<(), _>(|| Err(ApiError::Executor("boom".to_string())))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "executor failure: boom");
    }

    #[tokio::test]
    async fn panics_become_executor_errors() {
        let err = Executor::Shared
            .spawn::<(), _>(|| panic!("work item panicked"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Executor(_)));
    }
}
