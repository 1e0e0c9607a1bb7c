use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

/// Returns a future that suspends exactly once before completing.
///
/// This is the smallest cooperative pause: it wakes itself immediately, so any executor
/// gets a chance to run other ready work before the caller resumes. Hosts that want a
/// timed pause should pass their own timer (e.g. a runtime `sleep`) to
/// [`crate::WindowedSeq::load_all_async`] instead.
pub fn yield_now() -> YieldNow {
    YieldNow { yielded: false }
}

#[derive(Debug)]
#[must_use = "futures do nothing unless awaited"]
pub struct YieldNow {
    yielded: bool,
}

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.yielded {
            return Poll::Ready(());
        }
        self.yielded = true;
        cx.waker().wake_by_ref();
        Poll::Pending
    }
}
