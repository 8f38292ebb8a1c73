//! Tracing-backed notification sink.

use crate::application::services::{NotificationSink, Toast, ToastKind};

/// Renders toasts as tracing events.
///
/// Embedders without a toast surface still get the failure messages in
/// their logs; a host adapter would forward to its real toast system.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationSink;

impl NotificationSink for TracingNotificationSink {
    fn show(&self, toast: Toast) {
        match toast.kind {
            ToastKind::Failure => {
                tracing::warn!(toast_id = %toast.id, "{}", toast.message);
            }
            ToastKind::Success => {
                tracing::info!(toast_id = %toast.id, "{}", toast.message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_both_kinds_without_a_subscriber() {
        // Emitting without an installed subscriber must be a no-op, not a
        // panic; the sink is used before telemetry init in some embedders.
        let sink = TracingNotificationSink;
        sink.show(Toast::failure("Couldn't find next/previous channel"));
        sink.show(Toast::success("Connected"));
    }

    #[test]
    fn test_each_toast_gets_a_distinct_id() {
        let a = Toast::failure("x");
        let b = Toast::failure("x");
        assert_ne!(a.id, b.id);
    }
}
