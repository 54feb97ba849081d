//! One-shot document title assignment.
//!
//! The hosting shell owns a [`TitleOnce`] and calls [`TitleOnce::apply`] after
//! mounting the page. Later calls are no-ops, so re-mounts or repeated shell
//! hooks never reassign the title.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::content::PAGE_TITLE;

/// Anything that can receive a document title.
pub trait TitleSink {
    fn set_title(&self, title: &str);
}

/// Guard that lets the page title through exactly once.
#[derive(Debug, Default)]
pub struct TitleOnce {
    applied: AtomicBool,
}

impl TitleOnce {
    pub const fn new() -> Self {
        Self {
            applied: AtomicBool::new(false),
        }
    }

    /// Assign [`PAGE_TITLE`] to `sink` unless already done.
    ///
    /// Returns `true` when this call performed the assignment.
    pub fn apply<S: TitleSink + ?Sized>(&self, sink: &S) -> bool {
        if self
            .applied
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::trace!("page title already assigned");
            return false;
        }
        sink.set_title(PAGE_TITLE);
        tracing::debug!(title = PAGE_TITLE, "page title assigned");
        true
    }
}
