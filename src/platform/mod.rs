//! Target specific plumbing: delays, photo picking and the service worker.

use std::sync::{Arc, Mutex};

use crate::data::SelectedPhoto;

#[cfg(not(target_arch = "wasm32"))]
mod native;
#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{register_service_worker, sleep};
#[cfg(target_arch = "wasm32")]
pub use web::{PhotoPicker, register_service_worker, sleep};

/// Photos picked asynchronously (browser file input), drained by the app every frame
pub type PhotoInbox = Arc<Mutex<Vec<SelectedPhoto>>>;

pub fn push_photo(inbox: &PhotoInbox, photo: SelectedPhoto) {
    match inbox.lock() {
        Ok(mut pending) => pending.push(photo),
        Err(e) => log::error!("Photo inbox poisoned: {}", e),
    }
}

/// Builds the value on first use and hands back the same one afterwards.
/// A failed build leaves the slot empty so the next call tries again.
pub fn reuse_or_build<P>(slot: &mut Option<P>, build: impl FnOnce() -> Option<P>) -> Option<&P> {
    if slot.is_none() {
        *slot = build();
    }
    slot.as_ref()
}

pub fn take_photos(inbox: &PhotoInbox) -> Vec<SelectedPhoto> {
    inbox
        .lock()
        .map(|mut pending| std::mem::take(&mut *pending))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picker_is_built_once_and_reused() {
        let mut slot = None;
        let mut builds = 0;
        for _ in 0..3 {
            let picker = reuse_or_build(&mut slot, || {
                builds += 1;
                Some(builds)
            });
            assert_eq!(picker, Some(&1));
        }
        assert_eq!(builds, 1);
    }

    #[test]
    fn failed_build_is_retried_on_next_open() {
        let mut slot: Option<u8> = None;
        assert_eq!(reuse_or_build(&mut slot, || None), None);
        assert_eq!(reuse_or_build(&mut slot, || Some(4)), Some(&4));
    }

    #[test]
    fn inbox_drains_in_arrival_order() {
        let inbox = PhotoInbox::default();
        push_photo(&inbox, SelectedPhoto::new("a.png", vec![1u8]));
        push_photo(&inbox, SelectedPhoto::new("b.png", vec![2u8]));

        let names: Vec<_> = take_photos(&inbox).into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
        assert!(take_photos(&inbox).is_empty());
    }
}
