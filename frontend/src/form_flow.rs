//! Submit wiring shared by the three form screens.

use dioxus::prelude::*;
use dioxus::core::Task;
use eco_core::{FormRole, SubmitOutcome};
use std::time::Duration;
use crate::app::SiteHandle;
use crate::platform;
use crate::widgets::banner_element_id;

/// Slot for the pending banner-hide task of one mounted form. Unmounting
/// cancels the task and invalidates its ticket.
pub fn use_banner_timer(site: SiteHandle, role: FormRole) -> Signal<Option<Task>> {
    let mut pending = use_signal(|| None::<Task>);
    let mut site = site;
    use_drop(move || {
        if let Ok(mut slot) = pending.try_write() {
            if let Some(task) = slot.take() {
                task.cancel();
            }
        }
        if let Ok(mut s) = site.try_write() {
            s.form_mut(role).banner_mut().cancel_pending();
        }
    });
    pending
}

/// Runs one validation pass. On success the banner is scrolled to and hidden
/// after the configured delay; an earlier pending hide is cancelled first.
pub fn submit(mut site: SiteHandle, role: FormRole, mut pending: Signal<Option<Task>>) {
    let outcome = site.write().submit(role, platform::today());
    let SubmitOutcome::Accepted(ticket) = outcome else {
        return;
    };

    if let Some(previous) = pending.write().take() {
        previous.cancel();
    }

    let delay = site.read().config().banner_hide_delay;
    let task = spawn(async move {
        // Banner is rendered once the handler has returned.
        platform::sleep(Duration::ZERO).await;
        if site.write().form_mut(role).banner_mut().take_scroll_request() {
            platform::scroll_into_view(&banner_element_id(role));
        }
        platform::sleep(delay).await;
        site.write().hide_banner(role, ticket);
    });
    pending.set(Some(task));
}
