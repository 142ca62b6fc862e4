//! Helpers shared by the list pages.

use contracts::shared::filter::Resource;
use contracts::shared::query::{RecordAction, ResourceQuery};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// How long an action notice stays on screen.
const NOTICE_TIMEOUT_MS: u32 = 3_000;

/// Routes a button press through the query seam. A refused action is
/// logged and shown as a notice that clears itself.
pub fn dispatch_action<R, Q>(source: &Q, action: RecordAction, notice: RwSignal<Option<String>>)
where
    R: Resource,
    Q: ResourceQuery<R>,
{
    let action_name = action.name();
    match source.apply(action) {
        Ok(()) => {
            log::info!("{} {}: done", R::RESOURCE, action_name);
            notice.set(None);
        }
        Err(err) => {
            log::warn!("{} {}: {}", R::RESOURCE, action_name, err);
            let message = err.to_string();
            notice.set(Some(message.clone()));
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                // a newer notice keeps its own timer
                if notice.try_get_untracked().flatten().as_deref() == Some(message.as_str()) {
                    let _ = notice.try_set(None);
                }
            });
        }
    }
}

/// JSON dump of a record for the console log when its modal opens.
pub fn record_json<R: Resource + serde::Serialize>(record: &R) -> String {
    serde_json::to_string(record).unwrap_or_else(|_| record.record_id().to_string())
}
