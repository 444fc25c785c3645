//! AlertBanner - View Component

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

use super::Severity;

fn intent(severity: Severity) -> MessageBarIntent {
    match severity {
        Severity::Success => MessageBarIntent::Success,
        Severity::Warning => MessageBarIntent::Warning,
        Severity::Danger => MessageBarIntent::Error,
    }
}

#[component]
#[allow(non_snake_case)]
pub fn AlertBanner() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let session = ctx.session;
    let visible = Memo::new(move |_| session.with(|s| s.banner.visible_notification().cloned()));

    move || {
        visible
            .get()
            .map(|notification| {
                view! {
                    <div class=format!("alert {}", notification.severity.css_class()) role="alert">
                        <MessageBar intent=intent(notification.severity)>
                            <div style="display: flex; align-items: center; justify-content: space-between; width: 100%; gap: 12px;">
                                <span>{notification.message.clone()}</span>
                                <button
                                    class="button button--ghost"
                                    aria-label="Close"
                                    on:click=move |_| session.update(|s| s.banner.dismiss())
                                >
                                    {icon("close")}
                                </button>
                            </div>
                        </MessageBar>
                    </div>
                }
            })
    }
}
