//! Ask Questions - View Component

use super::controller::{handle_question_key, submit_question};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::backend::HttpBackend;
use crate::shared::icons::{icon, icon_sized};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u102_ask_question::AskQuestion;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn AskQuestionPanel() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = ctx.session;

    let displayed = Memo::new(move |_| session.with(|s| s.displayed_answer().cloned()));
    let question = Memo::new(move |_| session.with(|s| s.question.clone()));

    let submit = move || {
        wasm_bindgen_futures::spawn_local(async move {
            submit_question(&session, &HttpBackend).await;
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit();
    };

    // prevent_default also stops the implicit form submit, so Enter sends once
    let on_keydown = move |ev: web_sys::KeyboardEvent| {
        if let Some(submission) =
            handle_question_key(session, HttpBackend, &ev.key(), ev.shift_key())
        {
            ev.prevent_default();
            wasm_bindgen_futures::spawn_local(async move {
                submission.await;
            });
        }
    };

    view! {
        <div class="card ask-card">
            <div class="card__header">
                <h5 class="card__title">
                    {icon("book")}
                    " "
                    {AskQuestion::display_name()}
                </h5>
            </div>
            <div class="card__body card__body--column">
                <div class="chat-container">
                    {move || match displayed.get() {
                        Some(result) => {
                            let context = result.visible_context().map(str::to_string);
                            view! {
                                <div class="answer-container">
                                    <h5 class="answer-container__title">"Answer:"</h5>
                                    <p style="white-space: pre-line;">{result.answer.clone()}</p>
                                    {context
                                        .map(|c| {
                                            view! {
                                                <div class="answer-container__context">
                                                    <h6 class="text-muted">"Source Context:"</h6>
                                                    <p class="small text-muted">{c}</p>
                                                </div>
                                            }
                                        })}
                                </div>
                            }
                                .into_any()
                        }
                        None => {
                            view! {
                                <div class="chat-placeholder text-muted">
                                    {icon_sized("book", 48)}
                                    <p>"Upload documents and ask questions to get started"</p>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>

                <form class="ask-form" on:submit=on_submit>
                    <input
                        type="text"
                        class="question-input"
                        placeholder="Ask a question..."
                        prop:value=move || question.get()
                        on:input=move |ev| session.update(|s| s.set_question(event_target_value(&ev)))
                        on:keydown=on_keydown
                    />
                    <button type="submit" class="button button--success" aria-label="Ask">
                        {icon("send")}
                    </button>
                </form>
            </div>
        </div>
    }
}
