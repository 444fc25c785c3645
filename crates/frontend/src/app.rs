use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::notification::AlertBanner;
use crate::usecases::u101_upload_documents::UploadDocumentsPanel;
use crate::usecases::u102_ask_question::AskQuestionPanel;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the session store to the whole app via context.
    provide_context(AppGlobalContext::new());

    view! {
        <Shell>
            <div class="container">
                <AlertBanner />

                <div class="page-header">
                    <h1 class="page-header__title">"📚 DocuMate - RAG Agent"</h1>
                    <p class="page-header__subtitle text-muted">
                        "Upload documents and ask questions to get AI-powered answers"
                    </p>
                </div>

                <div class="panels">
                    <div class="panels__upload">
                        <UploadDocumentsPanel />
                    </div>
                    <div class="panels__ask">
                        <AskQuestionPanel />
                    </div>
                </div>
            </div>
        </Shell>
    }
}
