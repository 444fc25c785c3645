use chrono::Datelike;
use leptos::prelude::*;

fn copyright_line(year: i32) -> String {
    format!("© {} DocuMate RAG Agent | All rights reserved", year)
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Local::now().year();

    view! {
        <footer data-zone="footer" class="app-footer">
            <p class="app-footer__text">{copyright_line(year)}</p>
        </footer>
    }
}
