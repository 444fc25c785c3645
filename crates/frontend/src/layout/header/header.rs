use crate::shared::icons::icon;
use leptos::prelude::*;

const GITHUB_URL: &str = "https://github.com/Sid2318/DocuMate";

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header data-zone="header" class="header navbar">
            <div class="header__content">
                <a class="header__title navbar__brand" href="#home">
                    {icon("book")}
                    " DocuMate"
                </a>
            </div>
            <nav class="header__actions navbar__links">
                <a class="navbar__link" href="#home">{icon("home")}" Home"</a>
                <a class="navbar__link" href="#about">{icon("info")}" About"</a>
                <a class="navbar__link" href=GITHUB_URL target="_blank" rel="noopener noreferrer">
                    {icon("github")}
                    " GitHub"
                </a>
            </nav>
        </header>
    }
}
