pub mod footer;
pub mod global_context;
pub mod header;

use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |              Header (navbar)              |
/// +------------------------------------------+
/// |               main content                |
/// +------------------------------------------+
/// |                  Footer                   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header />
            <main class="main-content">
                {children()}
            </main>
            <footer::Footer />
        </div>
    }
}
