use leptos::*;
use leptos_router::*;

/// Layout component with header and content outlet
#[component]
pub fn Layout() -> impl IntoView {
    view! {
        <div class="layout">
            <Header />
            <main class="main-content">
                <Outlet />
            </main>
        </div>
    }
}

/// Header with the app title and a navigation menu
#[component]
fn Header() -> impl IntoView {
    let (menu_open, set_menu_open) = create_signal(false);
    let location = use_location();

    let is_active = move |path: &str| location.pathname.get().starts_with(path);
    let close_menu = move |_: ev::MouseEvent| set_menu_open.set(false);

    view! {
        <header class="header">
            <div class="header-content">
                <div class="brand">
                    <img src="/healthcheck-icon.svg" alt="HealthCheck" class="brand-icon" />
                    <h1 class="brand-title">"HealthCheck"</h1>
                </div>

                <div class="menu">
                    <button
                        class="menu-toggle"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open.get().to_string()
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "Close" } else { "Menu" }}
                    </button>

                    <Show when=move || menu_open.get()>
                        // Following a link closes the menu
                        <div class="menu-dropdown" on:click=close_menu>
                            <A
                                href="/declaration"
                                class=move || if is_active("/declaration") { "menu-link active" } else { "menu-link" }
                            >
                                "Submit Declaration"
                            </A>
                            <A
                                href="/records"
                                class=move || if is_active("/records") { "menu-link active" } else { "menu-link" }
                            >
                                "View Records"
                            </A>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
