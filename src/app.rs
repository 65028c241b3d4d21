use leptos::*;
use leptos_router::*;

use crate::api::ApiClient;
use crate::components::layout::Layout;
use crate::components::{DeclarationForm, RecordsPage};
use crate::config::AppConfig;

/// Main application component with routing
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // One client for the whole app, built from the startup config
    provide_context(ApiClient::new(&config));

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Layout>
                    <Route path="" view=|| view! { <Redirect path="/declaration" /> } />
                    <Route path="declaration" view=DeclarationForm />
                    <Route path="records" view=RecordsPage />
                </Route>
            </Routes>
        </Router>
    }
}
