use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::pages::{ThemeSelector, VendorDashboard};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/gallery-frontend.css"/>
        <Title text="Theme Gallery"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1.0"/>
        <Router>
            <nav class="navbar">
                <span class="brand">"Theme Gallery"</span>
                <A href="/">"Theme Selection"</A>
                <A href="/vendor">"Vendor Dashboard"</A>
            </nav>
            <Routes fallback=move || view! { <div>"404 - Not Found"</div> }>
                <Route path=path!("/") view=ThemeSelector/>
                <Route path=path!("/vendor") view=VendorDashboard/>
            </Routes>
        </Router>
    }
}
