use gallery_shared::{DesignTone, ThemeImage, WebsiteType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::ImageCard;
use crate::services::api;

/// End-user browsing view: pick a website type and a design tone, see the
/// approved themes for that combination.
#[component]
pub fn ThemeSelector() -> impl IntoView {
    let (website_type, set_website_type) = signal(None::<WebsiteType>);
    let (design_tone, set_design_tone) = signal(None::<DesignTone>);
    let (images, set_images) = signal(Vec::<ThemeImage>::new());
    let (loading, set_loading) = signal(false);

    // Only fetch once both selections are made; otherwise fall back to the
    // prompt state with an empty result list.
    let load_images = move |wt: Option<WebsiteType>, dt: Option<DesignTone>| {
        let (Some(website_type), Some(design_tone)) = (wt, dt) else {
            set_images.set(Vec::new());
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_approved_images(website_type, design_tone).await {
                Ok(list) => set_images.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching images: {}", e).into())
                }
            }
            set_loading.set(false);
        });
    };

    let both_selected = move || website_type.get().is_some() && design_tone.get().is_some();

    view! {
        <div class="container theme-selector">
            <div class="header">
                <h1>"Theme Selection"</h1>
                <p>"Choose your website preferences below"</p>
            </div>

            <div class="filter-panel">
                <label>
                    "Website Type"
                    <select on:change=move |ev| {
                        if let Some(select) = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                        {
                            let parsed = select.value().parse::<WebsiteType>().ok();
                            set_website_type.set(parsed);
                            load_images(parsed, design_tone.get());
                        }
                    }>
                        <option value="" selected=move || website_type.get().is_none()>
                            "Select website type..."
                        </option>
                        {WebsiteType::ALL
                            .iter()
                            .map(|t| {
                                let t = *t;
                                view! {
                                    <option
                                        value=t.as_str()
                                        selected=move || website_type.get() == Some(t)
                                    >
                                        {t.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Design Tone"
                    <select on:change=move |ev| {
                        if let Some(select) = ev
                            .target()
                            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                        {
                            let parsed = select.value().parse::<DesignTone>().ok();
                            set_design_tone.set(parsed);
                            load_images(website_type.get(), parsed);
                        }
                    }>
                        <option value="" selected=move || design_tone.get().is_none()>
                            "Select design tone..."
                        </option>
                        {DesignTone::ALL
                            .iter()
                            .map(|t| {
                                let t = *t;
                                view! {
                                    <option
                                        value=t.as_str()
                                        selected=move || design_tone.get() == Some(t)
                                    >
                                        {t.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
            </div>

            <Show when=move || !both_selected()>
                <div class="prompt">
                    "Select a website type and a design tone to browse themes."
                </div>
            </Show>

            <Show when=move || loading.get()>
                <div class="loading">"Loading themes..."</div>
            </Show>

            <Show when=move || both_selected() && !loading.get()>
                <Show
                    when=move || !images.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="empty">
                                "No approved themes match this combination yet."
                            </div>
                        }
                    }
                >
                    <div class="image-grid">
                        <For
                            each=move || images.get()
                            key=|image| image.id
                            children=move |image| {
                                view! { <ImageCard image=image/> }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
