use gallery_shared::{DesignTone, ImageStatus, NewThemeImage, ThemeImage, ThemeImageUpdate, WebsiteType};
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::services::api;

/// Vendor management view: full CRUD over the catalog, pending images
/// included. Every mutation is followed by a full re-fetch of the list.
#[component]
pub fn VendorDashboard() -> impl IntoView {
    let (images, set_images) = signal(Vec::<ThemeImage>::new());
    let (show_form, set_show_form) = signal(false);
    let (edit_image, set_edit_image) = signal(None::<ThemeImage>);

    let (form_url, set_form_url) = signal(String::new());
    let (form_website_type, set_form_website_type) = signal(None::<WebsiteType>);
    let (form_design_tone, set_form_design_tone) = signal(None::<DesignTone>);

    let refresh = move || {
        spawn_local(async move {
            match api::fetch_vendor_images().await {
                Ok(list) => set_images.set(list),
                Err(e) => {
                    web_sys::console::error_1(&format!("Error fetching images: {}", e).into())
                }
            }
        });
    };

    // Initial load
    refresh();

    let open_add = move || {
        set_edit_image.set(None);
        set_form_url.set(String::new());
        set_form_website_type.set(None);
        set_form_design_tone.set(None);
        set_show_form.set(true);
    };

    let open_edit = move |image: ThemeImage| {
        set_form_url.set(image.image_url.clone());
        set_form_website_type.set(Some(image.website_type));
        set_form_design_tone.set(Some(image.design_tone));
        set_edit_image.set(Some(image));
        set_show_form.set(true);
    };

    let submit = move || {
        let url = form_url.get();
        let (Some(website_type), Some(design_tone)) =
            (form_website_type.get(), form_design_tone.get())
        else {
            return;
        };
        if url.is_empty() {
            return;
        }
        let editing = edit_image.get();

        spawn_local(async move {
            let result = match editing {
                Some(image) => api::update_image(
                    image.id,
                    &ThemeImageUpdate {
                        image_url: Some(url),
                        website_type: Some(website_type),
                        design_tone: Some(design_tone),
                        status: None,
                    },
                )
                .await
                .map(|_| ()),
                None => api::add_image(&NewThemeImage {
                    image_url: url,
                    website_type,
                    design_tone,
                })
                .await
                .map(|_| ()),
            };

            if let Err(e) = result {
                web_sys::console::error_1(&format!("Error saving image: {}", e).into());
            }
            set_show_form.set(false);
            set_edit_image.set(None);
            refresh();
        });
    };

    let delete = move |id: i64| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Are you sure you want to delete this image?").ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        spawn_local(async move {
            if let Err(e) = api::delete_image(id).await {
                web_sys::console::error_1(&format!("Error deleting image: {}", e).into());
            }
            refresh();
        });
    };

    let toggle_status = move |image: ThemeImage| {
        let next = match image.status {
            ImageStatus::Pending => ImageStatus::Approved,
            ImageStatus::Approved => ImageStatus::Pending,
        };
        spawn_local(async move {
            let update = ThemeImageUpdate {
                status: Some(next),
                ..Default::default()
            };
            if let Err(e) = api::update_image(image.id, &update).await {
                web_sys::console::error_1(&format!("Error updating status: {}", e).into());
            }
            refresh();
        });
    };

    view! {
        <div class="container vendor-dashboard">
            <div class="header">
                <h1>"Vendor Dashboard"</h1>
                <button class="add-btn" on:click=move |_| open_add()>
                    "+ Add New Image"
                </button>
            </div>

            <div class="image-grid">
                <For
                    each=move || images.get()
                    key=|image| (image.id, image.upload_date)
                    children=move |image| {
                        let status_class = match image.status {
                            ImageStatus::Approved => "status-chip approved",
                            ImageStatus::Pending => "status-chip pending",
                        };
                        let toggle_label = match image.status {
                            ImageStatus::Approved => "Mark Pending",
                            ImageStatus::Pending => "Approve",
                        };
                        let edit_target = image.clone();
                        let toggle_target = image.clone();
                        let image_id = image.id;
                        view! {
                            <div class="image-card vendor">
                                <img
                                    src=image.image_url.clone()
                                    alt=format!("{} - {}", image.website_type, image.design_tone)
                                />
                                <div class="image-card-body">
                                    <span class=status_class>{image.status.as_str()}</span>
                                    <span class="tag">{image.website_type.as_str()}</span>
                                    <span class="tag">{image.design_tone.as_str()}</span>
                                    <div class="card-meta">
                                        {image.upload_date.format("%Y-%m-%d %H:%M").to_string()}
                                    </div>
                                    <div class="card-actions">
                                        <button on:click=move |_| toggle_status(toggle_target.clone())>
                                            {toggle_label}
                                        </button>
                                        <button on:click=move |_| open_edit(edit_target.clone())>
                                            "Edit"
                                        </button>
                                        <button class="danger" on:click=move |_| delete(image_id)>
                                            "Delete"
                                        </button>
                                    </div>
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Show when=move || show_form.get()>
                <div class="modal-overlay">
                    <div class="modal">
                        <h2>
                            {move || {
                                if edit_image.get().is_some() { "Edit Image" } else { "Add New Image" }
                            }}
                        </h2>
                        <label>
                            "Image URL"
                            <input
                                type="text"
                                prop:value=move || form_url.get()
                                on:input=move |ev| {
                                    if let Some(input) = ev
                                        .target()
                                        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                                    {
                                        set_form_url.set(input.value());
                                    }
                                }
                            />
                        </label>
                        <label>
                            "Website Type"
                            <select on:change=move |ev| {
                                if let Some(select) = ev
                                    .target()
                                    .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
                                {
                                    set_form_website_type.set(select.value().parse().ok());
                                }
                            }>
                                <option value="" selected=move || form_website_type.get().is_none()>
                                    "Select website type..."
                                </option>
                                {WebsiteType::ALL
                                    .iter()
                                    .map(|t| {
                                        let t = *t;
                                        view! {
                                            <option
                                                value=t.as_str()
                                                selected=move || form_website_type.get() == Some(t)
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
                                    set_form_design_tone.set(select.value().parse().ok());
                                }
                            }>
                                <option value="" selected=move || form_design_tone.get().is_none()>
                                    "Select design tone..."
                                </option>
                                {DesignTone::ALL
                                    .iter()
                                    .map(|t| {
                                        let t = *t;
                                        view! {
                                            <option
                                                value=t.as_str()
                                                selected=move || form_design_tone.get() == Some(t)
                                            >
                                                {t.as_str()}
                                            </option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        <div class="modal-actions">
                            <button on:click=move |_| set_show_form.set(false)>"Cancel"</button>
                            <button class="primary" on:click=move |_| submit()>
                                {move || if edit_image.get().is_some() { "Update" } else { "Add" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
