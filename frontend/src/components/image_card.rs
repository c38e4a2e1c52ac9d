use gallery_shared::ThemeImage;
use leptos::prelude::*;

#[component]
pub fn ImageCard(image: ThemeImage) -> impl IntoView {
    let alt = format!("{} - {}", image.website_type, image.design_tone);

    view! {
        <div class="image-card">
            <img src=image.image_url.clone() alt=alt/>
            <div class="image-card-overlay">
                <span class="tag">{image.website_type.as_str()}</span>
                <span class="tag">{image.design_tone.as_str()}</span>
            </div>
        </div>
    }
}
