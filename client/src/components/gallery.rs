//! Gallery of saved memes.
//!
//! Loads `GET /memes` on mount and again whenever `GalleryState::refresh_seq`
//! changes. Clicking a thumbnail loads that meme into the editor.

use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::state::gallery::GalleryState;
use crate::util::object_url;

#[component]
pub fn Gallery() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let editor = expect_context::<RwSignal<EditorState>>();

    #[cfg(feature = "hydrate")]
    {
        let refresh_seq = Memo::new(move |_| gallery.with(|g| g.refresh_seq));
        Effect::new(move || {
            refresh_seq.track();
            let Some(ticket) = gallery.try_update(GalleryState::begin_load) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_memes().await;
                if let Err(message) = &result {
                    log::warn!("gallery load failed: {message}");
                }
                gallery.update(|g| {
                    g.finish_load(ticket, result);
                });
            });
        });
    }

    let on_select = move |url: String| {
        let stale = editor.try_update(|e| e.choose_remote(url)).flatten();
        object_url::revoke(stale);
    };

    view! {
        <section class="gallery">
            <h2 class="gallery__title">"Gallery"</h2>
            <Show when=move || gallery.with(|g| g.loading)>
                <p class="gallery__status">"Loading memes..."</p>
            </Show>
            {move || {
                gallery
                    .with(|g| g.error.clone())
                    .map(|message| view! { <p class="gallery__status gallery__status--error">{message}</p> })
            }}
            <Show when=move || gallery.with(|g| !g.loading && g.error.is_none() && g.memes.is_empty())>
                <p class="gallery__status">"No memes yet. Save one to see it here."</p>
            </Show>
            <ul class="gallery__list">
                <For
                    each=move || gallery.with(|g| g.memes.clone())
                    key=|url| url.clone()
                    children=move |url| {
                        let url_for_click = url.clone();
                        view! {
                            <li class="gallery__item">
                                <button
                                    class="gallery__thumb"
                                    title="Edit this meme"
                                    on:click=move |_| on_select(url_for_click.clone())
                                >
                                    <img src=url alt="Saved meme" loading="lazy" crossorigin="anonymous"/>
                                </button>
                            </li>
                        }
                    }
                />
            </ul>
        </section>
    }
}
