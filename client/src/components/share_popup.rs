//! Share popup with social network links for the last saved meme.

use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::util::share::ShareTarget;

#[component]
pub fn SharePopup(on_close: Callback<()>) -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    let share_links = move || {
        let meme_url = editor.with(|e| e.last_saved_url.clone());
        ShareTarget::ALL
            .into_iter()
            .map(|target| match target.link(meme_url.as_deref()) {
                Some(href) => view! {
                    <a
                        class="share-popup__link"
                        href=href
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {target.label()}
                    </a>
                }
                .into_any(),
                None => view! {
                    <span class="share-popup__link share-popup__link--disabled" aria-disabled="true">
                        {target.label()}
                    </span>
                }
                .into_any(),
            })
            .collect_view()
    };

    view! {
        <div class="share-popup" role="dialog" tabindex="0" on:keydown=on_keydown>
            <div class="share-popup__header">
                <span>"Share your meme"</span>
                <button class="share-popup__close" title="Close" on:click=move |_| on_close.run(())>
                    "×"
                </button>
            </div>
            <Show when=move || editor.with(|e| e.last_saved_url.is_none())>
                <p class="share-popup__hint">"Save the meme first to get a shareable link."</p>
            </Show>
            <div class="share-popup__links">{share_links}</div>
        </div>
    }
}
