//! Meme editor: image picker, caption input, canvas, and actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every control here writes to `EditorState`; `CanvasHost` turns those
//! writes into engine calls. Object URLs for device files are created here
//! and revoked whenever an editor transition hands one back.

use leptos::prelude::*;

use crate::components::canvas_host::CanvasHost;
use crate::components::share_popup::SharePopup;
use crate::state::editor::EditorState;
use crate::util::object_url;

#[component]
pub fn MemeEditor() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            let Some(url) = object_url::from_file_input(&input) else {
                return;
            };
            let stale = editor.try_update(|e| e.choose_local(url)).flatten();
            object_url::revoke(stale);
            // Allow picking the same file again.
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = ev;
        }
    };

    let on_caption_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        editor.update(|e| e.set_caption(text));
    };

    let on_remove = move |_| {
        let stale = editor.try_update(EditorState::reset).flatten();
        object_url::revoke(stale);
    };
    let on_download = move |_| editor.update(EditorState::request_download);
    let on_save = move |_| {
        editor.update(|e| {
            e.request_save();
        });
    };
    let on_share_toggle = move |_| editor.update(EditorState::toggle_share);
    let on_share_close = Callback::new(move |()| editor.update(|e| e.share_open = false));

    let has_image = move || editor.with(|e| e.image.is_some());
    let saving = move || editor.with(|e| e.saving);

    view! {
        <section class="meme-editor">
            <div class="meme-editor__inputs">
                <label class="meme-editor__file">
                    "Upload image"
                    <input type="file" accept="image/*" on:change=on_file_change/>
                </label>
                <input
                    class="meme-editor__caption"
                    type="text"
                    placeholder="Enter meme text"
                    prop:value=move || editor.with(|e| e.caption.clone())
                    on:input=on_caption_input
                />
            </div>

            <div class="meme-editor__stage">
                <CanvasHost/>
            </div>

            {move || {
                editor
                    .with(|e| e.error.clone())
                    .map(|message| view! { <p class="meme-editor__error">{message}</p> })
            }}

            <div class="meme-editor__actions">
                <button class="btn" title="Remove image" disabled=move || !has_image() on:click=on_remove>
                    "Remove"
                </button>
                <button class="btn" title="Download as PNG" on:click=on_download>
                    "Download"
                </button>
                <button class="btn btn--primary" title="Save to gallery" disabled=saving on:click=on_save>
                    {move || if saving() { "Saving..." } else { "Save" }}
                </button>
                <button class="btn" title="Share" on:click=on_share_toggle>
                    "Share"
                </button>
            </div>

            <Show when=move || editor.with(|e| e.share_open)>
                <SharePopup on_close=on_share_close/>
            </Show>
        </section>
    }
}
