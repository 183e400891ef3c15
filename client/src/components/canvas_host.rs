//! Bridge component between editor state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns compositing, hit-testing and drag state. This host
//! mounts the engine on hydration, mirrors `EditorState` into it (caption,
//! image, reset), forwards pointer events, and services the editor's
//! download/save requests, which need direct access to the canvas element.
//!
//! Image loads are asynchronous: the engine hands out a ticket per load and
//! only the newest ticket may complete, so a slow image never replaces a
//! newer selection.

use leptos::prelude::*;

use crate::state::editor::EditorState;
use crate::state::gallery::GalleryState;

#[cfg(feature = "hydrate")]
use crate::net::api::upload_meme;
#[cfg(feature = "hydrate")]
use crate::state::editor::{EditorImage, ImageOrigin};
#[cfg(feature = "hydrate")]
use crate::util::canvas_input::{map_button, pointer_point};
#[cfg(feature = "hydrate")]
use crate::util::export::{canvas_png_blob, download_data_url};

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use canvas::consts::EXPORT_FILE_NAME;
#[cfg(feature = "hydrate")]
use canvas::doc::ImageSource;
#[cfg(feature = "hydrate")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
type SharedEngine = Rc<RefCell<Option<Engine>>>;

#[cfg(feature = "hydrate")]
fn render_or_log(engine: &Engine) {
    if let Err(err) = engine.render() {
        log::error!("canvas render failed: {err:?}");
    }
}

#[cfg(feature = "hydrate")]
fn process_actions(actions: Vec<Action>, engine: &Engine, cursor: RwSignal<String>) {
    let mut render = false;
    for action in actions {
        match action {
            Action::SetCursor(name) => cursor.set(name),
            Action::RenderNeeded => render = true,
            Action::CaptionMoved { .. } | Action::None => {}
        }
    }
    if render {
        render_or_log(engine);
    }
}

#[cfg(feature = "hydrate")]
fn to_image_source(image: EditorImage) -> ImageSource {
    match image.origin {
        ImageOrigin::Local => ImageSource::local(image.url),
        ImageOrigin::Remote => ImageSource::remote(image.url),
    }
}

#[cfg(feature = "hydrate")]
fn load_image(engine: &SharedEngine, image: EditorImage, editor: RwSignal<EditorState>) {
    let started = match engine.borrow_mut().as_mut() {
        Some(instance) => {
            let started = instance.begin_image_load(to_image_source(image));
            // Blank surface + caption until the image arrives.
            render_or_log(instance);
            started
        }
        None => return,
    };
    let (ticket, img) = match started {
        Ok(started) => started,
        Err(err) => {
            log::error!("could not create image element: {err:?}");
            return;
        }
    };

    let engine_loaded = Rc::clone(engine);
    let img_loaded = img.clone();
    let onload = Closure::once_into_js(move || {
        if let Some(instance) = engine_loaded.borrow_mut().as_mut() {
            if instance.finish_image_load(ticket, img_loaded) {
                render_or_log(instance);
            }
        }
    });

    let engine_failed = Rc::clone(engine);
    let onerror = Closure::once_into_js(move || {
        if let Some(instance) = engine_failed.borrow_mut().as_mut() {
            if instance.fail_image_load(ticket) {
                render_or_log(instance);
                editor.update(|e| e.error = Some("image failed to load".to_owned()));
            }
        }
    });

    img.set_onload(Some(onload.unchecked_ref()));
    img.set_onerror(Some(onerror.unchecked_ref()));
}

#[cfg(feature = "hydrate")]
fn save_canvas(engine: &SharedEngine, editor: RwSignal<EditorState>, gallery: RwSignal<GalleryState>) {
    let canvas = engine.borrow().as_ref().map(|instance| instance.canvas().clone());
    let Some(canvas) = canvas else {
        editor.update(|e| e.save_failed("canvas is not ready".to_owned()));
        return;
    };
    leptos::task::spawn_local(async move {
        let outcome = match canvas_png_blob(&canvas).await {
            Ok(blob) => upload_meme(&blob).await,
            Err(message) => Err(message),
        };
        match outcome {
            Ok(meme) => {
                log::info!("meme saved: {}", meme.url);
                editor.update(|e| e.save_succeeded(meme.url));
                gallery.update(GalleryState::request_refresh);
            }
            Err(message) => {
                log::warn!("meme save failed: {message}");
                editor.update(|e| e.save_failed(message));
            }
        }
    });
}

/// Canvas host component.
///
/// On hydration, this mounts `canvas::engine::Engine` on the 500x500 canvas
/// and keeps it in sync with `EditorState`.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let editor = expect_context::<RwSignal<EditorState>>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    let cursor = RwSignal::new("default".to_owned());

    #[cfg(feature = "hydrate")]
    let engine: SharedEngine = Rc::new(RefCell::new(None));

    // Mount once the canvas element exists, then catch up with any state
    // set before hydration finished.
    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }
            let mut instance = match Engine::new(canvas) {
                Ok(instance) => instance,
                Err(err) => {
                    log::error!("canvas engine unavailable: {err:?}");
                    return;
                }
            };
            let (caption, image) = editor.with_untracked(|e| (e.caption.clone(), e.image.clone()));
            instance.set_caption(caption);
            render_or_log(&instance);
            *engine.borrow_mut() = Some(instance);
            if let Some(image) = image {
                load_image(&engine, image, editor);
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let caption = Memo::new(move |_| editor.with(|e| e.caption.clone()));
        Effect::new(move || {
            let text = caption.get();
            if let Some(instance) = engine.borrow_mut().as_mut() {
                instance.set_caption(text);
                render_or_log(instance);
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let image_seq = Memo::new(move |_| editor.with(|e| e.image_seq));
        let last_image_seq = RwSignal::new(editor.with_untracked(|e| e.image_seq));
        Effect::new(move || {
            let seq = image_seq.get();
            if seq == last_image_seq.get_untracked() {
                return;
            }
            last_image_seq.set(seq);
            let Some(image) = editor.with_untracked(|e| e.image.clone()) else {
                return;
            };
            load_image(&engine, image, editor);
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let reset_seq = Memo::new(move |_| editor.with(|e| e.reset_seq));
        let last_reset_seq = RwSignal::new(editor.with_untracked(|e| e.reset_seq));
        Effect::new(move || {
            let seq = reset_seq.get();
            if seq == last_reset_seq.get_untracked() {
                return;
            }
            last_reset_seq.set(seq);
            if let Some(instance) = engine.borrow_mut().as_mut() {
                let actions = instance.reset();
                process_actions(actions, instance, cursor);
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let download_seq = Memo::new(move |_| editor.with(|e| e.download_seq));
        let last_download_seq = RwSignal::new(editor.with_untracked(|e| e.download_seq));
        Effect::new(move || {
            let seq = download_seq.get();
            if seq == last_download_seq.get_untracked() {
                return;
            }
            last_download_seq.set(seq);
            let exported = match engine.borrow().as_ref() {
                Some(instance) => instance
                    .to_png_data_url()
                    .map_err(|err| format!("export failed: {err:?}")),
                None => return,
            };
            if let Err(message) = exported.and_then(|url| download_data_url(&url, EXPORT_FILE_NAME)) {
                log::warn!("meme download failed: {message}");
                editor.update(|e| e.error = Some(message));
            }
        });
    }

    #[cfg(feature = "hydrate")]
    {
        let engine = Rc::clone(&engine);
        let save_seq = Memo::new(move |_| editor.with(|e| e.save_seq));
        let last_save_seq = RwSignal::new(editor.with_untracked(|e| e.save_seq));
        Effect::new(move || {
            let seq = save_seq.get();
            if seq == last_save_seq.get_untracked() {
                return;
            }
            last_save_seq.set(seq);
            save_canvas(&engine, editor, gallery);
        });
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (editor, gallery);
    }

    let on_pointer_down = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(instance) = engine.borrow_mut().as_mut() {
                    let point = pointer_point(&ev, instance.canvas());
                    let actions = instance.on_pointer_down(point, map_button(ev.button()));
                    process_actions(actions, instance, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(instance) = engine.borrow_mut().as_mut() {
                    let point = pointer_point(&ev, instance.canvas());
                    let actions = instance.on_pointer_move(point);
                    process_actions(actions, instance, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(instance) = engine.borrow_mut().as_mut() {
                    let point = pointer_point(&ev, instance.canvas());
                    let actions = instance.on_pointer_up(point, map_button(ev.button()));
                    process_actions(actions, instance, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_leave = {
        #[cfg(feature = "hydrate")]
        {
            let engine = Rc::clone(&engine);
            move |_ev: leptos::ev::PointerEvent| {
                if let Some(instance) = engine.borrow_mut().as_mut() {
                    let actions = instance.on_pointer_leave();
                    process_actions(actions, instance, cursor);
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let cursor_style = move || format!("cursor: {};", cursor.get());

    view! {
        <canvas
            class="meme-canvas"
            node_ref=canvas_ref
            width="500"
            height="500"
            style=cursor_style
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:pointerleave=on_pointer_leave
        >
            "Your browser does not support canvas."
        </canvas>
    }
}
