//! Home page: the editor above the gallery.

use leptos::prelude::*;

use crate::components::gallery::Gallery;
use crate::components::meme_editor::MemeEditor;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home">
            <header class="home__header">
                <h1>"Meme Generator"</h1>
                <p class="home__tagline">"Pick an image, add a caption, drag it into place."</p>
            </header>
            <MemeEditor/>
            <Gallery/>
        </main>
    }
}
