use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_hooks::use_update;

use crate::components::nav::Nav;
use crate::pages::home::Home;
use crate::state::{PresentationController, PresentationHandle};
use crate::storage::{BrowserStore, PreferenceStore};

#[function_component(App)]
pub fn app() -> Html {
    let controller = use_memo(
        |_| {
            let store = Rc::new(BrowserStore);
            let persisted = store.read_dark_mode();
            let controller = PresentationController::new(store);
            controller.init_theme(persisted);
            controller
        },
        (),
    );

    // Re-render whenever the controller reports a state change.
    let update = use_update();
    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                let token = controller.subscribe(Box::new(move |_| update()));
                move || controller.unsubscribe(token)
            },
            (),
        );
    }

    {
        let controller = controller.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    controller.on_scroll(scroll_top.max(0) as u32);
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let handle = PresentationHandle {
        controller: Rc::clone(&controller),
        state: controller.snapshot(),
    };
    let root_class = classes!("page", handle.state.dark_mode.then(|| "dark"));

    html! {
        <ContextProvider<PresentationHandle> context={handle}>
            <div class={root_class}>
                <Nav />
                <Home />
            </div>
        </ContextProvider<PresentationHandle>>
    }
}
