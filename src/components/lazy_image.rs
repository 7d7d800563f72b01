use web_sys::Event;
use yew::prelude::*;

use crate::state::PresentationHandle;

#[derive(Properties, PartialEq)]
pub struct LazyImageProps {
    pub id: AttrValue,
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Image with a tracked load flag: a shimmer shell shows until the
/// browser fires the load event. The flag lives in the controller for
/// the lifetime of this component.
#[function_component(LazyImage)]
pub fn lazy_image(props: &LazyImageProps) -> Html {
    let handle = use_context::<PresentationHandle>().expect("presentation context missing");

    {
        let controller = handle.controller.clone();
        use_effect_with_deps(
            move |id: &AttrValue| {
                controller.register_image(id);
                let id = id.clone();
                move || controller.release_image(&id)
            },
            props.id.clone(),
        );
    }

    let onload = {
        let controller = handle.controller.clone();
        let id = props.id.clone();
        Callback::from(move |_: Event| controller.image_loaded(&id))
    };

    let loading = handle.state.is_image_loading(&props.id);

    html! {
        <div class={classes!("lazy-image", props.class.clone(), loading.then(|| "loading"))}>
            <img src={props.src.clone()} alt={props.alt.clone()} loading="lazy" {onload} />
            <style>
                {r#"
                .lazy-image {
                    position: relative;
                    overflow: hidden;
                }
                .lazy-image img {
                    display: block;
                    width: 100%;
                    height: auto;
                }
                .lazy-image.loading img {
                    opacity: 0;
                }
                .lazy-image.loading::after {
                    content: '';
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(
                        100deg,
                        var(--bg-alt) 40%,
                        var(--card) 50%,
                        var(--bg-alt) 60%
                    );
                    background-size: 200% 100%;
                    animation: lazy-shimmer 1.2s linear infinite;
                }
                @keyframes lazy-shimmer {
                    from { background-position: 120% 0; }
                    to { background-position: -20% 0; }
                }
                "#}
            </style>
        </div>
    }
}
