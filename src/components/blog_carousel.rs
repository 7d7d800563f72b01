use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::BLOG_POSTS;
use crate::state::PresentationHandle;

/// Cyclic carousel over the blog posts; navigation wraps at both ends.
#[function_component(BlogCarousel)]
pub fn blog_carousel() -> Html {
    let handle = use_context::<PresentationHandle>().expect("presentation context missing");
    let index = handle.state.slide_index;
    let post = &BLOG_POSTS[index];

    let prev = {
        let controller = handle.controller.clone();
        Callback::from(move |_: MouseEvent| controller.prev_slide(BLOG_POSTS.len()))
    };
    let next = {
        let controller = handle.controller.clone();
        Callback::from(move |_: MouseEvent| controller.next_slide(BLOG_POSTS.len()))
    };

    html! {
        <div class="blog-carousel">
            <button class="carousel-arrow" onclick={prev} aria-label="Previous post">{"‹"}</button>
            <article class="blog-post-card">
                <h3>{post.title}</h3>
                <p class="blog-date">{post.date}</p>
                <p class="blog-excerpt">{post.excerpt}</p>
                <a href="#blog" class="read-more">{"Read More →"}</a>
            </article>
            <button class="carousel-arrow" onclick={next} aria-label="Next post">{"›"}</button>
            <div class="carousel-dots">
                {
                    for BLOG_POSTS.iter().enumerate().map(|(i, _)| html! {
                        <span class={classes!("dot", (i == index).then(|| "active"))}></span>
                    })
                }
            </div>
        </div>
    }
}
