use web_sys::MouseEvent;
use yew::events::SubmitEvent;
use yew::prelude::*;

use crate::components::blog_carousel::BlogCarousel;
use crate::components::lazy_image::LazyImage;
use crate::components::skill_card::SkillCard;
use crate::config;
use crate::content::{PROJECTS, SERVICES, SKILLS};
use crate::state::{parallax_offset, PresentationHandle};

#[function_component(Home)]
pub fn home() -> Html {
    let handle = use_context::<PresentationHandle>().expect("presentation context missing");
    let state = &handle.state;

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let hero_drift = parallax_offset(config::HERO_PARALLAX_SPEED, state.scroll_offset);
    let backdrop_drift = parallax_offset(config::BACKDROP_PARALLAX_SPEED, state.scroll_offset);

    // Forms are visual only: nothing is submitted anywhere.
    let swallow_submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    let scroll_down = Callback::from(|_: MouseEvent| {
        if let Some(window) = web_sys::window() {
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .unwrap_or(0.0);
            let top = window.scroll_y().unwrap_or(0.0);
            window.scroll_to_with_x_and_y(0.0, top + height);
        }
    });

    html! {
        <main class="home">
            <section id="home" class="hero">
                <div
                    class="hero-backdrop"
                    style={format!("transform: translateY({backdrop_drift}px);")}
                ></div>
                <div
                    class="hero-parallax-text"
                    style={format!("transform: translateY({hero_drift}px);")}
                >
                    {"Innovate Create Develop"}
                </div>
                <div class="hero-content">
                    <h1 class="hero-title">{"ARUSH"}</h1>
                    <p class="hero-subtitle">{"Full Stack Developer"}</p>
                    <p class="hero-tagline">
                        {"Passionate about creating innovative web solutions and pushing the \
                          boundaries of what's possible in web development."}
                    </p>
                    <a href="#contact" class="hero-cta">{"Hire Me"}</a>
                </div>
                <div class="hero-author-card">
                    <LazyImage
                        id="hero-portrait"
                        src="/assets/placeholder.svg?height=80&width=80"
                        alt="Arush"
                        class={classes!("author-portrait")}
                    />
                    <div>
                        <h3>{"Arush"}</h3>
                        <p>{"Full Stack Developer"}</p>
                        <a href="mailto:arush@example.com" class="author-mail">{"Contact Me"}</a>
                    </div>
                </div>
                <div class="hero-social">
                    <a href="#" aria-label="Instagram">{"Instagram"}</a>
                    <a href="#" aria-label="GitHub">{"GitHub"}</a>
                    <a href="#" aria-label="Patreon">{"Patreon"}</a>
                </div>
            </section>

            <section id="about" class="section">
                <h2>{"About Me"}</h2>
                <div class="about-layout">
                    <LazyImage
                        id="about-portrait"
                        src="/assets/placeholder.svg?height=400&width=400"
                        alt="Arush"
                        class={classes!("about-portrait")}
                    />
                    <div class="about-text">
                        <p>
                            {"Hi, I'm Arush, a passionate Full Stack Developer with a keen \
                              interest in creating innovative web solutions. With years of \
                              experience in both front-end and back-end development, I strive \
                              to build applications that are not only functional but also \
                              user-friendly and scalable."}
                        </p>
                        <p>
                            {"My journey in web development started with a fascination for how \
                              things work on the internet. This curiosity led me to dive deep \
                              into various technologies and frameworks, constantly learning and \
                              adapting to the ever-evolving world of web development."}
                        </p>
                        <p>
                            {"When I'm not coding, you can find me exploring new technologies, \
                              contributing to open-source projects, or sharing my knowledge \
                              through blog posts and community meetups."}
                        </p>
                    </div>
                </div>
            </section>

            <section id="services" class="section accent">
                <h2>{"My Services"}</h2>
                <div class="card-grid three">
                    {
                        for SERVICES.iter().map(|service| html! {
                            <div class="card">
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="skills" class="section">
                <h2>{"My Skills"}</h2>
                <div class="card-grid four">
                    {
                        for SKILLS.iter().map(|skill| html! {
                            <SkillCard {skill} />
                        })
                    }
                </div>
            </section>

            <section id="portfolio" class="section alt">
                <h2>{"My Portfolio"}</h2>
                <div class="card-grid three">
                    {
                        for PROJECTS.iter().enumerate().map(|(i, project)| html! {
                            <div class="card project-card">
                                <LazyImage
                                    id={format!("project-{i}")}
                                    src={format!("/assets/placeholder.svg?height=200&width=300&text={}", project.title)}
                                    alt={project.title}
                                />
                                <div class="project-body">
                                    <h3>{project.title}</h3>
                                    <p>{project.description}</p>
                                    <div class="project-links">
                                        <a href="#">{"View Project"}</a>
                                        <a href="#">{"Source Code"}</a>
                                    </div>
                                </div>
                            </div>
                        })
                    }
                </div>
            </section>

            <section id="blog" class="section accent">
                <h2>{"Latest Blog Posts"}</h2>
                <BlogCarousel />
                <div class="section-footer">
                    <a href="#blog" class="pill-link">{"View All Posts"}</a>
                </div>
            </section>

            <section id="contact" class="section">
                <h2>{"Contact Me"}</h2>
                <form class="contact-form" onsubmit={swallow_submit.clone()}>
                    <label for="name">{"Name"}</label>
                    <input type="text" id="name" required={true} />
                    <label for="email">{"Email"}</label>
                    <input type="email" id="email" required={true} />
                    <label for="message">{"Message"}</label>
                    <textarea id="message" rows="4" required={true}></textarea>
                    <button type="submit">{"Send Message"}</button>
                </form>
            </section>

            <section id="newsletter" class="section alt">
                <h2>{"Newsletter"}</h2>
                <p class="newsletter-blurb">
                    {"Occasional notes on web development, straight to your inbox."}
                </p>
                <form class="newsletter-form" onsubmit={swallow_submit}>
                    <input type="email" placeholder="you@example.com" required={true} />
                    <button type="submit">{"Subscribe"}</button>
                </form>
            </section>

            <footer class="footer">
                <div class="footer-columns">
                    <div>
                        <h3>{"Arush"}</h3>
                        <p>{"Full Stack Developer passionate about creating innovative web solutions."}</p>
                    </div>
                    <div>
                        <h4>{"Quick Links"}</h4>
                        <nav class="footer-links">
                            <a href="#home">{"Home"}</a>
                            <a href="#about">{"About"}</a>
                            <a href="#services">{"Services"}</a>
                            <a href="#skills">{"Skills"}</a>
                            <a href="#portfolio">{"Portfolio"}</a>
                            <a href="#blog">{"Blog"}</a>
                        </nav>
                    </div>
                    <div>
                        <h4>{"Contact"}</h4>
                        <p>{"Email: arush@example.com"}</p>
                        <p>{"Phone: +1 (123) 456-7890"}</p>
                        <p>{"Location: New York, NY"}</p>
                    </div>
                </div>
                <p class="footer-copyright">{"© 2024 Arush. All rights reserved."}</p>
            </footer>

            <button class="scroll-down" onclick={scroll_down} aria-label="Scroll down">
                {"⌄"}
            </button>

            <style>
                {r#"
                .page {
                    --bg: #ffffff;
                    --bg-alt: #f3f4f6;
                    --card: #ffffff;
                    --text: #111827;
                    --muted: #4b5563;
                    --accent: #dc2626;
                    background: var(--bg);
                    color: var(--text);
                    transition: background 0.3s ease, color 0.3s ease;
                    min-height: 100vh;
                    font-family: 'Helvetica Neue', Arial, sans-serif;
                }
                .page.dark {
                    --bg: #111827;
                    --bg-alt: #1f2937;
                    --card: #1f2937;
                    --text: #f9fafb;
                    --muted: #9ca3af;
                }
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    overflow: hidden;
                    background: var(--accent);
                    color: #ffffff;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: -20% 0;
                    background: radial-gradient(circle at 70% 30%, rgba(0, 0, 0, 0.25), transparent 60%);
                    pointer-events: none;
                }
                .hero-parallax-text {
                    position: absolute;
                    left: 0;
                    right: 0;
                    top: 50%;
                    text-align: center;
                    font-size: clamp(4rem, 14vw, 12rem);
                    font-weight: 800;
                    text-transform: uppercase;
                    white-space: nowrap;
                    color: rgba(255, 255, 255, 0.1);
                    pointer-events: none;
                }
                .hero-content {
                    position: relative;
                    text-align: center;
                    padding: 2rem;
                }
                .hero-title {
                    font-size: clamp(3rem, 10vw, 7rem);
                    letter-spacing: 0.1em;
                    line-height: 0.9;
                    margin: 0;
                }
                .hero-subtitle {
                    font-size: 1.5rem;
                    margin: 1rem 0;
                }
                .hero-tagline {
                    max-width: 28rem;
                    margin: 0 auto 2rem;
                    color: rgba(255, 255, 255, 0.85);
                }
                .hero-cta {
                    display: inline-block;
                    background: #ffffff;
                    color: var(--accent);
                    font-weight: 700;
                    padding: 0.75rem 2rem;
                    border-radius: 9999px;
                    text-decoration: none;
                    transition: transform 0.2s ease;
                }
                .hero-cta:hover {
                    transform: scale(1.05);
                }
                .hero-author-card {
                    position: absolute;
                    bottom: 2rem;
                    left: 50%;
                    transform: translateX(-50%);
                    display: flex;
                    gap: 1rem;
                    align-items: center;
                    background: var(--card);
                    color: var(--text);
                    padding: 0.75rem 1rem;
                    border-radius: 12px;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.2);
                    max-width: 24rem;
                }
                .hero-author-card h3 {
                    margin: 0;
                }
                .hero-author-card p {
                    margin: 0.25rem 0;
                    color: var(--muted);
                    font-size: 0.9rem;
                }
                .author-portrait {
                    width: 80px;
                    height: 80px;
                    border-radius: 50%;
                    flex-shrink: 0;
                }
                .author-mail {
                    color: var(--accent);
                    text-decoration: none;
                    font-size: 0.9rem;
                }
                .hero-social {
                    position: absolute;
                    bottom: 1.5rem;
                    left: 1.5rem;
                    display: flex;
                    gap: 1rem;
                }
                .hero-social a {
                    color: rgba(255, 255, 255, 0.85);
                    text-decoration: none;
                    font-size: 0.85rem;
                }
                .hero-social a:hover {
                    color: #ffffff;
                }
                .section {
                    padding: 5rem 2rem;
                    max-width: 72rem;
                    margin: 0 auto;
                }
                .section h2 {
                    text-align: center;
                    font-size: 2.25rem;
                    margin-bottom: 2.5rem;
                }
                .section.alt {
                    max-width: none;
                    background: var(--bg-alt);
                }
                .section.accent {
                    max-width: none;
                    background: var(--accent);
                    color: #ffffff;
                }
                .section.alt > *, .section.accent > * {
                    max-width: 72rem;
                    margin-left: auto;
                    margin-right: auto;
                }
                .about-layout {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2.5rem;
                    align-items: center;
                }
                .about-portrait {
                    border-radius: 12px;
                    box-shadow: 0 8px 24px rgba(0, 0, 0, 0.15);
                }
                .about-text p {
                    font-size: 1.1rem;
                    line-height: 1.7;
                    color: var(--muted);
                }
                .card-grid {
                    display: grid;
                    gap: 1.5rem;
                }
                .card-grid.three {
                    grid-template-columns: repeat(3, 1fr);
                }
                .card-grid.four {
                    grid-template-columns: repeat(4, 1fr);
                }
                .card {
                    background: var(--card);
                    color: var(--text);
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.1);
                }
                .project-card {
                    padding: 0;
                    overflow: hidden;
                }
                .project-body {
                    padding: 1rem 1.5rem 1.5rem;
                }
                .project-links {
                    display: flex;
                    justify-content: space-between;
                }
                .project-links a {
                    color: var(--accent);
                    text-decoration: none;
                }
                .skill-card {
                    position: relative;
                    background: var(--card);
                    color: var(--text);
                    border-radius: 12px;
                    padding: 1.5rem;
                    text-align: center;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.1);
                    transition: transform 0.3s ease;
                    overflow: hidden;
                }
                .skill-card:hover {
                    transform: scale(1.05);
                }
                .skill-detail {
                    position: absolute;
                    inset: 0;
                    background: rgba(0, 0, 0, 0.8);
                    color: #ffffff;
                    border-radius: 12px;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    padding: 1rem;
                }
                .skill-detail p {
                    font-size: 0.85rem;
                }
                .skill-progress {
                    width: 100%;
                    height: 0.6rem;
                    border-radius: 9999px;
                    background: rgba(255, 255, 255, 0.25);
                    margin-bottom: 1rem;
                }
                .skill-progress-fill {
                    height: 100%;
                    border-radius: 9999px;
                    background: var(--accent);
                }
                .blog-carousel {
                    display: grid;
                    grid-template-columns: auto 1fr auto;
                    align-items: center;
                    gap: 1rem;
                }
                .carousel-arrow {
                    background: none;
                    border: none;
                    cursor: pointer;
                    font-size: 2.5rem;
                    color: inherit;
                    padding: 0 0.5rem;
                }
                .blog-post-card {
                    background: var(--card);
                    color: var(--text);
                    border-radius: 12px;
                    padding: 2rem;
                    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.1);
                }
                .blog-date {
                    color: var(--muted);
                    font-size: 0.9rem;
                }
                .read-more {
                    color: var(--accent);
                    text-decoration: none;
                }
                .carousel-dots {
                    grid-column: 1 / -1;
                    display: flex;
                    justify-content: center;
                    gap: 0.5rem;
                    margin-top: 1rem;
                }
                .dot {
                    width: 0.6rem;
                    height: 0.6rem;
                    border-radius: 50%;
                    background: rgba(255, 255, 255, 0.4);
                }
                .dot.active {
                    background: #ffffff;
                }
                .section-footer {
                    text-align: center;
                    margin-top: 2.5rem;
                }
                .pill-link {
                    display: inline-block;
                    background: #ffffff;
                    color: var(--accent);
                    font-weight: 700;
                    padding: 0.75rem 1.5rem;
                    border-radius: 9999px;
                    text-decoration: none;
                }
                .contact-form, .newsletter-form {
                    max-width: 32rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .contact-form input,
                .contact-form textarea,
                .newsletter-form input {
                    padding: 0.6rem 0.8rem;
                    border-radius: 8px;
                    border: 1px solid var(--muted);
                    background: var(--card);
                    color: var(--text);
                    font: inherit;
                }
                .contact-form button,
                .newsletter-form button {
                    background: var(--accent);
                    color: #ffffff;
                    border: none;
                    border-radius: 9999px;
                    padding: 0.75rem 1.5rem;
                    font-weight: 700;
                    cursor: pointer;
                }
                .newsletter-form {
                    flex-direction: row;
                }
                .newsletter-form input {
                    flex: 1;
                }
                .newsletter-blurb {
                    text-align: center;
                    color: var(--muted);
                    margin-bottom: 1.5rem;
                }
                .footer {
                    background: #0b0f1a;
                    color: #e5e7eb;
                    padding: 3rem 2rem 2rem;
                }
                .footer-columns {
                    max-width: 72rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(3, 1fr);
                    gap: 2rem;
                }
                .footer-links {
                    display: flex;
                    flex-direction: column;
                    gap: 0.5rem;
                }
                .footer-links a {
                    color: #9ca3af;
                    text-decoration: none;
                }
                .footer-links a:hover {
                    color: #ffffff;
                }
                .footer-copyright {
                    text-align: center;
                    border-top: 1px solid #1f2937;
                    margin-top: 2rem;
                    padding-top: 1.5rem;
                    color: #9ca3af;
                }
                .scroll-down {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 50%;
                    border: none;
                    background: var(--text);
                    color: var(--bg);
                    font-size: 1.5rem;
                    cursor: pointer;
                    z-index: 20;
                }
                @media (max-width: 900px) {
                    .about-layout {
                        grid-template-columns: 1fr;
                    }
                    .card-grid.three {
                        grid-template-columns: 1fr;
                    }
                    .card-grid.four {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .hero-author-card {
                        position: static;
                        transform: none;
                        margin-top: 2rem;
                    }
                }
                "#}
            </style>
        </main>
    }
}
