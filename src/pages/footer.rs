use web_sys::js_sys::Date;
use yew::prelude::*;

use crate::components::animated::Animated;
use crate::components::newsletter::{NewsletterForm, NewsletterPlacement};
use crate::motion::reveal::RevealOptions;
use crate::motion::stagger::StaggerSchedule;
use crate::motion::viewport::use_reveal;

const COLUMN_SCHEDULE: StaggerSchedule = StaggerSchedule::new(0, 100);

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("#instagram", "Instagram"),
    ("#linkedin", "LinkedIn"),
    ("#twitter", "Twitter"),
];

const FOOTER_LINKS: &[(&str, &str)] = &[
    ("/about", "About"),
    ("/terms", "Terms of use"),
    ("/privacy", "Privacy"),
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_ref = use_node_ref();
    let visible = use_reveal(footer_ref.clone(), RevealOptions::default());
    let year = Date::new_0().get_full_year();

    html! {
        <footer class="site-footer" ref={footer_ref}>
            <style>{ FOOTER_CSS }</style>
            <div class="container">
                <div class="footer-grid">
                    <Animated {visible} delay_ms={COLUMN_SCHEDULE.delay(0)}>
                        <h3>{"About us"}</h3>
                        <p>{"Professional career guidance, skills development and standout job opportunities in every field."}</p>
                        <div class="social">
                            { for SOCIAL_LINKS.iter().map(|&(href, label)| html! {
                                <a {href} aria-label={label}>{ label }</a>
                            }) }
                        </div>
                    </Animated>

                    <Animated {visible} delay_ms={COLUMN_SCHEDULE.delay(1)}>
                        <h3>{"Key links"}</h3>
                        <ul>
                            { for FOOTER_LINKS.iter().map(|&(href, label)| html! {
                                <li><a {href}>{ label }</a></li>
                            }) }
                        </ul>
                    </Animated>

                    <Animated {visible} delay_ms={COLUMN_SCHEDULE.delay(2)}>
                        <h3>{"Get in touch"}</h3>
                        <p>{"Have a question? Reach us by email."}</p>
                        <NewsletterForm placement={NewsletterPlacement::Footer} />
                    </Animated>
                </div>

                <Animated {visible} delay_ms={COLUMN_SCHEDULE.delay(3)} class={classes!("copyright")}>
                    <p>{ format!("© {} All rights reserved", year) }</p>
                </Animated>
            </div>
        </footer>
    }
}

const FOOTER_CSS: &str = r#"
    .site-footer {
        position: relative;
        padding: 4rem 0 2rem;
        background: linear-gradient(to bottom, #1e3a8a, #172554);
        color: #dbeafe;
    }
    .footer-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
        gap: 2.5rem;
    }
    .site-footer h3 {
        color: white;
        border-bottom: 1px solid #1d4ed8;
        padding-bottom: 0.5rem;
    }
    .site-footer a {
        color: #bfdbfe;
        text-decoration: none;
    }
    .site-footer a:hover {
        color: white;
    }
    .site-footer ul {
        list-style: none;
        padding: 0;
    }
    .site-footer li {
        margin-bottom: 0.75rem;
    }
    .social {
        display: flex;
        gap: 0.75rem;
    }
    .site-footer .newsletter-form {
        display: flex;
        flex-direction: column;
        gap: 0.75rem;
    }
    .site-footer .newsletter-form input {
        padding: 0.5rem 0.75rem;
        border: none;
        border-radius: 0.5rem;
    }
    .copyright {
        margin-top: 2.5rem;
        padding-top: 1.5rem;
        border-top: 1px solid #1e40af;
        text-align: center;
        font-size: 0.875rem;
        color: #bfdbfe;
    }
"#;
