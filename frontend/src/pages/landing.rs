use log::{info, warn};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::nav::Nav;
use crate::config::PAGE_TITLE;
use crate::motion::MOTION_CSS;
use crate::sections::{
    author::Author, chords::ChordList, faq::Faq, features::FeaturesGrid, footer::Footer,
    hero::Hero, pricing::Pricing, problem::ProblemSolution,
};

#[function_component(Landing)]
pub fn landing() -> Html {
    use_mount(|| match web_sys::window().and_then(|window| window.document()) {
        Some(document) => {
            document.set_title(PAGE_TITLE);
            info!("Landing page mounted");
        }
        None => warn!("no document to set the page title on"),
    });

    html! {
        <div class="landing-page">
            <Nav />
            <main>
                <Hero />
                <ProblemSolution />
                <FeaturesGrid />
                <ChordList />
                <Author />
                <Pricing />
                <Faq />
            </main>
            <Footer />

            <style>{MOTION_CSS}</style>
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }

                body {
                    margin: 0;
                    font-family: 'Inter', system-ui, -apple-system, sans-serif;
                    color: #1c1917;
                    -webkit-font-smoothing: antialiased;
                }

                *, *::before, *::after {
                    box-sizing: border-box;
                }

                h1, h2, h3, p {
                    margin-top: 0;
                }

                .landing-page {
                    min-height: 100vh;
                    background: #fff;
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sections_render_in_page_order() {
        let rendered = yew::ServerRenderer::<Landing>::new()
            .hydratable(false)
            .render()
            .await;

        let markers = [
            r#"class="top-nav""#,
            "<main>",
            r#"class="hero""#,
            r#"class="problem-solution""#,
            r#"id="features""#,
            r#"id="chords""#,
            r#"id="author""#,
            r#"id="pricing""#,
            r#"class="faq""#,
            "</main>",
            r#"class="site-footer""#,
        ];
        let positions: Vec<usize> = markers
            .iter()
            .map(|marker| {
                rendered
                    .find(marker)
                    .unwrap_or_else(|| panic!("missing {}", marker))
            })
            .collect();

        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[tokio::test]
    async fn first_faq_entry_is_the_only_one_expanded() {
        let rendered = yew::ServerRenderer::<Landing>::new()
            .hydratable(false)
            .render()
            .await;

        let faq = rendered.split(r#"class="faq-list""#).nth(1).unwrap_or_default();
        let first = faq.find("How do I receive the material?").unwrap_or(usize::MAX);
        let second = faq.find("Is it suitable for beginners?").unwrap_or(usize::MAX);

        assert_eq!(faq.matches(r#"aria-expanded="true""#).count(), 1);
        let expanded_at = faq.find(r#"aria-expanded="true""#).unwrap_or(usize::MAX);
        assert!(expanded_at < first && first < second);
    }
}
