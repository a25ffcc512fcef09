use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::brand::BrandMark;
use crate::components::icons::{Icon, SvgIcon};
use crate::motion::collapsible_classes;
use crate::state::{MenuAction, MobileMenu};

/// In-page anchors, in the order they appear in the menu.
pub const NAV_LINKS: [(&str, &str); 3] = [
    ("#features", "Features"),
    ("#chords", "Chords"),
    ("#author", "Author"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_reducer(MobileMenu::default);

    let toggle_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Toggle))
    };

    // Anchor navigation still happens; only the panel closes.
    let close_menu = {
        let menu = menu.dispatcher();
        Callback::from(move |_: MouseEvent| menu.dispatch(MenuAction::Close))
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <BrandMark />

                <div class="nav-links">
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="nav-link">{*label}</a>
                    }) }
                    <a href="#pricing" class="nav-cta">{"Get It Now"}</a>
                </div>

                <button
                    class="burger-menu"
                    aria-label="Toggle menu"
                    aria-expanded={menu.open.to_string()}
                    onclick={toggle_menu}
                >
                    <SvgIcon icon={if menu.open { Icon::X } else { Icon::Menu }} />
                </button>
            </div>

            <div class={classes!(collapsible_classes(menu.open), "mobile-menu")} aria-hidden={(!menu.open).to_string()}>
                <div class="collapsible-inner">
                    <div class="mobile-menu-links">
                        { for NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} class="mobile-link" onclick={close_menu.clone()}>{*label}</a>
                        }) }
                        <a href="#pricing" class="mobile-cta" onclick={close_menu.clone()}>{"Get It Now"}</a>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .top-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid #f5f5f4;
                }

                .nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    height: 4rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .nav-links {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #57534e;
                    text-decoration: none;
                    transition: color 0.2s ease;
                }

                .nav-link:hover {
                    color: #059669;
                }

                .nav-cta {
                    background: #059669;
                    color: #fff;
                    padding: 0.5rem 1.25rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 600;
                    text-decoration: none;
                    box-shadow: 0 4px 6px rgba(167, 243, 208, 0.8);
                    transition: background 0.2s ease;
                }

                .nav-cta:hover {
                    background: #047857;
                }

                .burger-menu {
                    display: none;
                    background: none;
                    border: none;
                    color: #57534e;
                    padding: 0.5rem;
                    cursor: pointer;
                }

                .burger-menu .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .top-nav .mobile-menu {
                    display: none;
                    background: #fff;
                    border-bottom: 1px solid #f5f5f4;
                }

                .mobile-menu-links {
                    padding: 1.5rem 1rem;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .mobile-link {
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #57534e;
                    text-decoration: none;
                }

                .mobile-cta {
                    text-align: center;
                    background: #059669;
                    color: #fff;
                    padding: 0.75rem;
                    border-radius: 0.75rem;
                    font-weight: 700;
                    text-decoration: none;
                }

                @media (max-width: 768px) {
                    .nav-links {
                        display: none;
                    }

                    .burger-menu {
                        display: block;
                    }

                    .top-nav .mobile-menu {
                        display: grid;
                    }
                }
                "#}
            </style>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn menu_starts_closed_with_all_anchors() {
        let rendered = yew::ServerRenderer::<Nav>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(rendered.contains(r#"aria-expanded="false""#));
        assert!(!rendered.contains("collapsible open"));
        for (href, _) in NAV_LINKS {
            assert_eq!(rendered.matches(&format!(r#"href="{}""#, href)).count(), 2);
        }
        assert_eq!(rendered.matches(r##"href="#pricing""##).count(), 2);
    }
}
