use yew::prelude::*;

use crate::components::icons::SvgIcon;
use crate::content::{Feature, FEATURES};
use crate::motion::{reveal_classes, stagger_style, use_reveal_once};

#[derive(Properties, PartialEq)]
pub struct FeatureCardsProps {
    pub features: &'static [Feature],
}

/// Cards fade in together once the grid scrolls into view, each delayed by its position.
#[function_component(FeatureCards)]
pub fn feature_cards(props: &FeatureCardsProps) -> Html {
    let grid_ref = use_node_ref();
    let revealed = use_reveal_once(grid_ref.clone());

    html! {
        <div class="features-grid" ref={grid_ref}>
            { for props.features.iter().enumerate().map(|(index, feature)| html! {
                <div
                    key={index.to_string()}
                    class={classes!("feature-card", reveal_classes(revealed))}
                    style={stagger_style(index)}
                >
                    <div class="feature-icon"><SvgIcon icon={feature.icon} /></div>
                    <h3 class="feature-title">{feature.title}</h3>
                    <p class="feature-description">{feature.description}</p>
                </div>
            }) }
        </div>
    }
}

#[function_component(FeaturesGrid)]
pub fn features_grid() -> Html {
    html! {
        <section id="features" class="features">
            <div class="features-header">
                <h2>{"What's inside the Dictionary?"}</h2>
                <p>{"Everything you need to master harmony in one place."}</p>
            </div>
            <FeatureCards features={FEATURES} />

            <style>
                {r#"
                .features {
                    padding: 6rem 1.5rem;
                    background: #fafaf9;
                    scroll-margin-top: 4rem;
                }

                .features-header {
                    text-align: center;
                    margin-bottom: 4rem;
                }

                .features-header h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #1c1917;
                }

                .features-header p {
                    color: #57534e;
                    margin-top: 1rem;
                }

                .features-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 2rem;
                }

                .feature-card {
                    background: #fff;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    border: 1px solid #f5f5f4;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .feature-card:hover {
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                }

                .feature-icon {
                    margin-bottom: 1.5rem;
                    color: #059669;
                }

                .feature-icon .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .feature-title {
                    font-size: 1.125rem;
                    font-weight: 700;
                    color: #1c1917;
                    margin-bottom: 0.75rem;
                }

                .feature-description {
                    color: #57534e;
                    font-size: 0.875rem;
                    line-height: 1.625;
                }

                @media (max-width: 1024px) {
                    .features-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .features-grid {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::icons::Icon;

    #[tokio::test]
    async fn one_card_per_feature_in_order() {
        let rendered = yew::ServerRenderer::<FeaturesGrid>::new()
            .hydratable(false)
            .render()
            .await;

        assert_eq!(rendered.matches(r#"class="feature-title""#).count(), FEATURES.len());

        let mut cursor = 0;
        for feature in FEATURES {
            let title = rendered[cursor..]
                .find(feature.title)
                .unwrap_or_else(|| panic!("missing title {}", feature.title));
            let description = rendered[cursor + title..]
                .find(feature.description)
                .unwrap_or_else(|| panic!("missing description {}", feature.description));
            cursor += title + description;
        }
    }

    #[tokio::test]
    async fn cards_wait_for_viewport_with_staggered_delay() {
        static TWO: &[Feature] = &[
            Feature { icon: Icon::Music, title: "First", description: "one" },
            Feature { icon: Icon::Star, title: "Second", description: "two" },
        ];
        let rendered = yew::ServerRenderer::<FeatureCards>::with_props(|| FeatureCardsProps { features: TWO })
            .hydratable(false)
            .render()
            .await;

        assert_eq!(rendered.matches(r#"class="feature-title""#).count(), 2);
        assert!(!rendered.contains("is-visible"));
        assert!(rendered.contains("transition-delay: 0ms;"));
        assert!(rendered.contains("transition-delay: 100ms;"));
    }
}
