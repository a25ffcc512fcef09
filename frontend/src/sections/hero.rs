use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::config::{avatar_url, PRODUCT_IMAGE_URL};
use crate::content::{AVATAR_SEEDS, SOCIAL_PROOF};

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-grid">
                <div class="hero-text enter-slide">
                    <div class="hero-badge">
                        <SvgIcon icon={Icon::Star} filled={true} />
                        {"Ultimate Visual Guide"}
                    </div>
                    <h1>
                        {"Master the Keyboard with the Most "}
                        <span class="accent">{"Complete and Visual"}</span>
                        {" Chord Guide"}
                    </h1>
                    <p class="hero-subtitle">
                        {"Forget endless internet searches. Have 312 professional diagrams ready to print and elevate your musical level today."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#pricing" class="hero-cta pulse">
                            {"Download Dictionary"}
                            <SvgIcon icon={Icon::ArrowRight} />
                        </a>
                        <div class="social-proof">
                            <div class="avatars">
                                { for AVATAR_SEEDS.iter().map(|seed| html! {
                                    <img
                                        key={seed.to_string()}
                                        src={avatar_url(*seed)}
                                        alt="User"
                                        referrerpolicy="no-referrer"
                                    />
                                }) }
                            </div>
                            <span>{SOCIAL_PROOF}</span>
                        </div>
                    </div>
                </div>

                <div class="hero-visual enter-scale">
                    <div class="product-frame">
                        <div class="product-image">
                            <img
                                src={PRODUCT_IMAGE_URL}
                                alt="Chord Dictionary - Eliab Campos"
                                referrerpolicy="no-referrer"
                            />
                        </div>
                    </div>
                    <div class="blob blob-top"></div>
                    <div class="blob blob-bottom"></div>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    padding: 8rem 1.5rem 5rem;
                    overflow: hidden;
                    background: linear-gradient(to bottom, rgba(236, 253, 245, 0.5), #fff);
                }

                .hero-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .hero-badge {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: #d1fae5;
                    color: #047857;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.05em;
                    margin-bottom: 1.5rem;
                }

                .hero-badge .icon {
                    width: 0.75rem;
                    height: 0.75rem;
                }

                .hero h1 {
                    font-size: 3.75rem;
                    font-weight: 800;
                    color: #1c1917;
                    line-height: 1.1;
                    margin-bottom: 1.5rem;
                }

                .hero .accent {
                    color: #059669;
                }

                .hero-subtitle {
                    font-size: 1.125rem;
                    color: #57534e;
                    max-width: 36rem;
                    line-height: 1.625;
                    margin-bottom: 2rem;
                }

                .hero-cta-group {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .hero-cta {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 0.5rem;
                    background: #059669;
                    color: #fff;
                    padding: 1rem 2rem;
                    border-radius: 1rem;
                    font-size: 1.125rem;
                    font-weight: 700;
                    text-decoration: none;
                    box-shadow: 0 20px 25px -5px rgba(167, 243, 208, 0.8);
                }

                .hero-cta:hover {
                    background: #047857;
                }

                .hero-cta .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                .social-proof {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    padding: 0.5rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #78716c;
                }

                .avatars {
                    display: flex;
                }

                .avatars img {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    border: 2px solid #fff;
                    object-fit: cover;
                    margin-left: -0.5rem;
                }

                .avatars img:first-child {
                    margin-left: 0;
                }

                .hero-visual {
                    position: relative;
                }

                .product-frame {
                    position: relative;
                    z-index: 10;
                    background: #fff;
                    padding: 1rem;
                    border-radius: 2rem;
                    border: 1px solid #f5f5f4;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transform: rotate(3deg);
                    transition: transform 0.5s ease;
                }

                .product-frame:hover {
                    transform: rotate(0deg);
                }

                .product-image {
                    aspect-ratio: 3 / 4;
                    background: #f5f5f4;
                    border-radius: 1.5rem;
                    overflow: hidden;
                }

                .product-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    transition: transform 0.7s ease;
                }

                .product-frame:hover .product-image img {
                    transform: scale(1.05);
                }

                .blob {
                    position: absolute;
                    width: 10rem;
                    height: 10rem;
                    border-radius: 9999px;
                    filter: blur(64px);
                }

                .blob-top {
                    top: -2.5rem;
                    right: -2.5rem;
                    background: #a7f3d0;
                    opacity: 0.3;
                }

                .blob-bottom {
                    bottom: -2.5rem;
                    left: -2.5rem;
                    background: #34d399;
                    opacity: 0.2;
                }

                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }

                    .hero h1 {
                        font-size: 2.25rem;
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

    /// Opening tag of every `<img>` in the markup.
    fn img_tags(rendered: &str) -> Vec<&str> {
        rendered
            .split("<img")
            .skip(1)
            .map(|rest| rest.split('>').next().unwrap_or_default())
            .collect()
    }

    #[tokio::test]
    async fn remote_images_suppress_referrer() {
        let rendered = yew::ServerRenderer::<Hero>::new()
            .hydratable(false)
            .render()
            .await;

        let imgs = img_tags(&rendered);
        assert_eq!(imgs.len(), AVATAR_SEEDS.len() + 1);
        for tag in imgs {
            assert!(tag.contains(r#"referrerpolicy="no-referrer""#), "img without referrer policy: {}", tag);
        }
    }

    #[tokio::test]
    async fn social_proof_avatars_use_fixed_seeds() {
        let rendered = yew::ServerRenderer::<Hero>::new()
            .hydratable(false)
            .render()
            .await;

        for seed in [11, 12, 13] {
            assert!(rendered.contains(&format!("https://picsum.photos/seed/{}/100/100", seed)));
        }
        assert!(rendered.contains(SOCIAL_PROOF));
        assert!(rendered.contains(PRODUCT_IMAGE_URL));
    }

    #[tokio::test]
    async fn text_slides_in_and_image_scales_in() {
        let rendered = yew::ServerRenderer::<Hero>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(rendered.contains(r#"class="hero-text enter-slide""#));
        assert!(rendered.contains(r#"class="hero-visual enter-scale""#));
        assert!(rendered.contains(r##"href="#pricing""##));
    }
}
