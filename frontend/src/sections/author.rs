use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::config::{brand_full_name, AUTHOR_IMAGE_URL};
use crate::content::{EXPERIENCE_YEARS, RATING_STARS};

#[function_component(Author)]
pub fn author() -> Html {
    let name = brand_full_name();

    html! {
        <section id="author" class="author">
            <div class="author-grid">
                <div class="author-bio">
                    <h2>{"About the Author"}</h2>
                    <h3>{name.clone()}</h3>
                    <p>
                        {"Musician and educator with years of experience transforming how keyboardists understand harmony. His visual approach has helped hundreds of students overcome the barrier of complex theory."}
                    </p>
                    <div class="author-rating">
                        <div class="stars">
                            { for (0..RATING_STARS).map(|i| html! {
                                <SvgIcon key={i.to_string()} icon={Icon::Star} filled={true} />
                            }) }
                        </div>
                        <span>{"Authority in Musical Education"}</span>
                    </div>
                </div>
                <div class="author-photo">
                    <img src={AUTHOR_IMAGE_URL} alt={name.clone()} referrerpolicy="no-referrer" />
                    <div class="experience-badge">
                        <p class="experience-years">{EXPERIENCE_YEARS}</p>
                        <p class="experience-label">{"Years of Experience"}</p>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .author {
                    padding: 6rem 1.5rem;
                    background: #fff;
                    scroll-margin-top: 4rem;
                }

                .author-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                .author-bio h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #1c1917;
                    margin-bottom: 1.5rem;
                }

                .author-bio h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #059669;
                    margin-bottom: 1rem;
                }

                .author-bio p {
                    font-size: 1.125rem;
                    color: #57534e;
                    line-height: 1.625;
                    margin-bottom: 1.5rem;
                }

                .author-rating {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    color: #78716c;
                    font-weight: 500;
                }

                .stars {
                    display: flex;
                    gap: 0.25rem;
                    color: #eab308;
                }

                .stars .icon {
                    width: 1.25rem;
                    height: 1.25rem;
                }

                .author-photo {
                    position: relative;
                }

                .author-photo img {
                    width: 100%;
                    aspect-ratio: 1 / 1;
                    object-fit: cover;
                    border-radius: 3rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .experience-badge {
                    position: absolute;
                    bottom: -1.5rem;
                    right: -1.5rem;
                    background: #059669;
                    color: #fff;
                    padding: 2rem;
                    border-radius: 1.5rem;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                }

                .experience-years {
                    font-size: 2.25rem;
                    font-weight: 900;
                    margin-bottom: 0.25rem;
                }

                .experience-label {
                    font-size: 0.75rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                }

                @media (max-width: 1024px) {
                    .experience-badge {
                        display: none;
                    }
                }

                @media (max-width: 768px) {
                    .author-grid {
                        grid-template-columns: 1fr;
                    }

                    .author-photo {
                        order: -1;
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

    #[tokio::test]
    async fn always_five_filled_stars() {
        let rendered = yew::ServerRenderer::<Author>::new()
            .hydratable(false)
            .render()
            .await;
        let stars = rendered.split(r#"class="stars""#).nth(1).unwrap_or_default();
        let stars = stars.split("</div>").next().unwrap_or_default();

        assert_eq!(stars.matches("<polygon").count(), 5);
        assert_eq!(stars.matches(r#"fill="currentColor""#).count(), 5);
        assert!(rendered.contains("10+"));
    }

    #[tokio::test]
    async fn profile_photo_suppresses_referrer() {
        let rendered = yew::ServerRenderer::<Author>::new()
            .hydratable(false)
            .render()
            .await;

        let imgs: Vec<&str> = rendered
            .split("<img")
            .skip(1)
            .map(|rest| rest.split('>').next().unwrap_or_default())
            .collect();
        assert_eq!(imgs.len(), 1);
        assert!(imgs[0].contains(r#"referrerpolicy="no-referrer""#));
        assert!(imgs[0].contains(AUTHOR_IMAGE_URL));
    }
}
