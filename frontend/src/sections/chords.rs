use yew::prelude::*;

use crate::content::CHORD_VARIATIONS;

#[function_component(ChordList)]
pub fn chord_list() -> Html {
    html! {
        <section id="chords" class="chords">
            <div class="chords-panel">
                <div class="chords-body">
                    <h2>{"Variations Included in all 12 Keys"}</h2>
                    <div class="chords-grid">
                        { for CHORD_VARIATIONS.iter().map(|chord| html! {
                            <div key={*chord} class="chord-badge">
                                <span class="chord-dot"></span>
                                {*chord}
                            </div>
                        }) }
                    </div>
                    <p class="chords-note">{"And many more essential combinations for the modern musician."}</p>
                </div>
                <div class="chords-glow glow-top"></div>
                <div class="chords-glow glow-bottom"></div>
            </div>

            <style>
                {r#"
                .chords {
                    padding: 6rem 1.5rem;
                    background: #fff;
                    scroll-margin-top: 4rem;
                }

                .chords-panel {
                    max-width: 80rem;
                    margin: 0 auto;
                    background: #1c1917;
                    border-radius: 3rem;
                    padding: 4rem;
                    color: #fff;
                    overflow: hidden;
                    position: relative;
                }

                .chords-body {
                    position: relative;
                    z-index: 10;
                }

                .chords-body h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-align: center;
                    margin-bottom: 2rem;
                }

                .chords-grid {
                    display: grid;
                    grid-template-columns: repeat(4, 1fr);
                    gap: 1rem;
                }

                .chord-badge {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    background: rgba(255, 255, 255, 0.1);
                    border: 1px solid rgba(255, 255, 255, 0.1);
                    backdrop-filter: blur(4px);
                    border-radius: 0.75rem;
                    padding: 0.75rem 1rem;
                    font-size: 0.875rem;
                    font-weight: 500;
                    transition: background 0.2s ease;
                }

                .chord-badge:hover {
                    background: rgba(255, 255, 255, 0.2);
                }

                .chord-dot {
                    width: 0.375rem;
                    height: 0.375rem;
                    border-radius: 9999px;
                    background: #34d399;
                }

                .chords-note {
                    margin-top: 3rem;
                    text-align: center;
                    color: #a8a29e;
                    font-size: 0.875rem;
                }

                .chords-glow {
                    position: absolute;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 9999px;
                    filter: blur(100px);
                }

                .glow-top {
                    top: 0;
                    right: 0;
                    background: rgba(5, 150, 105, 0.2);
                }

                .glow-bottom {
                    bottom: 0;
                    left: 0;
                    background: rgba(52, 211, 153, 0.1);
                }

                @media (max-width: 1024px) {
                    .chords-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }

                @media (max-width: 768px) {
                    .chords-panel {
                        padding: 2rem;
                    }

                    .chords-grid {
                        grid-template-columns: repeat(2, 1fr);
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
    async fn badges_follow_variation_list() {
        let rendered = yew::ServerRenderer::<ChordList>::new()
            .hydratable(false)
            .render()
            .await;

        let badges: Vec<&str> = rendered
            .split(r#"<span class="chord-dot"></span>"#)
            .skip(1)
            .map(|rest| rest.split('<').next().unwrap_or_default())
            .collect();

        assert_eq!(badges.len(), 26);
        assert_eq!(badges, CHORD_VARIATIONS.to_vec());
    }
}
