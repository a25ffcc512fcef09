use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::content::{PROBLEM_POINTS, SOLUTION_POINTS};

#[derive(Properties, PartialEq)]
struct ContrastCardProps {
    icon: Icon,
    title: &'static str,
    points: &'static [&'static str],
    tone: &'static str,
}

#[function_component(ContrastCard)]
fn contrast_card(props: &ContrastCardProps) -> Html {
    html! {
        <div class={classes!("contrast-card", props.tone)}>
            <div class="contrast-icon">
                <SvgIcon icon={props.icon} />
            </div>
            <h3>{props.title}</h3>
            <ul>
                { for props.points.iter().map(|point| html! {
                    <li key={*point}><span class="bullet">{"•"}</span>{*point}</li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(ProblemSolution)]
pub fn problem_solution() -> Html {
    html! {
        <section class="problem-solution">
            <div class="section-intro">
                <h2>{"Tired of losing your rhythm searching for chords?"}</h2>
                <p>
                    {"Many musicians get frustrated when they forget a complex position or can't find clear diagrams online. They lose valuable time that should be spent playing."}
                </p>
            </div>

            <div class="contrast-grid">
                <ContrastCard icon={Icon::X} title="The Common Problem" points={PROBLEM_POINTS} tone="problem" />
                <ContrastCard icon={Icon::CheckCircle} title="Our Solution" points={SOLUTION_POINTS} tone="solution" />
            </div>

            <style>
                {r#"
                .problem-solution {
                    padding: 6rem 1.5rem;
                    background: #fff;
                }

                .section-intro {
                    text-align: center;
                    max-width: 48rem;
                    margin: 0 auto 4rem;
                }

                .section-intro h2 {
                    font-size: 2.25rem;
                    font-weight: 700;
                    color: #1c1917;
                    margin-bottom: 1.5rem;
                }

                .section-intro p {
                    font-size: 1.125rem;
                    color: #57534e;
                }

                .contrast-grid {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 2rem;
                }

                .contrast-card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    transition: transform 0.3s ease;
                }

                .contrast-card:hover {
                    transform: translateY(-5px);
                }

                .contrast-card.problem {
                    background: #fafaf9;
                    border: 1px solid #f5f5f4;
                }

                .contrast-card.solution {
                    background: #ecfdf5;
                    border: 1px solid #d1fae5;
                }

                .contrast-icon {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    margin-bottom: 1.5rem;
                }

                .contrast-icon .icon {
                    width: 1.5rem;
                    height: 1.5rem;
                }

                .problem .contrast-icon {
                    background: #fee2e2;
                    color: #dc2626;
                }

                .solution .contrast-icon {
                    background: #d1fae5;
                    color: #059669;
                }

                .contrast-card h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin-bottom: 1rem;
                }

                .contrast-card ul {
                    list-style: none;
                    padding: 0;
                    color: #57534e;
                }

                .contrast-card li {
                    display: flex;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }

                .bullet {
                    font-weight: 700;
                }

                .problem .bullet {
                    color: #ef4444;
                }

                .solution .bullet {
                    color: #059669;
                }

                @media (max-width: 768px) {
                    .contrast-grid {
                        grid-template-columns: 1fr;
                    }

                    .section-intro h2 {
                        font-size: 1.875rem;
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
    async fn two_cards_with_three_bullets_each() {
        let rendered = yew::ServerRenderer::<ProblemSolution>::new()
            .hydratable(false)
            .render()
            .await;

        assert_eq!(rendered.matches(r#"class="contrast-card "#).count(), 2);
        assert_eq!(rendered.matches("<li>").count(), 6);
        for point in PROBLEM_POINTS.iter().chain(SOLUTION_POINTS) {
            assert!(
                rendered.contains(&format!("</span>{}</li>", point)),
                "missing bullet {}",
                point
            );
        }

        let problem = rendered.find("The Common Problem").unwrap_or(usize::MAX);
        let solution = rendered.find("Our Solution").unwrap_or(usize::MAX);
        assert!(problem < solution && solution != usize::MAX);
    }
}
