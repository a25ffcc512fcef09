use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{Icon, SvgIcon};
use crate::content::{FaqItem, FAQS};
use crate::motion::collapsible_classes;
use crate::state::{FaqAccordion, FaqAction};

#[derive(Properties, PartialEq)]
pub struct FaqListProps {
    pub items: &'static [FaqItem],
    pub open: Option<usize>,
    pub on_select: Callback<usize>,
}

#[function_component(FaqList)]
pub fn faq_list(props: &FaqListProps) -> Html {
    html! {
        <div class="faq-list">
            { for props.items.iter().enumerate().map(|(index, item)| {
                let is_open = props.open == Some(index);
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        on_select.emit(index);
                    })
                };
                html! {
                    <div key={index.to_string()} class={classes!("faq-item", is_open.then(|| "open"))}>
                        <button class="faq-question" aria-expanded={is_open.to_string()} {onclick}>
                            <span class="question-text">{item.question}</span>
                            <SvgIcon icon={Icon::ChevronDown} class={classes!("toggle-icon")} />
                        </button>
                        <div class={collapsible_classes(is_open)} aria-hidden={(!is_open).to_string()}>
                            <div class="collapsible-inner">
                                <div class="faq-answer">{item.answer}</div>
                            </div>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_reducer(|| FaqAccordion::new(FAQS.len()));

    let on_select = {
        let accordion = accordion.dispatcher();
        Callback::from(move |index: usize| accordion.dispatch(FaqAction::Select(index)))
    };

    html! {
        <section class="faq">
            <div class="faq-container">
                <h2>{"Frequently Asked Questions"}</h2>
                <FaqList items={FAQS} open={accordion.open()} {on_select} />
            </div>

            <style>
                {r#"
                .faq {
                    padding: 6rem 1.5rem;
                    background: #fff;
                }

                .faq-container {
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .faq-container h2 {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #1c1917;
                    margin-bottom: 3rem;
                    text-align: center;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    border: 1px solid #f5f5f4;
                    border-radius: 1rem;
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.5rem;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                    transition: background 0.2s ease;
                }

                .faq-question:hover {
                    background: #fafaf9;
                }

                .question-text {
                    font-weight: 700;
                    color: #1c1917;
                }

                .toggle-icon {
                    width: 1.25rem;
                    height: 1.25rem;
                    color: #a8a29e;
                    transition: transform 0.3s ease;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                }

                .faq-answer {
                    padding: 0 1.5rem 1.5rem;
                    color: #57534e;
                    line-height: 1.625;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use yew::Reducible;

    async fn render_with(open: Option<usize>) -> String {
        yew::ServerRenderer::<FaqList>::with_props(move || FaqListProps {
            items: FAQS,
            open,
            on_select: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await
    }

    /// `aria-expanded` of every question button, in order.
    fn expanded(rendered: &str) -> Vec<bool> {
        rendered
            .split("aria-expanded=\"")
            .skip(1)
            .map(|rest| rest.starts_with("true"))
            .collect()
    }

    #[tokio::test]
    async fn section_opens_on_first_question() {
        let rendered = yew::ServerRenderer::<Faq>::new()
            .hydratable(false)
            .render()
            .await;

        assert!(rendered.contains("How do I receive the material?"));
        assert_eq!(expanded(&rendered), vec![true, false, false, false]);
    }

    #[tokio::test]
    async fn selecting_entries_walks_the_accordion() {
        let mut state = Rc::new(FaqAccordion::new(FAQS.len()));
        assert_eq!(FAQS[0].question, "How do I receive the material?");
        assert_eq!(expanded(&render_with(state.open()).await), vec![true, false, false, false]);

        state = state.reduce(FaqAction::Select(2));
        assert_eq!(expanded(&render_with(state.open()).await), vec![false, false, true, false]);

        state = state.reduce(FaqAction::Select(2));
        assert_eq!(state.open(), None);
        let rendered = render_with(state.open()).await;
        assert_eq!(expanded(&rendered), vec![false; FAQS.len()]);
        assert!(!rendered.contains("collapsible open"));
    }

    #[tokio::test]
    async fn answers_render_verbatim() {
        let rendered = render_with(Some(1)).await;
        for item in FAQS {
            assert!(rendered.contains(item.question));
            assert!(rendered.contains(item.answer));
        }
    }
}
