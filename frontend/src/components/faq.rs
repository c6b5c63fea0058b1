use web_sys::MouseEvent;
use yew::prelude::*;

use crate::content::FaqEntry;
use crate::state::accordion::{check_entry, AccordionAction, AccordionState};
use crate::utils::hover::use_hover;

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub entries: Vec<FaqEntry>,
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    is_open: bool,
    indicator: &'static str,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let hover = use_hover();
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let id = props.entry.id;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(id);
        })
    };

    html! {
        <div
            class={classes!("faq-item", props.is_open.then_some("open"), hover.class())}
            onmouseenter={hover.onmouseenter.clone()}
            onmouseleave={hover.onmouseleave.clone()}
        >
            <button class="faq-question" onclick={toggle}>
                <span class="question-text">{&props.entry.question}</span>
                <span class="toggle-icon">{props.indicator}</span>
            </button>
            {
                if props.is_open {
                    html! { <div class="faq-answer">{&props.entry.answer}</div> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    let accordion = use_reducer_eq(AccordionState::default);

    let on_toggle = {
        let dispatcher = accordion.dispatcher();
        let entries = props.entries.clone();
        Callback::from(move |id: usize| match check_entry(&entries, id) {
            Ok(()) => {
                log::debug!("FAQ toggle on entry {}", id);
                dispatcher.dispatch(AccordionAction::Toggle(id));
            }
            Err(e) => log::error!("Ignoring FAQ toggle: {}", e),
        })
    };

    html! {
        <section id="faq" class="faq-section">
            <h2 class="faq-header">{"Common Questions"}</h2>
            { for props.entries.iter().map(|entry| html! {
                <FaqItem
                    key={entry.id.to_string()}
                    entry={entry.clone()}
                    is_open={accordion.is_expanded(entry.id)}
                    indicator={accordion.indicator(entry.id)}
                    on_toggle={on_toggle.clone()}
                />
            }) }
            <style>
                {r#"
                .faq-section {
                    padding: 6rem 5%;
                    max-width: 800px;
                    margin: 0 auto;
                }
                .faq-header {
                    text-align: center;
                    font-size: 2.5rem;
                    font-weight: 800;
                    margin-bottom: 4rem;
                    color: var(--dark);
                }
                .faq-item {
                    margin-bottom: 1.5rem;
                    background: white;
                    border-radius: 16px;
                    box-shadow: 0 4px 6px rgba(0, 0, 0, 0.02);
                    transition: box-shadow 0.3s ease;
                    border: 1px solid #f0f0f0;
                    overflow: hidden;
                }
                .faq-item.is-hovered {
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.05);
                }
                .faq-question {
                    width: 100%;
                    padding: 1.5rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    cursor: pointer;
                    font-weight: bold;
                    font-size: 1.1rem;
                    color: var(--dark);
                    background: none;
                    border: none;
                    text-align: left;
                    transition: color 0.2s;
                }
                .toggle-icon {
                    color: #cbd5e0;
                    font-size: 0.8rem;
                }
                .faq-item.open .toggle-icon {
                    color: var(--primary);
                }
                .faq-answer {
                    padding: 1rem 2rem 1.5rem;
                    color: var(--text-muted);
                    line-height: 1.6;
                    border-top: 1px solid #f7f9fc;
                    margin-top: -0.5rem;
                }
                "#}
            </style>
        </section>
    }
}
