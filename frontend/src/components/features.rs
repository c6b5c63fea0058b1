use yew::prelude::*;

use crate::content::Feature;
use crate::utils::hover::use_hover;

#[derive(Properties, PartialEq)]
pub struct FeaturesProps {
    pub features: Vec<Feature>,
}

#[derive(Properties, PartialEq)]
struct FeatureCardProps {
    feature: Feature,
}

#[function_component(FeatureCard)]
fn feature_card(props: &FeatureCardProps) -> Html {
    let hover = use_hover();
    let feature = &props.feature;

    html! {
        <div
            class={classes!("feature-card", hover.class())}
            style={format!("--accent: {};", feature.color)}
            onmouseenter={hover.onmouseenter.clone()}
            onmouseleave={hover.onmouseleave.clone()}
        >
            <div class="feature-icon">{feature.icon.glyph()}</div>
            <h3 class="feature-title">{&feature.title}</h3>
            <p class="feature-desc">{&feature.description}</p>
        </div>
    }
}

#[function_component(Features)]
pub fn features(props: &FeaturesProps) -> Html {
    html! {
        <section id="features" class="features-section">
            <div class="features-container">
                <div class="features-grid">
                    { for props.features.iter().map(|feature| html! {
                        <FeatureCard key={feature.title.clone()} feature={feature.clone()} />
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .features-section {
                    padding: 6rem 5%;
                    background: var(--white);
                }
                .features-container {
                    max-width: var(--max-width);
                    margin: 0 auto;
                }
                .features-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 3rem;
                }
                .feature-card {
                    background: var(--light);
                    padding: 2.5rem;
                    border-radius: 20px;
                    text-align: left;
                    transition: all 0.3s cubic-bezier(0.175, 0.885, 0.32, 1.275);
                    border: 2px solid transparent;
                    cursor: default;
                }
                .feature-card.is-hovered {
                    transform: translateY(-10px);
                    box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                    border-color: var(--accent);
                }
                .feature-icon {
                    width: 60px;
                    height: 60px;
                    border-radius: 15px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 1.8rem;
                    margin-bottom: 1.5rem;
                    background: var(--accent);
                    box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
                }
                .feature-title {
                    font-size: 1.5rem;
                    font-weight: 800;
                    margin-bottom: 0.8rem;
                    color: var(--dark);
                }
                .feature-desc {
                    color: var(--text-muted);
                    line-height: 1.6;
                }
                "#}
            </style>
        </section>
    }
}
