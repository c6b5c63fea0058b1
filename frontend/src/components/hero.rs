use yew::prelude::*;

use crate::utils::hover::use_hover;

#[function_component(Hero)]
pub fn hero() -> Html {
    let cta_hover = use_hover();

    html! {
        <section class="hero">
            <div class="hero-blob hero-blob-left"></div>
            <div class="hero-blob hero-blob-right"></div>
            <div class="hero-content">
                <h1 class="hero-title">
                    {"Cook Smarter,"}<br/>
                    {"Eat "}<span class="hero-highlight">{"Better"}</span>{"."}
                </h1>
                <p class="hero-subtitle">
                    {"The AI-powered kitchen assistant that turns your messy pantry into delicious meals. Zero waste, zero stress."}
                </p>
                <button
                    class={classes!("hero-cta", cta_hover.class())}
                    onmouseenter={cta_hover.onmouseenter.clone()}
                    onmouseleave={cta_hover.onmouseleave.clone()}
                >
                    {"Start Your Journey"}
                </button>
                <div class="hero-emoji-row">
                    <div class="animate-float">
                        <span class="hero-emoji">{"🥑"}</span>
                        <span class="hero-emoji">{"🤖"}</span>
                        <span class="hero-emoji">{"🥗"}</span>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    min-height: 90vh;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    align-items: center;
                    text-align: center;
                    padding: 0 5%;
                    position: relative;
                    background: radial-gradient(circle at 50% 50%, #ffffff 0%, #f0f4f8 100%);
                    overflow: hidden;
                }
                .hero-blob {
                    position: absolute;
                    border-radius: 50%;
                    filter: blur(80px);
                    opacity: 0.1;
                    z-index: 0;
                }
                .hero-blob-left {
                    top: -10%;
                    left: -10%;
                    width: 500px;
                    height: 500px;
                    background: var(--secondary);
                    animation: float 10s infinite reverse;
                }
                .hero-blob-right {
                    bottom: 10%;
                    right: -5%;
                    width: 400px;
                    height: 400px;
                    background: var(--primary);
                    animation: float 8s infinite;
                }
                .hero-content {
                    z-index: 1;
                    max-width: 900px;
                }
                .hero-title {
                    font-size: 4rem;
                    font-weight: 800;
                    color: var(--dark);
                    margin-bottom: 1.5rem;
                    line-height: 1.1;
                    opacity: 0;
                    animation: fadeInUp 0.8s ease-out forwards;
                }
                .hero-highlight {
                    color: var(--primary);
                    display: inline-block;
                }
                .hero-subtitle {
                    font-size: 1.3rem;
                    color: var(--text-muted);
                    margin: 0 auto 3rem;
                    max-width: 650px;
                    opacity: 0;
                    animation: fadeInUp 0.8s ease-out 0.2s forwards;
                }
                .hero-cta {
                    background: var(--dark);
                    color: white;
                    padding: 1rem 3rem;
                    border-radius: 50px;
                    font-size: 1.1rem;
                    font-weight: 600;
                    border: none;
                    cursor: pointer;
                    box-shadow: 0 10px 20px rgba(44, 62, 80, 0.2);
                    transition: all 0.3s ease;
                    opacity: 0;
                    animation: popIn 0.5s cubic-bezier(0.175, 0.885, 0.32, 1.275) 0.4s forwards;
                }
                .hero-cta.is-hovered {
                    transform: translateY(-5px) scale(1.05);
                    box-shadow: 0 15px 30px rgba(44, 62, 80, 0.3);
                }
                .hero-emoji-row {
                    margin-top: 4rem;
                    opacity: 0;
                    animation: fadeInUp 1s ease-out 0.6s forwards;
                }
                .hero-emoji {
                    font-size: 4rem;
                    margin: 0 2rem;
                    display: inline-block;
                }
                @media (max-width: 768px) {
                    .hero-title {
                        font-size: 2.6rem;
                    }
                    .hero-emoji {
                        font-size: 2.8rem;
                        margin: 0 1rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
