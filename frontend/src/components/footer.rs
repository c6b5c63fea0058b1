use yew::prelude::*;

use crate::config;
use crate::utils::hover::use_hover;

struct SocialLink {
    label: &'static str,
    glyph: &'static str,
    color: &'static str,
}

const SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink { label: "Twitter", glyph: "𝕏", color: "#1DA1F2" },
    SocialLink { label: "Instagram", glyph: "◎", color: "#E1306C" },
    SocialLink { label: "GitHub", glyph: "⌥", color: "#333" },
    SocialLink { label: "LinkedIn", glyph: "in", color: "#0077b5" },
];

#[derive(Properties, PartialEq)]
struct SocialIconProps {
    label: &'static str,
    glyph: &'static str,
    color: &'static str,
}

#[function_component(SocialIcon)]
fn social_icon(props: &SocialIconProps) -> Html {
    let hover = use_hover();
    html! {
        <span
            class={classes!("footer-icon", hover.class())}
            style={format!("--brand: {};", props.color)}
            title={props.label}
            onmouseenter={hover.onmouseenter.clone()}
            onmouseleave={hover.onmouseleave.clone()}
        >
            {props.glyph}
        </span>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="footer-container">
                <div class="footer-brand">{config::BRAND_NAME}</div>
                <div class="footer-socials">
                    { for SOCIAL_LINKS.iter().map(|link| html! {
                        <SocialIcon key={link.label} label={link.label} glyph={link.glyph} color={link.color} />
                    }) }
                </div>
                <p class="footer-copy">{format!("© 2025 {}. All rights reserved.", config::BRAND_NAME)}</p>
            </div>
            <style>
                {r#"
                .site-footer {
                    padding: 5rem 5%;
                    text-align: center;
                    background: white;
                    border-top: 1px solid #f0f0f0;
                }
                .footer-container {
                    max-width: var(--max-width);
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }
                .footer-brand {
                    color: var(--primary);
                    font-weight: 900;
                    font-size: 1.5rem;
                    margin-bottom: 2rem;
                    letter-spacing: -0.5px;
                }
                .footer-socials {
                    display: flex;
                    justify-content: center;
                    gap: 2.5rem;
                    margin-bottom: 2.5rem;
                    font-size: 1.4rem;
                }
                .footer-icon {
                    color: #cbd5e0;
                    cursor: pointer;
                    transition: all 0.3s cubic-bezier(0.175, 0.885, 0.32, 1.275);
                }
                .footer-icon.is-hovered {
                    color: var(--brand);
                    transform: translateY(-5px);
                }
                .footer-copy {
                    font-size: 0.9rem;
                    color: var(--text-muted);
                }
                "#}
            </style>
        </footer>
    }
}
