use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;
use crate::state::scroll::{self, ScrollMode};
use crate::utils::hover::use_hover;
use crate::utils::scroll_source::ScrollSourceHandle;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Fired by the Login button. The navbar never opens the modal itself.
    pub on_login: Callback<()>,
    #[prop_or_default]
    pub scroll_source: ScrollSourceHandle,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let mode = use_state(ScrollMode::default);
    let login_hover = use_hover();

    // Follow the page scroll while mounted
    {
        let mode = mode.clone();
        use_effect_with_deps(
            move |source: &ScrollSourceHandle| {
                let subscription = match scroll::track(
                    &**source,
                    config::scroll_threshold(),
                    move |next| mode.set(next),
                ) {
                    Ok(subscription) => Some(subscription),
                    Err(e) => {
                        log::error!("Navbar scroll tracking unavailable: {}", e);
                        None
                    }
                };
                move || drop(subscription)
            },
            props.scroll_source.clone(),
        );
    }

    let onclick = {
        let on_login = props.on_login.clone();
        Callback::from(move |_: MouseEvent| on_login.emit(()))
    };

    html! {
        <div class={classes!("navbar-wrapper", mode.class())}>
            <nav class="navbar">
                <div class="navbar-logo">
                    <span class="navbar-logo-icon">{"🤖"}</span>
                    {config::BRAND_NAME}
                </div>
                <div class="navbar-links">
                    <a href="#features" class="navbar-link">{"Features"}</a>
                    <a href="#faq" class="navbar-link">{"FAQ"}</a>
                    <button
                        class={classes!("navbar-login", login_hover.class())}
                        onclick={onclick}
                        onmouseenter={login_hover.onmouseenter.clone()}
                        onmouseleave={login_hover.onmouseleave.clone()}
                    >
                        {"Login"}
                    </button>
                </div>
            </nav>
            <style>
                {r#"
                .navbar-wrapper {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    z-index: 1000;
                    transition: all 0.3s ease;
                    background: transparent;
                    padding: 1rem 0;
                }
                .navbar-wrapper.compact {
                    background: rgba(255, 255, 255, 0.9);
                    backdrop-filter: blur(10px);
                    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.05);
                    padding: 0.5rem 0;
                }
                .navbar {
                    max-width: var(--max-width);
                    margin: 0 auto;
                    padding: 0 5%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .navbar-logo {
                    font-size: 1.5rem;
                    font-weight: 800;
                    color: var(--dark);
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .navbar-logo-icon {
                    color: var(--primary);
                }
                .navbar-links {
                    display: flex;
                    gap: 2.5rem;
                    align-items: center;
                }
                .navbar-link {
                    color: var(--dark);
                    font-weight: 600;
                    font-size: 0.95rem;
                    text-decoration: none;
                }
                .navbar-login {
                    background: var(--primary);
                    color: white;
                    border: none;
                    padding: 0.7rem 1.8rem;
                    border-radius: 50px;
                    font-size: 0.95rem;
                    font-weight: bold;
                    cursor: pointer;
                    transition: all 0.2s;
                    box-shadow: 0 4px 10px rgba(255, 107, 107, 0.3);
                }
                .navbar-login.is-hovered {
                    transform: translateY(-2px);
                    box-shadow: 0 6px 15px rgba(255, 107, 107, 0.4);
                }
                "#}
            </style>
        </div>
    }
}
