use web_sys::MouseEvent;
use yew::prelude::*;

use crate::state::modal::{ModalAction, ModalRegion};
use crate::utils::hover::use_hover;

#[derive(Properties, PartialEq)]
pub struct LoginModalProps {
    pub visible: bool,
    /// Receives the close request from the × button or the overlay.
    pub on_action: Callback<ModalAction>,
}

/// Click handler for one region of the dialog. Containing regions stop the
/// event before it bubbles to the overlay.
fn region_handler(region: ModalRegion, on_action: Callback<ModalAction>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        if let Some(action) = region.action() {
            on_action.emit(action);
        }
        if region.contains_press() {
            e.stop_propagation();
        }
    })
}

#[derive(Properties, PartialEq)]
struct AuthButtonProps {
    variant: &'static str,
    icon: &'static str,
    label: &'static str,
}

/// Provider buttons are placeholders with no handler.
#[function_component(AuthButton)]
fn auth_button(props: &AuthButtonProps) -> Html {
    let hover = use_hover();
    html! {
        <button
            class={classes!("auth-button", props.variant, hover.class())}
            onmouseenter={hover.onmouseenter.clone()}
            onmouseleave={hover.onmouseleave.clone()}
        >
            <span class="auth-button-icon">{props.icon}</span>
            {props.label}
        </button>
    }
}

#[function_component(LoginModal)]
pub fn login_modal(props: &LoginModalProps) -> Html {
    let close_hover = use_hover();

    if !props.visible {
        return html! {};
    }

    let on_overlay = region_handler(ModalRegion::Overlay, props.on_action.clone());
    let on_content = region_handler(ModalRegion::Content, props.on_action.clone());
    let on_close_control = region_handler(ModalRegion::CloseControl, props.on_action.clone());

    html! {
        <div class="login-overlay" onclick={on_overlay}>
            <div class="login-modal" onclick={on_content}>
                <button
                    class={classes!("login-close", close_hover.class())}
                    aria-label="Close"
                    onclick={on_close_control}
                    onmouseenter={close_hover.onmouseenter.clone()}
                    onmouseleave={close_hover.onmouseleave.clone()}
                >
                    {"×"}
                </button>

                <h2 class="login-title">{"Welcome Back"}</h2>
                <p class="login-subtitle">{"Log in to access your meal plans"}</p>

                <AuthButton variant="google" icon="G" label="Continue with Google" />
                <AuthButton variant="email" icon="✉" label="Continue with Email" />

                <p class="login-signup">
                    {"Don't have an account? "}
                    <span class="login-signup-link">{"Sign up"}</span>
                </p>
            </div>
            <style>
                {r#"
                .login-overlay {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 100%;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(5px);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    z-index: 2000;
                    animation: fadeIn 0.3s ease;
                }
                .login-modal {
                    background: white;
                    padding: 3rem;
                    border-radius: 24px;
                    width: 90%;
                    max-width: 420px;
                    position: relative;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.15);
                    border: 1px solid #f0f0f0;
                    animation: popIn 0.4s cubic-bezier(0.175, 0.885, 0.32, 1.275);
                }
                .login-close {
                    position: absolute;
                    top: 1.5rem;
                    right: 1.5rem;
                    background: #f7f9fc;
                    border: none;
                    color: var(--text-muted);
                    font-size: 1rem;
                    cursor: pointer;
                    width: 2rem;
                    height: 2rem;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: all 0.2s;
                }
                .login-close.is-hovered {
                    background: #ffe5e5;
                    color: var(--primary);
                }
                .login-title {
                    text-align: center;
                    font-size: 1.8rem;
                    font-weight: 800;
                    margin-bottom: 0.5rem;
                    color: var(--dark);
                }
                .login-subtitle {
                    text-align: center;
                    color: var(--text-muted);
                    margin-bottom: 2.5rem;
                }
                .auth-button {
                    width: 100%;
                    padding: 1rem;
                    margin-bottom: 1rem;
                    border-radius: 12px;
                    border: none;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    gap: 1rem;
                    font-size: 1rem;
                    font-weight: 600;
                    cursor: pointer;
                    transition: transform 0.2s, box-shadow 0.2s;
                }
                .auth-button.is-hovered {
                    transform: translateY(-2px);
                }
                .auth-button.google {
                    background: white;
                    color: #333;
                    border: 2px solid #f0f0f0;
                }
                .auth-button.email {
                    background: var(--primary);
                    color: white;
                    box-shadow: 0 4px 10px rgba(255, 107, 107, 0.2);
                }
                .auth-button.email.is-hovered {
                    box-shadow: 0 8px 20px rgba(255, 107, 107, 0.3);
                }
                .login-signup {
                    text-align: center;
                    margin-top: 2rem;
                    color: #888;
                    font-size: 0.9rem;
                }
                .login-signup-link {
                    color: var(--primary);
                    font-weight: bold;
                    cursor: pointer;
                }
                "#}
            </style>
        </div>
    }
}
