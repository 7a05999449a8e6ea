use contracts::shared::errors::{AppError, ValidationError};
use contracts::system::auth::LoginRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auth::api;
use crate::system::auth::context::{use_api, use_auth, AuthState};

const MIN_PASSWORD_LEN: usize = 6;

/// Client-side checks before the credentials are sent
pub fn validate_credentials(email: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    let mut err = ValidationError::new("Por favor, verifica los datos ingresados");
    let email = email.trim();

    let valid_email = email
        .split_once('@')
        .map(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'))
        .unwrap_or(false);
    if !valid_email {
        err.add_field("email", "El formato del email no es válido");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        err.add_field("password", "La contraseña debe tener al menos 6 caracteres");
    }

    if err.has_errors() {
        Err(err)
    } else {
        Ok(LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let field_errors: RwSignal<Option<ValidationError>> = RwSignal::new(None);
    let (is_loading, set_is_loading) = signal(false);

    let auth_state = use_auth();
    let client = use_api();
    let navigate = use_navigate();

    // Already signed in
    Effect::new({
        let navigate = navigate.clone();
        move |_| {
            if auth_state.get().is_authenticated {
                navigate("/dashboard", Default::default());
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        set_error_message.set(None);

        let credentials = match validate_credentials(&email.get(), &password.get()) {
            Ok(c) => c,
            Err(e) => {
                field_errors.set(Some(e));
                return;
            }
        };
        field_errors.set(None);
        set_is_loading.set(true);

        let client = client.clone();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login_as_admin(&client, &credentials).await {
                Ok(result) => {
                    auth_state.set(AuthState {
                        is_authenticated: true,
                        user: result.login.user,
                        staff: Some(result.staff),
                    });
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    let message = match &e {
                        AppError::Auth(auth) => auth.message.clone(),
                        other => other.user_message(),
                    };
                    set_error_message.set(Some(message));
                }
            }
            set_is_loading.set(false);
        });
    };

    let field_error = move |field: &'static str| {
        field_errors.with(|errs| {
            errs.as_ref()
                .and_then(|e| e.field_message(field))
                .map(|m| view! { <span class="form-group__error">{m.to_string()}</span> })
        })
    };

    view! {
        <PageFrame page_id="sys_login--system" category=PAGE_CAT_SYSTEM>
            <div class="login-container">
                <div class="login-box">
                    <h1>"Pololitos"</h1>
                    <h2>"Panel de administración"</h2>

                    <Show when=move || error_message.get().is_some()>
                        <div class="error-message">
                            {move || error_message.get().unwrap_or_default()}
                        </div>
                    </Show>

                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="email">"Email"</label>
                            <input
                                type="email"
                                id="email"
                                placeholder="admin@pololitos.cl"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                            {move || field_error("email")}
                        </div>

                        <div class="form-group">
                            <label for="password">"Contraseña"</label>
                            <input
                                type="password"
                                id="password"
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                disabled=move || is_loading.get()
                            />
                            {move || field_error("password")}
                        </div>

                        <button
                            type="submit"
                            class="btn-primary"
                            disabled=move || is_loading.get()
                        >
                            {move || if is_loading.get() { "Ingresando..." } else { "Ingresar" }}
                        </button>
                    </form>
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials() {
        let ok = validate_credentials(" admin@pololitos.cl ", "secreto").unwrap();
        assert_eq!(ok.email, "admin@pololitos.cl");

        let err = validate_credentials("admin", "123").unwrap_err();
        assert_eq!(err.field_message("email"), Some("El formato del email no es válido"));
        assert_eq!(
            err.field_message("password"),
            Some("La contraseña debe tener al menos 6 caracteres")
        );

        let err = validate_credentials("a@b.cl", "12345").unwrap_err();
        assert!(err.field_message("email").is_none());
    }
}
