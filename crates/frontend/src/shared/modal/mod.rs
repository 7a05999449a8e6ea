use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Centered dialog over a dimmed overlay; Escape, the overlay and the close
/// button all call `on_close`
#[component]
pub fn Modal(
    #[prop(into)]
    title: String,
    on_close: Callback<()>,
    /// Buttons rendered under the body (confirm, cancel...)
    #[prop(optional, into)]
    footer: Option<ViewFn>,
    #[prop(optional)]
    wide: bool,
    children: Children,
) -> impl IntoView {
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let modal_class = if wide { "modal modal--wide" } else { "modal" };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close.run(())>
            <div class=modal_class on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| on_close.run(())>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer.run()}</div> })}
            </div>
        </div>
    }
}

/// Yes/no confirmation with an optional reason field
#[component]
pub fn ConfirmModal(
    #[prop(into)]
    title: String,
    #[prop(into)]
    message: String,
    #[prop(into)]
    confirm_label: String,
    /// When set, a textarea bound to this signal is shown
    #[prop(optional_no_strip)]
    reason: Option<RwSignal<String>>,
    /// Confirm stays disabled until a non-blank reason is entered
    #[prop(optional)]
    reason_required: bool,
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let can_confirm = move || {
        if busy.get() {
            return false;
        }
        match reason {
            Some(r) if reason_required => !r.get().trim().is_empty(),
            _ => true,
        }
    };

    view! {
        <Modal
            title=title
            on_close=on_cancel
            footer=move || view! {
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    "Cancelar"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || !can_confirm()
                    on:click=move |_| on_confirm.run(())
                >
                    {confirm_label.clone()}
                </button>
            }
        >
            <p class="modal__message">{message}</p>
            {reason.map(|r| view! {
                <div class="form-group">
                    <label>{if reason_required { "Motivo (obligatorio)" } else { "Motivo (opcional)" }}</label>
                    <textarea
                        class="textarea"
                        rows="3"
                        prop:value=move || r.get()
                        on:input=move |ev| r.set(event_target_value(&ev))
                    ></textarea>
                </div>
            })}
        </Modal>
    }
}
