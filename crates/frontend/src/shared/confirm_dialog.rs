//! Confirmation dialog content for destructive actions.

use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;

/// Danger-variety confirmation dialog.
///
/// While `loading` is true the confirm button shows the loading label and
/// both buttons plus the overlay are locked, so the in-flight request
/// cannot be double-submitted or abandoned by a stray click.
#[component]
pub fn ConfirmationDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] loading: Signal<bool>,
    title: &'static str,
    description: &'static str,
    confirm_label: &'static str,
    loading_label: &'static str,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <ModalFrame on_close=on_cancel locked=loading>
                <div class="confirm-dialog confirm-dialog--danger" role="alertdialog" aria-label=title>
                    <div class="confirm-dialog__icon">{icon("trash-2")}</div>
                    <h3 class="confirm-dialog__title">{title}</h3>
                    <p class="confirm-dialog__description">{description}</p>
                    <div class="confirm-dialog__actions">
                        <Button
                            appearance=ButtonAppearance::Secondary
                            disabled=loading
                            on_click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=loading
                            on_click=move |_| on_confirm.run(())
                        >
                            {move || if loading.get() { loading_label } else { confirm_label }}
                        </Button>
                    </div>
                </div>
            </ModalFrame>
        </Show>
    }
}
