use contracts::domain::bank_account::{BankAccountForm, BankAccountRow};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::modal::{Modal, ModalService};
use crate::layout::toast::Toasts;
use crate::shared::api_utils::{api_url, post_json, put_json, ApiError};

const CURRENCIES: &[&str] = &["EUR", "USD", "GBP", "PLN", "CZK"];

/// Create/edit dialog for a bank account. Visibility is owned by the
/// app [`ModalService`]; `editing` carries the row being edited, `None`
/// for a new account.
#[component]
pub fn BankAccountFormModal(
    editing: RwSignal<Option<BankAccountRow>>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let modal = use_context::<ModalService>().expect("ModalService not provided in context");
    let toasts = use_context::<Toasts>().expect("Toasts context not found");

    let bank_name = RwSignal::new(String::new());
    let holder_name = RwSignal::new(String::new());
    let iban = RwSignal::new(String::new());
    let currency = RwSignal::new("EUR".to_string());
    let (submitting, set_submitting) = signal(false);
    let (form_error, set_form_error) = signal(Option::<String>::None);

    // Prefill on edit, reset on create.
    Effect::new(move |_| match editing.get() {
        Some(row) => {
            bank_name.set(row.bank_name);
            holder_name.set(row.holder_name);
            iban.set(row.iban);
            currency.set(row.currency);
        }
        None => {
            bank_name.set(String::new());
            holder_name.set(String::new());
            iban.set(String::new());
            currency.set("EUR".to_string());
        }
    });

    let submit = move |_| {
        let form = BankAccountForm {
            bank_name: bank_name.get_untracked(),
            holder_name: holder_name.get_untracked(),
            iban: iban.get_untracked(),
            currency: currency.get_untracked(),
        };
        if let Err(message) = form.validate() {
            set_form_error.set(Some(message));
            return;
        }
        set_form_error.set(None);
        set_submitting.set(true);

        let editing_id = editing.get_untracked().map(|row| row.id);
        spawn_local(async move {
            let result: Result<BankAccountRow, ApiError> = match editing_id {
                Some(id) => {
                    put_json(&api_url(&format!("/api/bank-accounts/{}", id)), &form).await
                }
                None => post_json(&api_url("/api/bank-accounts"), &form).await,
            };
            set_submitting.set(false);
            match result {
                Ok(_) => {
                    toasts.success(if editing_id.is_some() {
                        "Bank account updated"
                    } else {
                        "Bank account created"
                    });
                    modal.hide();
                    on_saved.run(());
                }
                Err(err) => {
                    set_form_error.set(Some(err.user_message("Failed to save bank account")));
                }
            }
        });
    };

    view! {
        <Modal>
            <div class="modal-form">
                <h2 class="modal-form__title">
                    {move || if editing.get().is_some() { "Edit bank account" } else { "New bank account" }}
                </h2>

                {move || form_error.get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Bank name"</Label>
                    <Input value=bank_name placeholder="N26" />

                    <Label>"Account holder"</Label>
                    <Input value=holder_name placeholder="Acme Logistics GmbH" />

                    <Label>"IBAN"</Label>
                    <Input value=iban placeholder="DE89 3704 0044 0532 0130 00" />

                    <Label>"Currency"</Label>
                    <select
                        class="modal-form__select"
                        prop:value=move || currency.get()
                        on:change=move |ev| currency.set(event_target_value(&ev))
                    >
                        {CURRENCIES.iter().map(|&code| view! {
                            <option value=code selected=move || currency.get() == code>
                                {code}
                            </option>
                        }).collect_view()}
                    </select>
                </Flex>

                <div class="modal-form__actions">
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| modal.hide()
                        disabled=Signal::derive(move || submitting.get())
                    >
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=submit
                        disabled=Signal::derive(move || submitting.get())
                    >
                        {move || if submitting.get() { "Saving..." } else { "Save" }}
                    </Button>
                </div>
            </div>
        </Modal>
    }
}
