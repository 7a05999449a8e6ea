//! Info tab - profile, bank account and balance

use contracts::enums::tier::tier_label;
use contracts::enums::VerificationLevel;
use leptos::prelude::*;

use super::super::view_model::UserDetailsVm;
use crate::shared::components::table::number_format::format_clp;
use crate::shared::date_utils::{format_date, format_datetime};

fn or_dash(value: Option<&str>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "—".to_string())
}

/// Known levels are translated, anything else is shown as sent
fn verification_level_label(raw: &str) -> String {
    VerificationLevel::from_code(raw)
        .map(|level| level.display_name().to_string())
        .unwrap_or_else(|| or_dash(Some(raw)))
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Sí"
    } else {
        "No"
    }
}

#[component]
fn Field(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="detail-field">
            <span class="detail-field__label">{label}</span>
            <span class="detail-field__value">{value}</span>
        </div>
    }
}

#[component]
pub fn InfoTab(vm: UserDetailsVm) -> impl IntoView {
    move || {
        let Some(user) = vm.user.with(|u| u.ready().cloned()) else {
            return view! { <div>"Sin datos"</div> }.into_any();
        };

        let bank = user.bank_account.clone();
        let balance = user.balance.clone();

        view! {
            <div class="detail-grid">
                <section class="card">
                    <h3 class="card__title">"Perfil"</h3>
                    <Field label="ID" value=user.id.to_string() />
                    <Field label="Email" value=user.email.clone() />
                    <Field label="Teléfono" value=or_dash(user.phone.as_deref()) />
                    <Field label="Ubicación" value=or_dash(user.location.as_deref()) />
                    <Field label="Registro" value=format_date(&user.created_at) />
                    <Field label="Nivel" value=user.tier.as_deref().map(tier_label).unwrap_or_else(|| "—".to_string()) />
                    <Field label="Bio" value=or_dash(user.bio.as_deref()) />
                </section>

                <section class="card">
                    <h3 class="card__title">"Desempeño"</h3>
                    <Field label="Tareas" value=user.total_tasks.to_string() />
                    <Field label="Calificación" value=format!("{:.1} ({} reseñas)", user.average_rating, user.total_ratings) />
                    <Field label="Ganancias totales" value=format_clp(user.earnings_total) />
                    <Field
                        label="Ganancias últimos 30 días"
                        value=user.earnings_last_30_days.map(format_clp).unwrap_or_else(|| "—".to_string())
                    />
                </section>

                <section class="card">
                    <h3 class="card__title">"Verificación"</h3>
                    <Field label="Identidad" value=yes_no(user.identity_verified) />
                    <Field label="Antecedentes" value=yes_no(user.criminal_record_verified) />
                    <Field label="Domicilio" value=yes_no(user.address_verified) />
                    <Field label="Nivel de verificación" value=verification_level_label(&user.verification_level) />
                </section>

                <section class="card">
                    <h3 class="card__title">"Cuenta bancaria"</h3>
                    {match bank {
                        Some(bank) => view! {
                            <Field label="Titular" value=bank.nombre_completo />
                            <Field label="RUT" value=bank.rut />
                            <Field label="Banco" value=bank.banco />
                            <Field label="Tipo de cuenta" value=bank.tipo_cuenta />
                            <Field label="Número" value=bank.numero_cuenta_enmascarado />
                        }.into_any(),
                        None => view! { <p class="text-muted">"Sin cuenta bancaria registrada"</p> }.into_any(),
                    }}
                </section>

                <section class="card">
                    <h3 class="card__title">"Saldo"</h3>
                    {match balance {
                        Some(balance) => view! {
                            <Field label="Disponible" value=format_clp(balance.available_balance) />
                            <Field label="Pendiente" value=format_clp(balance.pending_balance) />
                            <Field label="Ganado" value=format_clp(balance.total_earnings) />
                            <Field label="Retirado" value=format_clp(balance.total_withdrawn) />
                            <Field
                                label="Último movimiento"
                                value=balance.last_transaction_at.as_deref().map(format_datetime).unwrap_or_else(|| "—".to_string())
                            />
                        }.into_any(),
                        None => view! { <p class="text-muted">"Sin saldo registrado"</p> }.into_any(),
                    }}
                </section>
            </div>
        }
        .into_any()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_level_label() {
        assert_eq!(verification_level_label("PREMIUM"), "Premium");
        assert_eq!(verification_level_label("GOLD_CHECK"), "GOLD_CHECK");
        assert_eq!(verification_level_label(" "), "—");
    }
}
