use crate::auth::use_auth;
use crate::busy::{ResetOnDrop, busy};
use crate::components::declaration::YearInput;
use crate::components::feedback_modal::use_feedback;
use crate::components::layout::ProtectedLayout;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taxfy_shared::Declaration;
use taxfy_shared::outcome::Operation;
use taxfy_shared::route::AppRoute;
use taxfy_shared::validation::current_year;
use taxfy_shared::workflow;

#[component]
pub fn EditDeclarationPage(id: Option<String>) -> impl IntoView {
    view! {
        <ProtectedLayout>
            {
                let id = id.clone();
                match id {
                    Some(id) => view! { <EditForm id=id /> }.into_any(),
                    None => view! { <SelectDeclaration /> }.into_any(),
                }
            }
        </ProtectedLayout>
    }
}

/// 未指定申报时的提示
#[component]
fn SelectDeclaration() -> impl IntoView {
    view! {
        <div class="max-w-4xl mx-auto">
            <h1 class="text-2xl font-bold mb-4">"Editar Declaração"</h1>
            <p class="text-base-content/70 mb-4">"Selecione uma declaração na lista para editar."</p>
            <Link to=AppRoute::History class="btn btn-primary">
                "Ver Histórico"
            </Link>
        </div>
    }
}

#[component]
fn EditForm(id: String) -> impl IntoView {
    let auth = use_auth();
    let feedback = use_feedback();

    let (declaration, set_declaration) = signal(Option::<Declaration>::None);
    let year = RwSignal::new(String::new());
    let (is_loading, set_is_loading) = signal(true);
    let (is_saving, set_is_saving) = signal(false);

    // 挂载时加载一次
    {
        let api = auth.api();
        let id = id.clone();
        spawn_local(async move {
            let _loading = ResetOnDrop::new(set_is_loading, true, false);
            match workflow::load_declaration(&api, &id).await {
                Ok(loaded) => {
                    let _ = year.try_set(loaded.year.to_string());
                    let _ = set_declaration.try_set(Some(loaded));
                }
                Err(outcome) => feedback.show_outcome(outcome),
            }
        });
    }

    let id = StoredValue::new(id);
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_saving.get_untracked() {
            return;
        }

        let parsed = match workflow::check_year(
            &year.get_untracked(),
            current_year(),
            Operation::UpdateDeclaration,
        ) {
            Ok(parsed) => parsed,
            Err(outcome) => {
                feedback.show_outcome(outcome);
                return;
            }
        };

        let api = auth.api();
        let id = id.get_value();
        spawn_local(async move {
            let _busy = busy(set_is_saving);
            let outcome = workflow::update_declaration(&api, &id, parsed).await;
            feedback.show_outcome(outcome);
        });
    };

    let status = move || {
        declaration.with(|d| {
            d.as_ref()
                .map(|d| d.status_label().to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="max-w-lg mx-auto">
            <h1 class="text-2xl font-bold mb-4">"Editar Declaração"</h1>
            {move || {
                if is_loading.get() {
                    view! { <p class="text-base-content/70">"Carregando..."</p> }.into_any()
                } else if declaration.with(Option::is_none) {
                    view! { <p class="text-base-content/70">"Declaração não encontrada."</p> }
                        .into_any()
                } else {
                    view! {
                        <form class="card bg-base-100 shadow-sm" on:submit=on_submit>
                            <div class="card-body gap-4">
                                <YearInput value=year disabled=is_saving />
                                <div class="text-sm text-base-content/70">"Status: " {status}</div>
                                <div class="card-actions justify-end">
                                    <button type="submit" class="btn btn-primary px-6" disabled=move || is_saving.get()>
                                        {move || if is_saving.get() { "Salvando..." } else { "Salvar" }}
                                    </button>
                                </div>
                            </div>
                        </form>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}
