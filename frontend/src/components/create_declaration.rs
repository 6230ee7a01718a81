use crate::auth::use_auth;
use crate::busy::busy;
use crate::components::declaration::YearInput;
use crate::components::feedback_modal::use_feedback;
use crate::components::layout::ProtectedLayout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taxfy_shared::outcome::Operation;
use taxfy_shared::validation::current_year;
use taxfy_shared::workflow;

#[component]
pub fn CreateDeclarationPage() -> impl IntoView {
    let auth = use_auth();
    let feedback = use_feedback();

    let year = RwSignal::new(String::new());
    let (is_loading, set_is_loading) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        // 非法年份不发请求，也不进入加载状态
        let parsed = match workflow::check_year(
            &year.get_untracked(),
            current_year(),
            Operation::CreateDeclaration,
        ) {
            Ok(parsed) => parsed,
            Err(outcome) => {
                feedback.show_outcome(outcome);
                return;
            }
        };

        let api = auth.api();
        spawn_local(async move {
            let _busy = busy(set_is_loading);
            let outcome = workflow::create_declaration(&api, parsed).await;
            if outcome.is_success() {
                let _ = year.try_set(String::new());
            }
            feedback.show_outcome(outcome);
        });
    };

    view! {
        <ProtectedLayout>
            <div class="max-w-lg mx-auto">
                <h1 class="text-2xl font-bold mb-4">"Nova Declaração"</h1>
                <form class="card bg-base-100 shadow-sm" on:submit=on_submit>
                    <div class="card-body gap-4">
                        <YearInput value=year disabled=is_loading />
                        <div class="card-actions justify-end">
                            <button type="submit" class="btn btn-primary px-6" disabled=move || is_loading.get()>
                                {move || if is_loading.get() { "Criando..." } else { "Criar Declaração" }}
                            </button>
                        </div>
                    </div>
                </form>
            </div>
        </ProtectedLayout>
    }
}
