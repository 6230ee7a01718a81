use crate::auth::use_auth;
use crate::busy::busy;
use crate::components::feedback_modal::use_feedback;
use crate::components::layout::DefaultLayout;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taxfy_shared::route::AppRoute;
use taxfy_shared::workflow;

mod form_state;

use form_state::FormState;

/// 单个文本输入框
#[component]
fn Field(
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    placeholder: &'static str,
    value: RwSignal<String>,
    disabled: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-control w-full">
            <label class="label" for=id>
                <span class="label-text">{label}</span>
            </label>
            <input
                id=id
                type=input_type
                placeholder=placeholder
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                disabled=move || disabled.get()
                class="input input-bordered w-full"
                required
            />
        </div>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = use_auth();
    let feedback = use_feedback();
    let form = FormState::new();
    let (is_submitting, set_is_submitting) = signal(false);

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let account = form.to_account();
        if let Err(outcome) = workflow::validate_account(&account) {
            feedback.show_outcome(outcome);
            return;
        }

        let api = auth.api();
        spawn_local(async move {
            let _busy = busy(set_is_submitting);
            let outcome = workflow::register(&api, &account).await;
            if outcome.is_success() {
                log::info!("[Auth] Account registered.");
                form.reset();
            }
            feedback.show_outcome(outcome);
        });
    };

    view! {
        <DefaultLayout>
            <div class="text-center mb-8">
                <h1 class="text-5xl font-bold text-primary">"Taxfy"</h1>
                <p class="text-xl text-base-content/70 mt-2">
                    "Nunca foi tão fácil escapar do leãozinho"
                </p>
            </div>

            <div class="card w-full max-w-lg shadow-2xl bg-base-100">
                <form class="card-body" on:submit=on_submit>
                    <h2 class="text-3xl font-bold text-center">"Criar Conta"</h2>
                    <p class="text-base-content/70 text-center mb-4">
                        "Preencha seus dados para acessar a plataforma."
                    </p>

                    <div class="flex flex-col sm:flex-row gap-4">
                        <Field
                            id="firstName"
                            label="Nome"
                            placeholder="Seu nome"
                            value=form.first_name
                            disabled=is_submitting
                        />
                        <Field
                            id="lastName"
                            label="Sobrenome"
                            placeholder="Seu sobrenome"
                            value=form.last_name
                            disabled=is_submitting
                        />
                    </div>
                    <Field
                        id="email"
                        label="E-mail"
                        input_type="email"
                        placeholder="voce@exemplo.com"
                        value=form.email
                        disabled=is_submitting
                    />
                    <Field
                        id="password"
                        label="Senha"
                        input_type="password"
                        placeholder="********"
                        value=form.password
                        disabled=is_submitting
                    />

                    <div class="form-control mt-6">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Cadastrando..." }.into_any()
                            } else {
                                "Cadastrar".into_any()
                            }}
                        </button>
                    </div>
                    <p class="text-sm text-center text-base-content/70 mt-4">
                        "Já possui uma conta? "
                        <Link to=AppRoute::Login class="link link-primary font-medium">
                            "Faça login"
                        </Link>
                    </p>
                </form>
            </div>
        </DefaultLayout>
    }
}
