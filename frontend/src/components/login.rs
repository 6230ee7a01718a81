use crate::auth::{login, use_auth};
use crate::busy::busy;
use crate::components::feedback_modal::use_feedback;
use crate::components::icons::ShieldCheck;
use crate::components::layout::DefaultLayout;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taxfy_shared::route::AppRoute;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let feedback = use_feedback();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);

    // 登录成功后的跳转由路由服务监听认证状态完成
    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        if is_submitting.get_untracked() {
            return;
        }

        let email = email.get_untracked();
        let password = password.get_untracked();

        spawn_local(async move {
            let _busy = busy(set_is_submitting);
            if let Err(outcome) = login(&auth, email, password).await {
                feedback.show_outcome(outcome);
            }
        });
    };

    view! {
        <DefaultLayout>
            <div class="text-center mb-6">
                <div class="flex flex-col items-center gap-2">
                    <div class="p-3 bg-primary/10 rounded-2xl text-primary">
                        <ShieldCheck attr:class="h-8 w-8" />
                    </div>
                    <h1 class="text-5xl font-bold text-primary">"Taxfy"</h1>
                    <p class="text-xl text-base-content/70">
                        "Nunca foi tão fácil escapar do leãozinho"
                    </p>
                </div>
            </div>

            <div class="card shrink-0 w-full max-w-md shadow-2xl bg-base-100">
                <form class="card-body" on:submit=on_submit>
                    <h2 class="text-3xl font-bold text-center mb-2">"Fazer Login"</h2>

                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">"E-mail"</span>
                        </label>
                        <input
                            id="email"
                            type="email"
                            placeholder="voce@exemplo.com"
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            prop:value=email
                            disabled=move || is_submitting.get()
                            class="input input-bordered"
                            required
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">"Senha"</span>
                        </label>
                        <input
                            id="password"
                            type="password"
                            placeholder="••••••••"
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            prop:value=password
                            disabled=move || is_submitting.get()
                            class="input input-bordered"
                            required
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" disabled=move || is_submitting.get()>
                            {move || if is_submitting.get() {
                                view! { <span class="loading loading-spinner"></span> "Entrando..." }.into_any()
                            } else {
                                "Entrar".into_any()
                            }}
                        </button>
                    </div>
                    <p class="text-sm text-center text-base-content/70 mt-4">
                        "Não possui uma conta? "
                        <Link to=AppRoute::Register class="link link-primary font-medium">
                            "Cadastre-se"
                        </Link>
                    </p>
                </form>
            </div>
        </DefaultLayout>
    }
}
