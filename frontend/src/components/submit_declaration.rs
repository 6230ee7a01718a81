use crate::auth::use_auth;
use crate::busy::ResetOnDrop;
use crate::components::declaration::{DeclarationItem, ListPlaceholder};
use crate::components::feedback_modal::use_feedback;
use crate::components::layout::ProtectedLayout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taxfy_shared::Declaration;
use taxfy_shared::outcome::Operation;
use taxfy_shared::workflow;

#[component]
pub fn SubmitDeclarationPage() -> impl IntoView {
    let auth = use_auth();
    let feedback = use_feedback();

    let (declarations, set_declarations) = signal(Vec::<Declaration>::new());
    let (is_loading, set_is_loading) = signal(true);
    // 正在提交的申报，按条目显示发送状态
    let (sending_id, set_sending_id) = signal(Option::<String>::None);

    let api = auth.api();
    spawn_local(async move {
        let _loading = ResetOnDrop::new(set_is_loading, true, false);
        match workflow::load_history(&api, Operation::LoadSubmittable).await {
            Ok(list) => {
                let _ = set_declarations.try_set(list);
            }
            Err(outcome) => feedback.show_outcome(outcome),
        }
    });

    let on_send = move |id: String| {
        if sending_id.with_untracked(Option::is_some) {
            return;
        }

        let api = auth.api();
        spawn_local(async move {
            let _sending = ResetOnDrop::new(set_sending_id, Some(id.clone()), None);
            match workflow::submit_declaration(&api, &id).await {
                Ok(submitted) => {
                    set_declarations.try_update(|list| {
                        Declaration::apply_status(list, &id, &submitted.status)
                    });
                    feedback.show_outcome(submitted.outcome);
                }
                Err(outcome) => feedback.show_outcome(outcome),
            }
        });
    };

    view! {
        <ProtectedLayout>
            <div class="max-w-4xl mx-auto">
                <h1 class="text-2xl font-bold mb-6">"Enviar Declaração"</h1>
                <Show
                    when=move || !is_loading.get() && declarations.with(|list| !list.is_empty())
                    fallback=move || view! { <ListPlaceholder loading=is_loading loading_text="Carregando declarações..." /> }
                >
                    <div class="grid grid-cols-1 gap-4">
                        <For
                            each=move || declarations.get()
                            key=|d| (d.id.clone(), d.status.clone())
                            children=move |d| {
                                let id = d.id.clone();
                                let is_sending = {
                                    let id = id.clone();
                                    move || sending_id.with(|s| s.as_deref() == Some(id.as_str()))
                                };
                                let is_sending_label = is_sending.clone();
                                view! {
                                    <DeclarationItem declaration=d>
                                        <button
                                            type="button"
                                            class="btn btn-primary"
                                            disabled=is_sending
                                            on:click=move |_| on_send(id.clone())
                                        >
                                            {move || if is_sending_label() { "Enviando..." } else { "Enviar" }}
                                        </button>
                                    </DeclarationItem>
                                }
                            }
                        />
                    </div>
                </Show>
            </div>
        </ProtectedLayout>
    }
}
