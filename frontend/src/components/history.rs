use crate::auth::use_auth;
use crate::busy::ResetOnDrop;
use crate::components::declaration::{DeclarationItem, ListPlaceholder};
use crate::components::feedback_modal::use_feedback;
use crate::components::layout::ProtectedLayout;
use crate::web::router::Link;
use leptos::prelude::*;
use leptos::task::spawn_local;
use taxfy_shared::Declaration;
use taxfy_shared::outcome::Operation;
use taxfy_shared::route::AppRoute;
use taxfy_shared::workflow;

#[component]
pub fn HistoryPage() -> impl IntoView {
    let auth = use_auth();
    let feedback = use_feedback();

    let (items, set_items) = signal(Vec::<Declaration>::new());
    let (is_loading, set_is_loading) = signal(true);

    let api = auth.api();
    spawn_local(async move {
        let _loading = ResetOnDrop::new(set_is_loading, true, false);
        match workflow::load_history(&api, Operation::LoadHistory).await {
            Ok(list) => {
                let _ = set_items.try_set(list);
            }
            Err(outcome) => feedback.show_outcome(outcome),
        }
    });

    view! {
        <ProtectedLayout>
            <div class="max-w-4xl mx-auto">
                <h1 class="text-2xl font-bold mb-6">"Histórico de Declarações"</h1>
                <Show
                    when=move || !is_loading.get() && items.with(|list| !list.is_empty())
                    fallback=move || view! { <ListPlaceholder loading=is_loading loading_text="Carregando..." /> }
                >
                    <div class="grid grid-cols-1 gap-4">
                        <For
                            each=move || items.get()
                            key=|d| d.id.clone()
                            children=move |d| {
                                let to = AppRoute::EditDeclaration(Some(d.id.clone()));
                                view! {
                                    <DeclarationItem declaration=d>
                                        <Link to=to class="btn btn-ghost text-success bg-success/10">
                                            "Editar"
                                        </Link>
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
