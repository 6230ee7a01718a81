use crate::components::layout::ProtectedLayout;
use crate::web::router::Link;
use leptos::prelude::*;
use taxfy_shared::route::AppRoute;

/// 仪表盘入口卡片
#[component]
fn Card(title: &'static str, description: &'static str, to: AppRoute) -> impl IntoView {
    view! {
        <Link to=to class="card bg-base-100 shadow-xl hover:shadow-2xl transition-shadow">
            <div class="card-body">
                <h3 class="card-title text-primary">{title}</h3>
                <p class="text-base-content/70">{description}</p>
            </div>
        </Link>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <ProtectedLayout>
            <div class="grid grid-cols-1 sm:grid-cols-2 gap-6">
                <Card
                    title="Nova Declaração"
                    description="Criar uma nova declaração de imposto de renda."
                    to=AppRoute::CreateDeclaration
                />
                <Card
                    title="Enviar Declaração"
                    description="Enviar uma declaração já pronta para processamento."
                    to=AppRoute::SubmitDeclaration
                />
                <Card
                    title="Editar Declaração"
                    description="Editar uma declaração existente."
                    to=AppRoute::EditDeclaration(None)
                />
                <Card
                    title="Histórico"
                    description="Ver o histórico de declarações enviadas."
                    to=AppRoute::History
                />
            </div>
        </ProtectedLayout>
    }
}
