//! 申报页面共用的小组件

use leptos::prelude::*;
use taxfy_shared::Declaration;

/// 年份输入框
///
/// 保持字符串原样，提交时才解析校验。
#[component]
pub fn YearInput(value: RwSignal<String>, #[prop(into)] disabled: Signal<bool>) -> impl IntoView {
    view! {
        <div class="form-control">
            <label class="label" for="year">
                <span class="label-text">"Ano"</span>
            </label>
            <input
                id="year"
                type="number"
                placeholder="ex: 2024"
                on:input=move |ev| value.set(event_target_value(&ev))
                prop:value=move || value.get()
                disabled=move || disabled.get()
                class="input input-bordered w-full"
                required
            />
        </div>
    }
}

/// 列表中的一行：年份、状态与右侧操作
#[component]
pub fn DeclarationItem(declaration: Declaration, children: Children) -> impl IntoView {
    let status = declaration.status_label().to_string();
    view! {
        <div class="flex items-center justify-between bg-base-100 p-4 rounded-box shadow-sm">
            <div>
                <div class="text-lg font-semibold">"Ano " {declaration.year}</div>
                <div class="text-sm text-base-content/70">"Status: " {status}</div>
            </div>
            <div class="flex items-center gap-3">{children()}</div>
        </div>
    }
}

/// 列表加载中与空列表的占位
#[component]
pub fn ListPlaceholder(loading: ReadSignal<bool>, loading_text: &'static str) -> impl IntoView {
    view! {
        <p class="text-base-content/70">
            {move || if loading.get() { loading_text } else { "Nenhuma declaração encontrada." }}
        </p>
    }
}
