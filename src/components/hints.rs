//! Usage hints shown under the task list.

use leptos::prelude::*;

const HINTS: &[&str] = &[
    "「リストを作成」→ 右上「共有リンクをコピー」でURLを伝えるだけで共同編集OK。",
    "タイトルを直接書き換えると自動保存されます。",
    "チェックを付けると、相手側にもリアルタイムで反映されます。",
];

#[component]
pub fn Hints() -> impl IntoView {
    view! {
        <div class="hints">
            <p class="hints-title">"使い方"</p>
            <ul class="hints-list">
                {HINTS.iter().map(|hint| view! { <li>{*hint}</li> }).collect_view()}
            </ul>
        </div>
    }
}
