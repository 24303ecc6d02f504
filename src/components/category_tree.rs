//! Category Tree Component
//!
//! Nested lists of category links. Input is already pruned, so recursion is
//! bounded.

use leptos::prelude::*;
use leptos_router::components::A;
use bookable_client::CategoryBranch;

#[component]
pub fn CategoryTree(branches: Vec<CategoryBranch>) -> impl IntoView {
    render_branches(branches)
}

// Plain fn + AnyView: a self-recursive component would have an infinite type.
fn render_branches(branches: Vec<CategoryBranch>) -> AnyView {
    view! {
        <ul class="tree">
            {branches
                .into_iter()
                .map(|branch| {
                    let CategoryBranch { href, name, children, .. } = branch;
                    // Only non-empty children get a nested list
                    let nested = (!children.is_empty()).then(|| render_branches(children));
                    view! {
                        <li>
                            <A href=href>{name}</A>
                            {nested}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}
