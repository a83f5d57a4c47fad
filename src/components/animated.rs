use yew::prelude::*;

use crate::motion::stagger::{reveal_class, transition_delay};

#[derive(Properties, PartialEq)]
pub struct AnimatedProps {
    pub visible: bool,
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades and lifts its children in once `visible` flips.
#[function_component(Animated)]
pub fn animated(props: &AnimatedProps) -> Html {
    let style = transition_delay(props.delay_ms);
    html! {
        <div class={classes!(reveal_class(props.visible), props.class.clone())} {style}>
            { for props.children.iter() }
        </div>
    }
}

pub const SITE_CSS: &str = r#"
    * {
        box-sizing: border-box;
    }
    body {
        margin: 0;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
        color: #1e3a8a;
        background: #f9fafb;
    }
    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1rem;
    }
    .reveal {
        opacity: 0;
        transform: translateY(2rem);
        transition: opacity 0.5s ease-out, transform 0.5s ease-out;
    }
    .reveal.revealed {
        opacity: 1;
        transform: translateY(0);
    }
    @media (prefers-reduced-motion: reduce) {
        .reveal {
            transition: none;
        }
    }
    @keyframes fadeIn {
        from { opacity: 0; }
        to { opacity: 1; }
    }
    .fade-in {
        animation: fadeIn 0.5s ease-out forwards;
    }
    @keyframes spin {
        from { transform: rotate(0deg); }
        to { transform: rotate(360deg); }
    }
    .spinning {
        animation: spin 1s linear infinite;
    }
    .section {
        padding: 5rem 0;
        position: relative;
        overflow: hidden;
    }
    .section-header {
        text-align: center;
        margin-bottom: 2.5rem;
    }
    .section-header h2 {
        font-size: 2.25rem;
        margin: 0.75rem 0;
    }
    .eyebrow {
        display: inline-block;
        padding: 0.25rem 1rem;
        border-radius: 9999px;
        background: #dbeafe;
        color: #2563eb;
        font-size: 0.875rem;
        font-weight: 600;
    }
    .card-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
        gap: 1.5rem;
    }
    .card {
        background: white;
        border-radius: 0.75rem;
        padding: 1.5rem;
        box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
        transition: box-shadow 0.3s ease, transform 0.3s ease;
    }
    .card:hover {
        box-shadow: 0 8px 20px rgba(0, 0, 0, 0.1);
        transform: translateY(-4px);
    }
    .button {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.6rem 1.4rem;
        border: none;
        border-radius: 0.5rem;
        font-weight: 700;
        cursor: pointer;
        text-decoration: none;
        color: white;
        background: #3b82f6;
    }
    .button:disabled {
        opacity: 0.7;
        cursor: not-allowed;
    }
    .button.ghost {
        background: transparent;
        border: 2px solid white;
    }
    .form-feedback {
        margin-top: 1rem;
        padding: 0.75rem;
        border-radius: 0.5rem;
    }
    .form-feedback.success {
        background: #dcfce7;
        color: #15803d;
        border: 1px solid #bbf7d0;
    }
    .form-feedback.failure {
        background: #fee2e2;
        color: #b91c1c;
        border: 1px solid #fecaca;
    }
    .badge {
        padding: 0.25rem 0.5rem;
        font-size: 0.75rem;
        font-weight: 500;
        border-radius: 9999px;
    }
    .badge-emerald { background: #d1fae5; color: #047857; }
    .badge-blue { background: #dbeafe; color: #1d4ed8; }
    .badge-purple { background: #ede9fe; color: #6d28d9; }
    .badge-amber { background: #fef3c7; color: #b45309; }
    .badge-indigo { background: #e0e7ff; color: #4338ca; }
    .badge-red { background: #fee2e2; color: #b91c1c; }
    .badge-green { background: #dcfce7; color: #15803d; }
    .badge-yellow { background: #fef9c3; color: #a16207; }
    .badge-gray { background: #f3f4f6; color: #374151; }
    .surface-emerald { background: #ecfdf5; }
    .surface-blue { background: #eff6ff; }
    .surface-purple { background: #f5f3ff; }
    .surface-amber { background: #fffbeb; }
    .surface-indigo { background: #eef2ff; }
    .surface-red { background: #fef2f2; }
    .surface-green { background: #f0fdf4; }
    .surface-yellow { background: #fefce8; }
    .surface-gray { background: #f9fafb; }
    .fill-emerald { background: #10b981; }
    .fill-blue { background: #3b82f6; }
    .fill-purple { background: #8b5cf6; }
    .fill-amber { background: #f59e0b; }
    .fill-indigo { background: #6366f1; }
    .fill-red { background: #ef4444; }
    .fill-green { background: #22c55e; }
    .fill-yellow { background: #eab308; }
    .fill-gray { background: #374151; }
    .tab {
        padding: 0.5rem 1rem;
        border: none;
        border-radius: 0.375rem;
        background: #f3f4f6;
        cursor: pointer;
        transition: all 0.2s ease;
    }
    .tab:hover {
        background: #e5e7eb;
    }
    .tab-active { font-weight: 600; }
    .tab-emerald { background: #d1fae5; color: #047857; }
    .tab-blue { background: #3b82f6; color: white; }
    .tab-purple { background: #ede9fe; color: #6d28d9; }
    .tab-amber { background: #fef3c7; color: #b45309; }
    .tab-indigo { background: #e0e7ff; color: #4338ca; }
    .tab-red { background: #fee2e2; color: #b91c1c; }
    .tab-green { background: #dcfce7; color: #15803d; }
    .tab-yellow { background: #fef9c3; color: #a16207; }
    .tab-gray { background: #e5e7eb; color: #111827; }
    .progress {
        width: 100%;
        height: 0.5rem;
        background: #e5e7eb;
        border-radius: 9999px;
        overflow: hidden;
    }
    .progress > div {
        height: 100%;
        border-radius: 9999px;
        transition: width 1s ease;
    }
"#;
