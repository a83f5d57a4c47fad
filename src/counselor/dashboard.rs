use log::info;
use yew::prelude::*;

use crate::components::variant::{Accent, Badge};
use crate::counselor::charts::{CareerMatchChart, SkillTrendsChart};
use crate::counselor::panels::{
    Assessment, CareerCard, ChatPanel, Events, FutureSkills, JobPostings, LearningPath,
    MarketAnalysis, Notifications, ProfileSummary, TimeInvestment, VideoRecommendations,
};
use crate::data::CAREERS;
use crate::motion::selection::{use_exclusive_selection, SelectionHandle};

const DEFAULT_TAB: &str = "dashboard";

const TABS: &[(&str, &str)] = &[
    (DEFAULT_TAB, "Dashboard"),
    ("learning", "Learning path"),
];

const QUICK_STATS: &[(&str, &str, Accent)] = &[
    ("Career match", "91%", Accent::Emerald),
    ("Open jobs", "28", Accent::Blue),
    ("Recommended courses", "12", Accent::Purple),
    ("Skill growth", "+15%", Accent::Amber),
];

fn dashboard_tab(expanded: &SelectionHandle<u32>) -> Html {
    html! {
        <>
            <ProfileSummary />
            <div class="dashboard-grid">
                <div class="dashboard-main">
                    <h3>{"Career recommendations"}</h3>
                    { for CAREERS.iter().map(|career| html! {
                        <CareerCard
                            key={career.id}
                            {career}
                            expanded={expanded.is_active(&career.id)}
                            on_toggle={expanded.select_callback(career.id)}
                        />
                    }) }
                    <JobPostings />
                </div>
                <aside class="dashboard-side">
                    <MarketAnalysis />
                    <CareerMatchChart />
                    <Notifications />
                </aside>
            </div>
            <div class="dashboard-grid">
                <div class="dashboard-main">
                    <ChatPanel />
                </div>
                <aside class="dashboard-side">
                    <TimeInvestment />
                </aside>
            </div>
        </>
    }
}

fn learning_tab() -> Html {
    html! {
        <div class="stack">
            <LearningPath />
            <div class="dashboard-grid">
                <div class="dashboard-main">
                    <VideoRecommendations />
                    <FutureSkills />
                </div>
                <aside class="dashboard-side">
                    <SkillTrendsChart />
                </aside>
            </div>
            <Assessment />
            <Events />
        </div>
    }
}

#[function_component(CounselorDashboard)]
pub fn counselor_dashboard() -> Html {
    let tabs = use_exclusive_selection::<&'static str>();
    let expanded = use_exclusive_selection::<u32>();
    let active = tabs.active_or(DEFAULT_TAB);

    {
        use_effect_with_deps(
            move |tab| {
                info!("Counselor tab: {}", tab);
                || ()
            },
            active,
        );
    }

    let body = match active {
        "learning" => learning_tab(),
        _ => dashboard_tab(&expanded),
    };

    html! {
        <div class="counselor">
            <style>{ COUNSELOR_CSS }</style>
            <header class="counselor-banner">
                <div class="container">
                    <h1>{"Welcome back 👋 | Your career profile 📈"}</h1>
                    <p>{"Recommendations last updated 3 minutes ago"}</p>
                </div>
            </header>

            <div class="container">
                <nav class="counselor-tabs" role="tablist">
                    { for TABS.iter().map(|&(key, label)| html! {
                        <button role="tab" aria-selected={(active == key).to_string()}
                            class={Accent::Emerald.tab_class(active == key)}
                            onclick={tabs.select_callback(key)}>
                            { label }
                        </button>
                    }) }
                </nav>

                <div class="quick-stats">
                    { for QUICK_STATS.iter().map(|&(label, value, accent)| html! {
                        <div class={classes!("card", "quick-stat", accent.surface_class())}>
                            <p>{ label }</p>
                            <h3>{ value }</h3>
                        </div>
                    }) }
                </div>

                <div class="insight">
                    <Badge text="AI suggestion" accent={Accent::Indigo} />
                    <p>{"Based on your skills, focus on React and Next.js over the coming weeks."}</p>
                </div>

                <main class="counselor-body">{ body }</main>
            </div>
        </div>
    }
}

const COUNSELOR_CSS: &str = r#"
    .counselor {
        padding-top: 6rem;
        min-height: 100vh;
        background: #f9fafb;
        color: #111827;
    }
    .counselor-banner {
        margin-bottom: 1.5rem;
        padding: 1rem 0;
        background: linear-gradient(to left, #059669, #14b8a6);
        color: white;
    }
    .counselor-banner h1 {
        margin: 0;
        font-size: 1.5rem;
    }
    .counselor-banner p {
        margin: 0.25rem 0 0;
        color: #d1fae5;
        font-size: 0.875rem;
    }
    .counselor-tabs {
        display: flex;
        gap: 0.5rem;
        margin-bottom: 1.5rem;
        border-bottom: 1px solid #e5e7eb;
        padding-bottom: 0.5rem;
    }
    .quick-stats {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
        gap: 1rem;
    }
    .quick-stat p {
        margin: 0;
        color: #6b7280;
        font-size: 0.875rem;
    }
    .quick-stat h3 {
        margin: 0.25rem 0 0;
        font-size: 1.5rem;
    }
    .insight {
        display: flex;
        align-items: center;
        gap: 1rem;
        margin: 1.5rem 0;
        padding: 1rem;
        border-radius: 0.5rem;
        background: linear-gradient(to right, #e0e7ff, #ede9fe);
    }
    .counselor-body {
        padding-bottom: 3rem;
    }
    .dashboard-grid {
        display: grid;
        grid-template-columns: 2fr 1fr;
        gap: 1.5rem;
        margin-bottom: 2rem;
    }
    @media (max-width: 1024px) {
        .dashboard-grid {
            grid-template-columns: 1fr;
        }
    }
    .dashboard-main, .dashboard-side, .stack {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }
    .panel h3 {
        margin-top: 0;
    }
    .panel-head {
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .icon-button {
        background: none;
        border: none;
        cursor: pointer;
        color: #9ca3af;
        font-size: 1rem;
    }
    .icon-button:hover {
        color: #059669;
    }
    .career-summary {
        display: flex;
        justify-content: space-between;
        width: 100%;
        background: none;
        border: none;
        text-align: left;
        cursor: pointer;
        padding: 0 0 0.75rem;
    }
    .career-match {
        display: flex;
        align-items: center;
        gap: 0.5rem;
    }
    .career-details h5 {
        margin: 1rem 0 0.5rem;
    }
    .skill-tags {
        display: flex;
        flex-wrap: wrap;
        gap: 0.5rem;
    }
    .courses {
        list-style: none;
        padding: 0;
    }
    .course {
        display: flex;
        flex-wrap: wrap;
        gap: 0.75rem;
        align-items: center;
        padding: 0.5rem 0;
        border-bottom: 1px solid #f3f4f6;
    }
    .course-meta, .row-meta, .row-time {
        color: #6b7280;
        font-size: 0.8rem;
    }
    .stars {
        color: #d1d5db;
    }
    .star.filled {
        color: #fbbf24;
    }
    .rating-value {
        margin-left: 0.25rem;
        color: #6b7280;
        font-size: 0.8rem;
    }
    .row, .activity {
        display: flex;
        align-items: center;
        gap: 0.75rem;
        padding: 0.75rem;
        border-radius: 0.5rem;
        transition: background 0.2s ease, transform 0.2s ease;
    }
    .activity {
        flex-direction: column;
        align-items: stretch;
    }
    .activity-head {
        display: flex;
        justify-content: space-between;
    }
    .row.hovered, .activity.hovered {
        background: #ecfdf5;
        transform: translateX(4px);
    }
    .row-main {
        flex: 1;
    }
    .row-main h4, .row-main p {
        margin: 0;
    }
    .logo {
        width: 2.5rem;
        height: 2.5rem;
        border-radius: 0.5rem;
        background: #d1fae5;
        color: #047857;
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .date {
        display: flex;
        flex-direction: column;
        align-items: center;
        min-width: 3rem;
        padding: 0.25rem;
        border-radius: 0.5rem;
        background: #eef2ff;
    }
    .date .day {
        font-weight: 700;
    }
    .date .month {
        font-size: 0.75rem;
    }
    .market-skill {
        margin-top: 0.75rem;
        padding: 1rem;
        border-radius: 0.5rem;
        border: 1px solid transparent;
        cursor: pointer;
        transition: all 0.3s ease;
    }
    .market-skill.selected {
        border-color: #d1d5db;
        box-shadow: 0 6px 16px rgba(0, 0, 0, 0.1);
        transform: translateY(-4px);
    }
    .market-skill-head {
        display: flex;
        justify-content: space-between;
        margin-bottom: 0.75rem;
    }
    .market-skill-details {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
        margin-top: 0.75rem;
        font-size: 0.875rem;
    }
    .future-skill {
        margin-top: 1rem;
        padding: 1rem;
        border-radius: 0.5rem;
        background: linear-gradient(to right, #eef2ff, #f5f3ff);
    }
    .company {
        font-size: 0.75rem;
        padding: 0.25rem 0.5rem;
        border-radius: 0.25rem;
        background: rgba(255, 255, 255, 0.6);
    }
    .tab-strip {
        display: flex;
        gap: 0.5rem;
        margin-bottom: 1rem;
    }
    .scored {
        list-style: none;
        padding: 0;
    }
    .scored li {
        margin-bottom: 0.75rem;
    }
    .learning-path {
        list-style: none;
        padding: 0;
    }
    .learning-step {
        display: flex;
        gap: 0.75rem;
        align-items: center;
        padding: 0.5rem 0;
    }
    .learning-step .marker {
        width: 2rem;
        height: 2rem;
        border-radius: 9999px;
        background: #e5e7eb;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .learning-step.completed .marker {
        background: #10b981;
        color: white;
    }
    .chat-reply {
        padding: 1rem;
        margin-bottom: 1rem;
        border-radius: 0.5rem;
        background: #ecfdf5;
    }
    .chat-form {
        display: flex;
        gap: 0.5rem;
    }
    .chat-form input {
        flex: 1;
        padding: 0.5rem 0.75rem;
        border: 1px solid #d1d5db;
        border-radius: 0.5rem;
    }
    .profile {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
    }
    @media (max-width: 768px) {
        .profile {
            grid-template-columns: 1fr;
        }
    }
    .profile-identity {
        display: flex;
        gap: 1rem;
    }
    .profile-identity h4 {
        margin: 0;
        font-size: 1.125rem;
    }
    .avatar {
        flex-shrink: 0;
        width: 5rem;
        height: 5rem;
        border-radius: 9999px;
        background: #d1fae5;
        color: #059669;
        font-size: 1.75rem;
        font-weight: 700;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .profile-tiles {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 0.75rem;
    }
    .profile-tile {
        padding: 0.75rem;
        border-radius: 0.5rem;
    }
    .profile-tile h5 {
        margin: 0 0 0.25rem;
    }
    .profile-tile p {
        margin: 0;
        font-size: 0.875rem;
    }
    .text-link {
        background: none;
        border: none;
        color: #4f46e5;
        font-weight: 500;
        cursor: pointer;
        text-decoration: none;
    }
    .videos {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
        gap: 1rem;
        margin-bottom: 1rem;
    }
    .video {
        border-radius: 0.5rem;
        overflow: hidden;
        background: #f3f4f6;
        transition: box-shadow 0.3s ease;
    }
    .video:hover {
        box-shadow: 0 6px 16px rgba(0, 0, 0, 0.1);
    }
    .video h4, .video p {
        margin: 0.5rem 0.75rem;
    }
    .video-thumb {
        height: 8rem;
        display: flex;
        align-items: center;
        justify-content: center;
    }
    .video-play {
        font-size: 2.5rem;
        color: white;
        opacity: 0.8;
    }
    .video:hover .video-play {
        opacity: 1;
    }
    .chart-legend {
        display: flex;
        gap: 1rem;
        font-size: 0.8rem;
    }
    .chart-legend i {
        display: inline-block;
        width: 0.75rem;
        height: 0.75rem;
        margin-right: 0.25rem;
        border-radius: 0.125rem;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tab_strip_leads_with_the_default_tab() {
        let keys: Vec<_> = TABS.iter().map(|&(key, _)| key).collect();
        assert_eq!(keys, [DEFAULT_TAB, "learning"]);
    }
}
