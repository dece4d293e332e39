use yew::prelude::*;

use crate::config::TechLabContent;
use crate::hooks::use_word_cycle;

#[derive(Properties, PartialEq)]
pub struct TechLabProps {
    pub content: TechLabContent,
    pub interval_ms: u32,
}

#[function_component(TechLab)]
pub fn tech_lab(props: &TechLabProps) -> Html {
    let TechLabProps { content, interval_ms } = props;
    let cycle = use_word_cycle(content.actions.len(), content.targets.len(), *interval_ms);

    let action = content.actions.get(cycle.action()).cloned().unwrap_or_default();
    let target = content.targets.get(cycle.target()).cloned().unwrap_or_default();
    let description = content.description(cycle.action(), cycle.target()).to_string();

    html! {
        <section class="tech-lab">
            <style key="style">
                {r#"
                    .tech-lab { padding: 6rem 1.5rem; text-align: center; background: #050505; }
                    .word-slot { display: inline-block; padding: 0.25rem 1rem; margin: 0 0.25rem; border-radius: 0.5rem; }
                    .word-swap { animation: word-in 0.3s ease-out both; }
                    .tech-lab-content { animation: word-in 0.4s ease-out 0.1s both; }
                    @keyframes word-in {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: none; }
                    }
                "#}
            </style>
            <h2 key="heading" class="tech-lab-heading">
                <span key="lead">{content.lead.clone()}</span>
                // Keys force a remount so the entrance animation replays on change.
                <span key={format!("action-{}", cycle.action())} class="word-slot word-swap">{action}</span>
                <span key={format!("target-{}-{}", cycle.action(), cycle.target())} class="word-slot word-swap">{target}</span>
            </h2>
            <p key={format!("content-{}-{}", cycle.action(), cycle.target())} class="tech-lab-content">
                {description}
            </p>
        </section>
    }
}
