use yew::prelude::*;

use crate::animation::path::PathReveal;
use crate::animation::pin::{resolve_anchor, Breakpoint};
use crate::animation::stages::StageRevealController;
use crate::config::{LifecycleConfig, LifecycleContent, Stage};
use crate::hooks::{use_section_scroll, use_viewport_width, SectionScrollOptions};

const INFINITY_PATH: &str =
    "M 80 150 C 80 80 160 80 200 150 C 240 220 320 220 320 150 C 320 80 240 80 200 150 C 160 220 80 220 80 150";

#[derive(Properties, PartialEq)]
pub struct LifecycleProps {
    pub content: LifecycleContent,
    pub config: LifecycleConfig,
}

fn stage_card(index: usize, stage: &Stage, revealed: bool) -> Html {
    let style = format!("left: {}%; top: {}%;", stage.x, stage.y);
    html! {
        <div
            key={stage.name.clone()}
            class={classes!("stage-card", revealed.then(|| "revealed"))}
            style={style}
        >
            <div class="stage-badge">{format!("Step {}", index + 1)}</div>
            <div class="stage-title">{stage.title.clone()}</div>
            <p class="stage-description">{stage.description.clone()}</p>
        </div>
    }
}

fn heading(content: &LifecycleContent) -> Html {
    html! {
        <h2 class="lifecycle-heading">
            {content.heading.clone()}{" "}
            <span class="lifecycle-highlight">{content.highlight.clone()}</span>
        </h2>
    }
}

/// Narrow viewports get a plain card list.
fn static_cards(content: &LifecycleContent) -> Html {
    html! {
        <section id="lifecycle" class="lifecycle-static">
            {heading(content)}
            <div class="lifecycle-cards">
                {
                    content.stages.iter().enumerate().map(|(index, stage)| html! {
                        <div key={stage.name.clone()} class="lifecycle-card">
                            <span class="stage-badge">{format!("Step {}", index + 1)}</span>
                            <h3>{stage.title.clone()}</h3>
                            <p>{stage.description.clone()}</p>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}

#[function_component(Lifecycle)]
pub fn lifecycle(props: &LifecycleProps) -> Html {
    let LifecycleProps { content, config } = props;
    let container = use_node_ref();
    let width = use_viewport_width();
    let scroll = use_section_scroll(
        container.clone(),
        SectionScrollOptions {
            name: "lifecycle",
            multiplier: config.scroll_multiplier,
            damping: config.damping,
            snap_within: Some(config.snap_within),
        },
    );

    let breakpoint = Breakpoint::new(config.breakpoint);
    if !breakpoint.allows(width) {
        return static_cards(content);
    }

    let stages = StageRevealController::new(content.stages.len(), config.overshoot);
    let path = PathReveal::new(config.path_length);
    let anchor = resolve_anchor(&scroll.reading, breakpoint, width);

    let section_style = format!("height: {}vh;", 100.0 + 100.0 * config.scroll_multiplier);
    let path_style = format!(
        "stroke-dasharray: {len}; stroke-dashoffset: {offset:.2};",
        len = path.length,
        offset = path.dash_offset(scroll.smoothed)
    );
    let svg_style = if path.is_visible(scroll.smoothed) {
        "opacity: 1;"
    } else {
        "opacity: 0;"
    };

    html! {
        <section
            id="lifecycle"
            ref={container}
            class={classes!("lifecycle", scroll.reading.is_pinned().then(|| "pinned"))}
            style={section_style}
        >
            <style>
                {r#"
                    .lifecycle { position: relative; background: #050505; }
                    .lifecycle-stage-area { position: relative; height: 600px; width: 100%; }
                    .lifecycle-path { position: absolute; inset: 0; width: 100%; height: 100%; transition: opacity 0.8s ease-out; }
                    .stage-card {
                        position: absolute;
                        width: 260px;
                        transform: translate(-50%, -50%) scale(0.8);
                        opacity: 0;
                        transition: opacity 0.5s ease-out, transform 0.5s ease-out;
                        z-index: 20;
                    }
                    .stage-card.revealed {
                        opacity: 1;
                        transform: translate(-50%, -50%) scale(1);
                    }
                "#}
            </style>
            <div class="lifecycle-frame" style={anchor.style()}>
                <div class="lifecycle-grid">
                    <div class="lifecycle-copy">
                        {heading(content)}
                        <div class="lifecycle-equation">
                            <span class="pill">{content.touchpoint.clone()}</span>
                            <span class="equals">{"="}</span>
                            <span class="pill">{content.opportunity.clone()}</span>
                        </div>
                        <p class="lifecycle-body">{content.body.clone()}</p>
                    </div>
                    <div class="lifecycle-stage-area">
                        <svg class="lifecycle-path" viewBox="0 0 400 300" style={svg_style}>
                            <path
                                d={INFINITY_PATH}
                                fill="none"
                                stroke="#a855f7"
                                stroke-width="3"
                                stroke-linecap="round"
                                style={path_style}
                            />
                        </svg>
                        {
                            content.stages.iter().enumerate().map(|(index, stage)| {
                                stage_card(index, stage, stages.is_revealed(index, scroll.smoothed))
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>
        </section>
    }
}
