use yew::prelude::*;

use crate::animation::pin::{resolve_anchor, Breakpoint};
use crate::animation::timeline::{PinnedScrubTimeline, TimelineSample};
use crate::config::{Card, PinnedConfig, PinnedContent};
use crate::hooks::{use_section_scroll, use_viewport_width, SectionScrollOptions};

#[derive(Properties, PartialEq)]
pub struct PinnedScrollProps {
    pub content: PinnedContent,
    pub config: PinnedConfig,
}

fn column(cards: &[Card], track: &'static str, sample: &TimelineSample) -> Html {
    cards
        .iter()
        .enumerate()
        .map(|(index, card)| {
            html! {
                <div key={card.title.clone()} class="pinned-card" style={sample.frame(track, index).to_style()}>
                    <h3>{card.title.clone()}</h3>
                    <p>{card.description.clone()}</p>
                </div>
            }
        })
        .collect::<Html>()
}

#[function_component(PinnedScrollSection)]
pub fn pinned_scroll_section(props: &PinnedScrollProps) -> Html {
    let PinnedScrollProps { content, config } = props;
    let container = use_node_ref();
    let width = use_viewport_width();
    let scroll = use_section_scroll(
        container.clone(),
        SectionScrollOptions {
            name: "pinned",
            multiplier: config.pin_multiplier,
            damping: config.damping,
            snap_within: None,
        },
    );

    let timeline = use_memo(
        |(left, right, stagger, tween)| {
            let timeline = PinnedScrubTimeline::panels(*left, *right, *stagger, *tween);
            log::debug!("pinned timeline spans {:.2} units", timeline.duration());
            timeline
        },
        (content.left.len(), content.right.len(), config.stagger, config.tween_duration),
    );

    let breakpoint = Breakpoint::new(config.breakpoint);
    let scrubbing = breakpoint.allows(width);
    let sample = if scrubbing {
        timeline.sample(scroll.smoothed)
    } else {
        timeline.at_rest()
    };
    let anchor = resolve_anchor(&scroll.reading, breakpoint, width);

    let (section_style, frame_style) = if scrubbing {
        (
            format!("height: {}vh;", 100.0 + 100.0 * config.pin_multiplier),
            anchor.style(),
        )
    } else {
        (String::new(), "")
    };

    html! {
        <section
            ref={container}
            class={classes!("pinned-section", anchor.is_fixed().then(|| "pinned"))}
            style={section_style}
        >
            <style>
                {r#"
                    .pinned-section { position: relative; width: 100%; background: #000; overflow: hidden; }
                    .pinned-frame {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        padding: 5rem 1rem;
                        min-height: 100vh;
                        box-sizing: border-box;
                    }
                    .pinned-column { width: 25%; display: flex; flex-direction: column; gap: 1.5rem; z-index: 1; }
                    .pinned-card { height: 200px; padding: 1.5rem; border-radius: 1rem; will-change: transform, opacity; }
                    .pinned-center { width: 40%; height: 70vh; border-radius: 1.5rem; z-index: 2; will-change: transform, opacity; }
                    @media (max-width: 767px) {
                        .pinned-frame { flex-direction: column; }
                        .pinned-column, .pinned-center { width: 100%; }
                        .pinned-center { height: 50vh; }
                    }
                "#}
            </style>
            <div class="pinned-frame" style={frame_style}>
                <div class="pinned-column pinned-left">
                    {column(&content.left, PinnedScrubTimeline::LEFT, &sample)}
                </div>
                <div class="pinned-center" style={sample.frame(PinnedScrubTimeline::CENTER, 0).to_style()}>
                    <h2>{content.center_title.clone()}</h2>
                    <p>{content.center_body.clone()}</p>
                </div>
                <div class="pinned-column pinned-right">
                    {column(&content.right, PinnedScrubTimeline::RIGHT, &sample)}
                </div>
            </div>
        </section>
    }
}
