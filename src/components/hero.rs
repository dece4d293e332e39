use yew::prelude::*;

use crate::animation::tunnel::TunnelGeometry;
use crate::config::{HeroContent, TunnelConfig};
use crate::hooks::use_tunnel;

/// CSS pixels per tunnel unit.
const UNIT_PX: f64 = 60.0;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub content: HeroContent,
    pub tunnel: TunnelConfig,
}

fn segment_style(z: f64) -> String {
    format!("transform: translateZ({:.1}px);", z * UNIT_PX)
}

/// Subtitle with the highlighted phrase spliced in at `{highlight}`.
fn subtitle(content: &HeroContent) -> Html {
    match content.subtitle.split_once("{highlight}") {
        Some((before, after)) => html! {
            <p class="hero-subtitle">
                {before.to_string()}
                <span class="hero-highlight">{content.highlight.clone()}</span>
                {after.to_string()}
            </p>
        },
        None => html! { <p class="hero-subtitle">{content.subtitle.clone()}</p> },
    }
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let container = use_node_ref();
    let tunnel = use_tunnel(container.clone(), props.tunnel);
    let geometry = TunnelGeometry::from_config(&props.tunnel);

    let camera_style = format!(
        "transform: translateZ({:.2}px);",
        -tunnel.depth * UNIT_PX
    );

    html! {
        <section id="hero" ref={container} class={classes!("hero", tunnel.completed.then(|| "tunnel-complete"))}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        width: 100%;
                        height: 100vh;
                        overflow: hidden;
                        background: #050505;
                    }
                    .tunnel-viewport {
                        position: absolute;
                        inset: 0;
                        perspective: 600px;
                        perspective-origin: 50% 50%;
                    }
                    .tunnel-camera {
                        position: absolute;
                        inset: 0;
                        transform-style: preserve-3d;
                        will-change: transform;
                    }
                    .tunnel-segment {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        width: 1440px;
                        margin-left: -720px;
                        margin-top: -480px;
                        height: 960px;
                        border: 1px solid rgba(124, 58, 237, 0.4);
                        box-sizing: border-box;
                    }
                    .hero-content {
                        position: absolute;
                        inset: 0;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        animation: hero-enter 1.2s ease-out 0.5s both;
                    }
                    @keyframes hero-enter {
                        from { opacity: 0; transform: translateY(30px) scale(0.95); }
                        to { opacity: 1; transform: none; }
                    }
                    .hero-title {
                        font-size: clamp(3.5rem, 8vw, 6.5rem);
                        line-height: 1.1;
                        background: linear-gradient(90deg, #c084fc, #fff, #6b7280);
                        -webkit-background-clip: text;
                        color: transparent;
                    }
                    .hero-highlight { color: #c084fc; }
                    .hero-progress {
                        position: absolute;
                        left: 0;
                        bottom: 0;
                        height: 2px;
                        background: #7c3aed;
                    }
                "#}
            </style>
            <div class="tunnel-viewport">
                <div class="tunnel-camera" style={camera_style}>
                    {
                        geometry.segment_positions().map(|z| html! {
                            <div class="tunnel-segment" style={segment_style(z)}></div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
            <div class="hero-content">
                <h1 class="hero-title">
                    {
                        props.content.title_lines.iter().map(|line| html! {
                            <span class="hero-title-line">{line.clone()}<br/></span>
                        }).collect::<Html>()
                    }
                </h1>
                {subtitle(&props.content)}
                <div class="hero-actions">
                    <button class="hero-cta">{props.content.primary_cta.clone()}</button>
                    <a href="#services" class="hero-secondary">
                        {props.content.secondary_cta.clone()}
                        <span>{" →"}</span>
                    </a>
                </div>
            </div>
            <div class="hero-progress" style={format!("width: {:.2}%;", tunnel.progress * 100.0)}></div>
        </section>
    }
}
