use yew::prelude::*;

use crate::config::{FooterConfig, FooterContent};
use crate::hooks::use_page_rotation;

const PETALS: usize = 5;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub content: FooterContent,
    pub config: FooterConfig,
}

#[derive(Properties, PartialEq)]
struct FlowerProps {
    rotation: f64,
    class: &'static str,
}

#[function_component(FooterFlower)]
fn footer_flower(props: &FlowerProps) -> Html {
    html! {
        <svg
            class={classes!("footer-flower", props.class)}
            viewBox="0 0 400 400"
            style={format!("transform: rotate({:.2}deg);", props.rotation)}
        >
            {
                (0..PETALS).map(|i| {
                    let angle = i as f64 * 360.0 / PETALS as f64;
                    let fill = if i % 2 == 0 { "#111" } else { "#7c3aed" };
                    html! {
                        <g transform={format!("rotate({} 200 200)", angle)}>
                            <path
                                d="M200 50 Q230 120 220 180 Q210 200 200 200 Q190 200 180 180 Q170 120 200 50Z"
                                fill={fill}
                            />
                        </g>
                    }
                }).collect::<Html>()
            }
        </svg>
    }
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let FooterProps { content, config } = props;
    let rotation = use_page_rotation(*config);

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer { position: relative; padding: 5rem 0; background: #050505; border-top: 1px solid rgba(31, 41, 55, 0.5); overflow: hidden; }
                    .footer-flower { position: absolute; width: 16rem; height: 16rem; will-change: transform; }
                    .footer-flower.right { right: -4rem; top: 2rem; }
                    .footer-flower.left { left: -4rem; bottom: 2rem; }
                    .footer-grid { position: relative; z-index: 1; display: grid; grid-template-columns: 2fr 1fr 1fr; gap: 3rem; }
                "#}
            </style>
            <FooterFlower rotation={rotation} class="right" />
            <FooterFlower rotation={-rotation} class="left" />
            <div class="footer-grid">
                <p class="footer-tagline">{content.tagline.clone()}</p>
                {
                    content.columns.iter().map(|column| html! {
                        <div class="footer-column">
                            <h4>{column.heading.clone()}</h4>
                            <ul>
                                {
                                    column.links.iter().map(|link| html! {
                                        <li><a href={link.href.clone()}>{link.label.clone()}</a></li>
                                    }).collect::<Html>()
                                }
                            </ul>
                        </div>
                    }).collect::<Html>()
                }
            </div>
            <div class="footer-bottom">
                <p>{content.copyright.clone()}</p>
                <div class="footer-legal">
                    {
                        content.legal.iter().map(|link| html! {
                            <a href={link.href.clone()}>{link.label.clone()}</a>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </footer>
    }
}
