use yew::prelude::*;

use crate::config::{Logo, MarqueeContent};

#[derive(Properties, PartialEq)]
pub struct LogoMarqueeProps {
    pub content: MarqueeContent,
}

/// The track is the logo list twice over so the CSS loop at -50% is seamless.
fn marquee_track(logos: &[Logo]) -> impl Iterator<Item = &Logo> {
    logos.iter().chain(logos.iter())
}

#[function_component(LogoMarquee)]
pub fn logo_marquee(props: &LogoMarqueeProps) -> Html {
    html! {
        <section class="logo-marquee">
            <style>
                {r#"
                    .logo-marquee { position: relative; padding-top: 12rem; background: #050505; overflow: hidden; }
                    .marquee-window { position: relative; max-width: 56rem; margin: 0 auto; overflow: hidden; }
                    .marquee-track { display: flex; width: max-content; animation: marquee 30s linear infinite; }
                    .marquee-item { display: flex; align-items: center; gap: 0.5rem; margin: 0 2.5rem; flex-shrink: 0; color: #9ca3af; }
                    .marquee-item:hover { color: #fff; }
                    @keyframes marquee {
                        from { transform: translateX(0); }
                        to { transform: translateX(-50%); }
                    }
                "#}
            </style>
            <p class="marquee-heading">{props.content.heading.clone()}</p>
            <div class="marquee-window">
                <div class="marquee-track">
                    {
                        marquee_track(&props.content.logos).map(|logo| html! {
                            <div class="marquee-item">
                                <span class="marquee-icon">{logo.icon.clone()}</span>
                                <span class="marquee-name">{logo.name.clone()}</span>
                            </div>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </section>
    }
}
