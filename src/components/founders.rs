use yew::prelude::*;

use crate::config::{Founder, FoundersContent};

/// Seconds between the float cycles of neighbouring cards.
const FLOAT_OFFSET_S: f64 = 1.5;

#[derive(Properties, PartialEq)]
pub struct FoundersProps {
    pub content: FoundersContent,
}

fn founder_card(index: usize, founder: &Founder) -> Html {
    let style = format!("animation-delay: {:.1}s;", index as f64 * FLOAT_OFFSET_S);
    html! {
        <div key={founder.name.clone()} class="founder-card" style={style}>
            <img class="founder-photo" src={founder.image.clone()} alt={founder.name.clone()} />
            <div class="founder-details">
                <h3>{founder.name.clone()}</h3>
                <span class="founder-title">{founder.title.clone()}</span>
                <p>{founder.bio.clone()}</p>
                <div class="founder-socials">
                    {
                        founder.socials.iter().map(|link| html! {
                            <a href={link.href.clone()} target="_blank" rel="noopener noreferrer">
                                {link.label.clone()}
                            </a>
                        }).collect::<Html>()
                    }
                </div>
            </div>
        </div>
    }
}

#[function_component(Founders)]
pub fn founders(props: &FoundersProps) -> Html {
    html! {
        <section id="founders" class="founders">
            <style>
                {r#"
                    .founders { padding: 6rem 1.5rem; background: #050505; }
                    .founders-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(320px, 1fr)); gap: 2rem; max-width: 72rem; margin: 0 auto; }
                    .founder-card { animation: founder-float 3s ease-in-out infinite alternate; }
                    .founder-photo { width: 6rem; height: 6rem; border-radius: 1rem; object-fit: cover; }
                    @keyframes founder-float {
                        from { transform: translateY(0); }
                        to { transform: translateY(-10px); }
                    }
                "#}
            </style>
            <h2 class="founders-heading">{props.content.heading.clone()}</h2>
            <div class="founders-grid">
                {
                    props.content.people.iter().enumerate()
                        .map(|(index, founder)| founder_card(index, founder))
                        .collect::<Html>()
                }
            </div>
        </section>
    }
}
