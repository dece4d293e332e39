use yew::prelude::*;

use crate::config::ServicesContent;

#[derive(Properties, PartialEq)]
pub struct ServicesProps {
    pub content: ServicesContent,
}

#[function_component(Services)]
pub fn services(props: &ServicesProps) -> Html {
    let content = &props.content;

    html! {
        <section id="services" class="services">
            <style>
                {r#"
                    .services { position: relative; padding: 6rem 0; background: #050505; overflow: hidden; }
                    .services-grid { display: grid; grid-template-columns: repeat(auto-fit, 300px); justify-content: center; gap: 2rem; }
                    .service-hex {
                        position: relative;
                        width: 300px;
                        height: 340px;
                        clip-path: polygon(50% 0%, 100% 25%, 100% 75%, 50% 100%, 0% 75%, 0% 25%);
                        transition: transform 0.3s;
                    }
                    .service-hex:hover { transform: translateY(-0.5rem); }
                    .accent-violet { --accent: #7c3aed; }
                    .accent-pink { --accent: #db2777; }
                    .accent-cyan { --accent: #0891b2; }
                    .accent-orange { --accent: #f97316; }
                    .accent-blue { --accent: #2563eb; }
                    .accent-emerald { --accent: #059669; }
                "#}
            </style>
            <div class="services-header">
                <h2>{content.heading.clone()}</h2>
                <p>{content.subtitle.clone()}</p>
            </div>
            <div class="services-grid">
                {
                    content.items.iter().map(|service| html! {
                        <div key={service.title.clone()} class={classes!("service-hex", format!("accent-{}", service.accent))}>
                            <div class="service-body">
                                <h3>{service.title.clone()}</h3>
                                <p>{service.description.clone()}</p>
                            </div>
                        </div>
                    }).collect::<Html>()
                }
            </div>
        </section>
    }
}
