use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::founders::Founders;
use crate::components::hero::Hero;
use crate::components::lifecycle::Lifecycle;
use crate::components::logo_marquee::LogoMarquee;
use crate::components::pinned_scroll::PinnedScrollSection;
use crate::components::services::Services;
use crate::components::tech_lab::TechLab;
use crate::config::SiteContent;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub content: SiteContent,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let content = &props.content;
    let animation = content.animation;

    // The hero tunnel only engages at the top of the page, so start there.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <main class="home">
            <Hero content={content.hero.clone()} tunnel={animation.tunnel} />
            <LogoMarquee content={content.marquee.clone()} />
            <Lifecycle content={content.lifecycle.clone()} config={animation.lifecycle} />
            <PinnedScrollSection content={content.pinned.clone()} config={animation.pinned} />
            <Founders content={content.founders.clone()} />
            <TechLab content={content.tech_lab.clone()} interval_ms={animation.word_interval_ms()} />
            <Services content={content.services.clone()} />
            <Footer content={content.footer.clone()} config={animation.footer} />
        </main>
    }
}
