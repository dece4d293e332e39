use yew::prelude::*;
use yew_router::prelude::*;
use log::info;
use web_sys::MouseEvent;
use gloo_events::EventListener;

mod config;
mod dom;
mod error;
mod hooks;
mod animation {
    pub mod path;
    pub mod pin;
    pub mod progress;
    pub mod smoothing;
    pub mod stages;
    pub mod timeline;
    pub mod tunnel;
    pub mod virtual_scroll;
    pub mod word_cycle;
}
mod components {
    pub mod footer;
    pub mod founders;
    pub mod hero;
    pub mod lifecycle;
    pub mod logo_marquee;
    pub mod pinned_scroll;
    pub mod services;
    pub mod tech_lab;
}
mod pages {
    pub mod home;
}

use config::{Link as NavLink, SiteContent};
use pages::home::Home;

/// Scroll offset after which the navigation bar gets its solid background.
const NAV_SCROLLED_AT: f64 = 80.0;

fn nav_is_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAV_SCROLLED_AT
}

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: String,
    pub links: Vec<NavLink>,
    pub cta: String,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, links, cta } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = match dom::window() {
                Ok(window) => {
                    let page = window.clone();
                    Some(EventListener::new(&window, "scroll", move |_| {
                        is_scrolled.set(nav_is_scrolled(dom::scroll_y(&page)));
                    }))
                }
                Err(err) => {
                    log::warn!("navigation scroll listener not attached: {}", err);
                    None
                }
            };

            move || drop(listener)
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-logo">
                <span class="nav-logo-mark">{"⌘"}</span>
                {brand.clone()}
            </div>
            <div class="nav-separator"></div>
            <button class="burger-menu" onclick={toggle_menu}>
                <span></span>
                <span></span>
                <span></span>
            </button>
            <div class={menu_class}>
                {
                    links.iter().map(|link| html! {
                        <a href={link.href.clone()} class="nav-link" onclick={close_menu.clone()}>
                            {link.label.clone()}
                        </a>
                    }).collect::<Html>()
                }
            </div>
            <button class="nav-cta">{cta.clone()}</button>
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct SwitchProps {
    content: SiteContent,
}

fn switch(routes: Route, content: &SiteContent) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home content={content.clone()} /> }
        },
        Route::NotFound => {
            info!("Unknown route, showing home link");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="forward-link">
                        {"Back to the start"}
                    </Link<Route>>
                </div>
            }
        },
    }
}

#[function_component(Routes)]
fn routes(props: &SwitchProps) -> Html {
    let content = props.content.clone();
    html! {
        <Switch<Route> render={move |route| switch(route, &content)} />
    }
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| match SiteContent::bundled() {
        Ok(content) => Some(content),
        Err(err) => {
            gloo_console::error!(format!("site content unavailable: {}", err));
            None
        }
    }, ());

    match &*content {
        Some(content) => html! {
            <BrowserRouter>
                <div class={classes!("site", content.theme.class())}>
                    <Nav
                        brand={content.brand.clone()}
                        links={content.navigation.clone()}
                        cta={content.nav_cta.clone()}
                    />
                    <Routes content={content.clone()} />
                </div>
            </BrowserRouter>
        },
        None => html! {
            <div class="site theme-dark">
                <p class="content-error">{"Something went wrong loading this page."}</p>
            </div>
        },
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", err));
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_turns_solid_past_threshold() {
        assert!(!nav_is_scrolled(0.0));
        assert!(!nav_is_scrolled(80.0));
        assert!(nav_is_scrolled(80.5));
    }
}
