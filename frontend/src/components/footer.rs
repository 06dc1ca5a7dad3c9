use yew::{html, Component, Context, Html};

/// Site footer shown under every page.
pub struct Footer {
    year: u32,
}

impl Component for Footer {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            year: js_sys::Date::new_0().get_full_year(),
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <footer class="footer">
                <div class="footer-inner">
                    <div class="footer-top">
                        <div class="footer-brand">
                            <h3 class="footer-logo">{"PrimeHomes"}</h3>
                            <p class="footer-tagline">{"Find your perfect property in Sri Lanka"}</p>
                            <div class="footer-social">
                                { external_link("https://www.linkedin.com/in/sanaraperera/", "LinkedIn") }
                                { external_link("https://github.com/Sanara-Perera/PrimeHomes", "Github") }
                                { external_link("https://www.instagram.com/_sanara_03/", "Instagram") }
                            </div>
                            <div class="footer-contact">
                                <a href="mailto:info@primehomes.lk">{"info@primehomes.lk"}</a>
                            </div>
                        </div>
                        <div class="f-col">
                            <h4>{"Properties"}</h4>
                            <ul>
                                <li><a href="#search">{"Search"}</a></li>
                                <li><a href="#favourites">{"Favourites"}</a></li>
                            </ul>
                        </div>
                    </div>
                    <div class="footer-bottom">
                        <div class="legal">{format!("© {} PrimeHomes. All rights reserved.", self.year)}</div>
                    </div>
                </div>
            </footer>
        }
    }
}

fn external_link(href: &'static str, label: &'static str) -> Html {
    html! {
        <a href={href} target="_blank" rel="noopener noreferrer" class="social">{label}</a>
    }
}
