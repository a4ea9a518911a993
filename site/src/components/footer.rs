use leptos::prelude::*;

use crate::types::NavLink;

#[component]
pub fn Footer(brand: String, year: u16, links: Vec<NavLink>) -> impl IntoView {
    let copyright = format!("\u{a9} {} {}. All rights reserved.", year, brand);

    view! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div>
                    <div class="footer-brand">{brand}</div>
                    <div class="footer-copyright">{copyright}</div>
                </div>
                <div class="footer-links">
                    {links.into_iter().map(|link| {
                        let href = link.href();
                        view! { <a href=href class="footer-link">{link.label}</a> }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </footer>
    }
}
